//! Data model for the playground: test cases and the mock user payload.
//!
//! Records are constructed once at startup from literal fixtures. Identity
//! (`id`, `name`, `code`, `category`) never changes afterwards; only
//! [`Status`] moves, and only through the runner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a test case within a case list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CaseId(pub u32);

impl CaseId {
    /// Create a new case ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Suite a test case belongs to.
///
/// A closed set: an invalid category cannot be represented, so grouping
/// never has to handle unknown keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Pure logic tests.
    Unit,
    /// Tests crossing a collaborator boundary.
    Integration,
    /// Rendering and interaction tests.
    Ui,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Unit, Self::Integration, Self::Ui];

    /// Lowercase display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::Ui => "ui",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pass/fail/pending state of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Initial state; never re-assigned once a run has happened.
    #[default]
    Pending,
    /// The last run counted this case as passing.
    Passing,
    /// The last run counted this case as failing.
    Failing,
}

impl Status {
    /// Lowercase display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Passing => "passing",
            Self::Failing => "failing",
        }
    }

    /// Whether a run has produced this status. `Pending` is the only
    /// unsettled state.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A displayed test case with its source snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Identity, unique within a list.
    pub id: CaseId,
    /// Human-readable description.
    pub name: String,
    /// Source snippet shown under the name. Display text only; it is never
    /// compiled or executed.
    pub code: String,
    /// Suite this case is grouped under.
    pub category: Category,
    /// Outcome of the most recent run.
    #[serde(default)]
    pub status: Status,
}

impl TestCase {
    /// Create a pending case with an empty snippet.
    #[must_use]
    pub fn new(id: CaseId, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            code: String::new(),
            category,
            status: Status::default(),
        }
    }

    /// Set the source snippet.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Set the status.
    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Constant user payload resolved by the mock API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

impl UserProfile {
    /// Create a profile.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
