//! Mock data panel: fetch trigger plus the revealed payload.

use crate::panel::Panel;
use crate::text::{Line, Span, Tone};
use ensayar_core::{FetchPhase, UserProfile};

/// Snapshot panel over the mock fetch widget.
#[derive(Debug, Clone)]
pub struct MockDataPanel {
    phase: FetchPhase,
    user: Option<UserProfile>,
}

impl MockDataPanel {
    /// Snapshot the current fetch phase and payload.
    #[must_use]
    pub fn new(phase: FetchPhase, user: Option<UserProfile>) -> Self {
        Self { phase, user }
    }

    /// Whether the fetch trigger is currently disabled.
    #[must_use]
    pub const fn fetch_disabled(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    fn trigger_line(&self) -> Line {
        if self.fetch_disabled() {
            Line::from(Span::new("fetching...").tone(Tone::Accent))
        } else {
            Line::from(Span::new("press f to fetch user data").tone(Tone::Muted))
        }
    }

    fn payload_lines(user: &UserProfile) -> Vec<Line> {
        let rendered = serde_json::to_string_pretty(user)
            .unwrap_or_else(|_| format!("{user:?}"));
        rendered
            .lines()
            .map(|line| Line::from(Span::new(format!("  {line}")).tone(Tone::Muted)))
            .collect()
    }
}

impl Panel for MockDataPanel {
    fn title(&self) -> &str {
        "Mock Data Example"
    }

    fn render(&self, width: u16) -> Vec<Line> {
        let width = usize::from(width);
        let mut lines = vec![self.trigger_line()];

        if let FetchPhase::Failed(error) = &self.phase {
            lines.push(Line::from(
                Span::new(format!("fetch failed: {error}")).tone(Tone::Failure),
            ));
            if self.user.is_some() {
                lines.push(Line::from(
                    Span::new("showing last fetched data").tone(Tone::Muted),
                ));
            }
        }

        if let Some(user) = &self.user {
            lines.push(Line::new());
            lines.extend(Self::payload_lines(user));
            lines.push(Line::new());
            lines.push(Line::from(
                Span::new("Mock data that would normally come from an API; tests can return it deterministically.")
                    .tone(Tone::Muted),
            ));
        }

        lines.into_iter().map(|line| line.truncated(width)).collect()
    }
}
