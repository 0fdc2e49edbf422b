//! Status assignment and grouping for the displayed case list.
//!
//! No case code is ever executed. A "run" is one independent uniform draw
//! per case, flipping its status to passing or failing; that randomized
//! outcome is the intended semantics of the playground, not a placeholder
//! for a real engine.

use crate::model::{Category, Status, TestCase};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Probability mass assigned to `Failing` on each draw.
///
/// Draws strictly above this threshold pass; the rest fail.
pub const FAIL_THRESHOLD: f64 = 0.3;

/// Reassign every status from one uniform draw per case.
///
/// The returned list has the same length, ids, names, code text, and order
/// as the input; only `status` differs, and every returned status is
/// settled. `Pending` never survives a run.
#[must_use]
pub fn randomize(cases: &[TestCase], rng: &mut dyn RandomSource) -> Vec<TestCase> {
    let randomized: Vec<TestCase> = cases
        .iter()
        .map(|case| {
            let status = if rng.next_f64() > FAIL_THRESHOLD {
                Status::Passing
            } else {
                Status::Failing
            };
            case.clone().status(status)
        })
        .collect();
    let summary = RunSummary::of(&randomized);
    tracing::debug!(passing = summary.passing, failing = summary.failing, "run complete");
    randomized
}

/// Partition cases by category.
///
/// Bucket key order matches first appearance in the input; order within a
/// bucket matches input order. Pure function: the union of all buckets is
/// the input, each case exactly once.
#[must_use]
pub fn group_by_category(cases: &[TestCase]) -> Vec<(Category, Vec<&TestCase>)> {
    let mut buckets: Vec<(Category, Vec<&TestCase>)> = Vec::new();
    for case in cases {
        match buckets.iter_mut().find(|(category, _)| *category == case.category) {
            Some((_, bucket)) => bucket.push(case),
            None => buckets.push((case.category, vec![case])),
        }
    }
    buckets
}

/// Counts over a case list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total cases.
    pub total: usize,
    /// Cases whose last run passed.
    pub passing: usize,
    /// Cases whose last run failed.
    pub failing: usize,
    /// Cases that have never run.
    pub pending: usize,
}

impl RunSummary {
    /// Count statuses in a case list.
    #[must_use]
    pub fn of(cases: &[TestCase]) -> Self {
        let mut summary = Self {
            total: cases.len(),
            ..Self::default()
        };
        for case in cases {
            match case.status {
                Status::Pending => summary.pending += 1,
                Status::Passing => summary.passing += 1,
                Status::Failing => summary.failing += 1,
            }
        }
        summary
    }

    /// True once every case has a run outcome.
    #[must_use]
    pub const fn all_settled(&self) -> bool {
        self.pending == 0
    }
}
