//! Test runner panel: the grouped case list with status glyphs.

use crate::panel::Panel;
use crate::text::{Line, Span, Tone};
use ensayar_core::{group_by_category, RunSummary, Status, TestCase};

/// Glyph shown before a case name.
#[must_use]
pub const fn status_glyph(status: Status) -> &'static str {
    match status {
        Status::Pending => "○",
        Status::Passing => "✓",
        Status::Failing => "✗",
    }
}

/// Tone a status renders in.
#[must_use]
pub const fn status_tone(status: Status) -> Tone {
    match status {
        Status::Pending => Tone::Muted,
        Status::Passing => Tone::Success,
        Status::Failing => Tone::Failure,
    }
}

/// Snapshot panel over the current case list.
#[derive(Debug, Clone)]
pub struct TestRunnerPanel {
    cases: Vec<TestCase>,
    runs: u32,
}

impl TestRunnerPanel {
    /// Snapshot the current list and run counter.
    #[must_use]
    pub fn new(cases: &[TestCase], runs: u32) -> Self {
        Self {
            cases: cases.to_vec(),
            runs,
        }
    }

    fn heading(category_label: &str) -> Line {
        let mut chars = category_label.chars();
        let capitalized = chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        });
        Line::from(Span::new(format!("{capitalized} tests")).tone(Tone::Heading).bold())
    }

    fn case_row(case: &TestCase) -> Line {
        Line::new()
            .push(Span::new("  "))
            .push(Span::new(status_glyph(case.status)).tone(status_tone(case.status)))
            .push(Span::new(" "))
            .push(Span::new(case.name.clone()).bold())
            .push(Span::new("  "))
            .push(Span::new(format!("[{}]", case.status)).tone(status_tone(case.status)))
    }

    fn code_rows(case: &TestCase) -> impl Iterator<Item = Line> + '_ {
        case.code
            .lines()
            .map(|line| Line::from(Span::new(format!("      {line}")).tone(Tone::Muted)))
    }

    fn footer(summary: RunSummary, runs: u32) -> Line {
        Line::from(
            Span::new(format!(
                "run {runs}: {} passing, {} failing",
                summary.passing, summary.failing
            ))
            .tone(Tone::Accent),
        )
    }
}

impl Panel for TestRunnerPanel {
    fn title(&self) -> &str {
        "Test Runner"
    }

    fn render(&self, width: u16) -> Vec<Line> {
        let width = usize::from(width);
        let mut lines = vec![Line::from(Span::new("press r to run tests").tone(Tone::Muted))];

        for (category, bucket) in group_by_category(&self.cases) {
            lines.push(Line::new());
            lines.push(Self::heading(category.label()));
            for case in bucket {
                lines.push(Self::case_row(case));
                lines.extend(Self::code_rows(case));
            }
        }

        if self.runs > 0 {
            lines.push(Line::new());
            lines.push(Self::footer(RunSummary::of(&self.cases), self.runs));
        }

        lines.into_iter().map(|line| line.truncated(width)).collect()
    }
}
