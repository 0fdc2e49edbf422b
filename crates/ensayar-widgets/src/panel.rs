//! Panel trait: the seam between page state and the terminal backend.

use crate::text::Line;

/// A titled block of styled lines.
///
/// Panels are pure: rendering reads a snapshot of state and produces lines,
/// with no I/O and no interior mutation.
pub trait Panel {
    /// Panel heading.
    fn title(&self) -> &str;

    /// Render the panel body at the given interior width.
    fn render(&self, width: u16) -> Vec<Line>;
}
