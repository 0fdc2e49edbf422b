//! Panel widgets for the Ensayar playground.
//!
//! Everything here is pure rendering: page state in, styled [`Line`]s out.
//! The terminal backend owns colors and I/O.

pub mod mock_data;
pub mod panel;
pub mod test_runner;
pub mod text;

pub use mock_data::MockDataPanel;
pub use panel::Panel;
pub use test_runner::{status_glyph, status_tone, TestRunnerPanel};
pub use text::{Line, Span, Tone};
