//! Tone to terminal color mapping.

use crossterm::style::Color;
use ensayar_widgets::Tone;

/// Color palette for the playground panels.
#[derive(Debug, Clone)]
pub struct Theme {
    /// De-emphasized text.
    pub muted: Color,
    /// Section headings.
    pub heading: Color,
    /// Passing statuses.
    pub success: Color,
    /// Failing statuses.
    pub failure: Color,
    /// Hints and in-progress indicators.
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            muted: Color::DarkGrey,
            heading: Color::Cyan,
            success: Color::Green,
            failure: Color::Red,
            accent: Color::Yellow,
        }
    }
}

impl Theme {
    /// Foreground color for a tone; `None` keeps the terminal default.
    #[must_use]
    pub const fn color(&self, tone: Tone) -> Option<Color> {
        match tone {
            Tone::Default => None,
            Tone::Muted => Some(self.muted),
            Tone::Heading => Some(self.heading),
            Tone::Success => Some(self.success),
            Tone::Failure => Some(self.failure),
            Tone::Accent => Some(self.accent),
        }
    }
}
