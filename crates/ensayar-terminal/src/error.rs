//! Error types for the terminal front-end.

use thiserror::Error;

/// Errors the terminal app can surface.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal not available (no tty, unsupported environment).
    #[error("terminal not available")]
    TerminalNotAvailable,
}
