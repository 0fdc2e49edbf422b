//! Terminal front-end for the Ensayar playground.
//!
//! The page renders into styled lines (see `ensayar-widgets`); this crate
//! owns the crossterm backend, the color theme, and the event loop that
//! bridges synchronous input to the async mock API.

pub mod app;
pub mod backend;
pub mod error;
pub mod theme;

pub use app::{App, TICK};
pub use backend::{CrosstermBackend, TerminalBackend};
pub use error::TuiError;
pub use theme::Theme;
