//! Core types and state management for the Ensayar playground.
//!
//! This crate holds everything below the presentation layer:
//! - Data model: [`TestCase`], [`Category`], [`Status`], [`UserProfile`]
//! - Mock API boundary: [`MockApi`] behind a cancellable [`Delay`]
//! - Status randomizer and grouping: [`runner`]
//! - Elm-style state loop: [`State`], [`Command`], [`Store`]

pub mod api;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod playground;
pub mod rng;
pub mod runner;
pub mod state;
pub mod timer;

pub use api::{ApiResponse, MockApi, PendingFetch, MAX_DELAY, MIN_DELAY};
pub use error::ApiError;
pub use model::{CaseId, Category, Status, TestCase, UserProfile};
pub use playground::{FetchPhase, PlaygroundMsg, PlaygroundState};
pub use rng::{RandomSource, XorShift64, DEFAULT_SEED, SEED_ENV_VAR};
pub use runner::{group_by_category, randomize, RunSummary, FAIL_THRESHOLD};
pub use state::{Command, State, Store};
pub use timer::{Cancelled, Delay, DelayHandle};
