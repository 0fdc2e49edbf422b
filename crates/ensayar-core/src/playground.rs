//! Application state for the playground page.
//!
//! One reducer drives both panels: the test-runner list and the mock fetch.
//! The case list is only ever replaced wholesale, never patched in place,
//! and a failed fetch leaves the previous display untouched.

use crate::api::{ApiResponse, MockApi};
use crate::error::ApiError;
use crate::model::{TestCase, UserProfile};
use crate::rng::XorShift64;
use crate::runner::{self, RunSummary};
use crate::state::{Command, State};

/// Progress of the mock fetch widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No request in flight.
    #[default]
    Idle,
    /// A request is waiting out its delay.
    Loading,
    /// The last request failed. The previously fetched payload, if any,
    /// stays on display.
    Failed(ApiError),
}

/// Messages the page reacts to.
#[derive(Debug)]
pub enum PlaygroundMsg {
    /// Run-tests trigger: reassign every case status.
    RunTests,
    /// Fetch trigger: start the delayed mock request.
    FetchRequested,
    /// The in-flight fetch settled.
    FetchSettled(Result<ApiResponse, ApiError>),
}

/// Combined state of both playground panels.
#[derive(Debug, Clone)]
pub struct PlaygroundState {
    /// Test cases in display order. Replaced wholesale on every run.
    cases: Vec<TestCase>,
    /// Completed run count.
    runs: u32,
    /// Mock fetch progress.
    fetch: FetchPhase,
    /// Last successfully fetched payload.
    user: Option<UserProfile>,
    rng: XorShift64,
    api: MockApi,
}

impl PlaygroundState {
    /// Create the page state.
    ///
    /// Case ids must be unique; fixtures guarantee this for the shipped
    /// list.
    #[must_use]
    pub fn new(cases: Vec<TestCase>, api: MockApi, rng: XorShift64) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = cases.iter().map(|case| case.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|pair| pair[0] != pair[1])
            },
            "case ids must be unique"
        );
        Self {
            cases,
            runs: 0,
            fetch: FetchPhase::default(),
            user: None,
            rng,
            api,
        }
    }

    /// Cases in display order.
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// How many runs have completed.
    #[must_use]
    pub const fn runs(&self) -> u32 {
        self.runs
    }

    /// Current fetch phase.
    #[must_use]
    pub const fn fetch(&self) -> &FetchPhase {
        &self.fetch
    }

    /// Last successfully fetched payload.
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Whether a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchPhase::Loading)
    }

    /// Status counts over the current list.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary::of(&self.cases)
    }
}

impl State for PlaygroundState {
    type Message = PlaygroundMsg;

    fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
        match msg {
            PlaygroundMsg::RunTests => {
                self.cases = runner::randomize(&self.cases, &mut self.rng);
                self.runs += 1;
                Command::None
            }
            PlaygroundMsg::FetchRequested => {
                // The trigger is disabled while a request is in flight.
                if self.is_loading() {
                    return Command::None;
                }
                self.fetch = FetchPhase::Loading;
                let api = self.api.clone();
                Command::task(async move { PlaygroundMsg::FetchSettled(api.fetch_user().await) })
            }
            PlaygroundMsg::FetchSettled(Ok(response)) => {
                if response.success {
                    self.fetch = FetchPhase::Idle;
                    self.user = Some(response.data);
                } else {
                    // An unsuccessful envelope carries no usable payload.
                    self.fetch = FetchPhase::Failed(ApiError::Unavailable {
                        reason: "unsuccessful response".to_string(),
                    });
                }
                Command::None
            }
            PlaygroundMsg::FetchSettled(Err(error)) => {
                tracing::warn!(%error, "mock fetch failed");
                self.fetch = FetchPhase::Failed(error);
                Command::None
            }
        }
    }
}
