//! End-to-end flow through the core crate: fixtures → state loop → runner
//! and fetch, the way the terminal front-end drives it.

use ensayar_core::{
    fixtures, Category, Command, FetchPhase, MockApi, PlaygroundMsg, PlaygroundState, Status,
    Store, XorShift64,
};
use std::time::Duration;

fn page(seed: u64) -> PlaygroundState {
    PlaygroundState::new(
        fixtures::sample_cases(),
        MockApi::default().latency(Duration::from_millis(500)),
        XorShift64::new(seed),
    )
}

#[test]
fn run_tests_then_group_matches_page_layout() {
    let mut store = Store::new(page(42));
    store.dispatch(PlaygroundMsg::RunTests);

    let grouped = ensayar_core::group_by_category(store.state().cases());
    // Fixture order: unit, integration, then the ui block.
    let keys: Vec<Category> = grouped.iter().map(|(category, _)| *category).collect();
    assert_eq!(keys, vec![Category::Unit, Category::Integration, Category::Ui]);
    assert_eq!(grouped[2].1.len(), 3);
    assert!(store
        .state()
        .cases()
        .iter()
        .all(|case| case.status != Status::Pending));
}

#[test]
fn repeated_runs_keep_identity_stable() {
    let mut store = Store::new(page(7));
    let ids: Vec<_> = store.state().cases().iter().map(|c| c.id).collect();
    for _ in 0..10 {
        store.dispatch(PlaygroundMsg::RunTests);
        let after: Vec<_> = store.state().cases().iter().map(|c| c.id).collect();
        assert_eq!(ids, after);
    }
    assert_eq!(store.state().runs(), 10);
}

#[tokio::test(start_paused = true)]
async fn fetch_flow_reveals_payload_after_delay() {
    let mut store = Store::new(page(42));
    let command = store.dispatch(PlaygroundMsg::FetchRequested);
    assert!(store.state().is_loading());

    let Command::Task(future) = command else {
        panic!("fetch must produce a task");
    };
    let settled = future.await;
    store.dispatch(settled);

    assert_eq!(store.state().fetch(), &FetchPhase::Idle);
    assert_eq!(store.state().user(), Some(&fixtures::sample_user()));
}

#[tokio::test(start_paused = true)]
async fn two_pages_fetch_concurrently_without_interference() {
    let api = MockApi::default();
    let start = tokio::time::Instant::now();
    let (a, b) = tokio::join!(api.fetch_user(), api.fetch_user());
    assert_eq!(a.unwrap().data, b.unwrap().data);
    assert!(start.elapsed() >= Duration::from_millis(500));
}
