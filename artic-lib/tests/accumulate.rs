//! Row accumulation against an in-memory collection.

mod common;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use artic_lib::api::Page;
use artic_lib::list::{ListConfig, ListState, StopReason, accumulate};

use common::{FakeCollection, ids};

/// A state that has loaded `page` of a collection of `total` records.
fn state_at(page: u32, page_size: u32, total: u64) -> ListState {
    let config = ListConfig::default()
        .with_initial_page(page)
        .with_page_size(page_size);
    let mut state = ListState::new(&config);
    let request = state.begin_load();
    let records = Vec::new();
    let page = Page::new(records, artic_lib::api::Pagination::with_total(total));
    state.finish_load(request.ticket, Ok(page));
    state
}

#[tokio::test]
async fn test_fetches_until_target_is_reached() {
    let source = FakeCollection::new(100);
    let mut state = state_at(1, 12, 100);
    let request = state.begin_accumulate("15").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(result.stop, StopReason::Filled);
    assert_eq!(result.pages_fetched, 2);
    assert_eq!(source.requests(), vec![(1, 12), (2, 12)]);
    assert_eq!(ids(&result.records), (1..=24).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_single_page_is_enough() {
    let source = FakeCollection::new(100);
    let mut state = state_at(1, 12, 100);
    let request = state.begin_accumulate("12").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(result.stop, StopReason::Filled);
    assert_eq!(source.requested_pages(), vec![1]);
}

#[tokio::test]
async fn test_starts_from_current_page() {
    let source = FakeCollection::new(100);
    let mut state = state_at(3, 10, 100);
    let request = state.begin_accumulate("11").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(source.requested_pages(), vec![3, 4]);
    assert_eq!(ids(&result.records), (21..=40).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_stops_after_last_page() {
    let source = FakeCollection::new(30);
    let mut state = state_at(2, 12, 30);
    let request = state.begin_accumulate("500").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(result.stop, StopReason::Exhausted);
    assert_eq!(source.requested_pages(), vec![2, 3]);
    assert_eq!(ids(&result.records), (13..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_page_count_is_frozen_at_start() {
    // The state believes there are 24 records; the server has more.
    let source = FakeCollection::new(1000);
    let mut state = state_at(1, 12, 24);
    let request = state.begin_accumulate("100").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(result.stop, StopReason::Exhausted);
    assert_eq!(source.requested_pages(), vec![1, 2]);
    assert_eq!(result.records.len(), 24);
}

#[tokio::test]
async fn test_unknown_total_fetches_nothing() {
    let source = FakeCollection::new(100);
    let mut state = state_at(1, 12, 0);
    let request = state.begin_accumulate("5").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(result.stop, StopReason::Exhausted);
    assert!(source.requests().is_empty());
    assert!(result.records.is_empty());
}

#[tokio::test]
async fn test_failure_keeps_partial_buffer() {
    let source = FakeCollection::new(100).failing_on(3);
    let mut state = state_at(1, 12, 100);
    let request = state.begin_accumulate("50").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(result.stop, StopReason::Interrupted);
    assert_eq!(result.pages_fetched, 2);
    assert_eq!(source.requested_pages(), vec![1, 2, 3]);
    assert_eq!(ids(&result.records), (1..=24).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_duplicates_are_not_removed() {
    // One record is inserted at the front between the first and second fetch,
    // so record 12 shows up again at the top of page 2.
    let source = FakeCollection::new(100).shifting_by(1);
    let mut state = state_at(1, 12, 100);
    let request = state.begin_accumulate("14").unwrap();

    let result = accumulate(&source, &request, &CancellationToken::new()).await;

    assert_eq!(result.records.len(), 24);
    assert_eq!(result.records[11].id, result.records[12].id);
}

#[tokio::test]
async fn test_cancelled_before_start() {
    let source = Arc::new(FakeCollection::new(100));
    let mut state = state_at(1, 12, 100);
    let request = state.begin_accumulate("50").unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = accumulate(&source, &request, &cancel).await;

    assert_eq!(result.stop, StopReason::Cancelled);
    assert!(source.requests().is_empty());
}
