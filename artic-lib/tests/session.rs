//! End-to-end list behaviour through `ListSession`.

mod common;

use artic_lib::error::{Error, RowCountError};
use artic_lib::list::{ListConfig, PageChange, StopReason};
use artic_lib::model::ArtworkId;
use artic_lib::session::ListSession;

use common::{FakeCollection, ids};

async fn mounted(total: u64) -> ListSession<FakeCollection> {
    let mut session = ListSession::new(FakeCollection::new(total), ListConfig::default());
    session.mount().await;
    session
}

#[tokio::test]
async fn test_mount_loads_first_page() {
    let session = mounted(100).await;
    let state = session.state();

    assert!(!state.is_loading());
    assert_eq!(state.page().total_records, 100);
    assert_eq!(state.page().total_pages(), 9);
    assert_eq!(ids(state.displayed()), (1..=12).collect::<Vec<_>>());
    assert_eq!(session.source().requests(), vec![(1, 12)]);
}

#[tokio::test]
async fn test_displayed_never_exceeds_page_size() {
    for page_size in [5, 12, 20] {
        let config = ListConfig::default().with_page_size(page_size);
        let mut session = ListSession::new(FakeCollection::new(47), config);
        session.mount().await;

        for page in 1..=10 {
            let change = PageChange::to_page(session.state().page(), page);
            session.change_page(change).await;
            assert!(session.state().displayed().len() <= page_size as usize);
            assert_eq!(session.state().page().total_records, 47);
        }
    }
}

#[tokio::test]
async fn test_reload_is_idempotent() {
    let mut session = mounted(100).await;
    let first = session.state().displayed().to_vec();

    session.reload().await;

    assert_eq!(session.state().displayed(), first.as_slice());
}

#[tokio::test]
async fn test_page_change_event() {
    let mut session = mounted(100).await;

    assert!(session.change_page(PageChange::new(24, 12)).await);

    assert_eq!(session.state().page().current_page, 3);
    assert_eq!(ids(session.state().displayed()), (25..=36).collect::<Vec<_>>());
    assert_eq!(session.source().requests(), vec![(1, 12), (3, 12)]);
}

#[tokio::test]
async fn test_rows_change_reloads_first_page() {
    let mut session = mounted(100).await;
    session.change_page(PageChange::new(24, 12)).await;

    assert!(session.change_page(PageChange::with_rows(5)).await);

    assert_eq!(session.state().page().current_page, 1);
    assert_eq!(session.state().page().page_size, 5);
    assert_eq!(ids(session.state().displayed()), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_same_page_event_does_not_reload() {
    let mut session = mounted(100).await;

    assert!(!session.change_page(PageChange::new(0, 12)).await);
    assert_eq!(session.source().requests().len(), 1);
}

#[tokio::test]
async fn test_failed_page_load_keeps_stale_rows() {
    let config = ListConfig::default();
    let mut session = ListSession::new(FakeCollection::new(100).failing_on(2), config);
    session.mount().await;

    session.change_page(PageChange::new(12, 12)).await;

    let state = session.state();
    assert!(!state.is_loading());
    assert_eq!(state.page().current_page, 2);
    assert_eq!(ids(state.displayed()), (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_failed_mount_leaves_empty_table() {
    let config = ListConfig::default();
    let mut session = ListSession::new(FakeCollection::new(100).failing_on(1), config);
    session.mount().await;

    assert!(!session.state().is_loading());
    assert!(session.state().displayed().is_empty());
    assert_eq!(session.state().page().total_records, 0);
}

#[tokio::test]
async fn test_select_fifteen_rows_across_pages() {
    let mut session = mounted(100).await;

    let stop = session.submit_row_count("15").await.unwrap();

    assert_eq!(stop, StopReason::Filled);
    assert_eq!(session.source().requested_pages(), vec![1, 1, 2]);
    assert_eq!(ids(session.state().selection().records()), (1..=15).collect::<Vec<_>>());
    assert_eq!(ids(session.state().displayed()), (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_selection_starts_at_current_page() {
    let mut session = mounted(100).await;
    session.change_page(PageChange::new(24, 12)).await;

    session.submit_row_count("20").await.unwrap();

    assert_eq!(ids(session.state().selection().records()), (25..=44).collect::<Vec<_>>());
    assert_eq!(ids(session.state().displayed()), (25..=36).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_selection_shorter_than_requested_when_records_run_out() {
    let mut session = mounted(30).await;

    let stop = session.submit_row_count("100").await.unwrap();

    assert_eq!(stop, StopReason::Exhausted);
    assert_eq!(ids(session.state().selection().records()), (1..=30).collect::<Vec<_>>());
    assert_eq!(session.state().displayed().len(), 12);
}

#[tokio::test]
async fn test_accumulation_failure_uses_partial_buffer() {
    let config = ListConfig::default();
    let mut session = ListSession::new(FakeCollection::new(100).failing_on(2), config);
    session.mount().await;

    let stop = session.submit_row_count("20").await.unwrap();

    assert_eq!(stop, StopReason::Interrupted);
    assert_eq!(ids(session.state().selection().records()), (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_invalid_row_counts_are_no_ops() {
    let mut session = mounted(100).await;
    session.toggle_selected(ArtworkId(3));
    let selection = session.state().selection().clone();
    let displayed = session.state().displayed().to_vec();

    for input in ["0", "-1", "", "twelve"] {
        let err = session.submit_row_count(input).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRowCount(_)));
    }

    assert_eq!(session.state().selection(), &selection);
    assert_eq!(session.state().displayed(), displayed.as_slice());
    assert_eq!(session.source().requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_row_count_reason() {
    let mut session = mounted(100).await;
    let err = session.submit_row_count("0").await.unwrap_err();
    assert!(matches!(err, Error::InvalidRowCount(RowCountError::NotPositive(0))));
}

#[tokio::test]
async fn test_manual_toggle_replaces_bulk_selection() {
    let mut session = mounted(100).await;
    session.submit_row_count("3").await.unwrap();

    assert!(session.toggle_selected(ArtworkId(2)));

    assert_eq!(ids(session.state().selection().records()), vec![1, 3]);
}

#[tokio::test]
async fn test_selection_persists_across_page_changes() {
    let mut session = mounted(100).await;
    session.submit_row_count("15").await.unwrap();

    session.change_page(PageChange::new(36, 12)).await;

    assert_eq!(session.state().selection().len(), 15);
    assert!(session.state().selection().is_selected(ArtworkId(13)));
}
