//! Multi-page row accumulation.

use log::debug;
use log::warn;
use tokio_util::sync::CancellationToken;

use crate::api::PageSource;
use crate::model::Artwork;

use super::AccumulateRequest;
use super::RowCount;

/// Why an accumulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The buffer reached the target.
    Filled,
    /// Every page up to the frozen page count was fetched.
    Exhausted,
    /// A fetch failed; the buffer holds what came before it.
    Interrupted,
    /// The cancellation token fired.
    Cancelled,
}

/// The buffer an accumulation built, plus how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    /// Records in page order, then in API order within each page.
    /// Not deduplicated and not truncated.
    pub records: Vec<Artwork>,
    pub pages_fetched: u32,
    pub stop: StopReason,
    pub target: RowCount,
}

/// Fetches successive pages from `request.start_page` until the buffer holds
/// at least `request.target` records or the page index passes
/// `request.total_pages`.
///
/// Pages are awaited one at a time. A failed fetch ends the run with the
/// partial buffer and no retry.
pub async fn accumulate<S>(
    source: &S,
    request: &AccumulateRequest,
    cancel: &CancellationToken,
) -> Accumulation
where
    S: PageSource + ?Sized,
{
    let target = request.target.get();
    let mut records: Vec<Artwork> = Vec::new();
    let mut pages_fetched = 0;
    let mut page = request.start_page;

    let stop = loop {
        if records.len() >= target {
            break StopReason::Filled;
        }
        if u64::from(page) > request.total_pages {
            break StopReason::Exhausted;
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => break StopReason::Cancelled,
            result = source.fetch_page(page, request.page_size) => result,
        };

        match result {
            Ok(fetched) => {
                pages_fetched += 1;
                debug!("Accumulated page {} ({} rows)", page, fetched.len());
                records.extend(fetched.into_records());
            }
            Err(e) => {
                warn!("Error fetching paginated rows: {}", e);
                break StopReason::Interrupted;
            }
        }

        if records.len() >= target {
            break StopReason::Filled;
        }
        page = match page.checked_add(1) {
            Some(next) => next,
            None => break StopReason::Exhausted,
        };
    };

    Accumulation {
        records,
        pages_fetched,
        stop,
        target: request.target,
    }
}
