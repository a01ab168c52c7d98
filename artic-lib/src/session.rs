//! Sequential driver for the artwork list.

use log::info;
use tokio_util::sync::CancellationToken;

use crate::api::PageSource;
use crate::error::Error;
use crate::list::ListConfig;
use crate::list::ListState;
use crate::list::LoadRequest;
use crate::list::PageChange;
use crate::list::StopReason;
use crate::list::accumulate;
use crate::model::ArtworkId;

/// Owns a [`ListState`] and the source it loads from, and runs each
/// operation to completion before returning.
///
/// Front ends that need to stay responsive while requests are in flight
/// use the `begin_*`/`finish_*` transitions on [`ListState`] directly; this
/// type is the same flow with the awaiting done for you.
///
/// # Example
///
/// ```ignore
/// use artic_lib::{ArticClient, list::ListConfig, session::ListSession};
///
/// let mut session = ListSession::new(ArticClient::new()?, ListConfig::default());
/// session.mount().await;
///
/// session.submit_row_count("15").await?;
/// assert_eq!(session.state().selection().len(), 15);
/// ```
pub struct ListSession<S> {
    source: S,
    state: ListState,
}

impl<S: PageSource> ListSession<S> {
    pub fn new(source: S, config: ListConfig) -> Self {
        Self {
            source,
            state: ListState::new(&config),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads the initial page.
    pub async fn mount(&mut self) {
        let request = self.state.begin_load();
        self.load(request).await;
    }

    /// Re-runs the page load for the current page and page size.
    pub async fn reload(&mut self) {
        let request = self.state.begin_load();
        self.load(request).await;
    }

    /// Applies a paginator event, loading the new page if it changed.
    ///
    /// Returns `true` if a load was performed.
    pub async fn change_page(&mut self, change: PageChange) -> bool {
        match self.state.change_page(change) {
            Some(request) => {
                self.load(request).await;
                true
            }
            None => false,
        }
    }

    /// Parses `input` as a row count and selects that many rows starting
    /// from the current page.
    ///
    /// Invalid input returns [`Error::InvalidRowCount`] and leaves the state
    /// untouched. Fetch failures are not errors here: they end the run early
    /// and show up as [`StopReason::Interrupted`].
    pub async fn submit_row_count(&mut self, input: &str) -> Result<StopReason, Error> {
        let request = self.state.begin_accumulate(input)?;
        let accumulation = accumulate(&self.source, &request, &CancellationToken::new()).await;
        let stop = accumulation.stop;

        info!(
            "Selected {} of {} requested rows ({:?})",
            accumulation.records.len().min(request.target.get()),
            request.target.get(),
            stop
        );
        self.state.finish_accumulate(request.ticket, accumulation);
        Ok(stop)
    }

    /// Toggles the checkbox of a displayed row.
    pub fn toggle_selected(&mut self, id: ArtworkId) -> bool {
        self.state.toggle_selected(id)
    }

    async fn load(&mut self, request: LoadRequest) {
        let result = self
            .source
            .fetch_page(request.page, request.page_size)
            .await;
        self.state.finish_load(request.ticket, result);
    }
}
