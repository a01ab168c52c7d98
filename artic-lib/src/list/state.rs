//! The list's state record and its transitions.

use log::debug;
use log::error;

use crate::api::Page;
use crate::error::Error;
use crate::error::RowCountError;
use crate::model::Artwork;
use crate::model::ArtworkId;

use super::Accumulation;
use super::ListConfig;
use super::PageChange;
use super::PageState;
use super::RowCount;
use super::Selection;
use super::StopReason;

/// Stamp carried by an in-flight operation.
///
/// A completion is applied only if its ticket is still the newest of its
/// kind and no page change happened since it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    sequence: u64,
}

/// A page load the caller should perform and report back through
/// [`ListState::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub page: u32,
    pub page_size: u32,
}

/// An accumulation the caller should run (see [`accumulate`](super::accumulate))
/// and report back through [`ListState::finish_accumulate`].
///
/// `total_pages` is frozen from the page state at the moment the request was
/// issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulateRequest {
    pub ticket: Ticket,
    pub start_page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub target: RowCount,
}

/// Everything the artwork list knows, in one place.
///
/// All mutation goes through the transition methods so `displayed` never
/// holds more than `page_size` rows.
#[derive(Debug, Clone)]
pub struct ListState {
    page: PageState,
    displayed: Vec<Artwork>,
    selection: Selection,
    loading: bool,
    accumulating: bool,
    page_size_options: Vec<u32>,
    generation: u64,
    load_sequence: u64,
    accumulate_sequence: u64,
}

impl ListState {
    /// Creates the state for a freshly mounted list.
    ///
    /// The list starts out loading; call [`begin_load`](Self::begin_load) to
    /// get the mount request.
    pub fn new(config: &ListConfig) -> Self {
        Self {
            page: PageState::new(config.initial_page.max(1), config.page_size),
            displayed: Vec::new(),
            selection: Selection::new(),
            loading: true,
            accumulating: false,
            page_size_options: config.page_size_options.clone(),
            generation: 0,
            load_sequence: 0,
            accumulate_sequence: 0,
        }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Records currently shown in the table.
    pub fn displayed(&self) -> &[Artwork] {
        &self.displayed
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// `true` while a page load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `true` while an accumulation is in flight.
    pub fn is_accumulating(&self) -> bool {
        self.accumulating
    }

    pub fn page_size_options(&self) -> &[u32] {
        &self.page_size_options
    }

    /// Starts a load of the current page.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.loading = true;
        self.load_sequence += 1;

        let request = LoadRequest {
            ticket: Ticket {
                generation: self.generation,
                sequence: self.load_sequence,
            },
            page: self.page.current_page,
            page_size: self.page.page_size,
        };
        debug!(
            "Fetching data for page: {} with rows: {}",
            request.page, request.page_size
        );
        request
    }

    /// Applies the outcome of a page load.
    ///
    /// On success the displayed set and total are replaced. On failure the
    /// error is logged and the previous data stays. Either way the loading
    /// flag clears. Returns `false` (and changes nothing) if the ticket is
    /// stale.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Page, Error>) -> bool {
        if ticket.generation != self.generation || ticket.sequence != self.load_sequence {
            debug!("Discarding stale page load {:?}", ticket);
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                let (records, pagination) = page.into_parts();
                self.page.total_records = pagination.total;
                self.set_displayed(records);
            }
            Err(e) => error!("Error fetching data: {}", e),
        }
        true
    }

    /// Applies a paginator event.
    ///
    /// Returns the load to perform if the page or page size actually
    /// changed. Any in-flight operation becomes stale.
    pub fn change_page(&mut self, change: PageChange) -> Option<LoadRequest> {
        let page = change.page();
        if page == self.page.current_page && change.rows == self.page.page_size {
            return None;
        }

        debug!(
            "Page change: first={} rows={} -> page {}",
            change.first, change.rows, page
        );
        self.page.current_page = page;
        self.page.page_size = change.rows;
        self.generation += 1;
        self.accumulating = false;
        Some(self.begin_load())
    }

    /// Parses the overlay input and starts an accumulation.
    ///
    /// Invalid input is rejected without touching state.
    pub fn begin_accumulate(&mut self, input: &str) -> Result<AccumulateRequest, RowCountError> {
        let target: RowCount = input.parse()?;
        Ok(self.begin_accumulate_count(target))
    }

    /// Starts an accumulation of `target` rows from the current page.
    ///
    /// A newer accumulation supersedes any still in flight.
    pub fn begin_accumulate_count(&mut self, target: RowCount) -> AccumulateRequest {
        self.accumulating = true;
        self.accumulate_sequence += 1;

        let request = AccumulateRequest {
            ticket: Ticket {
                generation: self.generation,
                sequence: self.accumulate_sequence,
            },
            start_page: self.page.current_page,
            page_size: self.page.page_size,
            total_pages: self.page.total_pages(),
            target,
        };
        debug!(
            "Accumulating {} rows from page {} of {}",
            target.get(),
            request.start_page,
            request.total_pages
        );
        request
    }

    /// Applies the buffer an accumulation produced.
    ///
    /// Selection becomes the first `target` records of the buffer and the
    /// displayed set becomes its first `page_size` records, replacing what
    /// the page load put there. Cancelled accumulations are dropped.
    /// Returns `false` if nothing was applied.
    pub fn finish_accumulate(&mut self, ticket: Ticket, accumulation: Accumulation) -> bool {
        if ticket.generation != self.generation || ticket.sequence != self.accumulate_sequence {
            debug!("Discarding stale accumulation {:?}", ticket);
            return false;
        }

        self.accumulating = false;
        if accumulation.stop == StopReason::Cancelled {
            debug!("Accumulation cancelled after {} pages", accumulation.pages_fetched);
            return false;
        }

        debug!(
            "Accumulated {} rows over {} pages ({:?})",
            accumulation.records.len(),
            accumulation.pages_fetched,
            accumulation.stop
        );

        let records = accumulation.records;
        let selected = records
            .iter()
            .take(accumulation.target.get())
            .cloned()
            .collect();
        self.selection = Selection::from_records(selected);
        self.set_displayed(records);
        true
    }

    /// Toggles the checkbox of a displayed row.
    ///
    /// Returns `false` if no displayed row has that id.
    pub fn toggle_selected(&mut self, id: ArtworkId) -> bool {
        let Some(artwork) = self.displayed.iter().find(|r| r.id == id) else {
            return false;
        };
        let records = self.selection.toggled(artwork);
        self.replace_selection(records);
        true
    }

    /// Replaces the whole selection, as the table's own change callback does.
    pub fn replace_selection(&mut self, records: Vec<Artwork>) {
        self.selection = Selection::from_records(records);
    }

    fn set_displayed(&mut self, mut records: Vec<Artwork>) {
        records.truncate(self.page.page_size as usize);
        self.displayed = records;
    }
}
