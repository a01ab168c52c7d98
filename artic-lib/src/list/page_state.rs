//! Page framing and paginator events.

/// Where the list currently is in the collection.
///
/// `current_page` is deliberately not validated against [`total_pages`]:
/// the server decides what an out-of-range page looks like.
///
/// [`total_pages`]: PageState::total_pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based page index.
    pub current_page: u32,
    /// Rows per page.
    pub page_size: u32,
    /// Server-reported size of the collection.
    pub total_records: u64,
}

impl PageState {
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page,
            page_size,
            total_records: 0,
        }
    }

    /// `ceil(total_records / page_size)`, or 0 for a zero page size.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_records.div_ceil(u64::from(self.page_size))
    }

    /// 0-based index of the first row on the current page.
    pub fn first_row(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// A page-change event from the paginator widget.
///
/// The widget speaks in 0-based row offsets; the list speaks in 1-based
/// pages. The conversion is `page = first / rows + 1` with integer division.
///
/// # Example
///
/// ```
/// use artic_lib::list::PageChange;
///
/// let change = PageChange::new(24, 12);
/// assert_eq!(change.page(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// 0-based index of the first row of the requested page.
    pub first: u64,
    /// Requested rows per page.
    pub rows: u32,
}

impl PageChange {
    pub fn new(first: u64, rows: u32) -> Self {
        Self { first, rows }
    }

    /// Event for jumping to `page` while keeping the current page size.
    pub fn to_page(state: &PageState, page: u32) -> Self {
        let page = page.max(1);
        Self {
            first: u64::from(page - 1) * u64::from(state.page_size),
            rows: state.page_size,
        }
    }

    /// Event for switching to `rows` per page.
    ///
    /// The rows-per-page control restarts from the first row, so this always
    /// lands on page 1.
    pub fn with_rows(rows: u32) -> Self {
        Self { first: 0, rows }
    }

    /// The 1-based page this event selects.
    pub fn page(&self) -> u32 {
        if self.rows == 0 {
            return 1;
        }
        let page = self.first / u64::from(self.rows) + 1;
        u32::try_from(page).unwrap_or(u32::MAX)
    }
}
