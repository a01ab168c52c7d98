//! List configuration

/// Configuration for the artwork list.
///
/// # Example
///
/// ```
/// use artic_lib::list::ListConfig;
///
/// let config = ListConfig::default()
///     .with_page_size(20)
///     .with_page_size_options(vec![10, 20, 50]);
///
/// assert_eq!(config.initial_page, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Page shown on mount (1-based).
    ///
    /// Default: 1
    pub initial_page: u32,

    /// Rows per page on mount.
    ///
    /// Default: 12
    pub page_size: u32,

    /// Choices offered by the rows-per-page control.
    ///
    /// Default: `[5, 12, 20]`
    pub page_size_options: Vec<u32>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_page: 1,
            page_size: 12,
            page_size_options: vec![5, 12, 20],
        }
    }
}

impl ListConfig {
    /// Sets the page shown on mount. Values below 1 are clamped to 1.
    pub fn with_initial_page(mut self, page: u32) -> Self {
        self.initial_page = page.max(1);
        self
    }

    /// Sets the rows per page on mount.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the rows-per-page choices.
    pub fn with_page_size_options(mut self, options: Vec<u32>) -> Self {
        self.page_size_options = options;
        self
    }
}
