//! Target row count for bulk selection.

use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::RowCountError;

/// A validated, strictly positive number of rows to select.
///
/// # Example
///
/// ```
/// use artic_lib::list::RowCount;
///
/// let count: RowCount = " 15 ".parse().unwrap();
/// assert_eq!(count.get(), 15);
///
/// assert!("0".parse::<RowCount>().is_err());
/// assert!("abc".parse::<RowCount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCount(NonZeroUsize);

impl RowCount {
    /// Returns `None` for zero.
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for RowCount {
    type Err = RowCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RowCountError::Empty);
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| RowCountError::NotANumber(trimmed.to_string()))?;
        if value <= 0 {
            return Err(RowCountError::NotPositive(value));
        }

        usize::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| RowCountError::NotANumber(trimmed.to_string()))
    }
}
