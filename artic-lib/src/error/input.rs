//! Row count input errors

/// Why a user-entered row count was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowCountError {
    #[error("row count is empty")]
    Empty,

    #[error("row count is not a number: {0:?}")]
    NotANumber(String),

    #[error("row count must be positive, got {0}")]
    NotPositive(i64),
}
