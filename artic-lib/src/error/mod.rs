//! Error types

mod api;
mod input;

pub use api::*;
pub use input::*;

/// Top-level error for library operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request to the artwork API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The user-entered row count could not be used.
    #[error(transparent)]
    InvalidRowCount(#[from] RowCountError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(ApiError::from(err))
    }
}
