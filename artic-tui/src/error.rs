use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] artic_lib::error::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
