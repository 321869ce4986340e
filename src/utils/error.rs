// Error handling utilities
// Author: Gabriel Demetrios Lafis

use thiserror::Error;

use crate::data::DataError;
use crate::processing::ProcessingError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the error means a required trip file is missing
    pub fn is_data_not_found(&self) -> bool {
        matches!(
            self,
            AppError::Data(DataError::NotFound { .. })
                | AppError::Processing(ProcessingError::Data(DataError::NotFound { .. }))
        )
    }
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
