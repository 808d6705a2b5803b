use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by scoreboard backends regardless of where the document lives.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to read or write the document.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Backend-specific description of the failure.
        message: String,
        /// Original backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// Nothing is persisted even though the store was initialized.
    #[error("scoreboard document is missing")]
    Missing,
}

impl StoreError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StoreError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
