mod error;
/// File-backed store implementation.
pub mod store;

pub use error::{FileStoreError, FileStoreResult};
pub use store::FileScoreboardStore;

use crate::dao::storage::StoreError;

impl From<FileStoreError> for StoreError {
    fn from(err: FileStoreError) -> Self {
        StoreError::unavailable(err.to_string(), err)
    }
}
