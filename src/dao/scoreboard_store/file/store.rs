use std::{
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tempfile::NamedTempFile;
use tokio::{fs, task};
use tracing::info;

use crate::{
    dao::{
        scoreboard_store::{LoadedDocument, ScoreboardStore, to_pretty_json},
        storage::{StoreError, StoreResult},
    },
    state::scoreboard::ScoreboardDocument,
};

use super::error::{FileStoreError, FileStoreResult};

/// Scoreboard backend keeping the document as a pretty-printed JSON file on local disk.
#[derive(Debug, Clone)]
pub struct FileScoreboardStore {
    path: Arc<Path>,
}

impl FileScoreboardStore {
    /// Store the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::from(path.into()),
        }
    }

    /// Location of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Directory holding the document; staging files must live there for the rename to be atomic.
fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

async fn exists(path: &Path) -> FileStoreResult<bool> {
    fs::try_exists(path)
        .await
        .map_err(|source| FileStoreError::Inspect {
            path: path.to_path_buf(),
            source,
        })
}

async fn replace(path: &Path, doc: &ScoreboardDocument) -> FileStoreResult<()> {
    let contents = to_pretty_json(doc).map_err(|source| FileStoreError::Serialize { source })?;
    let path = path.to_path_buf();

    task::spawn_blocking(move || write_staged(&path, contents.as_bytes()))
        .await
        .map_err(|source| FileStoreError::Join { source })?
}

/// Write `contents` to a uniquely named sibling file, then rename it over `path`.
///
/// Every call gets its own staging file, so concurrent saves never clobber each other's
/// partial output and readers only ever see a complete document.
fn write_staged(path: &Path, contents: &[u8]) -> FileStoreResult<()> {
    let dir = parent_dir(path);
    let mut staging = NamedTempFile::new_in(dir).map_err(|source| FileStoreError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    // Staging files are created owner-only; keep whatever mode the document already had.
    if let Ok(existing) = std::fs::metadata(path) {
        staging
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|source| FileStoreError::Write {
                path: staging.path().to_path_buf(),
                source,
            })?;
    }
    staging
        .write_all(contents)
        .map_err(|source| FileStoreError::Write {
            path: staging.path().to_path_buf(),
            source,
        })?;
    staging
        .persist(path)
        .map_err(|err| FileStoreError::Replace {
            path: path.to_path_buf(),
            source: err.error,
        })?;
    Ok(())
}

impl ScoreboardStore for FileScoreboardStore {
    fn initialize(&self) -> BoxFuture<'static, StoreResult<bool>> {
        let path = Arc::clone(&self.path);
        Box::pin(async move {
            if exists(&path).await? {
                return Ok(false);
            }
            info!(path = %path.display(), "creating initial scoreboard document");
            replace(&path, &ScoreboardDocument::seed()).await?;
            Ok(true)
        })
    }

    fn read(&self) -> BoxFuture<'static, StoreResult<LoadedDocument>> {
        let path = Arc::clone(&self.path);
        Box::pin(async move {
            match fs::read_to_string(&path).await {
                Ok(contents) => Ok(LoadedDocument::from_json(&contents)),
                Err(err) if err.kind() == ErrorKind::NotFound => Err(StoreError::Missing),
                // Non UTF-8 bytes are corrupt content, not an I/O failure.
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    Ok(LoadedDocument::Unparseable {
                        reason: err.to_string(),
                    })
                }
                Err(source) => Err(FileStoreError::Read {
                    path: path.to_path_buf(),
                    source,
                }
                .into()),
            }
        })
    }

    fn write(&self, doc: ScoreboardDocument) -> BoxFuture<'static, StoreResult<()>> {
        let path = Arc::clone(&self.path);
        Box::pin(async move {
            replace(&path, &doc).await?;
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StoreResult<()>> {
        let path = Arc::clone(&self.path);
        Box::pin(async move {
            let dir = parent_dir(&path);
            fs::metadata(dir)
                .await
                .map_err(|source| FileStoreError::Inspect {
                    path: dir.to_path_buf(),
                    source,
                })?;
            Ok(())
        })
    }
}
