//! Persistence backends for the stock document.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use storefront_core::error::{AppError, ErrorKind};
use storefront_core::result::AppResult;

/// Where the stock document is read from and written to.
///
/// `read` returns `None` when no document exists yet (first run); every
/// other failure is a storage error.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Read the whole document, or `None` if it does not exist.
    async fn read(&self) -> AppResult<Option<Bytes>>;

    /// Replace the whole document.
    async fn write(&self, data: Bytes) -> AppResult<()>;
}

/// File-backed store document.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    /// Path of the JSON document.
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory of the document exists.
    async fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to create data directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }
        Ok(())
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StoreBackend for JsonFileBackend {
    async fn read(&self) -> AppResult<Option<Bytes>> {
        match fs::read(&self.path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read stock file: {}", self.path.display()),
                e,
            )),
        }
    }

    async fn write(&self, data: Bytes) -> AppResult<()> {
        self.ensure_parent().await?;
        fs::write(&self.path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write stock file: {}", self.path.display()),
                e,
            )
        })?;
        debug!(path = %self.path.display(), bytes = data.len(), "Wrote stock file");
        Ok(())
    }
}

/// In-memory store document, used by tests for a fresh store per test.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: tokio::sync::RwLock<Option<Bytes>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create an in-memory backend pre-seeded with a document.
    pub fn with_document(data: impl Into<Bytes>) -> Arc<Self> {
        Arc::new(Self {
            data: tokio::sync::RwLock::new(Some(data.into())),
        })
    }

    /// Current document contents, if any.
    pub async fn contents(&self) -> Option<Bytes> {
        self.data.read().await.clone()
    }
}

#[async_trait]
impl StoreBackend for MemoryBackend {
    async fn read(&self) -> AppResult<Option<Bytes>> {
        Ok(self.data.read().await.clone())
    }

    async fn write(&self, data: Bytes) -> AppResult<()> {
        *self.data.write().await = Some(data);
        Ok(())
    }
}
