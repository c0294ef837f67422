use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::{Config, StorageKind};
use crate::storage::driver::filesystem::FilesystemStorage;
use crate::storage::driver::gcs::GcsStorage;
use crate::storage::driver::memory::MemoryStorage;
use crate::utils::validation::is_valid_file_name;

pub mod driver;
pub mod paths;

/// Storage partition a UIDL document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Component,
    Project,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Component => "component",
            Category::Project => "project",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(Category::Component),
            "project" => Ok(Category::Project),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from object store: {status} {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid object key: {0}")]
    InvalidKey(String),
}

/// Keyed write/read of opaque documents, partitioned by [`Category`].
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    async fn write(&self, content: &str, key: &str, category: Category) -> Result<(), StoreError>;

    /// Returns `Ok(None)` when nothing is stored under `key` in `category`.
    async fn read(&self, key: &str, category: Category) -> Result<Option<String>, StoreError>;
}

/// Keys become path segments and object names, so every backend that maps
/// them onto a hierarchy checks them first.
pub(crate) fn check_key(key: &str) -> Result<(), StoreError> {
    if is_valid_file_name(key) {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

pub fn create_store(config: &Config) -> anyhow::Result<Arc<dyn ObjectStore>> {
    let store: Arc<dyn ObjectStore> = match &config.storage {
        StorageKind::Filesystem { root_dir } => Arc::new(FilesystemStorage::new(root_dir)),
        StorageKind::Memory => Arc::new(MemoryStorage::new()),
        StorageKind::Gcs {
            bucket,
            endpoint,
            token,
        } => Arc::new(GcsStorage::new(endpoint, bucket, token.clone())?),
    };
    Ok(store)
}
