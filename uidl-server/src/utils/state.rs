use std::sync::Arc;

use crate::config::Config;
use crate::storage::{ObjectStore, create_store};

/// Shared by every request. The store client is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let storage = create_store(&config)?;
        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: Config, storage: Arc<dyn ObjectStore>) -> Self {
        AppState {
            storage,
            config: Arc::new(config),
        }
    }
}
