//! HTTP service that stores UIDL documents in an object store under a
//! generated identifier and serves them back by category and identifier.

use std::sync::Arc;

use axum::Router;

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod storage;
pub mod utils;

use crate::config::Config;
use crate::storage::ObjectStore;
use crate::utils::state::AppState;

/// Builds the application with the store selected by `config`.
pub fn build_app(config: Config) -> anyhow::Result<Router> {
    let state = AppState::new(config)?;
    api::create_router(Arc::new(state))
}

/// Builds the application around an already constructed store.
pub fn build_app_with_storage(
    config: Config,
    storage: Arc<dyn ObjectStore>,
) -> anyhow::Result<Router> {
    api::create_router(Arc::new(AppState::with_storage(config, storage)))
}
