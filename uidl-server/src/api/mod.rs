use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsPolicy;
use crate::service::uidl::{fetch_uidl, fetch_uidl_without_file_name, health, upload_uidl};
use crate::utils::state::AppState;

pub fn create_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let cors = create_cors_layer(&state.config.cors)?;
    let max_body_bytes = state.config.max_body_bytes;

    Ok(Router::new()
        .route("/", get(health))
        .route("/upload-uidl", post(upload_uidl))
        .nest("/fetch-uidl", fetch_router())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn fetch_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{category}/{file_name}", get(fetch_uidl))
        .route("/{category}/{file_name}/", get(fetch_uidl))
        .route("/{category}", get(fetch_uidl_without_file_name))
        .route("/{category}/", get(fetch_uidl_without_file_name))
}

fn create_cors_layer(policy: &CorsPolicy) -> anyhow::Result<CorsLayer> {
    let allow_origin = if policy.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = policy
            .allowed_origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };
    let allowed_headers = policy
        .allowed_headers
        .iter()
        .map(|header| header.parse::<HeaderName>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers(allowed_headers)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]))
}
