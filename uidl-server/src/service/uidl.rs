use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::storage::Category;
use crate::utils::state::AppState;
use crate::utils::validation::{is_valid_file_name, parse_json_text};

/// Fields are kept loose so that each kind of bad input maps to its own
/// validation message instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct UploadUidlRequest {
    #[serde(default)]
    pub uidl: Option<Value>,
    #[serde(default, rename = "type")]
    pub category: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUidlResponse {
    pub message: String,
    pub file_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FetchUidlResponse {
    pub uidl: String,
}

impl UploadUidlRequest {
    /// Checks, in order: presence of `uidl`, the category, then that `uidl`
    /// is a string holding JSON text.
    pub fn validate(self) -> Result<(String, Category), AppError> {
        let uidl = match self.uidl {
            Some(uidl) if !is_falsy(&uidl) => uidl,
            _ => return Err(AppError::UidlMissing),
        };

        let category = self
            .category
            .as_ref()
            .and_then(Value::as_str)
            .ok_or(AppError::InvalidType)?
            .parse::<Category>()
            .map_err(|_| AppError::InvalidType)?;

        let Value::String(text) = uidl else {
            tracing::debug!(uidl = %uidl, "malformed UIDL: not a string");
            return Err(AppError::MalformedUidl);
        };
        if let Err(err) = parse_json_text(&text) {
            tracing::debug!(error = %err, "malformed UIDL");
            return Err(AppError::MalformedUidl);
        }
        Ok((text, category))
    }
}

/// `null`, `false`, `0` and `""` count as an absent `uidl`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// POST /upload-uidl
pub async fn upload_uidl(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UploadUidlRequest>, JsonRejection>,
) -> Result<Json<UploadUidlResponse>, AppError> {
    // A body that isn't a JSON object carries no `uidl`.
    let Json(request) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) | JsonRejection::JsonDataError(_) => {
            AppError::UidlMissing
        }
        other => AppError::BodyRejected(other),
    })?;
    let (uidl, category) = request.validate()?;

    let file_name = Uuid::new_v4().to_string();
    state
        .storage
        .write(&uidl, &file_name, category)
        .await
        .map_err(AppError::SaveFailed)?;
    tracing::info!(%category, %file_name, bytes = uidl.len(), "UIDL saved");

    Ok(Json(UploadUidlResponse {
        message: "UIDL saved successfully".to_string(),
        file_name,
    }))
}

/// GET /fetch-uidl/{type}/{fileName}
pub async fn fetch_uidl(
    State(state): State<Arc<AppState>>,
    Path((category, file_name)): Path<(String, String)>,
) -> Result<Json<FetchUidlResponse>, AppError> {
    if file_name.is_empty() {
        return Err(AppError::FileNameMissing);
    }
    let category = category
        .parse::<Category>()
        .map_err(|_| AppError::InvalidType)?;
    if !is_valid_file_name(&file_name) {
        return Err(AppError::FileNameInvalid);
    }

    let uidl = state
        .storage
        .read(&file_name, category)
        .await
        .map_err(AppError::FetchFailed)?
        .ok_or(AppError::NotFound)?;

    Ok(Json(FetchUidlResponse { uidl }))
}

/// GET /fetch-uidl/{type} and /fetch-uidl/{type}/
pub async fn fetch_uidl_without_file_name() -> AppError {
    AppError::FileNameMissing
}

/// GET /
pub async fn health() -> &'static str {
    "REPL API server"
}
