use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StoreError;

/// Body of every non-success response.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("UIDL missing from the request")]
    UidlMissing,

    #[error("Type must be project or component")]
    InvalidType,

    #[error("Please send a properly structured UIDL")]
    MalformedUidl,

    #[error("Filename is missing from the request")]
    FileNameMissing,

    #[error("Filename is invalid")]
    FileNameInvalid,

    #[error("File not found")]
    NotFound,

    #[error("{}", .0.body_text())]
    BodyRejected(JsonRejection),

    // Internal errors, the source is logged and never returned to the caller
    #[error("Failed in saving UIDL")]
    SaveFailed(#[source] StoreError),

    #[error("Failed in fetching UIDL")]
    FetchFailed(#[source] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UidlMissing
            | Self::InvalidType
            | Self::MalformedUidl
            | Self::FileNameMissing
            | Self::FileNameInvalid => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BodyRejected(rejection) => rejection.status(),
            Self::SaveFailed(_) | Self::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::SaveFailed(source) | Self::FetchFailed(source) => {
                tracing::error!(error = ?source, "{}", self);
            }
            _ => tracing::debug!("rejecting request: {}", self),
        }

        let body = ErrorMessage {
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
