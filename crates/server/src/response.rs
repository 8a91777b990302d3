//! Response types shared across the HTTP surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StoreError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable code, e.g. `VALIDATION_ERROR`.
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// One page of a listing, with the totals clients page by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Budget(_) | StoreError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match &self {
            StoreError::NotFound(what) => ErrorResponse {
                code: self.code().to_string(),
                message: format!("The requested {what} does not exist"),
                details: Vec::new(),
            },
            StoreError::Budget(_) | StoreError::InvalidField { .. } => ErrorResponse {
                code: self.code().to_string(),
                message: "Validation failed on the submitted fields".to_string(),
                details: vec![self.to_string()],
            },
            StoreError::Database(e) => {
                // the DbErr text stays in the log, not in the body
                tracing::error!(error = %e, "database failure");
                ErrorResponse {
                    code: self.code().to_string(),
                    message: "Internal server error".to_string(),
                    details: Vec::new(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
