// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;

use pantry_storage::StorageError;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Storage errors mapped to HTTP responses.
pub struct ApiError(pub StorageError);

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.0 {
            StorageError::NotFound => (StatusCode::NOT_FOUND, self.0.to_string()),
            StorageError::Sqlx(_) | StorageError::Migration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, ResponseJson(ApiResponse::<()>::error(message))).into_response()
    }
}

/// 400 response for malformed query parameters.
pub fn bad_request(message: String) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        ResponseJson(ApiResponse::<()>::error(message)),
    )
        .into_response()
}
