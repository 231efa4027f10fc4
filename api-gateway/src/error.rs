//! Error handling for the API gateway

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::error::Error;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code (string identifier for the error type)
    pub code: String,
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Common error: {0}")]
    Common(#[from] Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Common(Error::InvalidInput(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Common(Error::InvalidInput(rejection.body_text()))
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Common(e) => match e {
                // Client errors all answer 400
                Error::CustomerNotFound(_) => (StatusCode::BAD_REQUEST, "customer_not_found"),
                Error::DuplicateAccount(_) => (StatusCode::BAD_REQUEST, "duplicate_account"),
                Error::InsufficientFunds(_) => (StatusCode::BAD_REQUEST, "insufficient_funds"),
                Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),

                Error::ConfigurationError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
                Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
                Error::DecimalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "decimal_error"),
            },
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Common(e) => e.public_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        let (status, code) = self.status_and_code();
        if status.is_client_error() {
            tracing::warn!("API Error [{}]: {}", request_id, &self);
        } else {
            tracing::error!("API Error [{}]: {:?}", request_id, &self);
        }

        let error_response = ErrorResponse {
            error: self.public_message().to_string(),
            code: code.to_string(),
            request_id: Some(request_id),
        };

        (status, Json(error_response)).into_response()
    }
}
