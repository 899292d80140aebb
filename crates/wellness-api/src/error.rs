//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use wellness_core::{BmiError, InputError};

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Bmi(#[from] BmiError),
}

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// Label used for the rejected-requests metric
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::Input(err) => err.kind(),
            ApiError::Bmi(_) => "invalid_measurement",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        // Every failure is a problem with the caller's input
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
