// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::services::airtable::AirtableError;
use crate::services::catalog::CatalogError;
use crate::services::newsletter::NewsletterError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", Some(msg.clone())),
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream error");
                (StatusCode::BAD_GATEWAY, "upstream_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<NewsletterError> for AppError {
    fn from(err: NewsletterError) -> Self {
        match err {
            NewsletterError::Missing | NewsletterError::InvalidFormat => {
                AppError::BadRequest(err.to_string())
            }
            NewsletterError::AlreadySubscribed => AppError::Conflict(err.to_string()),
            NewsletterError::Io(_) | NewsletterError::Corrupt(_) => {
                AppError::Internal(anyhow::Error::new(err))
            }
        }
    }
}

impl From<AirtableError> for AppError {
    fn from(err: AirtableError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
