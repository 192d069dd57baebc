//! Error handling for the Linkboard API
//!
//! This module provides a unified error type using thiserror, with HTTP
//! status mapping via Axum's IntoResponse trait and GraphQL error mapping
//! via async-graphql's ErrorExtensions trait.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when an anonymous caller tries to vote
pub const LOGIN_TO_VOTE: &str = "Please log in to vote!";

/// Message returned when a vote references a link that does not exist
pub const INVALID_LINK: &str = "Invalid Link!";

/// Message surfaced to clients in place of internal failure details
const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Expected request outcomes ==========
    /// Anonymous caller attempted an operation that requires an identity
    #[error("{0}")]
    Authentication(&'static str),

    /// A request referenced an entity that does not exist
    #[error("{0}")]
    NotFound(&'static str),

    /// Bearer token could not be verified
    #[error("invalid authentication token: {0}")]
    InvalidToken(String),

    // ========== Lower level failures ==========
    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JWT encoding/decoding error
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Authentication(_) | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Jwt(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "UNAUTHENTICATED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Jwt(_) => "JWT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message that is safe to show to the caller
    ///
    /// Expected outcomes keep their own message; everything else is
    /// replaced by a generic one so internals never leak.
    pub fn public_message(&self) -> String {
        match self {
            Self::Authentication(msg) | Self::NotFound(msg) => (*msg).to_string(),
            Self::InvalidToken(_) => "Invalid or expired token".to_string(),
            _ => UNEXPECTED_ERROR.to_string(),
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        let code = self.error_code();
        async_graphql::Error::new(self.public_message()).extend_with(|_, e| e.set("code", code))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            code: self.error_code(),
            message: self.public_message(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
