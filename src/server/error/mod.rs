//! Error types for the Voyager server application.
//!
//! Errors are grouped by domain (configuration, missing resources, request validation) and
//! aggregated into [`Error`]. All errors implement `IntoResponse` so handlers can return them
//! directly with `?`, and use `thiserror` for their `Display` and `Error` implementations.

pub mod config;
pub mod not_found;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, not_found::NotFoundError, validation::ValidationError},
};

/// Main error type for the Voyager server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Not found errors (requested record does not exist)
/// - Validation errors (malformed body, blank names, constraint violations)
/// - External library errors (database, socket I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The record addressed by the request does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// The request was understood but violates a validation rule or constraint.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Internal error indicating a bug, such as a row the database should have guaranteed
    /// to exist being missing.
    #[error("Internal error with Voyager's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error not attributable to the request (connection issues, query failures).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Socket error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(ValidationError::InvalidBody(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For records which don't exist
/// - 422 Unprocessable Entity - For validation failures and unexpected database errors
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::DbErr(err) => UnprocessableEntity(err).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                errors: vec!["Internal server error".to_string()],
            }),
        )
            .into_response()
    }
}

/// Wrapper type for reporting a failed write as 422 Unprocessable Entity without exposing the
/// underlying error message.
///
/// The full error is logged, the client only receives a generic message.
pub struct UnprocessableEntity<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for UnprocessableEntity<E> {
    fn into_response(self) -> Response {
        tracing::error!("Failed to process request: {}", self.0);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                errors: vec!["request could not be processed".to_string()],
            }),
        )
            .into_response()
    }
}
