//! Error types for the Plantwatch server.
//!
//! This module provides the error handling system with specialized error types for the
//! different domains (configuration, validation, missing records, PIN management). All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! `Display` and `Error` implementations.

pub mod config;
pub mod not_found;
pub mod pin;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, not_found::NotFoundError, pin::PinError,
        validation::ValidationError,
    },
};

/// Main error type for the Plantwatch server.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// error type. `#[from]` conversions allow the `?` operator to be used throughout the
/// services, and the `IntoResponse` implementation maps each error to an HTTP response.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (submitted data breaks one or more business rules)
/// - Not found errors (an update references a record that does not exist)
/// - PIN errors (PIN too short, PIN file unreadable or unwritable)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The submitted data failed one or more business rules.
    ///
    /// Every failed rule is listed, the list is never empty.
    #[error("Validation rejected: {}", validation::describe(.0))]
    ValidationRejected(Vec<ValidationError>),
    /// An update or lookup referenced a record that does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// PIN management error.
    #[error(transparent)]
    PinError(#[from] PinError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For PIN input errors
/// - 404 Not Found - For missing machines, maintenance records or alerts
/// - 422 Unprocessable Entity - For validation failures, listing every failed rule
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationRejected(reasons) => validation::rejected_response(reasons),
            Self::NotFound(err) => err.into_response(),
            Self::PinError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
