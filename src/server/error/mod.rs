//! Error types for the Holocron server.
//!
//! Domain errors live in their own modules and every error implements `IntoResponse`
//! so handlers can return `Result<_, Error>` and rely on `?`. Every response body uses
//! the single [`ErrorDto`] envelope.

pub mod catalog;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError},
};

/// Main error type for the Holocron server.
///
/// Aggregates domain errors and external library errors, converting from them via `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Expected request failure (missing fields, duplicate names, unknown ids).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to hash a user's password.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::CatalogError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
