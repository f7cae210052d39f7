use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Expected failures of catalog requests, each carrying the message shown to the client.
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    /// One or more required fields are absent from the request body.
    #[error("{0}")]
    MissingFields(&'static str),
    /// A record with the same natural key already exists.
    #[error("{0}")]
    AlreadyExists(&'static str),
    /// The requested record, or a record it references, does not exist.
    #[error("{0}")]
    NotFound(&'static str),
    /// The request body or query string could not be parsed.
    #[error("{0}")]
    InvalidRequest(String),
}

impl CatalogError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingFields(_) | Self::AlreadyExists(_) | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::debug!(status = %status, "{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
