use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::{catalog::CatalogError, Error};

static NOT_FOUND: &str = "No se ha encontrado";

/// Path parameters whose parse failures respond with the API's error envelope
///
/// An ID that is not a number, or does not fit, cannot name a record so it is reported
/// as a 404 `{"error": ...}` rather than axum's plain text rejection.
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected path {}: {}", parts.uri.path(), rejection.body_text());

                CatalogError::NotFound(NOT_FOUND)
            })?;

        Ok(Self(value))
    }
}
