use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::{catalog::CatalogError, Error};

/// JSON request body whose parse failures respond with the API's error envelope
///
/// Wraps [`axum::Json`] so a malformed body or missing `Content-Type` yields a 400
/// `{"error": ...}` instead of axum's plain text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CatalogError::InvalidRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
