use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};

use crate::model::api::SitemapDto;

/// Paths listed by the sitemap, collected from the OpenAPI document when the router is built
#[derive(Clone)]
pub struct Sitemap(pub Arc<Vec<String>>);

impl Sitemap {
    /// Creates a sitemap from the provided paths, sorted & deduplicated
    pub fn new(paths: impl IntoIterator<Item = String>) -> Self {
        let mut endpoints: Vec<String> = paths.into_iter().collect();
        endpoints.sort();
        endpoints.dedup();

        Self(Arc::new(endpoints))
    }
}

/// List every documented endpoint of the API
pub async fn sitemap(Extension(sitemap): Extension<Sitemap>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SitemapDto {
            endpoints: sitemap.0.as_ref().clone(),
        }),
    )
}
