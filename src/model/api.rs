use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request succeeds with nothing to return but a confirmation
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Every path served by the API
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub endpoints: Vec<String>,
}
