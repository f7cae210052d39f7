//! HTTP controller endpoints for the Holocron API.
//!
//! Each handler extracts its path and body, delegates to the matching service, and maps
//! the result onto a status code and JSON body. Handlers are annotated with utoipa so
//! the router can build the OpenAPI document and the sitemap from them.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
pub mod vehicle;
