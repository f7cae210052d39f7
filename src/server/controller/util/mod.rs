//! Extractors shared by the controllers.

pub mod json;
pub mod path;
