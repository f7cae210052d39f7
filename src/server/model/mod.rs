//! Server-side domain types.
//!
//! - `app` - shared application state handed to every handler
//! - `favorite` - the catalog entry a favorite points at

pub mod app;
pub mod favorite;
