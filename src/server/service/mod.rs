//! Catalog service layer.
//!
//! Services apply the request rules (required fields, unique names, existing references)
//! on top of the repositories. Every mutation runs inside one database transaction which
//! is committed once at the end; returning early drops the transaction and rolls it back.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;
