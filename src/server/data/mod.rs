//! Data access layer repositories.
//!
//! One repository per entity. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! services can run them on a transaction as a single unit of work.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;
