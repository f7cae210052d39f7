//! Test fixture modules for database record creation.
//!
//! - `catalog` - planets, people & vehicles
//! - `user` - users and their favorites

pub mod catalog;
pub mod user;
