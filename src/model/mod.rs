//! Request and response bodies exchanged with API consumers.

pub mod api;
pub mod catalog;
pub mod user;
