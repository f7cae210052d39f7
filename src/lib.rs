//! Holocron: a REST catalog of Star Wars planets, people and vehicles with per-user favorites.

pub mod model;
pub mod server;
