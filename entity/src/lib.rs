//! SeaORM entities for the Holocron catalog.

pub mod prelude;

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;
