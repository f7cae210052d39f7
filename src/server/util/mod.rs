//! Utility functions shared across services.

pub mod field;
