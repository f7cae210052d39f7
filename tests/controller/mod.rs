//! Tests for HTTP controller endpoints.
//!
//! These drive the full router, middleware included, against an in-memory database and
//! check status codes along with the JSON bodies returned.

mod favorite;
mod person;
mod planet;
mod sitemap;
mod user;
mod vehicle;

use axum::http::{Method, StatusCode};
use holocron_test_utils::prelude::*;
use serde_json::json;

use crate::util::send;
