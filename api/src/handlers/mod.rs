//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod validate;

pub use validate::{method_not_allowed, validate_card};
