//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//!
//! Card numbers are normalized on construction, so every consumer works from
//! the same canonical string.

pub mod entities;
