//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: The sponsor record and its ordering
//! - `ports`: Trait definitions for the sponsor data source

pub mod entities;
pub mod ports;
