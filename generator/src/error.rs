//! Unified error types for the sponsors generator
//!
//! This module defines error types for each layer:
//! - `GitHubError`: GitHub GraphQL client errors
//! - `ConfigError`: Environment configuration errors
//! - `AppError`: Application layer errors (wraps the above plus render failures)

use thiserror::Error;

/// GitHub GraphQL client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or missing GITHUB_TOKEN")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("Response contained no data")]
    MissingData,

    #[error("Page reported more results but no end cursor")]
    MissingCursor,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),
}
