//! GitHub adapter
//!
//! Implementation of the sponsor source over the GitHub GraphQL API.

pub mod client;

pub use client::GitHubClientImpl;
