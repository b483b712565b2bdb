//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod sponsor_service;

pub use sponsor_service::SponsorService;
