//! Domain entities
//!
//! Pure domain models representing what ends up on the page.
//! These are separate from the raw GraphQL shapes in `ports`.

pub mod sponsor;

pub use sponsor::{sort_sponsors, static_sponsors, Sponsor};
