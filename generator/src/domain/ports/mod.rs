//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod sponsors;

pub use sponsors::{
    AccountProfile, PageInfo, SponsorAccount, SponsorEdge, SponsorSource, Sponsorship,
    SponsorsPage,
};
