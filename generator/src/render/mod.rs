//! Render module
//!
//! HTML fragment rendering for the sponsors page.

pub mod renderer;

pub use renderer::SponsorTemplate;
