//! Sponsor source port trait
//!
//! Defines the interface for listing an organization's sponsors one page at a time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GitHubError;

/// Fields shared by every kind of sponsoring account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub login: String,
    /// Empty when the account has no display name set
    pub name: String,
    pub avatar_url: String,
}

/// The account behind a sponsor edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SponsorAccount {
    User(AccountProfile),
    Organization(AccountProfile),
}

impl SponsorAccount {
    pub fn profile(&self) -> &AccountProfile {
        match self {
            SponsorAccount::User(profile) | SponsorAccount::Organization(profile) => profile,
        }
    }
}

/// One sponsorship of the organization by a sponsor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsorship {
    /// Fetched but not used for filtering; lapsed sponsorships are still listed
    pub is_active: bool,
    /// Price of the sponsorship tier, 0 when the sponsorship has no tier
    pub monthly_price_in_cents: i64,
}

/// A single sponsor entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorEdge {
    /// `None` for account types other than users and organizations
    pub account: Option<SponsorAccount>,
    /// Up to five sponsorships, past and current
    pub sponsorships: Vec<Sponsorship>,
}

/// Pagination state returned with each page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// One page of sponsors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorsPage {
    pub edges: Vec<SponsorEdge>,
    pub page_info: PageInfo,
}

/// Maximum number of sponsor edges returned per page
pub const SPONSORS_PAGE_SIZE: u32 = 100;

/// Maximum number of sponsorships fetched per sponsor
pub const SPONSORSHIPS_PER_SPONSOR: u32 = 5;

/// Port trait for the sponsor listing
#[async_trait]
pub trait SponsorSource: Send + Sync {
    /// Fetch the page of `organization`'s sponsors that starts after `cursor`.
    ///
    /// `cursor` is `None` for the first page.
    async fn fetch_sponsors_page(
        &self,
        organization: &str,
        cursor: Option<&str>,
    ) -> Result<SponsorsPage, GitHubError>;
}
