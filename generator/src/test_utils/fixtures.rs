//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Sponsor;
use crate::domain::ports::{
    AccountProfile, PageInfo, SponsorAccount, SponsorEdge, Sponsorship, SponsorsPage,
};

/// Create a profile whose name and avatar are derived from the login
pub fn test_profile(login: &str) -> AccountProfile {
    AccountProfile {
        login: login.to_string(),
        name: format!("{} (name)", login),
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
    }
}

/// Create an active sponsorship at the given tier price
pub fn test_sponsorship(monthly_price_in_cents: i64) -> Sponsorship {
    Sponsorship {
        is_active: true,
        monthly_price_in_cents,
    }
}

/// Create a user sponsor edge with one active sponsorship per price
pub fn test_user_edge(login: &str, prices_in_cents: &[i64]) -> SponsorEdge {
    SponsorEdge {
        account: Some(SponsorAccount::User(test_profile(login))),
        sponsorships: prices_in_cents.iter().copied().map(test_sponsorship).collect(),
    }
}

/// Create an organization sponsor edge with one active sponsorship per price
pub fn test_org_edge(login: &str, prices_in_cents: &[i64]) -> SponsorEdge {
    SponsorEdge {
        account: Some(SponsorAccount::Organization(test_profile(login))),
        sponsorships: prices_in_cents.iter().copied().map(test_sponsorship).collect(),
    }
}

/// Create a page; `next_cursor` set means another page follows
pub fn test_page(edges: Vec<SponsorEdge>, next_cursor: Option<&str>) -> SponsorsPage {
    SponsorsPage {
        edges,
        page_info: PageInfo {
            end_cursor: next_cursor.map(str::to_string),
            has_next_page: next_cursor.is_some(),
        },
    }
}

/// Create a static-style sponsor
pub fn test_sponsor(login: &str, amount_cents: i64) -> Sponsor {
    Sponsor {
        name: format!("{} (name)", login),
        login: login.to_string(),
        avatar_url: format!("https://example.com/{}.png", login),
        link_url: format!("https://example.com/{}/", login),
        amount_cents,
    }
}
