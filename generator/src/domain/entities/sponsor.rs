//! Sponsor domain entity
//!
//! A sponsor as it appears on the rendered page, regardless of whether it came
//! from GitHub Sponsors or from the hand-maintained list.

use std::cmp::Ordering;

use serde::Serialize;

/// A sponsor listed on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sponsor {
    /// Display name, empty when the account has none set
    pub name: String,
    /// Account handle, used as the tie-break key
    pub login: String,
    pub avatar_url: String,
    pub link_url: String,
    /// Monthly pledge in cents
    pub amount_cents: i64,
}

impl Sponsor {
    /// Build a sponsor from a GitHub account, linking to its profile page
    pub fn from_github(login: &str, name: &str, avatar_url: &str, amount_cents: i64) -> Self {
        Self {
            name: name.to_string(),
            login: login.to_string(),
            avatar_url: avatar_url.to_string(),
            link_url: github_profile_url(login),
            amount_cents,
        }
    }

    /// Page order: larger pledges first, then login ascending.
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .amount_cents
            .cmp(&self.amount_cents)
            .then_with(|| self.login.cmp(&other.login))
    }
}

/// Canonical profile URL for a GitHub login
fn github_profile_url(login: &str) -> String {
    format!("https://github.com/{}/", login)
}

/// Sort sponsors into page order
pub fn sort_sponsors(sponsors: &mut [Sponsor]) {
    sponsors.sort_by(Sponsor::display_order);
}

/// Sponsors that are not on GitHub Sponsors
pub fn static_sponsors() -> Vec<Sponsor> {
    vec![
        Sponsor {
            name: "Kastelo, Inc.".to_string(),
            login: "kastelo".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/20482589?v=4".to_string(),
            link_url: "https://kastelo.net/".to_string(),
            amount_cents: 10000,
        },
        Sponsor {
            name: "Reef Solutions".to_string(),
            login: "reefsol".to_string(),
            avatar_url: "https://static.wixstatic.com/media/c19c76_e1ee443d4c5e4e3197a25eec7a0a97e5.png/v1/fill/w_78,h_81,al_c,lg_1,q_85,enc_auto/c19c76_e1ee443d4c5e4e3197a25eec7a0a97e5.png".to_string(),
            link_url: "https://kastelo.net/".to_string(),
            amount_cents: 10000,
        },
    ]
}
