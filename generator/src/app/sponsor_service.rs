//! Sponsor service
//!
//! Walks every page of an organization's GitHub sponsors, keeps the sponsorships
//! at or above the minimum tier price, merges in the static sponsors and returns
//! the combined list in page order.

use std::sync::Arc;

use crate::domain::entities::{sort_sponsors, Sponsor};
use crate::domain::ports::{SponsorEdge, SponsorSource};
use crate::error::{AppError, GitHubError};

/// Service for collecting the sponsors to list
pub struct SponsorService<S>
where
    S: SponsorSource,
{
    source: Arc<S>,
    organization: String,
    min_monthly_cents: i64,
    static_sponsors: Vec<Sponsor>,
}

impl<S> SponsorService<S>
where
    S: SponsorSource,
{
    pub fn new(source: Arc<S>, organization: impl Into<String>, min_monthly_cents: i64) -> Self {
        Self {
            source,
            organization: organization.into(),
            min_monthly_cents,
            static_sponsors: Vec::new(),
        }
    }

    /// Sponsors listed in addition to the ones found on GitHub
    pub fn with_static_sponsors(mut self, sponsors: Vec<Sponsor>) -> Self {
        self.static_sponsors = sponsors;
        self
    }

    /// Static sponsors plus every qualifying GitHub sponsorship, sorted for display
    pub async fn collect_sponsors(&self) -> Result<Vec<Sponsor>, AppError> {
        let mut sponsors = self.static_sponsors.clone();
        sponsors.extend(self.fetch_qualifying().await?);

        sort_sponsors(&mut sponsors);

        tracing::info!(
            "Collected {} sponsors ({} static)",
            sponsors.len(),
            self.static_sponsors.len()
        );

        Ok(sponsors)
    }

    /// Page through the organization's sponsors, keeping qualifying sponsorships.
    ///
    /// Any failed page aborts the whole walk.
    pub async fn fetch_qualifying(&self) -> Result<Vec<Sponsor>, AppError> {
        let mut sponsors = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_number = 0;

        loop {
            page_number += 1;
            let page = self
                .source
                .fetch_sponsors_page(&self.organization, cursor.as_deref())
                .await?;

            tracing::info!(
                page = page_number,
                edges = page.edges.len(),
                "Fetched sponsors page"
            );

            for edge in &page.edges {
                sponsors.extend(qualifying_sponsors(edge, self.min_monthly_cents));
            }

            if !page.page_info.has_next_page {
                break;
            }
            cursor = Some(page.page_info.end_cursor.ok_or(GitHubError::MissingCursor)?);
        }

        Ok(sponsors)
    }
}

/// One sponsor per sponsorship priced at or above `min_monthly_cents`.
///
/// Whether the sponsorship is still active is not considered.
pub fn qualifying_sponsors(edge: &SponsorEdge, min_monthly_cents: i64) -> Vec<Sponsor> {
    let Some(account) = &edge.account else {
        tracing::debug!("Skipping sponsor edge without a user or organization account");
        return Vec::new();
    };
    let profile = account.profile();

    edge.sponsorships
        .iter()
        .filter(|sponsorship| {
            let qualifies = sponsorship.monthly_price_in_cents >= min_monthly_cents;
            if !qualifies {
                tracing::debug!(
                    "Skipping {} sponsorship of {} cents (active: {})",
                    profile.login,
                    sponsorship.monthly_price_in_cents,
                    sponsorship.is_active
                );
            }
            qualifies
        })
        .map(|sponsorship| {
            Sponsor::from_github(
                &profile.login,
                &profile.name,
                &profile.avatar_url,
                sponsorship.monthly_price_in_cents,
            )
        })
        .collect()
}
