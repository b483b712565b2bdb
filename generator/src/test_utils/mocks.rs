//! Mock implementations of port traits
//!
//! In-memory sponsor source that serves scripted pages and records every request,
//! so tests can verify how the pagination loop drives it.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{SponsorSource, SponsorsPage};
use crate::error::GitHubError;

// ============================================================================
// Scripted Sponsor Source
// ============================================================================

/// A request made against the mock: (organization, cursor)
pub type SponsorRequest = (String, Option<String>);

#[derive(Default)]
pub struct MockSponsorSource {
    pages: Arc<RwLock<Vec<SponsorsPage>>>,
    requests: Arc<RwLock<Vec<SponsorRequest>>>,
    /// Fail on the request with this index (0-based)
    fail_at: Arc<RwLock<Option<usize>>>,
}

impl MockSponsorSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the very first request
    pub fn failing() -> Self {
        Self::new().failing_at(0)
    }

    /// Serve this page on the next unscripted request
    pub fn with_page(self, page: SponsorsPage) -> Self {
        self.pages.write().unwrap().push(page);
        self
    }

    /// Fail the request with the given index, serving pages before it
    pub fn failing_at(self, index: usize) -> Self {
        *self.fail_at.write().unwrap() = Some(index);
        self
    }

    /// All requests made so far, in order
    pub fn requests(&self) -> Vec<SponsorRequest> {
        self.requests.read().unwrap().clone()
    }

    pub fn cursors(&self) -> Vec<Option<String>> {
        self.requests().into_iter().map(|(_, cursor)| cursor).collect()
    }
}

#[async_trait]
impl SponsorSource for MockSponsorSource {
    async fn fetch_sponsors_page(
        &self,
        organization: &str,
        cursor: Option<&str>,
    ) -> Result<SponsorsPage, GitHubError> {
        let index = {
            let mut requests = self.requests.write().unwrap();
            requests.push((organization.to_string(), cursor.map(str::to_string)));
            requests.len() - 1
        };

        if *self.fail_at.read().unwrap() == Some(index) {
            return Err(GitHubError::Api {
                status: 502,
                message: "Mock failure".to_string(),
            });
        }

        self.pages
            .read()
            .unwrap()
            .get(index)
            .cloned()
            .ok_or_else(|| GitHubError::Api {
                status: 500,
                message: format!("No page scripted for request {}", index),
            })
    }
}
