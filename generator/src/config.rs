use std::env;

use crate::error::ConfigError;

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_ORGANIZATION: &str = "syncthing";

/// $100/month, expressed in cents.
pub const DEFAULT_MIN_MONTHLY_CENTS: i64 = 100 * 100;

#[derive(Clone)]
pub struct Config {
    /// Bearer token for the GitHub API. Empty when unset; GitHub then rejects the query.
    pub github_token: String,
    pub graphql_url: String,
    /// Organization whose sponsors are listed, also used as the maintainer login
    /// when querying each sponsor's sponsorships.
    pub organization: String,
    /// Minimum tier price for a sponsorship to be listed
    pub min_monthly_cents: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_monthly_cents = match lookup("SPONSORS_MIN_MONTHLY_CENTS") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|cents| *cents >= 0)
                .ok_or(ConfigError::Invalid {
                    key: "SPONSORS_MIN_MONTHLY_CENTS",
                    value,
                })?,
            None => DEFAULT_MIN_MONTHLY_CENTS,
        };

        Ok(Self {
            github_token: lookup("GITHUB_TOKEN").unwrap_or_default(),
            graphql_url: lookup("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
            organization: lookup("SPONSORS_ORG")
                .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string()),
            min_monthly_cents,
        })
    }

    /// Check if a token was provided
    pub fn has_token(&self) -> bool {
        !self.github_token.is_empty()
    }
}
