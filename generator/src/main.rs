//! Sponsors page generator
//!
//! Lists the GitHub sponsors of an organization together with a few sponsors
//! that are not on GitHub, and writes them to stdout as an HTML fragment of
//! linked avatars for the website build.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod render;

#[cfg(test)]
mod test_utils;

use adapters::GitHubClientImpl;
use app::SponsorService;
use config::Config;
use domain::entities::static_sponsors;
use error::AppError;
use render::SponsorTemplate;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging to stderr (stdout carries the rendered fragment)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,sponsors=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let template = SponsorTemplate::new();

    match run(&template).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(template: &SponsorTemplate) -> anyhow::Result<()> {
    let config = Config::from_env().map_err(AppError::from)?;
    if !config.has_token() {
        tracing::warn!("GITHUB_TOKEN is not set; the GitHub API will reject the query");
    }

    tracing::info!("Listing sponsors of {}", config.organization);

    let github = Arc::new(
        GitHubClientImpl::new(&config.graphql_url, &config.github_token)
            .map_err(AppError::from)?,
    );
    let service = SponsorService::new(github, config.organization, config.min_monthly_cents)
        .with_static_sponsors(static_sponsors());

    let sponsors = service
        .collect_sponsors()
        .await
        .context("Failed to fetch sponsors")?;

    let mut stdout = io::stdout().lock();
    template
        .render_to(&sponsors, &mut stdout)
        .map_err(AppError::from)
        .context("Failed to write sponsors")?;

    Ok(())
}
