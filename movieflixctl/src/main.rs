//! # movieflixctl
//!
//! Drives the same browse controller a graphical client would, printing the
//! list and detail views to the terminal.

mod cli;
mod terminal;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command};
use movieflix_core::catalog::{AssumeOnline, ReqwestHttpClient};
use movieflix_core::config::CONFIG_PATH_ENV;
use movieflix_core::{
    BrowseController, CatalogClient, ConfigSource, MovieCatalog,
    MovieflixConfig,
};
use std::path::Path;
use std::sync::Arc;
use terminal::{TerminalObserver, TerminalReporter, render_row};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,movieflix_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let mut config = load_config(cli.config.as_deref())?;
    // Nothing to animate in a terminal.
    config.browse.loading_settle_ms = 0;

    let catalog: Arc<dyn MovieCatalog> = if cli.assume_online {
        let http = ReqwestHttpClient::new()
            .context("failed to build HTTP client")?;
        Arc::new(CatalogClient::new(
            Arc::new(http),
            Arc::new(AssumeOnline),
            config.catalog.clone(),
        ))
    } else {
        Arc::new(
            CatalogClient::from_config(config.catalog.clone())
                .context("failed to build catalog client")?,
        )
    };

    let reporter = Arc::new(TerminalReporter::default());
    let browse = BrowseController::builder(catalog, reporter.clone())
        .observer(Arc::new(TerminalObserver::new(config.images.clone())))
        .config(config.browse)
        .images(config.images.clone())
        .build();

    load_listing(&browse, &cli.command).await;

    match &cli.command {
        Command::Popular(_) | Command::Search { .. } => {
            for (index, card) in browse.cards().iter().enumerate() {
                println!("{}", render_row(index, card));
            }
        }
        Command::Detail { index, .. } => {
            if reporter.failure_count() == 0 && !browse.select_index(*index) {
                bail!(
                    "row {index} is out of range; the listing has {} rows",
                    browse.items().len()
                );
            }
        }
    }

    let failures = reporter.failure_count();
    if failures > 0 {
        bail!("{failures} catalog request(s) failed");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MovieflixConfig> {
    let (config, source) = match path {
        Some(path) => {
            let path = path.display().to_string();
            MovieflixConfig::load_with(|key| {
                if key == CONFIG_PATH_ENV {
                    Some(path.clone())
                } else {
                    std::env::var(key).ok()
                }
            })
        }
        None => MovieflixConfig::load_from_env(),
    }
    .context("failed to load configuration")?;

    match &source {
        ConfigSource::Default => {
            debug!("using built-in configuration defaults")
        }
        ConfigSource::EnvPath(path) | ConfigSource::File(path) => {
            info!(path = %path.display(), "configuration loaded from file")
        }
        ConfigSource::EnvInline => {
            info!("configuration loaded from inline environment json")
        }
    }

    for warning in &config.validate() {
        match &warning.hint {
            Some(hint) => warn!(
                message = %warning.message,
                hint = %hint,
                "configuration warning"
            ),
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    Ok(config)
}

/// First page for the command, then scroll to the last row until the
/// requested number of pages is loaded or the listing ends.
async fn load_listing(browse: &BrowseController, command: &Command) {
    match command.query() {
        Some(query) => browse.submit_search(query).await,
        None => browse.load_initial().await,
    }

    for _ in 1..command.pages() {
        let state = browse.snapshot();
        if state.is_last_page
            || state.last_error.is_some()
            || state.items.is_empty()
        {
            break;
        }
        browse.load_next_page_if_needed(state.items.len() - 1).await;
    }
}
