//! # MovieFlix Core
//!
//! Client core for browsing a TMDB-style movie catalog: the HTTP catalog
//! client, the paginated browse/search controller and the view models the UI
//! renders from.
//!
//! ## Overview
//!
//! - **Catalog access**: popular and search listings over an injectable
//!   [`HttpClient`](movieflix_contracts::http::HttpClient), with an
//!   offline check before each request
//! - **Browsing**: first load, pull-to-refresh, infinite scroll and
//!   debounced search-as-you-type
//! - **Presentation**: star ratings, poster URLs and release-date text
//! - **Configuration**: TOML/JSON files or environment variables
//!
//! ## Architecture
//!
//! - [`catalog`]: request building, transport, connectivity and decoding
//! - [`browse`]: the [`BrowseController`] and its state machine
//! - [`presentation`]: list cards and the detail view
//! - [`config`]: runtime settings
//! - [`error`]: the [`FetchError`] taxonomy
//!
//! ## Examples
//!
//! ```no_run
//! use movieflix_contracts::ui::UiErrorReporter;
//! use movieflix_core::{BrowseController, CatalogClient, MovieflixConfig};
//! use std::sync::Arc;
//!
//! struct StderrReporter;
//!
//! impl UiErrorReporter for StderrReporter {
//!     fn report(&self, title: &str, message: &str) {
//!         eprintln!("{title}: {message}");
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let (config, _source) = MovieflixConfig::load_from_env()?;
//! let catalog = Arc::new(CatalogClient::from_config(config.catalog.clone())?);
//! let browse = BrowseController::builder(catalog, Arc::new(StderrReporter))
//!     .config(config.browse)
//!     .images(config.images)
//!     .build();
//!
//! browse.load_initial().await;
//! let last_row = browse.items().len().saturating_sub(1);
//! browse.load_next_page_if_needed(last_row).await;
//! # Ok(())
//! # }
//! ```

pub mod browse;
pub mod catalog;
pub mod config;
pub mod error;
pub mod presentation;

pub use browse::{BrowseController, BrowsePhase, BrowseState, LoadingKind};
pub use catalog::{CatalogClient, MovieCatalog, PageRequest};
pub use config::{ConfigSource, MovieflixConfig};
pub use error::{FetchError, Result};
