//! Runtime settings for the catalog client, browse controller and image URLs.
//!
//! Evaluation order for [`MovieflixConfig::load_from_env`]:
//! 1) `$MOVIEFLIX_CONFIG_PATH` (TOML or JSON file),
//! 2) `$MOVIEFLIX_CONFIG_JSON` (inline JSON),
//! 3) the first existing default file,
//! 4) built-in defaults.
//!
//! `$TMDB_API_KEY` overrides `catalog.api_key` whichever source won.

mod error;
mod validation;

pub use error::ConfigLoadError;
pub use validation::{ConfigWarning, validate};

use movieflix_model::PosterSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "MOVIEFLIX_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "MOVIEFLIX_CONFIG_JSON";
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_PLACEHOLDER_POSTER_URL: &str =
    "https://picsum.photos/144/288";

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovieflixConfig {
    pub catalog: CatalogConfig,
    pub browse: BrowseConfig,
    pub images: ImageConfig,
}

/// Where and how catalog pages are requested.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Scheme and host of the catalog API. The `/3/...` path is appended.
    pub api_base_url: String,
    /// Sent as the `api_key` query parameter.
    pub api_key: String,
    /// `language` parameter of the popular listing.
    pub language: String,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Budget for the TCP reachability check done before each request.
    pub connectivity_timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            language: "en-US".to_string(),
            request_timeout_secs: 10,
            connectivity_timeout_ms: 1_500,
        }
    }
}

impl CatalogConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn connectivity_timeout(&self) -> Duration {
        Duration::from_millis(self.connectivity_timeout_ms.max(1))
    }
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_base_url", &self.api_base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" },
            )
            .field("language", &self.language)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connectivity_timeout_ms", &self.connectivity_timeout_ms)
            .finish()
    }
}

/// Timing of the browse controller's UI smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Quiet period after the last keystroke before a search is sent.
    pub search_debounce_ms: u64,
    /// How long the loading indicator stays up after a reload completes.
    pub loading_settle_ms: u64,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 500,
            loading_settle_ms: 500,
        }
    }
}

impl BrowseConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn loading_settle(&self) -> Duration {
        Duration::from_millis(self.loading_settle_ms)
    }
}

/// Poster URL construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageConfig {
    pub base_url: String,
    pub poster_size: PosterSize,
    /// Shown in list cells for movies without a poster.
    pub placeholder_poster_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            poster_size: PosterSize::Original,
            placeholder_poster_url: DEFAULT_PLACEHOLDER_POSTER_URL.to_string(),
        }
    }
}

impl MovieflixConfig {
    /// Load configuration from the process environment.
    pub fn load_from_env() -> Result<(Self, ConfigSource), ConfigLoadError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Self::load_from_env`] with an injectable variable lookup.
    pub fn load_with<F>(
        lookup: F,
    ) -> Result<(Self, ConfigSource), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty =
            |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (mut config, source) = if let Some(path_str) =
            non_empty(CONFIG_PATH_ENV)
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            (config, ConfigSource::EnvPath(path))
        } else if let Some(raw) = non_empty(CONFIG_JSON_ENV) {
            let config = Self::parse_json(&raw, CONFIG_JSON_ENV)?;
            (config, ConfigSource::EnvInline)
        } else if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            (config, ConfigSource::File(path))
        } else {
            (Self::default(), ConfigSource::Default)
        };

        if let Some(api_key) = non_empty(API_KEY_ENV) {
            config.catalog.api_key = api_key;
        }

        Ok((config, source))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml { origin, source }),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml_error| {
            serde_json::from_str(contents).map_err(|json_error| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml_error,
                    json_error,
                }
            })
        })
    }

    pub fn parse_json(
        raw: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate(self)
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "movieflix.toml",
            "movieflix.json",
            "config/movieflix.toml",
            "config/movieflix.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}
