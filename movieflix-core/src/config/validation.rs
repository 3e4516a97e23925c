use super::MovieflixConfig;
use std::fmt;

/// A setting that loads but will misbehave at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    /// How to fix it, when there is a single obvious remedy.
    pub hint: Option<String>,
}

impl ConfigWarning {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} ({hint})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Non-fatal checks, in the order the sections are declared. A bad config
/// still loads; requests fail later with a catalog error the UI can show.
pub fn validate(config: &MovieflixConfig) -> Vec<ConfigWarning> {
    let catalog = &config.catalog;
    let mut warnings = Vec::new();

    if catalog.api_key.trim().is_empty() {
        warnings.push(
            ConfigWarning::new(
                "TMDB API key is not configured; the catalog will reject \
                 every request",
            )
            .with_hint("Set TMDB_API_KEY or catalog.api_key"),
        );
    }
    if url::Url::parse(&catalog.api_base_url).is_err() {
        warnings.push(ConfigWarning::new(format!(
            "catalog.api_base_url '{}' is not a valid URL; fetches will fail",
            catalog.api_base_url
        )));
    }
    if catalog.request_timeout_secs == 0 {
        warnings.push(
            ConfigWarning::new(
                "catalog.request_timeout_secs is 0; requests use a 1 second \
                 timeout",
            )
            .with_hint("The default is 10 seconds"),
        );
    }
    if config.browse.search_debounce_ms == 0 {
        warnings.push(ConfigWarning::new(
            "browse.search_debounce_ms is 0; every keystroke issues a request",
        ));
    }

    warnings
}
