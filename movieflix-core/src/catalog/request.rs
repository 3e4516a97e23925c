use crate::config::CatalogConfig;
use crate::error::FetchError;
use url::Url;

const API_VERSION: &str = "3";

/// The two listings the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEndpoint {
    /// Provider popularity ranking, paginated.
    Popular,
    /// Free-text title search.
    Search,
}

impl CatalogEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            CatalogEndpoint::Popular => "movie/popular",
            CatalogEndpoint::Search => "search/movie",
        }
    }
}

/// Page number plus query, the only inputs of a catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub query: String,
}

impl PageRequest {
    pub fn new(page: u32, query: impl Into<String>) -> Self {
        Self {
            page,
            query: query.into(),
        }
    }

    pub fn endpoint(&self) -> CatalogEndpoint {
        if self.query.is_empty() {
            CatalogEndpoint::Popular
        } else {
            CatalogEndpoint::Search
        }
    }

    /// Build the request URL.
    ///
    /// Search URLs carry no `page` parameter, so every search request returns
    /// the first page of matches.
    pub fn to_url(&self, config: &CatalogConfig) -> Result<Url, FetchError> {
        let endpoint = self.endpoint();
        let mut url = Url::parse(&format!(
            "{}/{}/{}",
            config.api_base_url.trim_end_matches('/'),
            API_VERSION,
            endpoint.path()
        ))?;

        {
            let mut pairs = url.query_pairs_mut();
            match endpoint {
                CatalogEndpoint::Search => {
                    pairs
                        .append_pair("query", &self.query)
                        .append_pair("api_key", &config.api_key);
                }
                CatalogEndpoint::Popular => {
                    pairs
                        .append_pair("language", &config.language)
                        .append_pair("page", &self.page.to_string())
                        .append_pair("api_key", &config.api_key);
                }
            }
        }

        Ok(url)
    }
}

/// Render a request URL for logs with the API key masked.
pub fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CatalogConfig {
        CatalogConfig {
            api_key: "k3y".into(),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn empty_query_targets_popular_with_page() {
        let url = PageRequest::new(3, "").to_url(&config()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/movie/popular\
             ?language=en-US&page=3&api_key=k3y"
        );
    }

    #[test]
    fn search_ignores_page_number() {
        let first = PageRequest::new(1, "dune").to_url(&config()).unwrap();
        let later = PageRequest::new(7, "dune").to_url(&config()).unwrap();
        assert_eq!(first, later);
        assert_eq!(
            first.as_str(),
            "https://api.themoviedb.org/3/search/movie?query=dune&api_key=k3y"
        );
        assert!(first.query_pairs().all(|(key, _)| key != "page"));
    }

    #[test]
    fn query_text_is_encoded() {
        let url = PageRequest::new(1, "star wars & co")
            .to_url(&config())
            .unwrap();
        let query: Vec<_> = url.query_pairs().collect();
        assert_eq!(query[0].1, "star wars & co");
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn base_url_keeps_its_path_prefix() {
        let config = CatalogConfig {
            api_base_url: "http://localhost:8080/tmdb/".into(),
            ..config()
        };
        let url = PageRequest::new(1, "").to_url(&config).unwrap();
        assert_eq!(url.path(), "/tmdb/3/movie/popular");
    }

    #[test]
    fn malformed_base_url_is_an_invalid_url_error() {
        let config = CatalogConfig {
            api_base_url: "::not a url".into(),
            ..config()
        };
        let err = PageRequest::new(1, "").to_url(&config).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn redaction_masks_only_the_key() {
        let url = PageRequest::new(2, "").to_url(&config()).unwrap();
        let rendered = redact_api_key(&url);
        assert!(!rendered.contains("k3y"));
        assert!(rendered.contains("page=2"));
        assert!(rendered.contains("api_key=***"));
    }
}
