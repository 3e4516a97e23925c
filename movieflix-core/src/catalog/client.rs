use super::MovieCatalog;
use super::connectivity::TcpConnectivityProbe;
use super::http::ReqwestHttpClient;
use super::request::{PageRequest, redact_api_key};
use crate::config::CatalogConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use movieflix_contracts::connectivity::ConnectivityProbe;
use movieflix_contracts::http::{HttpClient, HttpRequest};
use movieflix_model::MovieList;
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds catalog requests, checks connectivity, and decodes pages.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Arc<dyn HttpClient>,
    connectivity: Arc<dyn ConnectivityProbe>,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(
        http: Arc<dyn HttpClient>,
        connectivity: Arc<dyn ConnectivityProbe>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            http,
            connectivity,
            config,
        }
    }

    /// Production wiring: reqwest transport and a TCP probe against the
    /// catalog host.
    pub fn from_config(config: CatalogConfig) -> Result<Self, FetchError> {
        let http = ReqwestHttpClient::new()?;
        let probe = TcpConnectivityProbe::for_catalog(&config)?;
        Ok(Self::new(Arc::new(http), Arc::new(probe), config))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn build_request(
        &self,
        page: u32,
        query: &str,
    ) -> Result<HttpRequest, FetchError> {
        let url = PageRequest::new(page, query).to_url(&self.config)?;
        Ok(HttpRequest::get(url)
            .with_timeout(self.config.request_timeout())
            .with_header("accept", "application/json"))
    }
}

#[async_trait]
impl MovieCatalog for CatalogClient {
    async fn fetch_page(
        &self,
        page: u32,
        query: &str,
    ) -> Result<MovieList, FetchError> {
        let request = self.build_request(page, query)?;

        if !self.connectivity.is_connected().await {
            warn!(page, "catalog fetch skipped, no network connection");
            return Err(FetchError::Offline);
        }

        debug!(url = %redact_api_key(&request.url), "requesting catalog page");
        let body = self.http.get(&request).await?;
        let list = decode_page(&body)?;

        debug!(
            page = list.page,
            results = list.results.len(),
            total_pages = list.total_pages,
            "decoded catalog page"
        );
        Ok(list)
    }
}

/// Decode a response body into a page, keeping the JSON path of the first
/// field that did not match.
pub fn decode_page(body: &[u8]) -> Result<MovieList, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::NoData);
    }

    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let list = serde_path_to_error::deserialize(&mut deserializer).map_err(
        |err| FetchError::Decode {
            path: err.path().to_string(),
            source: err.into_inner(),
        },
    )?;
    deserializer.end().map_err(|source| FetchError::Decode {
        path: ".".to_string(),
        source,
    })?;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssumeOnline;
    use mockall::mock;
    use movieflix_contracts::http::TransportError;
    use std::fmt;
    use std::time::Duration;

    mock! {
        pub Http {}

        #[async_trait]
        impl HttpClient for Http {
            async fn get(
                &self,
                request: &HttpRequest,
            ) -> Result<Vec<u8>, TransportError>;
        }
    }

    impl fmt::Debug for MockHttp {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("MockHttp")
        }
    }

    #[derive(Debug)]
    struct Disconnected;

    #[async_trait]
    impl ConnectivityProbe for Disconnected {
        async fn is_connected(&self) -> bool {
            false
        }
    }

    const ONE_MOVIE: &str = r#"{
        "page": 1,
        "results": [{"id": 1, "title": "Heat", "vote_average": 7.9}],
        "total_pages": 5,
        "total_results": 100
    }"#;

    fn config() -> CatalogConfig {
        CatalogConfig {
            api_key: "test-key".into(),
            ..CatalogConfig::default()
        }
    }

    fn client(http: MockHttp) -> CatalogClient {
        CatalogClient::new(Arc::new(http), Arc::new(AssumeOnline), config())
    }

    #[tokio::test]
    async fn sends_json_get_with_fixed_timeout() {
        let mut http = MockHttp::new();
        http.expect_get()
            .withf(|request: &HttpRequest| {
                request.header("accept") == Some("application/json")
                    && request.timeout == Duration::from_secs(10)
                    && request.url.path() == "/3/movie/popular"
            })
            .times(1)
            .returning(|_| Ok(ONE_MOVIE.as_bytes().to_vec()));

        let page = client(http).fetch_page(1, "").await.unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.results[0].id, Some(1));
    }

    #[tokio::test]
    async fn search_query_routes_to_search_endpoint() {
        let mut http = MockHttp::new();
        http.expect_get()
            .withf(|request: &HttpRequest| {
                request.url.path() == "/3/search/movie"
                    && request
                        .url
                        .query_pairs()
                        .any(|(key, value)| key == "query" && value == "alien")
            })
            .times(1)
            .returning(|_| Ok(ONE_MOVIE.as_bytes().to_vec()));

        client(http).fetch_page(4, "alien").await.unwrap();
    }

    #[tokio::test]
    async fn offline_never_touches_the_transport() {
        let mut http = MockHttp::new();
        http.expect_get().times(0);

        let client = CatalogClient::new(
            Arc::new(http),
            Arc::new(Disconnected),
            config(),
        );
        let err = client.fetch_page(1, "").await.unwrap_err();
        assert!(err.is_offline());
    }

    #[tokio::test]
    async fn empty_body_is_no_data() {
        let mut http = MockHttp::new();
        http.expect_get().returning(|_| Ok(Vec::new()));

        let err = client(http).fetch_page(1, "").await.unwrap_err();
        assert!(matches!(err, FetchError::NoData));
    }

    #[tokio::test]
    async fn transport_failure_keeps_its_cause() {
        let mut http = MockHttp::new();
        http.expect_get().returning(|_| Err(TransportError::Timeout));

        let err = client(http).fetch_page(1, "").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(TransportError::Timeout)));
    }

    #[tokio::test]
    async fn invalid_base_url_fails_before_any_io() {
        let mut http = MockHttp::new();
        http.expect_get().times(0);

        let config = CatalogConfig {
            api_base_url: "not a url".into(),
            ..config()
        };
        let client =
            CatalogClient::new(Arc::new(http), Arc::new(AssumeOnline), config);
        let err = client.fetch_page(1, "").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn schema_mismatch_reports_the_failing_path() {
        let body = br#"{
            "page": 1,
            "results": [{"id": "one"}],
            "total_pages": 1,
            "total_results": 1
        }"#;
        match decode_page(body) {
            Err(FetchError::Decode { path, source }) => {
                assert_eq!(path, "results[0].id");
                assert!(source.is_data());
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_bytes_after_the_page_are_rejected() {
        let body = format!("{ONE_MOVIE} {{\"page\": 2}}");
        match decode_page(body.as_bytes()) {
            Err(FetchError::Decode { path, source }) => {
                assert_eq!(path, ".");
                assert!(source.is_syntax());
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_whitespace_is_fine() {
        let body = format!("{ONE_MOVIE}\n\n");
        assert!(decode_page(body.as_bytes()).is_ok());
    }

    #[test]
    fn whitespace_body_is_no_data() {
        assert!(matches!(decode_page(b"  \n"), Err(FetchError::NoData)));
    }

    #[test]
    fn api_error_document_is_a_decode_error() {
        let body = br#"{
            "status_code": 7,
            "status_message": "Invalid API key",
            "success": false
        }"#;
        assert!(matches!(decode_page(body), Err(FetchError::Decode { .. })));
    }
}
