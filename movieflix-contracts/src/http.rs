use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A fully built GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub timeout: Duration,
    pub headers: Vec<(&'static str, String)>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(30),
            headers: Vec::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(
        mut self,
        name: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Why a request never produced a usable body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("the request timed out")]
    Timeout,
    #[error("could not connect: {0}")]
    Connect(String),
    #[error("server responded with HTTP {status}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Other(String),
}

/// Performs HTTP GETs and returns the raw body.
#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    async fn get(
        &self,
        request: &HttpRequest,
    ) -> Result<Vec<u8>, TransportError>;
}
