use crate::config::CatalogConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use movieflix_contracts::connectivity::ConnectivityProbe;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

/// Probe for hosts that handle reachability themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeOnline;

#[async_trait]
impl ConnectivityProbe for AssumeOnline {
    async fn is_connected(&self) -> bool {
        true
    }
}

/// Reports online when a TCP connection to the catalog host succeeds within
/// the timeout.
#[derive(Debug, Clone)]
pub struct TcpConnectivityProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpConnectivityProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Probe the host named by `api_base_url`.
    pub fn for_catalog(config: &CatalogConfig) -> Result<Self, FetchError> {
        let url = Url::parse(&config.api_base_url)?;
        let host = url.host_str().ok_or(url::ParseError::EmptyHost)?;
        let port = url.port_or_known_default().unwrap_or(443);
        Ok(Self::new(host, port, config.connectivity_timeout()))
    }
}

#[async_trait]
impl ConnectivityProbe for TcpConnectivityProbe {
    async fn is_connected(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match timeout(self.timeout, connect).await {
            Ok(Ok(_)) => true,
            Ok(Err(err)) => {
                debug!(
                    host = %self.host,
                    port = self.port,
                    error = %err,
                    "connectivity probe failed"
                );
                false
            }
            Err(_) => {
                debug!(
                    host = %self.host,
                    port = self.port,
                    "connectivity probe timed out"
                );
                false
            }
        }
    }
}
