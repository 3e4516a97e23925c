//! Catalog access: request building, transport and page decoding.

pub mod client;
pub mod connectivity;
pub mod http;
pub mod request;

pub use client::{CatalogClient, decode_page};
pub use connectivity::{AssumeOnline, TcpConnectivityProbe};
pub use http::ReqwestHttpClient;
pub use request::{CatalogEndpoint, PageRequest};

use crate::error::FetchError;
use async_trait::async_trait;
use movieflix_model::MovieList;
use std::fmt::Debug;

/// Source of catalog pages. `CatalogClient` is the production implementation;
/// the browse controller only sees this trait.
#[async_trait]
pub trait MovieCatalog: Send + Sync + Debug {
    /// Fetch one page. A non-empty `query` selects the search listing,
    /// which does not honor `page`.
    async fn fetch_page(
        &self,
        page: u32,
        query: &str,
    ) -> Result<MovieList, FetchError>;
}
