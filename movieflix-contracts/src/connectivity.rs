use async_trait::async_trait;
use std::fmt::Debug;

/// Reports whether the network is usable right now. Polled once per fetch.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync + Debug {
    async fn is_connected(&self) -> bool;
}
