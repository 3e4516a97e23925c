use movieflix_contracts::http::TransportError;
use thiserror::Error;

/// Why a catalog page could not be produced. Every variant is terminal for
/// the operation that triggered it; nothing is retried automatically.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("no data received from the catalog")]
    NoData,

    #[error("network error: {0}")]
    Transport(#[from] TransportError),

    #[error("unexpected catalog response at `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no internet connection")]
    Offline,
}

impl FetchError {
    /// Heading for the user-facing message sheet.
    pub fn title(&self) -> &'static str {
        match self {
            FetchError::Offline => "Warning",
            _ => "Error",
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, FetchError::Offline)
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
