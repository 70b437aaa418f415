use thiserror::Error;

/// Failures talking to the Messari API.
///
/// The end of pagination is not an error; see [`crate::AssetPage::End`].
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    BadStatus { status: u16, url: String },

    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl UpstreamError {
    /// Whether the upstream answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::BadStatus { status: 404, .. })
    }
}
