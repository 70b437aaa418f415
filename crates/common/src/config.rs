use std::net::SocketAddr;

use serde::Deserialize;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Messari API key, forwarded upstream as `x-messari-api-key`
    pub messari_api_key: String,

    /// Upstream origin (default: https://data.messari.io)
    pub messari_base_url: String,

    /// Address the API server binds to (default: 0.0.0.0:8000)
    pub api_listen_addr: SocketAddr,

    /// Timeout for a single upstream HTTP call, in seconds
    pub upstream_timeout_secs: u64,

    /// Timeout for a whole inbound request, in seconds. Aggregation walks every
    /// upstream page, so this needs to be generous.
    pub request_timeout_secs: u64,

    /// Page size used when walking `/api/v2/assets` for aggregation
    pub aggregate_page_size: u32,

    /// Market cap floor (USD) applied when no tag/sector filter is given
    pub aggregate_min_market_cap_usd: f64,

    /// Stop scanning the current page at the first asset below the market cap floor.
    /// Upstream pages are sorted by descending market cap.
    pub aggregate_stop_on_first_below_threshold: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let messari_api_key = lookup("MESSARI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("MESSARI_API_KEY environment variable is required"))?;

        Ok(Self {
            messari_api_key,
            messari_base_url: var("MESSARI_BASE_URL", "https://data.messari.io"),
            api_listen_addr: var("API_LISTEN_ADDR", "0.0.0.0:8000")
                .parse()
                .map_err(|_| anyhow::anyhow!("API_LISTEN_ADDR must be a valid socket address"))?,
            upstream_timeout_secs: var("UPSTREAM_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .ok()
                .filter(|secs: &u64| *secs > 0)
                .ok_or_else(|| anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a positive u64"))?,
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS", "300")
                .parse::<u64>()
                .ok()
                .filter(|secs: &u64| *secs > 0)
                .ok_or_else(|| anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a positive u64"))?,
            aggregate_page_size: var("AGGREGATE_PAGE_SIZE", "500")
                .parse::<u32>()
                .ok()
                .filter(|size: &u32| *size > 0)
                .ok_or_else(|| anyhow::anyhow!("AGGREGATE_PAGE_SIZE must be a positive u32"))?,
            aggregate_min_market_cap_usd: var("AGGREGATE_MIN_MARKET_CAP_USD", "20000000")
                .parse::<f64>()
                .ok()
                .filter(|cap: &f64| cap.is_finite())
                .ok_or_else(|| {
                    anyhow::anyhow!("AGGREGATE_MIN_MARKET_CAP_USD must be a finite number")
                })?,
            aggregate_stop_on_first_below_threshold: var(
                "AGGREGATE_STOP_ON_FIRST_BELOW_THRESHOLD",
                "true",
            )
            .parse::<bool>()
            .map_err(|_| {
                anyhow::anyhow!("AGGREGATE_STOP_ON_FIRST_BELOW_THRESHOLD must be true or false")
            })?,
        })
    }
}
