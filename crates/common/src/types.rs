//! Upstream Messari data model.
//!
//! Only the fields the service reasons about are typed. Everything else the
//! upstream sends is kept in flattened `extra` maps so the proxy routes re-emit
//! it unchanged.

use serde::{Deserialize, Serialize};

/// Catch-all for upstream fields that are passed through untouched.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Request status block present on every Messari response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Response of `GET /api/v2/assets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllAssetsResponse {
    #[serde(default)]
    pub status: Status,
    /// `None` when the upstream omitted `data` or sent `null`.
    #[serde(default)]
    pub data: Option<Vec<Asset>>,
}

/// Response of `GET /api/v1/assets/{key}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetResponse {
    #[serde(default)]
    pub status: Status,
    pub data: AssetMetadata,
}

/// Response of `GET /api/v1/assets/{key}/metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMetricsResponse {
    #[serde(default)]
    pub status: Status,
    pub data: AssetMetricsData,
}

/// Basic identifying metadata of an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Metadata and metrics of one asset, as returned flat by the metrics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetMetricsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// A cryptocurrency asset as listed by `/api/v2/assets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl Asset {
    /// Current market cap in USD; `0.0` when the upstream has none.
    pub fn market_cap_usd(&self) -> f64 {
        self.metrics
            .as_ref()
            .and_then(|m| m.marketcap.as_ref())
            .and_then(|c| c.current_marketcap_usd)
            .unwrap_or(0.0)
    }

    /// Trading volume over the last 24 hours; `0.0` when missing.
    pub fn volume_24h(&self) -> f64 {
        self.market_data()
            .and_then(|d| d.volume_last_24_hours)
            .unwrap_or(0.0)
    }

    /// USD price change over the last 24 hours, in percent; `0.0` when missing.
    pub fn percent_change_24h_usd(&self) -> f64 {
        self.market_data()
            .and_then(|d| d.percent_change_usd_last_24_hours)
            .unwrap_or(0.0)
    }

    /// The asset's tag. Messari models this as a single string, not a list.
    pub fn tag(&self) -> Option<&str> {
        self.overview().and_then(|o| o.tags.as_deref())
    }

    pub fn sector(&self) -> Option<&str> {
        self.overview().and_then(|o| o.sector.as_deref())
    }

    fn market_data(&self) -> Option<&MarketData> {
        self.metrics.as_ref().and_then(|m| m.market_data.as_ref())
    }

    fn overview(&self) -> Option<&GeneralOverview> {
        self.profile
            .as_ref()
            .and_then(|p| p.general.as_ref())
            .and_then(|g| g.overview.as_ref())
    }
}

/// An asset's collection of metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_data: Option<MarketData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketcap: Option<Marketcap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply: Option<Supply>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_btc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_eth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_last_24_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_volume_last_24_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_last_24_hours_overstatement_multiple: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change_usd_last_1_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change_usd_last_24_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change_btc_last_24_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change_eth_last_24_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ohlcv_last_1_hour: Option<Ohlcv>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ohlcv_last_24_hour: Option<Ohlcv>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trade_at: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Open/high/low/close/volume candle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marketcap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketcap_dominance_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_marketcap_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_2050_marketcap_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_plus10_marketcap_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_marketcap_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realized_marketcap_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_turnover_last_24_hours_percent: Option<f64>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_2050: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_plus10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circulating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_2050_issued_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_inflation_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_to_flow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_plus10_issued_percent: Option<f64>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// An asset's profile. Only `general.overview` is typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<ProfileGeneral>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileGeneral {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<GeneralOverview>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralOverview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_links: Option<Vec<Link>>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// A named external link (official site, explorer, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
