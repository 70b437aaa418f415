use serde::Serialize;

use messari_common::types::Asset;

/// Aggregate metrics over the selected assets.
///
/// Serializes to the public envelope: `tags`, `sector`, `volume`,
/// `24HourChange`, `marketcap`, each omitted when empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Distinct non-empty tags, first-seen order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Distinct non-empty sectors, first-seen order.
    #[serde(rename = "sector", skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<String>,

    #[serde(rename = "volume", skip_serializing_if = "is_zero")]
    pub total_volume: f64,

    /// Mean 24h USD change; `0.0` when nothing was selected.
    #[serde(rename = "24HourChange", skip_serializing_if = "is_zero")]
    pub average_percent_change_24h: f64,

    #[serde(rename = "marketcap", skip_serializing_if = "is_zero")]
    pub total_market_cap: f64,

    #[serde(skip)]
    pub selected_count: usize,

    /// Non-empty pages read from upstream.
    #[serde(skip)]
    pub pages_fetched: u32,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running sums over selected assets. Assets are folded in and dropped.
#[derive(Debug, Default)]
pub struct Accumulator {
    tags: Vec<String>,
    sectors: Vec<String>,
    volume: f64,
    market_cap: f64,
    percent_change: f64,
    count: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, asset: &Asset) {
        self.volume += asset.volume_24h();
        self.market_cap += asset.market_cap_usd();
        self.percent_change += asset.percent_change_24h_usd();
        self.count += 1;

        push_distinct(&mut self.tags, asset.tag());
        push_distinct(&mut self.sectors, asset.sector());
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn finish(self, pages_fetched: u32) -> AggregateResult {
        let average = if self.count == 0 {
            0.0
        } else {
            self.percent_change / self.count as f64
        };

        AggregateResult {
            tags: self.tags,
            sectors: self.sectors,
            total_volume: round2(self.volume),
            average_percent_change_24h: round2(average),
            total_market_cap: round2(self.market_cap),
            selected_count: self.count,
            pages_fetched,
        }
    }
}

fn push_distinct(values: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        if !values.iter().any(|existing| existing == value) {
            values.push(value.to_string());
        }
    }
}
