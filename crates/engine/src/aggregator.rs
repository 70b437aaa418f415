//! Aggregation engine — walks the paginated asset listing and reduces the
//! selected assets into totals.
//!
//! Pages are fetched one at a time, starting at page 1, until the fetcher
//! reports the end of the listing or returns an empty page. Any other fetch
//! failure aborts the whole aggregation; partial totals are never returned.
//!
//! Each call owns its accumulator, so one `AssetAggregator` can serve any
//! number of requests.

use thiserror::Error;

use messari_client::{AssetFetcher, AssetPage, PageRequest, UpstreamError};
use messari_common::config::AppConfig;
use messari_common::types::Asset;

use crate::criteria::{FilterCriteria, Selection, SelectionPolicy};
use crate::result::{Accumulator, AggregateResult};

/// Fields requested for every asset while aggregating.
pub const AGGREGATE_FIELDS: &[&str] = &[
    "id",
    "name",
    "symbol",
    "slug",
    "metrics",
    "profile/general/overview/tags",
    "profile/general/overview/sector",
];

/// Default page size when walking the listing.
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Default market cap floor (USD) for unfiltered aggregation.
pub const DEFAULT_MIN_MARKET_CAP_USD: f64 = 20_000_000.0;

/// Tunables for an aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationSettings {
    pub page_size: u32,
    pub min_market_cap_usd: f64,
    /// End the scan of a page at its first asset under `min_market_cap_usd`.
    pub stop_on_first_below_threshold: bool,
}

impl AggregationSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.aggregate_page_size,
            min_market_cap_usd: config.aggregate_min_market_cap_usd,
            stop_on_first_below_threshold: config.aggregate_stop_on_first_below_threshold,
        }
    }
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_market_cap_usd: DEFAULT_MIN_MARKET_CAP_USD,
            stop_on_first_below_threshold: true,
        }
    }
}

/// A page fetch failed; the aggregation was abandoned.
#[derive(Debug, Error)]
#[error("Failed to fetch asset page {page}: {source}")]
pub struct AggregateError {
    pub page: u32,
    #[source]
    pub source: UpstreamError,
}

/// Aggregates asset metrics over everything an [`AssetFetcher`] lists.
pub struct AssetAggregator<F> {
    fetcher: F,
    settings: AggregationSettings,
}

impl<F: AssetFetcher> AssetAggregator<F> {
    pub fn new(fetcher: F, settings: AggregationSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Walk every page and aggregate the assets selected by `criteria`.
    pub async fn aggregate(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<AggregateResult, AggregateError> {
        let policy = SelectionPolicy::new(criteria, &self.settings);
        let mut accumulator = Accumulator::new();
        let mut pages_fetched = 0;
        let mut request = PageRequest {
            page: 1,
            page_size: self.settings.page_size,
            fields: AGGREGATE_FIELDS.iter().map(|f| f.to_string()).collect(),
            metrics_only: true,
            profiles_only: true,
        };

        loop {
            let assets = match self.fetcher.fetch_assets_page(&request).await {
                Ok(AssetPage::Assets(assets)) => assets,
                Ok(AssetPage::End) => {
                    tracing::debug!(page = request.page, "Reached end of asset listing");
                    break;
                }
                Err(source) => {
                    tracing::warn!(
                        page = request.page,
                        error = %source,
                        "Aborting aggregation, asset page fetch failed"
                    );
                    return Err(AggregateError {
                        page: request.page,
                        source,
                    });
                }
            };

            if assets.is_empty() {
                tracing::debug!(page = request.page, "Empty asset page, stopping");
                break;
            }

            pages_fetched += 1;
            let selected = Self::scan_page(&policy, &assets, &mut accumulator);
            tracing::debug!(
                page = request.page,
                listed = assets.len(),
                selected,
                "Scanned asset page"
            );

            request.page += 1;
        }

        let result = accumulator.finish(pages_fetched);

        tracing::info!(
            tag = criteria.tag().unwrap_or(""),
            sector = criteria.sector().unwrap_or(""),
            pages = result.pages_fetched,
            selected = result.selected_count,
            "Aggregated asset metrics"
        );

        Ok(result)
    }

    /// Fold the selected assets of one page into `accumulator`.
    /// Returns how many were selected.
    fn scan_page(
        policy: &SelectionPolicy<'_>,
        assets: &[Asset],
        accumulator: &mut Accumulator,
    ) -> usize {
        let before = accumulator.count();
        for asset in assets {
            match policy.evaluate(asset) {
                Selection::Take => accumulator.add(asset),
                Selection::Skip => {}
                Selection::StopPage => break,
            }
        }
        accumulator.count() - before
    }
}
