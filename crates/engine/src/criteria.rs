//! Selection policy — decides which listed assets enter an aggregate.
//!
//! With a tag and/or sector filter, an asset is selected when every given
//! filter matches exactly (case-sensitive). Without filters, an asset is
//! selected when its market cap reaches the configured floor.
//!
//! The unfiltered mode relies on upstream pages being sorted by descending
//! market cap: the first asset under the floor ends the scan of its page,
//! although later pages are still fetched. An unsorted page therefore loses
//! qualifying assets that follow the first small one. The early exit can be
//! turned off through `AggregationSettings::stop_on_first_below_threshold`.

use messari_common::types::Asset;

use crate::aggregator::AggregationSettings;

/// Optional tag and sector filters for one aggregation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    tag: Option<String>,
    sector: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw query values. Empty strings count as absent.
    pub fn new(tag: Option<String>, sector: Option<String>) -> Self {
        Self {
            tag: tag.filter(|t| !t.is_empty()),
            sector: sector.filter(|s| !s.is_empty()),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    /// Neither a tag nor a sector was requested.
    pub fn is_unfiltered(&self) -> bool {
        self.tag.is_none() && self.sector.is_none()
    }

    /// Whether `asset` satisfies every filter that is set.
    pub fn matches(&self, asset: &Asset) -> bool {
        let tag_ok = self.tag.as_deref().is_none_or(|tag| asset.tag() == Some(tag));
        let sector_ok = self
            .sector
            .as_deref()
            .is_none_or(|sector| asset.sector() == Some(sector));
        tag_ok && sector_ok
    }
}

/// Outcome of evaluating one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Take,
    Skip,
    /// Skip this asset and the rest of its page.
    StopPage,
}

/// Criteria bound to the thresholds they are evaluated with.
#[derive(Debug, Clone)]
pub struct SelectionPolicy<'a> {
    criteria: &'a FilterCriteria,
    min_market_cap_usd: f64,
    stop_on_first_below_threshold: bool,
}

impl<'a> SelectionPolicy<'a> {
    pub fn new(criteria: &'a FilterCriteria, settings: &AggregationSettings) -> Self {
        Self {
            criteria,
            min_market_cap_usd: settings.min_market_cap_usd,
            stop_on_first_below_threshold: settings.stop_on_first_below_threshold,
        }
    }

    pub fn evaluate(&self, asset: &Asset) -> Selection {
        if !self.criteria.is_unfiltered() {
            return if self.criteria.matches(asset) {
                Selection::Take
            } else {
                Selection::Skip
            };
        }

        if asset.market_cap_usd() >= self.min_market_cap_usd {
            Selection::Take
        } else if self.stop_on_first_below_threshold {
            Selection::StopPage
        } else {
            Selection::Skip
        }
    }
}
