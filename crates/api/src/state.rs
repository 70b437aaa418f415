//! Shared application state for the Axum API server.

use messari_client::{MessariClient, UpstreamError};
use messari_common::config::AppConfig;
use messari_engine::AggregationSettings;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub messari: MessariClient,
    pub aggregation: AggregationSettings,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(messari: MessariClient, config: AppConfig) -> Self {
        Self {
            messari,
            aggregation: AggregationSettings::from_config(&config),
            config,
        }
    }

    /// Build the upstream client from `config` and wrap both into state.
    pub fn from_config(config: AppConfig) -> Result<Self, UpstreamError> {
        let messari = MessariClient::from_config(&config)?;
        Ok(Self::new(messari, config))
    }
}
