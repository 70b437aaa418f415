use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use messari_common::config::AppConfig;
use messari_common::types::{AllAssetsResponse, AssetMetricsResponse, AssetResponse};

use crate::error::UpstreamError;
use crate::fetcher::AssetPage;
use crate::options::{AssetFieldsOptions, GetAllAssetsOptions};

/// Public Messari API origin.
pub const DEFAULT_BASE_URL: &str = "https://data.messari.io";

const API_KEY_HEADER: &str = "x-messari-api-key";

/// Client for the Messari REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MessariClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl MessariClient {
    /// Create a client for `base_url` that authenticates with `api_key`.
    ///
    /// `timeout` bounds each upstream call, connect through body.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(UpstreamError::Config(
                "an API key is required to create a Messari client".to_string(),
            ));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| UpstreamError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::Config(format!(
                "Base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Build a client from the application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        Self::new(
            &config.messari_base_url,
            config.messari_api_key.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    /// Fetch one page of `/api/v2/assets`.
    ///
    /// A 404 means the requested page is past the last one and is reported as
    /// [`AssetPage::End`].
    pub async fn get_all_assets(
        &self,
        options: GetAllAssetsOptions,
    ) -> Result<AssetPage, UpstreamError> {
        let query = options.resolve();
        let url = self.endpoint(&["api", "v2", "assets"]);
        let response = self.get(url, &query.query_pairs()).await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(page = query.page, "No asset page upstream, end of listing");
            return Ok(AssetPage::End);
        }

        let body: AllAssetsResponse = Self::decode(response).await?;
        Ok(AssetPage::Assets(body.data.unwrap_or_default()))
    }

    /// Fetch basic metadata of an asset by symbol or slug.
    pub async fn get_asset(
        &self,
        symbol_or_slug: &str,
        options: AssetFieldsOptions,
    ) -> Result<AssetResponse, UpstreamError> {
        let url = self.endpoint(&["api", "v1", "assets", symbol_or_slug]);
        let response = self.get(url, &options.query_pairs()).await?;
        Self::decode(response).await
    }

    /// Fetch the metrics of an asset by symbol or slug.
    pub async fn get_asset_metrics(
        &self,
        symbol_or_slug: &str,
        options: AssetFieldsOptions,
    ) -> Result<AssetMetricsResponse, UpstreamError> {
        let url = self.endpoint(&["api", "v1", "assets", symbol_or_slug, "metrics"]);
        let response = self.get(url, &options.query_pairs()).await?;
        Self::decode(response).await
    }

    /// Append path segments to the base URL. Segments are percent-encoded, so
    /// a user supplied slug cannot escape its position in the path.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(
        &self,
        url: Url,
        query: &[(&'static str, String)],
    ) -> Result<reqwest::Response, UpstreamError> {
        let request = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .build()?;

        tracing::debug!(url = %request.url(), "Making GET request");
        Ok(self.http.execute(request).await?)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UpstreamError> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            return Err(UpstreamError::BadStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { url, source })
    }
}
