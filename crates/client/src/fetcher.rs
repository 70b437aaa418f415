//! Paged asset source consumed by the aggregation engine.

use std::future::Future;

use messari_common::types::Asset;

use crate::client::MessariClient;
use crate::error::UpstreamError;
use crate::options::GetAllAssetsOptions;

/// One page of the asset listing, or the signal that no more pages exist.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetPage {
    Assets(Vec<Asset>),
    End,
}

impl AssetPage {
    /// Assets on the page; `End` yields none.
    pub fn into_assets(self) -> Vec<Asset> {
        match self {
            AssetPage::Assets(assets) => assets,
            AssetPage::End => Vec::new(),
        }
    }
}

/// Parameters of a single page fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    pub fields: Vec<String>,
    /// Only list assets that have metrics.
    pub metrics_only: bool,
    /// Only list assets that have a profile.
    pub profiles_only: bool,
}

/// A source of paginated asset records.
pub trait AssetFetcher: Send + Sync {
    fn fetch_assets_page(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<AssetPage, UpstreamError>> + Send;
}

impl AssetFetcher for MessariClient {
    async fn fetch_assets_page(&self, request: &PageRequest) -> Result<AssetPage, UpstreamError> {
        self.get_all_assets(GetAllAssetsOptions {
            page: Some(request.page),
            limit: Some(request.page_size),
            fields: Some(request.fields.clone()),
            with_metrics_only: Some(request.metrics_only),
            with_profiles_only: Some(request.profiles_only),
            sort: None,
        })
        .await
    }
}
