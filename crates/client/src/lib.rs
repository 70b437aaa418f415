//! HTTP client for the Messari data API.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod options;

pub use client::MessariClient;
pub use error::UpstreamError;
pub use fetcher::{AssetFetcher, AssetPage, PageRequest};
pub use options::{AssetFieldsOptions, GetAllAssetsOptions};
