//! Asset proxy routes — listing, metrics and metadata straight from Messari.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use messari_client::{AssetFieldsOptions, GetAllAssetsOptions, UpstreamError};
use messari_common::error::AppError;
use messari_common::types::{Asset, AssetMetadata, AssetMetricsData};

use super::{QueryPairs, first_query_value};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/asset", get(list_assets))
        .route("/api/asset/{symbol_or_slug}", get(get_asset_metrics))
        .route("/api/asset/{symbol_or_slug}/metadata", get(get_asset_metadata))
}

/// GET /api/asset — One page of assets with the upstream default page size.
async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let page = match first_query_value(&query, &["page"]) {
        Some(raw) => Some(
            raw.parse::<u32>()
                .map_err(|_| AppError::Validation("Invalid page specified in query.".to_string()))?,
        ),
        None => None,
    };

    let listing = state
        .messari
        .get_all_assets(GetAllAssetsOptions {
            page,
            ..Default::default()
        })
        .await
        .map_err(|e| {
            tracing::error!(page = ?page, error = %e, "Failed to list assets");
            AppError::Upstream("An error occurred getting all asset metrics.".to_string())
        })?;

    Ok(Json(listing.into_assets()))
}

/// GET /api/asset/:symbol_or_slug — Metrics of a single asset.
async fn get_asset_metrics(
    State(state): State<AppState>,
    Path(symbol_or_slug): Path<String>,
) -> Result<Json<AssetMetricsData>, AppError> {
    let resp = state
        .messari
        .get_asset_metrics(&symbol_or_slug, AssetFieldsOptions::default())
        .await
        .map_err(|e| asset_error(&symbol_or_slug, "metrics", e))?;

    Ok(Json(resp.data))
}

/// GET /api/asset/:symbol_or_slug/metadata — Basic metadata of a single asset.
async fn get_asset_metadata(
    State(state): State<AppState>,
    Path(symbol_or_slug): Path<String>,
) -> Result<Json<AssetMetadata>, AppError> {
    let resp = state
        .messari
        .get_asset(&symbol_or_slug, AssetFieldsOptions::default())
        .await
        .map_err(|e| asset_error(&symbol_or_slug, "metadata", e))?;

    Ok(Json(resp.data))
}

/// Log the upstream failure and turn it into a client-safe error.
fn asset_error(symbol_or_slug: &str, what: &str, err: UpstreamError) -> AppError {
    if err.is_not_found() {
        tracing::debug!(asset = symbol_or_slug, "Asset not found upstream");
        return AppError::NotFound(format!("Asset {} not found.", symbol_or_slug));
    }

    tracing::error!(asset = symbol_or_slug, error = %err, "Failed to fetch asset {}", what);
    AppError::Upstream(format!(
        "An error occurred getting {}'s {}.",
        symbol_or_slug, what
    ))
}
