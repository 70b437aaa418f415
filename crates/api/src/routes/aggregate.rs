//! Aggregate metrics route.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use messari_common::error::AppError;
use messari_engine::{AggregateResult, AssetAggregator, FilterCriteria};

use super::{QueryPairs, first_query_value};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/aggregate", get(aggregate_metrics))
}

/// GET /api/aggregate — Volume, market cap and mean 24h change across all assets.
///
/// Without filters only assets above the market cap floor count. With `tag`
/// and/or `sector`, assets must match every given filter exactly. A repeated
/// key uses its first value; `tags` is read when `tag` is absent.
async fn aggregate_metrics(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<AggregateResult>, AppError> {
    let criteria = FilterCriteria::new(
        first_query_value(&query, &["tag", "tags"]),
        first_query_value(&query, &["sector"]),
    );
    let aggregator = AssetAggregator::new(state.messari.clone(), state.aggregation.clone());

    let result = aggregator.aggregate(&criteria).await.map_err(|e| {
        tracing::error!(
            page = e.page,
            error = %e.source,
            "Asset aggregation failed"
        );
        AppError::Upstream("An error occurred aggregating asset metrics.".to_string())
    })?;

    Ok(Json(result))
}
