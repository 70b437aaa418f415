//! Integration tests for `MessariClient` against a mocked upstream.
//!
//! ```bash
//! cargo test -p messari-client --test integration
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use messari_client::{
    AssetFetcher, AssetFieldsOptions, AssetPage, GetAllAssetsOptions, MessariClient, PageRequest,
    UpstreamError,
};

const API_KEY: &str = "test-key";

// ============================================================
// Helpers
// ============================================================

fn client_for(server: &MockServer) -> MessariClient {
    MessariClient::new(&server.uri(), API_KEY, Duration::from_secs(5)).unwrap()
}

fn asset_json(symbol: &str, market_cap: f64) -> serde_json::Value {
    json!({
        "id": format!("id-{}", symbol),
        "symbol": symbol,
        "name": symbol,
        "slug": symbol.to_lowercase(),
        "metrics": {
            "market_data": {
                "volume_last_24_hours": 100.0,
                "percent_change_usd_last_24_hours": 1.0
            },
            "marketcap": { "current_marketcap_usd": market_cap }
        }
    })
}

// ============================================================
// Listing
// ============================================================

#[tokio::test]
async fn test_get_all_assets_sends_key_and_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(header("x-messari-api-key", API_KEY))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "elapsed": 12.0, "timestamp": "2020-06-01T00:00:00Z" },
            "data": [asset_json("BTC", 1.0e11), asset_json("ETH", 2.0e10)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_all_assets(GetAllAssetsOptions::default())
        .await
        .unwrap();

    let assets = page.into_assets();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].symbol.as_deref(), Some("BTC"));
    assert_eq!(assets[1].market_cap_usd(), 2.0e10);
}

#[tokio::test]
async fn test_get_all_assets_404_is_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": { "error_code": 404, "error_message": "Not Found" }
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_all_assets(GetAllAssetsOptions {
            page: Some(9),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page, AssetPage::End);
}

#[tokio::test]
async fn test_get_all_assets_missing_data_is_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": {} })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .get_all_assets(GetAllAssetsOptions::default())
        .await
        .unwrap();

    assert_eq!(page, AssetPage::Assets(vec![]));
}

#[tokio::test]
async fn test_get_all_assets_server_error_is_bad_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_all_assets(GetAllAssetsOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::BadStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_get_all_assets_garbage_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_all_assets(GetAllAssetsOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    // Nothing listens on port 1.
    let client = MessariClient::new("http://127.0.0.1:1", API_KEY, Duration::from_secs(2)).unwrap();

    let err = client
        .get_all_assets(GetAllAssetsOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Transport(_)));
}

// ============================================================
// Fetcher
// ============================================================

#[tokio::test]
async fn test_fetch_assets_page_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "3"))
        .and(query_param("limit", "500"))
        .and(query_param("fields", "id,metrics,profile/general/overview/tags"))
        .and(query_param("with-metrics", "true"))
        .and(query_param("with-profiles", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [asset_json("SOL", 5.0e9)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PageRequest {
        page: 3,
        page_size: 500,
        fields: vec![
            "id".to_string(),
            "metrics".to_string(),
            "profile/general/overview/tags".to_string(),
        ],
        metrics_only: true,
        profiles_only: true,
    };

    let page = client_for(&server)
        .fetch_assets_page(&request)
        .await
        .unwrap();

    assert_eq!(page.into_assets().len(), 1);
}

// ============================================================
// Per-asset endpoints
// ============================================================

#[tokio::test]
async fn test_get_asset_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/assets/btc"))
        .and(header("x-messari-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {},
            "data": {
                "id": "1e31218a",
                "symbol": "BTC",
                "name": "Bitcoin",
                "slug": "bitcoin",
                "contract_addresses": []
            }
        })))
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_asset("btc", AssetFieldsOptions::default())
        .await
        .unwrap();

    assert_eq!(resp.data.name.as_deref(), Some("Bitcoin"));
    assert!(resp.data.extra.contains_key("contract_addresses"));
}

#[tokio::test]
async fn test_get_asset_metrics_with_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/assets/eth/metrics"))
        .and(query_param("fields", "symbol,market_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "symbol": "ETH",
                "market_data": { "price_usd": 240.5 }
            }
        })))
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get_asset_metrics(
            "eth",
            AssetFieldsOptions {
                fields: Some(vec!["symbol".to_string(), "market_data".to_string()]),
            },
        )
        .await
        .unwrap();

    assert_eq!(resp.data.symbol.as_deref(), Some("ETH"));
    assert_eq!(
        resp.data.metrics.market_data.unwrap().price_usd,
        Some(240.5)
    );
}

#[tokio::test]
async fn test_get_asset_metrics_unknown_asset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/assets/nope/metrics"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_asset_metrics("nope", AssetFieldsOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}
