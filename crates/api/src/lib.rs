//! Messari relay API server.
//!
//! Endpoints:
//! - GET /health — liveness probe
//! - GET /api/asset?page=N — one page of the upstream asset listing
//! - GET /api/asset/{symbol_or_slug} — metrics of one asset
//! - GET /api/asset/{symbol_or_slug}/metadata — basic metadata of one asset
//! - GET /api/aggregate?tag=&sector= — totals across every listed asset

pub mod routes;
pub mod state;
