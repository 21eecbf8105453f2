//! # gridquery HTTP Server Module
//!
//! Thin axum shell around the query pipeline. The dataset loads in the
//! background; until it is installed, queries answer 503.
//!
//! # Endpoints
//!
//! - `POST /api/query` - Answer a natural-language question
//! - `GET /health` - Liveness and dataset readiness
//! - `GET /info` - Dataset summary

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod query_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use observability_routes::INFO_SAMPLE_SIZE;
pub use server::{spawn_loader, HttpServer, CONTENT_SECURITY_POLICY};
