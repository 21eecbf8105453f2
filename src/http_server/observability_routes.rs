//! Observability HTTP Routes
//!
//! Health and dataset diagnostics.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use crate::dataset::DatasetSlot;

/// Number of sample values reported per column by `/info`
pub const INFO_SAMPLE_SIZE: usize = 10;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub data_loaded: bool,
}

/// Create observability routes
pub fn observability_routes(dataset: Arc<DatasetSlot>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .with_state(dataset)
}

/// Health check handler
async fn health_handler(State(dataset): State<Arc<DatasetSlot>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        data_loaded: dataset.is_loaded(),
    };

    (StatusCode::OK, Json(response))
}

/// Dataset summary, or an error object while nothing is loaded
async fn info_handler(State(dataset): State<Arc<DatasetSlot>>) -> Response {
    match dataset.get() {
        Some(ds) => Json(ds.summary(INFO_SAMPLE_SIZE)).into_response(),
        None => Json(json!({"error": "Data not loaded"})).into_response(),
    }
}
