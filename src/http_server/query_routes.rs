//! Query HTTP Routes
//!
//! `POST /query` answers one natural-language question.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::dataset::DatasetSlot;
use crate::pipeline::{self, QueryRequest, QueryResponse};

use super::errors::{ApiError, ApiResult};

/// Create query routes
pub fn query_routes(dataset: Arc<DatasetSlot>) -> Router {
    Router::new()
        .route("/query", post(query_handler))
        .with_state(dataset)
}

/// Parse and execute the query against the loaded dataset
async fn query_handler(
    State(dataset): State<Arc<DatasetSlot>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> ApiResult<Json<QueryResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let response = pipeline::answer(&dataset, &request.query)?;
    Ok(Json(response))
}
