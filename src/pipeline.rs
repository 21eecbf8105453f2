//! Query pipeline
//!
//! Parse → execute → response, shared by the HTTP service and the CLI.
//! Each call is independent; nothing carries over between queries.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::dataset::DatasetSlot;
use crate::executor::{ExecutorResult, FeatureCollection, QueryExecutor};
use crate::parser::IntentParser;

/// Incoming question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Answer text plus the features to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub text_response: String,
    pub geojson_data: FeatureCollection,
}

/// Answers one query against the dataset in `slot`.
///
/// Fails only when no dataset is installed.
pub fn answer(slot: &DatasetSlot, query: &str) -> ExecutorResult<QueryResponse> {
    let request_id = Uuid::new_v4();
    let span = info_span!("query", %request_id);
    let _entered = span.enter();

    let intent = IntentParser::parse(query);
    debug!(kind = intent.kind(), description = ?intent.description(), "parsed query");

    let result = QueryExecutor::execute_on(slot, &intent)?;
    let stats = &result.stats;

    if intent.kind() == "unrecognized" {
        debug!(query, "query not recognized");
    } else {
        info!(
            kind = stats.kind,
            scanned = stats.scanned_count,
            matched = stats.matched_count,
            enforced_conditions = stats.enforced_conditions,
            total_length = ?stats.total_length,
            "query executed"
        );
    }

    Ok(QueryResponse {
        text_response: result.text_response,
        geojson_data: result.matched_features,
    })
}
