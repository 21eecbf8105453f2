//! Result types for query execution

use serde::{Deserialize, Serialize};

use crate::dataset::Feature;

/// GeoJSON FeatureCollection handed to the map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates an explicitly empty collection
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a collection from features
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the collection has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Counters describing one execution
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionStats {
    /// Intent kind that was executed
    pub kind: &'static str,
    /// Features examined
    pub scanned_count: usize,
    /// Features matched (for aggregates: the leading group's count)
    pub matched_count: usize,
    /// Conditions actually enforced after the column guard
    pub enforced_conditions: usize,
    /// Summed line length of the matched features, when the column exists
    pub total_length: Option<f64>,
}

impl ExecutionStats {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            scanned_count: 0,
            matched_count: 0,
            enforced_conditions: 0,
            total_length: None,
        }
    }
}

/// Result of executing one intent
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Markdown-flavoured answer text
    pub text_response: String,
    /// Features to render
    pub matched_features: FeatureCollection,
    /// Execution counters
    pub stats: ExecutionStats,
}

/// Formats an integer with comma thousands separators
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
