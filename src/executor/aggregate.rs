//! Group-by counting for aggregate intents
//!
//! Groups are keyed by the field's text. Keys are visited in lexicographic
//! order and the leader only changes on a strictly greater count, so ties go
//! to the lexicographically first key.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::dataset::Feature;

/// A group key and its row count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

/// Counts rows per group
pub struct GroupCounter;

impl GroupCounter {
    /// Counts features per value of `field`. Rows without the field are skipped.
    pub fn counts(features: &[Feature], field: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for feature in features {
            if let Some(value) = feature.get(field) {
                *counts.entry(Self::group_key(value)).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Returns the group with the highest count, or None if no row has the field
    pub fn top(features: &[Feature], field: &str) -> Option<GroupCount> {
        let mut best: Option<GroupCount> = None;

        for (key, count) in Self::counts(features, field) {
            let replace = match &best {
                Some(current) => count > current.count,
                None => true,
            };
            if replace {
                best = Some(GroupCount { key, count });
            }
        }

        best
    }

    /// Text used to group a value: strings as-is, numbers by value
    /// (so `1` and `1.0` share a group), anything else as JSON
    fn group_key(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => match n.as_f64() {
                Some(f) => f.to_string(),
                None => n.to_string(),
            },
            other => other.to_string(),
        }
    }
}
