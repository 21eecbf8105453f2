//! Dataset summary for diagnostics

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::dataset::Dataset;
use super::feature::fields;

/// Columns whose most frequent values are reported
pub const SAMPLE_COLUMNS: [&str; 4] = [fields::VOLTAGE, fields::OWNER, fields::STATUS, fields::TYPE];

/// A value and how many features carry it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: Value,
    pub count: usize,
}

/// Size, columns and sample values of a dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_features: usize,
    pub columns: Vec<String>,
    pub loaded_at: DateTime<Utc>,
    pub sample_data: BTreeMap<String, Vec<ValueCount>>,
}

impl DatasetSummary {
    pub(crate) fn build(dataset: &Dataset, top_n: usize) -> Self {
        let sample_data = SAMPLE_COLUMNS
            .iter()
            .filter(|column| dataset.has_column(column))
            .map(|column| (column.to_string(), value_counts(dataset, column, top_n)))
            .collect();

        Self {
            total_features: dataset.len(),
            columns: dataset.columns().to_vec(),
            loaded_at: dataset.loaded_at(),
            sample_data,
        }
    }

    /// Emits the summary as log events: one for the dataset, one per sampled column
    pub fn log(&self) {
        info!(
            features = self.total_features,
            columns = ?self.columns,
            "dataset loaded"
        );
        for (column, values) in &self.sample_data {
            let rendered: Vec<String> = values.iter().map(|vc| vc.value.to_string()).collect();
            info!(column = %column, values = ?rendered, "sample values");
        }
    }
}

/// Most frequent non-null values of a column.
///
/// Ordered by count descending, then by the value's JSON text ascending.
fn value_counts(dataset: &Dataset, column: &str, top_n: usize) -> Vec<ValueCount> {
    let mut counts: HashMap<String, ValueCount> = HashMap::new();

    for feature in dataset.features() {
        if let Some(value) = feature.get(column) {
            counts
                .entry(value.to_string())
                .or_insert_with(|| ValueCount {
                    value: value.clone(),
                    count: 0,
                })
                .count += 1;
        }
    }

    let mut ranked: Vec<(String, ValueCount)> = counts.into_iter().collect();
    ranked.sort_by(|(ka, a), (kb, b)| b.count.cmp(&a.count).then_with(|| ka.cmp(kb)));
    ranked.into_iter().take(top_n).map(|(_, vc)| vc).collect()
}
