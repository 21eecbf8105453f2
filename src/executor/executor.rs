//! Query executor for gridquery
//!
//! Applies an intent to a dataset snapshot, producing deterministic results.
//!
//! Filter execution flow (strict order):
//! 1. Drop conditions whose field is not a column of the dataset
//! 2. Scan features in dataset order, keeping those matching every condition
//! 3. Sum line length over the matches, when the length column exists
//! 4. Render the answer text

use tracing::debug;

use crate::dataset::{fields, Dataset, DatasetSlot};
use crate::parser::{Condition, Intent};

use super::aggregate::GroupCounter;
use super::errors::{ExecutorError, ExecutorResult};
use super::filters::ConditionFilter;
use super::result::{group_thousands, ExecutionStats, FeatureCollection, QueryResult};

/// Answer returned for queries the vocabulary does not cover
pub const CLARIFICATION_TEXT: &str = "I only recognize specific analytical terms like '500kV', \
     'underground', or 'owns the most lines'. Please refine your query.";

/// Executes intents against a borrowed dataset snapshot
pub struct QueryExecutor<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new executor
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Executes an intent against the dataset held by `slot`.
    ///
    /// Fails with `GRID_DATASET_UNAVAILABLE` if nothing is installed yet,
    /// instead of reporting zero matches.
    pub fn execute_on(slot: &DatasetSlot, intent: &Intent) -> ExecutorResult<QueryResult> {
        let dataset = slot.get().ok_or_else(ExecutorError::dataset_unavailable)?;
        Ok(QueryExecutor::new(&dataset).execute(intent))
    }

    /// Executes an intent.
    ///
    /// This method is deterministic: same intent + same data = same result.
    pub fn execute(&self, intent: &Intent) -> QueryResult {
        match intent {
            Intent::Aggregate {
                group_by,
                description,
                ..
            } => self.execute_aggregate(group_by, description),
            Intent::Filter {
                conditions,
                description,
            } => self.execute_filter(conditions, description),
            Intent::Unrecognized { .. } => Self::execute_unrecognized(),
        }
    }

    /// Leaderboard over `group_by`; the whole dataset goes back for map context
    fn execute_aggregate(&self, group_by: &str, description: &str) -> QueryResult {
        let features = self.dataset.features();
        let mut stats = ExecutionStats::new("aggregate");
        stats.scanned_count = features.len();

        let text_response = match GroupCounter::top(features, group_by) {
            Some(top) => {
                stats.matched_count = top.count;
                format!(
                    "The utility that {} is **{}** with {} lines.",
                    description, top.key, top.count
                )
            }
            None => format!(
                "No {} values are available to determine which {}.",
                group_by, description
            ),
        };

        QueryResult {
            text_response,
            matched_features: FeatureCollection::new(features.to_vec()),
            stats,
        }
    }

    fn execute_filter(&self, conditions: &[Condition], description: &str) -> QueryResult {
        let mut stats = ExecutionStats::new("filter");

        // Step 1: column guard
        let enforced: Vec<Condition> = conditions
            .iter()
            .filter(|c| {
                let present = self.dataset.has_column(&c.field);
                if !present {
                    debug!(field = %c.field, "column absent from dataset, condition not enforced");
                }
                present
            })
            .cloned()
            .collect();
        stats.enforced_conditions = enforced.len();

        // Step 2: scan
        let matched: Vec<_> = self
            .dataset
            .features()
            .iter()
            .filter(|f| ConditionFilter::matches(f, &enforced))
            .cloned()
            .collect();
        stats.scanned_count = self.dataset.len();
        stats.matched_count = matched.len();

        // Step 3: total length
        if self.dataset.has_column(fields::SHAPE_LENGTH) {
            let total = matched
                .iter()
                .filter_map(|f| f.number(fields::SHAPE_LENGTH))
                .sum::<f64>();
            stats.total_length = Some(total);
        }

        // Step 4: text
        let count = group_thousands(matched.len() as i64);
        let text_response = match stats.total_length {
            Some(total) if total.is_finite() => format!(
                "Found **{}** {} totaling **{}** units. Lines displayed on map.",
                count,
                description,
                group_thousands(total.round_ties_even() as i64)
            ),
            _ => format!("Found **{}** {}. Lines displayed on map.", count, description),
        };

        QueryResult {
            text_response,
            matched_features: FeatureCollection::new(matched),
            stats,
        }
    }

    fn execute_unrecognized() -> QueryResult {
        QueryResult {
            text_response: CLARIFICATION_TEXT.to_string(),
            matched_features: FeatureCollection::empty(),
            stats: ExecutionStats::new("unrecognized"),
        }
    }
}
