//! Explain output for parsed intents
//!
//! Produces deterministic, human-readable explain output.

use std::fmt;

use super::ast::Intent;

/// Explain report for one intent
#[derive(Debug, Clone)]
pub struct ExplainIntent {
    /// Intent kind name
    pub kind: &'static str,
    /// Group-by field (aggregates only)
    pub group_by: Option<String>,
    /// Metric name (aggregates only)
    pub metric: Option<&'static str>,
    /// Conditions as `FIELD op value`
    pub conditions: Vec<String>,
    /// Description used in the text response
    pub description: Option<String>,
    /// Original query (unrecognized only)
    pub echoed_query: Option<String>,
}

impl ExplainIntent {
    /// Builds the report for an intent
    pub fn from_intent(intent: &Intent) -> Self {
        let (group_by, metric, echoed_query) = match intent {
            Intent::Aggregate {
                group_by, metric, ..
            } => (Some(group_by.clone()), Some(metric.as_str()), None),
            Intent::Filter { .. } => (None, None, None),
            Intent::Unrecognized { query } => (None, None, Some(query.clone())),
        };

        Self {
            kind: intent.kind(),
            group_by,
            metric,
            conditions: intent.conditions().iter().map(|c| c.to_string()).collect(),
            description: intent.description().map(str::to_string),
            echoed_query,
        }
    }
}

impl fmt::Display for ExplainIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN INTENT ===")?;
        writeln!(f, "Kind: {}", self.kind.to_uppercase())?;

        if let Some(group_by) = &self.group_by {
            writeln!(f, "Group By: {}", group_by)?;
        }
        if let Some(metric) = self.metric {
            writeln!(f, "Metric: {}", metric)?;
        }
        if !self.conditions.is_empty() {
            writeln!(f, "Conditions (AND):")?;
            for condition in &self.conditions {
                writeln!(f, "  - {}", condition)?;
            }
        }
        if let Some(description) = &self.description {
            writeln!(f, "Description: {}", description)?;
        }
        if let Some(query) = &self.echoed_query {
            writeln!(f, "Query: {:?}", query)?;
        }

        Ok(())
    }
}
