//! Rule-based query parser
//!
//! Parsing order (strict):
//! 1. Aggregation phrase, which short-circuits all filter rules
//! 2. Voltage rules (first match wins)
//! 3. Installation type rules (first match wins)
//! 4. Status rules (first match wins)
//!
//! Steps 2-4 accumulate conditions. Each firing step overwrites the
//! description, so a combined query is described by its last category.

use crate::dataset::fields;

use super::ast::{Intent, Metric};
use super::rules::{AGGREGATE_DESCRIPTION, AGGREGATE_PHRASE, FILTER_CATEGORIES};

/// Translates free text into an [`Intent`]
pub struct IntentParser;

impl IntentParser {
    /// Parses a query. Never fails; unmatched input is `Unrecognized`.
    pub fn parse(query: &str) -> Intent {
        let lowered = query.to_lowercase();

        if lowered.contains(AGGREGATE_PHRASE) {
            return Intent::Aggregate {
                group_by: fields::OWNER.to_string(),
                metric: Metric::Count,
                description: AGGREGATE_DESCRIPTION.to_string(),
            };
        }

        let mut conditions = Vec::new();
        let mut description = None;

        for category in FILTER_CATEGORIES {
            if let Some(rule) = category.iter().find(|rule| rule.matches(&lowered)) {
                conditions.push((rule.condition)());
                description = Some(rule.description);
            }
        }

        match description {
            Some(description) if !conditions.is_empty() => Intent::Filter {
                conditions,
                description: description.to_string(),
            },
            _ => Intent::Unrecognized {
                query: query.to_string(),
            },
        }
    }
}

/// Parses a query with [`IntentParser`]
pub fn parse(query: &str) -> Intent {
    IntentParser::parse(query)
}
