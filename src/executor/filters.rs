//! Condition filtering for query execution
//!
//! A missing or null field never matches. Wrong-typed values never match.

use serde_json::Value;

use crate::dataset::Feature;
use crate::parser::{Condition, MatchOp};

/// Evaluates conditions against features
pub struct ConditionFilter;

impl ConditionFilter {
    /// Checks if a feature matches all conditions
    pub fn matches(feature: &Feature, conditions: &[Condition]) -> bool {
        // AND semantics
        conditions
            .iter()
            .all(|cond| Self::matches_condition(feature, cond))
    }

    /// Checks if a feature matches a single condition
    pub fn matches_condition(feature: &Feature, condition: &Condition) -> bool {
        let value = match feature.get(&condition.field) {
            Some(v) => v,
            None => return false,
        };

        match &condition.op {
            MatchOp::Eq(expected) => Self::eq_match(value, expected),
            MatchOp::Contains(needle) => Self::contains_match(value, needle),
            MatchOp::AtLeast(min) => Self::at_least_match(value, *min),
        }
    }

    /// Equality: numbers by value, everything else exactly
    fn eq_match(actual: &Value, expected: &Value) -> bool {
        match (actual, expected) {
            (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
                (Some(af), Some(bf)) => af == bf,
                _ => false,
            },
            _ => actual == expected,
        }
    }

    /// Case-insensitive substring (strings only)
    fn contains_match(actual: &Value, needle: &str) -> bool {
        match actual.as_str() {
            Some(s) => s.to_lowercase().contains(&needle.to_lowercase()),
            None => false,
        }
    }

    /// Numeric >= (numbers only)
    fn at_least_match(actual: &Value, min: f64) -> bool {
        match actual.as_f64() {
            Some(v) => v >= min,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(props: Value) -> Feature {
        Feature::new(props.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn test_numeric_equality_ignores_representation() {
        let f = feature(json!({"VOLTAGE": 500}));
        assert!(ConditionFilter::matches(
            &f,
            &[Condition::eq("VOLTAGE", json!(500.0))]
        ));
        assert!(!ConditionFilter::matches(
            &f,
            &[Condition::eq("VOLTAGE", json!(345.0))]
        ));
    }

    #[test]
    fn test_no_string_number_coercion() {
        let f = feature(json!({"VOLTAGE": "500"}));
        assert!(!ConditionFilter::matches(
            &f,
            &[Condition::eq("VOLTAGE", json!(500.0))]
        ));
        assert!(!ConditionFilter::matches(
            &f,
            &[Condition::at_least("VOLTAGE", 345.0)]
        ));
    }

    #[test]
    fn test_string_equality_is_exact() {
        let f = feature(json!({"STATUS": "IN SERVICE"}));
        assert!(ConditionFilter::matches(
            &f,
            &[Condition::eq("STATUS", json!("IN SERVICE"))]
        ));
        assert!(!ConditionFilter::matches(
            &f,
            &[Condition::eq("STATUS", json!("in service"))]
        ));
    }

    #[test]
    fn test_contains_case_insensitive() {
        let f = feature(json!({"TYPE": "AC; Underground"}));
        assert!(ConditionFilter::matches(
            &f,
            &[Condition::contains("TYPE", "UNDERGROUND")]
        ));
        assert!(!ConditionFilter::matches(
            &f,
            &[Condition::contains("TYPE", "OVERHEAD")]
        ));
    }

    #[test]
    fn test_contains_non_string_no_match() {
        let f = feature(json!({"TYPE": 42}));
        assert!(!ConditionFilter::matches(
            &f,
            &[Condition::contains("TYPE", "UNDERGROUND")]
        ));
    }

    #[test]
    fn test_threshold_boundary() {
        let at = feature(json!({"VOLTAGE": 345}));
        let below = feature(json!({"VOLTAGE": 344.9}));
        let cond = [Condition::at_least("VOLTAGE", 345.0)];
        assert!(ConditionFilter::matches(&at, &cond));
        assert!(!ConditionFilter::matches(&below, &cond));
    }

    #[test]
    fn test_missing_and_null_fields_no_match() {
        let missing = feature(json!({"OWNER": "A"}));
        let null = feature(json!({"VOLTAGE": null}));
        let cond = [Condition::at_least("VOLTAGE", 100.0)];
        assert!(!ConditionFilter::matches(&missing, &cond));
        assert!(!ConditionFilter::matches(&null, &cond));
    }

    #[test]
    fn test_conditions_and() {
        let f = feature(json!({"VOLTAGE": 500, "TYPE": "AC; OVERHEAD"}));
        let both = [
            Condition::eq("VOLTAGE", json!(500.0)),
            Condition::contains("TYPE", "OVERHEAD"),
        ];
        assert!(ConditionFilter::matches(&f, &both));

        let mixed = [
            Condition::eq("VOLTAGE", json!(500.0)),
            Condition::contains("TYPE", "UNDERGROUND"),
        ];
        assert!(!ConditionFilter::matches(&f, &mixed));
    }

    #[test]
    fn test_empty_conditions_match_everything() {
        let f = feature(json!({}));
        assert!(ConditionFilter::matches(&f, &[]));
    }
}
