//! Keyword rule tables
//!
//! Each filter category is an ordered table. The parser takes the first
//! row of a category whose keyword occurs in the lowercased query; later
//! rows of that category are not consulted. Categories are independent.

use serde_json::json;

use crate::dataset::fields;

use super::ast::Condition;

/// Phrase that selects the owner leaderboard
pub const AGGREGATE_PHRASE: &str = "owns the most lines";

/// Description used for the owner leaderboard
pub const AGGREGATE_DESCRIPTION: &str = "utility owns the most lines";

/// Threshold applied by the generic "high voltage" keywords, in kV
pub const HIGH_VOLTAGE_MIN_KV: f64 = 345.0;

/// One keyword rule: any keyword matching yields the condition and description
pub struct Rule {
    /// Lowercase keywords; any one of them matches
    pub keywords: &'static [&'static str],
    /// Condition added when the rule fires
    pub condition: fn() -> Condition,
    /// Description the rule sets
    pub description: &'static str,
}

impl Rule {
    /// Returns true if the lowercased query contains any keyword
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Exact voltage levels, then the generic high-voltage threshold
pub const VOLTAGE_RULES: &[Rule] = &[
    Rule {
        keywords: &["500kv"],
        condition: || Condition::eq(fields::VOLTAGE, json!(500.0)),
        description: "500kV lines",
    },
    Rule {
        keywords: &["345kv"],
        condition: || Condition::eq(fields::VOLTAGE, json!(345.0)),
        description: "345kV lines",
    },
    Rule {
        keywords: &["230kv"],
        condition: || Condition::eq(fields::VOLTAGE, json!(230.0)),
        description: "230kV lines",
    },
    Rule {
        keywords: &["138kv"],
        condition: || Condition::eq(fields::VOLTAGE, json!(138.0)),
        description: "138kV lines",
    },
    Rule {
        keywords: &["765kv"],
        condition: || Condition::eq(fields::VOLTAGE, json!(765.0)),
        description: "765kV lines",
    },
    Rule {
        keywords: &["161kv"],
        condition: || Condition::eq(fields::VOLTAGE, json!(161.0)),
        description: "161kV lines",
    },
    Rule {
        keywords: &["115kv"],
        condition: || Condition::eq(fields::VOLTAGE, json!(115.0)),
        description: "115kV lines",
    },
    Rule {
        keywords: &["high voltage", "hv"],
        condition: || Condition::at_least(fields::VOLTAGE, HIGH_VOLTAGE_MIN_KV),
        description: "high voltage lines (345kV+)",
    },
];

/// Installation type, matched as a substring of the TYPE tags
pub const TYPE_RULES: &[Rule] = &[
    Rule {
        keywords: &["underground"],
        condition: || Condition::contains(fields::TYPE, "UNDERGROUND"),
        description: "underground lines",
    },
    Rule {
        keywords: &["overhead"],
        condition: || Condition::contains(fields::TYPE, "OVERHEAD"),
        description: "overhead lines",
    },
];

/// Operational status
pub const STATUS_RULES: &[Rule] = &[
    Rule {
        keywords: &["under construction"],
        condition: || Condition::eq(fields::STATUS, json!("UNDER CONSTRUCTION")),
        description: "lines under construction",
    },
    Rule {
        keywords: &["in service"],
        condition: || Condition::eq(fields::STATUS, json!("IN SERVICE")),
        description: "lines in service",
    },
];

/// Filter categories in evaluation order
pub const FILTER_CATEGORIES: &[&[Rule]] = &[VOLTAGE_RULES, TYPE_RULES, STATUS_RULES];
