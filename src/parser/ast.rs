//! Structured intent produced by the parser

use std::fmt;

use serde_json::Value;

/// How a condition tests a field
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOp {
    /// field == value (numbers compare numerically, strings exactly)
    Eq(Value),
    /// Case-insensitive substring match on a text field
    Contains(String),
    /// Numeric field >= bound
    AtLeast(f64),
}

impl MatchOp {
    /// Returns the operation name for explain output
    pub fn op_name(&self) -> &'static str {
        match self {
            MatchOp::Eq(_) => "eq",
            MatchOp::Contains(_) => "contains",
            MatchOp::AtLeast(_) => "gte",
        }
    }
}

/// A single (field, predicate, value) test
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Field the condition reads
    pub field: String,
    /// Match operation
    pub op: MatchOp,
}

impl Condition {
    /// Create an equality condition
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            op: MatchOp::Eq(value),
        }
    }

    /// Create a case-insensitive substring condition
    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op: MatchOp::Contains(needle.into()),
        }
    }

    /// Create a minimum-threshold condition
    pub fn at_least(field: impl Into<String>, min: f64) -> Self {
        Self {
            field: field.into(),
            op: MatchOp::AtLeast(min),
        }
    }

    /// Returns true if this is an equality condition
    pub fn is_equality(&self) -> bool {
        matches!(self.op, MatchOp::Eq(_))
    }

    /// Condition key as exposed to clients: the field name for equality,
    /// `FIELD_CONTAINS` for substring tests and `FIELD_MIN` for thresholds.
    pub fn label(&self) -> String {
        match self.op {
            MatchOp::Eq(_) => self.field.clone(),
            MatchOp::Contains(_) => format!("{}_CONTAINS", self.field),
            MatchOp::AtLeast(_) => format!("{}_MIN", self.field),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            MatchOp::Eq(v) => write!(f, "{} {} {}", self.field, self.op.op_name(), v),
            MatchOp::Contains(s) => write!(f, "{} {} {:?}", self.field, self.op.op_name(), s),
            MatchOp::AtLeast(min) => write!(f, "{} {} {:?}", self.field, self.op.op_name(), min),
        }
    }
}

/// Aggregation metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Number of rows per group
    Count,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Count => "count",
        }
    }
}

/// The parsed form of a natural-language query
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Group rows by a field and report the leading group
    Aggregate {
        group_by: String,
        metric: Metric,
        description: String,
    },
    /// Keep rows matching every condition
    Filter {
        conditions: Vec<Condition>,
        description: String,
    },
    /// No rule matched; carries the original query
    Unrecognized { query: String },
}

impl Intent {
    /// Returns the intent kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Aggregate { .. } => "aggregate",
            Intent::Filter { .. } => "filter",
            Intent::Unrecognized { .. } => "unrecognized",
        }
    }

    /// Returns the human-readable description, if any
    pub fn description(&self) -> Option<&str> {
        match self {
            Intent::Aggregate { description, .. } | Intent::Filter { description, .. } => {
                Some(description)
            }
            Intent::Unrecognized { .. } => None,
        }
    }

    /// Returns the filter conditions (empty for other kinds)
    pub fn conditions(&self) -> &[Condition] {
        match self {
            Intent::Filter { conditions, .. } => conditions,
            _ => &[],
        }
    }
}
