//! Intent parser for gridquery
//!
//! Maps a free-text question to one structured [`Intent`] using a fixed,
//! ordered keyword vocabulary.
//!
//! # Design Principles
//!
//! - Total: every input yields an intent, never an error
//! - Deterministic: same text → same intent
//! - Case-insensitive substring matching throughout
//! - A `Filter` intent always carries at least one condition

mod ast;
mod explain;
mod parser;
mod rules;

pub use ast::{Condition, Intent, MatchOp, Metric};
pub use explain::ExplainIntent;
pub use parser::{parse, IntentParser};
pub use rules::{Rule, AGGREGATE_PHRASE, FILTER_CATEGORIES, HIGH_VOLTAGE_MIN_KV};
