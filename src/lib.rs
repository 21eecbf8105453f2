//! gridquery - natural-language questions over transmission line data
//!
//! A query goes through two stages:
//! - `parser`: keyword rules turn free text into an [`parser::Intent`]
//! - `executor`: the intent runs against an in-memory [`dataset::Dataset`]
//!
//! `pipeline` glues the two together for the HTTP service and the CLI.

pub mod cli;
pub mod dataset;
pub mod executor;
pub mod http_server;
pub mod parser;
pub mod pipeline;
