//! Sensei core library.
//!
//! Sensei scans a small source snippet and reports likely beginner
//! mistakes (typos, unbalanced delimiters, missing entry point, bare
//! identifiers) together with suggested fixes. The heart of the crate is
//! [`analysis::analyze`]; everything else is plumbing around it:
//!
//! - `analysis`: the rule engine (whole-text rules + line rules).
//! - `types`: the `Finding` record and the summary handed to storage.
//! - `history`: append-only store of analysis session summaries.
//! - `rewards`: persisted points counter and the level derived from it.
//! - `reporting`: human/JSON printers for findings, history, and points.
//! - `cli`: argument parsing (the binary uses this).
//! - `store`: data directory resolution and atomic file writes.
//! - `error`: library error type.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod history;
pub mod reporting;
pub mod rewards;
pub mod store;
pub mod types;
