//! Ruleset evaluation harness.
//!
//! # Responsibility
//! - Provide the seed corpus of utterances with expected categories.
//! - Load additional corpora from JSON files.
//! - Run a classifier over a corpus and explain every failure.
//! - Detect regressions between a baseline and a candidate ruleset.
//!
//! # Invariants
//! - The built-in ruleset passes the full seed corpus.

pub mod corpus;
pub mod report;
