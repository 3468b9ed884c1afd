//! Rule-based utterance classification.
//!
//! # Responsibility
//! - Normalize raw utterances.
//! - Compile and hold the versioned pattern library.
//! - Decide one category per utterance through fixed group precedence.
//!
//! # Invariants
//! - Classification is a pure function of the text and the library.
//! - Built-in rules compile once per process; failures abort startup.

pub mod library;
pub mod normalize;
pub mod pipeline;
pub mod rules;
