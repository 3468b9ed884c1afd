//! Domain model for utterance classification.
//!
//! # Responsibility
//! - Define the category vocabulary shared with capture/organize callers.
//! - Define pattern-group precedence and the classification result shape.
//!
//! # Invariants
//! - Every classification yields exactly one `Category`.
//! - `PatternGroup::ALL` is ordered by precedence, highest first.

pub mod category;
pub mod classification;
