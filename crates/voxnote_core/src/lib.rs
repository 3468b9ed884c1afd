//! Core classification logic for VoxNote.
//!
//! Decides whether a transcribed utterance is a task, a calendar event or a
//! note, using a versioned, rule-based pattern library. Storage, rendering
//! and transcription stay outside this crate.

pub mod classify;
pub mod eval;
pub mod logging;
pub mod model;
pub mod service;

pub use classify::library::{
    Modifier, ModifierDef, Pattern, PatternDef, PatternLibrary, PatternLibraryError, RulesetDef,
};
pub use classify::normalize::normalize;
pub use classify::pipeline::{classify, init_classifier, Classifier};
pub use classify::rules::{BUILTIN_RULESET, RULESET_VERSION};
pub use eval::corpus::{load_corpus_file, load_corpus_json, seed_corpus, CorpusEntry, CorpusError};
pub use eval::report::{EntryOutcome, EvaluationReport, Evaluator, Regression};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, ParseLabelError, PatternGroup};
pub use model::classification::{ClassificationInput, ClassificationResult, ClassifyError};
pub use service::capture_service::{
    CaptureError, CaptureOutcome, CaptureRecord, CaptureService, CaptureSink, CaptureSinkError,
    InMemoryCaptureSink,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the version of the built-in ruleset.
pub fn ruleset_version() -> &'static str {
    RULESET_VERSION
}
