//! Capture service: classify one utterance and hand it to a sink.
//!
//! # Responsibility
//! - Classify transcribed utterances with the configured classifier.
//! - Forward `{text, category, timestamp}` records to storage.
//!
//! # Invariants
//! - Stored text is the normalized (trimmed) utterance.
//! - Empty utterances are rejected, never stored.
//! - The service never bypasses the sink contract.

use crate::classify::pipeline::Classifier;
use crate::model::category::Category;
use crate::model::classification::{ClassificationInput, ClassificationResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Record accepted by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub text: String,
    pub category: Category,
    /// Unix epoch milliseconds.
    #[serde(rename = "timestamp")]
    pub captured_at_ms: i64,
}

/// Storage collaborator failure, reported by sink implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSinkError {
    pub message: String,
}

impl CaptureSinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for CaptureSinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "capture sink failed: {}", self.message)
    }
}

impl Error for CaptureSinkError {}

/// Storage contract for classified utterances.
pub trait CaptureSink {
    fn store(&mut self, record: &CaptureRecord) -> Result<(), CaptureSinkError>;
}

/// In-memory sink; records are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCaptureSink {
    records: Vec<CaptureRecord>,
}

impl InMemoryCaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CaptureRecord] {
        &self.records
    }

    /// Records of one category, in insertion order.
    pub fn by_category(&self, category: Category) -> Vec<&CaptureRecord> {
        self.records
            .iter()
            .filter(|record| record.category == category)
            .collect()
    }
}

impl CaptureSink for InMemoryCaptureSink {
    fn store(&mut self, record: &CaptureRecord) -> Result<(), CaptureSinkError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Capture use-case errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Utterance was empty after trimming.
    EmptyInput,
    Sink(CaptureSinkError),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "utterance is empty"),
            Self::Sink(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sink(err) => Some(err),
            Self::EmptyInput => None,
        }
    }
}

impl From<CaptureSinkError> for CaptureError {
    fn from(value: CaptureSinkError) -> Self {
        Self::Sink(value)
    }
}

/// Stored record plus the classification diagnostics behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub record: CaptureRecord,
    pub classification: ClassificationResult,
}

/// Use-case service wrapping a classifier and a sink.
pub struct CaptureService<'lib, S: CaptureSink> {
    classifier: Classifier<'lib>,
    sink: S,
}

impl<'lib, S: CaptureSink> CaptureService<'lib, S> {
    pub fn new(classifier: Classifier<'lib>, sink: S) -> Self {
        Self { classifier, sink }
    }

    /// Captures one utterance stamped with the current wall-clock time.
    pub fn capture(&mut self, raw: &str) -> Result<CaptureOutcome, CaptureError> {
        self.capture_at(raw, now_epoch_ms())
    }

    /// Captures one utterance with a caller-provided timestamp.
    ///
    /// Used by import paths where the utterance time already exists.
    pub fn capture_at(
        &mut self,
        raw: &str,
        captured_at_ms: i64,
    ) -> Result<CaptureOutcome, CaptureError> {
        let input = ClassificationInput::new(raw);
        if input.is_empty() {
            return Err(CaptureError::EmptyInput);
        }

        let classification = self.classifier.classify_input(&input);
        let record = CaptureRecord {
            text: input.into_inner(),
            category: classification.category,
            captured_at_ms,
        };
        self.sink.store(&record)?;
        info!(
            "event=capture module=service status=ok category={} captured_at_ms={}",
            record.category, record.captured_at_ms
        );

        Ok(CaptureOutcome {
            record,
            classification,
        })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
