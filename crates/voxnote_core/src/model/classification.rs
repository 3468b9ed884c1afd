//! Classification input and result types.
//!
//! # Responsibility
//! - Own the normalized utterance handed to the classifier.
//! - Reject non-string payloads at the boundary instead of guessing.
//! - Carry the decided category plus diagnostic match metadata.
//!
//! # Invariants
//! - `ClassificationInput` text is always trimmed.
//! - `matched_pattern_id` is only set together with `matched_group`.

use crate::classify::normalize::normalize;
use crate::model::category::{Category, PatternGroup};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Boundary error for classifier callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Caller supplied something that is not a text utterance.
    InvalidArgument(String),
}

impl Display for ClassifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(details) => write!(f, "invalid argument: {details}"),
        }
    }
}

impl Error for ClassifyError {}

/// Trimmed utterance ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassificationInput {
    text: String,
}

impl ClassificationInput {
    /// Normalizes raw text into an input.
    pub fn new(raw: &str) -> Self {
        Self {
            text: normalize(raw).to_string(),
        }
    }

    /// Builds an input from raw bytes, e.g. a transcript buffer.
    ///
    /// # Errors
    /// - `InvalidArgument` when `bytes` is not valid UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, ClassifyError> {
        std::str::from_utf8(bytes)
            .map(Self::new)
            .map_err(|err| ClassifyError::InvalidArgument(format!("utterance is not UTF-8: {err}")))
    }

    /// Builds an input from a loosely typed JSON payload.
    ///
    /// # Errors
    /// - `InvalidArgument` for `null`, numbers, booleans, arrays and objects.
    pub fn from_json(value: &Value) -> Result<Self, ClassifyError> {
        match value {
            Value::String(text) => Ok(Self::new(text)),
            Value::Null => Err(ClassifyError::InvalidArgument(
                "utterance is null".to_string(),
            )),
            other => Err(ClassifyError::InvalidArgument(format!(
                "utterance must be a string, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of Unicode scalar values, used for metadata-only logging.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl From<&str> for ClassificationInput {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassificationInput {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Outcome of one classification.
///
/// Serialized as `{category, matchedGroup?, matchedPatternId?}` to match the
/// capture pipeline contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    /// Deciding group; `None` for empty input and the default path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_group: Option<PatternGroup>,
    /// First matching pattern of the deciding group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_pattern_id: Option<String>,
}

impl ClassificationResult {
    /// Result for empty input or when no group matched.
    pub fn fallback() -> Self {
        Self {
            category: Category::Note,
            matched_group: None,
            matched_pattern_id: None,
        }
    }

    /// Result decided by `group` through pattern `pattern_id`.
    pub fn matched(category: Category, group: PatternGroup, pattern_id: impl Into<String>) -> Self {
        Self {
            category,
            matched_group: Some(group),
            matched_pattern_id: Some(pattern_id.into()),
        }
    }

    /// Whether the result came from the default path.
    pub fn is_fallback(&self) -> bool {
        self.matched_group.is_none()
    }
}
