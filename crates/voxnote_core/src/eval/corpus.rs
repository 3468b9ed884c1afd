//! Evaluation corpora.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// One utterance with its expected category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub text: String,
    pub expected: Category,
    /// Free-form label for grouping failures, e.g. `hedge`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl CorpusEntry {
    pub fn new(text: impl Into<String>, expected: Category) -> Self {
        Self {
            text: text.into(),
            expected,
            tag: None,
        }
    }

    pub fn tagged(text: impl Into<String>, expected: Category, tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::new(text, expected)
        }
    }
}

const SEED_CASES: &[(&str, Category, &str)] = &[
    ("I want to read xyz book", Category::Note, "seed"),
    ("I need to buy groceries", Category::Task, "seed"),
    ("Meet John at 3pm tomorrow", Category::Calendar, "seed"),
    ("I want to visit Paris next year", Category::Note, "seed"),
    ("Great idea for the project", Category::Note, "seed"),
    ("Maybe I should buy that book", Category::Note, "seed"),
    ("Don't forget to submit the report", Category::Task, "seed"),
    ("", Category::Note, "seed"),
    ("I'd like to learn Spanish this month", Category::Note, "intent"),
    ("I'm interested in pottery classes", Category::Note, "intent"),
    ("I should look into solar panels", Category::Note, "intent"),
    (
        "I'm thinking about starting a podcast tomorrow",
        Category::Note,
        "intent",
    ),
    ("How do I renew my passport", Category::Note, "question"),
    ("Is the farmers market open on Sunday?", Category::Note, "question"),
    ("Why do I always get tired after lunch", Category::Note, "question"),
    (
        "Dentist appointment on Friday at 10:30 am",
        Category::Calendar,
        "calendar",
    ),
    ("Lunch with Sarah next week", Category::Calendar, "calendar"),
    ("Call the plumber tomorrow morning", Category::Calendar, "calendar"),
    ("Team meeting at noon", Category::Calendar, "calendar"),
    ("Remind me to water the plants", Category::Calendar, "calendar"),
    ("Submit the expense report by Friday", Category::Calendar, "calendar"),
    ("I have to finish the slides", Category::Task, "obligation"),
    ("Remember to pay rent", Category::Task, "obligation"),
    ("Make sure to lock the back door", Category::Task, "obligation"),
    ("Todo clean out the garage", Category::Task, "obligation"),
    ("I must renew the car insurance", Category::Task, "obligation"),
    ("Buy milk and eggs", Category::Task, "action"),
    ("Pick up the dry cleaning", Category::Task, "action"),
    ("Fix the leaking faucet", Category::Task, "action"),
    ("Email the landlord about the heater", Category::Task, "action"),
    ("Perhaps I could write a short story", Category::Note, "hedge"),
    ("We might get a puppy", Category::Note, "hedge"),
    ("Maybe I need to buy a new laptop", Category::Task, "hedge"),
    ("I should probably fix the sink", Category::Note, "hedge"),
    ("No need to buy milk", Category::Task, "obligation"),
    ("Fascinating article on sleep cycles", Category::Note, "note"),
    ("Note: the wifi password changed", Category::Note, "note"),
    ("Brainstorm names for the newsletter", Category::Note, "note"),
    ("The sunset looked beautiful", Category::Note, "default"),
    ("Document the API endpoints", Category::Note, "default"),
];

/// Built-in regression corpus.
pub fn seed_corpus() -> Vec<CorpusEntry> {
    SEED_CASES
        .iter()
        .map(|(text, expected, tag)| CorpusEntry::tagged(*text, *expected, *tag))
        .collect()
}

/// Parses a JSON array of `{text, expected, tag?}` entries.
///
/// # Errors
/// - `Parse` for malformed JSON or unknown category labels.
/// - `EmptyCorpus` when the array has no entries.
pub fn load_corpus_json(json: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
    let entries: Vec<CorpusEntry> = serde_json::from_str(json).map_err(CorpusError::Parse)?;
    if entries.is_empty() {
        return Err(CorpusError::EmptyCorpus);
    }
    Ok(entries)
}

/// Reads and parses a JSON corpus file.
pub fn load_corpus_file(path: &Path) -> Result<Vec<CorpusEntry>, CorpusError> {
    let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_corpus_json(&json)
}

/// Corpus loading errors.
#[derive(Debug)]
pub enum CorpusError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    EmptyCorpus,
}

impl Display for CorpusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read corpus `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid corpus JSON: {err}"),
            Self::EmptyCorpus => write!(f, "corpus has no entries"),
        }
    }
}

impl Error for CorpusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::EmptyCorpus => None,
        }
    }
}
