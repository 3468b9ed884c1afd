//! Category and pattern-group vocabulary.
//!
//! # Responsibility
//! - Map internal categories to the lower-case labels used by consumers.
//! - Fix the precedence order in which pattern groups are consulted.
//!
//! # Invariants
//! - Labels are stable wire values: `tasks`, `calendar`, `notes`.
//! - Group precedence never changes within one ruleset version.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Output category of one classified utterance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// Actionable obligation.
    #[serde(rename = "tasks", alias = "task")]
    Task,
    /// Time-anchored appointment.
    #[serde(rename = "calendar", alias = "event")]
    Calendar,
    /// Idea, reflection, question or general thought.
    #[serde(rename = "notes", alias = "note")]
    Note,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Task, Category::Calendar, Category::Note];

    /// Returns the external label consumed by the surrounding product.
    pub fn label(self) -> &'static str {
        match self {
            Self::Task => "tasks",
            Self::Calendar => "calendar",
            Self::Note => "notes",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    /// Parses external labels; singular aliases are accepted for corpora
    /// written by hand.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tasks" | "task" => Ok(Self::Task),
            "calendar" | "event" => Ok(Self::Calendar),
            "notes" | "note" => Ok(Self::Note),
            other => Err(ParseLabelError {
                kind: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// Named bucket of rules sharing one precedence level.
///
/// Declaration order is precedence order; the derived `Ord` relies on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PatternGroup {
    IntentDesire,
    Question,
    Calendar,
    Obligation,
    ActionVerb,
    NoteIndicator,
}

impl PatternGroup {
    /// All groups, highest precedence first.
    pub const ALL: [PatternGroup; 6] = [
        PatternGroup::IntentDesire,
        PatternGroup::Question,
        PatternGroup::Calendar,
        PatternGroup::Obligation,
        PatternGroup::ActionVerb,
        PatternGroup::NoteIndicator,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IntentDesire => "intent_desire",
            Self::Question => "question",
            Self::Calendar => "calendar",
            Self::Obligation => "obligation",
            Self::ActionVerb => "action_verb",
            Self::NoteIndicator => "note_indicator",
        }
    }

    /// Category this group yields when it decides a classification.
    ///
    /// The pipeline may still override it through a secondary check:
    /// hedged action verbs and intent-time composites become notes.
    pub fn category(self) -> Category {
        match self {
            Self::IntentDesire | Self::Question | Self::NoteIndicator => Category::Note,
            Self::Calendar => Category::Calendar,
            Self::Obligation | Self::ActionVerb => Category::Task,
        }
    }
}

impl Display for PatternGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PatternGroup {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or(ParseLabelError {
                kind: "pattern group",
                value: normalized,
            })
    }
}

/// Unknown category or group label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl Display for ParseLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} label: `{}`", self.kind, self.value)
    }
}

impl Error for ParseLabelError {}

#[cfg(test)]
mod tests {
    use super::{Category, PatternGroup};

    #[test]
    fn labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Task ".parse::<Category>(), Ok(Category::Task));
        assert_eq!("event".parse::<Category>(), Ok(Category::Calendar));
        assert!("reminder".parse::<Category>().is_err());
    }

    #[test]
    fn group_order_is_precedence_order() {
        let mut sorted = PatternGroup::ALL;
        sorted.sort();
        assert_eq!(sorted, PatternGroup::ALL);
        assert!(PatternGroup::IntentDesire < PatternGroup::Calendar);
        assert!(PatternGroup::Obligation < PatternGroup::ActionVerb);
    }

    #[test]
    fn group_parses_kebab_and_snake_case() {
        assert_eq!(
            "action-verb".parse::<PatternGroup>(),
            Ok(PatternGroup::ActionVerb)
        );
        assert_eq!(
            "NOTE_INDICATOR".parse::<PatternGroup>(),
            Ok(PatternGroup::NoteIndicator)
        );
        let err = "hedge".parse::<PatternGroup>().unwrap_err();
        assert!(err.to_string().contains("pattern group"));
    }
}
