//! Pattern library compilation and lookup.
//!
//! # Responsibility
//! - Validate rule declarations (ids, sources, group coverage).
//! - Compile every rule case-insensitively, once.
//! - Answer "first matching rule" queries per group and per modifier list.
//!
//! # Invariants
//! - A compiled library is immutable and shared read-only.
//! - Every `PatternGroup` owns at least one pattern.
//! - Rule ids are unique across groups, hedges and intent-time anchors.

use crate::classify::rules::BUILTIN_RULESET;
use crate::model::category::PatternGroup;
use log::info;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

static BUILTIN_LIBRARY: Lazy<PatternLibrary> = Lazy::new(|| {
    let library = PatternLibrary::compile(&BUILTIN_RULESET)
        .unwrap_or_else(|err| panic!("built-in pattern library is invalid: {err}"));
    info!(
        "event=pattern_library_init module=classifier status=ok ruleset={} patterns={} hedges={} anchors={}",
        library.version(),
        library.len(),
        library.hedges().len(),
        library.intent_time_anchors().len()
    );
    library
});

/// Declaration of one group rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDef {
    /// Stable rule id, e.g. `intent.want_to`.
    pub id: &'static str,
    pub group: PatternGroup,
    /// Regular expression source; compiled case-insensitively.
    pub source: &'static str,
}

/// Declaration of one secondary-check rule (hedge or intent-time anchor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierDef {
    pub id: &'static str,
    pub source: &'static str,
}

/// Complete rule table for one ruleset version.
#[derive(Debug, Clone, Copy)]
pub struct RulesetDef<'a> {
    pub version: &'a str,
    pub patterns: &'a [PatternDef],
    /// Words that downgrade an action verb to a note.
    pub hedges: &'a [ModifierDef],
    /// Time words that, next to an intent phrase, keep a calendar match a note.
    pub intent_time_anchors: &'a [ModifierDef],
}

/// Compiled group rule.
#[derive(Debug, Clone)]
pub struct Pattern {
    id: String,
    group: PatternGroup,
    regex: Regex,
}

impl Pattern {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> PatternGroup {
        self.group
    }

    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Compiled secondary-check rule.
#[derive(Debug, Clone)]
pub struct Modifier {
    id: String,
    regex: Regex,
}

impl Modifier {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Immutable, compiled rule set.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    version: String,
    groups: BTreeMap<PatternGroup, Vec<Pattern>>,
    hedges: Vec<Modifier>,
    intent_time_anchors: Vec<Modifier>,
}

impl PatternLibrary {
    /// Returns the process-wide built-in library, compiling it on first use.
    ///
    /// # Panics
    /// - When a built-in rule fails validation or compilation. This is a
    ///   build defect and must stop the process before any classification.
    pub fn builtin() -> &'static PatternLibrary {
        &BUILTIN_LIBRARY
    }

    /// Validates and compiles a rule table.
    ///
    /// # Errors
    /// - Any `PatternLibraryError` variant; the first offending rule wins.
    pub fn compile(def: &RulesetDef<'_>) -> Result<Self, PatternLibraryError> {
        if def.version.trim().is_empty() {
            return Err(PatternLibraryError::EmptyVersion);
        }

        let mut seen_ids = BTreeSet::<&'static str>::new();
        let mut groups = BTreeMap::<PatternGroup, Vec<Pattern>>::new();
        for pattern in def.patterns {
            validate_rule(pattern.id, pattern.source, &mut seen_ids)?;
            groups.entry(pattern.group).or_default().push(Pattern {
                id: pattern.id.to_string(),
                group: pattern.group,
                regex: compile_regex(pattern.id, pattern.source)?,
            });
        }

        if let Some(missing) = PatternGroup::ALL
            .into_iter()
            .find(|group| !groups.contains_key(group))
        {
            return Err(PatternLibraryError::EmptyGroup(missing));
        }

        let hedges = compile_modifiers(def.hedges, &mut seen_ids)?;
        let intent_time_anchors = compile_modifiers(def.intent_time_anchors, &mut seen_ids)?;

        Ok(Self {
            version: def.version.trim().to_string(),
            groups,
            hedges,
            intent_time_anchors,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Patterns of one group in declaration order.
    pub fn group(&self, group: PatternGroup) -> &[Pattern] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All group patterns, highest precedence group first.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.groups.values().flatten()
    }

    pub fn hedges(&self) -> &[Modifier] {
        &self.hedges
    }

    pub fn intent_time_anchors(&self) -> &[Modifier] {
        &self.intent_time_anchors
    }

    /// Total number of group patterns (modifiers excluded).
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First pattern of `group` matching `text`, in declaration order.
    pub fn first_match(&self, group: PatternGroup, text: &str) -> Option<&Pattern> {
        self.group(group)
            .iter()
            .find(|pattern| pattern.is_match(text))
    }

    pub fn first_hedge(&self, text: &str) -> Option<&Modifier> {
        self.hedges.iter().find(|hedge| hedge.is_match(text))
    }

    pub fn first_intent_time_anchor(&self, text: &str) -> Option<&Modifier> {
        self.intent_time_anchors
            .iter()
            .find(|anchor| anchor.is_match(text))
    }
}

fn compile_modifiers(
    defs: &[ModifierDef],
    seen_ids: &mut BTreeSet<&'static str>,
) -> Result<Vec<Modifier>, PatternLibraryError> {
    defs.iter()
        .map(|def| {
            validate_rule(def.id, def.source, seen_ids)?;
            Ok(Modifier {
                id: def.id.to_string(),
                regex: compile_regex(def.id, def.source)?,
            })
        })
        .collect()
}

fn validate_rule(
    id: &'static str,
    source: &str,
    seen_ids: &mut BTreeSet<&'static str>,
) -> Result<(), PatternLibraryError> {
    if id.trim().is_empty() {
        return Err(PatternLibraryError::EmptyId);
    }
    if !is_valid_rule_id(id) {
        return Err(PatternLibraryError::InvalidId(id.to_string()));
    }
    if !seen_ids.insert(id) {
        return Err(PatternLibraryError::DuplicateId(id.to_string()));
    }
    if source.trim().is_empty() {
        return Err(PatternLibraryError::EmptySource(id.to_string()));
    }
    Ok(())
}

fn compile_regex(id: &str, source: &str) -> Result<Regex, PatternLibraryError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|err| PatternLibraryError::InvalidRegex {
            id: id.to_string(),
            message: err.to_string(),
        })
}

/// Rule ids are `prefix.name` segments of lowercase ASCII, digits and `_`.
fn is_valid_rule_id(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_lowercase() {
        return false;
    }

    let mut has_dot = false;
    let mut prev_dot = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            prev_dot = false;
            continue;
        }
        if c == '.' {
            if prev_dot {
                return false;
            }
            has_dot = true;
            prev_dot = true;
            continue;
        }
        return false;
    }
    has_dot && !prev_dot
}

/// Rule table validation and compilation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternLibraryError {
    EmptyVersion,
    EmptyId,
    InvalidId(String),
    DuplicateId(String),
    EmptySource(String),
    InvalidRegex { id: String, message: String },
    EmptyGroup(PatternGroup),
}

impl Display for PatternLibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyVersion => write!(f, "ruleset version must not be empty"),
            Self::EmptyId => write!(f, "rule id must not be empty"),
            Self::InvalidId(value) => {
                write!(f, "rule id is invalid: {value} (expected prefix.name)")
            }
            Self::DuplicateId(value) => write!(f, "rule id is duplicated: {value}"),
            Self::EmptySource(id) => write!(f, "rule `{id}` has an empty pattern"),
            Self::InvalidRegex { id, message } => {
                write!(f, "rule `{id}` failed to compile: {message}")
            }
            Self::EmptyGroup(group) => write!(f, "pattern group `{group}` has no rules"),
        }
    }
}

impl Error for PatternLibraryError {}

#[cfg(test)]
mod tests {
    use super::{
        is_valid_rule_id, ModifierDef, PatternDef, PatternLibrary, PatternLibraryError,
        RulesetDef,
    };
    use crate::classify::rules::{BUILTIN_PATTERNS, BUILTIN_RULESET, RULESET_VERSION};
    use crate::model::category::PatternGroup;

    fn ruleset_with(patterns: &[PatternDef]) -> RulesetDef<'_> {
        RulesetDef {
            patterns,
            ..BUILTIN_RULESET
        }
    }

    #[test]
    fn builtin_library_covers_every_group() {
        let library = PatternLibrary::builtin();
        assert_eq!(library.version(), RULESET_VERSION);
        assert_eq!(library.len(), BUILTIN_PATTERNS.len());
        for group in PatternGroup::ALL {
            assert!(!library.group(group).is_empty(), "{group} has no rules");
            assert!(library.group(group).iter().all(|p| p.group() == group));
        }
        assert!(!library.hedges().is_empty());
        assert!(!library.intent_time_anchors().is_empty());
    }

    #[test]
    fn patterns_iterate_in_precedence_order() {
        let groups: Vec<PatternGroup> = PatternLibrary::builtin()
            .patterns()
            .map(|pattern| pattern.group())
            .collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
    }

    #[test]
    fn compile_is_case_insensitive() {
        let library = PatternLibrary::builtin();
        let hit = library
            .first_match(PatternGroup::Obligation, "DON'T FORGET TO call")
            .expect("uppercase obligation should match");
        assert_eq!(hit.id(), "obligation.dont_forget");
    }

    #[test]
    fn rejects_invalid_regex() {
        let mut patterns = BUILTIN_PATTERNS.to_vec();
        patterns.push(PatternDef {
            id: "action.broken",
            group: PatternGroup::ActionVerb,
            source: r"\b(?:buy",
        });
        let err = PatternLibrary::compile(&ruleset_with(&patterns)).unwrap_err();
        assert!(matches!(
            err,
            PatternLibraryError::InvalidRegex { ref id, .. } if id == "action.broken"
        ));
    }

    #[test]
    fn rejects_duplicate_ids_across_groups_and_modifiers() {
        let mut patterns = BUILTIN_PATTERNS.to_vec();
        patterns.push(PatternDef {
            id: "intent.want_to",
            group: PatternGroup::NoteIndicator,
            source: r"\bwant\b",
        });
        let err = PatternLibrary::compile(&ruleset_with(&patterns)).unwrap_err();
        assert_eq!(
            err,
            PatternLibraryError::DuplicateId("intent.want_to".to_string())
        );

        let hedges = [ModifierDef {
            id: "note.idea",
            source: r"\bmaybe\b",
        }];
        let err = PatternLibrary::compile(&RulesetDef {
            hedges: &hedges,
            ..BUILTIN_RULESET
        })
        .unwrap_err();
        assert_eq!(err, PatternLibraryError::DuplicateId("note.idea".to_string()));
    }

    #[test]
    fn rejects_group_without_rules() {
        let patterns: Vec<PatternDef> = BUILTIN_PATTERNS
            .iter()
            .copied()
            .filter(|def| def.group != PatternGroup::Question)
            .collect();
        let err = PatternLibrary::compile(&ruleset_with(&patterns)).unwrap_err();
        assert_eq!(err, PatternLibraryError::EmptyGroup(PatternGroup::Question));
    }

    #[test]
    fn rejects_empty_source_and_version() {
        let patterns = [PatternDef {
            id: "intent.blank",
            group: PatternGroup::IntentDesire,
            source: "  ",
        }];
        let err = PatternLibrary::compile(&ruleset_with(&patterns)).unwrap_err();
        assert_eq!(err, PatternLibraryError::EmptySource("intent.blank".to_string()));

        let err = PatternLibrary::compile(&RulesetDef {
            version: " ",
            ..BUILTIN_RULESET
        })
        .unwrap_err();
        assert_eq!(err, PatternLibraryError::EmptyVersion);
    }

    #[test]
    fn rule_id_format() {
        assert!(is_valid_rule_id("intent.want_to"));
        assert!(is_valid_rule_id("calendar.clock_24h"));
        assert!(!is_valid_rule_id("want_to"));
        assert!(!is_valid_rule_id("Intent.want"));
        assert!(!is_valid_rule_id("intent..want"));
        assert!(!is_valid_rule_id("intent.want."));
        assert!(!is_valid_rule_id("intent.want-to"));
    }
}
