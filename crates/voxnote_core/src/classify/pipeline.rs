//! Precedence-ordered decision pipeline.
//!
//! # Responsibility
//! - Turn one utterance into exactly one `ClassificationResult`.
//! - Apply group checks in precedence order, first match wins.
//!
//! # Invariants
//! - Total: every input, including empty text, yields a category.
//! - Deterministic: the result depends only on text and library.
//! - Any intent/desire match yields `Category::Note`.
//! - Hedge words downgrade action verbs only, never obligations.
//! - Only metadata is logged; the utterance text never is.

use crate::classify::library::{Pattern, PatternLibrary};
use crate::model::category::{Category, PatternGroup};
use crate::model::classification::{ClassificationInput, ClassificationResult};
use log::debug;

/// Classifies `text` with the built-in ruleset.
pub fn classify(text: &str) -> ClassificationResult {
    Classifier::builtin().classify(text)
}

/// Compiles the built-in ruleset now instead of on first classification.
///
/// Hosts call this during startup so a malformed rule aborts the process
/// before any utterance is handled.
pub fn init_classifier() -> &'static PatternLibrary {
    PatternLibrary::builtin()
}

/// Stateless classifier over a compiled pattern library.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'lib> {
    library: &'lib PatternLibrary,
}

impl Classifier<'static> {
    /// Classifier bound to the process-wide built-in library.
    pub fn builtin() -> Self {
        Self::new(PatternLibrary::builtin())
    }
}

impl<'lib> Classifier<'lib> {
    pub fn new(library: &'lib PatternLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &'lib PatternLibrary {
        self.library
    }

    /// Normalizes and classifies raw text.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classify_input(&ClassificationInput::new(text))
    }

    /// Classifies an already normalized input.
    pub fn classify_input(&self, input: &ClassificationInput) -> ClassificationResult {
        let result = self.decide(input.as_str());
        debug!(
            "event=classify module=classifier status=ok category={} group={} pattern={} input_chars={} ruleset={}",
            result.category,
            result
                .matched_group
                .map(PatternGroup::as_str)
                .unwrap_or("none"),
            result.matched_pattern_id.as_deref().unwrap_or("none"),
            input.char_count(),
            self.library.version()
        );
        result
    }

    fn decide(&self, text: &str) -> ClassificationResult {
        if text.is_empty() {
            return ClassificationResult::fallback();
        }

        self.check_intent(text)
            .or_else(|| self.check_question(text))
            .or_else(|| self.check_calendar(text))
            .or_else(|| self.check_obligation(text))
            .or_else(|| self.check_action(text))
            .or_else(|| self.check_note_indicator(text))
            .unwrap_or_else(ClassificationResult::fallback)
    }

    fn check_intent(&self, text: &str) -> Option<ClassificationResult> {
        self.decided_by(PatternGroup::IntentDesire, text)
    }

    fn check_question(&self, text: &str) -> Option<ClassificationResult> {
        self.decided_by(PatternGroup::Question, text)
    }

    /// Calendar stage.
    ///
    /// An intent phrase and an intent-time anchor in the same sentence keep
    /// the utterance a note. Unreachable after the intent stage, kept as an
    /// invariant of this stage on its own.
    fn check_calendar(&self, text: &str) -> Option<ClassificationResult> {
        let calendar = self.library.first_match(PatternGroup::Calendar, text)?;
        if let Some(intent) = self.intent_with_time(text) {
            return Some(ClassificationResult::matched(
                Category::Note,
                PatternGroup::IntentDesire,
                intent.id(),
            ));
        }
        Some(result_for(calendar, Category::Calendar))
    }

    fn check_obligation(&self, text: &str) -> Option<ClassificationResult> {
        self.decided_by(PatternGroup::Obligation, text)
    }

    fn check_action(&self, text: &str) -> Option<ClassificationResult> {
        let action = self.library.first_match(PatternGroup::ActionVerb, text)?;
        let category = if self.library.first_hedge(text).is_some() {
            Category::Note
        } else {
            Category::Task
        };
        Some(result_for(action, category))
    }

    fn check_note_indicator(&self, text: &str) -> Option<ClassificationResult> {
        self.decided_by(PatternGroup::NoteIndicator, text)
    }

    fn decided_by(&self, group: PatternGroup, text: &str) -> Option<ClassificationResult> {
        self.library
            .first_match(group, text)
            .map(|pattern| result_for(pattern, group.category()))
    }

    fn intent_with_time(&self, text: &str) -> Option<&'lib Pattern> {
        text.split(is_sentence_break).find_map(|sentence| {
            let intent = self
                .library
                .first_match(PatternGroup::IntentDesire, sentence)?;
            self.library
                .first_intent_time_anchor(sentence)
                .map(|_| intent)
        })
    }
}

fn is_sentence_break(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ';' | '\n' | '。' | '！' | '？')
}

fn result_for(pattern: &Pattern, category: Category) -> ClassificationResult {
    ClassificationResult::matched(category, pattern.group(), pattern.id())
}

#[cfg(test)]
mod tests {
    use super::{classify, Classifier};
    use crate::model::category::{Category, PatternGroup};

    #[test]
    fn empty_input_short_circuits_to_note() {
        for text in ["", "   ", "\n\t"] {
            let result = classify(text);
            assert_eq!(result.category, Category::Note);
            assert!(result.is_fallback());
        }
    }

    #[test]
    fn calendar_stage_keeps_intent_with_time_as_note() {
        let classifier = Classifier::builtin();
        let result = classifier
            .check_calendar("I want to meet Ana tomorrow")
            .expect("calendar vocabulary present");
        assert_eq!(result.category, Category::Note);
        assert_eq!(result.matched_group, Some(PatternGroup::IntentDesire));
        assert_eq!(result.matched_pattern_id.as_deref(), Some("intent.want_to"));

        let result = classifier
            .check_calendar("I hope to catch the conference next week")
            .expect("calendar vocabulary present");
        assert_eq!(result.category, Category::Note);
    }

    #[test]
    fn calendar_stage_scopes_intent_with_time_to_one_sentence() {
        let classifier = Classifier::builtin();
        let result = classifier
            .check_calendar("I want to rest. Team meeting tomorrow")
            .expect("calendar vocabulary present");
        assert_eq!(result.category, Category::Calendar);
        assert_eq!(result.matched_group, Some(PatternGroup::Calendar));

        let result = classifier
            .check_calendar("Dentist on Friday! I hope to travel next week")
            .expect("calendar vocabulary present");
        assert_eq!(result.category, Category::Note);
        assert_eq!(result.matched_pattern_id.as_deref(), Some("intent.hope_to"));
    }

    #[test]
    fn calendar_stage_without_intent_is_calendar() {
        let classifier = Classifier::builtin();
        let result = classifier
            .check_calendar("Meet Ana tomorrow")
            .expect("calendar vocabulary present");
        assert_eq!(result.category, Category::Calendar);
        assert_eq!(result.matched_pattern_id.as_deref(), Some("calendar.relative_day"));

        // Only tomorrow/next week anchor the composite.
        let result = classifier
            .check_calendar("I want to meet Ana on Friday")
            .expect("calendar vocabulary present");
        assert_eq!(result.category, Category::Calendar);
        assert!(classifier.check_calendar("I want a sandwich").is_none());
    }

    #[test]
    fn hedge_downgrades_action_but_not_obligation() {
        let hedged_action = classify("Perhaps I could write a short story");
        assert_eq!(hedged_action.category, Category::Note);
        assert_eq!(hedged_action.matched_group, Some(PatternGroup::ActionVerb));
        assert_eq!(
            hedged_action.matched_pattern_id.as_deref(),
            Some("action.create")
        );

        let hedged_obligation = classify("Maybe I need to buy a new laptop");
        assert_eq!(hedged_obligation.category, Category::Task);
        assert_eq!(
            hedged_obligation.matched_pattern_id.as_deref(),
            Some("obligation.need_to")
        );
    }

    #[test]
    fn intent_overrides_calendar_and_action_vocabulary() {
        let result = classify("I want to buy concert tickets for Friday at 8pm");
        assert_eq!(result.category, Category::Note);
        assert_eq!(result.matched_group, Some(PatternGroup::IntentDesire));
    }

    #[test]
    fn question_overrides_calendar() {
        let result = classify("What should I cook for dinner");
        assert_eq!(result.category, Category::Note);
        assert_eq!(
            result.matched_pattern_id.as_deref(),
            Some("question.what_should_i")
        );
    }

    #[test]
    fn calendar_overrides_obligation() {
        let result = classify("I need to call the doctor next week");
        assert_eq!(result.category, Category::Calendar);
        assert_eq!(result.matched_group, Some(PatternGroup::Calendar));
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        let classifier = Classifier::builtin();
        let results: Vec<Category> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || classifier.classify("Buy milk").category))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("classification thread"))
                .collect()
        });
        assert!(results.iter().all(|category| *category == Category::Task));
    }
}
