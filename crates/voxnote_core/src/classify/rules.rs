//! Built-in English ruleset.
//!
//! Sources are compiled case-insensitively and anchored on word boundaries.
//! Within a group, declaration order only decides which rule id is reported
//! for diagnostics. There is deliberately no bare `do` or `make` action rule:
//! both are too ambiguous on their own.

use crate::classify::library::{ModifierDef, PatternDef, RulesetDef};
use crate::model::category::PatternGroup;

/// Bumped whenever a rule is added, removed or edited.
pub const RULESET_VERSION: &str = "en-1.0.0";

pub const BUILTIN_PATTERNS: &[PatternDef] = &[
    // Intent / desire
    PatternDef {
        id: "intent.want_to",
        group: PatternGroup::IntentDesire,
        source: r"\bi\s+want\s+to\b",
    },
    PatternDef {
        id: "intent.like_to",
        group: PatternGroup::IntentDesire,
        source: r"\bi(?:['’]d|\s+would)\s+like\s+to\b",
    },
    PatternDef {
        id: "intent.wish_to",
        group: PatternGroup::IntentDesire,
        source: r"\bi\s+wish\s+to\b",
    },
    PatternDef {
        id: "intent.hope_to",
        group: PatternGroup::IntentDesire,
        source: r"\bi\s+hope\s+to\b",
    },
    PatternDef {
        id: "intent.thinking_about",
        group: PatternGroup::IntentDesire,
        source: r"\bi(?:['’]m|\s+am)\s+thinking\s+about\b",
    },
    PatternDef {
        id: "intent.interested_in",
        group: PatternGroup::IntentDesire,
        source: r"\bi(?:['’]m|\s+am)\s+interested\s+in\b",
    },
    PatternDef {
        id: "intent.love_to",
        group: PatternGroup::IntentDesire,
        source: r"\bi(?:['’]d|\s+would)?\s+love\s+to\b",
    },
    PatternDef {
        id: "intent.enjoy",
        group: PatternGroup::IntentDesire,
        source: r"\bi\s+enjoy\b",
    },
    PatternDef {
        id: "intent.should_explore",
        group: PatternGroup::IntentDesire,
        source: r"\bi\s+should\s+(?:read|learn|try|explore|check\s+out|look\s+into)\b",
    },
    PatternDef {
        id: "intent.would_like_to",
        group: PatternGroup::IntentDesire,
        source: r"\bwould\s+like\s+to\b",
    },
    // Questions directed at self
    PatternDef {
        id: "question.what_should_i",
        group: PatternGroup::Question,
        source: r"\bwhat\s+should\s+i\b",
    },
    PatternDef {
        id: "question.how_do_i",
        group: PatternGroup::Question,
        source: r"\bhow\s+(?:do|can)\s+i\b",
    },
    PatternDef {
        id: "question.where_should_i",
        group: PatternGroup::Question,
        source: r"\bwhere\s+(?:should|can)\s+i\b",
    },
    PatternDef {
        id: "question.when_should_i",
        group: PatternGroup::Question,
        source: r"\bwhen\s+should\s+i\b",
    },
    PatternDef {
        id: "question.why_should_i",
        group: PatternGroup::Question,
        source: r"\bwhy\s+(?:should|do)\s+i\b",
    },
    PatternDef {
        id: "question.trailing_mark",
        group: PatternGroup::Question,
        source: r"[?？]$",
    },
    // Calendar: clock times first, then day words, then meeting context
    PatternDef {
        id: "calendar.at_named_time",
        group: PatternGroup::Calendar,
        source: r"\bat\s+(?:noon|midnight)\b",
    },
    PatternDef {
        id: "calendar.at_clock",
        group: PatternGroup::Calendar,
        source: r"\bat\s+\d{1,2}(?::[0-5]\d)?\s*(?:[ap]m\b|[ap]\.m\.)",
    },
    PatternDef {
        id: "calendar.at_clock_24h",
        group: PatternGroup::Calendar,
        source: r"\bat\s+(?:[01]?\d|2[0-3]):[0-5]\d\b",
    },
    PatternDef {
        id: "calendar.clock_meridiem",
        group: PatternGroup::Calendar,
        source: r"\b\d{1,2}(?::[0-5]\d)?\s*(?:[ap]m\b|[ap]\.m\.)",
    },
    PatternDef {
        id: "calendar.relative_day",
        group: PatternGroup::Calendar,
        source: r"\b(?:today|tonight|tomorrow|yesterday)\b",
    },
    PatternDef {
        id: "calendar.weekday",
        group: PatternGroup::Calendar,
        source: r"\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)s?\b",
    },
    PatternDef {
        id: "calendar.relative_period",
        group: PatternGroup::Calendar,
        source: r"\b(?:next|this)\s+(?:week|month)\b",
    },
    PatternDef {
        id: "calendar.meeting",
        group: PatternGroup::Calendar,
        source: r"\b(?:meet|meeting|meetings|appointment|appointments|conference)\b",
    },
    PatternDef {
        id: "calendar.call",
        group: PatternGroup::Calendar,
        source: r"\bcall\b",
    },
    PatternDef {
        id: "calendar.meal",
        group: PatternGroup::Calendar,
        source: r"\b(?:lunch|dinner)\b",
    },
    PatternDef {
        id: "calendar.schedule",
        group: PatternGroup::Calendar,
        source: r"\b(?:schedule|scheduled)\b",
    },
    PatternDef {
        id: "calendar.remind_me",
        group: PatternGroup::Calendar,
        source: r"\bremind\s+me\s+(?:to|at)\b",
    },
    // Obligation
    PatternDef {
        id: "obligation.need_to",
        group: PatternGroup::Obligation,
        source: r"\bneed\s+to\b",
    },
    PatternDef {
        id: "obligation.have_to",
        group: PatternGroup::Obligation,
        source: r"\bhave\s+to\b",
    },
    PatternDef {
        id: "obligation.must",
        group: PatternGroup::Obligation,
        source: r"\bi\s+must\b",
    },
    PatternDef {
        id: "obligation.remember_to",
        group: PatternGroup::Obligation,
        source: r"\bremember\s+to\b",
    },
    PatternDef {
        id: "obligation.dont_forget",
        group: PatternGroup::Obligation,
        source: r"\b(?:don['’]?t|do\s+not)\s+forget\s+to\b",
    },
    PatternDef {
        id: "obligation.make_sure",
        group: PatternGroup::Obligation,
        source: r"\bmake\s+sure\s+to\b",
    },
    PatternDef {
        id: "obligation.todo_marker",
        group: PatternGroup::Obligation,
        source: r"\b(?:todo|to-do|task)\b",
    },
    // Action verbs
    PatternDef {
        id: "action.acquire",
        group: PatternGroup::ActionVerb,
        source: r"\b(?:buy|purchase|get|obtain|acquire)\b",
    },
    PatternDef {
        id: "action.pick_up",
        group: PatternGroup::ActionVerb,
        source: r"\b(?:pick\s+up|collect)\b",
    },
    PatternDef {
        id: "action.complete",
        group: PatternGroup::ActionVerb,
        source: r"\b(?:finish|complete|submit|send)\b",
    },
    PatternDef {
        id: "action.fix",
        group: PatternGroup::ActionVerb,
        source: r"\b(?:fix|repair|resolve)\b",
    },
    PatternDef {
        id: "action.create",
        group: PatternGroup::ActionVerb,
        source: r"\b(?:create|build|write)\b",
    },
    PatternDef {
        id: "action.contact",
        group: PatternGroup::ActionVerb,
        source: r"\b(?:email|e-mail|contact|text)\b",
    },
    // Note indicators
    PatternDef {
        id: "note.prefix",
        group: PatternGroup::NoteIndicator,
        source: r"^note\s*:",
    },
    PatternDef {
        id: "note.idea",
        group: PatternGroup::NoteIndicator,
        source: r"\bideas?\b",
    },
    PatternDef {
        id: "note.thought",
        group: PatternGroup::NoteIndicator,
        source: r"\bthoughts?\b",
    },
    PatternDef {
        id: "note.note",
        group: PatternGroup::NoteIndicator,
        source: r"\bnotes?\b",
    },
    PatternDef {
        id: "note.insight",
        group: PatternGroup::NoteIndicator,
        source: r"\b(?:insights?|inspiration|concepts?)\b",
    },
    PatternDef {
        id: "note.brainstorm",
        group: PatternGroup::NoteIndicator,
        source: r"\bbrainstorm(?:ing)?\b",
    },
    PatternDef {
        id: "note.reaction",
        group: PatternGroup::NoteIndicator,
        source: r"\b(?:interesting|fascinating|cool)\b",
    },
    PatternDef {
        id: "note.remember_this",
        group: PatternGroup::NoteIndicator,
        source: r"\bremember\s+(?:this|that)\b",
    },
];

pub const BUILTIN_HEDGES: &[ModifierDef] = &[
    ModifierDef {
        id: "hedge.maybe",
        source: r"\bmaybe\b",
    },
    ModifierDef {
        id: "hedge.perhaps",
        source: r"\bperhaps\b",
    },
    ModifierDef {
        id: "hedge.could",
        source: r"\bcould\b",
    },
    ModifierDef {
        id: "hedge.might",
        source: r"\bmight\b",
    },
    ModifierDef {
        id: "hedge.should_probably",
        source: r"\bshould\s+probably\b",
    },
];

pub const BUILTIN_INTENT_TIME_ANCHORS: &[ModifierDef] = &[
    ModifierDef {
        id: "anchor.tomorrow",
        source: r"\btomorrow\b",
    },
    ModifierDef {
        id: "anchor.next_week",
        source: r"\bnext\s+week\b",
    },
];

pub const BUILTIN_RULESET: RulesetDef<'static> = RulesetDef {
    version: RULESET_VERSION,
    patterns: BUILTIN_PATTERNS,
    hedges: BUILTIN_HEDGES,
    intent_time_anchors: BUILTIN_INTENT_TIME_ANCHORS,
};
