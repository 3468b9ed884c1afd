use std::collections::BTreeSet;
use voxnote_core::{classify, Category, PatternLibrary};

/// One phrase per built-in rule; the rule must be the first match of its list.
const RULE_PHRASES: &[(&str, &str)] = &[
    ("I want to ski", "intent.want_to"),
    ("I'd like to ski", "intent.like_to"),
    ("I wish to ski", "intent.wish_to"),
    ("I hope to ski", "intent.hope_to"),
    ("I'm thinking about skiing", "intent.thinking_about"),
    ("I am interested in skiing", "intent.interested_in"),
    ("I love to ski", "intent.love_to"),
    ("I enjoy skiing", "intent.enjoy"),
    ("I should try skiing", "intent.should_explore"),
    ("We would like to ski", "intent.would_like_to"),
    ("What should I wear", "question.what_should_i"),
    ("How can I help", "question.how_do_i"),
    ("Where should I park", "question.where_should_i"),
    ("Where can I buy stamps", "question.where_should_i"),
    ("When should I leave", "question.when_should_i"),
    ("Why should I bother", "question.why_should_i"),
    ("Why do I bother", "question.why_should_i"),
    ("Is it raining?", "question.trailing_mark"),
    ("Party at midnight", "calendar.at_named_time"),
    ("Dentist at 9am", "calendar.at_clock"),
    ("Gym at 18:45", "calendar.at_clock_24h"),
    ("Standup 10:30 a.m.", "calendar.clock_meridiem"),
    ("Drove past the old house yesterday", "calendar.relative_day"),
    ("Pizza tonight", "calendar.relative_day"),
    ("Yoga on Sundays", "calendar.weekday"),
    ("Gym this week", "calendar.relative_period"),
    ("Budget review next month", "calendar.relative_period"),
    ("Appointment with the vet", "calendar.meeting"),
    ("Call grandma", "calendar.call"),
    ("Dinner with Lee", "calendar.meal"),
    ("Schedule the review", "calendar.schedule"),
    ("Remind me at six to stretch", "calendar.remind_me"),
    ("No need to buy milk", "obligation.need_to"),
    ("Have to renew the lease", "obligation.have_to"),
    ("I must stretch", "obligation.must"),
    ("Remember to water the plants", "obligation.remember_to"),
    ("Do not forget to vote", "obligation.dont_forget"),
    ("Make sure to lock up", "obligation.make_sure"),
    ("Task: clean the gutters", "obligation.todo_marker"),
    ("Purchase a new router", "action.acquire"),
    ("Obtain a parking permit", "action.acquire"),
    ("Collect the parcel", "action.pick_up"),
    ("Pick up the dry cleaning", "action.pick_up"),
    ("Send the invoice", "action.complete"),
    ("Repair the bike chain", "action.fix"),
    ("Build a birdhouse", "action.create"),
    ("Contact the bank", "action.contact"),
    ("Note: wifi changed", "note.prefix"),
    ("Ideas for the garden", "note.idea"),
    ("Random thought", "note.thought"),
    ("Notes from the talk", "note.note"),
    ("Insight from the retro", "note.insight"),
    ("Inspiration for the garden", "note.insight"),
    ("Concept for the app", "note.insight"),
    ("Brainstorming session", "note.brainstorm"),
    ("Cool bridge", "note.reaction"),
    ("Remember this quote", "note.remember_this"),
    ("Remember that she prefers tea", "note.remember_this"),
    ("maybe later", "hedge.maybe"),
    ("perhaps", "hedge.perhaps"),
    ("could be", "hedge.could"),
    ("might rain", "hedge.might"),
    ("I should probably fix the sink", "hedge.should_probably"),
    ("see you tomorrow", "anchor.tomorrow"),
    ("sometime next week", "anchor.next_week"),
];

fn first_rule_id(library: &PatternLibrary, rule_id: &str, text: &str) -> Option<String> {
    if rule_id.starts_with("hedge.") {
        return library.first_hedge(text).map(|rule| rule.id().to_string());
    }
    if rule_id.starts_with("anchor.") {
        return library
            .first_intent_time_anchor(text)
            .map(|rule| rule.id().to_string());
    }
    let group = library
        .patterns()
        .find(|pattern| pattern.id() == rule_id)
        .map(|pattern| pattern.group())?;
    library
        .first_match(group, text)
        .map(|pattern| pattern.id().to_string())
}

#[test]
fn every_builtin_rule_matches_its_phrase() {
    let library = PatternLibrary::builtin();
    for (text, rule_id) in RULE_PHRASES {
        assert_eq!(
            first_rule_id(library, rule_id, text).as_deref(),
            Some(*rule_id),
            "input: {text:?}"
        );
    }
}

#[test]
fn every_builtin_rule_has_a_phrase() {
    let library = PatternLibrary::builtin();
    let declared: BTreeSet<&str> = library
        .patterns()
        .map(|pattern| pattern.id())
        .chain(library.hedges().iter().map(|hedge| hedge.id()))
        .chain(library.intent_time_anchors().iter().map(|anchor| anchor.id()))
        .collect();
    let covered: BTreeSet<&str> = RULE_PHRASES.iter().map(|(_, rule_id)| *rule_id).collect();
    assert_eq!(declared, covered);
}

#[test]
fn rule_phrases_classify_end_to_end() {
    let cases = [
        ("I should probably fix the sink", Category::Note),
        ("Where can I park", Category::Note),
        ("When should I leave", Category::Note),
        ("Why should I bother", Category::Note),
        ("Party at midnight", Category::Calendar),
        ("Drove past the old house yesterday", Category::Calendar),
        ("Pizza tonight", Category::Calendar),
        ("Gym this week", Category::Calendar),
        ("Budget review next month", Category::Calendar),
        ("Remind me at six to stretch", Category::Calendar),
        ("No need to buy milk", Category::Task),
        ("Purchase a new router", Category::Task),
        ("Obtain a parking permit", Category::Task),
        ("Collect the parcel", Category::Task),
        ("Repair the bike chain", Category::Task),
        ("Contact the bank", Category::Task),
        ("Send the invoice", Category::Task),
        ("Insight from the retro", Category::Note),
        ("Inspiration for the garden", Category::Note),
        ("Concept for the app", Category::Note),
        ("Remember this quote", Category::Note),
        ("Remember that she prefers tea", Category::Note),
    ];

    for (text, expected) in cases {
        assert_eq!(classify(text).category, expected, "input: {text:?}");
    }
}
