use palaver_core::StepKind;
use palaver_story::{Diagnostic, StepSequence, diagnostic_messages};

fn build(kinds: &[StepKind]) -> StepSequence {
    let mut seq = StepSequence::new();
    for (i, kind) in kinds.iter().enumerate() {
        seq.append(*kind, format!("ref_{i}"));
    }
    seq
}

fn messages(kinds: &[StepKind]) -> Vec<String> {
    diagnostic_messages(build(kinds).steps())
}

fn any_contains(messages: &[String], needle: &str) -> bool {
    messages.iter().any(|m| m.contains(needle))
}

use StepKind::{Action, Intent, Response};

#[test]
fn empty_sequence_must_have_a_step() {
    let found = messages(&[]);
    assert_eq!(found.len(), 1);
    assert!(any_contains(&found, "must have at least one step"));
}

#[test]
fn lone_action_cannot_be_first() {
    let found = messages(&[Action]);
    assert!(any_contains(&found, "cannot be the first step"));
    assert!(any_contains(&found, "must start with an Intent"));
}

#[test]
fn two_intents_in_a_row() {
    let found = messages(&[Intent, Intent]);
    assert!(any_contains(
        &found,
        "cannot be followed directly by another Intent"
    ));
    assert!(any_contains(&found, "Steps 1 and 2"));
}

#[test]
fn lone_intent_cannot_be_last() {
    let found = messages(&[Intent]);
    assert!(any_contains(&found, "cannot be the last step"));
    assert!(any_contains(&found, "Step 1"));
}

#[test]
fn two_well_formed_turns_are_clean() {
    assert!(messages(&[Intent, Action, Intent, Action]).is_empty());
}

#[test]
fn alternating_construction_never_reports() {
    let mut seq = StepSequence::new();
    for turn in 0..25 {
        seq.append(Intent, format!("intent_{turn}"));
        seq.append(Action, format!("action_{turn}"));
        assert!(seq.validate().is_empty(), "turn {turn}");
    }
}

#[test]
fn responses_count_as_replies() {
    assert!(messages(&[Intent, Response, Response, Intent, Action, Response]).is_empty());
}

#[test]
fn orphan_group_after_leading_action() {
    let diagnostics = build(&[Action, Response, Intent, Action]).validate();
    assert!(diagnostics.contains(&Diagnostic::LeadingBotTurn { step: 1 }));
    assert!(diagnostics.contains(&Diagnostic::OrphanBotTurn { step: 2 }));
    assert!(!diagnostics.contains(&Diagnostic::OrphanBotTurn { step: 4 }));
}

#[test]
fn step_numbers_are_one_based() {
    let found = messages(&[Intent, Action, Intent, Intent, Action]);
    assert!(any_contains(&found, "Steps 3 and 4"));
    assert!(any_contains(
        &found,
        "Step 3: Intent must have at least one Action or Response following it"
    ));
}
