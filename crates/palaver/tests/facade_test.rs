//! End-to-end checks through the re-exported API.

use palaver::{
    KnownReferences, LineScanCodec, PalaverConfig, StepKind, StoryBuilder, UnknownReference,
};
use std::io::Write;

const DEFINITION: &str = "\
- story: greet_user
  steps:
    - intent: [greet]
    - action: [utter_hi]
    - action: [action_log_visit]
";

#[test]
fn definition_file_round_trips_to_payload() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DEFINITION.as_bytes()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let known = KnownReferences::new(["action_log_visit"], ["utter_hi"]);
    let story = StoryBuilder::hydrate("Greet user", "  Says hi  ", &text, known);

    assert!(story.diagnostics().is_empty());
    assert!(story.skipped_lines().is_empty());

    let payload = story.submit().unwrap();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["name"], "Greet user");
    assert_eq!(json["description"], "Says hi");
    assert_eq!(json["intents"], serde_json::json!(["greet"]));
    assert_eq!(json["action"], serde_json::json!(["action_log_visit"]));
    assert_eq!(json["responses"], serde_json::json!(["utter_hi"]));
}

#[test]
fn configured_policy_keeps_unknown_references() {
    let config = PalaverConfig::default().with_parse(
        palaver::ParseConfig::default().with_unknown_reference(UnknownReference::AssumeAction),
    );
    let story = StoryBuilder::hydrate_with(
        LineScanCodec::from(config.parse()),
        "Greet user",
        "",
        DEFINITION,
        KnownReferences::default(),
    );

    let kinds: Vec<StepKind> = story.sequence().iter().map(|s| *s.kind()).collect();
    assert_eq!(
        kinds,
        vec![StepKind::Intent, StepKind::Action, StepKind::Action]
    );
}
