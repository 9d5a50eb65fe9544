use palaver_core::{Step, StepKind, StoryPayload};

fn steps() -> Vec<Step> {
    vec![
        Step::new(StepKind::Intent, "greet"),
        Step::new(StepKind::Action, "action_lookup"),
        Step::new(StepKind::Response, "utter_greet"),
        Step::new(StepKind::Intent, "goodbye"),
        Step::new(StepKind::Action, "action_lookup"),
        Step::new(StepKind::Intent, "greet"),
        Step::new(StepKind::Response, "utter_bye"),
    ]
}

#[test]
fn references_are_unique_in_first_appearance_order() {
    let payload = StoryPayload::from_steps("Greeting", "says hi", "- story: greeting", &steps());

    assert_eq!(payload.intents(), &vec!["greet".to_string(), "goodbye".to_string()]);
    assert_eq!(payload.action(), &vec!["action_lookup".to_string()]);
    assert_eq!(
        payload.responses(),
        &vec!["utter_greet".to_string(), "utter_bye".to_string()]
    );
}

#[test]
fn unused_collections_are_empty() {
    let payload = StoryPayload::from_steps("Greeting", "", "", &steps());
    assert!(payload.slots().is_empty());
    assert!(payload.roles().is_empty());
    assert!(payload.entities().is_empty());
}

#[test]
fn serializes_with_backend_field_names() {
    let payload = StoryPayload::from_steps("Greeting", "d", "- story: greeting", &steps());
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["name"], "Greeting");
    assert_eq!(json["define"], "- story: greeting");
    assert!(json["action"].is_array());
    assert!(json["responses"].is_array());
    assert_eq!(json["slots"], serde_json::json!([]));
}
