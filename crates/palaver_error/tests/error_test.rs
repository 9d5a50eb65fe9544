use palaver_error::{
    ConfigError, ConfigErrorKind, PalaverErrorKind, PalaverResult, StoryError, StoryErrorKind,
};

fn reject_policy(policy: &str) -> PalaverResult<()> {
    Err(ConfigError::new(ConfigErrorKind::InvalidPolicy(policy.to_string())))?
}

#[test]
fn config_errors_convert_and_keep_their_kind() {
    let err = reject_policy("guess").unwrap_err();
    match err.kind() {
        PalaverErrorKind::Config(e) => {
            assert_eq!(e.kind, ConfigErrorKind::InvalidPolicy("guess".to_string()));
            assert!(e.file.ends_with("error_test.rs"));
        }
        other => panic!("expected configuration error, got {other}"),
    }
}

#[test]
fn read_errors_name_the_file() {
    let err = ConfigError::new(ConfigErrorKind::Read {
        path: "/etc/palaver.toml".to_string(),
        reason: "not found".to_string(),
    });
    let message = err.to_string();
    assert!(message.contains("/etc/palaver.toml"));
    assert!(message.contains("not found"));
}

#[test]
fn export_failures_are_story_errors() {
    let err = StoryError::new(StoryErrorKind::Export("key must be a string".to_string()));
    assert!(err.to_string().contains("Failed to export story payload"));
}
