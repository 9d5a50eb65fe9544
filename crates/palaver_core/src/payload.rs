//! Payload handed to the story storage backend.

use crate::{Step, StepKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Story as submitted to the backend.
///
/// `slots`, `roles` and `entities` are always empty: the builder never
/// produces them.
///
/// # Examples
///
/// ```
/// use palaver_core::{Step, StepKind, StoryPayload};
///
/// let steps = vec![
///     Step::new(StepKind::Intent, "greet"),
///     Step::new(StepKind::Response, "utter_hi"),
///     Step::new(StepKind::Intent, "greet"),
/// ];
/// let payload = StoryPayload::from_steps("Hello", "", "- story: hello", &steps);
/// assert_eq!(payload.intents(), &vec!["greet".to_string()]);
/// assert_eq!(payload.responses(), &vec!["utter_hi".to_string()]);
/// assert!(payload.action().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoryPayload {
    /// Story name as entered by the operator
    name: String,
    /// Free-form description
    description: String,
    /// Generated (or hand-edited) story definition
    define: String,
    /// Unique intent references, in order of first appearance
    intents: Vec<String>,
    /// Unique action references, in order of first appearance
    action: Vec<String>,
    /// Unique response references, in order of first appearance
    responses: Vec<String>,
    /// Always empty
    slots: Vec<String>,
    /// Always empty
    roles: Vec<String>,
    /// Always empty
    entities: Vec<String>,
}

impl StoryPayload {
    /// Builds a payload from a definition and the steps it was derived from.
    pub fn from_steps(
        name: impl Into<String>,
        description: impl Into<String>,
        define: impl Into<String>,
        steps: &[Step],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            define: define.into(),
            intents: unique_references(steps, StepKind::Intent),
            action: unique_references(steps, StepKind::Action),
            responses: unique_references(steps, StepKind::Response),
            slots: Vec::new(),
            roles: Vec::new(),
            entities: Vec::new(),
        }
    }
}

fn unique_references(steps: &[Step], kind: StepKind) -> Vec<String> {
    let mut references: Vec<String> = Vec::new();
    for step in steps.iter().filter(|s| *s.kind() == kind) {
        if !references.contains(step.reference_id()) {
            references.push(step.reference_id().clone());
        }
    }
    references
}
