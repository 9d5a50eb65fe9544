//! Story steps and their kinds.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The closed set of things a story step can reference.
///
/// # Examples
///
/// ```
/// use palaver_core::StepKind;
///
/// assert_eq!(StepKind::Intent.yaml_key(), "intent");
/// assert_eq!(StepKind::Response.yaml_key(), "action");
/// assert_eq!(format!("{}", StepKind::Response), "response");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// A user-utterance classification label
    #[display("intent")]
    Intent,
    /// A custom bot action
    #[display("action")]
    Action,
    /// A canned bot response
    #[display("response")]
    Response,
}

impl StepKind {
    /// Key used for this kind in a story definition.
    ///
    /// Responses are written under the `action` key: the training pipeline
    /// treats canned responses as actions.
    pub fn yaml_key(self) -> &'static str {
        match self {
            StepKind::Intent => "intent",
            StepKind::Action => "action",
            StepKind::Response => "action",
        }
    }

    /// True for the kinds that make up the bot side of a turn.
    pub fn is_bot_turn(self) -> bool {
        match self {
            StepKind::Intent => false,
            StepKind::Action | StepKind::Response => true,
        }
    }
}

/// Identifier of a step, unique within one sequence.
///
/// Not a persisted identity: it only distinguishes steps that reference the
/// same entity during an editing session.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
pub struct StepId(String);

impl StepId {
    /// Generates a fresh random id for a step of the given kind.
    pub fn generate(kind: StepKind) -> Self {
        Self(format!("{}_{}", kind, uuid::Uuid::new_v4().simple()))
    }

    /// Id derived from a definition line: `<kind>_<reference>_<line>`.
    pub fn for_line(kind: StepKind, reference_id: &str, line_index: usize) -> Self {
        Self(format!("{}_{}_{}", kind, reference_id, line_index))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single unit in a story.
///
/// # Examples
///
/// ```
/// use palaver_core::{Step, StepKind};
///
/// let step = Step::new(StepKind::Intent, "greet");
/// assert_eq!(step.reference_id(), "greet");
/// assert_eq!(step.display_name(), "greet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Step {
    /// Unique id within the owning sequence
    id: StepId,
    /// What the step references
    kind: StepKind,
    /// Identifier of the referenced intent, action or response
    reference_id: String,
    /// Human-readable label
    display_name: String,
}

impl Step {
    /// Creates a step with a fresh id, named after its reference.
    pub fn new(kind: StepKind, reference_id: impl Into<String>) -> Self {
        let reference_id = reference_id.into();
        Self {
            id: StepId::generate(kind),
            kind,
            display_name: reference_id.clone(),
            reference_id,
        }
    }

    /// Creates a step with an explicit id.
    pub fn with_id(id: StepId, kind: StepKind, reference_id: impl Into<String>) -> Self {
        let reference_id = reference_id.into();
        Self {
            id,
            kind,
            display_name: reference_id.clone(),
            reference_id,
        }
    }

    /// Replaces the display name.
    pub fn named(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the display name in place.
    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }
}
