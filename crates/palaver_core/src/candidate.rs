//! Candidate entities offered for insertion into a story.

use crate::StepKind;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An intent, action or response that can be appended as a step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Candidate {
    /// Which kind of step this candidate produces
    kind: StepKind,
    /// Backend identifier of the entity
    reference_id: String,
    /// Label shown to operators
    display_name: String,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(
        kind: StepKind,
        reference_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            reference_id: reference_id.into(),
            display_name: display_name.into(),
        }
    }
}
