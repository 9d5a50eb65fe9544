//! Seam between the editing session and the definition format.

use crate::{
    KnownReferences, LineScanner, ParseConfig, ParseOutcome, StepSequence, UnknownReference,
    project,
};

/// Converts step sequences to and from their textual definition.
///
/// The editing session only talks to this trait, so the line scanner can be
/// replaced by a structural parser without touching validation or rendering.
pub trait StepSequenceCodec {
    /// Renders the sequence under the given story name.
    fn encode(&self, story_name: &str, sequence: &StepSequence) -> String;

    /// Recovers a sequence from a definition. Must not fail.
    fn decode(&self, text: &str, known: &KnownReferences) -> ParseOutcome;
}

/// Bracketed projection paired with the line scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScanCodec {
    scanner: LineScanner,
}

impl LineScanCodec {
    /// Creates a codec with the given fallback for unknown references.
    pub fn new(unknown_reference: UnknownReference) -> Self {
        Self {
            scanner: LineScanner::new(unknown_reference),
        }
    }
}

impl StepSequenceCodec for LineScanCodec {
    fn encode(&self, story_name: &str, sequence: &StepSequence) -> String {
        project(story_name, sequence.steps())
    }

    fn decode(&self, text: &str, known: &KnownReferences) -> ParseOutcome {
        self.scanner.scan(text, known)
    }
}

impl From<&ParseConfig> for LineScanCodec {
    fn from(config: &ParseConfig) -> Self {
        Self::new(*config.unknown_reference())
    }
}
