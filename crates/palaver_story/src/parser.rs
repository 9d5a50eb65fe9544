//! Best-effort recovery of step sequences from story definitions.
//!
//! This is a line scanner, not a YAML parser. It looks for `- intent:` and
//! `- action:` markers and pulls the first bracketed identifier from each
//! marked line, which is exactly the subset [`crate::project`] writes. Markers
//! inside comments or nested structures are picked up too.

use crate::StepSequence;
use derive_getters::Getters;
use palaver_core::{Step, StepId, StepKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("Valid bracketed reference regex"));

const INTENT_MARKER: &str = "- intent:";
const ACTION_MARKER: &str = "- action:";

/// Action and response ids currently known to the editor.
///
/// Definitions write both kinds under the `action` key, so the scanner needs
/// these sets to tell them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct KnownReferences {
    /// Known action ids
    actions: HashSet<String>,
    /// Known response ids
    responses: HashSet<String>,
}

impl KnownReferences {
    /// Creates the sets from any iterables of ids.
    pub fn new<A, R>(actions: A, responses: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Records an id of the given kind. Intents need no disambiguation and
    /// are ignored.
    pub fn insert(&mut self, kind: StepKind, reference_id: impl Into<String>) {
        match kind {
            StepKind::Intent => {}
            StepKind::Action => {
                self.actions.insert(reference_id.into());
            }
            StepKind::Response => {
                self.responses.insert(reference_id.into());
            }
        }
    }

    /// Resolves an `action:` reference. Actions win over responses.
    pub fn classify(&self, reference_id: &str) -> Option<StepKind> {
        if self.actions.contains(reference_id) {
            Some(StepKind::Action)
        } else if self.responses.contains(reference_id) {
            Some(StepKind::Response)
        } else {
            None
        }
    }
}

/// What to do with an `action:` reference that is neither a known action
/// nor a known response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownReference {
    /// Skip the line
    #[default]
    Drop,
    /// Keep the step as an action
    #[serde(alias = "action")]
    AssumeAction,
}

impl std::str::FromStr for UnknownReference {
    type Err = String;

    /// Accepts the same spellings as the `unknown_reference` config key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(UnknownReference::Drop),
            "assume_action" | "action" => Ok(UnknownReference::AssumeAction),
            other => Err(format!("unknown reference policy '{}'", other)),
        }
    }
}

/// Why a marked line produced no step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum SkipReason {
    /// No bracketed identifier on the line
    #[display("no bracketed reference")]
    MissingBrackets,
    /// Identifier is neither a known action nor a known response
    #[display("unknown action or response")]
    UnknownReference,
}

/// A marked line the scanner could not turn into a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SkippedLine {
    /// 0-based line index in the scanned text
    line_index: usize,
    /// Trimmed line content
    content: String,
    /// Why it was skipped
    reason: SkipReason,
}

/// Result of scanning a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ParseOutcome {
    /// Recovered steps, in line order
    sequence: StepSequence,
    /// Marked lines that produced nothing
    skipped: Vec<SkippedLine>,
}

impl ParseOutcome {
    /// Splits the outcome into its parts.
    pub fn into_parts(self) -> (StepSequence, Vec<SkippedLine>) {
        (self.sequence, self.skipped)
    }
}

/// Line-oriented scanner for story definitions.
///
/// Never fails: unusable lines are skipped and reported in
/// [`ParseOutcome::skipped`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScanner {
    unknown_reference: UnknownReference,
}

impl LineScanner {
    /// Creates a scanner with the given fallback for unknown references.
    pub fn new(unknown_reference: UnknownReference) -> Self {
        Self { unknown_reference }
    }

    /// Fallback applied to unknown `action:` references.
    pub fn unknown_reference(&self) -> UnknownReference {
        self.unknown_reference
    }

    /// Scans `text` and reports what was recovered and what was skipped.
    ///
    /// Step ids are `<kind>_<reference>_<line>`, unique within one call.
    /// Display names are the raw reference; resolving real names is left to
    /// the caller.
    #[instrument(skip(self, text, known), fields(lines = text.lines().count()))]
    pub fn scan(&self, text: &str, known: &KnownReferences) -> ParseOutcome {
        let mut steps = Vec::new();
        let mut skipped = Vec::new();

        for (line_index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let is_intent = line.contains(INTENT_MARKER);
            if !is_intent && !line.contains(ACTION_MARKER) {
                continue;
            }

            let skip = |reason| SkippedLine {
                line_index,
                content: line.to_string(),
                reason,
            };

            let Some(reference_id) = extract_reference(line) else {
                warn!(line_index, line, "Skipping step line without bracketed reference");
                skipped.push(skip(SkipReason::MissingBrackets));
                continue;
            };

            let kind = if is_intent {
                StepKind::Intent
            } else {
                match (known.classify(reference_id), self.unknown_reference) {
                    (Some(kind), _) => kind,
                    (None, UnknownReference::AssumeAction) => StepKind::Action,
                    (None, UnknownReference::Drop) => {
                        warn!(line_index, reference_id, "Dropping unknown action/response");
                        skipped.push(skip(SkipReason::UnknownReference));
                        continue;
                    }
                }
            };

            let id = StepId::for_line(kind, reference_id, line_index);
            steps.push(Step::with_id(id, kind, reference_id));
        }

        debug!(steps = steps.len(), skipped = skipped.len(), "Scanned definition");
        ParseOutcome {
            sequence: StepSequence::from_steps(steps),
            skipped,
        }
    }
}

fn extract_reference(line: &str) -> Option<&str> {
    let reference = BRACKETED.captures(line)?.get(1)?.as_str().trim();
    (!reference.is_empty()).then_some(reference)
}

/// Recovers a step sequence from a definition, dropping unknown references.
///
/// # Examples
///
/// ```
/// use palaver_core::StepKind;
/// use palaver_story::{KnownReferences, parse};
///
/// let known = KnownReferences::new(["action_check"], ["utter_hi"]);
/// let text = "- story: hi\n  steps:\n    - intent: [greet]\n    - action: [utter_hi]\n    - action: [action_check]";
/// let seq = parse(text, &known);
///
/// assert_eq!(
///     seq.references(),
///     vec![
///         (StepKind::Intent, "greet"),
///         (StepKind::Response, "utter_hi"),
///         (StepKind::Action, "action_check"),
///     ]
/// );
/// ```
pub fn parse(text: &str, known: &KnownReferences) -> StepSequence {
    parse_with_report(text, known).into_parts().0
}

/// Like [`parse`], also reporting the lines that were skipped.
pub fn parse_with_report(text: &str, known: &KnownReferences) -> ParseOutcome {
    LineScanner::default().scan(text, known)
}
