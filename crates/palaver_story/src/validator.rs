//! Adjacency grammar checks for story step sequences.
//!
//! A well-formed story is a series of turns: one intent followed by at least
//! one action or response. Violations are advisory. They never block editing,
//! only submission.

use palaver_core::{Step, StepKind};
use serde::Serialize;
use tracing::instrument;

/// A single grammar violation. Step numbers are 1-based.
///
/// # Examples
///
/// ```
/// use palaver_story::Diagnostic;
///
/// let d = Diagnostic::ConsecutiveIntents { step: 2, next: 3 };
/// assert_eq!(
///     d.to_string(),
///     "Steps 2 and 3: Intent cannot be followed directly by another Intent"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Diagnostic {
    /// The sequence has no steps
    #[display("Story must have at least one step")]
    Empty,
    /// The first step is not an intent
    #[display("Story must start with an Intent")]
    MissingLeadingIntent,
    /// An intent closes the sequence
    #[display("Step {}: Intent cannot be the last step", step)]
    TrailingIntent {
        /// Offending step
        step: usize,
    },
    /// Two intents in a row
    #[display("Steps {} and {}: Intent cannot be followed directly by another Intent", step, next)]
    ConsecutiveIntents {
        /// First intent
        step: usize,
        /// Intent that follows it
        next: usize,
    },
    /// An action or response opens the sequence
    #[display("Step {}: Action/Response cannot be the first step", step)]
    LeadingBotTurn {
        /// Offending step
        step: usize,
    },
    /// A run of actions/responses with no intent anywhere before it
    #[display("Step {}: Action/Response group must be preceded by an Intent", step)]
    OrphanBotTurn {
        /// Offending step
        step: usize,
    },
    /// An intent whose turn has no action or response
    #[display("Step {}: Intent must have at least one Action or Response following it", step)]
    UnansweredIntent {
        /// Offending step
        step: usize,
    },
}

/// Checks a step sequence against the turn grammar.
///
/// Pure and linear: one pass for adjacency, one lookahead pass for intents
/// without a reply. An empty sequence yields only [`Diagnostic::Empty`].
#[instrument(skip(steps), fields(len = steps.len()))]
pub fn validate(steps: &[Step]) -> Vec<Diagnostic> {
    let Some(first) = steps.first() else {
        return vec![Diagnostic::Empty];
    };

    let mut diagnostics = Vec::new();
    if *first.kind() != StepKind::Intent {
        diagnostics.push(Diagnostic::MissingLeadingIntent);
    }

    let last = steps.len() - 1;
    for (i, step) in steps.iter().enumerate() {
        match step.kind() {
            StepKind::Intent => {
                if i == last {
                    diagnostics.push(Diagnostic::TrailingIntent { step: i + 1 });
                } else if *steps[i + 1].kind() == StepKind::Intent {
                    diagnostics.push(Diagnostic::ConsecutiveIntents {
                        step: i + 1,
                        next: i + 2,
                    });
                }
            }
            StepKind::Action | StepKind::Response => {
                if i == 0 {
                    diagnostics.push(Diagnostic::LeadingBotTurn { step: 1 });
                } else if steps[i - 1].kind().is_bot_turn()
                    && !steps[..i - 1]
                        .iter()
                        .rev()
                        .any(|s| *s.kind() == StepKind::Intent)
                {
                    diagnostics.push(Diagnostic::OrphanBotTurn { step: i + 1 });
                }
            }
        }
    }

    for (i, step) in steps.iter().enumerate().take(last) {
        if *step.kind() != StepKind::Intent {
            continue;
        }
        let answered = steps[i + 1..]
            .iter()
            .take_while(|s| *s.kind() != StepKind::Intent)
            .any(|s| s.kind().is_bot_turn());
        if !answered {
            diagnostics.push(Diagnostic::UnansweredIntent { step: i + 1 });
        }
    }

    tracing::debug!(count = diagnostics.len(), "Validated sequence");
    diagnostics
}

/// Validation results rendered as human-readable strings.
pub fn diagnostic_messages(steps: &[Step]) -> Vec<String> {
    validate(steps).iter().map(ToString::to_string).collect()
}
