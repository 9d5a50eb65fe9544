//! Ordered step sequence owned by a story editing session.

use crate::{Diagnostic, project, validate};
use palaver_core::{Candidate, Step, StepId, StepKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered list of steps making up a story.
///
/// Insertion order is the only source of truth for rendering and validation.
/// The same reference may appear any number of times under different ids.
///
/// # Examples
///
/// ```
/// use palaver_core::StepKind;
/// use palaver_story::StepSequence;
///
/// let mut story = StepSequence::new();
/// story.append(StepKind::Intent, "greet");
/// story.append(StepKind::Response, "utter_greet");
///
/// assert!(story.validate().is_empty());
/// assert_eq!(
///     story.to_yaml("Greet user"),
///     "- story: greet_user\n  steps:\n    - intent: [greet]\n    - action: [utter_greet]"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Wraps an existing ordered list of steps.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Appends a new step with a fresh id and returns it.
    #[instrument(skip(self, reference), fields(len = self.steps.len()))]
    pub fn append(&mut self, kind: StepKind, reference: impl Into<String>) -> &Step {
        self.push(Step::new(kind, reference))
    }

    /// Appends a step built from a catalog candidate, keeping its display name.
    pub fn append_candidate(&mut self, candidate: &Candidate) -> &Step {
        let step = Step::new(*candidate.kind(), candidate.reference_id().clone())
            .named(candidate.display_name().clone());
        self.push(step)
    }

    /// Appends an already constructed step.
    pub fn push(&mut self, step: Step) -> &Step {
        debug!(id = %step.id(), kind = %step.kind(), reference = %step.reference_id(), "Appending step");
        let index = self.steps.len();
        self.steps.push(step);
        &self.steps[index]
    }

    /// Removes the step with the given id. Absent ids are ignored.
    #[instrument(skip(self), fields(len = self.steps.len()))]
    pub fn remove_by_id(&mut self, id: &StepId) -> Option<Step> {
        let position = self.position(id)?;
        debug!(position, "Removing step");
        Some(self.steps.remove(position))
    }

    /// Moves the step at `from` so that it lands before the step currently
    /// at `to`.
    ///
    /// `to` is a drop index over the sequence as it looks before the move, so
    /// `to == len()` appends to the tail. When the source precedes the drop
    /// index the target shifts down by one to account for the removal. The
    /// target is clamped to the valid range. An out-of-range `from` is a
    /// no-op. Returns whether the order changed.
    #[instrument(skip(self), fields(len = self.steps.len()))]
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.steps.len() {
            debug!("Source index out of range, ignoring reorder");
            return false;
        }

        let step = self.steps.remove(from);
        let target = if from < to { to - 1 } else { to };
        let target = target.min(self.steps.len());
        self.steps.insert(target, step);

        debug!(target, moved = target != from, "Reordered step");
        target != from
    }

    /// Renders the sequence as a story definition.
    pub fn to_yaml(&self, story_name: &str) -> String {
        project(story_name, &self.steps)
    }

    /// Runs the sequence validator over this sequence.
    pub fn validate(&self) -> Vec<Diagnostic> {
        validate(&self.steps)
    }

    /// Steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Mutable access to the steps, for in-place display name updates.
    pub(crate) fn steps_mut(&mut self) -> &mut [Step] {
        &mut self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the step with the given id.
    pub fn position(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id() == id)
    }

    /// Ids in order.
    pub fn ids(&self) -> Vec<StepId> {
        self.steps.iter().map(|step| step.id().clone()).collect()
    }

    /// `(kind, reference)` pairs in order.
    pub fn references(&self) -> Vec<(StepKind, &str)> {
        self.steps
            .iter()
            .map(|step| (*step.kind(), step.reference_id().as_str()))
            .collect()
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<Vec<Step>> for StepSequence {
    fn from(steps: Vec<Step>) -> Self {
        Self::from_steps(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(refs: &[&str]) -> StepSequence {
        let mut seq = StepSequence::new();
        for reference in refs {
            seq.append(StepKind::Action, *reference);
        }
        seq
    }

    fn order(seq: &StepSequence) -> Vec<&str> {
        seq.iter().map(|s| s.reference_id().as_str()).collect()
    }

    #[test]
    fn append_assigns_unique_ids() {
        let mut seq = StepSequence::new();
        let first = seq.append(StepKind::Intent, "greet").id().clone();
        let second = seq.append(StepKind::Intent, "greet").id().clone();
        assert_ne!(first, second);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut seq = sequence(&["a", "b"]);
        assert!(seq.remove_by_id(&StepId::from("missing")).is_none());
        assert_eq!(order(&seq), vec!["a", "b"]);
    }

    #[test]
    fn remove_by_id_removes_only_that_step() {
        let mut seq = sequence(&["a", "b", "a"]);
        let id = seq.get(2).unwrap().id().clone();
        let removed = seq.remove_by_id(&id).unwrap();
        assert_eq!(removed.id(), &id);
        assert_eq!(order(&seq), vec!["a", "b"]);
    }

    #[test]
    fn reorder_forward_drops_before_target() {
        let mut seq = sequence(&["a", "b", "c", "d"]);
        assert!(seq.reorder(0, 3));
        assert_eq!(order(&seq), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn reorder_backward() {
        let mut seq = sequence(&["a", "b", "c", "d"]);
        assert!(seq.reorder(3, 1));
        assert_eq!(order(&seq), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn reorder_past_end_appends() {
        let mut seq = sequence(&["a", "b", "c"]);
        assert!(seq.reorder(0, 3));
        assert_eq!(order(&seq), vec!["b", "c", "a"]);

        let mut seq = sequence(&["a", "b", "c"]);
        assert!(seq.reorder(1, 99));
        assert_eq!(order(&seq), vec!["a", "c", "b"]);
    }

    #[test]
    fn reorder_onto_own_slot_is_noop() {
        for i in 0..3 {
            let mut seq = sequence(&["a", "b", "c"]);
            let ids = seq.ids();
            assert!(!seq.reorder(i, i));
            assert_eq!(seq.ids(), ids);
            assert!(!seq.reorder(i, i + 1));
            assert_eq!(seq.ids(), ids);
        }
    }

    #[test]
    fn reorder_out_of_range_source_is_noop() {
        let mut seq = sequence(&["a", "b"]);
        assert!(!seq.reorder(5, 0));
        assert_eq!(order(&seq), vec!["a", "b"]);
    }
}
