//! Drag-and-drop gesture tracking for step reordering.

use crate::StepSequence;
use tracing::{debug, instrument};

/// Tracks one drag gesture over a step list.
///
/// Holds the index being dragged and the drop zone currently hovered. The
/// sequence is only touched on a successful drop.
///
/// # Examples
///
/// ```
/// use palaver_core::StepKind;
/// use palaver_story::{DragReorder, StepSequence};
///
/// let mut seq = StepSequence::new();
/// seq.append(StepKind::Intent, "greet");
/// seq.append(StepKind::Action, "action_a");
/// seq.append(StepKind::Action, "action_b");
///
/// let mut drag = DragReorder::default();
/// drag.start(1);
/// drag.hover(3);
/// assert!(drag.drop_on_hint(&mut seq));
/// assert_eq!(seq.get(2).unwrap().reference_id(), "action_a");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragReorder {
    dragged_index: Option<usize>,
    drop_zone_index: Option<usize>,
}

impl DragReorder {
    /// Begins dragging the step at `index`, replacing any gesture in flight.
    #[instrument(skip(self))]
    pub fn start(&mut self, index: usize) {
        self.dragged_index = Some(index);
        self.drop_zone_index = None;
    }

    /// Records the drop zone under the pointer. Ignored when not dragging.
    pub fn hover(&mut self, index: usize) {
        if self.dragged_index.is_some() {
            self.drop_zone_index = Some(index);
        }
    }

    /// Clears the drop zone hint, e.g. when the pointer leaves the list.
    pub fn leave(&mut self) {
        self.drop_zone_index = None;
    }

    /// Abandons the gesture without touching any sequence.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        debug!(dragged = ?self.dragged_index, "Drag cancelled");
        self.dragged_index = None;
        self.drop_zone_index = None;
    }

    /// Whether a gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.dragged_index.is_some()
    }

    /// Index being dragged, if any.
    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    /// Drop zone currently hovered, if any.
    pub fn drop_zone_index(&self) -> Option<usize> {
        self.drop_zone_index
    }

    /// Ends the gesture by dropping before `index` (`len()` for the tail).
    ///
    /// Dropping onto the dragged step's own slot, or with no gesture in
    /// flight, leaves the sequence alone. Returns whether the order changed.
    #[instrument(skip(self, sequence), fields(dragged = ?self.dragged_index, len = sequence.len()))]
    pub fn drop_on(&mut self, sequence: &mut StepSequence, index: usize) -> bool {
        let dragged = self.dragged_index.take();
        self.drop_zone_index = None;

        let Some(from) = dragged else {
            debug!("Drop without drag in flight");
            return false;
        };
        if from >= sequence.len() {
            debug!(from, "Dragged step no longer exists");
            return false;
        }
        if index == from || index == from + 1 {
            debug!(from, index, "Dropped onto own slot");
            return false;
        }

        sequence.reorder(from, index)
    }

    /// Ends the gesture at the hovered drop zone, cancelling if there is none.
    pub fn drop_on_hint(&mut self, sequence: &mut StepSequence) -> bool {
        match self.drop_zone_index {
            Some(index) => self.drop_on(sequence, index),
            None => {
                self.cancel();
                false
            }
        }
    }
}
