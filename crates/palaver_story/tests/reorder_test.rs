//! Step reordering through the sequence and drag gestures.

use palaver_core::StepKind;
use palaver_story::{DragReorder, StepSequence};

fn five() -> StepSequence {
    let mut seq = StepSequence::new();
    for (kind, reference) in [
        (StepKind::Intent, "greet"),
        (StepKind::Action, "a1"),
        (StepKind::Response, "r1"),
        (StepKind::Intent, "bye"),
        (StepKind::Response, "r2"),
    ] {
        seq.append(kind, reference);
    }
    seq
}

#[test]
fn reorder_to_same_or_next_index_keeps_order() {
    for i in 0..5 {
        let mut seq = five();
        let ids = seq.ids();
        seq.reorder(i, i);
        assert_eq!(seq.ids(), ids);
        seq.reorder(i, i + 1);
        assert_eq!(seq.ids(), ids);
    }
}

#[test]
fn reorder_preserves_ids_and_length() {
    let mut seq = five();
    let mut before = seq.ids();
    seq.reorder(4, 0);
    let mut after = seq.ids();
    assert_eq!(seq.len(), 5);
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn drag_cancel_changes_nothing() {
    for i in 0..5 {
        let mut seq = five();
        let before = seq.clone();
        let mut drag = DragReorder::default();
        drag.start(i);
        drag.hover(0);
        drag.hover(5);
        drag.cancel();
        assert!(!drag.drop_on_hint(&mut seq));
        assert_eq!(seq, before);
        assert_eq!(seq.ids(), before.ids());
    }
}

#[test]
fn drag_moves_step_before_drop_zone() {
    let mut seq = five();
    let mut drag = DragReorder::default();
    drag.start(4);
    drag.hover(3);
    assert!(drag.drop_on_hint(&mut seq));
    let order: Vec<_> = seq.iter().map(|s| s.reference_id().as_str()).collect();
    assert_eq!(order, vec!["greet", "a1", "r1", "r2", "bye"]);
    assert!(!drag.is_dragging());
}

#[test]
fn drag_to_tail() {
    let mut seq = five();
    let mut drag = DragReorder::default();
    let tail = seq.len();
    drag.start(0);
    assert!(drag.drop_on(&mut seq, tail));
    assert_eq!(seq.get(4).unwrap().reference_id(), "greet");
}
