use crate::core::selection::{
    EXIT_OFFSET_X, EXIT_Y, Edge, SelectionController, SelectionEvent, SelectionRange,
    SelectionState,
};

fn confirmed(start: f64, end: f64) -> SelectionController {
    let mut selection = SelectionController::new();
    selection.pointer_down(start);
    selection.pointer_move(end);
    selection.pointer_up();
    selection
}

#[test]
fn test_drag_creates_selection() {
    let mut selection = SelectionController::new();
    selection.pointer_down(0.2);
    assert_eq!(
        selection.state(),
        SelectionState::Drafting {
            anchor: 0.2,
            start: 0.2,
            end: 0.2
        }
    );
    selection.pointer_move(0.4);
    let event = selection.pointer_up();
    assert_eq!(
        event,
        Some(SelectionEvent::Confirmed(SelectionRange {
            start: 0.2,
            end: 0.4
        }))
    );
    assert!(selection.is_present());
}

#[test]
fn test_drag_crossing_anchor() {
    let mut selection = SelectionController::new();
    selection.pointer_down(0.5);
    selection.pointer_move(0.2);
    assert_eq!(selection.range(), Some((0.2, 0.5)));
    // Coming back right of the anchor keeps the anchor as start
    selection.pointer_move(0.1);
    selection.pointer_move(0.7);
    assert_eq!(selection.range(), Some((0.5, 0.7)));
    selection.pointer_move(0.2);
    selection.pointer_up();
    assert_eq!(
        selection.state(),
        SelectionState::Confirmed {
            start: 0.2,
            end: 0.5
        }
    );
}

#[test]
fn test_click_without_drag_is_idle() {
    let mut selection = SelectionController::new();
    selection.pointer_down(0.3);
    assert_eq!(selection.pointer_up(), Some(SelectionEvent::Dismissed));
    assert_eq!(selection.state(), SelectionState::Idle);
    assert!(selection.overlay().is_none());
}

#[test]
fn test_drafting_overlay_hides_handles() {
    let mut selection = SelectionController::new();
    selection.pointer_down(0.3);
    selection.pointer_move(0.35);
    let overlay = selection.overlay().unwrap();
    assert!(!overlay.handles_visible);
    assert_eq!(overlay.exit_pos, (0.35 + EXIT_OFFSET_X, EXIT_Y));
}

#[test]
fn test_confirmed_overlay() {
    let selection = confirmed(0.6, 0.3);
    let overlay = selection.overlay().unwrap();
    assert!(overlay.handles_visible);
    assert_eq!(overlay.range, SelectionRange { start: 0.3, end: 0.6 });
    assert_eq!(overlay.start_handle, 0.3);
    assert_eq!(overlay.end_handle, 0.6);
    assert_eq!(overlay.exit_pos, (0.6 + EXIT_OFFSET_X, EXIT_Y));
    assert!(overlay.exit_contains(0.6 + EXIT_OFFSET_X + 0.01, EXIT_Y + 0.01));
    assert!(!overlay.exit_contains(0.5, 0.5));
}

#[test]
fn test_edge_tolerance() {
    let mut selection = confirmed(0.5, 0.8);
    selection.pointer_down(0.5 + 0.021);
    assert_eq!(
        selection.state(),
        SelectionState::Confirmed {
            start: 0.5,
            end: 0.8
        }
    );
    selection.pointer_up();

    let mut selection = confirmed(0.5, 0.8);
    selection.pointer_down(0.5 + 0.019);
    assert_eq!(
        selection.state(),
        SelectionState::Resizing {
            start: 0.5,
            end: 0.8,
            edge: Edge::Start
        }
    );
}

#[test]
fn test_nearer_edge_is_grabbed() {
    let mut selection = confirmed(0.5, 0.52);
    selection.pointer_down(0.515);
    assert!(matches!(
        selection.state(),
        SelectionState::Resizing { edge: Edge::End, .. }
    ));
}

#[test]
fn test_resize_end_and_sort() {
    let mut selection = confirmed(0.4, 0.6);
    selection.pointer_down(0.6);
    selection.pointer_move(0.2);
    // Not sorted while dragging
    assert_eq!(selection.range(), Some((0.4, 0.2)));
    let event = selection.pointer_up();
    assert_eq!(
        event,
        Some(SelectionEvent::Confirmed(SelectionRange {
            start: 0.2,
            end: 0.4
        }))
    );
    assert_eq!(
        selection.state(),
        SelectionState::Confirmed {
            start: 0.2,
            end: 0.4
        }
    );
}

#[test]
fn test_drag_elsewhere_is_inert() {
    let mut selection = confirmed(0.4, 0.6);
    selection.pointer_down(0.1);
    selection.pointer_move(0.9);
    assert_eq!(selection.pointer_up(), None);
    assert_eq!(
        selection.state(),
        SelectionState::Confirmed {
            start: 0.4,
            end: 0.6
        }
    );
}

#[test]
fn test_click_elsewhere_dismisses() {
    let mut selection = confirmed(0.4, 0.6);
    selection.pointer_down(0.1);
    assert_eq!(selection.pointer_up(), Some(SelectionEvent::Dismissed));
    assert_eq!(selection.state(), SelectionState::Idle);
}

#[test]
fn test_exit_from_any_state() {
    let mut selection = SelectionController::new();
    selection.pointer_down(0.3);
    selection.pointer_move(0.4);
    selection.exit();
    assert_eq!(selection.state(), SelectionState::Idle);

    let mut selection = confirmed(0.4, 0.6);
    selection.pointer_down(0.4);
    selection.exit();
    assert_eq!(selection.state(), SelectionState::Idle);
    assert!(!selection.is_present());
    // Release after exit does nothing
    assert_eq!(selection.pointer_up(), None);
}

#[test]
fn test_move_without_selection_is_noop() {
    let mut selection = SelectionController::new();
    selection.pointer_move(0.5);
    assert_eq!(selection.state(), SelectionState::Idle);
    assert_eq!(selection.pointer_up(), None);
}

#[test]
fn test_edge_at() {
    let mut selection = SelectionController::new();
    assert_eq!(selection.edge_at(0.5), None);
    selection.pointer_down(0.3);
    selection.pointer_move(0.6);
    // Still drafting
    assert_eq!(selection.edge_at(0.6), None);
    selection.pointer_up();
    assert_eq!(selection.edge_at(0.61), Some(Edge::End));
    assert_eq!(selection.edge_at(0.29), Some(Edge::Start));
    assert_eq!(selection.edge_at(0.45), None);
}
