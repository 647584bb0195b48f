//! End-to-end gesture scenarios for the sheet controller.

use hoodmap_core::sheet::{
    CloseNotice, HistorySync, MemoryHistory, NavigationStack, PointerSample, Projection, SheetConfig,
    SheetController, SheetUpdate, TransitionCause, ViewState,
};

const COMPACT: f64 = 420.0;

fn binary_sheet(key: &str, nav: &MemoryHistory) -> SheetController<MemoryHistory> {
    SheetController::new(
        SheetConfig::binary(key, COMPACT).closed_offset(900.0),
        nav.clone(),
    )
}

/// Press at `from_y`, move in `steps` equal increments by `dy`, release.
fn drag(
    sheet: &mut SheetController<MemoryHistory>,
    start: PointerSample,
    dy: f64,
    steps: u32,
) -> SheetUpdate {
    sheet.pointer_down(start).unwrap();
    for i in 1..=steps {
        let mut sample = start;
        sample.client_y = start.client_y + dy * i as f64 / steps as f64;
        sheet.pointer_move(sample).unwrap();
    }
    sheet.pointer_up(start.pointer_id)
}

#[test]
fn scenario_a_mouse_drag_up_expands_and_pushes_history() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("a", &nav);
    sheet.open();
    assert_eq!(sheet.state(), ViewState::Compact);

    let update = drag(&mut sheet, PointerSample::mouse(600.0, 1), -100.0, 5);

    let transition = update.transition.unwrap();
    assert_eq!(transition.to, ViewState::Expanded);
    assert_eq!(transition.cause, TransitionCause::Drag);
    assert_eq!(transition.history, Some(HistorySync::Pushed));
    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.marker_count("a"), 1);
}

#[test]
fn scenario_b_short_drag_keeps_expanded_and_clears_manual_offset() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("b", &nav);
    sheet.open();
    sheet.set_view_state(ViewState::Expanded);

    sheet.pointer_down(PointerSample::mouse(100.0, 1)).unwrap();
    sheet.pointer_move(PointerSample::mouse(110.0, 1)).unwrap();
    assert_eq!(sheet.projection(), Projection::Dragging { offset: 10.0 });

    let update = sheet.pointer_up(1);
    assert!(update.is_noop());
    assert_eq!(sheet.state(), ViewState::Expanded);
    assert_eq!(
        sheet.projection(),
        Projection::Resting {
            state: ViewState::Expanded,
            offset: 0.0
        }
    );
    assert_eq!(nav.marker_count("b"), 1);
}

#[test]
fn scenario_c_dismiss_from_compact_notifies_once() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("c", &nav);
    sheet.open();

    let mut notices = 0;
    let mut count = |u: &SheetUpdate| {
        if u.close.is_some() {
            notices += 1;
        }
    };

    let update = drag(&mut sheet, PointerSample::mouse(500.0, 1), 90.0, 3);
    assert_eq!(update.new_state(), Some(ViewState::Closed));
    assert_eq!(update.close, Some(CloseNotice::Immediate));
    count(&update);

    // Duplicate release, host close and another close-all must not notify again.
    count(&sheet.pointer_up(1));
    count(&sheet.close());
    count(&sheet.close_all());

    assert_eq!(notices, 1);
    assert_eq!(sheet.state(), ViewState::Closed);
    assert_eq!(nav.depth(), 1);
}

#[test]
fn scenario_c_touch_dismiss() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("c2", &nav);
    sheet.open();
    let update = drag(&mut sheet, PointerSample::touch(4, 500.0), 90.0, 3);
    assert_eq!(update.new_state(), Some(ViewState::Closed));
}

#[test]
fn scenario_d_three_point_settles_on_peek() {
    let config = SheetConfig::three_point("place", 300.0, 560.0).closed_offset(900.0);
    let mut sheet = SheetController::new(config, MemoryHistory::new());
    sheet.open();
    assert_eq!(sheet.state(), ViewState::Half);

    // 300 + 210 = 510: nearer peek (560) than half (300).
    let update = drag(&mut sheet, PointerSample::touch(1, 200.0), 210.0, 4);

    assert_eq!(update.new_state(), Some(ViewState::Compact));
    assert_eq!(
        sheet.projection(),
        Projection::Resting {
            state: ViewState::Compact,
            offset: 560.0
        }
    );
}

#[test]
fn releases_without_movement_are_always_taps() {
    for jitter in [0.0, 1.5, -3.0, 4.0, -4.0] {
        let nav = MemoryHistory::new();
        let mut sheet = binary_sheet("tap", &nav);
        sheet.open();
        let update = drag(&mut sheet, PointerSample::touch(1, 400.0), jitter, 2);
        let transition = update.transition.unwrap();
        assert_eq!(transition.cause, TransitionCause::Tap, "jitter {jitter}");
        assert_eq!(transition.to, ViewState::Expanded);
    }
}

#[test]
fn thresholds_depend_on_pointer_kind() {
    for (distance, mouse_expands, touch_expands) in [
        (20.0, false, false),
        (24.0, true, false),
        (60.0, true, false),
        (79.0, true, false),
        (80.0, true, true),
        (150.0, true, true),
    ] {
        for (start, expected) in [
            (PointerSample::mouse(500.0, 1), mouse_expands),
            (PointerSample::touch(2, 500.0), touch_expands),
        ] {
            let nav = MemoryHistory::new();
            let mut sheet = binary_sheet("k", &nav);
            sheet.open();
            drag(&mut sheet, start, -distance, 1);
            assert_eq!(
                sheet.state() == ViewState::Expanded,
                expected,
                "{:?} drag of {distance}",
                start.kind
            );
        }
    }
}

#[test]
fn one_marker_exactly_while_expanded() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("m", &nav);

    let check = |sheet: &SheetController<MemoryHistory>| {
        let expected = usize::from(sheet.state() == ViewState::Expanded);
        assert_eq!(nav.marker_count("m"), expected, "state {:?}", sheet.state());
    };

    for _ in 0..3 {
        sheet.open();
        check(&sheet);
        sheet.click();
        check(&sheet);
        drag(&mut sheet, PointerSample::mouse(100.0, 1), 200.0, 2);
        check(&sheet);
        drag(&mut sheet, PointerSample::touch(1, 500.0), -120.0, 2);
        check(&sheet);
        sheet.wheel(-40.0, true);
        check(&sheet);
        sheet.wheel(40.0, true);
        check(&sheet);
        sheet.close_all();
        check(&sheet);
        assert_eq!(nav.depth(), 1);
    }
}

#[test]
fn popstate_collapses_without_touching_history() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("p", &nav);
    sheet.open();
    sheet.click();
    assert_eq!(nav.depth(), 2);

    let current = nav.user_back();
    let depth = nav.depth();
    let update = sheet.popstate(current.as_deref());

    let transition = update.transition.unwrap();
    assert_eq!(transition.to, ViewState::Compact);
    assert_eq!(transition.cause, TransitionCause::PopState);
    assert_eq!(transition.history, None);
    assert_eq!(nav.depth(), depth);

    // A repeated event is ignored.
    assert!(sheet.popstate(current.as_deref()).is_noop());
}

#[test]
fn in_app_collapse_produces_popstate_that_is_ignored() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("q", &nav);
    sheet.open();
    sheet.click();
    sheet.click();
    assert_eq!(sheet.state(), ViewState::Compact);
    assert_eq!(nav.take_pending_pops(), 1);

    assert!(sheet.popstate(nav.current_marker().as_deref()).is_noop());
    assert_eq!(sheet.state(), ViewState::Compact);
}

#[test]
fn sheets_do_not_react_to_each_others_markers() {
    let nav = MemoryHistory::new();
    let mut profile = binary_sheet("profile", &nav);
    let mut groups = binary_sheet("groups", &nav);
    profile.open();
    profile.click();
    groups.open();
    groups.click();
    assert_eq!(nav.depth(), 3);

    let current = nav.user_back();
    assert!(profile.popstate(current.as_deref()).is_noop());
    assert_eq!(groups.popstate(current.as_deref()).new_state(), Some(ViewState::Compact));
    assert_eq!(profile.state(), ViewState::Expanded);

    let current = nav.user_back();
    assert_eq!(profile.popstate(current.as_deref()).new_state(), Some(ViewState::Compact));
}

#[test]
fn scenario_second_finger_lift_does_not_end_drag() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("second-finger", &nav);
    sheet.open();

    sheet.pointer_down(PointerSample::touch(1, 600.0)).unwrap();
    sheet.pointer_move(PointerSample::touch(1, 560.0)).unwrap();
    assert!(sheet.pointer_down(PointerSample::touch(2, 300.0)).is_err());

    assert!(sheet.pointer_up(2).is_noop());
    assert!(!sheet.pointer_cancel(2));
    assert!(sheet.is_dragging());
    assert_eq!(sheet.projection(), Projection::Dragging { offset: COMPACT - 40.0 });

    sheet.pointer_move(PointerSample::touch(1, 500.0)).unwrap();
    let update = sheet.pointer_up(1);
    assert_eq!(update.new_state(), Some(ViewState::Expanded));
    assert!(!sheet.is_dragging());
}

#[test]
fn scenario_right_click_on_handle_is_inert() {
    let nav = MemoryHistory::new();
    let mut sheet = binary_sheet("right-click", &nav);
    sheet.open();

    assert!(sheet.pointer_down(PointerSample::mouse(600.0, 2)).is_err());
    assert!(sheet.pointer_up(1).is_noop());
    assert_eq!(sheet.state(), ViewState::Compact);
    assert_eq!(nav.marker_count("right-click"), 0);
    assert_eq!(nav.depth(), 1);
}
