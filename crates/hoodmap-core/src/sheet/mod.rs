//! Draggable bottom-sheet controller.
//!
//! One state machine drives every sheet in the app. A [`SheetConfig`]
//! picks the layout (compact/expanded or peek/half/full), the snap offsets,
//! the pointer thresholds and the history key; the controller turns
//! pointer, tap, wheel, popstate and host requests into state transitions.
//!
//! The controller never fails. Ignored input is reported through
//! [`PointerIgnored`], and navigation problems are reported in the
//! transition's [`HistorySync`] so the host can log them.
//!
//! ```text
//!            open()                 drag up / tap
//!  Closed ───────────▶ Compact ───────────────────▶ Expanded
//!    ▲                  │   ◀───────────────────     │
//!    │   dismiss drag   │   drag down / tap / back   │
//!    └──────────────────┘                            │
//!    ▲              close_all()                      │
//!    └───────────────────────────────────────────────┘
//! ```

mod config;
mod history;
mod pointer;
mod projection;
mod snap;

pub use config::{SheetConfig, SheetLayout, Thresholds};
pub use history::{HistoryBridge, HistorySync, MemoryHistory, NavigationStack};
pub use pointer::{
    DragRelease, DragSession, NOISE_THRESHOLD_PX, PointerIgnored, PointerKind, PointerSample,
    PointerTracker,
};
pub use projection::{Projection, drag_offset};
pub use snap::{SnapPoint, SnapResolution, nearest_point, resolve_directional, resolve_nearest};

/// Where a sheet currently rests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Not rendered, or fully off screen.
    #[default]
    Closed,
    /// Minimal preview ("peek" on three-point sheets).
    Compact,
    /// Half height, three-point sheets only.
    Half,
    /// Full content, scrollable.
    Expanded,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Compact => "compact",
            Self::Half => "half",
            Self::Expanded => "expanded",
        }
    }

    pub fn is_open(&self) -> bool {
        *self != Self::Closed
    }
}

/// What triggered a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCause {
    Open,
    Drag,
    Tap,
    Wheel,
    /// The host drove the state (e.g. a tab switch).
    External,
    /// The host set `open = false`.
    Close,
    /// A close-all request from inside the sheet.
    CloseAll,
    /// Back navigation consumed the sheet's history entry.
    PopState,
}

/// A completed state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewState,
    pub to: ViewState,
    pub cause: TransitionCause,
    /// Present when the transition touched the navigation stack.
    pub history: Option<HistorySync>,
}

/// When the host should fire its `on_close` callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseNotice {
    Immediate,
    /// After the panel's closing transition has finished.
    AfterTransition,
}

/// Result of feeding one input to the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SheetUpdate {
    pub transition: Option<Transition>,
    pub close: Option<CloseNotice>,
}

impl SheetUpdate {
    fn none() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.transition.is_none() && self.close.is_none()
    }

    pub fn new_state(&self) -> Option<ViewState> {
        self.transition.as_ref().map(|t| t.to)
    }
}

/// State machine for one sheet instance.
#[derive(Debug)]
pub struct SheetController<N> {
    config: SheetConfig,
    state: ViewState,
    tracker: PointerTracker,
    bridge: HistoryBridge<N>,
    projection: Projection,
    suppress_click: bool,
}

impl<N: NavigationStack> SheetController<N> {
    pub fn new(config: SheetConfig, nav: N) -> Self {
        let bridge = HistoryBridge::new(config.history_key.clone(), nav);
        let projection = Projection::resting(&config, ViewState::Closed);
        Self {
            config,
            state: ViewState::Closed,
            tracker: PointerTracker::new(),
            bridge,
            projection,
            suppress_click: false,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn history(&self) -> &HistoryBridge<N> {
        &self.bridge
    }

    /// Replace the snap geometry after a viewport change.
    pub fn set_geometry(&mut self, snap_points: Vec<SnapPoint>, closed_offset: f64) {
        self.config.snap_points = snap_points;
        self.config.closed_offset = closed_offset;
        if !self.projection.is_dragging() {
            self.projection = Projection::resting(&self.config, self.state);
        }
    }

    /// Show the sheet in its configured opening state.
    pub fn open(&mut self) -> SheetUpdate {
        if self.state.is_open() {
            return SheetUpdate::none();
        }
        self.tracker.reset();
        self.suppress_click = false;
        self.update(self.config.open_state, TransitionCause::Open, None)
    }

    /// The host closed the sheet. No close notice, since the host
    /// initiated it.
    pub fn close(&mut self) -> SheetUpdate {
        self.update(ViewState::Closed, TransitionCause::Close, None)
    }

    /// Close from inside the sheet (close button, "close all").
    pub fn close_all(&mut self) -> SheetUpdate {
        self.update(
            ViewState::Closed,
            TransitionCause::CloseAll,
            Some(CloseNotice::Immediate),
        )
    }

    /// Drive the state from outside, e.g. a tab switch forcing Expanded.
    pub fn set_view_state(&mut self, target: ViewState) -> SheetUpdate {
        match target {
            ViewState::Closed => self.close(),
            _ if !self.state.is_open() => SheetUpdate::none(),
            _ if self.config.offset_of(target).is_none() => SheetUpdate::none(),
            _ => self.update(target, TransitionCause::External, None),
        }
    }

    pub fn pointer_down(&mut self, sample: PointerSample) -> Result<(), PointerIgnored> {
        if !self.state.is_open() {
            return Err(PointerIgnored::NoActiveSession);
        }
        self.suppress_click = false;
        self.tracker.begin(sample, self.projection.offset())
    }

    /// Returns the projected offset while the drag is live.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Result<f64, PointerIgnored> {
        let delta = self.tracker.update(sample)?;
        let Some(session) = self.tracker.session() else {
            return Err(PointerIgnored::NoActiveSession);
        };
        if session.has_moved {
            let offset = drag_offset(&self.config, self.state, session.origin_value, delta);
            self.projection = Projection::Dragging { offset };
        }
        Ok(self.projection.offset())
    }

    /// Resolve the release of `pointer_id`. Releases that never moved are
    /// taps. Lifting a pointer that does not own the drag changes nothing.
    pub fn pointer_up(&mut self, pointer_id: i32) -> SheetUpdate {
        let Some(release) = self.tracker.end(pointer_id) else {
            return SheetUpdate::none();
        };
        self.suppress_click = true;

        if release.is_tap() {
            return self.toggle(TransitionCause::Tap);
        }

        let thresholds = self.config.thresholds;
        let resolution = match self.config.layout {
            SheetLayout::Binary => Some(resolve_directional(
                self.state,
                release.delta,
                thresholds.toggle_for(release.kind),
                self.config.dismiss_margin(),
            )),
            SheetLayout::ThreePoint => resolve_nearest(
                release.origin_value + release.delta,
                &self.config.snap_points,
                self.config.dismiss_margin(),
            ),
        };

        match resolution {
            Some(SnapResolution::Settle(target)) => {
                self.update(target, TransitionCause::Drag, None)
            }
            Some(SnapResolution::Dismiss) => {
                let notice = match self.config.layout {
                    SheetLayout::Binary => CloseNotice::Immediate,
                    SheetLayout::ThreePoint => CloseNotice::AfterTransition,
                };
                self.update(ViewState::Closed, TransitionCause::Drag, Some(notice))
            }
            None => self.settle_in_place(),
        }
    }

    /// Abandon the drag owned by `pointer_id` and spring back. Returns
    /// whether a drag was abandoned.
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> bool {
        if self.tracker.cancel(pointer_id).is_none() {
            return false;
        }
        self.projection = Projection::resting(&self.config, self.state);
        true
    }

    /// Click on the handle. A click that follows a pointer release has
    /// already been handled by [`pointer_up`](Self::pointer_up).
    pub fn click(&mut self) -> SheetUpdate {
        if std::mem::take(&mut self.suppress_click) {
            return SheetUpdate::none();
        }
        self.toggle(TransitionCause::Tap)
    }

    /// Wheel over the sheet. Scrolling into the content expands a collapsed
    /// sheet; scrolling back up at the top of the content collapses it.
    pub fn wheel(&mut self, delta_y: f64, content_at_top: bool) -> SheetUpdate {
        if self.tracker.is_active() || delta_y.abs() < self.config.thresholds.wheel {
            return SheetUpdate::none();
        }
        match self.state {
            ViewState::Compact | ViewState::Half if delta_y > 0.0 => {
                self.update(ViewState::Expanded, TransitionCause::Wheel, None)
            }
            ViewState::Expanded if delta_y < 0.0 && content_at_top => {
                self.update(self.config.collapsed_state(), TransitionCause::Wheel, None)
            }
            _ => SheetUpdate::none(),
        }
    }

    /// Back/forward navigation happened. `current_marker` is the marker of
    /// the entry now current.
    pub fn popstate(&mut self, current_marker: Option<&str>) -> SheetUpdate {
        if self.state != ViewState::Expanded || !self.bridge.popped(current_marker) {
            return SheetUpdate::none();
        }
        self.update(self.config.collapsed_state(), TransitionCause::PopState, None)
    }

    fn toggle(&mut self, cause: TransitionCause) -> SheetUpdate {
        match self.state {
            ViewState::Closed => SheetUpdate::none(),
            ViewState::Expanded => self.update(self.config.collapsed_state(), cause, None),
            ViewState::Compact | ViewState::Half => {
                self.update(ViewState::Expanded, cause, None)
            }
        }
    }

    fn settle_in_place(&mut self) -> SheetUpdate {
        self.projection = Projection::resting(&self.config, self.state);
        SheetUpdate::none()
    }

    fn update(
        &mut self,
        to: ViewState,
        cause: TransitionCause,
        close: Option<CloseNotice>,
    ) -> SheetUpdate {
        let from = self.state;
        self.tracker.reset();
        if from == to {
            return self.settle_in_place();
        }

        let history = if from == ViewState::Expanded {
            (cause != TransitionCause::PopState).then(|| self.bridge.leave())
        } else if to == ViewState::Expanded {
            Some(self.bridge.enter())
        } else {
            None
        };

        self.state = to;
        self.projection = Projection::resting(&self.config, to);
        SheetUpdate {
            transition: Some(Transition {
                from,
                to,
                cause,
                history,
            }),
            close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> SheetController<MemoryHistory> {
        SheetController::new(SheetConfig::binary("test", 400.0), MemoryHistory::new())
    }

    fn drag(sheet: &mut SheetController<MemoryHistory>, sample: PointerSample, dy: f64) -> SheetUpdate {
        sheet.pointer_down(sample).unwrap();
        let mut moved = sample;
        moved.client_y += dy;
        sheet.pointer_move(moved).unwrap();
        sheet.pointer_up(sample.pointer_id)
    }

    #[test]
    fn test_open_goes_to_compact_once() {
        let mut sheet = binary();
        let update = sheet.open();
        assert_eq!(update.new_state(), Some(ViewState::Compact));
        assert_eq!(sheet.projection().offset(), 400.0);
        assert!(sheet.open().is_noop());
    }

    #[test]
    fn test_closed_sheet_ignores_pointer() {
        let mut sheet = binary();
        assert_eq!(
            sheet.pointer_down(PointerSample::mouse(10.0, 1)),
            Err(PointerIgnored::NoActiveSession)
        );
    }

    #[test]
    fn test_tap_toggles() {
        let mut sheet = binary();
        sheet.open();
        sheet.pointer_down(PointerSample::touch(1, 500.0)).unwrap();
        sheet.pointer_move(PointerSample::touch(1, 498.0)).unwrap();
        let update = sheet.pointer_up(1);
        let transition = update.transition.unwrap();
        assert_eq!(transition.cause, TransitionCause::Tap);
        assert_eq!(transition.to, ViewState::Expanded);
        assert_eq!(transition.history, Some(HistorySync::Pushed));
    }

    #[test]
    fn test_click_after_release_is_suppressed() {
        let mut sheet = binary();
        sheet.open();
        sheet.pointer_down(PointerSample::mouse(500.0, 1)).unwrap();
        sheet.pointer_up(1);
        assert_eq!(sheet.state(), ViewState::Expanded);
        assert!(sheet.click().is_noop());
        assert_eq!(sheet.state(), ViewState::Expanded);

        let update = sheet.click();
        assert_eq!(update.new_state(), Some(ViewState::Compact));
    }

    #[test]
    fn test_dragging_projection_only_after_movement() {
        let mut sheet = binary();
        sheet.open();
        sheet.pointer_down(PointerSample::mouse(500.0, 1)).unwrap();
        sheet.pointer_move(PointerSample::mouse(502.0, 1)).unwrap();
        assert!(!sheet.projection().is_dragging());
        assert_eq!(sheet.pointer_move(PointerSample::mouse(450.0, 1)), Ok(350.0));
        assert!(sheet.projection().is_dragging());
        assert!(sheet.pointer_cancel(1));
        assert!(!sheet.pointer_cancel(1));
        assert_eq!(
            sheet.projection(),
            Projection::Resting {
                state: ViewState::Compact,
                offset: 400.0
            }
        );
    }

    #[test]
    fn test_right_click_leaves_sheet_alone() {
        let nav = MemoryHistory::new();
        let mut sheet = SheetController::new(SheetConfig::binary("test", 400.0), nav.clone());
        sheet.open();
        assert_eq!(
            sheet.pointer_down(PointerSample::mouse(500.0, 2)),
            Err(PointerIgnored::SecondaryButton)
        );
        assert!(!sheet.is_dragging());
        assert!(sheet.pointer_up(1).is_noop());
        assert_eq!(sheet.state(), ViewState::Compact);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_touch_needs_longer_drag() {
        let mut sheet = binary();
        sheet.open();
        let update = drag(&mut sheet, PointerSample::touch(1, 500.0), -50.0);
        assert!(update.is_noop());
        assert_eq!(sheet.state(), ViewState::Compact);

        let update = drag(&mut sheet, PointerSample::mouse(500.0, 1), -50.0);
        assert_eq!(update.new_state(), Some(ViewState::Expanded));
    }

    #[test]
    fn test_close_all_from_expanded_pops_marker() {
        let nav = MemoryHistory::new();
        let mut sheet = SheetController::new(SheetConfig::binary("x", 400.0), nav.clone());
        sheet.open();
        sheet.click();
        assert_eq!(nav.marker_count("x"), 1);

        let update = sheet.close_all();
        assert_eq!(update.close, Some(CloseNotice::Immediate));
        assert_eq!(update.transition.unwrap().history, Some(HistorySync::Popped));
        assert_eq!(nav.marker_count("x"), 0);
        assert!(sheet.close_all().is_noop());
    }

    #[test]
    fn test_host_close_has_no_notice() {
        let mut sheet = binary();
        sheet.open();
        let update = sheet.close();
        assert_eq!(update.new_state(), Some(ViewState::Closed));
        assert_eq!(update.close, None);
    }

    #[test]
    fn test_external_drive() {
        let mut sheet = binary();
        assert!(sheet.set_view_state(ViewState::Expanded).is_noop());
        sheet.open();
        assert!(sheet.set_view_state(ViewState::Half).is_noop());
        let update = sheet.set_view_state(ViewState::Expanded);
        assert_eq!(update.transition.unwrap().cause, TransitionCause::External);
        assert_eq!(sheet.history().nav().marker_count("test"), 1);
    }

    #[test]
    fn test_wheel() {
        let mut sheet = binary();
        sheet.open();
        assert!(sheet.wheel(4.0, true).is_noop());
        assert_eq!(sheet.wheel(30.0, true).new_state(), Some(ViewState::Expanded));
        assert!(sheet.wheel(-30.0, false).is_noop());
        assert_eq!(sheet.wheel(-30.0, true).new_state(), Some(ViewState::Compact));
    }

    #[test]
    fn test_three_point_dismiss_is_deferred() {
        let config = SheetConfig::three_point("place", 300.0, 520.0);
        let mut sheet = SheetController::new(config, MemoryHistory::new());
        sheet.open();
        assert_eq!(sheet.state(), ViewState::Half);

        let update = drag(&mut sheet, PointerSample::touch(3, 400.0), 320.0);
        assert_eq!(update.new_state(), Some(ViewState::Closed));
        assert_eq!(update.close, Some(CloseNotice::AfterTransition));
    }

    #[test]
    fn test_three_point_tap_from_full_goes_half() {
        let config = SheetConfig::three_point("place", 300.0, 520.0);
        let mut sheet = SheetController::new(config, MemoryHistory::new());
        sheet.open();
        sheet.click();
        assert_eq!(sheet.state(), ViewState::Expanded);
        sheet.click();
        assert_eq!(sheet.state(), ViewState::Half);
    }

    #[test]
    fn test_geometry_change_moves_resting_offset() {
        let mut sheet = binary();
        sheet.open();
        sheet.set_geometry(
            vec![
                SnapPoint::new(ViewState::Expanded, 0.0),
                SnapPoint::new(ViewState::Compact, 250.0),
            ],
            700.0,
        );
        assert_eq!(sheet.projection().offset(), 250.0);
    }
}
