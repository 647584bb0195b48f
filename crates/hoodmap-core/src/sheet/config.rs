//! Sheet configuration: layout, snap points and thresholds.

use super::pointer::PointerKind;
use super::snap::SnapPoint;
use super::ViewState;

/// Release thresholds in pixels.
///
/// Touch input is imprecise, so a touch drag must travel further than a
/// mouse drag before it toggles the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub mouse: f64,
    pub touch: f64,
    /// Downward travel past the most closed point that dismisses the sheet.
    /// Larger than both toggle thresholds.
    pub dismiss: f64,
    /// Minimum wheel delta that counts as an expand/collapse intent.
    pub wheel: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mouse: 24.0,
            touch: 80.0,
            dismiss: 84.0,
            wheel: 12.0,
        }
    }
}

impl Thresholds {
    pub fn toggle_for(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.mouse,
            PointerKind::Touch => self.touch,
        }
    }
}

/// How a release is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetLayout {
    /// Compact/expanded with directional thresholds.
    Binary,
    /// Peek/half/full resolved by nearest distance; dismiss is deferred
    /// until the closing animation ends.
    ThreePoint,
}

/// Parameters of one sheet instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    pub layout: SheetLayout,
    pub snap_points: Vec<SnapPoint>,
    pub thresholds: Thresholds,
    pub dismissible: bool,
    /// Distinguishes this sheet's history entries from other sheets'.
    pub history_key: String,
    /// Offset of the fully hidden sheet (usually the viewport height).
    pub closed_offset: f64,
    /// State entered by `open()`.
    pub open_state: ViewState,
}

impl SheetConfig {
    /// Compact/expanded sheet; `compact_offset` is how far the compact
    /// panel sits below its expanded position.
    pub fn binary(history_key: impl Into<String>, compact_offset: f64) -> Self {
        Self {
            layout: SheetLayout::Binary,
            snap_points: vec![
                SnapPoint::new(ViewState::Expanded, 0.0),
                SnapPoint::new(ViewState::Compact, compact_offset),
            ],
            thresholds: Thresholds::default(),
            dismissible: true,
            history_key: history_key.into(),
            closed_offset: compact_offset * 2.0,
            open_state: ViewState::Compact,
        }
    }

    /// Full/half/peek sheet. Opens at half height.
    pub fn three_point(history_key: impl Into<String>, half_offset: f64, peek_offset: f64) -> Self {
        Self {
            layout: SheetLayout::ThreePoint,
            snap_points: vec![
                SnapPoint::new(ViewState::Expanded, 0.0),
                SnapPoint::new(ViewState::Half, half_offset),
                SnapPoint::new(ViewState::Compact, peek_offset),
            ],
            thresholds: Thresholds::default(),
            dismissible: true,
            history_key: history_key.into(),
            closed_offset: peek_offset * 2.0,
            open_state: ViewState::Half,
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn closed_offset(mut self, offset: f64) -> Self {
        self.closed_offset = offset;
        self
    }

    pub fn open_state(mut self, state: ViewState) -> Self {
        self.open_state = state;
        self
    }

    /// Resting offset of `state`, if the layout has it.
    pub fn offset_of(&self, state: ViewState) -> Option<f64> {
        if state == ViewState::Closed {
            return Some(self.closed_offset);
        }
        self.snap_points
            .iter()
            .find(|p| p.state == state)
            .map(|p| p.value)
    }

    /// Offset of the most open snap point.
    pub fn top_offset(&self) -> f64 {
        self.snap_points
            .iter()
            .map(|p| p.value)
            .fold(f64::INFINITY, f64::min)
            .min(0.0)
    }

    /// Offset of the most closed snap point.
    pub fn bottom_offset(&self) -> f64 {
        self.snap_points
            .iter()
            .map(|p| p.value)
            .fold(0.0, f64::max)
    }

    /// Where a tap on the handle goes from an expanded sheet.
    pub fn collapsed_state(&self) -> ViewState {
        match self.layout {
            SheetLayout::Binary => ViewState::Compact,
            SheetLayout::ThreePoint => ViewState::Half,
        }
    }

    pub fn dismiss_margin(&self) -> Option<f64> {
        self.dismissible.then_some(self.thresholds.dismiss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_offsets() {
        let config = SheetConfig::binary("profile", 420.0).closed_offset(800.0);
        assert_eq!(config.offset_of(ViewState::Expanded), Some(0.0));
        assert_eq!(config.offset_of(ViewState::Compact), Some(420.0));
        assert_eq!(config.offset_of(ViewState::Half), None);
        assert_eq!(config.offset_of(ViewState::Closed), Some(800.0));
        assert_eq!(config.bottom_offset(), 420.0);
        assert_eq!(config.top_offset(), 0.0);
    }

    #[test]
    fn test_three_point_defaults() {
        let config = SheetConfig::three_point("place", 320.0, 560.0);
        assert_eq!(config.open_state, ViewState::Half);
        assert_eq!(config.collapsed_state(), ViewState::Half);
        assert_eq!(config.bottom_offset(), 560.0);
    }

    #[test]
    fn test_dismiss_margin_respects_flag() {
        let config = SheetConfig::binary("groups", 300.0);
        assert_eq!(config.dismiss_margin(), Some(84.0));
        assert_eq!(config.dismissible(false).dismiss_margin(), None);
    }

    #[test]
    fn test_toggle_by_kind() {
        let t = Thresholds::default();
        assert_eq!(t.toggle_for(PointerKind::Mouse), 24.0);
        assert_eq!(t.toggle_for(PointerKind::Touch), 80.0);
        assert!(t.dismiss > t.touch && t.dismiss > t.mouse);
    }
}
