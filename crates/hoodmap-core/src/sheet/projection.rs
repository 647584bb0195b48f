//! Maps sheet state and live drag offset to the panel's translation.

use super::config::SheetConfig;
use super::ViewState;

/// The one offset applied to the panel in a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// State-driven position; the host animates towards it.
    Resting { state: ViewState, offset: f64 },
    /// Follows the pointer without animation.
    Dragging { offset: f64 },
}

impl Projection {
    pub fn resting(config: &SheetConfig, state: ViewState) -> Self {
        let offset = config
            .offset_of(state)
            .unwrap_or_else(|| config.offset_of(config.open_state).unwrap_or(0.0));
        Self::Resting { state, offset }
    }

    pub fn offset(&self) -> f64 {
        match *self {
            Self::Resting { offset, .. } | Self::Dragging { offset } => offset,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// CSS transform value.
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset().round())
    }
}

/// Offset while dragging from `from`, clamped to the sheet's travel.
///
/// An expanded sheet can only be pulled down; anything else may move up to
/// the fully open position and down past the last snap point by the
/// dismiss margin.
pub fn drag_offset(config: &SheetConfig, from: ViewState, origin_value: f64, delta: f64) -> f64 {
    let min = if from == ViewState::Expanded {
        origin_value
    } else {
        config.top_offset()
    };
    let max = config.bottom_offset() + config.dismiss_margin().unwrap_or(0.0);
    (origin_value + delta).clamp(min, max.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_only_moves_down() {
        let config = SheetConfig::binary("s", 400.0);
        assert_eq!(drag_offset(&config, ViewState::Expanded, 0.0, -80.0), 0.0);
        assert_eq!(drag_offset(&config, ViewState::Expanded, 0.0, 50.0), 50.0);
    }

    #[test]
    fn test_compact_moves_both_ways_within_travel() {
        let config = SheetConfig::binary("s", 400.0);
        assert_eq!(drag_offset(&config, ViewState::Compact, 400.0, -100.0), 300.0);
        assert_eq!(drag_offset(&config, ViewState::Compact, 400.0, -900.0), 0.0);
        assert_eq!(drag_offset(&config, ViewState::Compact, 400.0, 500.0), 484.0);
    }

    #[test]
    fn test_not_dismissible_stops_at_bottom() {
        let config = SheetConfig::binary("s", 400.0).dismissible(false);
        assert_eq!(drag_offset(&config, ViewState::Compact, 400.0, 60.0), 400.0);
    }

    #[test]
    fn test_resting_uses_state_offset() {
        let config = SheetConfig::three_point("p", 300.0, 520.0);
        let p = Projection::resting(&config, ViewState::Half);
        assert_eq!(p.offset(), 300.0);
        assert!(!p.is_dragging());
        assert_eq!(p.transform(), "translateY(300px)");
    }
}
