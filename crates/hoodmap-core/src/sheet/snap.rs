//! Snap resolution: where a released sheet should settle.

use super::ViewState;

/// A resting position of the sheet.
///
/// `value` is the downward offset in pixels from the fully open position,
/// so a larger value is more closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPoint {
    pub state: ViewState,
    pub value: f64,
}

impl SnapPoint {
    pub const fn new(state: ViewState, value: f64) -> Self {
        Self { state, value }
    }
}

/// Outcome of resolving a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapResolution {
    Settle(ViewState),
    Dismiss,
}

/// The point closest to `offset`. Ties go to the earlier point.
pub fn nearest_point(offset: f64, points: &[SnapPoint]) -> Option<&SnapPoint> {
    let mut best: Option<(&SnapPoint, f64)> = None;
    for point in points {
        let distance = (offset - point.value).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((point, distance)),
        }
    }
    best.map(|(p, _)| p)
}

/// Nearest-distance resolution for continuous sheets.
///
/// Returns [`SnapResolution::Dismiss`] when `offset` lies more than
/// `dismiss_margin` below the most closed point. `None` for an empty set.
pub fn resolve_nearest(
    offset: f64,
    points: &[SnapPoint],
    dismiss_margin: Option<f64>,
) -> Option<SnapResolution> {
    if points.is_empty() {
        return None;
    }
    let most_closed = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);

    if let Some(margin) = dismiss_margin
        && offset > most_closed + margin
    {
        return Some(SnapResolution::Dismiss);
    }

    nearest_point(offset, points).map(|p| SnapResolution::Settle(p.state))
}

/// Threshold-crossing resolution for compact/expanded sheets.
///
/// `delta` is positive when dragged down. `dismiss` is the downward
/// distance from Compact that closes the sheet, if it may be dismissed.
pub fn resolve_directional(
    from: ViewState,
    delta: f64,
    toggle: f64,
    dismiss: Option<f64>,
) -> SnapResolution {
    match from {
        ViewState::Expanded if delta >= toggle => SnapResolution::Settle(ViewState::Compact),
        ViewState::Compact | ViewState::Half => {
            if delta <= -toggle {
                SnapResolution::Settle(ViewState::Expanded)
            } else if dismiss.is_some_and(|d| delta >= d) {
                SnapResolution::Dismiss
            } else {
                SnapResolution::Settle(from)
            }
        }
        _ => SnapResolution::Settle(from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_points() -> Vec<SnapPoint> {
        vec![
            SnapPoint::new(ViewState::Expanded, 0.0),
            SnapPoint::new(ViewState::Half, 300.0),
            SnapPoint::new(ViewState::Compact, 520.0),
        ]
    }

    #[test]
    fn test_nearest_picks_minimum_distance() {
        let points = three_points();
        assert_eq!(
            resolve_nearest(120.0, &points, None),
            Some(SnapResolution::Settle(ViewState::Expanded))
        );
        assert_eq!(
            resolve_nearest(380.0, &points, None),
            Some(SnapResolution::Settle(ViewState::Half))
        );
        assert_eq!(
            resolve_nearest(450.0, &points, None),
            Some(SnapResolution::Settle(ViewState::Compact))
        );
    }

    #[test]
    fn test_tie_goes_to_earlier_point() {
        let points = three_points();
        assert_eq!(nearest_point(150.0, &points).unwrap().state, ViewState::Expanded);
        assert_eq!(nearest_point(410.0, &points).unwrap().state, ViewState::Half);

        let reversed: Vec<_> = points.iter().rev().copied().collect();
        assert_eq!(nearest_point(410.0, &reversed).unwrap().state, ViewState::Compact);
    }

    #[test]
    fn test_dismiss_below_most_closed() {
        let points = three_points();
        assert_eq!(
            resolve_nearest(600.0, &points, Some(60.0)),
            Some(SnapResolution::Dismiss)
        );
        assert_eq!(
            resolve_nearest(580.0, &points, Some(60.0)),
            Some(SnapResolution::Settle(ViewState::Compact))
        );
        assert_eq!(
            resolve_nearest(5000.0, &points, None),
            Some(SnapResolution::Settle(ViewState::Compact))
        );
    }

    #[test]
    fn test_empty_points() {
        assert_eq!(resolve_nearest(10.0, &[], Some(10.0)), None);
        assert_eq!(resolve_nearest(-5.0, &[], Some(0.0)), None);
        assert_eq!(resolve_nearest(10.0, &[], None), None);
    }

    #[test]
    fn test_directional_compact() {
        use ViewState::*;
        assert_eq!(resolve_directional(Compact, -30.0, 24.0, Some(84.0)), SnapResolution::Settle(Expanded));
        assert_eq!(resolve_directional(Compact, -20.0, 24.0, Some(84.0)), SnapResolution::Settle(Compact));
        assert_eq!(resolve_directional(Compact, 60.0, 24.0, Some(84.0)), SnapResolution::Settle(Compact));
        assert_eq!(resolve_directional(Compact, 90.0, 24.0, Some(84.0)), SnapResolution::Dismiss);
        assert_eq!(resolve_directional(Compact, 90.0, 24.0, None), SnapResolution::Settle(Compact));
    }

    #[test]
    fn test_directional_expanded_never_dismisses() {
        use ViewState::*;
        assert_eq!(resolve_directional(Expanded, 30.0, 24.0, Some(84.0)), SnapResolution::Settle(Compact));
        assert_eq!(resolve_directional(Expanded, 400.0, 24.0, Some(84.0)), SnapResolution::Settle(Compact));
        assert_eq!(resolve_directional(Expanded, 10.0, 24.0, Some(84.0)), SnapResolution::Settle(Expanded));
        assert_eq!(resolve_directional(Expanded, -200.0, 24.0, Some(84.0)), SnapResolution::Settle(Expanded));
    }

    #[test]
    fn test_directional_touch_threshold() {
        use ViewState::*;
        assert_eq!(resolve_directional(Compact, -60.0, 80.0, None), SnapResolution::Settle(Compact));
        assert_eq!(resolve_directional(Compact, -80.0, 80.0, None), SnapResolution::Settle(Expanded));
    }
}
