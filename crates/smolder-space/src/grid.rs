//! Shared helpers for the square-grid backends.

use crate::edge::EdgeBehavior;
use crate::error::LatticeError;
use smolder_core::Point;

/// Validate inclusive bounds at construction time.
pub(crate) fn check_bounds(bounds: Point) -> Result<(), LatticeError> {
    if bounds.x < 0 || bounds.y < 0 {
        return Err(LatticeError::NegativeBounds { bounds });
    }
    Ok(())
}

/// Resolve a single axis value against an inclusive upper bound.
///
/// Returns `None` for an Absorb out-of-bounds value; Wrap folds the value
/// modulo `(max + 1)` so opposite edges are adjacent.
pub(crate) fn resolve_axis(value: i32, max: i32, edge: EdgeBehavior) -> Option<i32> {
    if (0..=max).contains(&value) {
        return Some(value);
    }
    let len = max + 1;
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(((value % len) + len) % len),
    }
}

/// Resolve a displaced point axis-by-axis.
pub(crate) fn resolve_point(point: Point, bounds: Point, edge: EdgeBehavior) -> Option<Point> {
    let x = resolve_axis(point.x, bounds.x, edge)?;
    let y = resolve_axis(point.y, bounds.y, edge)?;
    Some(Point::new(x, y))
}
