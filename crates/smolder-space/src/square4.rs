//! 2D square grid with 4-connected neighbourhood (N/S/E/W).

use crate::edge::EdgeBehavior;
use crate::error::LatticeError;
use crate::grid;
use crate::topology::Topology;
use smallvec::SmallVec;
use smolder_core::Point;

/// The four cardinal offsets: up, down, left, right.
const OFFSETS_4: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A two-dimensional square grid with 4-connected neighbourhood.
///
/// Neighbours are the four cardinal directions. Boundary handling is
/// controlled by [`EdgeBehavior`]:
/// - **Absorb**: edge cells have fewer neighbours (corners 2, edges 3)
/// - **Wrap**: periodic boundary; every cell has exactly 4 neighbours
///
/// The wildfire model runs on `Square4` with `Absorb` edges — fire never
/// crosses the map boundary.
///
/// # Examples
///
/// ```
/// use smolder_core::Point;
/// use smolder_space::{EdgeBehavior, Square4, Topology};
///
/// let grid = Square4::new(Point::new(15, 15), EdgeBehavior::Absorb).unwrap();
/// assert_eq!(grid.cell_count(), 256);
/// assert_eq!(grid.neighbours(Point::new(0, 0)).len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square4 {
    bounds: Point,
    edge: EdgeBehavior,
}

impl Square4 {
    /// Create a grid spanning `[0, bounds.x] × [0, bounds.y]` with the given
    /// edge behavior.
    ///
    /// # Errors
    ///
    /// Returns `Err(LatticeError::NegativeBounds)` if either bounds
    /// component is negative.
    pub fn new(bounds: Point, edge: EdgeBehavior) -> Result<Self, LatticeError> {
        grid::check_bounds(bounds)?;
        Ok(Self { bounds, edge })
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }
}

impl Topology for Square4 {
    fn bounds(&self) -> Point {
        self.bounds
    }

    fn neighbours(&self, point: Point) -> SmallVec<[Point; 8]> {
        let mut result = SmallVec::new();
        for (dx, dy) in OFFSETS_4 {
            if let Some(n) = grid::resolve_point(point.offset(dx, dy), self.bounds, self.edge) {
                result.push(n);
            }
        }
        result
    }
}
