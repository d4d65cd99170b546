//! 2D square grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::edge::EdgeBehavior;
use crate::error::LatticeError;
use crate::grid;
use crate::topology::Topology;
use smallvec::SmallVec;
use smolder_core::Point;

/// All 8 king-move offsets: up, up-left, left, down-left, down, down-right,
/// right, up-right.
const OFFSETS_8: [(i32, i32); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// A two-dimensional square grid with 8-connected neighbourhood.
///
/// Neighbours are the four cardinal directions plus the four diagonals.
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Absorb**: edge cells have fewer neighbours (corners 3, edges 5)
/// - **Wrap**: periodic boundary; every cell, corners included, has exactly
///   8 neighbours, with opposite edges adjacent
///
/// The epidemic model runs on `Square8` with `Wrap` edges — infection
/// travels across the map seam.
///
/// # Examples
///
/// ```
/// use smolder_core::Point;
/// use smolder_space::{EdgeBehavior, Square8, Topology};
///
/// let torus = Square8::new(Point::new(15, 15), EdgeBehavior::Wrap).unwrap();
/// assert_eq!(torus.neighbours(Point::new(0, 0)).len(), 8);
/// assert!(torus.neighbours(Point::new(0, 0)).contains(&Point::new(15, 15)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square8 {
    bounds: Point,
    edge: EdgeBehavior,
}

impl Square8 {
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

impl Topology for Square8 {
    fn bounds(&self) -> Point {
        self.bounds
    }

    fn neighbours(&self, point: Point) -> SmallVec<[Point; 8]> {
        let mut result = SmallVec::new();
        for (dx, dy) in OFFSETS_8 {
            if let Some(n) = grid::resolve_point(point.offset(dx, dy), self.bounds, self.edge) {
                result.push(n);
            }
        }
        result
    }
}
