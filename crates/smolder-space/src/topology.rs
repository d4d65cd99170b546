//! The core `Topology` trait.

use smallvec::SmallVec;
use smolder_core::Point;

/// Adjacency abstraction for smolder simulations.
///
/// A topology owns the lattice bounds and decides which points are
/// neighbours of which. Rules read their neighbour context through this
/// trait; the field stores cells in the topology's canonical linearization.
///
/// Bounds are the **inclusive** upper corner: a topology with bounds
/// `(X, Y)` covers every point in `[0, X] × [0, Y]`, which is
/// `(X+1) * (Y+1)` cells.
///
/// # Contract
///
/// - `neighbours` is recomputed from bounds on every call, never cached,
///   and returns only points satisfying [`contains`](Topology::contains).
/// - `index_of` and `point_at` are inverses over the canonical row-major
///   order: `point_at(i)` enumerates `(0,0), (1,0), ..., (X,0), (0,1), ...`
///   for `i` in `0..cell_count()`.
/// - Neighbour relations are symmetric: `b ∈ neighbours(a)` implies
///   `a ∈ neighbours(b)`.
pub trait Topology: Clone {
    /// The inclusive upper corner of the lattice.
    fn bounds(&self) -> Point;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        let bounds = self.bounds();
        (bounds.x as usize + 1) * (bounds.y as usize + 1)
    }

    /// Whether `point` lies on the lattice.
    fn contains(&self, point: Point) -> bool {
        let bounds = self.bounds();
        point.x >= 0 && point.y >= 0 && point.x <= bounds.x && point.y <= bounds.y
    }

    /// Enumerate the neighbours of `point`, resolved per the backend's
    /// connectivity and edge behavior.
    ///
    /// The inline capacity of 8 covers the densest backend without heap
    /// allocation.
    fn neighbours(&self, point: Point) -> SmallVec<[Point; 8]>;

    /// Position of `point` in the canonical row-major order, or `None` if
    /// it is off the lattice.
    fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        let width = self.bounds().x as usize + 1;
        Some(point.y as usize * width + point.x as usize)
    }

    /// The point at `index` in the canonical row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    fn point_at(&self, index: usize) -> Point {
        assert!(
            index < self.cell_count(),
            "index {index} out of range for {} cells",
            self.cell_count()
        );
        let width = self.bounds().x as usize + 1;
        Point::new((index % width) as i32, (index / width) as i32)
    }

    /// All points in canonical row-major order.
    ///
    /// Two calls on the same topology return the same sequence; simulation
    /// trajectories are reproducible because cells consume the entropy
    /// stream in exactly this order.
    fn canonical_ordering(&self) -> Vec<Point> {
        (0..self.cell_count()).map(|i| self.point_at(i)).collect()
    }
}
