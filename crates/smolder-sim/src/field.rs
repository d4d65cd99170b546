//! The immutable per-generation lattice snapshot.

use crate::rule::Rule;
use smallvec::SmallVec;
use smolder_core::{Cell, EntropyStream, Point};
use smolder_space::Topology;

/// One complete, immutable simulation generation.
///
/// A field pairs a topology (which owns the bounds) and a rule with a dense
/// cell vector in the topology's canonical row-major order. The vector is
/// total: exactly one cell for every point in
/// `[0, bounds.x] × [0, bounds.y]`.
///
/// Fields are never mutated after construction. [`next()`](Field::next)
/// computes a brand-new field from a frozen view of the receiver, so a
/// caller can retain the full generation sequence and render it later.
#[derive(Clone, Debug)]
pub struct Field<T: Topology, R: Rule> {
    topology: T,
    rule: R,
    cells: Vec<Cell<R::State>>,
}

impl<T: Topology, R: Rule> Field<T, R> {
    /// Build a field by asking `init` for the cell at every point, visited
    /// in canonical row-major order.
    pub fn from_fn(
        topology: T,
        rule: R,
        mut init: impl FnMut(Point) -> Cell<R::State>,
    ) -> Self {
        let count = topology.cell_count();
        let mut cells = Vec::with_capacity(count);
        for index in 0..count {
            cells.push(init(topology.point_at(index)));
        }
        Self {
            topology,
            rule,
            cells,
        }
    }

    /// The lattice topology.
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// The transition rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Inclusive upper corner of the lattice.
    pub fn bounds(&self) -> Point {
        self.topology.bounds()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `point`.
    ///
    /// The cell vector is total over the lattice, so an in-bounds lookup
    /// always succeeds.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the lattice bounds. That is a caller
    /// programming error; substituting a default cell would hide
    /// grid-construction bugs.
    pub fn get(&self, point: Point) -> Cell<R::State> {
        match self.topology.index_of(point) {
            Some(index) => self.cells[index],
            None => panic!(
                "point {point} is outside the lattice bounds {}",
                self.topology.bounds()
            ),
        }
    }

    /// Iterate `(point, cell)` pairs in canonical row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell<R::State>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.topology.point_at(index), *cell))
    }

    /// Count the cells whose state satisfies `predicate`.
    pub fn count_states(&self, predicate: impl Fn(R::State) -> bool) -> usize {
        self.cells.iter().filter(|c| predicate(c.state)).count()
    }

    /// Compute the next generation synchronously.
    ///
    /// Every successor is derived from this field's frozen cells — no
    /// successor is read back within the same step, so the result is
    /// independent of iteration order except for the order in which cells
    /// consume `stream`, which is fixed (canonical row-major) to keep
    /// fixed-seed trajectories reproducible.
    pub fn next(&self, stream: &mut EntropyStream) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        let mut neighbours: SmallVec<[Cell<R::State>; 8]> = SmallVec::new();
        for index in 0..self.cells.len() {
            let point = self.topology.point_at(index);
            neighbours.clear();
            for n in self.topology.neighbours(point) {
                neighbours.push(self.get(n));
            }
            cells.push(self.rule.advance(self.cells[index], &neighbours, stream));
        }
        Self {
            topology: self.topology.clone(),
            rule: self.rule.clone(),
            cells,
        }
    }
}
