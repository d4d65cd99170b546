//! The transition-rule capability contract.

use smolder_core::{Cell, EntropyStream};
use std::fmt::Debug;

/// Per-simulation state machine: maps age to state and decides the
/// probabilistic, neighbor-dependent successor of each cell.
///
/// A rule owns the model's probability constants; the engine owns the
/// iteration order and the frozen-snapshot discipline. Rules are small value
/// types cloned into each generation's field.
pub trait Rule: Clone {
    /// The model's closed state enumeration.
    type State: Copy + Eq + Debug + 'static;

    /// Derive the state cached for `age`.
    ///
    /// Pure function of its argument: deriving twice from the same age
    /// yields the same state, with no hidden counters.
    fn derive_state(&self, age: i32) -> Self::State;

    /// Compute the successor of `cell` given the frozen previous-generation
    /// cells at its neighbour sites.
    ///
    /// Any randomness must come from `stream`, and the returned cell must
    /// uphold `state == derive_state(age)`.
    fn advance(
        &self,
        cell: Cell<Self::State>,
        neighbours: &[Cell<Self::State>],
        stream: &mut EntropyStream,
    ) -> Cell<Self::State>;

    /// Every distinct state, in palette order.
    fn states(&self) -> &'static [Self::State];

    /// The render color for `state` as an RGB triple.
    fn color_for(&self, state: Self::State) -> [u8; 3];

    /// Build the cell for `age`, with its state derived consistently.
    fn cell_at(&self, age: i32) -> Cell<Self::State> {
        Cell::new(self.derive_state(age), age)
    }
}
