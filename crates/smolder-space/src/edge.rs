//! Edge (boundary) behavior for lattice backends.

/// How a lattice resolves neighbours that fall outside its bounds.
///
/// This controls topology only — which points count as neighbours of a
/// boundary cell — not any cell value.
///
/// # Examples
///
/// ```
/// use smolder_core::Point;
/// use smolder_space::{EdgeBehavior, Square4, Topology};
///
/// // Absorb: a corner has 2 neighbours, an interior cell 4.
/// let absorb = Square4::new(Point::new(3, 3), EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(Point::new(0, 0)).len(), 2);
/// assert_eq!(absorb.neighbours(Point::new(1, 1)).len(), 4);
///
/// // Wrap: every cell has exactly 4 neighbours (torus).
/// let wrap = Square4::new(Point::new(3, 3), EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(Point::new(0, 0)).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// An out-of-bounds neighbour is omitted; boundary cells have fewer
    /// neighbours than interior cells.
    Absorb,
    /// An out-of-bounds neighbour wraps to the opposite edge (periodic
    /// boundary); every cell has the full neighbour count.
    Wrap,
}
