//! Topology trait compliance test helpers.
//!
//! These functions verify that a `Topology` implementation satisfies the
//! invariants required by the trait contract. Reused across both backend
//! test modules (Square4, Square8).

use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that every returned neighbour lies on the lattice.
pub fn assert_neighbours_in_bounds<T: Topology>(topology: &T) {
    for point in topology.canonical_ordering() {
        for nb in topology.neighbours(point) {
            assert!(
                topology.contains(nb),
                "neighbour {nb} of {point} is out of bounds"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric<T: Topology>(topology: &T) {
    for point in topology.canonical_ordering() {
        for nb in topology.neighbours(point) {
            assert!(
                topology.neighbours(nb).contains(&point),
                "neighbour symmetry violated: {nb} in N({point}) but {point} not in N({nb})"
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same sequence.
pub fn assert_canonical_ordering_deterministic<T: Topology>(topology: &T) {
    let a = topology.canonical_ordering();
    let b = topology.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique points.
pub fn assert_canonical_ordering_complete<T: Topology>(topology: &T) {
    let ordering = topology.canonical_ordering();
    assert_eq!(
        ordering.len(),
        topology.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        topology.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        topology.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that `index_of` and `point_at` are inverses over the whole lattice.
pub fn assert_index_roundtrip<T: Topology>(topology: &T) {
    for (index, point) in topology.canonical_ordering().into_iter().enumerate() {
        assert_eq!(
            topology.index_of(point),
            Some(index),
            "index_of({point}) disagrees with canonical position {index}"
        );
        assert_eq!(
            topology.point_at(index),
            point,
            "point_at({index}) disagrees with canonical ordering"
        );
    }
}

/// Run all compliance checks on a topology.
pub fn run_full_compliance<T: Topology>(topology: &T) {
    assert_neighbours_in_bounds(topology);
    assert_neighbours_symmetric(topology);
    assert_canonical_ordering_deterministic(topology);
    assert_canonical_ordering_complete(topology);
    assert_index_roundtrip(topology);
}
