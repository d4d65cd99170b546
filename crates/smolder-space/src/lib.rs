//! Lattice topologies for smolder simulations.
//!
//! This crate defines the [`Topology`] trait — the adjacency abstraction
//! every simulation rule reads its neighbor context through — along with the
//! two concrete square-grid backends.
//!
//! # Backends
//!
//! - [`Square4`]: 4-connected neighbourhood (N/S/E/W)
//! - [`Square8`]: 8-connected neighbourhood (cardinal + diagonal)
//!
//! Both are parameterized by [`EdgeBehavior`]: `Absorb` drops out-of-bounds
//! neighbours (boundary cells have fewer of them), `Wrap` folds them onto
//! the opposite edge (torus). The wildfire model runs on `Square4`/`Absorb`,
//! the epidemic model on `Square8`/`Wrap`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod square4;
pub mod square8;
pub mod topology;

mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::LatticeError;
pub use square4::Square4;
pub use square8::Square8;
pub use topology::Topology;
