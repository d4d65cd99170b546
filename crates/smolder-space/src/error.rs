//! Error types for lattice construction.

use smolder_core::Point;
use std::fmt;

/// Errors arising from lattice construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A bounds component is negative, so the lattice would cover no cells.
    ///
    /// Bounds are the inclusive upper corner: `(X, Y)` spans
    /// `(X+1) * (Y+1)` cells, so every non-negative pair is valid.
    NegativeBounds {
        /// The offending bounds.
        bounds: Point,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBounds { bounds } => {
                write!(f, "lattice bounds {bounds} have a negative component")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
