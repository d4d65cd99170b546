//! Smolder: probabilistic cellular-automaton simulations rendered to
//! animated GIFs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all smolder sub-crates. For most users, adding `smolder` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use smolder::prelude::*;
//!
//! // A seeded run is fully reproducible: the entropy stream is the only
//! // source of randomness and cells consume it in a fixed order.
//! let rule = Wildfire::default();
//! let mut stream = EntropyStream::with_seed(42);
//! let initial = wildfire::basic_field(Point::new(9, 9), rule, &mut stream).unwrap();
//!
//! let history = run(initial, 25, &mut stream);
//! assert_eq!(history.len(), 26);
//! assert!(history.iter().all(|field| field.cell_count() == 100));
//!
//! // Render every generation after the initial one and bundle them.
//! let frames: Vec<_> = history[1..].iter().map(|f| rasterize(f, 200)).collect();
//! let palette = StatePalette::for_rule(&rule);
//! let indexed = quantize(&frames, &palette);
//!
//! let mut gif_bytes = Vec::new();
//! encode_gif(&mut gif_bytes, &indexed, &palette, FRAME_DELAY_CS).unwrap();
//! assert!(gif_bytes.starts_with(b"GIF89a"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `smolder-core` | `Point`, `Cell`, `EntropyStream` |
//! | [`space`] | `smolder-space` | `Topology`, `Square4`, `Square8`, `EdgeBehavior` |
//! | [`sim`] | `smolder-sim` | `Rule`, `Field`, the `run` driver |
//! | [`models`] | `smolder-models` | `Wildfire`, `Epidemic`, `Census` |
//! | [`render`] | `smolder-render` | rasterization, palette quantization, GIF assembly |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`smolder-core`).
pub use smolder_core as types;

/// Lattice topologies (`smolder-space`).
pub use smolder_space as space;

/// The generic synchronous engine (`smolder-sim`).
pub use smolder_sim as sim;

/// The wildfire and epidemic rules (`smolder-models`).
pub use smolder_models as models;

/// Rasterization, quantization, and GIF assembly (`smolder-render`).
pub use smolder_render as render;

/// Common imports for typical smolder usage.
///
/// ```rust
/// use smolder::prelude::*;
/// ```
pub mod prelude {
    pub use smolder_core::{Cell, EntropyStream, Point};
    pub use smolder_models::{epidemic, wildfire, Census, Epidemic, EpidemicState, RuleError, Wildfire, WildfireState};
    pub use smolder_render::{
        encode_gif, quantize, rasterize, IndexedFrame, RenderError, StatePalette, FRAME_DELAY_CS,
    };
    pub use smolder_sim::{run, Field, Rule};
    pub use smolder_space::{EdgeBehavior, LatticeError, Square4, Square8, Topology};
}
