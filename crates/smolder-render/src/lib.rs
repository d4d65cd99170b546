//! Rendering for smolder simulations.
//!
//! Rendering is strictly read-only over a field and happens in three
//! stages:
//!
//! 1. [`rasterize`]: paint one generation as solid per-cell rectangles on
//!    an RGB canvas.
//! 2. [`quantize`]: convert every frame to a shared [`StatePalette`] (one
//!    entry per simulation state) with Floyd–Steinberg error-diffusion
//!    dithering, producing indexed frames.
//! 3. [`encode_gif`]: hand the indexed frames to the GIF container.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod encode;
pub mod error;
pub mod palette;
pub mod raster;

pub use encode::{encode_gif, FRAME_DELAY_CS};
pub use error::RenderError;
pub use palette::{quantize, IndexedFrame, StatePalette};
pub use raster::rasterize;
