//! Concrete transition rules for the smolder engine.
//!
//! Two models, sharing nothing but the engine's capability contract:
//!
//! - [`wildfire`]: fire spreading through aging vegetation on a bounded
//!   4-connected grid — fire stops at the map edge.
//! - [`epidemic`]: infection spreading through a population on an
//!   8-connected torus — sickness crosses the map seam, and immunity always
//!   follows sickness.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod epidemic;
pub mod error;
pub mod wildfire;

pub use epidemic::{Census, Epidemic, EpidemicState};
pub use error::RuleError;
pub use wildfire::{Wildfire, WildfireState};
