//! The sequential generation driver.

use crate::field::Field;
use crate::rule::Rule;
use log::debug;
use smolder_core::EntropyStream;
use smolder_space::Topology;

/// Advance `initial` through `generations` synchronous steps, retaining
/// every generation.
///
/// The returned sequence holds `generations + 1` fields: the initial field
/// followed by each successor in order. Rendering consumes the sequence
/// afterwards; nothing is discarded here.
pub fn run<T: Topology, R: Rule>(
    initial: Field<T, R>,
    generations: usize,
    stream: &mut EntropyStream,
) -> Vec<Field<T, R>> {
    let mut history = Vec::with_capacity(generations + 1);
    history.push(initial);
    for generation in 0..generations {
        let next = history[generation].next(stream);
        history.push(next);
        debug!("advanced to generation {}", generation + 1);
    }
    history
}
