//! Wildfire spread over a bounded 4-connected grid.
//!
//! Every cell carries an age that fixed thresholds map to a vegetation
//! state: a freshly ignited cell is `Fire`, then `Burnt`, then regrowth
//! passes through `Grass` and `RarefiedForest` to `DenseForest`. Anything
//! that is not currently burning or burnt can catch fire from a cardinal
//! neighbour.

use crate::error::{check_probability, RuleError};
use smolder_core::{Cell, EntropyStream, Point};
use smolder_sim::{Field, Rule};
use smolder_space::{EdgeBehavior, LatticeError, Square4};

/// Ignition probability used when none is configured.
pub const DEFAULT_IGNITION_PROBABILITY: f64 = 0.5;

/// Exclusive upper bound on the uniformly random initial ages, so the
/// forest starts in a naturally aged, patchy condition.
pub const MAX_INITIAL_AGE: i32 = 70;

/// Vegetation state, derived from age by fixed thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WildfireState {
    /// Burning right now (age 0).
    Fire,
    /// Recently burned ground (ages 1–4).
    Burnt,
    /// First regrowth (ages 5–9).
    Grass,
    /// Thin young forest (ages 10–49).
    RarefiedForest,
    /// Mature forest (age 50 and up).
    DenseForest,
}

impl WildfireState {
    /// Whether this cell currently spreads fire.
    pub fn is_burning(self) -> bool {
        self == Self::Fire
    }

    /// Whether this cell can catch fire: anything but `Fire` and `Burnt`.
    pub fn is_flammable(self) -> bool {
        !matches!(self, Self::Fire | Self::Burnt)
    }
}

/// Every state, in palette order.
const STATES: [WildfireState; 5] = [
    WildfireState::Fire,
    WildfireState::Burnt,
    WildfireState::Grass,
    WildfireState::RarefiedForest,
    WildfireState::DenseForest,
];

/// The wildfire transition rule.
///
/// Thresholds are the sole source of truth for states; the one tunable is
/// the ignition probability gating neighbour-triggered re-ignition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wildfire {
    ignition_probability: f64,
}

impl Wildfire {
    /// Create a rule with the given ignition probability.
    ///
    /// # Errors
    ///
    /// Returns `Err(RuleError::InvalidProbability)` if the value is outside
    /// `[0, 1]` or not finite.
    pub fn new(ignition_probability: f64) -> Result<Self, RuleError> {
        Ok(Self {
            ignition_probability: check_probability("ignition probability", ignition_probability)?,
        })
    }

    /// The configured ignition probability.
    pub fn ignition_probability(&self) -> f64 {
        self.ignition_probability
    }
}

impl Default for Wildfire {
    fn default() -> Self {
        Self {
            ignition_probability: DEFAULT_IGNITION_PROBABILITY,
        }
    }
}

impl Rule for Wildfire {
    type State = WildfireState;

    fn derive_state(&self, age: i32) -> WildfireState {
        if age == 0 {
            WildfireState::Fire
        } else if age < 5 {
            WildfireState::Burnt
        } else if age < 10 {
            WildfireState::Grass
        } else if age < 50 {
            WildfireState::RarefiedForest
        } else {
            WildfireState::DenseForest
        }
    }

    fn advance(
        &self,
        cell: Cell<WildfireState>,
        neighbours: &[Cell<WildfireState>],
        stream: &mut EntropyStream,
    ) -> Cell<WildfireState> {
        let burning_neighbour = neighbours.iter().any(|n| n.state.is_burning());
        if burning_neighbour
            && cell.state.is_flammable()
            && stream.chance(self.ignition_probability)
        {
            // Ignition pre-empts normal aging.
            return self.cell_at(0);
        }
        self.cell_at(cell.age + 1)
    }

    fn states(&self) -> &'static [WildfireState] {
        &STATES
    }

    fn color_for(&self, state: WildfireState) -> [u8; 3] {
        match state {
            WildfireState::Fire => [255, 0, 0],
            WildfireState::Burnt => [165, 42, 42],
            WildfireState::Grass => [144, 238, 144],
            WildfireState::RarefiedForest => [34, 221, 34],
            WildfireState::DenseForest => [25, 165, 25],
        }
    }
}

/// Build the starting grid: a bounded 4-connected lattice where every cell
/// gets a uniformly random initial age in `[0, MAX_INITIAL_AGE)`.
///
/// # Errors
///
/// Returns `Err(LatticeError::NegativeBounds)` if `bounds` has a negative
/// component.
pub fn basic_field(
    bounds: Point,
    rule: Wildfire,
    stream: &mut EntropyStream,
) -> Result<Field<Square4, Wildfire>, LatticeError> {
    let lattice = Square4::new(bounds, EdgeBehavior::Absorb)?;
    Ok(Field::from_fn(lattice, rule, |_| {
        rule.cell_at(stream.uniform_age(MAX_INITIAL_AGE))
    }))
}
