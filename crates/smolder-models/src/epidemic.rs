//! Epidemic spread over an 8-connected torus.
//!
//! Age encodes a signed phase: 0 is `Healthy`, positive ages are `Sick`
//! counting down, negative ages are `Immune` counting up toward 0. A sick
//! cell that finishes its countdown always passes through immunity; it can
//! never return to `Healthy` directly.

use crate::error::{check_probability, RuleError};
use smolder_core::{Cell, EntropyStream, Point};
use smolder_sim::{Field, Rule};
use smolder_space::{EdgeBehavior, LatticeError, Square8, Topology};
use std::fmt;

/// Infection probability used when none is configured.
pub const DEFAULT_INFECTION_PROBABILITY: f64 = 0.2;

/// Recovery (immunity-loss) probability used when none is configured.
pub const DEFAULT_RECOVERY_PROBABILITY: f64 = 0.2;

/// Age a cell is set to when it becomes sick; it counts down from here.
pub const SICK_SPAN: i32 = 5;

/// Age a cell is set to when it becomes immune; it counts up from here.
pub const IMMUNE_SPAN: i32 = -5;

/// Infection state, derived from the sign of the age.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EpidemicState {
    /// Susceptible (age 0).
    Healthy,
    /// Infectious (positive age, counting down).
    Sick,
    /// Recovered and protected (negative age, counting up).
    Immune,
}

impl EpidemicState {
    /// Whether this cell currently spreads infection.
    pub fn is_sick(self) -> bool {
        self == Self::Sick
    }
}

/// Every state, in palette order.
const STATES: [EpidemicState; 3] = [
    EpidemicState::Healthy,
    EpidemicState::Sick,
    EpidemicState::Immune,
];

/// The epidemic transition rule.
///
/// Two tunables: the infection probability gating neighbour-triggered
/// contagion, and the recovery probability gating each immune cell's step
/// back toward susceptibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epidemic {
    infection_probability: f64,
    recovery_probability: f64,
}

impl Epidemic {
    /// Create a rule with the given infection and recovery probabilities.
    ///
    /// # Errors
    ///
    /// Returns `Err(RuleError::InvalidProbability)` if either value is
    /// outside `[0, 1]` or not finite.
    pub fn new(infection_probability: f64, recovery_probability: f64) -> Result<Self, RuleError> {
        Ok(Self {
            infection_probability: check_probability(
                "infection probability",
                infection_probability,
            )?,
            recovery_probability: check_probability("recovery probability", recovery_probability)?,
        })
    }

    /// The configured infection probability.
    pub fn infection_probability(&self) -> f64 {
        self.infection_probability
    }

    /// The configured recovery probability.
    pub fn recovery_probability(&self) -> f64 {
        self.recovery_probability
    }
}

impl Default for Epidemic {
    fn default() -> Self {
        Self {
            infection_probability: DEFAULT_INFECTION_PROBABILITY,
            recovery_probability: DEFAULT_RECOVERY_PROBABILITY,
        }
    }
}

impl Rule for Epidemic {
    type State = EpidemicState;

    fn derive_state(&self, age: i32) -> EpidemicState {
        if age == 0 {
            EpidemicState::Healthy
        } else if age < 0 {
            EpidemicState::Immune
        } else {
            EpidemicState::Sick
        }
    }

    fn advance(
        &self,
        cell: Cell<EpidemicState>,
        neighbours: &[Cell<EpidemicState>],
        stream: &mut EntropyStream,
    ) -> Cell<EpidemicState> {
        match cell.state {
            EpidemicState::Healthy => {
                let sick_neighbour = neighbours.iter().any(|n| n.state.is_sick());
                if sick_neighbour && stream.chance(self.infection_probability) {
                    self.cell_at(SICK_SPAN)
                } else {
                    cell
                }
            }
            EpidemicState::Sick => {
                // The countdown never lands on Healthy: immunity always
                // follows sickness.
                if cell.age - 1 == 0 {
                    self.cell_at(IMMUNE_SPAN)
                } else {
                    self.cell_at(cell.age - 1)
                }
            }
            EpidemicState::Immune => {
                if stream.chance(self.recovery_probability) {
                    self.cell_at(cell.age + 1)
                } else {
                    cell
                }
            }
        }
    }

    fn states(&self) -> &'static [EpidemicState] {
        &STATES
    }

    fn color_for(&self, state: EpidemicState) -> [u8; 3] {
        match state {
            EpidemicState::Healthy => [120, 120, 120],
            EpidemicState::Sick => [0, 255, 0],
            EpidemicState::Immune => [0, 0, 255],
        }
    }
}

/// Per-generation population counts, computed by a full scan.
///
/// Not stored on the field; callers collect one census per generation for
/// reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    /// Susceptible cells.
    pub healthy: usize,
    /// Infectious cells.
    pub sick: usize,
    /// Recovered cells.
    pub immune: usize,
}

impl Census {
    /// Count the states of every cell in `field`.
    pub fn of<T: Topology>(field: &Field<T, Epidemic>) -> Self {
        let mut census = Self::default();
        for (_, cell) in field.cells() {
            match cell.state {
                EpidemicState::Healthy => census.healthy += 1,
                EpidemicState::Sick => census.sick += 1,
                EpidemicState::Immune => census.immune += 1,
            }
        }
        census
    }

    /// Total population covered by this census.
    pub fn total(&self) -> usize {
        self.healthy + self.sick + self.immune
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "healthy={} sick={} immune={}",
            self.healthy, self.sick, self.immune
        )
    }
}

/// Build the starting grid: an 8-connected torus where every cell is
/// `Healthy` except the exact center, forced `Sick` at full span.
///
/// # Errors
///
/// Returns `Err(LatticeError::NegativeBounds)` if `bounds` has a negative
/// component.
pub fn basic_field(bounds: Point, rule: Epidemic) -> Result<Field<Square8, Epidemic>, LatticeError> {
    let lattice = Square8::new(bounds, EdgeBehavior::Wrap)?;
    let center = Point::new(bounds.x / 2, bounds.y / 2);
    Ok(Field::from_fn(lattice, rule, |point| {
        if point == center {
            rule.cell_at(SICK_SPAN)
        } else {
            rule.cell_at(0)
        }
    }))
}
