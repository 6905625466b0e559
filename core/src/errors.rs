//! Errors reported when a caller breaks the rule contract or asks the registry
//! for something it does not have.

use std::error::Error;
use std::fmt;

use crate::lattice::Lattice;
use crate::rule::State;

/// `Result` type alias for rule errors.
pub type RuleResult<T> = Result<T, RuleError>;

/// Error produced by checked rule evaluation and registry lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A simulation needs at least two states.
    TooFewStates {
        /// Requested state count.
        num_states: u32,
    },
    /// The subject cell's state is not below the state count.
    StateOutOfRange {
        /// Offending cell state.
        state: State,
        /// State count of the simulation.
        num_states: u32,
    },
    /// One of the neighbor states is not below the state count.
    NeighborOutOfRange {
        /// Position of the neighbor in the neighbor slice.
        index: usize,
        /// Offending neighbor state.
        state: State,
        /// State count of the simulation.
        num_states: u32,
    },
    /// No rule is registered under this identifier.
    UnknownRule {
        /// Identifier that was looked up.
        id: String,
    },
    /// The rule does not list the lattice as compatible.
    IncompatibleLattice {
        /// Display name of the rule.
        rule: &'static str,
        /// Lattice the rule was asked to run on.
        lattice: Lattice,
    },
}
impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewStates { num_states } => write!(
                f,
                "a cellular automaton needs at least 2 states, but {} were requested",
                num_states,
            ),
            Self::StateOutOfRange { state, num_states } => write!(
                f,
                "cell state {} is out of range for {} states",
                state, num_states,
            ),
            Self::NeighborOutOfRange {
                index,
                state,
                num_states,
            } => write!(
                f,
                "neighbor #{} has state {}, which is out of range for {} states",
                index, state, num_states,
            ),
            Self::UnknownRule { id } => write!(f, "no rule named {:?}", id),
            Self::IncompatibleLattice { rule, lattice } => {
                write!(f, "{} cannot run on a {} lattice", rule, lattice)
            }
        }
    }
}
impl Error for RuleError {}
