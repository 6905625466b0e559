//! Everything related to the description of a cellular automaton rule,
//! primarily the transition function.

use core::fmt;
use enum_dispatch::enum_dispatch;

mod edge_filter;
mod sears_tower;

use crate::errors::{RuleError, RuleResult};
use crate::lattice::Lattice;
pub use edge_filter::*;
pub use sears_tower::*;

/// State of a single cell, in the range `0..num_states`.
pub type State = u32;

/// Category under which a host lists a rule for the user to pick.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RuleFolder {
    Classics,
    Instructional,
    Fractal,
    Pretty,
    Unstable,
}
impl RuleFolder {
    /// Returns the folder name shown to the user.
    pub const fn name(self) -> &'static str {
        match self {
            RuleFolder::Classics => "Classics",
            RuleFolder::Instructional => "Instructional",
            RuleFolder::Fractal => "Fractal",
            RuleFolder::Pretty => "Pretty",
            RuleFolder::Unstable => "Unstable",
        }
    }
}
impl fmt::Display for RuleFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static description of a rule, for hosts that list rules without running
/// them.
///
/// The tooltip and best-results strings contain simple HTML markup meant for
/// the host's UI; nothing here interprets it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RuleMetadata {
    /// Short name, at most 15 characters.
    pub display_name: &'static str,
    /// One- or two-sentence description of what the rule does.
    pub tooltip: &'static str,
    /// Description of the configuration that shows the rule off best.
    pub best_results: &'static str,
    /// Lattices the rule is meant for, or `None` if it works on any lattice.
    pub compatible_lattices: Option<&'static [Lattice]>,
    /// Folders under which the rule should be listed.
    pub folders: &'static [RuleFolder],
}
impl RuleMetadata {
    /// Returns whether the rule may run on the given lattice.
    pub fn is_compatible_with(&self, lattice: Lattice) -> bool {
        match self.compatible_lattices {
            Some(lattices) => lattices.contains(&lattice),
            None => true,
        }
    }
}

/// Cellular automaton transition rule.
///
/// A rule is a pure function from a cell, its neighbors, the number of
/// states, and the generation number to the cell's next state. It keeps no
/// state between calls, so the host may evaluate any number of cells of the
/// same generation concurrently.
#[enum_dispatch]
pub trait Rule: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the next state of `cell`.
    ///
    /// `neighbors` are ordered according to the lattice (see
    /// `Lattice::neighbor_order()`) and may be empty. The caller must ensure
    /// that `num_states >= 2` and that `cell` and every neighbor are less
    /// than `num_states`; debug builds assert this.
    fn transition(
        &self,
        cell: State,
        neighbors: &[State],
        num_states: u32,
        generation: u64,
    ) -> State;

    /// Returns the rule's static metadata.
    fn metadata(&self) -> &'static RuleMetadata;

    /// Validates the inputs and then computes the next state of `cell`.
    fn checked_transition(
        &self,
        cell: State,
        neighbors: &[State],
        num_states: u32,
        generation: u64,
    ) -> RuleResult<State> {
        check_inputs(cell, neighbors, num_states)?;
        Ok(self.transition(cell, neighbors, num_states, generation))
    }

    /// Returns the short name displayed to the user.
    fn display_name(&self) -> &'static str {
        self.metadata().display_name
    }
    /// Returns the tooltip text.
    fn tooltip(&self) -> &'static str {
        self.metadata().tooltip
    }
    /// Returns the description of the configuration that works best.
    fn best_results(&self) -> &'static str {
        self.metadata().best_results
    }
    /// Returns the compatible lattices, or `None` if any lattice works.
    fn compatible_lattices(&self) -> Option<&'static [Lattice]> {
        self.metadata().compatible_lattices
    }
    /// Returns the folders the rule is listed under.
    fn folders(&self) -> &'static [RuleFolder] {
        self.metadata().folders
    }
    /// Returns an error if the rule does not support the lattice.
    fn ensure_compatible(&self, lattice: Lattice) -> RuleResult<()> {
        if self.metadata().is_compatible_with(lattice) {
            Ok(())
        } else {
            Err(RuleError::IncompatibleLattice {
                rule: self.display_name(),
                lattice,
            })
        }
    }
}

/// Any built-in rule.
#[allow(missing_docs)]
#[enum_dispatch(Rule)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnyRule {
    EdgeFilter,
    SearsTower,
}
impl fmt::Display for AnyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyRule::EdgeFilter(r) => write!(f, "{}", r),
            AnyRule::SearsTower(r) => write!(f, "{}", r),
        }
    }
}

/// Checks the caller's side of the rule contract: at least two states, and
/// every state passed in below the state count.
pub fn check_inputs(cell: State, neighbors: &[State], num_states: u32) -> RuleResult<()> {
    if num_states < 2 {
        return Err(RuleError::TooFewStates { num_states });
    }
    if cell >= num_states {
        return Err(RuleError::StateOutOfRange {
            state: cell,
            num_states,
        });
    }
    match neighbors.iter().position(|&n| n >= num_states) {
        Some(index) => Err(RuleError::NeighborOutOfRange {
            index,
            state: neighbors[index],
            num_states,
        }),
        None => Ok(()),
    }
}

/// Asserts the caller's side of the rule contract in debug builds.
#[inline]
fn debug_check_inputs(cell: State, neighbors: &[State], num_states: u32) {
    if cfg!(debug_assertions) {
        if let Err(e) = check_inputs(cell, neighbors, num_states) {
            panic!("rule contract violated: {}", e);
        }
    }
}
