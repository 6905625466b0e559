//! Pluggable transition rules for discrete cellular automata.
//!
//! A rule maps a cell's state, its neighbors' states, the number of states,
//! and the generation number to the cell's next state. The host owns the
//! lattice, the update schedule, and the boundaries; this crate only answers
//! "what comes next" for one cell at a time.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

#[macro_use]
extern crate lazy_static;

mod errors;
pub mod lattice;
pub mod registry;
pub mod rule;

pub use errors::{RuleError, RuleResult};

pub mod prelude {
    //! Commonly used types and traits.

    pub use crate::errors::{RuleError, RuleResult};
    pub use crate::lattice::{Lattice, NeighborPosition, LATTICES};
    pub use crate::registry::RuleDescriptor;
    pub use crate::rule::{
        AnyRule, EdgeCounts, EdgeFilter, Rule, RuleFolder, RuleMetadata, SearsTower, State,
    };
}

#[cfg(test)]
mod tests;
