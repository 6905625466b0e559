use std::fmt;

use super::{debug_check_inputs, Rule, RuleFolder, RuleMetadata, State};
use crate::lattice::Lattice;

/// Generation-modulated neighbor-sum rule that grows tall fractal "towers".
///
/// The next state is `(cell + generation * (sum(neighbors) % 3)) % num_states`.
/// The modulo binds to the neighbor sum before the multiplication.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearsTower;

impl SearsTower {
    /// Static metadata for `SearsTower`.
    pub const METADATA: RuleMetadata = RuleMetadata {
        display_name: "Sears Tower",
        tooltip: "<html>Adds the generation number, weighted by the sum of the \
                  neighbors modulo 3, to the cell. Builds fractal patterns that \
                  look like skyscrapers.</html>",
        best_results: "<html>One-dimensional lattice with a single nonzero seed \
                       cell and 50 or more states.</html>",
        compatible_lattices: Some(&[Lattice::OneDimNearest, Lattice::OneDimNextNearest]),
        folders: &[RuleFolder::Fractal, RuleFolder::Pretty],
    };
}

impl fmt::Display for SearsTower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::METADATA.display_name)
    }
}

impl Rule for SearsTower {
    fn transition(
        &self,
        cell: State,
        neighbors: &[State],
        num_states: u32,
        generation: u64,
    ) -> State {
        debug_check_inputs(cell, neighbors, num_states);
        let n = u64::from(num_states);
        let sum_mod_3 = neighbors.iter().map(|&s| u64::from(s) % 3).sum::<u64>() % 3;
        // Reducing each term mod n gives the same result as the plain formula
        // without overflowing for large generation numbers.
        let increment = (generation % n) * sum_mod_3 % n;
        ((u64::from(cell) % n + increment) % n) as State
    }

    fn metadata(&self) -> &'static RuleMetadata {
        &Self::METADATA
    }
}
