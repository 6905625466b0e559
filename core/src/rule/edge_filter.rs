use std::fmt;

use super::{debug_check_inputs, Rule, RuleFolder, RuleMetadata, State};

/// Threshold that a cell must exceed at least one neighbor by in order to
/// survive.
pub const EDGE_FILTER_EPSILON: f64 = 0.5;

/// Variant of elementary rule 102 that keeps only cells standing above their
/// smallest neighbor.
///
/// For each neighbor `n` the rule computes the signed difference
/// `d = |cell| - |n|`. If every neighbor has `d < 0.5`, the cell becomes 0;
/// otherwise it keeps its state. With integer states this means a cell
/// survives exactly when it is larger than at least one neighbor, even if
/// other neighbors are larger than it. A cell with no neighbors always
/// collapses.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EdgeFilter;

/// How a cell compares to each of its neighbors, as counted by
/// `EdgeFilter::classify()`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EdgeCounts {
    /// Neighbors with `|cell| - |n| < epsilon`.
    pub less: usize,
    /// Neighbors with `|cell| - |n| > epsilon`.
    pub greater: usize,
    /// Neighbors with `|cell| - |n| == epsilon`, which count as neither.
    pub equal: usize,
}

impl EdgeFilter {
    /// Static metadata for `EdgeFilter`.
    pub const METADATA: RuleMetadata = RuleMetadata {
        display_name: "Edge Filter",
        tooltip: "<html>A variant of rule 102. A cell that does not exceed any \
                  neighbor by more than 1/2 becomes 0; otherwise it keeps its \
                  state. Acts like an edge detector.</html>",
        best_results: "<html>Start from a random initial state on a square lattice \
                       with many states. Only cells above their smallest neighbor \
                       survive, and the result is stable after one \
                       generation.</html>",
        compatible_lattices: None,
        folders: &[RuleFolder::Instructional],
    };

    /// Returns the threshold used when comparing a cell to its neighbors.
    #[inline]
    pub const fn epsilon(self) -> f64 {
        EDGE_FILTER_EPSILON
    }

    /// Compares `cell` to each neighbor and counts the outcomes.
    pub fn classify(self, cell: State, neighbors: &[State]) -> EdgeCounts {
        let epsilon = self.epsilon();
        // States are unsigned, so their magnitudes are the states themselves.
        let cell = f64::from(cell);
        let mut counts = EdgeCounts::default();
        for &n in neighbors {
            let d = cell - f64::from(n);
            if d < epsilon {
                counts.less += 1;
            } else if d > epsilon {
                counts.greater += 1;
            } else {
                counts.equal += 1;
            }
        }
        counts
    }
}

impl fmt::Display for EdgeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::METADATA.display_name)
    }
}

impl Rule for EdgeFilter {
    fn transition(
        &self,
        cell: State,
        neighbors: &[State],
        num_states: u32,
        _generation: u64,
    ) -> State {
        debug_check_inputs(cell, neighbors, num_states);
        // Vacuously true when there are no neighbors.
        if self.classify(cell, neighbors).less == neighbors.len() {
            0
        } else {
            cell
        }
    }

    fn metadata(&self) -> &'static RuleMetadata {
        &Self::METADATA
    }
}
