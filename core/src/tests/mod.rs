//! Multi-generation regression tests that run rules the way a host would.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::prelude::*;
use crate::registry;

/// Steps a ring of cells by one generation, gathering neighbors in the order
/// given by `lattice`.
pub(crate) fn step_ring(
    rule: &dyn Rule,
    lattice: Lattice,
    cells: &[State],
    num_states: u32,
    generation: u64,
) -> Vec<State> {
    let mut neighbors = Vec::with_capacity(lattice.neighbor_count());
    (0..cells.len())
        .map(|i| {
            lattice.gather_ring_neighbors(cells, i, &mut neighbors);
            rule.transition(cells[i], &neighbors, num_states, generation)
        })
        .collect()
}

#[test]
fn test_sears_tower_ring_regression() {
    let rule = registry::construct("sears-tower").unwrap();
    let mut cells = vec![0, 0, 0, 1, 0, 0, 0];
    let expected = [
        vec![0, 0, 1, 1, 1, 0, 0],
        vec![0, 2, 3, 5, 3, 2, 0],
        vec![6, 2, 6, 5, 6, 2, 6],
    ];
    for (generation, expected_row) in (1..).zip(&expected) {
        cells = step_ring(&rule, Lattice::OneDimNearest, &cells, 10, generation);
        assert_eq!(expected_row, &cells, "generation {}", generation);
    }
}

#[test]
fn test_sears_tower_generation_zero_is_identity() {
    let cells = vec![4, 0, 9, 1, 7];
    let next = step_ring(&SearsTower, Lattice::OneDimNextNearest, &cells, 10, 0);
    assert_eq!(cells, next);
}

#[test]
fn test_edge_filter_ring_regression() {
    let rule = registry::construct("edge-filter").unwrap();
    let cells = vec![3, 1, 4, 1, 5, 9, 2];
    let next = step_ring(&rule, Lattice::OneDimNearest, &cells, 10, 0);
    assert_eq!(vec![3, 0, 4, 0, 5, 9, 0], next);

    let again = step_ring(&rule, Lattice::OneDimNearest, &next, 10, 1);
    assert_eq!(next, again);
}

#[test]
fn test_uniform_ring_collapses_under_edge_filter() {
    let cells = vec![6; 12];
    let next = step_ring(&EdgeFilter, Lattice::OneDimNextNearest, &cells, 8, 0);
    assert!(next.iter().all(|&s| s == 0));
}

proptest! {
    /// Survivors still exceed a neighbor that either survived unchanged or
    /// dropped to 0, and zeros never exceed anything, so one pass of the edge
    /// filter reaches a fixed point.
    #[test]
    fn test_edge_filter_reaches_fixed_point(cells in vec(0..16_u32, 3..40)) {
        for &lattice in &[Lattice::OneDimNearest, Lattice::OneDimNextNearest] {
            let once = step_ring(&EdgeFilter, lattice, &cells, 16, 0);
            let twice = step_ring(&EdgeFilter, lattice, &once, 16, 1);
            prop_assert_eq!(once, twice);
        }
    }
}
