//! One-dimensional ring of cells, updated synchronously.

use anyhow::{ensure, Context, Result};
use itertools::Itertools;

use cellrules_core::prelude::*;
use cellrules_core::rule::check_inputs;

/// Characters used to draw cell states, from lowest to highest.
const PALETTE: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Fixed-width row of cells whose ends wrap around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    cells: Vec<State>,
    lattice: Lattice,
    num_states: u32,
    generation: u64,
}
impl Ring {
    /// Creates a ring of `width` cells in state 0, except for the seeds.
    pub fn new(
        width: usize,
        lattice: Lattice,
        num_states: u32,
        seeds: &[(usize, State)],
    ) -> Result<Self> {
        ensure!(width > 0, "ring must have at least one cell");
        ensure!(
            lattice.ndim() == 1,
            "a ring can only use a one-dimensional lattice, not {}",
            lattice,
        );
        check_inputs(0, &[], num_states)?;

        let mut cells = vec![0; width];
        for &(index, state) in seeds {
            ensure!(index < width, "seed index {} is outside the ring", index);
            check_inputs(state, &[], num_states)
                .with_context(|| format!("invalid seed at index {}", index))?;
            cells[index] = state;
        }
        Ok(Self {
            cells,
            lattice,
            num_states,
            generation: 0,
        })
    }

    /// Returns the states of the cells, left to right.
    pub fn cells(&self) -> &[State] {
        &self.cells
    }
    /// Returns the number of generations simulated so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances every cell by one generation. Neighbors are read from the
    /// previous generation only.
    pub fn step(&mut self, rule: &dyn Rule) {
        let mut neighbors = Vec::with_capacity(self.lattice.neighbor_count());
        let next = (0..self.cells.len())
            .map(|i| {
                self.lattice.gather_ring_neighbors(&self.cells, i, &mut neighbors);
                rule.transition(self.cells[i], &neighbors, self.num_states, self.generation)
            })
            .collect();
        self.cells = next;
        self.generation += 1;
    }

    /// Draws the ring as one line of text.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|&s| {
                let i = u64::from(s) * PALETTE.len() as u64 / u64::from(self.num_states);
                PALETTE[i as usize]
            })
            .join("")
    }
}
