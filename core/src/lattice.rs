//! Lattice topologies and the order in which they list a cell's neighbors.
//!
//! A rule that only aggregates its neighbors (sums, counts) does not care
//! about order, but a rule that looks at one particular neighbor does. Each
//! `Lattice` fixes that order once so that hosts and rules agree on it:
//!
//! - one-dimensional lattices list neighbors from left to right, so the
//!   rightmost neighbor is last;
//! - square lattices list neighbors clockwise, ending with the left neighbor.

use std::fmt;

use crate::rule::State;

pub use NeighborPosition::*;

/// Position of a neighbor relative to the cell being updated.
///
/// Offsets use screen coordinates: X increases to the right and Y increases
/// downwards.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NeighborPosition {
    /// Two cells to the left (one-dimensional lattices only).
    FarLeft,
    Left,
    Right,
    /// Two cells to the right (one-dimensional lattices only).
    FarRight,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl NeighborPosition {
    /// Returns the `(dx, dy)` offset of the neighbor from the center cell.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            FarLeft => (-2, 0),
            Left => (-1, 0),
            Right => (1, 0),
            FarRight => (2, 0),
            Up => (0, -1),
            Down => (0, 1),
            UpLeft => (-1, -1),
            UpRight => (1, -1),
            DownLeft => (-1, 1),
            DownRight => (1, 1),
        }
    }
}

/// Adjacency structure of the grid a rule runs on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Lattice {
    /// 1D lattice where each cell sees its two nearest neighbors.
    OneDimNearest,
    /// 1D lattice where each cell sees the two nearest cells on each side.
    OneDimNextNearest,
    /// 2D square lattice with the four orthogonal neighbors.
    SquareVonNeumann,
    /// 2D square lattice with all eight surrounding neighbors.
    SquareMoore,
}

/// List of all lattices in order.
pub const LATTICES: &[Lattice] = &[
    Lattice::OneDimNearest,
    Lattice::OneDimNextNearest,
    Lattice::SquareVonNeumann,
    Lattice::SquareMoore,
];

impl Lattice {
    /// Returns a short identifier for the lattice, suitable for command-line
    /// arguments.
    pub const fn id(self) -> &'static str {
        match self {
            Lattice::OneDimNearest => "1d",
            Lattice::OneDimNextNearest => "1d-r2",
            Lattice::SquareVonNeumann => "square4",
            Lattice::SquareMoore => "square8",
        }
    }

    /// Returns the lattice with the given identifier, if there is one.
    pub fn from_id(id: &str) -> Option<Self> {
        LATTICES.iter().copied().find(|l| l.id().eq_ignore_ascii_case(id))
    }

    /// Returns the number of spatial dimensions of the lattice.
    pub const fn ndim(self) -> usize {
        match self {
            Lattice::OneDimNearest | Lattice::OneDimNextNearest => 1,
            Lattice::SquareVonNeumann | Lattice::SquareMoore => 2,
        }
    }

    /// Returns the neighbors of a cell, in the order they are passed to a
    /// rule's transition function.
    pub fn neighbor_order(self) -> &'static [NeighborPosition] {
        match self {
            Lattice::OneDimNearest => &[Left, Right],
            Lattice::OneDimNextNearest => &[FarLeft, Left, Right, FarRight],
            Lattice::SquareVonNeumann => &[Up, Right, Down, Left],
            Lattice::SquareMoore => &[UpLeft, Up, UpRight, Right, DownRight, Down, DownLeft, Left],
        }
    }

    /// Returns the number of neighbors each cell has.
    #[inline]
    pub fn neighbor_count(self) -> usize {
        self.neighbor_order().len()
    }

    /// Returns the index of a neighbor in the neighbor slice, or `None` if
    /// this lattice has no neighbor at that position.
    pub fn neighbor_index(self, position: NeighborPosition) -> Option<usize> {
        self.neighbor_order().iter().position(|&p| p == position)
    }

    /// Replaces the contents of `neighbors` with the neighbors of
    /// `cells[index]` on a one-dimensional ring, in this lattice's order. The
    /// ends of `cells` wrap around.
    ///
    /// # Panics
    ///
    /// Panics if the lattice is not one-dimensional or `index` is out of
    /// bounds.
    pub fn gather_ring_neighbors(self, cells: &[State], index: usize, neighbors: &mut Vec<State>) {
        assert_eq!(1, self.ndim(), "{} lattice is not one-dimensional", self);
        assert!(index < cells.len(), "cell index {} is outside the ring", index);
        let len = cells.len() as i64;
        neighbors.clear();
        neighbors.extend(self.neighbor_order().iter().map(|p| {
            let j = (index as i64 + i64::from(p.offset().0)).rem_euclid(len);
            cells[j as usize]
        }));
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lattice::OneDimNearest => "1D nearest-neighbor",
            Lattice::OneDimNextNearest => "1D next-nearest-neighbor",
            Lattice::SquareVonNeumann => "square (4 neighbors)",
            Lattice::SquareMoore => "square (8 neighbors)",
        };
        write!(f, "{}", name)
    }
}
