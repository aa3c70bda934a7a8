//! The [`Cell`] type: one grid position with a state and its passable
//! neighbours.

use crate::geom::{Coord, Point};

/// What a cell currently represents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered by a search, waiting to be expanded.
    Frontier,
    /// Expanded by a search.
    Visited,
    /// Part of the reconstructed path.
    Path,
}

impl CellState {
    /// Whether the cell is one of the two run endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// A single grid cell.
///
/// The neighbour list is a cache filled by
/// [`Grid::recompute_neighbors`](crate::Grid::recompute_neighbors); it
/// reflects the barrier layout at the moment of that call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    size: i32,
    pub state: CellState,
    pub(crate) neighbors: Vec<Coord>,
}

impl Cell {
    pub(crate) fn new(coord: Coord, size: i32) -> Self {
        Self {
            coord,
            size,
            state: CellState::Empty,
            neighbors: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Passable neighbours as of the last recompute.
    #[inline]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    /// Top-left corner in pixels. Rows advance along the horizontal axis.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.coord.row * self.size, self.coord.col * self.size)
    }

    /// Side length in pixels.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }
}
