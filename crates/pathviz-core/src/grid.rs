//! The [`Grid`] type: a square arena of [`Cell`]s addressed by [`Coord`] or
//! flat index.
//!
//! Cells live in one contiguous row-major `Vec`. Anything that needs to refer
//! to a cell from outside (predecessor links, distance tables, frontier
//! membership) uses the flat index returned by [`Grid::index`].

use crate::cell::{Cell, CellState};
use crate::error::CoreError;
use crate::geom::{Coord, Point};

/// A square grid of `rows x rows` cells.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cell_size: i32,
}

impl Grid {
    /// Allocate a fresh grid of `rows x rows` empty cells laid out over
    /// `pixel_width` pixels.
    ///
    /// The cell count must fit in an `i32`, so flat indices never overflow.
    pub fn new(rows: i32, pixel_width: i32) -> Result<Self, CoreError> {
        let bad = CoreError::InvalidDimension {
            rows,
            width: pixel_width,
        };
        if rows <= 0 || pixel_width <= 0 || pixel_width / rows == 0 {
            return Err(bad);
        }
        let Some(len) = rows.checked_mul(rows) else {
            return Err(bad);
        };
        let cell_size = pixel_width / rows;
        let mut cells = Vec::with_capacity(len as usize);
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(Coord::new(row, col), cell_size));
            }
        }
        Ok(Self {
            cells,
            rows,
            cell_size,
        })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Side length of one cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.rows
    }

    /// Flat index of `c`, or `None` if it lies outside the grid.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        self.contains(c)
            .then(|| (c.row * self.rows + c.col) as usize)
    }

    /// Coordinate of a flat index. The index must come from this grid.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let rows = self.rows as usize;
        Coord::new((idx / rows) as i32, (idx % rows) as i32)
    }

    /// Bounds-checked lookup.
    pub fn cell(&self, c: Coord) -> Result<&Cell, CoreError> {
        self.index(c)
            .map(|i| &self.cells[i])
            .ok_or(CoreError::OutOfBounds(c))
    }

    /// Bounds-checked mutable lookup.
    pub fn cell_mut(&mut self, c: Coord) -> Result<&mut Cell, CoreError> {
        match self.index(c) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(CoreError::OutOfBounds(c)),
        }
    }

    /// Cell by flat index. Panics on an index not produced by this grid.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Current state of the cell at `c`.
    pub fn state(&self, c: Coord) -> Result<CellState, CoreError> {
        self.cell(c).map(|cell| cell.state)
    }

    /// Overwrite the state of the cell at `c`.
    ///
    /// No validation is done beyond bounds: keeping a single Start and a
    /// single End is the caller's job.
    pub fn set_state(&mut self, c: Coord, state: CellState) -> Result<(), CoreError> {
        self.cell_mut(c)?.state = state;
        Ok(())
    }

    /// Overwrite the state of the cell at a flat index.
    #[inline]
    pub fn set_state_at(&mut self, idx: usize, state: CellState) {
        self.cells[idx].state = state;
    }

    /// Rebuild every cell's neighbour list from its in-bounds, non-barrier
    /// orthogonal neighbours.
    ///
    /// Call once right before a search, after painting is finished.
    pub fn recompute_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let here = self.cells[i].coord();
            let mut next = std::mem::take(&mut self.cells[i].neighbors);
            next.clear();
            for n in here.neighbors_4() {
                if let Some(ni) = self.index(n) {
                    if !self.cells[ni].is_barrier() {
                        next.push(n);
                    }
                }
            }
            self.cells[i].neighbors = next;
        }
    }

    /// Map a pixel position to the cell under it. Rows advance along x.
    pub fn cell_at_pixel(&self, p: Point) -> Option<Coord> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let c = Coord::new(p.x / self.cell_size, p.y / self.cell_size);
        self.contains(c).then_some(c)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Coordinates of every cell currently in `state`, row-major.
    pub fn find(&self, state: CellState) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|c| c.state == state)
            .map(Cell::coord)
            .collect()
    }

    /// Row-major iterator over cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Parse a grid from a picture, one line per row:
    /// `.` empty, `#` barrier, `S` start, `E` end. Cells are one pixel wide.
    ///
    /// Mostly useful for tests and demos.
    pub fn from_picture(picture: &str) -> Result<Self, CoreError> {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let mut grid = Grid::new(rows, rows)?;
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != rows {
                return Err(CoreError::InvalidDimension {
                    rows,
                    width: line.chars().count() as i32,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let state = match ch {
                    '#' => CellState::Barrier,
                    'S' => CellState::Start,
                    'E' => CellState::End,
                    _ => CellState::Empty,
                };
                grid.set_state(Coord::new(r as i32, c as i32), state)?;
            }
        }
        Ok(grid)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
