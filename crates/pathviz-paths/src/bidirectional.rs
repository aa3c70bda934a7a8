use pathviz_core::{CellState, Coord, CoreError, Grid};

use crate::bfs::{expand_fifo, seed_fifo};
use crate::path::trace_path;
use crate::state::{Tables, endpoints, paint};
use crate::traits::{Observer, Search, Step};

/// Two breadth-first searches, one from each endpoint, advancing one cell
/// each per step until some cell has been queued by both.
///
/// The halves keep separate predecessor, distance and membership tables.
/// Because the grid is bipartite and both halves expand in FIFO order, any
/// cell queued by both at the first meeting lies on a shortest path; the
/// first such cell in row-major order is used.
#[derive(Debug, Clone)]
pub struct Bidirectional {
    forward: Tables,
    backward: Tables,
    meet: Option<usize>,
}

impl Bidirectional {
    /// Prepare a search between `start` and `end`.
    pub fn new(grid: &Grid, start: Coord, end: Coord) -> Result<Self, CoreError> {
        let (s, e) = endpoints(grid, start, end)?;
        Ok(Self {
            forward: seed_fifo(grid.len(), s),
            backward: seed_fifo(grid.len(), e),
            meet: None,
        })
    }

    /// The cell where the two halves met, once found.
    pub fn meeting_point(&self, grid: &Grid) -> Option<Coord> {
        self.meet.map(|m| grid.coord(m))
    }
}

impl Search for Bidirectional {
    fn step(&mut self, grid: &mut Grid) -> Step {
        self.forward.settle_pending(grid);
        self.backward.settle_pending(grid);

        if self.forward.frontier.is_empty() && self.backward.frontier.is_empty() {
            return Step::Exhausted;
        }

        // Before this step no cell was queued by both halves, so the cells
        // that become shared now are all the shared cells.
        let mut meet: Option<usize> = None;
        let mut note = |ni: usize| meet = Some(meet.map_or(ni, |m| m.min(ni)));

        if let Some((ci, _)) = self.forward.frontier.pop() {
            let other = &self.backward.queued;
            expand_fifo(&mut self.forward, grid, ci, |ni| {
                if other[ni] {
                    note(ni);
                }
            });
        }
        if let Some((ci, _)) = self.backward.frontier.pop() {
            let other = &self.forward.queued;
            expand_fifo(&mut self.backward, grid, ci, |ni| {
                if other[ni] {
                    note(ni);
                }
            });
        }

        match meet {
            Some(m) => {
                self.meet = Some(m);
                self.forward.settle_frontier(grid);
                self.backward.settle_frontier(grid);
                Step::Found
            }
            None => Step::Continue,
        }
    }

    fn trace<O: Observer + ?Sized>(&mut self, grid: &mut Grid, observer: &mut O) -> Vec<Coord> {
        let Some(m) = self.meet else {
            return Vec::new();
        };
        let mut path = trace_path(grid, &self.forward.came_from, m, observer);
        let mut back = trace_path(grid, &self.backward.came_from, m, observer);
        paint(grid, m, CellState::Path);
        observer.render(grid);
        // `back` runs end..=meet; drop the shared meeting cell.
        back.pop();
        back.reverse();
        path.extend(back);
        path
    }

    fn came_from(&self) -> &[Option<usize>] {
        &self.forward.came_from
    }

    fn expanded(&self) -> usize {
        self.forward.expanded + self.backward.expanded
    }
}
