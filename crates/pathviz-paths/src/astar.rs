use pathviz_core::{CellState, Coord, CoreError, Grid};

use crate::path::trace_path;
use crate::state::{Tables, endpoints, paint};
use crate::traits::{Observer, Search, Step};

/// A* search with the Manhattan heuristic, one expansion per step.
///
/// The frontier is keyed by `(f, seq)` with `f = g + manhattan(cell, end)`.
/// A cell is pushed only when it is not already on the frontier, so each
/// cell has at most one entry.
#[derive(Debug, Clone)]
pub struct AStar {
    end: usize,
    goal: Coord,
    t: Tables,
    f: Vec<u32>,
}

impl AStar {
    /// Prepare a search from `start` to `end`.
    pub fn new(grid: &Grid, start: Coord, end: Coord) -> Result<Self, CoreError> {
        let (s, e) = endpoints(grid, start, end)?;
        let mut t = Tables::new(grid.len());
        let mut f = vec![u32::MAX; grid.len()];
        f[s] = start.manhattan(end);
        t.seed(s, f[s] as u64);
        Ok(Self {
            end: e,
            goal: end,
            t,
            f,
        })
    }
}

impl Search for AStar {
    fn step(&mut self, grid: &mut Grid) -> Step {
        self.t.settle_pending(grid);

        let Some((ci, _)) = self.t.frontier.pop() else {
            return Step::Exhausted;
        };
        self.t.queued[ci] = false;

        if ci == self.end {
            self.t.settle_frontier(grid);
            return Step::Found;
        }

        self.t.expanded += 1;
        let g = self.t.dist[ci] + 1;
        self.t.load_neighbors(grid, ci);

        for k in 0..self.t.nbuf.len() {
            let n = self.t.nbuf[k];
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if g >= self.t.dist[ni] {
                continue;
            }
            self.t.came_from[ni] = Some(ci);
            self.t.dist[ni] = g;
            self.f[ni] = g + n.manhattan(self.goal);
            // A resident cell keeps its entry and the key it was pushed with.
            if !self.t.queued[ni] {
                self.t.frontier.push(ni, self.f[ni] as u64);
                self.t.queued[ni] = true;
                paint(grid, ni, CellState::Frontier);
            }
        }

        self.t.pending = Some(ci);
        Step::Continue
    }

    fn trace<O: Observer + ?Sized>(&mut self, grid: &mut Grid, observer: &mut O) -> Vec<Coord> {
        trace_path(grid, &self.t.came_from, self.end, observer)
    }

    fn came_from(&self) -> &[Option<usize>] {
        &self.t.came_from
    }

    fn expanded(&self) -> usize {
        self.t.expanded
    }
}
