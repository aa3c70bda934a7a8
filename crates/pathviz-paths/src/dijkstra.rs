use pathviz_core::{CellState, Coord, CoreError, Grid};

use crate::path::trace_path;
use crate::state::{Tables, endpoints, paint};
use crate::traits::{Observer, Search, Step};

/// Dijkstra's algorithm, one expansion per step.
///
/// The frontier is keyed by `(distance, seq)`. The cost of a move is the
/// Manhattan distance between the two cells, which is 1 for every move on a
/// 4-connected grid.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    end: usize,
    t: Tables,
}

impl Dijkstra {
    /// Prepare a search from `start` to `end`.
    pub fn new(grid: &Grid, start: Coord, end: Coord) -> Result<Self, CoreError> {
        let (s, e) = endpoints(grid, start, end)?;
        let mut t = Tables::new(grid.len());
        t.seed(s, 0);
        Ok(Self { end: e, t })
    }

    /// Pop the next entry whose key still matches the best known distance.
    fn pop(&mut self) -> Option<usize> {
        while let Some((idx, key)) = self.t.frontier.pop() {
            if self.t.queued[idx] && key == self.t.dist[idx] as u64 {
                return Some(idx);
            }
        }
        None
    }
}

impl Search for Dijkstra {
    fn step(&mut self, grid: &mut Grid) -> Step {
        self.t.settle_pending(grid);

        let Some(ci) = self.pop() else {
            return Step::Exhausted;
        };
        self.t.queued[ci] = false;

        if ci == self.end {
            self.t.settle_frontier(grid);
            return Step::Found;
        }

        self.t.expanded += 1;
        let here = grid.coord(ci);
        let d = self.t.dist[ci];
        self.t.load_neighbors(grid, ci);

        for k in 0..self.t.nbuf.len() {
            let n = self.t.nbuf[k];
            let Some(ni) = grid.index(n) else {
                continue;
            };
            let alt = d + here.manhattan(n);
            if alt >= self.t.dist[ni] {
                continue;
            }
            self.t.dist[ni] = alt;
            self.t.came_from[ni] = Some(ci);
            self.t.frontier.push(ni, alt as u64);
            self.t.queued[ni] = true;
            paint(grid, ni, CellState::Frontier);
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
