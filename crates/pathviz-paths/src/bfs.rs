use pathviz_core::{CellState, Coord, CoreError, Grid};

use crate::path::trace_path;
use crate::state::{Tables, endpoints, paint};
use crate::traits::{Observer, Search, Step};

/// Breadth-first search, one expansion per step.
///
/// The frontier is keyed by insertion order alone. A cell is queued the
/// first time it is seen and never relaxed afterwards; with unit moves and
/// FIFO order that first visit is already the shortest.
#[derive(Debug, Clone)]
pub struct Bfs {
    end: usize,
    t: Tables,
}

impl Bfs {
    /// Prepare a search from `start` to `end`.
    pub fn new(grid: &Grid, start: Coord, end: Coord) -> Result<Self, CoreError> {
        let (s, e) = endpoints(grid, start, end)?;
        Ok(Self {
            end: e,
            t: seed_fifo(grid.len(), s),
        })
    }
}

/// Tables for one FIFO search seeded at `origin`.
pub(crate) fn seed_fifo(len: usize, origin: usize) -> Tables {
    let mut t = Tables::new(len);
    t.dist[origin] = 0;
    t.queued[origin] = true;
    t.frontier.push_fifo(origin);
    t
}

/// Expand `ci`: queue every neighbour not seen before, reporting each newly
/// queued cell to `on_queue`.
pub(crate) fn expand_fifo(
    t: &mut Tables,
    grid: &mut Grid,
    ci: usize,
    mut on_queue: impl FnMut(usize),
) {
    t.expanded += 1;
    let d = t.dist[ci] + 1;
    t.load_neighbors(grid, ci);
    for k in 0..t.nbuf.len() {
        let Some(ni) = grid.index(t.nbuf[k]) else {
            continue;
        };
        if t.queued[ni] {
            continue;
        }
        t.dist[ni] = d;
        t.came_from[ni] = Some(ci);
        t.queued[ni] = true;
        t.frontier.push_fifo(ni);
        paint(grid, ni, CellState::Frontier);
        on_queue(ni);
    }
    t.pending = Some(ci);
}

impl Search for Bfs {
    fn step(&mut self, grid: &mut Grid) -> Step {
        self.t.settle_pending(grid);

        let Some((ci, _)) = self.t.frontier.pop() else {
            return Step::Exhausted;
        };

        if ci == self.end {
            // Membership is never cleared, so this covers every cell seen.
            self.t.settle_frontier(grid);
            return Step::Found;
        }

        expand_fifo(&mut self.t, grid, ci, |_| {});
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::drive;
    use crate::{Headless, Outcome};

    fn setup(picture: &str) -> (Grid, Bfs) {
        let mut g = Grid::from_picture(picture).unwrap();
        g.recompute_neighbors();
        let s = g.find(CellState::Start)[0];
        let e = g.find(CellState::End)[0];
        let b = Bfs::new(&g, s, e).unwrap();
        (g, b)
    }

    #[test]
    fn shortest_on_open_grid() {
        let (mut g, mut b) = setup(
            "
            S....
            .....
            .....
            .....
            ....E
            ",
        );
        let out = drive(&mut b, &mut g, &mut Headless);
        assert_eq!(out.path_len(), Some(9));
    }

    #[test]
    fn cells_are_queued_once() {
        let (mut g, mut b) = setup(
            "
            S...
            ....
            ....
            ...E
            ",
        );
        while b.step(&mut g) == Step::Continue {}
        // Every queued cell has exactly one predecessor, except the start.
        let linked = b.came_from().iter().filter(|p| p.is_some()).count();
        let queued = b.t.queued.iter().filter(|q| **q).count();
        assert_eq!(linked + 1, queued);
    }

    #[test]
    fn fifo_order_expands_by_level() {
        let (mut g, mut b) = setup(
            "
            .....
            .....
            ..S..
            .....
            ....E
            ",
        );
        let mut last = 0;
        let centre = Coord::new(2, 2);
        loop {
            let before = b.expanded();
            if b.step(&mut g) != Step::Continue {
                break;
            }
            assert_eq!(b.expanded(), before + 1);
            let ci = b.t.pending.unwrap();
            let level = g.coord(ci).manhattan(centre);
            assert!(level >= last, "level went back from {last} to {level}");
            last = level;
        }
    }

    #[test]
    fn no_path_through_wall() {
        let (mut g, mut b) = setup(
            "
            S.#..
            ..#..
            ..#..
            ..#..
            ..#.E
            ",
        );
        assert_eq!(drive(&mut b, &mut g, &mut Headless), Outcome::Exhausted);
        // Left side fully explored, right side untouched.
        assert_eq!(b.expanded(), 10);
        assert_eq!(g.count(CellState::Visited) + g.count(CellState::Frontier), 9);
    }
}
