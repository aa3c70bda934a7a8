use pathviz_core::{CellState, Coord, Grid};

use crate::state::paint;
use crate::traits::Observer;

/// Walk predecessor links from `from` back to the cell with no predecessor,
/// painting every cell passed as [`CellState::Path`] and rendering once per
/// cell, so the path grows on screen from the target backwards.
///
/// `from` itself is not painted. Returns the chain in origin-to-`from`
/// order, both ends included.
pub fn trace_path<O: Observer + ?Sized>(
    grid: &mut Grid,
    came_from: &[Option<usize>],
    from: usize,
    observer: &mut O,
) -> Vec<Coord> {
    let mut chain = vec![grid.coord(from)];
    let mut cur = from;
    while let Some(prev) = came_from[cur] {
        cur = prev;
        chain.push(grid.coord(cur));
        paint(grid, cur, CellState::Path);
        observer.render(grid);
    }
    chain.reverse();
    chain
}
