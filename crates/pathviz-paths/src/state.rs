use pathviz_core::{CellState, Coord, CoreError, Grid};

use crate::frontier::Frontier;

/// Sentinel distance for cells not reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Per-run tables
// ---------------------------------------------------------------------------

/// Bookkeeping for one search direction, indexed by flat cell index.
///
/// Created when a run starts and dropped with the search.
#[derive(Debug, Clone)]
pub(crate) struct Tables {
    pub(crate) frontier: Frontier,
    pub(crate) came_from: Vec<Option<usize>>,
    pub(crate) dist: Vec<u32>,
    /// Frontier membership. What "member" means is up to each search.
    pub(crate) queued: Vec<bool>,
    /// Cell expanded by the previous step, still to be marked visited.
    pub(crate) pending: Option<usize>,
    pub(crate) expanded: usize,
    /// Scratch buffer for neighbour lists.
    pub(crate) nbuf: Vec<Coord>,
}

impl Tables {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            frontier: Frontier::new(),
            came_from: vec![None; len],
            dist: vec![UNREACHABLE; len],
            queued: vec![false; len],
            pending: None,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Put the origin of a search on the frontier at distance 0.
    pub(crate) fn seed(&mut self, idx: usize, key: u64) {
        self.dist[idx] = 0;
        self.queued[idx] = true;
        self.frontier.push(idx, key);
    }

    /// Copy the neighbour list of `idx` into the scratch buffer, so the
    /// grid can be repainted while walking it.
    pub(crate) fn load_neighbors(&mut self, grid: &Grid, idx: usize) {
        self.nbuf.clear();
        self.nbuf.extend_from_slice(grid.cell_at(idx).neighbors());
    }

    /// Mark the previously expanded cell as visited.
    pub(crate) fn settle_pending(&mut self, grid: &mut Grid) {
        if let Some(idx) = self.pending.take() {
            paint(grid, idx, CellState::Visited);
        }
    }

    /// Mark every frontier member as visited.
    pub(crate) fn settle_frontier(&self, grid: &mut Grid) {
        for (idx, _) in self.queued.iter().enumerate().filter(|(_, q)| **q) {
            paint(grid, idx, CellState::Visited);
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Repaint a cell unless it is the start or the end.
#[inline]
pub(crate) fn paint(grid: &mut Grid, idx: usize, state: CellState) {
    if !grid.cell_at(idx).state.is_endpoint() {
        grid.set_state_at(idx, state);
    }
}

/// Flat indices of a start/end pair.
pub(crate) fn endpoints(grid: &Grid, start: Coord, end: Coord) -> Result<(usize, usize), CoreError> {
    let s = grid.index(start).ok_or(CoreError::OutOfBounds(start))?;
    let e = grid.index(end).ok_or(CoreError::OutOfBounds(end))?;
    if s == e {
        return Err(CoreError::InvalidRunRequest("start and end are the same cell"));
    }
    Ok((s, e))
}
