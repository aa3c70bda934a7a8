use std::fmt;
use std::str::FromStr;

use pathviz_core::{CellState, Coord, CoreError, Grid};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::bidirectional::Bidirectional;
use crate::dijkstra::Dijkstra;
use crate::traits::{Observer, Search, Step};

// ---------------------------------------------------------------------------
// Algorithm selection
// ---------------------------------------------------------------------------

/// The searches a run can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
    Bfs,
    Bidirectional,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Bidirectional,
        Algorithm::Bfs,
    ];

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Dijkstra => "Dijkstra's",
            Algorithm::Bfs => "BFS",
            Algorithm::Bidirectional => "Bidirectional",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by [`Algorithm::from_str`] for an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}` (expected astar, dijkstra, bfs or bidirectional)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            "bidirectional" | "bibfs" => Ok(Algorithm::Bidirectional),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end was reached. `path` runs start to end, both included.
    Found { path: Vec<Coord> },
    /// The reachable region was explored without meeting the end.
    Exhausted,
    /// The observer asked to stop.
    Cancelled,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            Outcome::Found { path } => Some(path),
            _ => None,
        }
    }

    /// Number of cells on the path, endpoints included.
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(<[Coord]>::len)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found { path } => write!(f, "path found, {} cells", path.len()),
            Outcome::Exhausted => f.write_str("no path"),
            Outcome::Cancelled => f.write_str("cancelled"),
        }
    }
}

// ---------------------------------------------------------------------------
// Driving
// ---------------------------------------------------------------------------

/// Step `search` to completion, rendering after every step.
///
/// Cancellation is checked before each step, so a run cancelled up front
/// leaves the grid untouched.
pub fn drive<S, O>(search: &mut S, grid: &mut Grid, observer: &mut O) -> Outcome
where
    S: Search,
    O: Observer + ?Sized,
{
    loop {
        if observer.cancelled() {
            log::debug!("run cancelled after {} expansions", search.expanded());
            return Outcome::Cancelled;
        }
        let step = search.step(grid);
        observer.render(grid);
        match step {
            Step::Continue => {}
            Step::Exhausted => return Outcome::Exhausted,
            Step::Found => {
                let path = search.trace(grid, observer);
                return Outcome::Found { path };
            }
        }
    }
}

/// Run `kind` from `start` to `end` on `grid`.
///
/// `start` and `end` must hold [`CellState::Start`] and [`CellState::End`].
/// Neighbour lists are rebuilt first, so barriers painted since the last run
/// are respected.
pub fn run_algorithm<O>(
    kind: Algorithm,
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    observer: &mut O,
) -> Result<Outcome, CoreError>
where
    O: Observer + ?Sized,
{
    if grid.state(start)? != CellState::Start {
        return Err(CoreError::InvalidRunRequest("start cell is not marked as start"));
    }
    if grid.state(end)? != CellState::End {
        return Err(CoreError::InvalidRunRequest("end cell is not marked as end"));
    }
    grid.recompute_neighbors();
    log::info!("{kind} run from {start} to {end} on a {0}x{0} grid", grid.rows());

    let (outcome, expanded) = match kind {
        Algorithm::AStar => run_one(AStar::new(grid, start, end)?, grid, observer),
        Algorithm::Dijkstra => run_one(Dijkstra::new(grid, start, end)?, grid, observer),
        Algorithm::Bfs => run_one(Bfs::new(grid, start, end)?, grid, observer),
        Algorithm::Bidirectional => {
            run_one(Bidirectional::new(grid, start, end)?, grid, observer)
        }
    };

    log::info!("{kind} finished: {outcome} ({expanded} cells expanded)");
    Ok(outcome)
}

fn run_one<S, O>(mut search: S, grid: &mut Grid, observer: &mut O) -> (Outcome, usize)
where
    S: Search,
    O: Observer + ?Sized,
{
    let outcome = drive(&mut search, grid, observer);
    (outcome, search.expanded())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_json() {
        let out = Outcome::Found {
            path: vec![Coord::new(1, 2), Coord::new(1, 3)],
        };
        let json = serde_json::to_string(&out).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
    }

    #[test]
    fn algorithm_json() {
        let json = serde_json::to_string(&Algorithm::Bidirectional).unwrap();
        assert_eq!(json, "\"Bidirectional\"");
    }
}
