//! Incremental grid searches for the pathfinding visualizer.
//!
//! Each search is a small state machine over a [`pathviz_core::Grid`]:
//!
//! - **A\*** with the Manhattan heuristic ([`AStar`])
//! - **Dijkstra** uniform-cost search ([`Dijkstra`])
//! - **BFS** breadth-first search ([`Bfs`])
//! - **Bidirectional BFS** growing from both ends ([`Bidirectional`])
//!
//! A search advances one expansion per [`Search::step`], repainting the cells
//! it touches. [`drive`] steps a search to completion and hands every
//! intermediate grid to an [`Observer`], which is also asked between steps
//! whether the run should stop. [`run_algorithm`] is the single entry point
//! front-ends use.
//!
//! # Cell colours during a run
//!
//! | State | Meaning |
//! |---|---|
//! | `Frontier` | queued, not yet expanded |
//! | `Visited` | expanded (painted one step after expansion) |
//! | `Path` | on the reconstructed shortest path |
//!
//! The start and end cells keep their colours for the whole run.

mod astar;
mod bfs;
mod bidirectional;
mod dijkstra;
mod frontier;
mod path;
mod scheduler;
mod state;
mod traits;

pub use astar::AStar;
pub use bfs::Bfs;
pub use bidirectional::Bidirectional;
pub use dijkstra::Dijkstra;
pub use frontier::Frontier;
pub use path::trace_path;
pub use scheduler::{Algorithm, Outcome, ParseAlgorithmError, drive, run_algorithm};
pub use state::UNREACHABLE;
pub use traits::{Headless, Hooks, Observer, Search, Step};
