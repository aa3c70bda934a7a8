//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use pathviz_core::{CoreError, Grid, Palette};
use pathviz_paths::Algorithm;

/// Paint a grid in the terminal and watch a search explore it.
#[derive(Parser, Debug, Clone)]
#[command(name = "pathviz", version, about)]
pub struct Config {
    /// Cells along each side of the square grid.
    #[arg(long, env = "PATHVIZ_ROWS", default_value_t = 50)]
    pub rows: i32,

    /// Logical pixel width of the grid; the cell size is width / rows.
    #[arg(long, env = "PATHVIZ_WIDTH", default_value_t = 800)]
    pub width: i32,

    /// Skip the menu and open the visualizer with this algorithm
    /// (astar, dijkstra, bfs, bidirectional).
    #[arg(long)]
    pub algorithm: Option<Algorithm>,

    /// Where log output goes. Defaults to pathviz.log in the temp dir.
    #[arg(long, env = "PATHVIZ_LOG")]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Config {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("pathviz.log"))
    }

    /// The settings a session runs with.
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            width: self.width,
            algorithm: self.algorithm,
            mouse: !self.no_mouse,
            palette: Palette::default(),
        }
    }
}

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub rows: i32,
    pub width: i32,
    /// Open straight into the visualizer with this algorithm.
    pub algorithm: Option<Algorithm>,
    pub mouse: bool,
    pub palette: Palette,
}

impl SessionConfig {
    /// Check the grid dimensions before the terminal is taken over.
    pub fn validate(&self) -> Result<(), CoreError> {
        Grid::new(self.rows, self.width).map(|_| ())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            width: 800,
            algorithm: None,
            mouse: true,
            palette: Palette::default(),
        }
    }
}
