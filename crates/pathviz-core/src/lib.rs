//! **pathviz-core**: grid model and shared types for the pathfinding
//! visualizer.
//!
//! This crate provides the search grid ([`Grid`] of [`Cell`]s addressed by
//! [`Coord`]), the error taxonomy, input events, colours, and the screen
//! plumbing ([`Canvas`], [`Driver`], [`Screen`]) that front-ends build on.

pub mod app;
pub mod canvas;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod style;

pub use app::{Driver, Screen};
pub use canvas::{Canvas, Frame, FrameCell, Glyph};
pub use cell::{Cell, CellState};
pub use error::CoreError;
pub use geom::{Coord, Point};
pub use grid::Grid;
pub use messages::*;
pub use style::{Color, Palette, Style};
