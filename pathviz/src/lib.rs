//! pathviz: paint walls on a grid in the terminal, drop a start and an end,
//! and watch A*, Dijkstra's, BFS or bidirectional BFS search it step by step.
//!
//! The search engine lives in `pathviz-paths`; this crate is the front-end:
//! command-line [`config`], the algorithm [`menu`], the interaction
//! [`controller`], grid [`render`]ing, and the [`session`] loop tying them to
//! a [`pathviz_core::Screen`].

pub mod config;
pub mod controller;
pub mod menu;
pub mod render;
pub mod session;

pub use config::{Config, SessionConfig};
pub use controller::{Control, Controller, Phase};
pub use menu::{Menu, MenuAction, MenuKeys};
