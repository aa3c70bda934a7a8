//! pathviz: a terminal pathfinding visualizer.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use clap::Parser;
use pathviz::{Config, render, session};
use pathviz_core::Screen;
use pathviz_crossterm::CrosstermDriver;

/// Send log output to `path`; the terminal itself is taken by the UI.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    init_logging(&config.log_path())?;

    let session = config.session();
    session.validate()?;
    log::info!(
        "starting with a {0}x{0} grid over {1} pixels",
        session.rows,
        session.width
    );

    let driver = CrosstermDriver::new().with_mouse(session.mouse);
    let (width, height) = render::canvas_size(session.rows);
    let mut screen = Screen::new(driver, width, height);
    screen.init()?;
    let res = session::run(&mut screen, &session);
    screen.close();

    if let Err(e) = &res {
        log::error!("session failed: {e}");
    }
    res
}
