//! The session loop: menu, visualizer, and live runs over one [`Screen`].

use std::error::Error;
use std::time::Duration;

use pathviz_core::{Driver, Grid, Msg, Palette, Screen};
use pathviz_paths::{Algorithm, Observer};

use crate::config::SessionConfig;
use crate::controller::{Control, Controller};
use crate::menu::{Menu, MenuAction};
use crate::render;

/// How long an idle screen waits for input before redrawing.
const POLL_WAIT: Duration = Duration::from_millis(50);

/// How the visualizer screen was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Menu,
    Quit,
}

/// Run menus and visualizers until the user quits.
///
/// The screen must already be initialised; closing it is left to the caller.
pub fn run<D: Driver>(screen: &mut Screen<D>, config: &SessionConfig) -> Result<(), Box<dyn Error>> {
    let mut menu = Menu::default();
    let mut next = config.algorithm;
    loop {
        let kind = match next.take() {
            Some(kind) => kind,
            None => match pick(screen, &mut menu)? {
                Some(kind) => kind,
                None => return Ok(()),
            },
        };
        log::info!("opening visualizer for {kind}");
        if visualize(screen, config, kind)? == Exit::Quit {
            return Ok(());
        }
    }
}

/// Show the menu until an algorithm is picked (`Some`) or the user quits.
fn pick<D: Driver>(screen: &mut Screen<D>, menu: &mut Menu) -> Result<Option<Algorithm>, Box<dyn Error>> {
    loop {
        menu.draw(screen.canvas());
        screen.present()?;
        let width = screen.canvas().width();
        for msg in screen.poll(POLL_WAIT)? {
            match menu.update(&msg, width) {
                MenuAction::Invoke => return Ok(Some(menu.selected())),
                MenuAction::Quit => return Ok(None),
                MenuAction::Move | MenuAction::Pass => {}
            }
        }
    }
}

fn visualize<D: Driver>(
    screen: &mut Screen<D>,
    config: &SessionConfig,
    kind: Algorithm,
) -> Result<Exit, Box<dyn Error>> {
    let mut ctl = Controller::new(config.rows, config.width, kind)?;
    // The menu may have drawn outside the grid area.
    screen.canvas().fill(Default::default());
    loop {
        let status = render::status_text(kind, false, ctl.last_outcome());
        render::draw_view(screen.canvas(), ctl.grid(), &config.palette, &status);
        screen.present()?;

        for msg in screen.poll(POLL_WAIT)? {
            match ctl.handle(&msg) {
                Control::Continue => {}
                Control::Leave => return Ok(Exit::Menu),
                Control::Quit => return Ok(Exit::Quit),
                Control::Run => {
                    let mut view = LiveView::new(screen, &config.palette, kind);
                    let outcome = ctl.run(&mut view)?;
                    if let Some(e) = view.error {
                        return Err(e);
                    }
                    if view.quit {
                        return Ok(Exit::Quit);
                    }
                    log::debug!("run ended: {outcome}");
                    // Input that arrived during the run belonged to it.
                    break;
                }
            }
        }
    }
}

/// Observer that draws each step to the screen and watches for Escape or
/// a quit request between steps.
struct LiveView<'a, D: Driver> {
    screen: &'a mut Screen<D>,
    palette: &'a Palette,
    status: String,
    quit: bool,
    error: Option<Box<dyn Error>>,
}

impl<'a, D: Driver> LiveView<'a, D> {
    fn new(screen: &'a mut Screen<D>, palette: &'a Palette, kind: Algorithm) -> Self {
        Self {
            screen,
            palette,
            status: render::status_text(kind, true, None),
            quit: false,
            error: None,
        }
    }
}

impl<D: Driver> Observer for LiveView<'_, D> {
    fn render(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        render::draw_view(self.screen.canvas(), grid, self.palette, &self.status);
        if let Err(e) = self.screen.present() {
            self.error = Some(e);
        }
    }

    fn cancelled(&mut self) -> bool {
        if self.error.is_some() {
            return true;
        }
        match self.screen.poll(Duration::ZERO) {
            Ok(msgs) => {
                self.quit = msgs.iter().any(|m| *m == Msg::Quit);
                msgs.iter().any(Msg::is_interrupt)
            }
            Err(e) => {
                self.error = Some(e);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use pathviz_core::{Coord, Frame, Key, MouseAction, Point};

    use crate::render::term_pos;

    /// Replays one batch of messages per idle poll, then asks to quit.
    /// Zero-wait polls (the cancellation checks of a run) are fed from a
    /// separate queue and see nothing once it is empty.
    #[derive(Default)]
    struct ScriptDriver {
        idle: VecDeque<Vec<Msg>>,
        during_run: VecDeque<Vec<Msg>>,
        flushes: usize,
        polls: usize,
    }

    impl ScriptDriver {
        fn new(idle: Vec<Vec<Msg>>, during_run: Vec<Vec<Msg>>) -> Self {
            Self {
                idle: idle.into(),
                during_run: during_run.into(),
                ..Self::default()
            }
        }
    }

    impl Driver for ScriptDriver {
        fn init(&mut self) -> Result<(), Box<dyn Error>> {
            Ok(())
        }

        fn poll_msgs(&mut self, wait: Duration, out: &mut Vec<Msg>) -> Result<(), Box<dyn Error>> {
            if wait.is_zero() {
                if let Some(batch) = self.during_run.pop_front() {
                    out.extend(batch);
                }
                return Ok(());
            }
            self.polls += 1;
            match self.idle.pop_front() {
                Some(batch) => out.extend(batch),
                None => out.push(Msg::Quit),
            }
            Ok(())
        }

        fn flush(&mut self, _frame: Frame) -> Result<(), Box<dyn Error>> {
            self.flushes += 1;
            Ok(())
        }

        fn close(&mut self) {}
    }

    fn config(algorithm: Option<Algorithm>) -> SessionConfig {
        SessionConfig {
            rows: 8,
            width: 80,
            algorithm,
            ..SessionConfig::default()
        }
    }

    fn screen(
        idle: Vec<Vec<Msg>>,
        during_run: Vec<Vec<Msg>>,
        cfg: &SessionConfig,
    ) -> Screen<ScriptDriver> {
        let (w, h) = render::canvas_size(cfg.rows);
        Screen::new(ScriptDriver::new(idle, during_run), w, h)
    }

    fn click(c: Coord) -> Msg {
        let g = Grid::new(8, 80).unwrap();
        Msg::mouse(MouseAction::Main, term_pos(&g, c).unwrap())
    }

    fn status_row(screen: &mut Screen<ScriptDriver>, y: i32) -> String {
        let c = screen.canvas();
        (0..c.width()).map(|x| c.at(Point::new(x, y)).ch).collect()
    }

    #[test]
    fn preset_algorithm_runs_to_a_path() {
        let cfg = config(Some(Algorithm::AStar));
        let mut s = screen(
            vec![
                vec![click(Coord::new(0, 0)), click(Coord::new(7, 7))],
                vec![Msg::key(Key::Space)],
            ],
            vec![],
            &cfg,
        );
        run(&mut s, &cfg).unwrap();

        let path_bg = cfg.palette.path;
        let c = s.canvas();
        let painted = (0..c.height())
            .flat_map(|y| (0..c.width()).map(move |x| Point::new(x, y)))
            .filter(|&p| c.at(p).style.bg == path_bg)
            .count();
        // 13 interior cells, two terminal columns each.
        assert_eq!(painted, 13 * render::CELL_COLS as usize);
        assert!(status_row(&mut s, 8).contains("path found, 15 cells"));
        assert!(s.driver().flushes > 1);
    }

    #[test]
    fn menu_then_escape_back_then_quit() {
        let cfg = config(None);
        let mut s = screen(
            vec![
                vec![Msg::key(Key::ArrowDown), Msg::key(Key::Enter)],
                vec![Msg::key(Key::Escape)],
                vec![Msg::key(Key::Char('q'))],
            ],
            vec![],
            &cfg,
        );
        run(&mut s, &cfg).unwrap();
        // Menu, visualizer, menu again.
        assert_eq!(s.driver().polls, 3);
        assert!(status_row(&mut s, 1).contains("Pathfinding Visualizer"));
    }

    #[test]
    fn escape_during_run_cancels_but_stays() {
        let cfg = config(Some(Algorithm::Dijkstra));
        let mut s = screen(
            vec![
                vec![click(Coord::new(0, 0)), click(Coord::new(7, 7))],
                vec![Msg::key(Key::Space)],
            ],
            vec![vec![], vec![], vec![Msg::key(Key::Escape)]],
            &cfg,
        );
        run(&mut s, &cfg).unwrap();
        assert!(status_row(&mut s, 8).contains("Dijkstra's: cancelled"));
    }

    #[test]
    fn quit_during_run_exits() {
        let cfg = config(Some(Algorithm::Bfs));
        let mut s = screen(
            vec![
                vec![click(Coord::new(0, 0)), click(Coord::new(7, 7))],
                vec![Msg::key(Key::Space)],
                // Never reached.
                vec![Msg::key(Key::Char('c'))],
            ],
            vec![vec![Msg::Quit]],
            &cfg,
        );
        run(&mut s, &cfg).unwrap();
        assert_eq!(s.driver().idle.len(), 1);
    }
}
