//! The interaction controller: turns clicks and keys into grid edits and
//! run requests.

use pathviz_core::{CellState, Coord, CoreError, Grid, Key, MouseAction, Msg, Point};
use pathviz_paths::{Algorithm, Observer, Outcome, run_algorithm};

use crate::render::cell_under;

/// Where the controller stands, derived from the placed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    StartSet,
    StartAndEndSet,
    Running,
}

/// What the session should do after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Start a run with [`Controller::run`].
    Run,
    /// Go back to the menu.
    Leave,
    Quit,
}

/// Owns the grid for one visualizer screen and the start/end references.
#[derive(Debug, Clone)]
pub struct Controller {
    grid: Grid,
    blank: Grid,
    algorithm: Algorithm,
    start: Option<Coord>,
    end: Option<Coord>,
    running: bool,
    /// Button of the last press, repeated while dragging.
    held: Option<MouseAction>,
    last: Option<Outcome>,
}

impl Controller {
    pub fn new(rows: i32, width: i32, algorithm: Algorithm) -> Result<Self, CoreError> {
        let grid = Grid::new(rows, width)?;
        Ok(Self {
            blank: grid.clone(),
            grid,
            algorithm,
            start: None,
            end: None,
            running: false,
            held: None,
            last: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Outcome of the most recent run on this grid.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.start, self.end) {
            (true, _, _) => Phase::Running,
            (false, Some(_), Some(_)) => Phase::StartAndEndSet,
            (false, Some(_), None) => Phase::StartSet,
            (false, None, _) => Phase::Idle,
        }
    }

    /// Primary click: place the start, then the end, then barriers.
    ///
    /// The start and end cells are never turned into barriers; remove them
    /// with [`secondary`](Self::secondary) first.
    pub fn primary(&mut self, c: Coord) -> Result<(), CoreError> {
        self.grid.cell(c)?;
        if self.start.is_none() && self.end != Some(c) {
            self.grid.set_state(c, CellState::Start)?;
            self.start = Some(c);
        } else if self.end.is_none() && self.start != Some(c) {
            self.grid.set_state(c, CellState::End)?;
            self.end = Some(c);
        } else if self.start != Some(c) && self.end != Some(c) {
            self.grid.set_state(c, CellState::Barrier)?;
        }
        Ok(())
    }

    /// Secondary click: reset the cell, forgetting it as start or end.
    pub fn secondary(&mut self, c: Coord) -> Result<(), CoreError> {
        self.grid.set_state(c, CellState::Empty)?;
        if self.start == Some(c) {
            self.start = None;
        }
        if self.end == Some(c) {
            self.end = None;
        }
        Ok(())
    }

    /// Run the selected algorithm between the placed endpoints.
    pub fn run<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Result<Outcome, CoreError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::warn!("run requested before both endpoints were placed");
            return Err(CoreError::InvalidRunRequest(
                "start and end must both be placed",
            ));
        };
        self.running = true;
        let res = run_algorithm(self.algorithm, &mut self.grid, start, end, observer);
        self.running = false;
        if let Ok(out) = &res {
            self.last = Some(out.clone());
        }
        res
    }

    /// Replace the grid with a blank one and forget the endpoints.
    pub fn clear(&mut self) {
        self.grid.clone_from(&self.blank);
        self.start = None;
        self.end = None;
        self.held = None;
        self.last = None;
        log::debug!("grid cleared");
    }

    /// Apply one input message.
    pub fn handle(&mut self, msg: &Msg) -> Control {
        match *msg {
            Msg::Quit => Control::Quit,
            Msg::KeyDown { key, .. } => match key {
                Key::Escape => Control::Leave,
                Key::Space => {
                    if self.phase() == Phase::StartAndEndSet {
                        Control::Run
                    } else {
                        log::debug!("space ignored in phase {:?}", self.phase());
                        Control::Continue
                    }
                }
                Key::Char('c') | Key::Char('C') => {
                    self.clear();
                    Control::Continue
                }
                _ => Control::Continue,
            },
            Msg::Mouse { action, pos, .. } => {
                self.mouse(action, pos);
                Control::Continue
            }
            Msg::Screen { .. } => Control::Continue,
        }
    }

    fn mouse(&mut self, action: MouseAction, pos: Point) {
        let button = match action {
            MouseAction::Main | MouseAction::Secondary => {
                self.held = Some(action);
                action
            }
            MouseAction::Drag => match self.held {
                Some(b) => b,
                None => return,
            },
            MouseAction::Release => {
                self.held = None;
                return;
            }
            MouseAction::Auxiliary | MouseAction::Move => return,
        };
        let Some(c) = cell_under(&self.grid, pos) else {
            return;
        };
        let res = if button == MouseAction::Main {
            self.primary(c)
        } else {
            self.secondary(c)
        };
        if let Err(e) = res {
            log::warn!("click at {pos}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::term_pos;
    use pathviz_paths::{Headless, Hooks};

    fn ctl() -> Controller {
        Controller::new(6, 60, Algorithm::AStar).unwrap()
    }

    fn click(ctl: &mut Controller, action: MouseAction, c: Coord) -> Control {
        let pos = term_pos(ctl.grid(), c).unwrap();
        ctl.handle(&Msg::mouse(action, pos))
    }

    #[test]
    fn clicks_place_start_end_then_barriers() {
        let mut c = ctl();
        assert_eq!(c.phase(), Phase::Idle);
        c.primary(Coord::new(0, 0)).unwrap();
        assert_eq!(c.phase(), Phase::StartSet);
        c.primary(Coord::new(0, 0)).unwrap();
        assert_eq!(c.end(), None, "the start cell cannot become the end");
        c.primary(Coord::new(5, 5)).unwrap();
        assert_eq!(c.phase(), Phase::StartAndEndSet);
        c.primary(Coord::new(2, 2)).unwrap();
        c.primary(Coord::new(5, 5)).unwrap();

        let g = c.grid();
        assert_eq!(g.state(Coord::new(0, 0)).unwrap(), CellState::Start);
        assert_eq!(g.state(Coord::new(5, 5)).unwrap(), CellState::End);
        assert_eq!(g.state(Coord::new(2, 2)).unwrap(), CellState::Barrier);
    }

    #[test]
    fn at_most_one_start_and_end() {
        let mut c = ctl();
        let clicks = [
            (true, 0, 0),
            (true, 1, 1),
            (true, 2, 2),
            (false, 0, 0),
            (true, 3, 3),
            (true, 1, 1),
            (false, 1, 1),
            (true, 4, 4),
            (true, 0, 0),
            (false, 4, 4),
            (true, 3, 3),
        ];
        for (primary, r, col) in clicks {
            let at = Coord::new(r, col);
            if primary {
                c.primary(at).unwrap();
            } else {
                c.secondary(at).unwrap();
            }
            assert!(c.grid().count(CellState::Start) <= 1);
            assert!(c.grid().count(CellState::End) <= 1);
            assert_eq!(c.grid().find(CellState::Start).first().copied(), c.start());
            assert_eq!(c.grid().find(CellState::End).first().copied(), c.end());
        }
    }

    #[test]
    fn secondary_forgets_endpoints() {
        let mut c = ctl();
        c.primary(Coord::new(1, 1)).unwrap();
        c.primary(Coord::new(2, 2)).unwrap();
        c.secondary(Coord::new(1, 1)).unwrap();
        assert_eq!(c.start(), None);
        assert_eq!(c.end(), Some(Coord::new(2, 2)));
        // The next primary click re-places the start.
        c.primary(Coord::new(4, 0)).unwrap();
        assert_eq!(c.start(), Some(Coord::new(4, 0)));
    }

    #[test]
    fn out_of_bounds_click_is_an_error() {
        let mut c = ctl();
        assert_eq!(
            c.primary(Coord::new(6, 0)),
            Err(CoreError::OutOfBounds(Coord::new(6, 0)))
        );
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn run_needs_both_endpoints() {
        let mut c = ctl();
        c.primary(Coord::new(0, 0)).unwrap();
        assert!(matches!(
            c.run(&mut Headless),
            Err(CoreError::InvalidRunRequest(_))
        ));
        assert_eq!(c.handle(&Msg::key(Key::Space)), Control::Continue);
        c.primary(Coord::new(3, 3)).unwrap();
        assert_eq!(c.handle(&Msg::key(Key::Space)), Control::Run);
    }

    #[test]
    fn run_reports_running_phase_and_records_outcome() {
        let mut c = ctl();
        c.primary(Coord::new(0, 0)).unwrap();
        c.primary(Coord::new(5, 5)).unwrap();
        let mut frames = 0;
        let out = c
            .run(&mut Hooks {
                render: |_: &Grid| frames += 1,
                cancelled: || false,
            })
            .unwrap();
        assert_eq!(out.path_len(), Some(11));
        assert!(frames > 0);
        assert_eq!(c.phase(), Phase::StartAndEndSet);
        assert_eq!(c.last_outcome(), Some(&out));
    }

    #[test]
    fn rerun_after_adding_a_wall() {
        let mut c = Controller::new(3, 3, Algorithm::Dijkstra).unwrap();
        c.primary(Coord::new(0, 1)).unwrap();
        c.primary(Coord::new(2, 1)).unwrap();
        assert_eq!(c.run(&mut Headless).unwrap().path_len(), Some(3));
        c.primary(Coord::new(1, 1)).unwrap();
        assert_eq!(c.run(&mut Headless).unwrap().path_len(), Some(5));
    }

    #[test]
    fn clear_resets_everything() {
        let mut c = ctl();
        c.primary(Coord::new(0, 0)).unwrap();
        c.primary(Coord::new(1, 0)).unwrap();
        c.primary(Coord::new(2, 0)).unwrap();
        c.run(&mut Headless).unwrap();
        assert_eq!(c.handle(&Msg::key(Key::Char('c'))), Control::Continue);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.last_outcome(), None);
        assert!(c.grid().iter().all(|cell| cell.state == CellState::Empty));
    }

    #[test]
    fn keys_map_to_controls() {
        let mut c = ctl();
        assert_eq!(c.handle(&Msg::key(Key::Escape)), Control::Leave);
        assert_eq!(c.handle(&Msg::Quit), Control::Quit);
        assert_eq!(c.handle(&Msg::key(Key::Char('x'))), Control::Continue);
    }

    #[test]
    fn mouse_presses_and_drag() {
        let mut c = ctl();
        click(&mut c, MouseAction::Main, Coord::new(0, 0));
        click(&mut c, MouseAction::Main, Coord::new(5, 0));
        // Dragging with the primary button paints barriers.
        click(&mut c, MouseAction::Main, Coord::new(2, 1));
        click(&mut c, MouseAction::Drag, Coord::new(2, 2));
        click(&mut c, MouseAction::Drag, Coord::new(2, 3));
        click(&mut c, MouseAction::Release, Coord::new(2, 3));
        // Moving after release does nothing.
        click(&mut c, MouseAction::Drag, Coord::new(2, 4));
        assert_eq!(c.grid().count(CellState::Barrier), 3);

        // Dragging with the secondary button erases.
        click(&mut c, MouseAction::Secondary, Coord::new(2, 1));
        click(&mut c, MouseAction::Drag, Coord::new(2, 2));
        assert_eq!(c.grid().count(CellState::Barrier), 1);
        assert_eq!(c.start(), Some(Coord::new(0, 0)));
        assert_eq!(c.end(), Some(Coord::new(5, 0)));
    }

    #[test]
    fn clicks_outside_the_grid_are_ignored() {
        let mut c = ctl();
        c.handle(&Msg::mouse(MouseAction::Main, Point::new(40, 2)));
        c.handle(&Msg::mouse(MouseAction::Main, Point::new(2, 6)));
        assert_eq!(c.phase(), Phase::Idle);
    }
}
