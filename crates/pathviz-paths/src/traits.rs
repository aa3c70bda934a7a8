use pathviz_core::{Coord, Grid};

/// What one call to [`Search::step`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One cell was expanded; more work remains.
    Continue,
    /// The target was reached. Call [`Search::trace`] to paint the path.
    Found,
    /// Nothing left to expand and the target was never reached.
    Exhausted,
}

/// An incremental search over a [`Grid`].
///
/// The grid's neighbour lists must be up to date before the first step.
pub trait Search {
    /// Perform one expansion.
    fn step(&mut self, grid: &mut Grid) -> Step;

    /// Paint the path found by the last [`Step::Found`], rendering once per
    /// painted cell, and return it in start-to-end order.
    fn trace<O: Observer + ?Sized>(&mut self, grid: &mut Grid, observer: &mut O) -> Vec<Coord>;

    /// Predecessor links by flat index (the forward half for bidirectional
    /// search).
    fn came_from(&self) -> &[Option<usize>];

    /// Number of cells expanded so far.
    fn expanded(&self) -> usize;
}

/// The caller's side of a run: drawing and cancellation.
pub trait Observer {
    /// Redraw the whole grid and present it.
    fn render(&mut self, grid: &Grid);

    /// Whether the user asked to stop since the last call.
    fn cancelled(&mut self) -> bool;
}

/// An [`Observer`] built from two closures.
pub struct Hooks<R, C> {
    pub render: R,
    pub cancelled: C,
}

impl<R, C> Observer for Hooks<R, C>
where
    R: FnMut(&Grid),
    C: FnMut() -> bool,
{
    #[inline]
    fn render(&mut self, grid: &Grid) {
        (self.render)(grid)
    }

    #[inline]
    fn cancelled(&mut self) -> bool {
        (self.cancelled)()
    }
}

/// Observer that never draws and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Observer for Headless {
    fn render(&mut self, _grid: &Grid) {}

    fn cancelled(&mut self) -> bool {
        false
    }
}
