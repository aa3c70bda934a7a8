//! The output side of the visualizer: the [`Driver`] trait implemented by
//! back-ends, and the [`Screen`] that owns a driver and double-buffers
//! [`Canvas`]es over it.
//!
//! A `Screen` is created once at startup and lent by `&mut` to whoever is
//! drawing; there is no global display handle.

use std::error::Error;
use std::time::Duration;

use crate::canvas::{Canvas, Frame, compute_frame};
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Collect pending input into `out`.
    ///
    /// Waits at most `wait` for the first message; `Duration::ZERO` only
    /// drains what is already queued.
    fn poll_msgs(&mut self, wait: Duration, out: &mut Vec<Msg>) -> Result<(), Box<dyn Error>>;

    /// Flush a computed frame to the surface.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>>;

    /// Clean up / restore the surface.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A driver plus the previous and current canvases.
pub struct Screen<D: Driver> {
    driver: D,
    prev: Canvas,
    curr: Canvas,
    inbox: Vec<Msg>,
}

impl<D: Driver> Screen<D> {
    /// Wrap `driver` with canvases of the given size.
    pub fn new(driver: D, width: i32, height: i32) -> Self {
        Self {
            driver,
            prev: Canvas::new(width, height),
            curr: Canvas::new(width, height),
            inbox: Vec::new(),
        }
    }

    /// Initialise the driver.
    pub fn init(&mut self) -> Result<(), Box<dyn Error>> {
        self.driver.init()
    }

    /// The canvas being drawn for the next frame.
    #[inline]
    pub fn canvas(&mut self) -> &mut Canvas {
        &mut self.curr
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Diff the current canvas against the last presented one and flush the
    /// changes. Returns the number of glyphs written.
    pub fn present(&mut self) -> Result<usize, Box<dyn Error>> {
        let frame = compute_frame(&self.prev, &self.curr);
        let n = frame.cells.len();
        if n > 0 {
            self.driver.flush(frame)?;
        }
        self.prev.clone_from(&self.curr);
        Ok(n)
    }

    /// Forget what is on the surface so the next [`present`](Self::present)
    /// rewrites everything (after a resize or a terminal clear).
    pub fn invalidate(&mut self) {
        self.prev = Canvas::new(0, 0);
    }

    /// Poll the driver and return every message collected.
    pub fn poll(&mut self, wait: Duration) -> Result<Vec<Msg>, Box<dyn Error>> {
        self.inbox.clear();
        self.driver.poll_msgs(wait, &mut self.inbox)?;
        if self
            .inbox
            .iter()
            .any(|m| matches!(m, Msg::Screen { .. }))
        {
            self.invalidate();
        }
        Ok(std::mem::take(&mut self.inbox))
    }

    /// Restore the surface and give the driver back.
    pub fn close(mut self) -> D {
        self.driver.close();
        self.driver
    }
}
