//! The [`Canvas`] type: a screen buffer of styled [`Glyph`]s, and the
//! [`Frame`] diff that drivers flush.
//!
//! Renderers draw the whole picture into a canvas every time;
//! [`compute_frame`] then keeps only the glyphs that changed since the
//! previous canvas so drivers write as little as possible.

use crate::geom::Point;
use crate::style::Style;

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// A styled character on the output surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A `width x height` buffer of glyphs. Out-of-bounds writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Create a blank canvas. Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            glyphs: vec![Glyph::default(); (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Read the glyph at `p`; blank outside the canvas.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`.
    pub fn set(&mut self, p: Point, g: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = g;
        }
    }

    /// Fill every position with `g`.
    pub fn fill(&mut self, g: Glyph) {
        self.glyphs.fill(g);
    }

    /// Write `text` left to right starting at `p`, clipped at the right
    /// edge. Returns the number of glyphs written.
    pub fn put_str(&mut self, p: Point, text: &str, style: Style) -> i32 {
        let mut n = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(i as i32, 0);
            if q.x >= self.width {
                break;
            }
            self.set(q, Glyph::new(ch, style));
            n += 1;
        }
        n
    }

    /// Write `text` centred on row `y`.
    pub fn put_centered(&mut self, y: i32, text: &str, style: Style) {
        let len = text.chars().count() as i32;
        let x = ((self.width - len) / 2).max(0);
        self.put_str(Point::new(x, y), text, style);
    }

}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between canvases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// A set of glyph changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Compute the glyphs of `curr` that differ from `prev`.
///
/// If the sizes differ every glyph of `curr` is included.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let same_size = prev.width == curr.width && prev.height == curr.height;
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let p = Point::new(x, y);
            let g = curr.at(p);
            if !same_size || prev.at(p) != g {
                cells.push(FrameCell { glyph: g, pos: p });
            }
        }
    }
    Frame { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn set_and_read_back() {
        let mut c = Canvas::new(4, 3);
        let g = Glyph::new('X', Style::default().with_fg(Color::RED));
        c.set(Point::new(2, 1), g);
        assert_eq!(c.at(Point::new(2, 1)), g);
        // Out of bounds is blank and writes are dropped.
        c.set(Point::new(10, 10), g);
        assert_eq!(c.at(Point::new(10, 10)), Glyph::default());
    }

    #[test]
    fn put_str_clips() {
        let mut c = Canvas::new(5, 1);
        let n = c.put_str(Point::new(2, 0), "hello", Style::default());
        assert_eq!(n, 3);
        assert_eq!(c.at(Point::new(4, 0)).ch, 'l');
    }

    #[test]
    fn put_centered() {
        let mut c = Canvas::new(9, 1);
        c.put_centered(0, "abc", Style::default());
        assert_eq!(c.at(Point::new(3, 0)).ch, 'a');
        assert_eq!(c.at(Point::new(5, 0)).ch, 'c');
    }

    #[test]
    fn frame_holds_only_changes() {
        let a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        b.set(Point::new(1, 0), Glyph::new('A', Style::default()));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].glyph.ch, 'A');
        assert!(compute_frame(&b, &b).is_empty());
    }

    #[test]
    fn resized_frame_is_full() {
        let a = Canvas::new(2, 2);
        let b = Canvas::new(3, 2);
        assert_eq!(compute_frame(&a, &b).cells.len(), 6);
    }
}
