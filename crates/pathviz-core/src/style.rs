//! Visual styling: [`Color`], [`Style`], and the cell-state [`Palette`].

use crate::cell::CellState;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// The default / unset colour (0). Drivers map it to the terminal default.
    pub const DEFAULT: Self = Self(0);

    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(1, 1, 1);
    pub const GREY: Self = Self::from_rgb(128, 128, 128);
    pub const DARK_GREY: Self = Self::from_rgb(64, 64, 64);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(64, 224, 208);
    pub const ORANGE: Self = Self::from_rgb(255, 165, 0);
    pub const PURPLE: Self = Self::from_rgb(128, 0, 128);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground, background and weight of one screen glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Style {
    /// Set the foreground colour (builder).
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background colour (builder).
    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Set the weight (builder).
    #[inline]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Colours used to draw grid cells, one per [`CellState`], plus the grid
/// line colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub empty: Color,
    pub barrier: Color,
    pub start: Color,
    pub end: Color,
    pub frontier: Color,
    pub visited: Color,
    pub path: Color,
    pub grid_line: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Color::WHITE,
            barrier: Color::BLACK,
            start: Color::ORANGE,
            end: Color::RED,
            frontier: Color::GREEN,
            visited: Color::BLUE,
            path: Color::PURPLE,
            grid_line: Color::GREY,
        }
    }
}

impl Palette {
    /// Fill colour for a cell in `state`.
    pub const fn fill(&self, state: CellState) -> Color {
        match state {
            CellState::Empty => self.empty,
            CellState::Barrier => self.barrier,
            CellState::Start => self.start,
            CellState::End => self.end,
            CellState::Frontier => self.frontier,
            CellState::Visited => self.visited,
            CellState::Path => self.path,
        }
    }
}
