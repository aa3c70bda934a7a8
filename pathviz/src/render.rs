//! Drawing the grid into a [`Canvas`] and mapping terminal positions back
//! to cells.
//!
//! A cell takes [`CELL_COLS`] terminal columns and one terminal row. Cell
//! geometry puts rows along the horizontal axis, so row `r` is drawn at
//! column `r * CELL_COLS` and column `c` on terminal line `c`. The status
//! line sits just below the grid.

use pathviz_core::{Canvas, Coord, Glyph, Grid, Palette, Point, Style};
use pathviz_paths::{Algorithm, Outcome};

/// Terminal columns per cell.
pub const CELL_COLS: i32 = 2;

/// Narrowest canvas, so the menu and status line always fit.
const MIN_WIDTH: i32 = 48;

/// Canvas size needed for a grid of `rows` plus the status line.
pub fn canvas_size(rows: i32) -> (i32, i32) {
    ((rows * CELL_COLS).max(MIN_WIDTH), (rows + 1).max(crate::menu::MIN_HEIGHT))
}

/// Terminal position of the top-left corner of a cell.
pub fn term_pos(grid: &Grid, c: Coord) -> Option<Point> {
    let cell = grid.cell(c).ok()?;
    let o = cell.origin();
    let size = cell.size();
    Some(Point::new(o.x / size * CELL_COLS, o.y / size))
}

/// The cell under a terminal position, if any.
pub fn cell_under(grid: &Grid, pos: Point) -> Option<Coord> {
    if pos.x < 0 || pos.y < 0 {
        return None;
    }
    let size = grid.cell_size();
    grid.cell_at_pixel(Point::new(pos.x / CELL_COLS * size, pos.y * size))
}

/// Draw every cell with its state colour and a grid line on its left edge.
pub fn draw_grid(canvas: &mut Canvas, grid: &Grid, palette: &Palette) {
    for cell in grid {
        let Some(p) = term_pos(grid, cell.coord()) else {
            continue;
        };
        let fill = palette.fill(cell.state);
        let line = Style::default().with_fg(palette.grid_line).with_bg(fill);
        canvas.set(p, Glyph::new('▏', line));
        for dx in 1..CELL_COLS {
            canvas.set(p.shift(dx, 0), Glyph::new(' ', Style::default().with_bg(fill)));
        }
    }
}

/// Text of the status line.
pub fn status_text(kind: Algorithm, running: bool, last: Option<&Outcome>) -> String {
    match (running, last) {
        (true, _) => format!("{kind}: running, Esc to stop"),
        (false, Some(out)) => format!("{kind}: {out}"),
        (false, None) => format!("{kind}: place start and end, Space to run"),
    }
}

/// Draw the status line on row `y`, clearing the rest of the row.
pub fn draw_status(canvas: &mut Canvas, y: i32, text: &str) {
    let style = Style::default().with_bold(true);
    for x in 0..canvas.width() {
        canvas.set(Point::new(x, y), Glyph::new(' ', Style::default()));
    }
    canvas.put_str(Point::new(0, y), text, style);
}

/// Full visualizer frame: grid plus status line.
pub fn draw_view(canvas: &mut Canvas, grid: &Grid, palette: &Palette, status: &str) {
    draw_grid(canvas, grid, palette);
    draw_status(canvas, grid.rows(), status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::CellState;

    #[test]
    fn positions_round_trip() {
        let g = Grid::new(10, 200).unwrap();
        for c in [Coord::new(0, 0), Coord::new(3, 7), Coord::new(9, 9)] {
            let p = term_pos(&g, c).unwrap();
            assert_eq!(p, Point::new(c.row * CELL_COLS, c.col));
            assert_eq!(cell_under(&g, p), Some(c));
            assert_eq!(cell_under(&g, p.shift(1, 0)), Some(c));
        }
    }

    #[test]
    fn outside_positions() {
        let g = Grid::new(10, 200).unwrap();
        assert_eq!(cell_under(&g, Point::new(-1, 0)), None);
        assert_eq!(cell_under(&g, Point::new(0, 10)), None);
        assert_eq!(cell_under(&g, Point::new(20, 0)), None);
        assert_eq!(term_pos(&g, Coord::new(10, 0)), None);
    }

    #[test]
    fn grid_colours() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set_state(Coord::new(1, 2), CellState::Barrier).unwrap();
        let palette = Palette::default();
        let (w, h) = canvas_size(4);
        let mut canvas = Canvas::new(w, h);
        draw_view(&mut canvas, &g, &palette, "A*: ready");

        let wall = canvas.at(Point::new(2, 2));
        assert_eq!(wall.ch, '▏');
        assert_eq!(wall.style.bg, palette.barrier);
        assert_eq!(wall.style.fg, palette.grid_line);
        assert_eq!(canvas.at(Point::new(3, 2)).style.bg, palette.barrier);
        assert_eq!(canvas.at(Point::new(1, 0)).style.bg, palette.empty);
        assert_eq!(canvas.at(Point::new(0, 4)).ch, 'A');
    }

    #[test]
    fn status_lines() {
        assert_eq!(
            status_text(Algorithm::Bfs, false, Some(&Outcome::Exhausted)),
            "BFS: no path"
        );
        assert!(status_text(Algorithm::AStar, true, None).contains("running"));
        assert!(status_text(Algorithm::Dijkstra, false, None).starts_with("Dijkstra's"));
    }
}
