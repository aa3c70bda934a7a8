//! The main menu: pick an algorithm, read the controls.

use pathviz_core::{Canvas, Color, Glyph, Key, MouseAction, Msg, Point, Style};
use pathviz_paths::Algorithm;

const TITLE_ROW: i32 = 1;
const PROMPT_ROW: i32 = 3;
const FIRST_ENTRY_ROW: i32 = 5;
const ENTRY_SPACING: i32 = 2;
const ENTRY_WIDTH: i32 = 20;

const INSTRUCTIONS: [&str; 5] = [
    "Press Space to run",
    "Press c to clear screen",
    "Left click to add nodes",
    "Right click to remove nodes",
    "Press Esc to return to main menu",
];

/// Canvas rows the menu needs.
pub const MIN_HEIGHT: i32 =
    FIRST_ENTRY_ROW + ENTRY_SPACING * Algorithm::ALL.len() as i32 + INSTRUCTIONS.len() as i32;

/// Key bindings for menu navigation.
#[derive(Debug, Clone)]
pub struct MenuKeys {
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    pub invoke: Vec<Key>,
    pub quit: Vec<Key>,
}

impl Default for MenuKeys {
    fn default() -> Self {
        Self {
            up: vec![Key::ArrowUp, Key::Char('k')],
            down: vec![Key::ArrowDown, Key::Char('j'), Key::Tab],
            invoke: vec![Key::Enter, Key::Space],
            quit: vec![Key::Escape, Key::Char('q')],
        }
    }
}

/// Actions returned by [`Menu::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// No meaningful action occurred.
    Pass,
    /// The active entry changed.
    Move,
    /// The active entry was invoked.
    Invoke,
    /// The user asked to leave the program.
    Quit,
}

/// Algorithm picker. Entries are invoked with Enter, their number key, or a
/// click on the entry.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<Algorithm>,
    keys: MenuKeys,
    active: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(MenuKeys::default())
    }
}

impl Menu {
    pub fn new(keys: MenuKeys) -> Self {
        Self {
            entries: Algorithm::ALL.to_vec(),
            keys,
            active: 0,
        }
    }

    /// The highlighted algorithm.
    pub fn selected(&self) -> Algorithm {
        self.entries[self.active]
    }

    /// Return the currently active (highlighted) entry index.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Process an input message and return the resulting action.
    pub fn update(&mut self, msg: &Msg, canvas_width: i32) -> MenuAction {
        match *msg {
            Msg::Quit => MenuAction::Quit,
            Msg::KeyDown { key, .. } => {
                if self.keys.up.contains(&key) {
                    self.move_active(-1);
                    MenuAction::Move
                } else if self.keys.down.contains(&key) {
                    self.move_active(1);
                    MenuAction::Move
                } else if self.keys.invoke.contains(&key) {
                    MenuAction::Invoke
                } else if self.keys.quit.contains(&key) {
                    MenuAction::Quit
                } else if let Key::Char(ch) = key {
                    // Number shortcuts, 1-based.
                    match ch.to_digit(10) {
                        Some(d) if d >= 1 && (d as usize) <= self.entries.len() => {
                            self.active = d as usize - 1;
                            MenuAction::Invoke
                        }
                        _ => MenuAction::Pass,
                    }
                } else {
                    MenuAction::Pass
                }
            }
            Msg::Mouse { action, pos, .. } => match self.entry_at(pos, canvas_width) {
                Some(i) if action == MouseAction::Main => {
                    self.active = i;
                    MenuAction::Invoke
                }
                Some(i) if action == MouseAction::Move && i != self.active => {
                    self.active = i;
                    MenuAction::Move
                }
                _ => MenuAction::Pass,
            },
            Msg::Screen { .. } => MenuAction::Pass,
        }
    }

    /// Draw the menu over the whole canvas.
    pub fn draw(&self, canvas: &mut Canvas) {
        let base = Style::default().with_fg(Color::BLACK).with_bg(Color::WHITE);
        canvas.fill(Glyph::new(' ', base));
        canvas.put_centered(TITLE_ROW, "Pathfinding Visualizer", base.with_bold(true));
        canvas.put_centered(PROMPT_ROW, "Select an algorithm:", base);

        let x0 = Self::entry_x(canvas.width());
        for (i, kind) in self.entries.iter().enumerate() {
            let y = Self::entry_row(i);
            let style = if i == self.active {
                Style::default()
                    .with_fg(Color::WHITE)
                    .with_bg(Color::DARK_GREY)
                    .with_bold(true)
            } else {
                Style::default().with_fg(Color::WHITE).with_bg(Color::GREY)
            };
            for x in x0..x0 + ENTRY_WIDTH {
                canvas.set(Point::new(x, y), Glyph::new(' ', style));
            }
            let label = format!("{}. {}", i + 1, kind.label());
            let lx = x0 + (ENTRY_WIDTH - label.chars().count() as i32) / 2;
            canvas.put_str(Point::new(lx, y), &label, style);
        }

        let first = Self::entry_row(self.entries.len());
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            canvas.put_centered(first + i as i32, line, base);
        }
    }

    // -- private helpers --

    fn entry_row(i: usize) -> i32 {
        FIRST_ENTRY_ROW + ENTRY_SPACING * i as i32
    }

    fn entry_x(canvas_width: i32) -> i32 {
        ((canvas_width - ENTRY_WIDTH) / 2).max(0)
    }

    fn entry_at(&self, pos: Point, canvas_width: i32) -> Option<usize> {
        let x0 = Self::entry_x(canvas_width);
        if pos.x < x0 || pos.x >= x0 + ENTRY_WIDTH {
            return None;
        }
        (0..self.entries.len()).find(|&i| Self::entry_row(i) == pos.y)
    }

    fn move_active(&mut self, delta: i32) {
        let len = self.entries.len() as i32;
        self.active = (self.active as i32 + delta).rem_euclid(len) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 48;

    #[test]
    fn entries_in_menu_order() {
        let mut m = Menu::default();
        assert_eq!(m.selected(), Algorithm::AStar);
        assert_eq!(m.update(&Msg::key(Key::ArrowDown), W), MenuAction::Move);
        assert_eq!(m.selected(), Algorithm::Dijkstra);
        m.update(&Msg::key(Key::ArrowDown), W);
        assert_eq!(m.selected(), Algorithm::Bidirectional);
        m.update(&Msg::key(Key::ArrowDown), W);
        assert_eq!(m.selected(), Algorithm::Bfs);
    }

    #[test]
    fn navigation_wraps() {
        let mut m = Menu::default();
        m.update(&Msg::key(Key::ArrowUp), W);
        assert_eq!(m.active(), 3);
        m.update(&Msg::key(Key::ArrowDown), W);
        assert_eq!(m.active(), 0);
    }

    #[test]
    fn number_shortcuts() {
        let mut m = Menu::default();
        assert_eq!(m.update(&Msg::key(Key::Char('4')), W), MenuAction::Invoke);
        assert_eq!(m.selected(), Algorithm::Bfs);
        assert_eq!(m.update(&Msg::key(Key::Char('9')), W), MenuAction::Pass);
        assert_eq!(m.update(&Msg::key(Key::Char('0')), W), MenuAction::Pass);
    }

    #[test]
    fn click_invokes_entry() {
        let mut m = Menu::default();
        let p = Point::new(W / 2, Menu::entry_row(2));
        assert_eq!(
            m.update(&Msg::mouse(MouseAction::Main, p), W),
            MenuAction::Invoke
        );
        assert_eq!(m.selected(), Algorithm::Bidirectional);
        // Between entries.
        let gap = Point::new(W / 2, Menu::entry_row(0) + 1);
        assert_eq!(
            m.update(&Msg::mouse(MouseAction::Main, gap), W),
            MenuAction::Pass
        );
    }

    #[test]
    fn quit_keys() {
        let mut m = Menu::default();
        assert_eq!(m.update(&Msg::key(Key::Escape), W), MenuAction::Quit);
        assert_eq!(m.update(&Msg::Quit, W), MenuAction::Quit);
        assert_eq!(m.update(&Msg::key(Key::Enter), W), MenuAction::Invoke);
    }

    #[test]
    fn draws_labels_and_instructions() {
        let m = Menu::default();
        let mut c = Canvas::new(W, MIN_HEIGHT);
        m.draw(&mut c);
        let row = |y: i32| -> String { (0..W).map(|x| c.at(Point::new(x, y)).ch).collect() };
        assert!(row(TITLE_ROW).contains("Pathfinding Visualizer"));
        assert!(row(Menu::entry_row(0)).contains("1. A*"));
        assert!(row(Menu::entry_row(3)).contains("4. BFS"));
        assert!(row(MIN_HEIGHT - 1).contains("main menu"));
        assert_eq!(
            c.at(Point::new(W / 2, Menu::entry_row(0))).style.bg,
            Color::DARK_GREY
        );
    }
}
