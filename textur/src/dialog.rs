//! Small modal widgets: the yes/no confirmation and the goto dialog, plus
//! the box decoration they share with the other overlays.

use textur_core::{Attr, Glyph, Key, Pos, Rect, Screen};

use crate::colors;

/// Result of feeding a key to a modal widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Still open.
    Pending,
    /// Closed with a result.
    Done(T),
    /// Closed without a result.
    Cancelled,
}

// ---------------------------------------------------------------------------
// Box decoration
// ---------------------------------------------------------------------------

/// A rect of `size` centred on a screen of `screen` cells.
pub fn centered(screen: Pos, size: Pos) -> Rect {
    let size = Pos::new(size.row.min(screen.row), size.col.min(screen.col));
    Rect::new(
        Pos::new((screen.row - size.row) / 2, (screen.col - size.col) / 2),
        size,
    )
}

/// Clear `area`, draw a single-line border with `title` on the top edge
/// and return the inner area.
pub fn draw_box(screen: &mut Screen, area: Rect, title: &str) -> Rect {
    let style = colors::BOX;
    screen.fill(area, style);
    if area.rows() < 2 || area.cols() < 2 {
        return area;
    }
    let (top, left) = (area.min.row, area.min.col);
    let (bottom, right) = (area.max.row - 1, area.max.col - 1);
    for col in left + 1..right {
        screen.put(Pos::new(top, col), Glyph { ch: '─', ..style });
        screen.put(Pos::new(bottom, col), Glyph { ch: '─', ..style });
    }
    for row in top + 1..bottom {
        screen.put(Pos::new(row, left), Glyph { ch: '│', ..style });
        screen.put(Pos::new(row, right), Glyph { ch: '│', ..style });
    }
    screen.put(Pos::new(top, left), Glyph { ch: '┌', ..style });
    screen.put(Pos::new(top, right), Glyph { ch: '┐', ..style });
    screen.put(Pos::new(bottom, left), Glyph { ch: '└', ..style });
    screen.put(Pos::new(bottom, right), Glyph { ch: '┘', ..style });

    if !title.is_empty() {
        let width = title.chars().count() as i32 + 2;
        let col = left + ((area.cols() - width) / 2).max(1);
        screen.put_str(
            Pos::new(top, col),
            &format!(" {title} "),
            style.with_attrs(Attr::BOLD),
        );
    }
    Rect::new(
        Pos::new(top + 1, left + 1),
        Pos::new(area.rows() - 2, area.cols() - 2),
    )
}

// ---------------------------------------------------------------------------
// YesNo
// ---------------------------------------------------------------------------

/// A yes/no question. Starts on "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YesNo {
    yes: bool,
}

impl YesNo {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_yes(&self) -> bool {
        self.yes
    }

    pub fn update(&mut self, key: Key) -> Outcome<bool> {
        match key {
            Key::ArrowLeft | Key::ArrowRight | Key::Tab | Key::Char('a' | 'd') => {
                self.yes = !self.yes;
                Outcome::Pending
            }
            Key::Char('y') => Outcome::Done(true),
            Key::Char('n') => Outcome::Done(false),
            Key::Enter => Outcome::Done(self.yes),
            Key::Escape => Outcome::Cancelled,
            _ => Outcome::Pending,
        }
    }

    pub fn draw(&self, screen: &mut Screen, title: &str, question: &str) {
        let width = question.chars().count() as i32 + 4;
        let area = centered(screen.size(), Pos::new(5, width.max(20)));
        let inner = draw_box(screen, area, title);
        screen.put_str(inner.min.shift(0, 1), question, colors::BOX);

        let row = inner.min.row + 2;
        let mid = inner.min.col + inner.cols() / 2;
        let (yes, no) = if self.yes {
            (colors::SELECTED, colors::BOX)
        } else {
            (colors::BOX, colors::SELECTED)
        };
        screen.put_str(Pos::new(row, mid - 6), " Yes ", yes);
        screen.put_str(Pos::new(row, mid + 2), " No ", no);
    }
}

// ---------------------------------------------------------------------------
// GotoDialog
// ---------------------------------------------------------------------------

/// Longest number either field accepts.
const MAX_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GotoField {
    #[default]
    Row,
    Col,
}

/// Two numeric fields, row and column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GotoDialog {
    row: String,
    col: String,
    focus: GotoField,
}

impl GotoDialog {
    pub fn new() -> Self {
        Self::default()
    }

    fn field(&mut self) -> &mut String {
        match self.focus {
            GotoField::Row => &mut self.row,
            GotoField::Col => &mut self.col,
        }
    }

    /// `Done(None)` means Enter was pressed without two valid numbers.
    pub fn update(&mut self, key: Key) -> Outcome<Option<Pos>> {
        match key {
            Key::Char(c @ '0'..='9') => {
                let field = self.field();
                if field.len() < MAX_DIGITS {
                    field.push(c);
                }
                Outcome::Pending
            }
            Key::Backspace => {
                self.field().pop();
                Outcome::Pending
            }
            Key::Tab | Key::BackTab | Key::ArrowLeft | Key::ArrowRight => {
                self.focus = match self.focus {
                    GotoField::Row => GotoField::Col,
                    GotoField::Col => GotoField::Row,
                };
                Outcome::Pending
            }
            Key::Enter => Outcome::Done(self.value()),
            Key::Escape | Key::Char('g') => Outcome::Cancelled,
            _ => Outcome::Pending,
        }
    }

    /// The entered position, if both fields hold a number.
    pub fn value(&self) -> Option<Pos> {
        let row = self.row.parse().ok()?;
        let col = self.col.parse().ok()?;
        Some(Pos::new(row, col))
    }

    pub fn draw(&self, screen: &mut Screen) {
        let area = centered(screen.size(), Pos::new(5, 28));
        let inner = draw_box(screen, area, "Go to");
        let fields = [
            ("Row", &self.row, GotoField::Row),
            ("Col", &self.col, GotoField::Col),
        ];
        for (i, (label, value, which)) in fields.into_iter().enumerate() {
            let p = inner.min.shift(i as i32 + 1, 2);
            let n = screen.put_str(p, &format!("{label}: "), colors::BOX);
            let style = if which == self.focus {
                colors::SELECTED
            } else {
                colors::BOX
            };
            screen.put_str(p.shift(0, n), &format!("{value:<width$}", width = MAX_DIGITS), style);
        }
    }
}
