//! The display buffer: [`Rgb`], [`Attr`], [`Glyph`] and [`Screen`].
//!
//! Models draw into a [`Screen`]; the app loop diffs consecutive screens
//! into a [`Frame`] and hands only the changed cells to the driver.

use std::ops::BitOr;

use crate::geom::{Pos, Rect};

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// A 24-bit colour. `None` in a [`Glyph`] means "terminal default".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Halve every component.
    #[inline]
    pub const fn dimmed(self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2)
    }
}

// ---------------------------------------------------------------------------
// Attr
// ---------------------------------------------------------------------------

/// Bitmask of text attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Attr(pub u8);

impl Attr {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const REVERSE: Self = Self(1 << 1);
    pub const DIM: Self = Self(1 << 2);
    pub const UNDERLINE: Self = Self(1 << 3);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Attr {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// One styled screen cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub attrs: Attr,
}

impl Glyph {
    pub const BLANK: Self = Self {
        ch: ' ',
        fg: None,
        bg: None,
        attrs: Attr::NONE,
    };

    #[inline]
    pub const fn new(ch: char) -> Self {
        Self { ch, ..Self::BLANK }
    }

    #[inline]
    pub const fn with_fg(mut self, fg: Option<Rgb>) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Option<Rgb>) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A rows×cols buffer of [`Glyph`]s. Writes outside the buffer are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Glyph>,
    size: Pos,
}

impl Screen {
    /// A blank screen. Negative extents are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let size = Pos::new(rows.max(0), cols.max(0));
        Self {
            cells: vec![Glyph::BLANK; (size.row * size.col) as usize],
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> Pos {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::with_size(self.size)
    }

    #[inline]
    fn index(&self, p: Pos) -> Option<usize> {
        self.bounds()
            .contains(p)
            .then(|| (p.row * self.size.col + p.col) as usize)
    }

    /// The glyph at `p`, or a blank for positions off screen.
    pub fn at(&self, p: Pos) -> Glyph {
        self.index(p).map_or(Glyph::BLANK, |i| self.cells[i])
    }

    pub fn put(&mut self, p: Pos, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.cells[i] = glyph;
        }
    }

    /// Write `text` starting at `p`, one glyph per char, clipped at the
    /// right edge. Returns the number of columns written.
    pub fn put_str(&mut self, p: Pos, text: &str, style: Glyph) -> i32 {
        let mut n = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(0, i as i32);
            if q.col >= self.size.col {
                break;
            }
            self.put(q, Glyph { ch, ..style });
            n += 1;
        }
        n
    }

    /// Fill every cell of `area` (clipped to the screen) with `glyph`.
    pub fn fill(&mut self, area: Rect, glyph: Glyph) {
        for p in area.intersect(self.bounds()) {
            self.put(p, glyph);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Glyph::BLANK);
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Cells that changed between two screens, in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub cells: Vec<(Pos, Glyph)>,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Diff `curr` against `prev`. Screens of different sizes produce a full
/// frame of `curr`.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let full = prev.size != curr.size;
    let cells = curr
        .bounds()
        .iter()
        .filter_map(|p| {
            let g = curr.at(p);
            (full || prev.at(p) != g).then_some((p, g))
        })
        .collect();
    Frame { cells }
}
