//! Geometry primitives: [`Pos`] and [`Rect`].
//!
//! Everything in textur is addressed by `(row, col)`: rows grow downwards,
//! columns grow to the right. The same types are used for texture
//! coordinates and for screen coordinates.

use std::fmt;
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A `(row, col)` position or offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by `(d_row, d_col)`.
    #[inline]
    pub const fn shift(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Clamp each component into `[0, size)`. A zero extent clamps to 0.
    #[inline]
    pub fn clamp_to(self, size: Pos) -> Self {
        Self {
            row: self.row.clamp(0, (size.row - 1).max(0)),
            col: self.col.clamp(0, (size.col - 1).max(0)),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Pos {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub min: Pos,
    pub max: Pos,
}

impl Rect {
    /// A rectangle from its top-left corner and size.
    #[inline]
    pub fn new(min: Pos, size: Pos) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// The rectangle `[0, size)`.
    #[inline]
    pub fn with_size(size: Pos) -> Self {
        Self::new(Pos::ZERO, size)
    }

    #[inline]
    pub fn size(self) -> Pos {
        self.max - self.min
    }

    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Intersection of two rectangles; the default (empty) rectangle when
    /// they do not overlap.
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Pos::new(self.min.row.max(other.min.row), self.min.col.max(other.min.col)),
            max: Pos::new(self.max.row.min(other.max.row), self.max.col.min(other.max.col)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every position in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Pos;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

/// Row-major iterator over the positions of a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Pos,
}

impl Iterator for RectIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.rect.is_empty() || self.cur.row >= self.rect.max.row {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.rect.max.col {
            self.cur.col = self.rect.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }
}
