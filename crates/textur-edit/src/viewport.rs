//! The scroll-follow camera: a cursor over the texture plus the offset that
//! maps texture positions to positions in the visible drawing area.
//!
//! Invariants after every operation (when the visible area is non-empty):
//! the cursor lies inside the texture, and `cursor + offset` lies inside
//! `[0, visible)` on both axes.

use textur_core::geom::RectIter;
use textur_core::{Pos, Rect};

use crate::error::RangeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    cursor: Pos,
    offset: Pos,
    visible: Pos,
    extent: Pos,
}

/// Scroll one axis the least amount that brings `cur + off` into
/// `[0, vis)`. Page scrolling moves in whole screens instead.
fn follow(cur: i32, off: i32, vis: i32, page: bool) -> i32 {
    if vis <= 0 {
        return off;
    }
    let mut off = off;
    if page {
        while cur + off < 0 {
            off += vis;
        }
        while cur + off >= vis {
            off -= vis;
        }
    } else if cur + off < 0 {
        off = -cur;
    } else if cur + off >= vis {
        off = vis - 1 - cur;
    }
    off
}

impl Viewport {
    /// A viewport over a texture of size `extent`, showing `visible`
    /// cells, with the cursor at the origin.
    pub fn new(extent: Pos, visible: Pos) -> Self {
        Self {
            cursor: Pos::ZERO,
            offset: Pos::ZERO,
            visible,
            extent,
        }
    }

    #[inline]
    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    #[inline]
    pub fn offset(&self) -> Pos {
        self.offset
    }

    #[inline]
    pub fn visible(&self) -> Pos {
        self.visible
    }

    /// Where texture position `p` lands in the drawing area.
    #[inline]
    pub fn to_screen(&self, p: Pos) -> Pos {
        p + self.offset
    }

    /// Texture position shown at drawing-area position `s`.
    #[inline]
    pub fn to_texture(&self, s: Pos) -> Pos {
        s - self.offset
    }

    /// Move the cursor by one cell (or one visible extent when `page`) per
    /// unit of delta, clamp it to the texture and scroll to follow.
    pub fn move_by(&mut self, d_row: i32, d_col: i32, page: bool) {
        let (dr, dc) = if page {
            (d_row * self.visible.row.max(1), d_col * self.visible.col.max(1))
        } else {
            (d_row, d_col)
        };
        self.cursor = self.cursor.shift(dr, dc).clamp_to(self.extent);
        self.scroll(page);
    }

    fn scroll(&mut self, page: bool) {
        self.offset = Pos::new(
            follow(self.cursor.row, self.offset.row, self.visible.row, page),
            follow(self.cursor.col, self.offset.col, self.visible.col, page),
        );
    }

    /// Jump to `pos` and centre the view on it. Positions outside the
    /// texture are rejected and leave the viewport untouched.
    pub fn goto(&mut self, pos: Pos) -> Result<(), RangeError> {
        if !Rect::with_size(self.extent).contains(pos) {
            return Err(RangeError::OutOfRange(pos));
        }
        self.cursor = pos;
        self.offset = Pos::new(self.visible.row / 2, self.visible.col / 2) - pos;
        Ok(())
    }

    /// The drawing area changed size; keep the cursor in view.
    pub fn set_visible(&mut self, visible: Pos) {
        self.visible = visible;
        self.scroll(false);
    }

    /// Whether texture position `p` is on screen.
    pub fn in_view(&self, p: Pos) -> bool {
        Rect::with_size(self.visible).contains(self.to_screen(p))
    }

    /// The texture cells currently on screen, row-major.
    pub fn visible_cells(&self) -> RectIter {
        let on_screen = Rect::new(-self.offset, self.visible);
        Rect::with_size(self.extent).intersect(on_screen).iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(v: &Viewport) {
        let c = v.cursor();
        assert!(c.row >= 0 && c.row < v.extent.row, "cursor row {c}");
        assert!(c.col >= 0 && c.col < v.extent.col, "cursor col {c}");
        let s = v.to_screen(c);
        assert!(s.row >= 0 && s.row < v.visible().row, "screen row {s}");
        assert!(s.col >= 0 && s.col < v.visible().col, "screen col {s}");
    }

    #[test]
    fn cursor_is_clamped_to_texture() {
        let mut v = Viewport::new(Pos::new(5, 5), Pos::new(10, 10));
        v.move_by(-1, -1, false);
        assert_eq!(v.cursor(), Pos::ZERO);
        for _ in 0..20 {
            v.move_by(1, 1, false);
        }
        assert_eq!(v.cursor(), Pos::new(4, 4));
        assert_invariants(&v);
    }

    #[test]
    fn unit_moves_scroll_by_one_at_the_edge() {
        let mut v = Viewport::new(Pos::new(100, 100), Pos::new(10, 20));
        for _ in 0..9 {
            v.move_by(1, 0, false);
        }
        assert_eq!(v.offset(), Pos::ZERO);
        v.move_by(1, 0, false);
        assert_eq!(v.cursor().row, 10);
        assert_eq!(v.offset().row, -1);
        assert_eq!(v.to_screen(v.cursor()).row, 9);
        // moving back up inside the view does not scroll
        v.move_by(-1, 0, false);
        assert_eq!(v.offset().row, -1);
    }

    #[test]
    fn page_moves_scroll_whole_screens() {
        let mut v = Viewport::new(Pos::new(100, 100), Pos::new(10, 20));
        v.move_by(0, 1, true);
        assert_eq!(v.cursor().col, 20);
        assert_eq!(v.offset().col, -20);
        v.move_by(0, 1, true);
        v.move_by(0, 1, true);
        assert_eq!(v.cursor().col, 60);
        assert_eq!(v.to_screen(v.cursor()).col, 0);
        v.move_by(0, -1, true);
        assert_invariants(&v);
    }

    #[test]
    fn invariants_hold_for_mixed_moves() {
        let mut v = Viewport::new(Pos::new(37, 53), Pos::new(7, 11));
        let moves = [
            (1, 0, false),
            (0, 1, true),
            (1, 1, true),
            (-1, 0, true),
            (0, -1, false),
            (1, 1, true),
            (1, 1, true),
            (1, 1, true),
            (1, 1, true),
            (1, 1, true),
            (1, 1, true),
            (-1, -1, true),
            (0, 1, false),
        ];
        for (dr, dc, page) in moves {
            v.move_by(dr, dc, page);
            assert_invariants(&v);
        }
    }

    #[test]
    fn goto_centres_and_rejects_out_of_range() {
        let mut v = Viewport::new(Pos::new(5, 5), Pos::new(3, 3));
        assert_eq!(v.goto(Pos::new(10, 10)), Err(RangeError::OutOfRange(Pos::new(10, 10))));
        assert_eq!(v.cursor(), Pos::ZERO);
        assert_eq!(v.offset(), Pos::ZERO);

        v.goto(Pos::new(4, 2)).unwrap();
        assert_eq!(v.cursor(), Pos::new(4, 2));
        assert_eq!(v.to_screen(v.cursor()), Pos::new(1, 1));
        assert_invariants(&v);
    }

    #[test]
    fn shrinking_the_screen_keeps_cursor_visible() {
        let mut v = Viewport::new(Pos::new(50, 50), Pos::new(40, 40));
        v.goto(Pos::new(30, 30)).unwrap();
        v.set_visible(Pos::new(10, 10));
        assert_invariants(&v);
    }

    #[test]
    fn visible_cells_follow_offset() {
        let mut v = Viewport::new(Pos::new(20, 20), Pos::new(4, 4));
        v.goto(Pos::new(10, 10)).unwrap();
        let cells: Vec<Pos> = v.visible_cells().collect();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Pos::new(8, 8));
        assert!(cells.iter().all(|&p| v.in_view(p)));
    }
}
