//! The [`Texture`] type: an owned rows×cols grid of [`Textel`]s.

use textur_core::{Pos, Rect};

use crate::error::{OutOfBounds, TooLarge};
use crate::textel::Textel;

/// Largest number of cells a texture may hold. Also bounds each side, so
/// sizes always fit a [`Pos`].
pub const MAX_CELLS: usize = 1 << 26;

/// A fixed-size grid of textels. The size never changes after
/// construction; a different size means a different texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    cells: Vec<Textel>,
    rows: usize,
    cols: usize,
}

impl Texture {
    /// A texture filled with [`Textel::EMPTY`].
    ///
    /// # Panics
    ///
    /// Panics if the size is rejected by [`Texture::check_size`]. Use
    /// [`Texture::try_new`] for sizes that come from the user.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(t) => t,
            Err(e) => panic!("{e}"),
        }
    }

    /// A blank texture, or [`TooLarge`] past [`MAX_CELLS`].
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, TooLarge> {
        let n = Self::check_size(rows, cols)?;
        Ok(Self {
            cells: vec![Textel::EMPTY; n],
            rows,
            cols,
        })
    }

    /// Number of cells of a `rows`×`cols` texture, if that size is allowed.
    pub fn check_size(rows: usize, cols: usize) -> Result<usize, TooLarge> {
        rows.checked_mul(cols)
            .filter(|&n| n <= MAX_CELLS && rows <= MAX_CELLS && cols <= MAX_CELLS)
            .ok_or(TooLarge { rows, cols })
    }

    /// Build from row-major cells. Returns `None` when the cell count does
    /// not match `rows * cols` or the size is not allowed.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Textel>) -> Option<Self> {
        let n = Self::check_size(rows, cols).ok()?;
        (cells.len() == n).then_some(Self { cells, rows, cols })
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The size as a [`Pos`], for clamping arithmetic. Both sides are at
    /// most [`MAX_CELLS`], so the casts are lossless.
    #[inline]
    pub fn extent(&self) -> Pos {
        Pos::new(self.rows as i32, self.cols as i32)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::with_size(self.extent())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.bounds().contains(pos)
    }

    #[inline]
    fn index(&self, pos: Pos) -> Result<usize, OutOfBounds> {
        if self.contains(pos) {
            Ok(pos.row as usize * self.cols + pos.col as usize)
        } else {
            Err(OutOfBounds {
                pos,
                size: self.extent(),
            })
        }
    }

    pub fn get(&self, pos: Pos) -> Result<Textel, OutOfBounds> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn set(&mut self, pos: Pos, textel: Textel) -> Result<(), OutOfBounds> {
        let i = self.index(pos)?;
        self.cells[i] = textel;
        Ok(())
    }

    /// Row-major cells.
    #[inline]
    pub fn cells(&self) -> &[Textel] {
        &self.cells
    }

    /// Row-major iterator over `(Pos, Textel)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Textel)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Replace every cell with `f(cell)`.
    pub fn map_cells(&mut self, mut f: impl FnMut(Textel) -> Textel) {
        for c in &mut self.cells {
            *c = f(*c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;

    #[test]
    fn new_is_blank() {
        let t = Texture::new(3, 4);
        assert_eq!(t.size(), (3, 4));
        assert!(t.cells().iter().all(Textel::is_empty));
        assert!(!t.is_empty());
        assert!(Texture::new(0, 7).is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut t = Texture::new(3, 4);
        let x = Textel::new('X', PaletteColor::Red, PaletteColor::Black, 2);
        t.set(Pos::new(2, 3), x).unwrap();
        assert_eq!(t.get(Pos::new(2, 3)), Ok(x));
        assert_eq!(t.cells()[2 * 4 + 3], x);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut t = Texture::new(2, 2);
        let err = t.get(Pos::new(2, 0)).unwrap_err();
        assert_eq!(err.pos, Pos::new(2, 0));
        assert_eq!(err.size, Pos::new(2, 2));
        assert!(t.set(Pos::new(0, -1), Textel::EMPTY).is_err());
    }

    #[test]
    fn iter_pairs_positions_with_cells() {
        let mut t = Texture::new(2, 3);
        let x = Textel::new('x', PaletteColor::White, PaletteColor::Black, 0);
        t.set(Pos::new(1, 0), x).unwrap();
        let found: Vec<Pos> = t.iter().filter(|(_, c)| *c == x).map(|(p, _)| p).collect();
        assert_eq!(found, vec![Pos::new(1, 0)]);
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Texture::from_cells(2, 2, vec![Textel::EMPTY; 3]).is_none());
        assert!(Texture::from_cells(2, 2, vec![Textel::EMPTY; 4]).is_some());
    }

    #[test]
    fn oversized_textures_are_refused() {
        assert_eq!(
            Texture::try_new(usize::MAX / 2, 3),
            Err(TooLarge { rows: usize::MAX / 2, cols: 3 })
        );
        assert!(Texture::try_new(3_000_000_000, 0).is_err());
        assert!(Texture::try_new(MAX_CELLS / 2, 3).is_err());
        assert_eq!(Texture::check_size(MAX_CELLS, 1), Ok(MAX_CELLS));
        assert!(Texture::from_cells(3_000_000_000, 0, Vec::new()).is_none());

        let t = Texture::try_new(4096, 2).unwrap();
        assert_eq!(t.extent(), Pos::new(4096, 2));
    }
}
