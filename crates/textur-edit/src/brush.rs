//! Paint operations. Every operation snapshots the cells it is about to
//! touch into one [`UndoBatch`] before writing, and returns that batch for
//! the caller to record.
//!
//! Brush footprints are hand-tuned stamps rather than true circles: each
//! row offset from the centre has a fixed column half-width. Terminal cells
//! are roughly twice as tall as wide, so the stamps are wider than tall.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use textur_core::Pos;

use crate::textel::Textel;
use crate::texture::Texture;
use crate::undo::UndoBatch;
use crate::viewport::Viewport;

/// `(row offset, column half-width)` rows of the small brush.
const SMALL_STAMP: [(i32, i32); 5] = [(-2, 2), (-1, 4), (0, 4), (1, 4), (2, 2)];

/// Column half-width of the large brush, indexed by `|row offset|`.
const LARGE_HALF_WIDTHS: [i32; 6] = [9, 9, 8, 7, 5, 2];

/// A cell of a randomized brush survives when `|N(0, σ)|` falls below this.
pub const SCATTER_THRESHOLD: f64 = 0.1;

/// Footprint of the brush keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BrushShape {
    Small,
    Large,
}

impl BrushShape {
    /// Offsets from the centre, row by row, left to right.
    pub fn offsets(self) -> Vec<Pos> {
        let rows: Vec<(i32, i32)> = match self {
            Self::Small => SMALL_STAMP.to_vec(),
            Self::Large => {
                let r = LARGE_HALF_WIDTHS.len() as i32 - 1;
                (-r..=r)
                    .map(|dr| (dr, LARGE_HALF_WIDTHS[dr.unsigned_abs() as usize]))
                    .collect()
            }
        };
        rows.into_iter()
            .flat_map(|(dr, hw)| (-hw..=hw).map(move |dc| Pos::new(dr, dc)))
            .collect()
    }

    /// Number of cells in the full, unclipped footprint.
    pub fn area(self) -> usize {
        self.offsets().len()
    }
}

/// Snapshot every in-bounds position, then write `textel` to each.
fn paint(texture: &mut Texture, cells: impl IntoIterator<Item = Pos>, textel: Textel) -> UndoBatch {
    let mut batch = UndoBatch::new();
    for p in cells {
        batch.snapshot(texture, p);
    }
    for p in batch.positions().collect::<Vec<_>>() {
        // in bounds: snapshot only keeps cells the texture has
        let _ = texture.set(p, textel);
    }
    batch
}

/// Set a single cell.
pub fn point_edit(texture: &mut Texture, pos: Pos, textel: Textel) -> UndoBatch {
    paint(texture, [pos], textel)
}

/// Reset a single cell to [`Textel::EMPTY`].
pub fn clear(texture: &mut Texture, pos: Pos) -> UndoBatch {
    paint(texture, [pos], Textel::EMPTY)
}

/// Stamp `shape` centred on `center`; cells off the texture are skipped.
pub fn stamp(texture: &mut Texture, shape: BrushShape, center: Pos, textel: Textel) -> UndoBatch {
    let cells = shape.offsets().into_iter().map(|d| center + d);
    paint(texture, cells, textel)
}

pub fn small_brush(texture: &mut Texture, center: Pos, textel: Textel) -> UndoBatch {
    stamp(texture, BrushShape::Small, center, textel)
}

pub fn large_brush(texture: &mut Texture, center: Pos, textel: Textel) -> UndoBatch {
    stamp(texture, BrushShape::Large, center, textel)
}

/// Whether the cell at `offset` from the centre survives one scatter draw.
/// σ is the distance from the centre with rows counted double, so the
/// centre itself always survives.
fn survives<R: Rng + ?Sized>(offset: Pos, rng: &mut R) -> bool {
    let dr = 2.0 * offset.row as f64;
    let dc = offset.col as f64;
    let sigma = (dr * dr + dc * dc).sqrt();
    let z: f64 = StandardNormal.sample(rng);
    (sigma * z).abs() < SCATTER_THRESHOLD
}

/// Like [`stamp`], but each footprint cell is kept only with a probability
/// that falls off with its distance from the centre. Every call draws a
/// fresh pattern from `rng`.
pub fn scatter<R: Rng + ?Sized>(
    texture: &mut Texture,
    shape: BrushShape,
    center: Pos,
    textel: Textel,
    rng: &mut R,
) -> UndoBatch {
    let cells: Vec<Pos> = shape
        .offsets()
        .into_iter()
        .filter(|&d| survives(d, &mut *rng))
        .map(|d| center + d)
        .collect();
    paint(texture, cells, textel)
}

pub fn random_small_brush<R: Rng + ?Sized>(
    texture: &mut Texture,
    center: Pos,
    textel: Textel,
    rng: &mut R,
) -> UndoBatch {
    scatter(texture, BrushShape::Small, center, textel, rng)
}

pub fn random_large_brush<R: Rng + ?Sized>(
    texture: &mut Texture,
    center: Pos,
    textel: Textel,
    rng: &mut R,
) -> UndoBatch {
    scatter(texture, BrushShape::Large, center, textel, rng)
}

/// Overwrite every texture cell currently on screen.
pub fn fill_viewport(texture: &mut Texture, view: &Viewport, textel: Textel) -> UndoBatch {
    paint(texture, view.visible_cells(), textel)
}
