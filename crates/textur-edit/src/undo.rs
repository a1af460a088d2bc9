//! Batched undo/redo: [`UndoBatch`] and [`UndoHistory`].
//!
//! A batch holds the *previous* textel of every cell one user action
//! touched. Undoing a batch writes those textels back and turns the batch
//! into its inverse (the textels that were just overwritten), which goes on
//! the redo stack. Redo does the same in the other direction.

use std::collections::HashSet;

use log::trace;
use textur_core::Pos;

use crate::textel::Textel;
use crate::texture::Texture;

/// The prior textels of every cell touched by one action, in the order
/// they were first touched. Each position appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoBatch {
    entries: Vec<(Pos, Textel)>,
    seen: HashSet<Pos>,
}

impl UndoBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `before` as the value of `pos` prior to the action. A
    /// position already in the batch keeps its first value; returns `false`
    /// in that case.
    pub fn record(&mut self, pos: Pos, before: Textel) -> bool {
        if !self.seen.insert(pos) {
            return false;
        }
        self.entries.push((pos, before));
        true
    }

    /// Snapshot the current value of `pos` in `texture`. Positions outside
    /// the texture are skipped.
    pub fn snapshot(&mut self, texture: &Texture, pos: Pos) -> bool {
        match texture.get(pos) {
            Ok(before) => self.record(pos, before),
            Err(_) => false,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.seen.contains(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[(Pos, Textel)] {
        &self.entries
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    /// Write this batch's textels into `texture` and return the inverse
    /// batch holding what was there before, in the same order.
    fn apply(&self, texture: &mut Texture) -> UndoBatch {
        let mut inverse = UndoBatch {
            entries: Vec::with_capacity(self.entries.len()),
            seen: HashSet::with_capacity(self.entries.len()),
        };
        for &(pos, textel) in &self.entries {
            if let Ok(current) = texture.get(pos) {
                inverse.record(pos, current);
                // in bounds: checked by the get above
                let _ = texture.set(pos, textel);
            }
        }
        inverse
    }
}

/// Undo and redo stacks of [`UndoBatch`]es.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    undo: Vec<UndoBatch>,
    redo: Vec<UndoBatch>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the batch for a new edit and drop the redo stack. Empty batches
    /// are ignored (nothing was touched).
    pub fn record(&mut self, batch: UndoBatch) {
        if batch.is_empty() {
            return;
        }
        trace!("recording undo batch of {} cells", batch.len());
        self.undo.push(batch);
        self.redo.clear();
    }

    /// Revert the most recent edit. Returns the batch that was applied, or
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self, texture: &mut Texture) -> Option<UndoBatch> {
        let batch = self.undo.pop()?;
        self.redo.push(batch.apply(texture));
        Some(batch)
    }

    /// Re-apply the most recently undone edit. Returns the batch that was
    /// applied, or `None` when there is nothing to redo.
    pub fn redo(&mut self, texture: &mut Texture) -> Option<UndoBatch> {
        let batch = self.redo.pop()?;
        self.undo.push(batch.apply(texture));
        Some(batch)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[inline]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[inline]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}
