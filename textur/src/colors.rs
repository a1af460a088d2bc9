//! Styles of the editor chrome: status line, boxes, messages.
//!
//! Texture cells are drawn in their own palette colours; these only cover
//! the surrounding UI.

use textur_core::{Attr, Glyph, Rgb};

const FG: Rgb = Rgb::new(220, 220, 210);
const FG_DIM: Rgb = Rgb::new(120, 122, 128);
const BG_PANEL: Rgb = Rgb::new(36, 38, 48);
const BG_STATUS: Rgb = Rgb::new(52, 56, 72);
const RED: Rgb = Rgb::new(255, 95, 95);
const YELLOW: Rgb = Rgb::new(240, 210, 90);

/// Status line.
pub const STATUS: Glyph = Glyph::BLANK.with_fg(Some(FG)).with_bg(Some(BG_STATUS));
/// Status line, unsaved-changes marker.
pub const STATUS_MODIFIED: Glyph = Glyph::BLANK
    .with_fg(Some(YELLOW))
    .with_bg(Some(BG_STATUS))
    .with_attrs(Attr::BOLD);
/// Box borders and text inside boxes.
pub const BOX: Glyph = Glyph::BLANK.with_fg(Some(FG)).with_bg(Some(BG_PANEL));
/// Highlighted entry inside a box.
pub const SELECTED: Glyph = BOX.with_attrs(Attr::REVERSE);
/// Secondary text inside a box.
pub const HINT: Glyph = Glyph::BLANK.with_fg(Some(FG_DIM)).with_bg(Some(BG_PANEL));
/// Informational message.
pub const INFO: Glyph = Glyph::BLANK.with_fg(Some(FG));
/// Error message.
pub const ERROR: Glyph = Glyph::BLANK.with_fg(Some(RED)).with_attrs(Attr::BOLD);
/// Cells outside the texture.
pub const OUTSIDE: Glyph = Glyph::new('·').with_fg(Some(FG_DIM));
