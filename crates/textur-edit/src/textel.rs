//! The [`Textel`] type: one texture cell.

use textur_core::Glyph;

use crate::palette::PaletteColor;

/// A glyph, two palette colours and a material tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Textel {
    pub glyph: char,
    pub fg: PaletteColor,
    pub bg: PaletteColor,
    pub material: i32,
}

impl Textel {
    /// What a freshly created or cleared cell holds.
    pub const EMPTY: Self = Self {
        glyph: ' ',
        fg: PaletteColor::Default,
        bg: PaletteColor::Transparent,
        material: material::VOID,
    };

    #[inline]
    pub const fn new(glyph: char, fg: PaletteColor, bg: PaletteColor, material: i32) -> Self {
        Self {
            glyph,
            fg,
            bg,
            material,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Screen representation of this textel.
    pub fn to_glyph(self) -> Glyph {
        Glyph::new(self.glyph)
            .with_fg(self.fg.rgb())
            .with_bg(self.bg.rgb())
    }
}

impl Default for Textel {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Which brightness variant of a preset to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Normal,
    Shadow,
}

impl Variant {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Shadow,
            Self::Shadow => Self::Normal,
        }
    }
}

/// Material ids used by the built-in presets. Custom presets may use any
/// integer.
pub mod material {
    pub const VOID: i32 = 0;
    pub const WATER: i32 = 1;
    pub const SAND: i32 = 2;
    pub const GRASS: i32 = 3;
    pub const DIRT: i32 = 4;
    pub const STONE: i32 = 5;
    pub const WOOD: i32 = 6;
    pub const LAVA: i32 = 7;
    pub const SNOW: i32 = 8;
    pub const ICE: i32 = 9;
    pub const BRICK: i32 = 10;
    pub const METAL: i32 = 11;
    pub const SWAMP: i32 = 12;
    pub const FOLIAGE: i32 = 13;
    pub const TILE: i32 = 14;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Textel::default().is_empty());
        assert!(!Textel::new('#', PaletteColor::Red, PaletteColor::Black, 5).is_empty());
    }

    #[test]
    fn glyph_uses_palette_rgb() {
        let g = Textel::new('~', PaletteColor::Blue, PaletteColor::Transparent, 1).to_glyph();
        assert_eq!(g.ch, '~');
        assert_eq!(g.fg, PaletteColor::Blue.rgb());
        assert_eq!(g.bg, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let t = Textel::new('"', PaletteColor::Green, PaletteColor::DarkGreen, material::GRASS);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<Textel>(&json).unwrap(), t);
    }
}
