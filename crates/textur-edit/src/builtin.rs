//! Built-in presets, grouped by material.

use crate::palette::PaletteColor::{self, *};
use crate::preset::TextelPreset;
use crate::textel::{Textel, material::*};

type Entry = (&'static str, char, PaletteColor, PaletteColor, PaletteColor, PaletteColor, i32);

// name, glyph, normal fg, normal bg, shadow fg, shadow bg, material
#[rustfmt::skip]
const TABLE: &[Entry] = &[
    ("Deep water",    '~', Blue,       DarkBlue,   DarkBlue,   Black,      WATER),
    ("Shallow water", '~', Cyan,       DarkCyan,   DarkCyan,   DarkBlue,   WATER),
    ("Ripples",       '=', White,      DarkCyan,   LightGray,  DarkBlue,   WATER),
    ("Beach",         '.', Yellow,     DarkYellow, DarkYellow, Black,      SAND),
    ("Dunes",         '~', Yellow,     DarkYellow, DarkYellow, DarkGray,   SAND),
    ("Short grass",   ',', Green,      DarkGreen,  DarkGreen,  Black,      GRASS),
    ("Tall grass",    '"', Green,      DarkGreen,  DarkGreen,  Black,      GRASS),
    ("Meadow",        '\'', Yellow,    DarkGreen,  DarkYellow, Black,      GRASS),
    ("Dry earth",     '.', DarkYellow, Black,      DarkGray,   Black,      DIRT),
    ("Mud",           '~', DarkYellow, DarkGray,   DarkGray,   Black,      DIRT),
    ("Rock",          '#', LightGray,  DarkGray,   DarkGray,   Black,      STONE),
    ("Gravel",        ':', LightGray,  Black,      DarkGray,   Black,      STONE),
    ("Cobbles",       'o', LightGray,  DarkGray,   DarkGray,   Black,      STONE),
    ("Planks",        '=', Yellow,     DarkYellow, DarkYellow, Black,      WOOD),
    ("Log",           '|', DarkYellow, Black,      DarkGray,   Black,      WOOD),
    ("Lava",          '~', Yellow,     Red,        Red,        DarkRed,    LAVA),
    ("Cooling lava",  '%', Red,        DarkRed,    DarkRed,    Black,      LAVA),
    ("Snow",          '*', White,      LightGray,  LightGray,  DarkGray,   SNOW),
    ("Ice",           '-', Cyan,       White,      DarkCyan,   LightGray,  ICE),
    ("Brick wall",    '#', Red,        DarkRed,    DarkRed,    Black,      BRICK),
    ("Steel plate",   '+', White,      DarkGray,   LightGray,  Black,      METAL),
    ("Bog",           '%', DarkGreen,  DarkYellow, DarkGray,   Black,      SWAMP),
    ("Bush",          '&', Green,      DarkGreen,  DarkGreen,  Black,      FOLIAGE),
    ("Tree",          '♣', Green,      Black,      DarkGreen,  Black,      FOLIAGE),
    ("Floor tiles",   '+', LightGray,  DarkBlue,   DarkGray,   Black,      TILE),
];

pub(crate) fn presets() -> Vec<TextelPreset> {
    TABLE
        .iter()
        .map(|&(name, ch, fg, bg, sfg, sbg, mat)| {
            TextelPreset::new(name, Textel::new(ch, fg, bg, mat), Textel::new(ch, sfg, sbg, mat))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textel::Variant;
    use std::collections::HashSet;

    #[test]
    fn materials_are_contiguous() {
        let ps = presets();
        let mut seen = HashSet::new();
        let mut last = None;
        for p in &ps {
            if last != Some(p.material()) {
                assert!(seen.insert(p.material()), "material {} split", p.material());
                last = Some(p.material());
            }
        }
    }

    #[test]
    fn variants_are_distinct_and_findable() {
        let ps = presets();
        for (i, p) in ps.iter().enumerate() {
            assert_ne!(p.normal, p.shadow, "{}", p.name);
            assert!(!p.normal.is_empty());
            let first = ps.iter().position(|q| q.variant(Variant::Normal) == p.normal);
            assert_eq!(first, Some(i), "duplicate normal for {}", p.name);
        }
    }
}
