//! The fixed terminal palette textels are painted with.

use std::fmt;
use std::str::FromStr;

use textur_core::Rgb;

/// A named terminal colour. The discriminant is the on-disk palette index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PaletteColor {
    #[default]
    Default = 0,
    Transparent,
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    LightGray,
    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl PaletteColor {
    /// Every colour, in palette order.
    pub const ALL: [PaletteColor; 18] = [
        Self::Default,
        Self::Transparent,
        Self::Black,
        Self::DarkRed,
        Self::DarkGreen,
        Self::DarkYellow,
        Self::DarkBlue,
        Self::DarkMagenta,
        Self::DarkCyan,
        Self::LightGray,
        Self::DarkGray,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Transparent => "Transparent",
            Self::Black => "Black",
            Self::DarkRed => "DarkRed",
            Self::DarkGreen => "DarkGreen",
            Self::DarkYellow => "DarkYellow",
            Self::DarkBlue => "DarkBlue",
            Self::DarkMagenta => "DarkMagenta",
            Self::DarkCyan => "DarkCyan",
            Self::LightGray => "LightGray",
            Self::DarkGray => "DarkGray",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
            Self::Magenta => "Magenta",
            Self::Cyan => "Cyan",
            Self::White => "White",
        }
    }

    /// Screen colour; `None` lets the terminal default show through.
    pub const fn rgb(self) -> Option<Rgb> {
        let (r, g, b) = match self {
            Self::Default | Self::Transparent => return None,
            Self::Black => (0, 0, 0),
            Self::DarkRed => (128, 0, 0),
            Self::DarkGreen => (0, 128, 0),
            Self::DarkYellow => (128, 128, 0),
            Self::DarkBlue => (0, 0, 128),
            Self::DarkMagenta => (128, 0, 128),
            Self::DarkCyan => (0, 128, 128),
            Self::LightGray => (192, 192, 192),
            Self::DarkGray => (128, 128, 128),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Yellow => (255, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Magenta => (255, 0, 255),
            Self::Cyan => (0, 255, 255),
            Self::White => (255, 255, 255),
        };
        Some(Rgb::new(r, g, b))
    }

    /// The next colour in palette order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % Self::ALL.len()]
    }

    /// The previous colour in palette order, wrapping around.
    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.index() as usize + n - 1) % n]
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unknown colour name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for PaletteColor {
    type Err = UnknownColor;

    /// Names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_position() {
        for (i, c) in PaletteColor::ALL.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
            assert_eq!(PaletteColor::from_index(i as u8), Some(*c));
        }
        assert_eq!(PaletteColor::from_index(18), None);
    }

    #[test]
    fn names_parse_back() {
        for c in PaletteColor::ALL {
            assert_eq!(c.name().parse::<PaletteColor>(), Ok(c));
        }
        assert_eq!(" darkcyan ".parse::<PaletteColor>(), Ok(PaletteColor::DarkCyan));
        assert!("Chartreuse".parse::<PaletteColor>().is_err());
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(PaletteColor::White.next(), PaletteColor::Default);
        assert_eq!(PaletteColor::Default.prev(), PaletteColor::White);
    }
}
