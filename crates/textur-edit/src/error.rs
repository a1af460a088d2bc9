//! Error types for texture access, persistence and presets.

use std::io;
use std::path::PathBuf;

use textur_core::Pos;
use thiserror::Error;

/// A grid access outside the texture. Callers clamp before touching the
/// grid, so seeing this is a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position {pos} is outside the {}x{} texture", size.row, size.col)]
pub struct OutOfBounds {
    pub pos: Pos,
    pub size: Pos,
}

/// A requested texture size beyond [`MAX_CELLS`](crate::texture::MAX_CELLS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a {rows}x{cols} texture exceeds the limit of {} cells", crate::texture::MAX_CELLS)]
pub struct TooLarge {
    pub rows: usize,
    pub cols: usize,
}

/// Rejected navigation or history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("position {0} is out of range")]
    OutOfRange(Pos),
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
}

/// Texture file read/write failures.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a texture file (bad magic)")]
    BadMagic,
    #[error("unsupported texture format version {0}")]
    UnsupportedVersion(u8),
    #[error("texture file is truncated")]
    Truncated,
    #[error("texture size {rows}x{cols} is too large")]
    TooLarge { rows: u32, cols: u32 },
    #[error("invalid glyph code point {0:#x}")]
    InvalidGlyph(u32),
    #[error("invalid palette index {0}")]
    InvalidColor(u8),
    #[error(transparent)]
    Stream(#[from] io::Error),
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A malformed line in the custom preset file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct PresetParseError {
    /// 1-based line number in the file.
    pub line: usize,
    pub reason: String,
}

/// Custom preset add/update failures.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("no custom preset with index {0}")]
    NoSuchCustom(usize),
    #[error("failed to write preset file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read preset file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
