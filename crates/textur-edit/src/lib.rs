//! **textur-edit**: the editing model behind textur.
//!
//! A [`Texture`] is a grid of [`Textel`]s. Edits go through the functions in
//! [`brush`], each of which returns an [`UndoBatch`] for [`UndoHistory`].
//! [`PresetCatalog`] holds the built-in and custom presets, and [`persist`]
//! reads and writes texture files.

pub mod brush;
mod builtin;
pub mod error;
pub mod palette;
pub mod persist;
pub mod preset;
pub mod preset_file;
pub mod textel;
pub mod texture;
pub mod undo;
pub mod viewport;

pub use brush::BrushShape;
pub use error::{OutOfBounds, PersistError, PresetError, PresetParseError, RangeError, TooLarge};
pub use palette::PaletteColor;
pub use preset::{PresetCatalog, TextelPreset};
pub use textel::{Textel, Variant, material};
pub use texture::Texture;
pub use undo::{UndoBatch, UndoHistory};
pub use viewport::Viewport;
