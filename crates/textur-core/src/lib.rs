//! **textur-core**: the terminal-facing plumbing of textur.
//!
//! Geometry, a diffable display buffer, key events and the sequential
//! update/draw loop. Everything editor-specific lives in `textur-edit`.

pub mod app;
pub mod geom;
pub mod messages;
pub mod screen;

pub use app::{App, Driver, Effect, Model};
pub use geom::{Pos, Rect};
pub use messages::{Key, ModMask, Msg};
pub use screen::{Attr, Frame, Glyph, Rgb, Screen};
