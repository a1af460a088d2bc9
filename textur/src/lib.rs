//! **textur**: a terminal editor for textel textures.
//!
//! The editor is an [`Editor`] model driven by the `textur-core` app loop.
//! [`cli`] and [`config`] turn the command line into an [`EditorConfig`];
//! [`convert`] is the non-interactive shadow conversion.

pub mod cli;
pub mod colors;
pub mod config;
pub mod convert;
pub mod dialog;
mod draw;
pub mod editor;
pub mod preset_editor;
pub mod toast;

pub use cli::{Args, StartupError};
pub use config::{EditorConfig, FileMode};
pub use editor::{Editor, EditorMode, open_catalog};
