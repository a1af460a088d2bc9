//! Command line arguments and startup errors.

use std::path::PathBuf;

use clap::Parser;
use textur_edit::{PersistError, TooLarge};
use thiserror::Error;

pub const DEFAULT_PRESETS: &str = "custom_textel_presets.txt";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Paint textel textures in the terminal", long_about = None)]
pub struct Args {
    /// Texture file to edit or create
    #[arg(short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Start a new blank texture instead of loading one
    #[arg(short = 's', num_args = 2, value_names = ["ROWS", "COLS"])]
    pub size: Option<Vec<usize>>,

    /// Read-only texture shown dimmed under empty cells
    #[arg(short = 't', value_name = "PATH")]
    pub tracing: Option<PathBuf>,

    /// Write a copy with every preset cell in its shadow variant, then exit
    #[arg(short = 'c', value_name = "PATH", conflicts_with = "size")]
    pub convert: Option<PathBuf>,

    /// Custom preset file
    #[arg(short = 'p', long = "presets", value_name = "PATH", default_value = DEFAULT_PRESETS)]
    pub presets: PathBuf,

    /// Seed for the randomized brushes
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Directory for textur.log (defaults to the system temp dir)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no texture file given (use -f <PATH>)")]
    MissingFile,
    #[error("a {rows}x{cols} texture has no cells")]
    EmptySize { rows: usize, cols: usize },
    #[error("cannot load texture: {0}")]
    Load(#[source] PersistError),
    #[error("cannot write texture: {0}")]
    Save(#[source] PersistError),
    #[error(transparent)]
    TooLarge(#[from] TooLarge),
}
