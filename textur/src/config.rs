//! Editor configuration derived from the command line.

use std::path::PathBuf;

use textur_edit::Texture;

use crate::cli::{Args, StartupError};

/// How the texture file is treated on load and on save.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileMode {
    /// Start blank; the first save asks before replacing an existing file.
    New { rows: usize, cols: usize },
    /// Load the file and save back to it without asking.
    Edit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub texture_path: PathBuf,
    pub file_mode: FileMode,
    pub tracing_path: Option<PathBuf>,
    pub presets_path: PathBuf,
    /// `None` seeds the brush generator from the OS.
    pub seed: Option<u64>,
}

impl EditorConfig {
    pub fn from_args(args: &Args) -> Result<Self, StartupError> {
        let texture_path = args.file.clone().ok_or(StartupError::MissingFile)?;
        let file_mode = match args.size.as_deref() {
            Some(&[rows, cols]) if rows == 0 || cols == 0 => {
                return Err(StartupError::EmptySize { rows, cols });
            }
            Some(&[rows, cols]) => {
                Texture::check_size(rows, cols)?;
                FileMode::New { rows, cols }
            }
            _ => FileMode::Edit,
        };
        Ok(Self {
            texture_path,
            file_mode,
            tracing_path: args.tracing.clone(),
            presets_path: args.presets.clone(),
            seed: args.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use textur_edit::TooLarge;

    fn parse(argv: &[&str]) -> Result<EditorConfig, StartupError> {
        let args = Args::try_parse_from(argv).unwrap();
        EditorConfig::from_args(&args)
    }

    #[test]
    fn edit_mode_without_size() {
        let cfg = parse(&["textur", "-f", "map.txur"]).unwrap();
        assert_eq!(cfg.file_mode, FileMode::Edit);
        assert_eq!(cfg.texture_path, PathBuf::from("map.txur"));
    }

    #[test]
    fn new_mode_with_size() {
        let cfg = parse(&["textur", "-f", "map.txur", "-s", "3", "7"]).unwrap();
        assert_eq!(cfg.file_mode, FileMode::New { rows: 3, cols: 7 });
    }

    #[test]
    fn missing_file_is_a_startup_error() {
        assert!(matches!(parse(&["textur"]), Err(StartupError::MissingFile)));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            parse(&["textur", "-f", "a", "-s", "0", "4"]),
            Err(StartupError::EmptySize { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn oversized_size_is_rejected() {
        let huge = usize::MAX / 2;
        let err = parse(&["textur", "-f", "a", "-s", &huge.to_string(), "3"]).unwrap_err();
        assert!(matches!(err, StartupError::TooLarge(TooLarge { rows, cols: 3 }) if rows == huge));
        assert!(matches!(
            parse(&["textur", "-f", "a", "-s", "100000", "100000"]),
            Err(StartupError::TooLarge(_))
        ));
        assert!(parse(&["textur", "-f", "a", "-s", "4096", "4096"]).is_ok());
    }
}
