//! textur: paint textel textures in the terminal.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::{error, info, warn};
use textur::{Args, Editor, EditorConfig, open_catalog};
use textur_core::App;
use textur_crossterm::CrosstermDriver;

/// Log to `<dir>/textur.log`. The terminal belongs to the editor, so
/// nothing is logged to stderr. Without a logger the editor still runs.
fn start_logger(dir: PathBuf) -> Option<LoggerHandle> {
    let started = Logger::try_with_env_or_str("info").and_then(|logger| {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(dir)
                    .basename("textur")
                    .suffix("log")
                    .suppress_timestamp(),
            )
            .append()
            .start()
    });
    match started {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("textur: logging disabled: {e}");
            None
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = EditorConfig::from_args(&args)?;

    if let Some(out) = &args.convert {
        let (catalog, note) = open_catalog(&config.presets_path);
        if let Some(note) = note {
            warn!("{note}");
        }
        let changed = textur::convert::convert(&config.texture_path, out, &catalog)?;
        println!("{changed} cells converted to shadow, written to {}", out.display());
        return Ok(());
    }

    let editor = Editor::new(config)?;
    let mut app = App::new(editor, CrosstermDriver::new());
    app.run()?;
    if app.into_model().is_modified() {
        warn!("exited with unsaved changes");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _logger = start_logger(args.log_dir.clone().unwrap_or_else(std::env::temp_dir));
    info!("textur {} starting", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("textur: {e}");
            ExitCode::FAILURE
        }
    }
}
