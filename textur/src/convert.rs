//! Convert mode: rewrite a texture with every preset cell in its shadow
//! variant.

use std::path::Path;

use log::info;
use textur_edit::PresetCatalog;
use textur_edit::persist::{load_texture, save_texture};

use crate::cli::StartupError;

/// Load `input`, remap it through `catalog` and write it to `output`.
/// Returns the number of cells changed.
pub fn convert(input: &Path, output: &Path, catalog: &PresetCatalog) -> Result<usize, StartupError> {
    let mut texture = load_texture(input).map_err(StartupError::Load)?;
    let changed = catalog.remap_to_shadow(&mut texture);
    save_texture(output, &texture).map_err(StartupError::Save)?;
    info!(
        "converted {} to {}: {changed} cells shadowed",
        input.display(),
        output.display()
    );
    Ok(changed)
}
