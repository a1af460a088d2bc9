//! Named textel presets and the catalog the editor picks them from.
//!
//! The catalog is the built-in table followed by the custom presets loaded
//! from the sidecar file. Built-ins always come first, so catalog indices
//! below [`PresetCatalog::builtin_len`] never change.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::builtin;
use crate::error::{PresetError, PresetParseError};
use crate::preset_file::{parse_presets, serialize_presets};
use crate::textel::{Textel, Variant};
use crate::texture::Texture;

/// A named pair of textels: the normal look and its shadowed look.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextelPreset {
    pub name: String,
    pub normal: Textel,
    pub shadow: Textel,
}

impl TextelPreset {
    pub fn new(name: impl Into<String>, normal: Textel, shadow: Textel) -> Self {
        Self {
            name: name.into(),
            normal,
            shadow,
        }
    }

    #[inline]
    pub fn variant(&self, v: Variant) -> Textel {
        match v {
            Variant::Normal => self.normal,
            Variant::Shadow => self.shadow,
        }
    }

    /// Material of the normal variant; presets are grouped by it.
    #[inline]
    pub fn material(&self) -> i32 {
        self.normal.material
    }
}

#[derive(Clone, Debug)]
pub struct PresetCatalog {
    presets: Vec<TextelPreset>,
    builtin_len: usize,
    path: Option<PathBuf>,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetCatalog {
    /// Only the built-in presets, with no backing file.
    pub fn builtin() -> Self {
        let presets = builtin::presets();
        Self {
            builtin_len: presets.len(),
            presets,
            path: None,
        }
    }

    /// Built-ins followed by `customs`, with no backing file.
    pub fn with_customs(customs: Vec<TextelPreset>) -> Self {
        let mut catalog = Self::builtin();
        catalog.presets.extend(customs);
        catalog
    }

    /// Built-ins followed by the presets in the sidecar file at `path`. A
    /// missing file means no custom presets. Malformed records are skipped
    /// and returned as diagnostics.
    pub fn load(path: impl Into<PathBuf>) -> Result<(Self, Vec<PresetParseError>), PresetError> {
        let path = path.into();
        let (customs, errors) = read_customs(&path)?;
        for e in &errors {
            warn!("{}: {}", path.display(), e);
        }
        info!(
            "loaded {} custom presets from {}",
            customs.len(),
            path.display()
        );
        let mut catalog = Self::with_customs(customs);
        catalog.path = Some(path);
        Ok((catalog, errors))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&TextelPreset> {
        self.presets.get(index)
    }

    #[inline]
    pub fn presets(&self) -> &[TextelPreset] {
        &self.presets
    }

    #[inline]
    pub fn builtin_len(&self) -> usize {
        self.builtin_len
    }

    #[inline]
    pub fn custom_len(&self) -> usize {
        self.presets.len() - self.builtin_len
    }

    /// The custom presets, in file order.
    #[inline]
    pub fn customs(&self) -> &[TextelPreset] {
        &self.presets[self.builtin_len..]
    }

    /// The custom preset with custom index `i`.
    pub fn custom(&self, i: usize) -> Option<&TextelPreset> {
        self.customs().get(i)
    }

    /// Whether catalog index `index` is a custom preset.
    #[inline]
    pub fn is_custom(&self, index: usize) -> bool {
        index >= self.builtin_len && index < self.presets.len()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Index of the first preset whose `variant` equals `textel` exactly.
    pub fn find_by_textel(&self, textel: &Textel, variant: Variant) -> Option<usize> {
        self.presets.iter().position(|p| p.variant(variant) == *textel)
    }

    /// First index after `index` whose material differs from the preset at
    /// `index`. Stays put when there is none.
    pub fn next_group(&self, index: usize) -> usize {
        let Some(material) = self.get(index).map(TextelPreset::material) else {
            return index;
        };
        self.presets
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, p)| p.material() != material)
            .map_or(index, |(i, _)| i)
    }

    /// Nearest index before `index` whose material differs from the preset
    /// at `index`. Stays put when there is none.
    pub fn prev_group(&self, index: usize) -> usize {
        let Some(material) = self.get(index).map(TextelPreset::material) else {
            return index;
        };
        self.presets[..index]
            .iter()
            .rposition(|p| p.material() != material)
            .unwrap_or(index)
    }

    /// Overwrite custom preset `custom_index`, or append when it is `None`
    /// or not a valid custom index. With a backing file the whole custom
    /// list is written out and read back in. Returns the catalog index of
    /// the stored preset.
    pub fn add_or_update(
        &mut self,
        custom_index: Option<usize>,
        preset: TextelPreset,
    ) -> Result<usize, PresetError> {
        let mut customs = self.customs().to_vec();
        let slot = match custom_index {
            Some(i) if i < customs.len() => {
                debug!("updating custom preset {i} ({})", preset.name);
                customs[i] = preset;
                i
            }
            other => {
                if let Some(i) = other {
                    debug!("custom preset {i} does not exist, appending");
                }
                customs.push(preset);
                customs.len() - 1
            }
        };

        let Some(path) = self.path.clone() else {
            self.presets.truncate(self.builtin_len);
            self.presets.extend(customs);
            return Ok(self.builtin_len + slot);
        };

        fs::write(&path, serialize_presets(&customs)).map_err(|source| PresetError::Write {
            path: path.clone(),
            source,
        })?;
        let (reloaded, errors) = read_customs(&path)?;
        for e in &errors {
            warn!("{}: {}", path.display(), e);
        }
        self.presets.truncate(self.builtin_len);
        self.presets.extend(reloaded);
        info!("saved {} custom presets to {}", self.custom_len(), path.display());
        Ok((self.builtin_len + slot).min(self.presets.len().saturating_sub(1)))
    }

    /// Replace every cell equal to some preset's normal variant with that
    /// preset's shadow variant. Returns the number of cells changed.
    pub fn remap_to_shadow(&self, texture: &mut Texture) -> usize {
        let mut changed = 0;
        texture.map_cells(|cell| match self.find_by_textel(&cell, Variant::Normal) {
            Some(i) if self.presets[i].shadow != cell => {
                changed += 1;
                self.presets[i].shadow
            }
            _ => cell,
        });
        changed
    }
}

fn read_customs(path: &Path) -> Result<(Vec<TextelPreset>, Vec<PresetParseError>), PresetError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_presets(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no preset file at {}", path.display());
            Ok((Vec::new(), Vec::new()))
        }
        Err(source) => Err(PresetError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
