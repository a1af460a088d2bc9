//! Texture files.
//!
//! ## Format
//!
//! Little-endian throughout:
//! ```text
//! [magic: b"TXUR"]
//! [version: u8] (= 1)
//! [rows: u32] [cols: u32]
//! rows*cols cells, row-major:
//!   [glyph: u32]  (Unicode scalar value)
//!   [fg: u8] [bg: u8]  (palette index)
//!   [material: i32]
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::error::PersistError;
use crate::palette::PaletteColor;
use crate::textel::Textel;
use crate::texture::Texture;

pub const MAGIC: &[u8; 4] = b"TXUR";
pub const VERSION: u8 = 1;

pub use crate::texture::MAX_CELLS;

/// Bytes per serialized cell: glyph(4) + fg(1) + bg(1) + material(4) = 10
const CELL_SIZE: usize = 10;

/// Write `texture` to `w`.
pub fn write_texture<W: Write>(w: &mut W, texture: &Texture) -> io::Result<()> {
    let (rows, cols) = texture.size();
    w.write_all(MAGIC)?;
    w.write_all(&[VERSION])?;
    w.write_all(&(rows as u32).to_le_bytes())?;
    w.write_all(&(cols as u32).to_le_bytes())?;

    let mut buf = [0u8; CELL_SIZE];
    for t in texture.cells() {
        buf[0..4].copy_from_slice(&(t.glyph as u32).to_le_bytes());
        buf[4] = t.fg.index();
        buf[5] = t.bg.index();
        buf[6..10].copy_from_slice(&t.material.to_le_bytes());
        w.write_all(&buf)?;
    }
    Ok(())
}

fn read_exact<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<(), PersistError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => PersistError::Truncated,
        _ => PersistError::Stream(e),
    })
}

fn read_u32<R: Read>(r: &mut R) -> Result<u32, PersistError> {
    let mut b = [0u8; 4];
    read_exact(r, &mut b)?;
    Ok(u32::from_le_bytes(b))
}

fn color(i: u8) -> Result<PaletteColor, PersistError> {
    PaletteColor::from_index(i).ok_or(PersistError::InvalidColor(i))
}

/// Read a texture from `r`.
pub fn read_texture<R: Read>(r: &mut R) -> Result<Texture, PersistError> {
    let mut magic = [0u8; 4];
    read_exact(r, &mut magic)?;
    if &magic != MAGIC {
        return Err(PersistError::BadMagic);
    }
    let mut version = [0u8; 1];
    read_exact(r, &mut version)?;
    if version[0] != VERSION {
        return Err(PersistError::UnsupportedVersion(version[0]));
    }
    let rows = read_u32(r)?;
    let cols = read_u32(r)?;
    let n = u64::from(rows) * u64::from(cols);
    if n > MAX_CELLS as u64 || rows as usize > MAX_CELLS || cols as usize > MAX_CELLS {
        return Err(PersistError::TooLarge { rows, cols });
    }

    let mut cells = Vec::with_capacity(n as usize);
    let mut buf = [0u8; CELL_SIZE];
    for _ in 0..n {
        read_exact(r, &mut buf)?;
        let code = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let glyph = char::from_u32(code).ok_or(PersistError::InvalidGlyph(code))?;
        let material = i32::from_le_bytes([buf[6], buf[7], buf[8], buf[9]]);
        cells.push(Textel::new(glyph, color(buf[4])?, color(buf[5])?, material));
    }
    Texture::from_cells(rows as usize, cols as usize, cells).ok_or(PersistError::Truncated)
}

/// Write `texture` to the file at `path`, replacing it.
pub fn save_texture(path: &Path, texture: &Texture) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|e| PersistError::io(path, e))?;
    let mut w = BufWriter::new(file);
    write_texture(&mut w, texture)
        .and_then(|()| w.flush())
        .map_err(|e| PersistError::io(path, e))?;
    let (rows, cols) = texture.size();
    info!("saved {rows}x{cols} texture to {}", path.display());
    Ok(())
}

/// Read the texture stored at `path`.
pub fn load_texture(path: &Path) -> Result<Texture, PersistError> {
    let file = File::open(path).map_err(|e| PersistError::io(path, e))?;
    let texture = read_texture(&mut BufReader::new(file)).map_err(|e| match e {
        PersistError::Stream(e) => PersistError::io(path, e),
        other => other,
    })?;
    let (rows, cols) = texture.size();
    info!("loaded {rows}x{cols} texture from {}", path.display());
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textur_core::Pos;

    fn sample() -> Texture {
        let mut t = Texture::new(3, 4);
        t.set(Pos::new(0, 0), Textel::new('♣', PaletteColor::Green, PaletteColor::Black, 13))
            .unwrap();
        t.set(Pos::new(2, 3), Textel::new('~', PaletteColor::Red, PaletteColor::DarkRed, -7))
            .unwrap();
        t
    }

    #[test]
    fn stream_round_trip() {
        let tex = sample();
        let mut buf = Vec::new();
        write_texture(&mut buf, &tex).unwrap();
        assert_eq!(buf.len(), 4 + 1 + 8 + 12 * CELL_SIZE);
        let back = read_texture(&mut buf.as_slice()).unwrap();
        assert_eq!(back, tex);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txur");
        let tex = sample();
        save_texture(&path, &tex).unwrap();
        assert_eq!(load_texture(&path).unwrap(), tex);
    }

    #[test]
    fn rejects_bad_headers() {
        let mut buf = Vec::new();
        write_texture(&mut buf, &sample()).unwrap();

        let mut bad = buf.clone();
        bad[0] = b'X';
        assert!(matches!(read_texture(&mut bad.as_slice()), Err(PersistError::BadMagic)));

        let mut bad = buf.clone();
        bad[4] = 9;
        assert!(matches!(
            read_texture(&mut bad.as_slice()),
            Err(PersistError::UnsupportedVersion(9))
        ));

        let short = &buf[..buf.len() - 3];
        assert!(matches!(read_texture(&mut &short[..]), Err(PersistError::Truncated)));
    }

    #[test]
    fn rejects_bad_cells() {
        let mut buf = Vec::new();
        write_texture(&mut buf, &Texture::new(1, 1)).unwrap();
        let mut bad = buf.clone();
        bad[13 + 4] = 200;
        assert!(matches!(
            read_texture(&mut bad.as_slice()),
            Err(PersistError::InvalidColor(200))
        ));
        let mut bad = buf;
        bad[13..17].copy_from_slice(&0xD800u32.to_le_bytes());
        assert!(matches!(
            read_texture(&mut bad.as_slice()),
            Err(PersistError::InvalidGlyph(0xD800))
        ));
    }

    #[test]
    fn rejects_huge_sizes() {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&u32::MAX.to_le_bytes());
        buf.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            read_texture(&mut buf.as_slice()),
            Err(PersistError::TooLarge { .. })
        ));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_texture(&dir.path().join("nope.txur")).unwrap_err();
        assert!(err.to_string().contains("nope.txur"));
    }
}
