//! The custom preset sidecar format.
//!
//! Each preset is three non-empty lines:
//!
//! ```text
//! '~', Cyan, DarkBlue, 1
//! '~', DarkCyan, DarkBlue, 1
//! Deep water
//! ```
//!
//! normal variant, shadow variant, name. Blank lines between records are
//! ignored. Variant lines start with a quote and names never do, so every
//! name line closes a record. A malformed record is skipped as a whole and
//! parsing picks up again after its name.

use crate::error::PresetParseError;
use crate::palette::PaletteColor;
use crate::preset::TextelPreset;
use crate::textel::Textel;

/// Parse `'<char>', <fg>, <bg>, <material>`.
pub fn parse_textel(line: &str) -> Result<Textel, String> {
    let mut chars = line.trim().chars();
    if chars.next() != Some('\'') {
        return Err("expected a quoted glyph".into());
    }
    let glyph = chars.next().ok_or("missing glyph")?;
    if chars.next() != Some('\'') {
        return Err("glyph must be a single quoted character".into());
    }
    let rest = chars.as_str().trim_start();
    let rest = rest
        .strip_prefix(',')
        .ok_or("expected ',' after the glyph")?;

    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    let [fg, bg, material] = fields.as_slice() else {
        return Err(format!("expected 3 fields after the glyph, found {}", fields.len()));
    };
    let fg: PaletteColor = fg.parse().map_err(|e| format!("foreground: {e}"))?;
    let bg: PaletteColor = bg.parse().map_err(|e| format!("background: {e}"))?;
    let material: i32 = material
        .parse()
        .map_err(|_| format!("material {material:?} is not an integer"))?;
    Ok(Textel::new(glyph, fg, bg, material))
}

/// Inverse of [`parse_textel`].
pub fn format_textel(t: &Textel) -> String {
    format!("'{}', {}, {}, {}", t.glyph, t.fg, t.bg, t.material)
}

/// Whether `line` is a variant line rather than a name.
pub fn is_textel_line(line: &str) -> bool {
    line.trim_start().starts_with('\'')
}

/// Parse a whole sidecar file. Good records are returned in file order
/// together with one diagnostic per skipped record.
pub fn parse_presets(text: &str) -> (Vec<TextelPreset>, Vec<PresetParseError>) {
    let mut presets = Vec::new();
    let mut errors = Vec::new();
    let mut pending: Vec<(usize, &str)> = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_textel_line(line) {
            pending.push((i + 1, line));
            continue;
        }
        match parse_record(&pending, i + 1, line, &mut errors) {
            Ok(preset) => presets.push(preset),
            Err(e) => errors.push(e),
        }
        pending.clear();
    }
    if let Some(&(line, _)) = pending.first() {
        errors.push(PresetParseError {
            line,
            reason: format!("{} variant line(s) without a name", pending.len()),
        });
    }
    (presets, errors)
}

/// Build one preset from the variant lines gathered before `name`. Only
/// the last two variant lines belong to the record; earlier ones are
/// leftovers of a record that lost its name and are reported separately.
fn parse_record(
    variants: &[(usize, &str)],
    name_line: usize,
    name: &str,
    errors: &mut Vec<PresetParseError>,
) -> Result<TextelPreset, PresetParseError> {
    let (stray, variants) = variants.split_at(variants.len().saturating_sub(2));
    if let Some(&(line, _)) = stray.first() {
        errors.push(PresetParseError {
            line,
            reason: format!("{} variant line(s) without a name", stray.len()),
        });
    }
    let parse = |&(line, text): &(usize, &str)| {
        parse_textel(text).map_err(|reason| PresetParseError { line, reason })
    };
    match variants {
        [normal, shadow] => Ok(TextelPreset::new(name, parse(normal)?, parse(shadow)?)),
        [(line, _)] => Err(PresetParseError {
            line: *line,
            reason: "incomplete record (2 of 3 lines)".into(),
        }),
        _ => Err(PresetParseError {
            line: name_line,
            reason: "name without variant lines".into(),
        }),
    }
}

/// Write presets in the sidecar format, one blank line between records.
pub fn serialize_presets(presets: &[TextelPreset]) -> String {
    let mut out = String::new();
    for (i, p) in presets.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format_textel(&p.normal));
        out.push('\n');
        out.push_str(&format_textel(&p.shadow));
        out.push('\n');
        out.push_str(&p.name);
        out.push('\n');
    }
    out
}
