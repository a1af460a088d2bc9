//! Rendering of the editor into a [`Screen`].
//!
//! Layout: status line on row 0, the drawing area below it, messages on
//! the last row. Menus and dialogs are drawn on top of the drawing area.

use textur_core::{Attr, Glyph, Pos, Rect, Screen};
use textur_edit::{Textel, Variant};

use crate::colors;
use crate::dialog::{centered, draw_box};
use crate::editor::{Editor, EditorMode};
use crate::toast::ToastStyle;

const KEYS_HELP: &[(&str, &str)] = &[
    ("arrows / wasd", "move cursor"),
    ("shift / WASD", "move a page"),
    ("space", "paint cell"),
    ("c", "clear cell"),
    ("b / B", "small / large brush"),
    ("r / R", "random small / large brush"),
    ("f", "fill visible area"),
    ("z / Z", "undo / redo"),
    ("p", "pick preset from cell"),
    ("-", "preset menu"),
    ("i", "toggle shadow variant"),
    ("m", "material overlay"),
    ("t", "tracing overlay"),
    ("g", "go to position"),
    ("e", "preset editor"),
    ("x", "save"),
    ("q / ctrl+c", "quit"),
    ("k", "this legend"),
];

const MENU_WIDTH: i32 = 34;

pub(crate) fn draw(ed: &Editor, screen: &mut Screen) {
    draw_texture(ed, screen);
    draw_status(ed, screen);
    draw_toast(ed, screen);
    match &ed.mode {
        EditorMode::Normal => {}
        EditorMode::MenuOpen => draw_menu(ed, screen),
        EditorMode::ConfirmOverwrite(d) => d.draw(screen, "Save", "Replace the existing file?"),
        EditorMode::ConfirmQuit(d) => d.draw(screen, "Quit", "Discard unsaved changes?"),
        EditorMode::GotoInput(d) => d.draw(screen),
        EditorMode::KeysHelp => draw_help(screen),
        EditorMode::PresetEditor(pe) => pe.draw(screen, &ed.catalog),
    }
}

/// Where the drawing area starts on screen.
const ORIGIN: Pos = Pos::new(1, 0);

fn draw_texture(ed: &Editor, screen: &mut Screen) {
    for s in Rect::with_size(ed.view.visible()) {
        let p = ed.view.to_texture(s);
        let glyph = match ed.texture.get(p) {
            Ok(cell) => cell_glyph(ed, p, cell),
            Err(_) => colors::OUTSIDE,
        };
        screen.put(ORIGIN + s, glyph);
    }
    let c = ORIGIN + ed.view.to_screen(ed.view.cursor());
    let g = screen.at(c);
    screen.put(c, g.with_attrs(g.attrs | Attr::REVERSE));
}

fn cell_glyph(ed: &Editor, p: Pos, cell: Textel) -> Glyph {
    if ed.show_materials {
        return material_glyph(cell.material).with_bg(cell.bg.rgb());
    }
    if cell.is_empty() && ed.show_tracing {
        if let Some(under) = ed.tracing.as_ref().and_then(|t| t.get(p).ok()) {
            if !under.is_empty() {
                return under.to_glyph().with_attrs(Attr::DIM);
            }
        }
    }
    cell.to_glyph()
}

/// One base-36 digit for small material ids, `?` otherwise.
pub fn material_glyph(material: i32) -> Glyph {
    let ch = u32::try_from(material)
        .ok()
        .and_then(|m| char::from_digit(m, 36))
        .unwrap_or('?');
    Glyph::new(ch).with_attrs(Attr::BOLD)
}

fn draw_status(ed: &Editor, screen: &mut Screen) {
    let cols = screen.size().col;
    screen.fill(Rect::new(Pos::ZERO, Pos::new(1, cols)), colors::STATUS);

    let (rows, tcols) = ed.texture.size();
    let mut col = screen.put_str(Pos::ZERO, &format!(" {}", ed.path.display()), colors::STATUS);
    if ed.modified {
        col += screen.put_str(Pos::new(0, col), " *", colors::STATUS_MODIFIED);
    }
    let variant = match ed.variant {
        Variant::Normal => "normal",
        Variant::Shadow => "shadow",
    };
    let preset = ed.preset().map_or("-", |p| p.name.as_str());
    let mut flags = String::new();
    if ed.show_materials {
        flags.push_str(" [mat]");
    }
    if ed.show_tracing {
        flags.push_str(" [trace]");
    }
    let info = format!(
        "  {rows}x{tcols}  {}  {preset} ({variant}){flags}  k: keys",
        ed.view.cursor()
    );
    col += screen.put_str(Pos::new(0, col), &info, colors::STATUS);
    if let Some(t) = ed.current_textel() {
        screen.put(Pos::new(0, col + 1), t.to_glyph());
    }
}

fn draw_toast(ed: &Editor, screen: &mut Screen) {
    let Some((text, style)) = ed.toast.current() else {
        return;
    };
    let style = match style {
        ToastStyle::Info => colors::INFO,
        ToastStyle::Error => colors::ERROR,
    };
    let row = screen.size().row - 1;
    if row > 0 {
        screen.put_str(Pos::new(row, 1), &text, style);
    }
}

fn draw_menu(ed: &Editor, screen: &mut Screen) {
    let size = screen.size();
    let height = size.row - ORIGIN.row - 1;
    let width = MENU_WIDTH.min(size.col);
    let area = Rect::new(Pos::new(ORIGIN.row, size.col - width), Pos::new(height, width));
    let inner = draw_box(screen, area, "Presets");
    let rows = inner.rows().max(0) as usize;
    if rows == 0 {
        return;
    }

    let catalog = &ed.catalog;
    let first = ed
        .selected
        .saturating_sub(rows / 2)
        .min(catalog.len().saturating_sub(rows));
    for (line, (i, p)) in catalog.presets().iter().enumerate().skip(first).take(rows).enumerate() {
        let at = inner.min.shift(line as i32, 0);
        let style = if i == ed.selected {
            colors::SELECTED
        } else {
            colors::BOX
        };
        screen.put(at, p.variant(ed.variant).to_glyph());
        let mark = if catalog.is_custom(i) { '*' } else { ' ' };
        let label = format!("{mark}{:<w$}{:>3}", p.name, p.material(), w = (inner.cols() - 5).max(0) as usize);
        screen.put_str(at.shift(0, 1), &label, style);
    }
}

fn draw_help(screen: &mut Screen) {
    let height = KEYS_HELP.len() as i32 + 2;
    let area = centered(screen.size(), Pos::new(height, 44));
    let inner = draw_box(screen, area, "Keys");
    for (i, (keys, what)) in KEYS_HELP.iter().enumerate() {
        let at = inner.min.shift(i as i32, 1);
        let n = screen.put_str(at, &format!("{keys:<16}"), colors::BOX.with_attrs(Attr::BOLD));
        screen.put_str(at.shift(0, n), what, colors::BOX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EditorConfig, FileMode};
    use textur_core::{Key, Model, Msg};
    use textur_edit::PaletteColor;
    use textur_edit::persist::save_texture;
    use textur_edit::Texture;

    fn editor(dir: &tempfile::TempDir, tracing: bool) -> Editor {
        let tracing_path = tracing.then(|| {
            let path = dir.path().join("under.txur");
            let mut t = Texture::new(4, 4);
            t.set(Pos::new(0, 1), Textel::new('T', PaletteColor::White, PaletteColor::Black, 5))
                .unwrap();
            save_texture(&path, &t).unwrap();
            path
        });
        let mut ed = Editor::new(EditorConfig {
            texture_path: dir.path().join("map.txur"),
            file_mode: FileMode::New { rows: 4, cols: 4 },
            tracing_path,
            presets_path: dir.path().join("presets.txt"),
            seed: Some(3),
        })
        .unwrap();
        ed.update(Msg::Screen { rows: 10, cols: 50 });
        ed
    }

    fn render(ed: &Editor) -> Screen {
        let mut screen = Screen::new(10, 50);
        ed.draw(&mut screen);
        screen
    }

    fn row_text(screen: &Screen, row: i32) -> String {
        (0..screen.size().col).map(|c| screen.at(Pos::new(row, c)).ch).collect()
    }

    #[test]
    fn status_line_and_cursor() {
        let dir = tempfile::tempdir().unwrap();
        let ed = editor(&dir, false);
        let screen = render(&ed);
        assert!(row_text(&screen, 0).contains("map.txur"));
        assert!(screen.at(ORIGIN).attrs.contains(Attr::REVERSE));
        // beyond the 4x4 texture
        assert_eq!(screen.at(ORIGIN.shift(0, 5)).ch, '·');
    }

    #[test]
    fn tracing_shows_dimmed_under_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(&dir, true);
        let screen = render(&ed);
        let g = screen.at(ORIGIN.shift(0, 1));
        assert_eq!(g.ch, 'T');
        assert!(g.attrs.contains(Attr::DIM));

        ed.update(Msg::key(Key::Char('t')));
        assert_eq!(render(&ed).at(ORIGIN.shift(0, 1)).ch, ' ');
    }

    #[test]
    fn material_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(&dir, false);
        ed.update(Msg::key(Key::Char(' ')));
        ed.update(Msg::key(Key::Char('m')));
        let material = ed.current_textel().unwrap().material;
        assert_eq!(render(&ed).at(ORIGIN).ch, material_glyph(material).ch);
        assert_eq!(material_glyph(11).ch, 'b');
        assert_eq!(material_glyph(-1).ch, '?');
    }

    #[test]
    fn menu_highlights_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(&dir, false);
        ed.update(Msg::key(Key::Char('-')));
        ed.update(Msg::key(Key::ArrowDown));
        let screen = render(&ed);
        let name = &ed.preset().unwrap().name;
        let row = (1..10)
            .find(|&r| row_text(&screen, r).contains(name.as_str()))
            .unwrap();
        let col = row_text(&screen, row).find(name.as_str()).unwrap();
        let col = row_text(&screen, row)[..col].chars().count() as i32;
        assert!(screen.at(Pos::new(row, col)).attrs.contains(Attr::REVERSE));
    }

    #[test]
    fn toast_on_last_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(&dir, false);
        ed.update(Msg::key(Key::Char('z')));
        assert!(row_text(&render(&ed), 9).contains("Nothing to undo"));
    }

    #[test]
    fn help_legend_lists_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = editor(&dir, false);
        ed.update(Msg::key(Key::Char('k')));
        let mut screen = Screen::new(30, 60);
        ed.draw(&mut screen);
        let all: String = (0..30).map(|r| row_text(&screen, r)).collect();
        assert!(all.contains("preset editor"));
        assert!(all.contains("Keys"));
    }
}
