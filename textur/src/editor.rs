//! The editor model: texture, history, camera, catalog and the mode state
//! machine that routes key events.

use std::mem;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use textur_core::{Effect, Key, ModMask, Model, Msg, Pos, Screen};
use textur_edit::brush::{self, BrushShape};
use textur_edit::persist::{load_texture, save_texture};
use textur_edit::{
    PresetCatalog, RangeError, Textel, TextelPreset, Texture, UndoBatch, UndoHistory, Variant,
    Viewport,
};

use crate::cli::StartupError;
use crate::config::{EditorConfig, FileMode};
use crate::dialog::{GotoDialog, Outcome, YesNo};
use crate::preset_editor::{PresetEditor, PresetEditorAction};
use crate::toast::Toast;

/// Rows taken by the status line and the message line.
pub const CHROME_ROWS: i32 = 2;

/// Screen size assumed until the driver reports the real one.
const DEFAULT_SCREEN: Pos = Pos::new(24, 80);

/// What the editor is doing. Editing keys only work in `Normal`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Normal,
    MenuOpen,
    ConfirmOverwrite(YesNo),
    ConfirmQuit(YesNo),
    GotoInput(GotoDialog),
    KeysHelp,
    PresetEditor(PresetEditor),
}

pub struct Editor {
    pub(crate) texture: Texture,
    pub(crate) tracing: Option<Texture>,
    history: UndoHistory,
    pub(crate) view: Viewport,
    pub(crate) catalog: PresetCatalog,
    pub(crate) selected: usize,
    pub(crate) variant: Variant,
    pub(crate) show_materials: bool,
    pub(crate) show_tracing: bool,
    pub(crate) mode: EditorMode,
    pub(crate) path: PathBuf,
    file_mode: FileMode,
    pub(crate) modified: bool,
    pub(crate) toast: Toast,
    rng: StdRng,
}

/// Load the preset catalog at `path`, falling back to the built-ins when
/// the file cannot be read. The second value is a note for the user.
pub fn open_catalog(path: &Path) -> (PresetCatalog, Option<String>) {
    match PresetCatalog::load(path) {
        Ok((catalog, errors)) if errors.is_empty() => (catalog, None),
        Ok((catalog, errors)) => {
            let note = format!(
                "skipped {} malformed preset record(s) in {}",
                errors.len(),
                path.display()
            );
            (catalog, Some(note))
        }
        Err(e) => {
            error!("{e}");
            (PresetCatalog::builtin(), Some(e.to_string()))
        }
    }
}

impl Editor {
    /// Build the editor from its configuration: load or create the texture,
    /// the tracing overlay and the preset catalog.
    pub fn new(config: EditorConfig) -> Result<Self, StartupError> {
        let texture = match config.file_mode {
            FileMode::New { rows, cols } => {
                info!("new {rows}x{cols} texture for {}", config.texture_path.display());
                Texture::try_new(rows, cols)?
            }
            FileMode::Edit => load_texture(&config.texture_path).map_err(StartupError::Load)?,
        };
        if texture.is_empty() {
            let (rows, cols) = texture.size();
            return Err(StartupError::EmptySize { rows, cols });
        }

        let mut toast = Toast::new();
        let tracing = config.tracing_path.as_deref().and_then(|p| match load_texture(p) {
            Ok(t) => Some(t),
            Err(e) => {
                warn!("tracing overlay unavailable: {e}");
                toast.error(format!("tracing overlay unavailable: {e}"));
                None
            }
        });
        let (catalog, note) = open_catalog(&config.presets_path);
        if let Some(note) = note {
            toast.error(note);
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        debug!("brush seed {seed}");

        let visible = Pos::new(DEFAULT_SCREEN.row - CHROME_ROWS, DEFAULT_SCREEN.col);
        Ok(Self {
            view: Viewport::new(texture.extent(), visible),
            show_tracing: tracing.is_some(),
            texture,
            tracing,
            history: UndoHistory::new(),
            catalog,
            selected: 0,
            variant: Variant::Normal,
            show_materials: false,
            mode: EditorMode::Normal,
            path: config.texture_path,
            file_mode: config.file_mode,
            modified: false,
            toast,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    #[inline]
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    #[inline]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    #[inline]
    pub fn cursor(&self) -> Pos {
        self.view.cursor()
    }

    #[inline]
    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// The selected preset.
    pub fn preset(&self) -> Option<&TextelPreset> {
        self.catalog.get(self.selected)
    }

    /// The textel the paint keys write.
    pub fn current_textel(&self) -> Option<Textel> {
        self.preset().map(|p| p.variant(self.variant))
    }

    // -------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------

    fn resize(&mut self, rows: i32, cols: i32) {
        debug!("screen resized to {rows}x{cols}");
        self.view
            .set_visible(Pos::new((rows - CHROME_ROWS).max(0), cols.max(0)));
    }

    fn request_quit(&mut self) -> Option<Effect> {
        if !self.modified || matches!(self.mode, EditorMode::ConfirmQuit(_)) {
            info!("quitting");
            return Some(Effect::End);
        }
        debug!("asking before quitting with unsaved changes");
        self.mode = EditorMode::ConfirmQuit(YesNo::new());
        None
    }

    fn handle_key(&mut self, key: Key, mods: ModMask) -> Option<Effect> {
        match mem::take(&mut self.mode) {
            EditorMode::Normal => return self.update_normal(key, mods),
            EditorMode::MenuOpen => self.update_menu(key),
            EditorMode::ConfirmOverwrite(mut d) => match d.update(key) {
                Outcome::Pending => self.mode = EditorMode::ConfirmOverwrite(d),
                Outcome::Done(true) => self.save_now(),
                Outcome::Done(false) | Outcome::Cancelled => self.toast.info("save cancelled"),
            },
            EditorMode::ConfirmQuit(mut d) => match d.update(key) {
                Outcome::Pending => self.mode = EditorMode::ConfirmQuit(d),
                Outcome::Done(true) => {
                    warn!("quitting with unsaved changes");
                    return Some(Effect::End);
                }
                Outcome::Done(false) | Outcome::Cancelled => {}
            },
            EditorMode::GotoInput(mut d) => match d.update(key) {
                Outcome::Pending => self.mode = EditorMode::GotoInput(d),
                Outcome::Done(Some(pos)) => self.goto(pos),
                Outcome::Done(None) => self.toast.error("enter a row and a column"),
                Outcome::Cancelled => {}
            },
            EditorMode::KeysHelp => {
                if !matches!(key, Key::Char('k') | Key::Escape) {
                    self.mode = EditorMode::KeysHelp;
                }
            }
            EditorMode::PresetEditor(mut ed) => match ed.update(key, &self.catalog) {
                PresetEditorAction::Pending => self.mode = EditorMode::PresetEditor(ed),
                PresetEditorAction::Invalid(msg) => {
                    self.toast.error(msg);
                    self.mode = EditorMode::PresetEditor(ed);
                }
                PresetEditorAction::Commit { index, preset } => self.store_preset(index, preset),
                PresetEditorAction::Cancel => debug!("preset editor cancelled"),
            },
        }
        None
    }

    fn update_normal(&mut self, key: Key, mods: ModMask) -> Option<Effect> {
        if let Some((dr, dc, page)) = direction(key, mods) {
            self.view.move_by(dr, dc, page);
            return None;
        }
        match key {
            Key::Char(' ') => self.paint(|tex, at, t, _| brush::point_edit(tex, at, t)),
            Key::Char('c') => {
                let batch = brush::clear(&mut self.texture, self.view.cursor());
                self.commit(batch);
            }
            Key::Char('b') => self.paint(|tex, at, t, _| brush::small_brush(tex, at, t)),
            Key::Char('B') => self.paint(|tex, at, t, _| brush::large_brush(tex, at, t)),
            Key::Char('r') => self.paint(|tex, at, t, rng| brush::random_small_brush(tex, at, t, rng)),
            Key::Char('R') => self.paint(|tex, at, t, rng| brush::random_large_brush(tex, at, t, rng)),
            Key::Char('f') => {
                if let Some(t) = self.current_textel() {
                    let batch = brush::fill_viewport(&mut self.texture, &self.view, t);
                    self.commit(batch);
                }
            }
            Key::Char('z') => self.undo(),
            Key::Char('Z') => self.redo(),
            Key::Char('p') => self.pick(),
            Key::Char('g') => self.enter(EditorMode::GotoInput(GotoDialog::new())),
            Key::Char('-') => self.enter(EditorMode::MenuOpen),
            Key::Char('k') => self.enter(EditorMode::KeysHelp),
            Key::Char('e') => {
                if let Some(p) = self.preset().cloned() {
                    self.enter(EditorMode::PresetEditor(PresetEditor::new(p)));
                }
            }
            Key::Char('m') => self.show_materials = !self.show_materials,
            Key::Char('i') => {
                self.variant = self.variant.toggled();
                debug!("painting {:?} variant", self.variant);
            }
            Key::Char('t') => {
                if self.tracing.is_some() {
                    self.show_tracing = !self.show_tracing;
                } else {
                    self.toast.error("no tracing texture loaded (use -t)");
                }
            }
            Key::Char('x') => self.save(),
            Key::Char('q') => return self.request_quit(),
            _ => {}
        }
        None
    }

    fn enter(&mut self, mode: EditorMode) {
        debug!("entering {mode:?}");
        self.mode = mode;
    }

    fn update_menu(&mut self, key: Key) {
        let last = self.catalog.len().saturating_sub(1);
        match key {
            Key::Char('-') | Key::Escape | Key::Enter => return,
            Key::ArrowUp | Key::Char('w') => self.selected = self.selected.saturating_sub(1),
            Key::ArrowDown | Key::Char('s') => self.selected = (self.selected + 1).min(last),
            Key::ArrowLeft | Key::Char('a') => self.selected = self.catalog.prev_group(self.selected),
            Key::ArrowRight | Key::Char('d') => self.selected = self.catalog.next_group(self.selected),
            _ => {}
        }
        self.mode = EditorMode::MenuOpen;
    }

    // -------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------

    fn commit(&mut self, batch: UndoBatch) {
        if !batch.is_empty() {
            self.modified = true;
        }
        self.history.record(batch);
    }

    /// Run a brush at the cursor with the current textel.
    fn paint(&mut self, f: impl FnOnce(&mut Texture, Pos, Textel, &mut StdRng) -> UndoBatch) {
        let Some(textel) = self.current_textel() else {
            return;
        };
        let batch = f(&mut self.texture, self.view.cursor(), textel, &mut self.rng);
        self.commit(batch);
    }

    fn undo(&mut self) {
        match self.history.undo(&mut self.texture) {
            Some(_) => self.modified = true,
            None => self.toast.error(RangeError::NothingToUndo.to_string()),
        }
    }

    fn redo(&mut self) {
        match self.history.redo(&mut self.texture) {
            Some(_) => self.modified = true,
            None => self.toast.error(RangeError::NothingToRedo.to_string()),
        }
    }

    /// Select the preset matching the cell under the cursor, trying the
    /// current variant first and then the other one.
    fn pick(&mut self) {
        let Ok(cell) = self.texture.get(self.view.cursor()) else {
            return;
        };
        if let Some(i) = self.catalog.find_by_textel(&cell, self.variant) {
            self.selected = i;
        } else if let Some(i) = self.catalog.find_by_textel(&cell, self.variant.toggled()) {
            self.selected = i;
            self.variant = self.variant.toggled();
        } else {
            self.toast.error("no preset matches this cell");
        }
    }

    fn goto(&mut self, pos: Pos) {
        if let Err(e) = self.view.goto(pos) {
            debug!("{e}");
            self.toast.error(e.to_string());
        }
    }

    fn store_preset(&mut self, index: Option<usize>, preset: TextelPreset) {
        let name = preset.name.clone();
        match self.catalog.add_or_update(index, preset) {
            Ok(i) => {
                self.selected = i;
                self.toast.info(format!("preset {name:?} saved"));
            }
            Err(e) => {
                error!("{e}");
                self.toast.error(e.to_string());
            }
        }
    }

    // -------------------------------------------------------------------
    // Saving
    // -------------------------------------------------------------------

    fn save(&mut self) {
        if matches!(self.file_mode, FileMode::New { .. }) && self.path.exists() {
            self.enter(EditorMode::ConfirmOverwrite(YesNo::new()));
        } else {
            self.save_now();
        }
    }

    fn save_now(&mut self) {
        match save_texture(&self.path, &self.texture) {
            Ok(()) => {
                self.modified = false;
                self.file_mode = FileMode::Edit;
                self.toast.info(format!("saved {}", self.path.display()));
            }
            Err(e) => {
                error!("save failed: {e}");
                self.toast.error(format!("save failed: {e}"));
            }
        }
    }
}

/// Cursor movement for a key: `(d_row, d_col, page)`.
fn direction(key: Key, mods: ModMask) -> Option<(i32, i32, bool)> {
    let shift = mods.contains(ModMask::SHIFT);
    let (dr, dc, upper) = match key {
        Key::ArrowUp => (-1, 0, false),
        Key::ArrowDown => (1, 0, false),
        Key::ArrowLeft => (0, -1, false),
        Key::ArrowRight => (0, 1, false),
        Key::Char(c @ ('w' | 'W')) => (-1, 0, c.is_ascii_uppercase()),
        Key::Char(c @ ('s' | 'S')) => (1, 0, c.is_ascii_uppercase()),
        Key::Char(c @ ('a' | 'A')) => (0, -1, c.is_ascii_uppercase()),
        Key::Char(c @ ('d' | 'D')) => (0, 1, c.is_ascii_uppercase()),
        _ => return None,
    };
    Some((dr, dc, shift || upper))
}

fn is_quit_request(key: Key, mods: ModMask) -> bool {
    mods.contains(ModMask::CTRL) && matches!(key, Key::Char('c' | 'q'))
}

impl Model for Editor {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                let (rows, cols) = self.texture.size();
                info!("editing {} ({rows}x{cols})", self.path.display());
                None
            }
            Msg::Screen { rows, cols } => {
                self.resize(rows, cols);
                None
            }
            Msg::KeyDown { key, modifiers } => {
                self.toast.tick();
                if is_quit_request(key, modifiers) {
                    return self.request_quit();
                }
                self.handle_key(key, modifiers)
            }
        }
    }

    fn draw(&self, screen: &mut Screen) {
        crate::draw::draw(self, screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use textur_edit::PaletteColor;

    fn config(dir: &TempDir, mode: FileMode) -> EditorConfig {
        EditorConfig {
            texture_path: dir.path().join("map.txur"),
            file_mode: mode,
            tracing_path: None,
            presets_path: dir.path().join("presets.txt"),
            seed: Some(1),
        }
    }

    fn new_editor(dir: &TempDir, rows: usize, cols: usize) -> Editor {
        let mut ed = Editor::new(config(dir, FileMode::New { rows, cols })).unwrap();
        ed.update(Msg::Screen { rows: 12, cols: 40 });
        ed
    }

    fn press(ed: &mut Editor, keys: &[Key]) -> Option<Effect> {
        let mut last = None;
        for &k in keys {
            last = ed.update(Msg::key(k));
        }
        last
    }

    fn chars(s: &str) -> Vec<Key> {
        s.chars().map(Key::Char).collect()
    }

    #[test]
    fn paint_undo_redo_on_a_small_texture() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 5, 5);
        press(&mut ed, &[Key::ArrowDown, Key::ArrowDown, Key::ArrowRight, Key::ArrowRight]);
        assert_eq!(ed.cursor(), Pos::new(2, 2));
        let a = ed.current_textel().unwrap();

        press(&mut ed, &[Key::Char(' ')]);
        assert_eq!(ed.texture().get(Pos::new(2, 2)), Ok(a));
        assert!(ed.is_modified());

        press(&mut ed, &[Key::Char('z')]);
        assert_eq!(ed.texture().get(Pos::new(2, 2)), Ok(Textel::EMPTY));
        press(&mut ed, &[Key::Char('Z')]);
        assert_eq!(ed.texture().get(Pos::new(2, 2)), Ok(a));
    }

    #[test]
    fn undo_on_empty_history_shows_a_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 5, 5);
        press(&mut ed, &[Key::Char('z')]);
        assert_eq!(ed.toast.current().unwrap().0, "Nothing to undo");
        assert!(!ed.is_modified());
    }

    #[test]
    fn goto_out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 5, 5);
        let mut keys = vec![Key::Char('g')];
        keys.extend(chars("10"));
        keys.push(Key::Tab);
        keys.extend(chars("10"));
        keys.push(Key::Enter);
        press(&mut ed, &keys);
        assert_eq!(ed.mode(), &EditorMode::Normal);
        assert_eq!(ed.cursor(), Pos::ZERO);
        assert!(ed.toast.current().unwrap().0.contains("out of range"));

        press(&mut ed, &[Key::Char('g'), Key::Char('3'), Key::Tab, Key::Char('4'), Key::Enter]);
        assert_eq!(ed.cursor(), Pos::new(3, 4));
    }

    #[test]
    fn editing_keys_are_ignored_outside_normal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 5, 5);
        press(&mut ed, &[Key::Char('k'), Key::Char(' '), Key::ArrowDown]);
        assert_eq!(ed.mode(), &EditorMode::KeysHelp);
        assert_eq!(ed.cursor(), Pos::new(0, 0));
        assert!(!ed.is_modified());
        press(&mut ed, &[Key::Char('k')]);
        assert_eq!(ed.mode(), &EditorMode::Normal);
        press(&mut ed, &[Key::Char('k'), Key::Escape]);
        assert_eq!(ed.mode(), &EditorMode::Normal);

        press(&mut ed, &[Key::Char('-'), Key::Char(' '), Key::Char('b')]);
        assert_eq!(ed.mode(), &EditorMode::MenuOpen);
        assert!(!ed.is_modified());
    }

    #[test]
    fn menu_moves_selection_and_groups() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 5, 5);
        press(&mut ed, &[Key::Char('-'), Key::ArrowDown]);
        assert_eq!(ed.selected, 1);
        press(&mut ed, &[Key::ArrowUp, Key::ArrowUp]);
        assert_eq!(ed.selected, 0);
        press(&mut ed, &[Key::ArrowRight]);
        let first = ed.catalog().get(0).unwrap().material();
        assert_ne!(ed.preset().unwrap().material(), first);
        press(&mut ed, &[Key::Char('-')]);
        assert_eq!(ed.mode(), &EditorMode::Normal);
    }

    #[test]
    fn pick_falls_back_to_the_other_variant() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 5, 5);
        let shadow = ed.catalog().get(3).unwrap().shadow;
        ed.texture.set(Pos::ZERO, shadow).unwrap();
        press(&mut ed, &[Key::Char('p')]);
        assert_eq!(ed.selected, 3);
        assert_eq!(ed.variant, Variant::Shadow);
        assert_eq!(ed.current_textel(), Some(shadow));

        let stray = Textel::new('?', PaletteColor::Magenta, PaletteColor::Black, 99);
        ed.texture.set(Pos::ZERO, stray).unwrap();
        press(&mut ed, &[Key::Char('p')]);
        assert_eq!(ed.selected, 3);
        assert!(ed.toast.current().is_some());
    }

    #[test]
    fn brushes_and_fill() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 30, 60);
        press(&mut ed, &[Key::Char('S'), Key::Char('D')]);
        let c = ed.cursor();
        assert_eq!(c, Pos::new(10, 40));
        press(&mut ed, &[Key::Char('B')]);
        let t = ed.current_textel().unwrap();
        assert_eq!(ed.texture().get(c.shift(0, 9)), Ok(t));
        press(&mut ed, &[Key::Char('z'), Key::Char('r')]);
        assert_eq!(ed.texture().get(c), Ok(t));
        press(&mut ed, &[Key::Char('f')]);
        // the view shows rows 10..20 and cols 40..60 of the texture
        let visible: Vec<Pos> = ed.view.visible_cells().collect();
        assert_eq!(visible.len(), 10 * 20);
        assert!(visible.iter().all(|&p| ed.texture().get(p) == Ok(t)));
        assert_eq!(ed.texture().get(Pos::new(25, 5)), Ok(Textel::EMPTY));
    }

    #[test]
    fn save_writes_file_and_clears_modified() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 4, 6);
        press(&mut ed, &[Key::Char(' '), Key::Char('x')]);
        assert!(!ed.is_modified());
        let back = load_texture(&dir.path().join("map.txur")).unwrap();
        assert_eq!(&back, ed.texture());

        // now in edit mode: saving again does not ask
        press(&mut ed, &[Key::Char('c'), Key::Char('x')]);
        assert_eq!(ed.mode(), &EditorMode::Normal);
        assert!(!ed.is_modified());
    }

    #[test]
    fn new_file_over_existing_asks_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txur");
        save_texture(&path, &Texture::new(2, 2)).unwrap();

        let mut ed = new_editor(&dir, 3, 3);
        press(&mut ed, &[Key::Char(' '), Key::Char('x')]);
        assert!(matches!(ed.mode(), EditorMode::ConfirmOverwrite(_)));
        press(&mut ed, &[Key::Enter]);
        // default answer is no
        assert_eq!(ed.mode(), &EditorMode::Normal);
        assert!(ed.is_modified());
        assert_eq!(load_texture(&path).unwrap().size(), (2, 2));

        press(&mut ed, &[Key::Char('x'), Key::ArrowLeft, Key::Enter]);
        assert!(!ed.is_modified());
        assert_eq!(load_texture(&path).unwrap().size(), (3, 3));
    }

    #[test]
    fn failed_save_keeps_modified() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir, FileMode::New { rows: 3, cols: 3 });
        cfg.texture_path = dir.path().join("missing").join("map.txur");
        let mut ed = Editor::new(cfg).unwrap();
        press(&mut ed, &[Key::Char(' '), Key::Char('x')]);
        assert!(ed.is_modified());
        assert!(ed.toast.current().unwrap().0.starts_with("Save failed"));
    }

    #[test]
    fn quit_asks_when_modified() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 3, 3);
        assert_eq!(press(&mut ed, &[Key::Char('q')]), Some(Effect::End));

        let mut ed = new_editor(&dir, 3, 3);
        press(&mut ed, &[Key::Char(' ')]);
        assert_eq!(press(&mut ed, &[Key::Char('q')]), None);
        assert!(matches!(ed.mode(), EditorMode::ConfirmQuit(_)));
        assert_eq!(press(&mut ed, &[Key::Escape]), None);
        assert_eq!(ed.mode(), &EditorMode::Normal);
        assert_eq!(press(&mut ed, &[Key::Char('q'), Key::Char('y')]), Some(Effect::End));
    }

    #[test]
    fn ctrl_c_works_in_any_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 3, 3);
        press(&mut ed, &[Key::Char('g')]);
        let quit = ed.update(Msg::key_mod(Key::Char('c'), ModMask::CTRL));
        assert_eq!(quit, Some(Effect::End));
    }

    #[test]
    fn preset_editor_adds_lava2() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 3, 3);
        let before = ed.catalog().len();

        let mut keys = vec![Key::Char('e'), Key::Char('a'), Key::BackTab];
        keys.extend(chars("Lava2"));
        keys.extend([Key::Enter, Key::Enter]);
        press(&mut ed, &keys);

        assert_eq!(ed.mode(), &EditorMode::Normal);
        assert_eq!(ed.catalog().len(), before + 1);
        assert_eq!(ed.preset().unwrap().name, "Lava2");

        let text = fs::read_to_string(dir.path().join("presets.txt")).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Lava2");
    }

    #[test]
    fn preset_editor_escape_discards() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 3, 3);
        let before = ed.catalog().len();
        let mut keys = vec![Key::Char('e'), Key::Char('a'), Key::BackTab];
        keys.extend(chars("Nope"));
        keys.push(Key::Escape);
        press(&mut ed, &keys);
        assert_eq!(ed.mode(), &EditorMode::Normal);
        assert_eq!(ed.catalog().len(), before);
        assert!(!dir.path().join("presets.txt").exists());
    }

    #[test]
    fn edit_mode_loads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut tex = Texture::new(2, 3);
        let t = Textel::new('#', PaletteColor::Red, PaletteColor::Black, 10);
        tex.set(Pos::new(1, 2), t).unwrap();
        save_texture(&dir.path().join("map.txur"), &tex).unwrap();

        let ed = Editor::new(config(&dir, FileMode::Edit)).unwrap();
        assert_eq!(ed.texture(), &tex);
    }

    #[test]
    fn oversized_new_texture_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mode = FileMode::New { rows: usize::MAX / 2, cols: 3 };
        assert!(matches!(
            Editor::new(config(&dir, mode)),
            Err(StartupError::TooLarge(_))
        ));
    }

    #[test]
    fn missing_texture_in_edit_mode_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Editor::new(config(&dir, FileMode::Edit)),
            Err(StartupError::Load(_))
        ));
    }

    #[test]
    fn bad_tracing_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir, FileMode::New { rows: 2, cols: 2 });
        cfg.tracing_path = Some(dir.path().join("nope.txur"));
        let mut ed = Editor::new(cfg).unwrap();
        assert!(ed.tracing.is_none());
        press(&mut ed, &[Key::Char('t')]);
        assert!(!ed.show_tracing);
    }

    #[test]
    fn cursor_stays_on_screen_after_resize() {
        let dir = tempfile::tempdir().unwrap();
        let mut ed = new_editor(&dir, 100, 100);
        press(&mut ed, &[Key::Char('S'), Key::Char('S'), Key::Char('D')]);
        ed.update(Msg::Screen { rows: 6, cols: 10 });
        let s = ed.view.to_screen(ed.cursor());
        assert!(s.row >= 0 && s.row < 4);
        assert!(s.col >= 0 && s.col < 10);
    }
}
