//! The custom preset editor: choose edit or add, pick a custom index,
//! then fill in the normal and shadow variants.

use textur_core::{Key, Pos, Rect, Screen};
use textur_edit::preset_file::is_textel_line;
use textur_edit::{PaletteColor, PresetCatalog, PresetError, Textel, TextelPreset};

use crate::colors;
use crate::dialog::{centered, draw_box};

const MAX_NAME: usize = 32;
const MAX_INDEX_DIGITS: usize = 4;

/// What the editor wants done after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetEditorAction {
    Pending,
    /// The key was rejected; show the message and stay open.
    Invalid(String),
    /// Store `preset` at custom index `index` (append when `None`).
    Commit {
        index: Option<usize>,
        preset: TextelPreset,
    },
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    ChooseEditOrAdd { edit: bool },
    EnterIndex(String),
    EditNormalVariant,
    EditShadowVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Glyph,
    Fg,
    Bg,
    Material,
    Name,
}

static FIELDS: [FormField; 5] = [
    FormField::Glyph,
    FormField::Fg,
    FormField::Bg,
    FormField::Material,
    FormField::Name,
];

/// Field-by-field editor for one textel. The normal variant's form also
/// carries the preset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextelForm {
    pub textel: Textel,
    field: FormField,
    has_name: bool,
}

impl TextelForm {
    fn new(textel: Textel, has_name: bool) -> Self {
        Self {
            textel,
            field: FormField::Glyph,
            has_name,
        }
    }

    #[inline]
    pub fn field(&self) -> FormField {
        self.field
    }

    fn fields(&self) -> &'static [FormField] {
        if self.has_name { &FIELDS } else { &FIELDS[..4] }
    }

    fn cycle(&mut self, forward: bool) {
        let fields = self.fields();
        let i = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        let n = fields.len();
        self.field = fields[if forward { (i + 1) % n } else { (i + n - 1) % n }];
    }

    fn update(&mut self, key: Key, name: &mut String) {
        match (key, self.field) {
            (Key::Tab, _) => self.cycle(true),
            (Key::BackTab, _) => self.cycle(false),

            (Key::Char(c), FormField::Glyph) if !c.is_control() => self.textel.glyph = c,

            (Key::ArrowRight | Key::ArrowUp, FormField::Fg) => self.textel.fg = self.textel.fg.next(),
            (Key::ArrowLeft | Key::ArrowDown, FormField::Fg) => self.textel.fg = self.textel.fg.prev(),
            (Key::ArrowRight | Key::ArrowUp, FormField::Bg) => self.textel.bg = self.textel.bg.next(),
            (Key::ArrowLeft | Key::ArrowDown, FormField::Bg) => self.textel.bg = self.textel.bg.prev(),

            (Key::Char(c @ '0'..='9'), FormField::Material) => {
                let d = c as i32 - '0' as i32;
                let m = self.textel.material;
                let next = if m < 0 {
                    m.checked_mul(10).and_then(|m| m.checked_sub(d))
                } else {
                    m.checked_mul(10).and_then(|m| m.checked_add(d))
                };
                if let Some(next) = next {
                    self.textel.material = next;
                }
            }
            (Key::Char('-'), FormField::Material) => {
                self.textel.material = self.textel.material.saturating_neg();
            }
            (Key::Backspace, FormField::Material) => self.textel.material /= 10,
            (Key::ArrowRight | Key::ArrowUp, FormField::Material) => {
                self.textel.material = self.textel.material.saturating_add(1);
            }
            (Key::ArrowLeft | Key::ArrowDown, FormField::Material) => {
                self.textel.material = self.textel.material.saturating_sub(1);
            }

            (Key::Char(c), FormField::Name) if !c.is_control() && name.chars().count() < MAX_NAME => {
                name.push(c);
            }
            (Key::Backspace, FormField::Name) => {
                name.pop();
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetEditor {
    step: Step,
    /// Custom index being edited; `None` adds a new preset.
    target: Option<usize>,
    /// Starting values for a new preset.
    template: TextelPreset,
    name: String,
    normal: TextelForm,
    shadow: TextelForm,
}

impl PresetEditor {
    /// Open the editor. New presets start from `template`'s textels.
    pub fn new(template: TextelPreset) -> Self {
        Self {
            step: Step::ChooseEditOrAdd { edit: false },
            target: None,
            normal: TextelForm::new(template.normal, true),
            shadow: TextelForm::new(template.shadow, false),
            name: String::new(),
            template,
        }
    }

    #[inline]
    pub fn step(&self) -> &Step {
        &self.step
    }

    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self, target: Option<usize>, preset: &TextelPreset, name: &str) {
        self.target = target;
        self.normal = TextelForm::new(preset.normal, true);
        self.shadow = TextelForm::new(preset.shadow, false);
        self.name = name.to_string();
        self.step = Step::EditNormalVariant;
    }

    fn choose(&mut self, edit: bool, catalog: &PresetCatalog) -> PresetEditorAction {
        if !edit {
            let template = self.template.clone();
            self.start(None, &template, "");
        } else if catalog.custom_len() == 0 {
            return PresetEditorAction::Invalid("there are no custom presets to edit".into());
        } else {
            self.step = Step::EnterIndex(String::new());
        }
        PresetEditorAction::Pending
    }

    pub fn update(&mut self, key: Key, catalog: &PresetCatalog) -> PresetEditorAction {
        if key == Key::Escape {
            return PresetEditorAction::Cancel;
        }
        match &mut self.step {
            Step::ChooseEditOrAdd { edit } => match key {
                Key::Char('e') => self.choose(true, catalog),
                Key::Char('a') => self.choose(false, catalog),
                Key::Enter => {
                    let edit = *edit;
                    self.choose(edit, catalog)
                }
                Key::ArrowUp | Key::ArrowDown | Key::Tab | Key::BackTab => {
                    *edit = !*edit;
                    PresetEditorAction::Pending
                }
                _ => PresetEditorAction::Pending,
            },
            Step::EnterIndex(buf) => match key {
                Key::Char(c @ '0'..='9') if buf.len() < MAX_INDEX_DIGITS => {
                    buf.push(c);
                    PresetEditorAction::Pending
                }
                Key::Backspace => {
                    buf.pop();
                    PresetEditorAction::Pending
                }
                Key::Enter => {
                    let Ok(i) = buf.parse::<usize>() else {
                        return PresetEditorAction::Invalid("enter a custom preset index".into());
                    };
                    buf.clear();
                    match catalog.custom(i) {
                        Some(p) => {
                            let p = p.clone();
                            self.start(Some(i), &p, &p.name);
                            PresetEditorAction::Pending
                        }
                        None => PresetEditorAction::Invalid(PresetError::NoSuchCustom(i).to_string()),
                    }
                }
                _ => PresetEditorAction::Pending,
            },
            Step::EditNormalVariant => match key {
                Key::Enter if self.name.trim().is_empty() => {
                    PresetEditorAction::Invalid("a preset needs a name".into())
                }
                Key::Enter if is_textel_line(&self.name) => {
                    PresetEditorAction::Invalid("a preset name cannot start with a quote".into())
                }
                Key::Enter => {
                    self.step = Step::EditShadowVariant;
                    PresetEditorAction::Pending
                }
                _ => {
                    self.normal.update(key, &mut self.name);
                    PresetEditorAction::Pending
                }
            },
            Step::EditShadowVariant => match key {
                Key::Enter => PresetEditorAction::Commit {
                    index: self.target,
                    preset: TextelPreset::new(self.name.trim(), self.normal.textel, self.shadow.textel),
                },
                _ => {
                    self.shadow.update(key, &mut self.name);
                    PresetEditorAction::Pending
                }
            },
        }
    }

    pub fn draw(&self, screen: &mut Screen, catalog: &PresetCatalog) {
        let area = centered(screen.size(), Pos::new(13, 46));
        let inner = draw_box(screen, area, "Preset editor");
        let line = |i: i32| inner.min.shift(i, 1);
        match &self.step {
            Step::ChooseEditOrAdd { edit } => {
                let (e, a) = if *edit {
                    (colors::SELECTED, colors::BOX)
                } else {
                    (colors::BOX, colors::SELECTED)
                };
                screen.put_str(line(1), " Add a new preset (a) ", a);
                screen.put_str(line(2), " Edit a custom preset (e) ", e);
            }
            Step::EnterIndex(buf) => {
                let n = screen.put_str(line(0), "Custom preset index: ", colors::BOX);
                screen.put_str(line(0).shift(0, n), &format!("{buf:<4}"), colors::SELECTED);
                let rows = (inner.rows() - 3).max(0) as usize;
                for (i, p) in catalog.customs().iter().enumerate().take(rows) {
                    let p0 = line(i as i32 + 2);
                    screen.put(p0, p.normal.to_glyph());
                    screen.put_str(p0.shift(0, 2), &format!("{i}: {}", p.name), colors::BOX);
                }
            }
            Step::EditNormalVariant => {
                draw_form(screen, inner, "Normal variant", &self.normal, Some(&self.name));
            }
            Step::EditShadowVariant => {
                draw_form(screen, inner, "Shadow variant", &self.shadow, None);
            }
        }
        screen.put_str(
            line(inner.rows() - 1),
            "Tab field  ←→ change  Enter next  Esc cancel",
            colors::HINT,
        );
    }
}

fn draw_form(screen: &mut Screen, inner: Rect, heading: &str, form: &TextelForm, name: Option<&str>) {
    let at = |i: i32| inner.min.shift(i, 1);
    screen.put_str(at(0), heading, colors::BOX);
    screen.put(at(0).shift(0, heading.chars().count() as i32 + 2), form.textel.to_glyph());

    let t = form.textel;
    let mut rows: Vec<(FormField, &str, String)> = vec![
        (FormField::Glyph, "Glyph", t.glyph.to_string()),
        (FormField::Fg, "Fg", color_label(t.fg)),
        (FormField::Bg, "Bg", color_label(t.bg)),
        (FormField::Material, "Material", t.material.to_string()),
    ];
    if let Some(name) = name {
        rows.push((FormField::Name, "Name", name.to_string()));
    }
    for (i, (field, label, value)) in rows.into_iter().enumerate() {
        let p = at(i as i32 + 2);
        let n = screen.put_str(p, &format!("{label:<10}"), colors::BOX);
        let style = if field == form.field {
            colors::SELECTED
        } else {
            colors::BOX
        };
        screen.put_str(p.shift(0, n), &format!(" {value} "), style);
    }
}

fn color_label(c: PaletteColor) -> String {
    format!("‹ {c} ›")
}
