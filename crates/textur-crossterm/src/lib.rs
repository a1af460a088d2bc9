//! Crossterm terminal driver for textur.
//!
//! Provides a [`CrosstermDriver`] that implements [`textur_core::Driver`]:
//! blocking key reads in raw mode on the alternate screen, and flushing of
//! diffed frames as positioned, coloured glyphs.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{debug, warn};

use textur_core::{Attr, Driver, Frame, Key, ModMask, Msg, Rgb};

/// Maps an optional [`Rgb`] to a crossterm colour; `None` is the terminal
/// default.
fn to_ct_color(c: Option<Rgb>) -> CtColor {
    match c {
        Some(Rgb { r, g, b }) => CtColor::Rgb { r, g, b },
        None => CtColor::Reset,
    }
}

fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate one crossterm event. Key releases and unmapped keys are
/// dropped.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => to_key(code).map(|key| Msg::key_mod(key, to_mod_mask(modifiers))),
        Event::Resize(cols, rows) => Some(Msg::Screen {
            rows: rows as i32,
            cols: cols as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    out: Stdout,
    active: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            active: false,
        }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.out.flush()?;
        debug!("terminal initialised");
        Ok(())
    }

    fn size(&self) -> io::Result<(i32, i32)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows as i32, cols as i32))
    }

    fn next_msg(&mut self) -> io::Result<Option<Msg>> {
        loop {
            if let Some(msg) = to_msg(event::read()?) {
                return Ok(Some(msg));
            }
        }
    }

    fn flush(&mut self, frame: Frame) -> io::Result<()> {
        for (p, g) in &frame.cells {
            queue!(
                self.out,
                cursor::MoveTo(p.col as u16, p.row as u16),
                SetForegroundColor(to_ct_color(g.fg)),
                SetBackgroundColor(to_ct_color(g.bg))
            )?;
            if g.attrs.contains(Attr::BOLD) {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if g.attrs.contains(Attr::REVERSE) {
                queue!(self.out, SetAttribute(Attribute::Reverse))?;
            }
            if g.attrs.contains(Attr::DIM) {
                queue!(self.out, SetAttribute(Attribute::Dim))?;
            }
            if g.attrs.contains(Attr::UNDERLINE) {
                queue!(self.out, SetAttribute(Attribute::Underlined))?;
            }
            queue!(self.out, Print(g.ch))?;
            if !g.attrs.is_empty() {
                queue!(self.out, SetAttribute(Attribute::Reset))?;
            }
        }
        self.out.flush()
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = queue!(self.out, cursor::Show, terminal::LeaveAlternateScreen)
            .and_then(|()| self.out.flush())
        {
            warn!("failed to restore screen: {e}");
        }
        let _ = terminal::disable_raw_mode();
    }
}
