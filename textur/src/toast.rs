//! Short status messages on the bottom line.

/// How many key events a message stays on screen.
pub const TOAST_TTL: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Info,
    Error,
}

/// The current message, if any. Repeats of the same message are collapsed
/// into a counter.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    text: String,
    style: Option<ToastStyle>,
    dups: u32,
    ttl: u8,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>, style: ToastStyle) {
        let text = uppercase_first(&text.into());
        if self.ttl > 0 && self.style == Some(style) && self.text == text {
            self.dups += 1;
        } else {
            self.text = text;
            self.style = Some(style);
            self.dups = 0;
        }
        self.ttl = TOAST_TTL;
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.show(text, ToastStyle::Info);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(text, ToastStyle::Error);
    }

    /// Age the message by one input event.
    pub fn tick(&mut self) {
        self.ttl = self.ttl.saturating_sub(1);
    }

    /// The text to display and its style, while the message is live.
    pub fn current(&self) -> Option<(String, ToastStyle)> {
        if self.ttl == 0 {
            return None;
        }
        let style = self.style?;
        let text = if self.dups > 0 {
            format!("{} ({}×)", self.text, self.dups + 1)
        } else {
            self.text.clone()
        };
        Some((text, style))
    }
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}
