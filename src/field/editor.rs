use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// The editable text child. Single line; the cursor always sits at the end
/// of the buffer.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    buffer: String,
}

impl Editor {
    pub(crate) fn new(initial: impl Into<String>) -> Self {
        Self {
            buffer: initial.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Column the terminal cursor should sit at, relative to the editor row.
    pub fn cursor_column(&self) -> u16 {
        UnicodeWidthStr::width(self.buffer.as_str()).min(u16::MAX as usize) as u16
    }

    pub fn intrinsic_width(&self) -> u16 {
        self.cursor_column()
    }

    /// Returns true when the key mutated the buffer.
    pub(crate) fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.buffer.push(ch);
                true
            }
            KeyCode::Backspace => self.buffer.pop().is_some(),
            KeyCode::Delete => {
                if self.buffer.is_empty() {
                    return false;
                }
                self.buffer.clear();
                true
            }
            _ => false,
        }
    }
}
