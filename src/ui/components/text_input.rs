//! Single-line text input shared by the form fields.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

/// Single-line input field with a character-indexed cursor.
///
/// The cursor counts characters, not bytes, so multi-byte names edit
/// correctly.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// Text typed so far
    pub input: String,
    /// Cursor offset, counted in characters
    pub cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
        }
    }

    /// Reset text and cursor
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Byte offset of the cursor within the input
    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert at the cursor and advance past the new character
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.input.remove(at);
        }
    }

    /// Delete
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Home, also Ctrl+A
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// End, also Ctrl+E
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Ctrl+U, kill back to the start of the field
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index();
        self.input = self.input[at..].to_string();
        self.cursor = 0;
    }

    /// Ctrl+K, kill through the end of the field
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index();
        self.input.truncate(at);
    }

    /// Ctrl+W, kill the word before the cursor
    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.byte_index();
        // Spaces behind the cursor go first, then the word itself
        while self.cursor > 0 && self.input.chars().nth(self.cursor - 1) == Some(' ') {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.input.chars().nth(self.cursor - 1) != Some(' ') {
            self.cursor -= 1;
        }
        let start = self.byte_index();
        self.input.drain(start..end);
    }

    /// Draw the text and reverse-video the cursor cell
    pub fn render(&self, area: Rect, buf: &mut Buffer, style: Style) {
        let text = Paragraph::new(self.input.as_str()).style(style);
        text.render(area, buf);

        if area.width > 0 && area.height > 0 {
            let cursor_x = area.x + (self.cursor as u16).min(area.width.saturating_sub(1));
            if cursor_x < area.x + area.width {
                buf[(cursor_x, area.y)]
                    .set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}

impl std::fmt::Display for TextInputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
