//! Form widgets for the settings and folder screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme::Palette;

/// Single-line text input with cursor.
///
/// The cursor is tracked as a character index, not a byte index, so
/// multi-byte input edits cleanly. Secret fields render masked.
#[derive(Debug, Clone)]
pub struct TextInput {
    content: String,
    /// Cursor position as character index (0 = before first char)
    cursor: usize,
    label: String,
    masked: bool,
}

impl TextInput {
    /// Create a new text input with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            label: label.into(),
            masked: false,
        }
    }

    /// Render the content as bullets, for credentials.
    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Set initial content, cursor at the end.
    #[must_use]
    pub fn with_initial(mut self, value: impl Into<String>) -> Self {
        self.set_content(value);
        self
    }

    /// Replace the content, cursor at the end.
    pub fn set_content(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.content.chars().count();
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn cursor_byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Handle a key event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if c == 'u' {
                        self.content.clear();
                        self.cursor = 0;
                        return true;
                    }
                    return false;
                }
                let byte_idx = self.cursor_byte_index();
                self.content.insert(byte_idx, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte_idx = self.cursor_byte_index();
                    self.content.remove(byte_idx);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let byte_idx = self.cursor_byte_index();
                    self.content.remove(byte_idx);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    fn display_content(&self) -> String {
        if self.masked {
            "•".repeat(self.char_count())
        } else {
            self.content.clone()
        }
    }

    /// Render the input into a one-row bordered box.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool, palette: &Palette) {
        let border_style = if focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.dim)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        let inner = block.inner(area);
        block.render(area, buf);

        let shown = self.display_content();
        if focused {
            let byte_idx = shown
                .char_indices()
                .nth(self.cursor)
                .map_or(shown.len(), |(i, _)| i);
            let (before, after) = shown.split_at(byte_idx);
            let cursor_char = after.chars().next().unwrap_or(' ');
            let after_cursor: String = after.chars().skip(1).collect();

            let line = Line::from(vec![
                Span::styled(before.to_string(), Style::default().fg(palette.text)),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default()
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(after_cursor, Style::default().fg(palette.text)),
            ]);
            Paragraph::new(line).render(inner, buf);
        } else {
            Paragraph::new(shown).style(Style::default().fg(palette.text)).render(inner, buf);
        }
    }
}
