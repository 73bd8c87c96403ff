//! Single-line text input and the setting dialog built on it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Boxed one-line input that draws its cursor as a reversed cell
pub struct TextInputWidget<'a> {
    value: &'a str,
    cursor: usize,
    placeholder: &'a str,
    title: &'a str,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self {
            value,
            cursor,
            placeholder: "",
            title: "Input",
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn line(&self) -> Line<'a> {
        let caret = Style::default().add_modifier(Modifier::REVERSED);
        if self.value.is_empty() {
            return Line::from(vec![
                Span::styled(" ", caret),
                Span::styled(self.placeholder, Style::default().fg(Color::DarkGray)),
            ]);
        }

        let split = byte_index(self.value, self.cursor);
        let (head, rest) = self.value.split_at(split);
        let mut tail = rest.chars();
        let under = tail.next().map_or_else(|| " ".to_string(), String::from);
        Line::from(vec![
            Span::raw(head),
            Span::styled(under, caret),
            Span::raw(tail.as_str()),
        ])
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.title));
        Paragraph::new(self.line()).block(block).render(area, buf);
    }
}

/// Byte position of the `chars`-th character, or the end of `s`
fn byte_index(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// Value and character cursor of a [`TextInputWidget`]
#[derive(Debug, Default, Clone)]
pub struct TextInputState {
    pub value: String,
    /// Counted in characters, not bytes
    pub cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the cursor after the last character
    pub fn with_value(value: String) -> Self {
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn insert(&mut self, c: char) {
        let at = byte_index(&self.value, self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Removes the character at `index`; false when there is none
    fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        let at = byte_index(&self.value, index);
        self.value.remove(at);
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> TextInputAction {
        let changed = match key.code {
            KeyCode::Enter => return TextInputAction::Submit,
            KeyCode::Esc => return TextInputAction::Cancel,
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.remove_at(self.cursor)
            }
            KeyCode::Delete => self.remove_at(self.cursor),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.len();
                false
            }
            _ => false,
        };

        if changed {
            TextInputAction::Changed
        } else {
            TextInputAction::None
        }
    }
}

/// Result of feeding a key to [`TextInputState::handle_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    None,
    Changed,
    /// Enter
    Submit,
    /// Esc
    Cancel,
}

/// Dialog asking for a single presentation setting (accent color, font)
pub struct SettingDialog<'a> {
    title: &'a str,
    instructions: &'a str,
    label: &'a str,
    placeholder: &'a str,
    input: &'a TextInputState,
}

impl<'a> SettingDialog<'a> {
    pub fn new(title: &'a str, input: &'a TextInputState) -> Self {
        Self {
            title,
            instructions: "",
            label: "Value",
            placeholder: "",
            input,
        }
    }

    pub fn instructions(mut self, instructions: &'a str) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Widget for SettingDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        buf.set_stringn(
            inner.x + 1,
            inner.y + 1,
            self.instructions,
            inner.width.saturating_sub(2) as usize,
            Style::default().fg(Color::White),
        );

        let input_area = Rect {
            x: inner.x + 1,
            y: inner.y + 3,
            width: inner.width.saturating_sub(2),
            height: 3.min(inner.height.saturating_sub(3)),
        };
        TextInputWidget::new(&self.input.value, self.input.cursor)
            .title(self.label)
            .placeholder(self.placeholder)
            .render(input_area, buf);

        let help_y = inner.y + inner.height.saturating_sub(1);
        buf.set_string(
            inner.x + 1,
            help_y,
            "Enter: Apply (empty resets) | Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_state() {
        let mut state = TextInputState::new();
        assert!(state.is_empty());

        state.handle_key(KeyEvent::new(KeyCode::Char('#'), KeyModifiers::NONE));
        state.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE));
        assert_eq!(state.value(), "#f");
        assert_eq!(state.cursor, 2);

        state.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(state.value(), "#");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_text_input_multibyte_characters() {
        let mut state = TextInputState::with_value("Café".to_string());
        assert_eq!(state.cursor, 4);

        state.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        state.handle_key(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(state.value(), "Caf");

        state.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        state.handle_key(KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE));
        assert_eq!(state.value(), "éCaf");
    }

    #[test]
    fn test_text_input_renders_cursor_mid_value() {
        let state = TextInputState {
            value: "abc".to_string(),
            cursor: 1,
        };
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        TextInputWidget::new(&state.value, state.cursor).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "a");
        assert_eq!(buf[(2, 1)].symbol(), "b");
        assert!(buf[(2, 1)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(3, 1)].symbol(), "c");
    }

    #[test]
    fn test_text_input_actions() {
        let mut state = TextInputState::new();

        let action = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(action, TextInputAction::Submit);

        let action = state.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(action, TextInputAction::Cancel);
    }
}
