//! Inline editor for the focused field or entry, using tui-textarea.

use crate::session::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Text being edited for one form input
pub struct FieldEditor {
    /// The text area holding the value
    textarea: TextArea<'static>,
    /// Which input the value belongs to
    target: Focus,
    /// Box title
    title: String,
    /// Hint shown while the value is empty
    hint: &'static str,
    /// Enter inserts a newline instead of finishing
    multiline: bool,
}

impl FieldEditor {
    /// Start editing `value`, with the cursor at its end
    pub fn new(
        target: Focus,
        value: &str,
        title: impl Into<String>,
        hint: &'static str,
        multiline: bool,
    ) -> Self {
        let lines: Vec<String> = if value.is_empty() {
            vec![String::new()]
        } else {
            value.split('\n').map(str::to_string).collect()
        };
        let mut textarea = TextArea::new(lines);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);

        Self {
            textarea,
            target,
            title: title.into(),
            hint,
            multiline,
        }
    }

    /// The input this editor writes to
    pub fn target(&self) -> Focus {
        self.target
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Get the current content
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if key.code == KeyCode::Esc {
            return EditorAction::Done;
        }
        if key.code == KeyCode::Enter && !self.multiline {
            return EditorAction::Done;
        }

        let input = convert_key_event(key);
        if self.textarea.input(input) {
            EditorAction::Changed
        } else {
            EditorAction::None
        }
    }

    /// Get cursor position as (line, col)
    pub fn cursor_position(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.textarea.lines().len()
    }
}

impl Widget for &FieldEditor {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let footer = if self.multiline {
            " Esc: Done | Enter: New line "
        } else {
            " Esc/Enter: Done "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" Editing: {} ", self.title))
            .title_bottom(Line::from(footer).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let (cursor_line, cursor_col) = self.cursor_position();
        let is_empty = self.line_count() == 1 && self.textarea.lines()[0].is_empty();

        let lines: Vec<Line> = if is_empty {
            vec![Line::from(vec![
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
                Span::styled(self.hint, Style::default().fg(Color::DarkGray)),
            ])]
        } else {
            self.textarea
                .lines()
                .iter()
                .enumerate()
                .map(|(idx, line)| {
                    if idx == cursor_line {
                        cursor_line_spans(line, cursor_col)
                    } else {
                        Line::from(line.as_str())
                    }
                })
                .collect()
        };

        // Keep the cursor line visible in short boxes
        let scroll = cursor_line.saturating_sub(inner.height.saturating_sub(1) as usize);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }
}

/// `line` with the character under `col` drawn as a block cursor
fn cursor_line_spans(line: &str, col: usize) -> Line<'_> {
    let caret = Style::default().bg(Color::White).fg(Color::Black);
    let split = line.char_indices().nth(col).map_or(line.len(), |(i, _)| i);
    let (head, rest) = line.split_at(split);
    let mut tail = rest.chars();
    let under = tail.next().map_or_else(|| " ".to_string(), String::from);
    Line::from(vec![
        Span::raw(head),
        Span::styled(under, caret),
        Span::raw(tail.as_str()),
    ])
}

/// Actions that can result from editor key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Nothing changed
    None,
    /// The text changed
    Changed,
    /// Leave the editor
    Done,
}

/// Convert crossterm KeyEvent to tui-textarea Input
fn convert_key_event(key: KeyEvent) -> Input {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let key = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Esc,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Null,
    };

    Input {
        key,
        ctrl,
        alt,
        shift,
    }
}
