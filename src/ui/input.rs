//! Key-to-action mapping for the form, with optional j/k style movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether keys drive the form or go to the field editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Moving between fields and issuing commands
    #[default]
    Normal,
    /// Typing into the focused field or entry
    Insert,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// First form row
    Home,
    /// Last form row
    End,
    Edit,
    AddEntry,
    RemoveEntry,
    Back,
    ToggleTheme,
    /// Opens the template picker
    ChooseTemplate,
    CycleTemplate,
    SetAccentColor,
    SetFont,
    Print,
    ClearAll,
    Help,
    Quit,
}

/// Translates key events into [`Action`]s for the current [`InputMode`]
pub struct InputHandler {
    vim_navigation: bool,
}

impl InputHandler {
    pub fn new(vim_navigation: bool) -> Self {
        Self { vim_navigation }
    }

    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (mode, ctrl) {
            (InputMode::Insert, true) => (key.code == KeyCode::Char('c')).then_some(Action::Back),
            (InputMode::Insert, false) => (key.code == KeyCode::Esc).then_some(Action::Back),
            (InputMode::Normal, true) => (key.code == KeyCode::Char('p')).then_some(Action::Print),
            (InputMode::Normal, false) => {
                let code = self.resolve_vim_alias(key.code);
                Self::navigation(code).or_else(|| Self::command(code))
            }
        }
    }

    /// j/k/g/G stand in for the arrow, Home and End keys when enabled
    fn resolve_vim_alias(&self, code: KeyCode) -> KeyCode {
        if !self.vim_navigation {
            return code;
        }
        match code {
            KeyCode::Char('j') => KeyCode::Down,
            KeyCode::Char('k') => KeyCode::Up,
            KeyCode::Char('g') => KeyCode::Home,
            KeyCode::Char('G') => KeyCode::End,
            other => other,
        }
    }

    fn navigation(code: KeyCode) -> Option<Action> {
        let action = match code {
            KeyCode::Up | KeyCode::BackTab => Action::MoveUp,
            KeyCode::Down | KeyCode::Tab => Action::MoveDown,
            KeyCode::Home => Action::Home,
            KeyCode::End => Action::End,
            _ => return None,
        };
        Some(action)
    }

    fn command(code: KeyCode) -> Option<Action> {
        let action = match code {
            KeyCode::Enter | KeyCode::Char('i') => Action::Edit,
            KeyCode::Char('a') => Action::AddEntry,
            KeyCode::Char('d') | KeyCode::Delete => Action::RemoveEntry,
            KeyCode::Esc => Action::Back,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('T') => Action::ChooseTemplate,
            KeyCode::Char(']') => Action::CycleTemplate,
            KeyCode::Char('c') => Action::SetAccentColor,
            KeyCode::Char('f') => Action::SetFont,
            KeyCode::Char('p') => Action::Print,
            KeyCode::Char('X') => Action::ClearAll,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Char('q') => Action::Quit,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_navigation() {
        let handler = InputHandler::new(true);

        let key_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_j, InputMode::Normal), Some(Action::MoveDown));

        let key_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_k, InputMode::Normal), Some(Action::MoveUp));
    }

    #[test]
    fn test_vim_navigation_disabled() {
        let handler = InputHandler::new(false);

        let key_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_j, InputMode::Normal), None);

        let key_down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_down, InputMode::Normal), Some(Action::MoveDown));
    }

    #[test]
    fn test_action_keys() {
        let handler = InputHandler::new(true);

        let key_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_a, InputMode::Normal), Some(Action::AddEntry));

        let key_t = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key(key_t, InputMode::Normal), Some(Action::ChooseTemplate));

        let ctrl_p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(ctrl_p, InputMode::Normal), Some(Action::Print));
    }

    #[test]
    fn test_vim_aliases_cover_home_and_end() {
        let handler = InputHandler::new(true);

        let key_g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_g, InputMode::Normal), Some(Action::Home));

        let key_end = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key(key_end, InputMode::Normal), Some(Action::End));
    }

    #[test]
    fn test_insert_mode_passes_text_through() {
        let handler = InputHandler::new(true);

        let key_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_q, InputMode::Insert), None);

        let key_esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_esc, InputMode::Insert), Some(Action::Back));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(ctrl_c, InputMode::Insert), Some(Action::Back));
    }
}
