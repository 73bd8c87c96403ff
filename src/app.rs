//! Application state and main event loop.

use crate::config::AppConfig;
use crate::domain::{Template, Theme};
use crate::error::{AppError, Result};
use crate::services::{PrintHandoff, Store};
use crate::session::{Command, Focus, Outcome, Session};
use crate::ui::input::{Action, InputHandler, InputMode};
use crate::ui::widgets::editor::{EditorAction, FieldEditor};
use crate::ui::widgets::form::focus_order;
use crate::ui::widgets::help::HelpViewState;
use crate::ui::widgets::text_input::{TextInputAction, TextInputState};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Application view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// Form and live preview
    #[default]
    Editor,
    /// Help view showing keybindings
    Help,
}

/// Presentation setting edited through a text dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    AccentColor,
    Font,
}

/// Modal overlay; while one is open it receives every key
#[derive(Debug, Clone)]
pub enum Dialog {
    /// Yes/No question for a pending session confirmation
    Confirm {
        prompt: &'static str,
        yes_selected: bool,
    },
    /// Blocking message, dismissed by any key
    Alert(String),
    /// Template picker
    TemplateMenu { selected: usize },
    /// Accent color or font input
    Setting {
        kind: SettingKind,
        input: TextInputState,
    },
}

/// Main application state
pub struct App {
    /// Loaded configuration
    pub config: AppConfig,
    /// Resume, presentation and their store
    pub session: Session<Box<dyn Store>>,

    // UI State
    /// Current view
    pub view: AppView,
    /// Current input mode
    pub input_mode: InputMode,
    /// Editor for the focused input while in insert mode
    pub editor: Option<FieldEditor>,
    /// Open modal dialog
    pub dialog: Option<Dialog>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Non-blocking status line
    pub status_message: Option<String>,
    /// State for help view (scroll position)
    pub help_view_state: HelpViewState,

    input_handler: InputHandler,
    print_handoff: PrintHandoff,
    export_dir: PathBuf,

    /// Should quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance over `store`
    pub fn new(config: AppConfig, store: Box<dyn Store>, system_theme: Theme) -> Result<Self> {
        let session = Session::load(store, system_theme)?;
        let export_dir = config
            .export_dir()
            .unwrap_or_else(|| std::env::temp_dir().join("resume-tui"));
        let print_handoff = PrintHandoff::new(&config.export);
        let input_handler = InputHandler::new(config.ui.vim_navigation);

        tracing::info!(
            "Session loaded ({}), exports go to {:?}",
            session.progress().label(),
            export_dir
        );

        Ok(Self {
            config,
            session,
            view: AppView::Editor,
            input_mode: InputMode::Normal,
            editor: None,
            dialog: None,
            error_message: None,
            status_message: None,
            help_view_state: HelpViewState::new(),
            input_handler,
            print_handoff,
            export_dir,
            should_quit: false,
        })
    }

    /// Where print documents are written
    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }

    /// Send a command to the session and present its outcome
    pub fn dispatch(&mut self, command: Command) {
        match self.session.apply(command) {
            Ok(outcome) => self.present(outcome),
            Err(e) => {
                tracing::error!("Command failed: {}", e);
                self.error_message = Some(AppError::from(e).to_string());
            }
        }
    }

    fn present(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Updated | Outcome::Ignored | Outcome::Declined => {}
            Outcome::Warning(message) => {
                self.dialog = Some(Dialog::Alert(message.to_string()));
            }
            Outcome::ConfirmationRequired(prompt) => {
                self.dialog = Some(Dialog::Confirm {
                    prompt,
                    yes_selected: false,
                });
            }
            Outcome::Invalid { message, .. } => {
                self.dialog = Some(Dialog::Alert(message));
            }
            Outcome::Print(document) => match document.write_to(&self.export_dir) {
                Ok(path) => {
                    self.status_message = Some(format!(
                        "Sent {} to {}",
                        path.display(),
                        self.print_handoff.program()
                    ));
                    // Fire-and-forget; failures are logged by the task
                    drop(self.print_handoff.spawn(path));
                }
                Err(e) => {
                    tracing::error!("Export failed: {}", e);
                    self.error_message = Some(AppError::from(e).to_string());
                }
            },
            Outcome::Reset => {
                self.editor = None;
                self.input_mode = InputMode::Normal;
                self.status_message = Some("All data cleared".to_string());
            }
        }
    }

    /// Move focus by `delta` inputs in form order, clamped at both ends
    pub fn move_focus(&mut self, delta: isize) {
        let order = focus_order(self.session.resume());
        let current = order
            .iter()
            .position(|f| *f == self.session.focus())
            .unwrap_or(0);
        let target = (current as isize + delta).clamp(0, order.len() as isize - 1) as usize;
        if let Some(focus) = order.get(target) {
            self.dispatch(Command::Focus(*focus));
        }
    }

    fn focus_edge(&mut self, last: bool) {
        let order = focus_order(self.session.resume());
        let target = if last { order.last() } else { order.first() };
        if let Some(focus) = target.copied() {
            self.dispatch(Command::Focus(focus));
        }
    }

    /// Open the inline editor on the focused input
    pub fn start_editing(&mut self) {
        let focus = self.session.focus();
        let resume = self.session.resume();
        let editor = match focus {
            Focus::Field(kind) => FieldEditor::new(
                focus,
                resume.value(kind),
                kind.label(),
                kind.hint(),
                kind.is_multiline(),
            ),
            Focus::Entry(kind, id) => {
                let group = resume.group(kind);
                let Some(entry) = group.get(id) else {
                    return;
                };
                let position = group.position(id).map(|p| p + 1).unwrap_or(1);
                FieldEditor::new(
                    focus,
                    &entry.value,
                    format!("{} #{}", kind.title(), position),
                    kind.entry_hint(),
                    false,
                )
            }
        };
        self.editor = Some(editor);
        self.input_mode = InputMode::Insert;
    }

    fn stop_editing(&mut self) {
        self.editor = None;
        self.input_mode = InputMode::Normal;
    }

    /// Open help view
    pub fn open_help(&mut self) {
        self.help_view_state = HelpViewState::new();
        self.view = AppView::Help;
    }

    /// Close help view
    pub fn close_help(&mut self) {
        self.view = AppView::Editor;
    }

    /// Handle keyboard input and return true if should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear transient messages on any key press
        self.error_message = None;
        self.status_message = None;

        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return false;
        }

        if self.view == AppView::Help {
            self.handle_help_key(key);
            return false;
        }

        if self.input_mode == InputMode::Insert {
            self.handle_editor_key(key);
            return false;
        }

        if let Some(action) = self.input_handler.handle_key(key, self.input_mode) {
            match action {
                Action::MoveUp => self.move_focus(-1),
                Action::MoveDown => self.move_focus(1),
                Action::Home => self.focus_edge(false),
                Action::End => self.focus_edge(true),
                Action::Edit => self.start_editing(),
                Action::AddEntry => match self.session.focus() {
                    Focus::Entry(group, _) => self.dispatch(Command::AddEntry(group)),
                    Focus::Field(_) => {
                        self.status_message = Some("Move to a list entry to add another".to_string());
                    }
                },
                Action::RemoveEntry => {
                    if let Focus::Entry(group, entry) = self.session.focus() {
                        self.dispatch(Command::RemoveEntry { group, entry });
                    }
                }
                Action::Back => {}
                Action::ToggleTheme => self.dispatch(Command::ToggleTheme),
                Action::ChooseTemplate => {
                    let current = self.session.presentation().template;
                    let selected = Template::ALL
                        .iter()
                        .position(|t| *t == current)
                        .unwrap_or(0);
                    self.dialog = Some(Dialog::TemplateMenu { selected });
                }
                Action::CycleTemplate => self.dispatch(Command::CycleTemplate),
                Action::SetAccentColor => {
                    let current = self.session.presentation().accent_color.clone();
                    self.dialog = Some(Dialog::Setting {
                        kind: SettingKind::AccentColor,
                        input: TextInputState::with_value(current),
                    });
                }
                Action::SetFont => {
                    let current = self.session.presentation().font_family.clone();
                    self.dialog = Some(Dialog::Setting {
                        kind: SettingKind::Font,
                        input: TextInputState::with_value(current),
                    });
                }
                Action::Print => self.dispatch(Command::Export),
                Action::ClearAll => self.dispatch(Command::ClearAll),
                Action::Help => self.open_help(),
                Action::Quit => return true,
            }
        }

        false
    }

    /// Handle keys while the inline editor is open
    fn handle_editor_key(&mut self, key: KeyEvent) {
        if self.input_handler.handle_key(key, InputMode::Insert) == Some(Action::Back) {
            self.stop_editing();
            return;
        }

        let Some(editor) = self.editor.as_mut() else {
            self.stop_editing();
            return;
        };

        match editor.handle_key(key) {
            EditorAction::None => {}
            EditorAction::Done => self.stop_editing(),
            EditorAction::Changed => {
                let value = editor.content();
                let command = match editor.target() {
                    Focus::Field(kind) => Command::EditField(kind, value),
                    Focus::Entry(group, entry) => Command::EditEntry {
                        group,
                        entry,
                        value,
                    },
                };
                self.dispatch(command);
            }
        }
    }

    /// Handle keys while a dialog is open
    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };

        match dialog {
            Dialog::Alert(_) => {}
            Dialog::Confirm {
                prompt,
                yes_selected,
            } => match key.code {
                KeyCode::Left
                | KeyCode::Right
                | KeyCode::Tab
                | KeyCode::Char('h')
                | KeyCode::Char('l') => {
                    self.dialog = Some(Dialog::Confirm {
                        prompt,
                        yes_selected: !yes_selected,
                    });
                }
                KeyCode::Char('y') | KeyCode::Char('Y') => self.dispatch(Command::Confirm),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.dispatch(Command::Decline)
                }
                KeyCode::Enter => {
                    if yes_selected {
                        self.dispatch(Command::Confirm);
                    } else {
                        self.dispatch(Command::Decline);
                    }
                }
                _ => {
                    self.dialog = Some(Dialog::Confirm {
                        prompt,
                        yes_selected,
                    });
                }
            },
            Dialog::TemplateMenu { selected } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.dialog = Some(Dialog::TemplateMenu {
                        selected: selected.saturating_sub(1),
                    });
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.dialog = Some(Dialog::TemplateMenu {
                        selected: (selected + 1).min(Template::ALL.len() - 1),
                    });
                }
                KeyCode::Enter => {
                    if let Some(template) = Template::ALL.get(selected) {
                        self.dispatch(Command::SetTemplate(*template));
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') => {}
                _ => {
                    self.dialog = Some(Dialog::TemplateMenu { selected });
                }
            },
            Dialog::Setting { kind, mut input } => match input.handle_key(key) {
                TextInputAction::Submit => {
                    let value = input.value().to_string();
                    self.dispatch(match kind {
                        SettingKind::AccentColor => Command::SetAccentColor(value),
                        SettingKind::Font => Command::SetFont(value),
                    });
                }
                TextInputAction::Cancel => {}
                TextInputAction::None | TextInputAction::Changed => {
                    self.dialog = Some(Dialog::Setting { kind, input });
                }
            },
        }
    }

    /// Handle keys in help view
    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.help_view_state.scroll_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.help_view_state.scroll_down(1);
            }
            KeyCode::PageUp | KeyCode::Char('b') => {
                self.help_view_state.page_up();
            }
            KeyCode::PageDown | KeyCode::Char('f') => {
                self.help_view_state.page_down();
            }
            _ => {}
        }
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());

            // Wait for event with timeout
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            self.should_quit = true;
                        }
                    }
                    Event::Resize(width, height) => {
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    Event::FocusGained | Event::FocusLost => {}
                    Event::Mouse(_) | Event::Paste(_) => {}
                }
            }

            if self.should_quit {
                break;
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
