//! Help view widget showing all keybindings.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Help categories
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("↑/k, Shift+Tab", "Previous field or entry"),
            ("↓/j, Tab", "Next field or entry"),
            ("g/Home", "First field"),
            ("G/End", "Last entry"),
        ],
    ),
    (
        "Editing",
        &[
            ("Enter/i", "Edit the focused field or entry"),
            ("Esc", "Stop editing"),
            ("a", "Add an entry to the focused section"),
            ("d/Del", "Remove the focused entry (with confirm)"),
        ],
    ),
    (
        "Presentation",
        &[
            ("t", "Toggle light/dark theme"),
            ("T", "Choose template"),
            ("]", "Next template"),
            ("c", "Set accent color"),
            ("f", "Set font family"),
        ],
    ),
    (
        "Output",
        &[
            ("p, Ctrl+P", "Print / export the resume"),
            ("X", "Clear all data (with confirm)"),
        ],
    ),
    (
        "Dialogs",
        &[
            ("y / n", "Answer a confirmation"),
            ("←/→, Enter", "Pick and confirm an answer"),
            ("any key", "Dismiss a message"),
        ],
    ),
    ("General", &[("?", "Toggle this help"), ("q", "Quit")]),
];

/// State for the help view
#[derive(Debug, Default, Clone)]
pub struct HelpViewState {
    /// Current scroll offset (in lines)
    pub scroll_offset: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Visible height
    pub visible_height: usize,
}

impl HelpViewState {
    /// Create a new help view state
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: HelpWidget::build_lines().len(),
            visible_height: 0,
        }
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.total_lines.saturating_sub(self.visible_height);
        self.scroll_offset = (self.scroll_offset + n).min(max_offset);
    }

    /// Page up
    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_height.saturating_sub(2));
    }

    /// Page down
    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_height.saturating_sub(2));
    }
}

/// Help view widget
pub struct HelpWidget<'a> {
    state: &'a mut HelpViewState,
}

impl<'a> HelpWidget<'a> {
    pub fn new(state: &'a mut HelpViewState) -> Self {
        Self { state }
    }

    fn binding_line(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:16}", key), Style::default().fg(Color::Green)),
            Span::raw(description),
        ])
    }

    /// Every line of the help text, unscrolled
    fn build_lines() -> Vec<Line<'static>> {
        let muted = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::styled(
                "  resume-tui Help  ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                "Fill in the form on the left; the preview on the right updates as you type.",
                muted,
            ),
            Line::styled(
                "Everything is saved as you go. Printing needs a name and a valid email.",
                muted,
            ),
            Line::default(),
        ];

        for (section_name, bindings) in HELP_SECTIONS {
            lines.push(Line::styled(
                format!("─── {} ───", section_name),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
            lines.extend(
                bindings
                    .iter()
                    .map(|(key, description)| Self::binding_line(key, description)),
            );
            lines.push(Line::default());
        }

        lines.push(Line::styled("  Esc, q or ? closes this help", muted));
        lines
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = Self::build_lines();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (?) ");
        let inner = block.inner(area);

        self.state.total_lines = lines.len();
        self.state.visible_height = inner.height as usize;
        let max_offset = self.state.total_lines.saturating_sub(self.state.visible_height);
        self.state.scroll_offset = self.state.scroll_offset.min(max_offset);
        let offset = self.state.scroll_offset;

        Paragraph::new(lines)
            .block(block)
            .scroll((offset as u16, 0))
            .render(area, buf);

        if self.state.total_lines > self.state.visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_offset).position(offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .render(area.inner(Margin::new(0, 1)), buf, &mut scrollbar_state);
        }
    }
}
