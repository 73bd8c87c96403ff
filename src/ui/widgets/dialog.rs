//! Modal dialogs: yes/no confirmation and blocking messages.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Yes/No question; "No" is highlighted unless told otherwise
pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
    yes_selected: bool,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            yes_selected: false,
        }
    }

    pub fn yes_selected(mut self, selected: bool) -> Self {
        self.yes_selected = selected;
        self
    }

    fn buttons(&self) -> Line<'static> {
        let chosen = |bg: Color| {
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        };
        let (yes, no) = if self.yes_selected {
            (
                Span::styled("[ Yes ]", chosen(Color::Red)),
                Span::raw("   No   "),
            )
        } else {
            (
                Span::raw("  Yes  "),
                Span::styled("[  No  ]", chosen(Color::Green)),
            )
        };
        Line::from(vec![yes, Span::raw("     "), no]).centered()
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", self.title));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        let [_, message, buttons, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.message)
            .wrap(Wrap { trim: true })
            .render(message, buf);
        self.buttons().render(buttons, buf);
    }
}

/// Blocking message; any key dismisses it
pub struct AlertDialog<'a> {
    message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice ")
            .title_bottom(Line::from(" Press any key ").centered());

        Paragraph::new(self.message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_confirm_dialog_defaults_to_no() {
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        ConfirmDialog::new("Remove Entry", "Are you sure?").render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("[  No  ]"));
        assert!(text.contains("Remove Entry"));
    }

    #[test]
    fn test_confirm_dialog_highlights_yes_when_selected() {
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        ConfirmDialog::new("Clear All", "Erase everything?")
            .yes_selected(true)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("[ Yes ]"));
        assert!(!text.contains("[  No  ]"));
    }

    #[test]
    fn test_alert_dialog_shows_message() {
        let area = Rect::new(0, 0, 50, 5);
        let mut buf = Buffer::empty(area);
        AlertDialog::new("You need to keep at least one entry").render(area, &mut buf);
        assert!(buffer_text(&buf).contains("keep at least one entry"));
    }
}
