//! Frame composition: editor screen, help screen and modal overlays.

use crate::app::{App, AppView, Dialog, SettingKind};
use crate::domain::Template;
use crate::ui::input::InputMode;
use crate::ui::widgets::dialog::{AlertDialog, ConfirmDialog};
use crate::ui::widgets::form::FormWidget;
use crate::ui::widgets::help::HelpWidget;
use crate::ui::widgets::preview::{accent_color, PreviewWidget};
use crate::ui::widgets::text_input::SettingDialog;
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

/// Draws one frame; overlays stack above the active view
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    match app.view {
        AppView::Editor => draw_editor(frame, app, area),
        AppView::Help => draw_help(frame, app, area),
    }

    if let Some(ref dialog) = app.dialog {
        draw_dialog(frame, dialog, app, area);
    }

    if let Some(ref error) = app.error_message {
        draw_error_overlay(frame, error, area);
    }

    if let Some(ref msg) = app.status_message {
        draw_status_message(frame, msg, area);
    }
}

/// Transient green notice in the bottom-left corner, sized to its text
fn draw_status_message(frame: &mut Frame, message: &str, area: Rect) {
    let width = (message.chars().count() as u16 + 4).min(area.width.saturating_sub(4));
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);
    let [_, msg_area] =
        Layout::horizontal([Constraint::Length(2), Constraint::Length(width)]).areas(row);

    let green = Style::default().fg(Color::Green);
    frame.render_widget(Clear, msg_area);
    frame.render_widget(
        Paragraph::new(message)
            .style(green)
            .block(Block::bordered().border_style(green)),
        msg_area,
    );
}

/// Draw the form, preview and progress
fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let editor_height = match app.editor {
        Some(ref editor) if app.input_mode == InputMode::Insert => {
            if editor.is_multiline() {
                8
            } else {
                3
            }
        }
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Min(0),                // Form and preview
            Constraint::Length(editor_height), // Inline editor
            Constraint::Length(1),             // Status bar
            Constraint::Length(3),             // Footer
        ])
        .split(area);

    let presentation = app.session.presentation();
    let accent = accent_color(&presentation.accent_color);

    draw_header(frame, app, accent, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let form = FormWidget::new(app.session.resume(), app.session.focus()).accent(accent);
    frame.render_widget(form, main[0]);

    let preview = PreviewWidget::new(app.session.preview(), presentation);
    frame.render_widget(preview, main[1]);

    if editor_height > 0 {
        if let Some(ref editor) = app.editor {
            frame.render_widget(editor, chunks[2]);
        }
    }

    let status_text = format!(
        " Theme: {} | Template: {} | Accent: {} | Font: {} ",
        presentation.theme.as_str(),
        presentation.template.display_name(),
        presentation.accent_color,
        presentation.font_family,
    );
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(status, chunks[3]);

    let footer_text = if app.input_mode == InputMode::Insert {
        " Type to edit | Esc: Done "
    } else {
        " j/k: Move | Enter: Edit | a: Add | d: Remove | t: Theme | T: Template | p: Print | ?: Help | q: Quit "
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[4]);
}

/// Draw the title and the completion gauge
fn draw_header(frame: &mut Frame, app: &App, accent: Color, area: Rect) {
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(area);

    let title = Paragraph::new("resume-tui - Resume Builder")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, header[0]);

    let progress = app.session.progress();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::BOTTOM))
        .gauge_style(Style::default().fg(accent))
        .ratio(progress.ratio())
        .label(progress.label());
    frame.render_widget(gauge, header[1]);
}

fn draw_help(frame: &mut Frame, app: &mut App, area: Rect) {
    frame.render_widget(HelpWidget::new(&mut app.help_view_state), area);
}

fn draw_dialog(frame: &mut Frame, dialog: &Dialog, app: &App, area: Rect) {
    match dialog {
        Dialog::Confirm {
            prompt,
            yes_selected,
        } => {
            let popup_area = centered_rect(50, 30, area);
            let dialog = ConfirmDialog::new("Confirm", prompt).yes_selected(*yes_selected);
            frame.render_widget(dialog, popup_area);
        }
        Dialog::Alert(message) => {
            let popup_area = centered_rect(50, 20, area);
            frame.render_widget(AlertDialog::new(message), popup_area);
        }
        Dialog::TemplateMenu { selected } => {
            draw_template_menu(frame, *selected, app.session.presentation().template, area)
        }
        Dialog::Setting { kind, input } => {
            let popup_area = centered_rect(60, 40, area);
            let dialog = match kind {
                SettingKind::AccentColor => SettingDialog::new("Accent Color", input)
                    .instructions("Hex value or color name used for headings")
                    .label("Color")
                    .placeholder("#007BFF"),
                SettingKind::Font => SettingDialog::new("Font", input)
                    .instructions("CSS font-family list used by the print document")
                    .label("Font family")
                    .placeholder("Georgia, serif"),
            };
            frame.render_widget(dialog, popup_area);
        }
    }
}

/// Draw template selection menu
fn draw_template_menu(frame: &mut Frame, selected: usize, current: Template, area: Rect) {
    let popup_area = centered_rect(40, 40, area);
    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = Template::ALL
        .iter()
        .enumerate()
        .map(|(idx, template)| {
            let style = if idx == selected {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if *template == current { " (current)" } else { "" };
            ListItem::new(format!("  {}{}  ", template.display_name(), marker)).style(style)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Template "),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, popup_area, &mut state);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(" Enter: Apply | Esc: Cancel ")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Storage or export failure; any key dismisses it
fn draw_error_overlay(frame: &mut Frame, error: &str, area: Rect) {
    let popup_area = centered_rect(60, 20, area);
    let red = Style::default().fg(Color::Red);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(error)
            .style(red)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(red).title(" Error ")),
        popup_area,
    );
}

/// Rectangle covering the given percentages of `r`, centered in both axes
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
