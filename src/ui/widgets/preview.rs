//! Live preview pane styled by the presentation settings.

use crate::domain::{
    GroupPreview, PresentationState, ResumePreview, SectionPreview, Template, Theme,
    EMPTY_FIELD_PLACEHOLDER,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::str::FromStr;

/// Accent used when the stored color is not understood by the terminal
const FALLBACK_ACCENT: Color = Color::Rgb(0x00, 0x7b, 0xff);

/// Terminal color for a CSS-style accent (`#rrggbb` or a color name)
pub fn accent_color(value: &str) -> Color {
    Color::from_str(value.trim()).unwrap_or(FALLBACK_ACCENT)
}

/// Foreground and background of the preview for a theme
fn palette(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Light => (Color::Rgb(0x21, 0x25, 0x29), Color::Rgb(0xff, 0xff, 0xff)),
        Theme::Dark => (Color::Rgb(0xe0, 0xe0, 0xe0), Color::Rgb(0x1e, 0x1e, 0x1e)),
    }
}

/// Widget rendering a [`ResumePreview`]
pub struct PreviewWidget<'a> {
    preview: &'a ResumePreview,
    presentation: &'a PresentationState,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(preview: &'a ResumePreview, presentation: &'a PresentationState) -> Self {
        Self {
            preview,
            presentation,
        }
    }

    fn muted(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    fn text_span(&self, value: &'a str) -> Span<'a> {
        if value == EMPTY_FIELD_PLACEHOLDER {
            Span::styled(value, self.muted())
        } else {
            Span::raw(value)
        }
    }

    fn heading(&self, title: &str, width: u16) -> Vec<Line<'a>> {
        let accent = accent_color(&self.presentation.accent_color);
        let style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        match self.presentation.template {
            Template::Classic => vec![
                Line::styled(title.to_string(), style),
                Line::styled("─".repeat(width as usize), Style::default().fg(accent)),
            ],
            Template::Modern => vec![Line::from(vec![
                Span::styled("▌ ", Style::default().fg(accent)),
                Span::styled(title.to_string(), style),
            ])],
            Template::Minimal => vec![Line::styled(title.to_uppercase(), style)],
            Template::Creative => vec![Line::styled(
                format!("═══ {} ═══", title),
                style.add_modifier(Modifier::ITALIC),
            )],
        }
    }

    fn section_lines(&self, section: &'a SectionPreview, width: u16) -> Vec<Line<'a>> {
        let mut lines = self.heading(section.title, width);
        match &section.body {
            GroupPreview::Placeholder(text) => {
                lines.push(Line::styled(*text, self.muted()));
            }
            GroupPreview::Paragraphs(paragraphs) => {
                for paragraph in paragraphs {
                    lines.extend(paragraph.lines().map(|l| Line::raw(l.to_string())));
                }
            }
        }
        lines
    }

    fn build_lines(&self, width: u16) -> Vec<Line<'a>> {
        let preview = self.preview;
        let accent = accent_color(&self.presentation.accent_color);
        let centered = matches!(
            self.presentation.template,
            Template::Classic | Template::Creative
        );

        let mut name = Line::from(Span::styled(
            preview.name.as_str(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        let mut contact = Line::from(vec![
            self.text_span(&preview.email),
            Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
            self.text_span(&preview.phone),
        ]);
        if centered {
            name = name.centered();
            contact = contact.centered();
        }

        let mut lines = vec![name, contact, Line::default()];

        lines.extend(self.heading("Professional Summary", width));
        lines.extend(
            preview
                .summary
                .lines()
                .map(|l| Line::from(self.text_span(l))),
        );
        lines.push(Line::default());

        for section in &preview.sections {
            lines.extend(self.section_lines(section, width));
            lines.push(Line::default());
        }

        lines.extend(self.heading("Skills", width));
        if preview.skills.is_empty() {
            lines.push(Line::styled(EMPTY_FIELD_PLACEHOLDER, self.muted()));
        } else {
            let spans: Vec<Span> = preview
                .skills
                .iter()
                .enumerate()
                .flat_map(|(idx, skill)| {
                    let sep = if idx == 0 { "" } else { "  " };
                    [
                        Span::raw(sep),
                        Span::styled("• ", Style::default().fg(accent)),
                        Span::raw(skill.as_str()),
                    ]
                })
                .collect();
            lines.push(Line::from(spans));
        }

        lines
    }
}

impl Widget for PreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (fg, bg) = palette(self.presentation.theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Preview - {} ",
                self.presentation.template.display_name()
            ))
            .style(Style::default().fg(fg).bg(bg));
        let inner = block.inner(area);
        let lines = self.build_lines(inner.width.saturating_sub(2));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
