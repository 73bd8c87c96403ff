//! Form panel listing every input of the resume.

use crate::domain::{GroupKind, Resume, SimpleFieldKind};
use crate::session::Focus;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Fields shown above the groups, in form order
const LEADING_FIELDS: [SimpleFieldKind; 4] = [
    SimpleFieldKind::Name,
    SimpleFieldKind::Email,
    SimpleFieldKind::Phone,
    SimpleFieldKind::Summary,
];

/// Every focusable input in display order.
///
/// Skills sits between education and projects, like on a printed resume.
pub fn focus_order(resume: &Resume) -> Vec<Focus> {
    let mut order: Vec<Focus> = LEADING_FIELDS.iter().map(|k| Focus::Field(*k)).collect();
    for kind in GroupKind::ALL {
        if kind == GroupKind::Project {
            order.push(Focus::Field(SimpleFieldKind::Skills));
        }
        order.extend(
            resume
                .group(kind)
                .entries()
                .iter()
                .map(|e| Focus::Entry(kind, e.id)),
        );
    }
    order
}

/// One line of the form
enum Row {
    Input(Focus),
    Header(GroupKind),
}

/// Widget drawing the form with the focused input highlighted
pub struct FormWidget<'a> {
    resume: &'a Resume,
    focus: Focus,
    accent: Color,
}

impl<'a> FormWidget<'a> {
    pub fn new(resume: &'a Resume, focus: Focus) -> Self {
        Self {
            resume,
            focus,
            accent: Color::Cyan,
        }
    }

    /// Color of group headers and the focus marker
    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut last_group = None;
        for focus in focus_order(self.resume) {
            if let Focus::Entry(kind, _) = focus {
                if last_group != Some(kind) {
                    rows.push(Row::Header(kind));
                    last_group = Some(kind);
                }
            }
            rows.push(Row::Input(focus));
        }
        rows
    }

    fn input_line(&self, focus: Focus) -> Line<'a> {
        let (label, value, hint) = match focus {
            Focus::Field(kind) => (
                format!("{:<20}", kind.label()),
                self.resume.value(kind),
                kind.hint(),
            ),
            Focus::Entry(kind, id) => {
                let group = self.resume.group(kind);
                let position = group.position(id).map(|p| p + 1).unwrap_or(0);
                let value = group.get(id).map(|e| e.value.as_str()).unwrap_or("");
                (format!("{:>20}", format!("{}.", position)), value, kind.entry_hint())
            }
        };

        let focused = focus == self.focus;
        let marker = if focused { "▶ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(self.accent)),
            Span::styled(label, Style::default().fg(Color::Gray)),
            Span::raw(" "),
        ];

        if value.trim().is_empty() {
            spans.push(Span::styled(
                hint,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::raw(first_line(value)));
        }
        Line::from(spans)
    }
}

/// First line of a value, marked when more lines follow
fn first_line(value: &str) -> String {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("").to_string();
    if lines.next().is_some() {
        format!("{} …", first)
    } else {
        first
    }
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows();
        let selected = rows
            .iter()
            .position(|r| matches!(r, Row::Input(f) if *f == self.focus));

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| match row {
                Row::Header(kind) => ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("── {} ", kind.title()),
                        Style::default()
                            .fg(self.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("({}) ", self.resume.group(*kind).len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                Row::Input(focus) => ListItem::new(self.input_line(*focus)),
            })
            .collect();

        let mut state = ListState::default();
        state.select(selected);

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Resume "))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));

        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_places_skills_before_projects() {
        let mut resume = Resume::new();
        for kind in GroupKind::ALL {
            resume.group_mut(kind).add_empty();
        }
        let order = focus_order(&resume);

        assert_eq!(order.len(), 10);
        assert_eq!(order[0], Focus::Field(SimpleFieldKind::Name));
        let skills = order
            .iter()
            .position(|f| *f == Focus::Field(SimpleFieldKind::Skills))
            .unwrap();
        assert!(matches!(order[skills - 1], Focus::Entry(GroupKind::Education, _)));
        assert!(matches!(order[skills + 1], Focus::Entry(GroupKind::Project, _)));
    }

    #[test]
    fn test_first_line_marks_continuation() {
        assert_eq!(first_line("one"), "one");
        assert_eq!(first_line("one\ntwo"), "one …");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_render_shows_hint_for_empty_entry() {
        let mut resume = Resume::new();
        resume.group_mut(GroupKind::Language).add_empty();
        let area = Rect::new(0, 0, 120, 20);
        let mut buf = Buffer::empty(area);
        FormWidget::new(&resume, Focus::default()).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Languages"));
        assert!(text.contains("Language, Proficiency"));
    }
}
