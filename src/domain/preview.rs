//! Preview projection of a resume.
//!
//! [`ResumePreview`] is computed from the current [`Resume`] and is the only
//! input of both the terminal preview pane and the print document, so the
//! two never disagree.

use super::field::{GroupKind, SimpleFieldKind};
use super::group::FieldGroup;
use super::resume::Resume;

/// Text shown for an empty simple field
pub const EMPTY_FIELD_PLACEHOLDER: &str = "...";

/// Rendered view of one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupPreview {
    /// Every entry is blank; show the muted group placeholder
    Placeholder(&'static str),
    /// One paragraph per non-blank entry, in entry order
    Paragraphs(Vec<String>),
}

/// A titled group section of the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPreview {
    pub kind: GroupKind,
    pub title: &'static str,
    pub body: GroupPreview,
}

/// Everything the preview displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumePreview {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub sections: Vec<SectionPreview>,
}

impl ResumePreview {
    /// Project every field and group of `resume`
    pub fn render(resume: &Resume) -> Self {
        Self {
            name: field_text(resume.value(SimpleFieldKind::Name)),
            email: field_text(resume.value(SimpleFieldKind::Email)),
            phone: field_text(resume.value(SimpleFieldKind::Phone)),
            summary: field_text(resume.value(SimpleFieldKind::Summary)),
            skills: skills_list(resume.value(SimpleFieldKind::Skills)),
            sections: resume.groups().iter().map(render_section).collect(),
        }
    }

    /// Recompute the preview of a single simple field
    pub fn update_field(&mut self, kind: SimpleFieldKind, raw: &str) {
        match kind {
            SimpleFieldKind::Name => self.name = field_text(raw),
            SimpleFieldKind::Email => self.email = field_text(raw),
            SimpleFieldKind::Phone => self.phone = field_text(raw),
            SimpleFieldKind::Summary => self.summary = field_text(raw),
            SimpleFieldKind::Skills => self.skills = skills_list(raw),
        }
    }

    /// Recompute the preview of a single group
    pub fn update_group(&mut self, group: &FieldGroup) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.kind == group.kind) {
            *section = render_section(group);
        }
    }

    pub fn section(&self, kind: GroupKind) -> Option<&SectionPreview> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// Preview text of a simple field: trimmed, or `"..."` when empty
pub fn field_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        EMPTY_FIELD_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Split a comma separated skills string into trimmed, non-empty tokens.
/// Order and duplicates are preserved.
pub fn skills_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body of a group section
pub fn group_body(group: &FieldGroup) -> GroupPreview {
    if !group.has_content() {
        return GroupPreview::Placeholder(group.kind.preview_placeholder());
    }
    GroupPreview::Paragraphs(
        group
            .entries()
            .iter()
            .filter(|e| e.is_filled())
            .map(|e| e.value.clone())
            .collect(),
    )
}

fn render_section(group: &FieldGroup) -> SectionPreview {
    SectionPreview {
        kind: group.kind,
        title: group.kind.title(),
        body: group_body(group),
    }
}
