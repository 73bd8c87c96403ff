//! Domain entities for resume-tui.
//!
//! This module contains the core resume model:
//! - Field registry: simple fields and repeatable groups
//! - FieldGroup: ordered entry lists
//! - ResumePreview: the rendered projection
//! - ProgressSnapshot: completion tracking
//! - PresentationState: theme, template, color, font

mod field;
mod group;
mod presentation;
mod preview;
mod progress;
mod resume;

pub use field::{GroupKind, SimpleField, SimpleFieldKind};
pub use group::{Entry, EntryId, FieldGroup};
pub use presentation::{
    PresentationState, Template, Theme, ACCENT_COLOR_KEY, DEFAULT_ACCENT_COLOR,
    DEFAULT_FONT_FAMILY, FONT_FAMILY_KEY, TEMPLATE_KEY, THEME_KEY,
};
pub use preview::{
    field_text, group_body, skills_list, GroupPreview, ResumePreview, SectionPreview,
    EMPTY_FIELD_PLACEHOLDER,
};
pub use progress::ProgressSnapshot;
pub use resume::Resume;
