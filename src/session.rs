//! Editing session: resume content, presentation and their persistence.
//!
//! Every user action reaches the session as a [`Command`] and is handled by
//! [`Session::apply`], which updates the in-memory resume, writes the store,
//! refreshes the preview and recomputes progress before returning an
//! [`Outcome`] for the UI to present.

use crate::domain::{
    EntryId, FieldGroup, GroupKind, PresentationState, ProgressSnapshot, Resume, ResumePreview,
    SimpleFieldKind, Template, Theme, ACCENT_COLOR_KEY, DEFAULT_ACCENT_COLOR, DEFAULT_FONT_FAMILY,
    FONT_FAMILY_KEY, TEMPLATE_KEY, THEME_KEY,
};
use crate::error::StoreResult;
use crate::services::{validate, PrintDocument, Store};

pub const KEEP_ONE_ENTRY_WARNING: &str = "You need to keep at least one entry";
pub const REMOVE_ENTRY_PROMPT: &str = "Are you sure you want to remove this entry?";
pub const CLEAR_ALL_PROMPT: &str = "Are you sure you want to clear all data? This cannot be undone.";

/// Input that currently receives edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(SimpleFieldKind),
    Entry(GroupKind, EntryId),
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(SimpleFieldKind::Name)
    }
}

/// A destructive action waiting for the user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    RemoveEntry { group: GroupKind, entry: EntryId },
    ClearAll,
}

impl Confirmation {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::RemoveEntry { .. } => REMOVE_ENTRY_PROMPT,
            Self::ClearAll => CLEAR_ALL_PROMPT,
        }
    }
}

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EditField(SimpleFieldKind, String),
    EditEntry {
        group: GroupKind,
        entry: EntryId,
        value: String,
    },
    AddEntry(GroupKind),
    RemoveEntry {
        group: GroupKind,
        entry: EntryId,
    },
    Confirm,
    Decline,
    ToggleTheme,
    SetTemplate(Template),
    CycleTemplate,
    SetAccentColor(String),
    SetFont(String),
    Export,
    ClearAll,
    Focus(Focus),
}

/// What the UI should present after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or was re-applied); redraw
    Updated,
    /// Nothing happened: unknown target, or a confirmation is pending
    Ignored,
    /// Refused with a blocking message
    Warning(&'static str),
    /// Waiting for [`Command::Confirm`] or [`Command::Decline`]
    ConfirmationRequired(&'static str),
    /// The pending confirmation was declined
    Declined,
    /// Export aborted; focus moved to `field`
    Invalid {
        field: SimpleFieldKind,
        message: String,
    },
    /// Export validated; the document is ready for the print flow
    Print(PrintDocument),
    /// The store was cleared and the session restarted empty
    Reset,
}

/// Application state shared by every component
pub struct Session<S: Store> {
    store: S,
    resume: Resume,
    preview: ResumePreview,
    progress: ProgressSnapshot,
    presentation: PresentationState,
    focus: Focus,
    pending: Option<Confirmation>,
    system_theme: Theme,
}

impl<S: Store> Session<S> {
    /// Restore a session from `store`.
    ///
    /// `system_theme` decides the theme only while none has been stored.
    pub fn load(store: S, system_theme: Theme) -> StoreResult<Self> {
        let resume = Resume::new();
        let preview = ResumePreview::render(&resume);
        let mut session = Self {
            store,
            resume,
            preview,
            progress: ProgressSnapshot::default(),
            presentation: PresentationState::default(),
            focus: Focus::default(),
            pending: None,
            system_theme,
        };
        session.restore()?;
        Ok(session)
    }

    fn restore(&mut self) -> StoreResult<()> {
        let mut resume = Resume::new();
        for kind in SimpleFieldKind::ALL {
            if let Some(value) = self.store.get(kind.storage_key()) {
                resume.field_mut(kind).value = value;
            }
        }
        for kind in GroupKind::ALL {
            let stored = self.store.get(kind.storage_key());
            resume.set_group(FieldGroup::load(kind, stored.as_deref()));
        }
        self.resume = resume;
        self.preview = ResumePreview::render(&self.resume);
        self.progress = ProgressSnapshot::calculate(&self.resume);

        self.presentation = PresentationState::from_stored(
            self.store.get(THEME_KEY).as_deref(),
            self.store.get(TEMPLATE_KEY).as_deref(),
            self.store.get(ACCENT_COLOR_KEY).as_deref(),
            self.store.get(FONT_FAMILY_KEY).as_deref(),
            self.system_theme,
        );

        for kind in GroupKind::ALL {
            if self.resume.group(kind).is_empty() {
                self.add_entry(kind)?;
            }
        }

        self.pending = None;
        self.focus = Focus::default();
        tracing::debug!(
            "Session restored: {}/{} complete",
            self.progress.completed,
            self.progress.total
        );
        Ok(())
    }

    /// Handle one user action
    pub fn apply(&mut self, command: Command) -> StoreResult<Outcome> {
        tracing::debug!("Applying {:?}", command);

        if self.pending.is_some() && !matches!(command, Command::Confirm | Command::Decline) {
            return Ok(Outcome::Ignored);
        }

        match command {
            Command::EditField(kind, value) => self.edit_field(kind, value),
            Command::EditEntry {
                group,
                entry,
                value,
            } => self.edit_entry(group, entry, value),
            Command::AddEntry(group) => {
                self.add_entry(group)?;
                Ok(Outcome::Updated)
            }
            Command::RemoveEntry { group, entry } => Ok(self.request_remove(group, entry)),
            Command::Confirm => self.confirm(),
            Command::Decline => Ok(match self.pending.take() {
                Some(_) => Outcome::Declined,
                None => Outcome::Ignored,
            }),
            Command::ToggleTheme => {
                self.presentation.theme = self.presentation.theme.toggled();
                self.store.set(THEME_KEY, self.presentation.theme.as_str())?;
                Ok(Outcome::Updated)
            }
            Command::SetTemplate(template) => self.set_template(template),
            Command::CycleTemplate => self.set_template(self.presentation.template.next()),
            Command::SetAccentColor(color) => {
                self.presentation.accent_color =
                    self.persist_or_reset(ACCENT_COLOR_KEY, &color, DEFAULT_ACCENT_COLOR)?;
                Ok(Outcome::Updated)
            }
            Command::SetFont(font) => {
                self.presentation.font_family =
                    self.persist_or_reset(FONT_FAMILY_KEY, &font, DEFAULT_FONT_FAMILY)?;
                Ok(Outcome::Updated)
            }
            Command::Export => Ok(self.export()),
            Command::ClearAll => {
                self.pending = Some(Confirmation::ClearAll);
                Ok(Outcome::ConfirmationRequired(CLEAR_ALL_PROMPT))
            }
            Command::Focus(target) => Ok(if self.focus_exists(target) {
                self.focus = target;
                Outcome::Updated
            } else {
                Outcome::Ignored
            }),
        }
    }

    fn edit_field(&mut self, kind: SimpleFieldKind, value: String) -> StoreResult<Outcome> {
        self.store.set(kind.storage_key(), &value)?;
        self.preview.update_field(kind, &value);
        self.resume.field_mut(kind).value = value;
        self.recompute_progress();
        Ok(Outcome::Updated)
    }

    fn edit_entry(
        &mut self,
        group: GroupKind,
        entry: EntryId,
        value: String,
    ) -> StoreResult<Outcome> {
        if !self.resume.group_mut(group).set(entry, value) {
            return Ok(Outcome::Ignored);
        }
        self.group_changed(group)?;
        Ok(Outcome::Updated)
    }

    /// Append an empty entry, focus it and persist the group right away
    fn add_entry(&mut self, group: GroupKind) -> StoreResult<EntryId> {
        let id = self.resume.group_mut(group).add_empty();
        self.focus = Focus::Entry(group, id);
        self.group_changed(group)?;
        Ok(id)
    }

    fn request_remove(&mut self, group: GroupKind, entry: EntryId) -> Outcome {
        let entries = self.resume.group(group);
        if entries.get(entry).is_none() {
            return Outcome::Ignored;
        }
        if !entries.can_remove() {
            return Outcome::Warning(KEEP_ONE_ENTRY_WARNING);
        }
        self.pending = Some(Confirmation::RemoveEntry { group, entry });
        Outcome::ConfirmationRequired(REMOVE_ENTRY_PROMPT)
    }

    fn confirm(&mut self) -> StoreResult<Outcome> {
        match self.pending.take() {
            None => Ok(Outcome::Ignored),
            Some(Confirmation::RemoveEntry { group, entry }) => {
                let position = self.resume.group(group).position(entry);
                if !self.resume.group_mut(group).remove(entry) {
                    return Ok(Outcome::Ignored);
                }
                if self.focus == Focus::Entry(group, entry) {
                    let entries = self.resume.group(group).entries();
                    let idx = position.unwrap_or(0).min(entries.len().saturating_sub(1));
                    if let Some(next) = entries.get(idx) {
                        self.focus = Focus::Entry(group, next.id);
                    }
                }
                self.group_changed(group)?;
                Ok(Outcome::Updated)
            }
            Some(Confirmation::ClearAll) => {
                self.store.clear()?;
                self.restore()?;
                tracing::info!("All data cleared");
                Ok(Outcome::Reset)
            }
        }
    }

    fn export(&mut self) -> Outcome {
        match validate(&self.resume) {
            Err(e) => {
                let field = e.field();
                self.focus = Focus::Field(field);
                Outcome::Invalid {
                    field,
                    message: e.to_string(),
                }
            }
            Ok(()) => Outcome::Print(PrintDocument::render(&self.preview, &self.presentation)),
        }
    }

    fn set_template(&mut self, template: Template) -> StoreResult<Outcome> {
        self.presentation.template = template;
        self.store.set(TEMPLATE_KEY, template.as_str())?;
        Ok(Outcome::Updated)
    }

    /// Store a trimmed value, or drop the key and return `default` when blank
    fn persist_or_reset(&mut self, key: &str, value: &str, default: &str) -> StoreResult<String> {
        let value = value.trim();
        if value.is_empty() {
            self.store.remove(key)?;
            Ok(default.to_string())
        } else {
            self.store.set(key, value)?;
            Ok(value.to_string())
        }
    }

    fn group_changed(&mut self, group: GroupKind) -> StoreResult<()> {
        let entries = self.resume.group(group);
        self.store.set(group.storage_key(), &entries.to_json())?;
        self.preview.update_group(entries);
        self.recompute_progress();
        Ok(())
    }

    fn recompute_progress(&mut self) {
        self.progress = ProgressSnapshot::calculate(&self.resume);
    }

    fn focus_exists(&self, target: Focus) -> bool {
        match target {
            Focus::Field(_) => true,
            Focus::Entry(group, entry) => self.resume.group(group).get(entry).is_some(),
        }
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn preview(&self) -> &ResumePreview {
        &self.preview
    }

    pub fn progress(&self) -> ProgressSnapshot {
        self.progress
    }

    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn pending(&self) -> Option<Confirmation> {
        self.pending
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reload it in a fresh session
    pub fn into_store(self) -> S {
        self.store
    }
}
