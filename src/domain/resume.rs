//! The resume being edited: every simple field and every group.

use super::field::{GroupKind, SimpleField, SimpleFieldKind};
use super::group::FieldGroup;

/// Form content, independent of presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    fields: Vec<SimpleField>,
    groups: Vec<FieldGroup>,
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}

impl Resume {
    /// Empty fields and groups with zero entries
    pub fn new() -> Self {
        Self {
            fields: SimpleFieldKind::ALL.iter().map(|k| SimpleField::new(*k)).collect(),
            groups: GroupKind::ALL.iter().map(|g| FieldGroup::new(*g)).collect(),
        }
    }

    pub fn field(&self, kind: SimpleFieldKind) -> &SimpleField {
        &self.fields[field_index(kind)]
    }

    pub fn field_mut(&mut self, kind: SimpleFieldKind) -> &mut SimpleField {
        &mut self.fields[field_index(kind)]
    }

    /// Raw value of a simple field
    pub fn value(&self, kind: SimpleFieldKind) -> &str {
        &self.field(kind).value
    }

    pub fn fields(&self) -> &[SimpleField] {
        &self.fields
    }

    pub fn group(&self, kind: GroupKind) -> &FieldGroup {
        &self.groups[group_index(kind)]
    }

    pub fn group_mut(&mut self, kind: GroupKind) -> &mut FieldGroup {
        &mut self.groups[group_index(kind)]
    }

    /// Replace a whole group, e.g. after loading it from storage
    pub fn set_group(&mut self, group: FieldGroup) {
        let idx = group_index(group.kind);
        self.groups[idx] = group;
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }
}

fn field_index(kind: SimpleFieldKind) -> usize {
    match kind {
        SimpleFieldKind::Name => 0,
        SimpleFieldKind::Email => 1,
        SimpleFieldKind::Phone => 2,
        SimpleFieldKind::Summary => 3,
        SimpleFieldKind::Skills => 4,
    }
}

fn group_index(kind: GroupKind) -> usize {
    match kind {
        GroupKind::Experience => 0,
        GroupKind::Education => 1,
        GroupKind::Project => 2,
        GroupKind::Certification => 3,
        GroupKind::Language => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_declaration_order() {
        let resume = Resume::new();
        for kind in SimpleFieldKind::ALL {
            assert_eq!(resume.field(kind).kind, kind);
        }
        for kind in GroupKind::ALL {
            assert_eq!(resume.group(kind).kind, kind);
        }
    }
}
