//! Repeatable field groups and their entry lists.

use super::field::GroupKind;

/// Session-local identifier of an entry within its group.
///
/// Ids are handed out in increasing order and never reused inside a group.
/// They are not persisted: reloading a group assigns fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One free-form line of a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub value: String,
}

impl Entry {
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Ordered entries of one repeatable category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub kind: GroupKind,
    entries: Vec<Entry>,
    next_id: u64,
}

impl FieldGroup {
    /// Create a group with no entries
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a group from its stored representation.
    ///
    /// `None`, or a value that is not a JSON array of strings, yields an
    /// empty group; callers add the first entry themselves.
    pub fn load(kind: GroupKind, stored: Option<&str>) -> Self {
        let mut group = Self::new(kind);
        let Some(raw) = stored else {
            return group;
        };

        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(values) => {
                for value in values {
                    group.push(value);
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed entries under {}: {}",
                    kind.storage_key(),
                    e
                );
            }
        }
        group
    }

    /// Raw entry values in order, empties included
    pub fn serialize(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }

    /// Stored representation: a JSON array of strings
    pub fn to_json(&self) -> String {
        serde_json::Value::from(self.serialize()).to_string()
    }

    /// Append an entry and return its id
    pub fn push(&mut self, value: String) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, value });
        id
    }

    /// Append an empty entry
    pub fn add_empty(&mut self) -> EntryId {
        self.push(String::new())
    }

    /// Replace an entry's value. Returns false if the id is unknown.
    pub fn set(&mut self, id: EntryId, value: String) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => false,
        }
    }

    /// Whether removing an entry would keep at least one behind
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Delete an entry. Refuses to delete the last one.
    pub fn remove(&mut self, id: EntryId) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// At least one entry carries non-blank text
    pub fn has_content(&self) -> bool {
        self.entries.iter().any(Entry::is_filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_preserves_order_and_empties() {
        let stored = r#"["Engineer, Acme, 2020","","Intern, Initech, 2019"]"#;
        let group = FieldGroup::load(GroupKind::Experience, Some(stored));

        assert_eq!(group.len(), 3);
        assert_eq!(
            group.serialize(),
            vec!["Engineer, Acme, 2020", "", "Intern, Initech, 2019"]
        );
        assert_eq!(
            FieldGroup::load(GroupKind::Experience, Some(&group.to_json())).serialize(),
            group.serialize()
        );
    }

    #[test]
    fn test_load_missing_or_malformed_is_empty() {
        assert!(FieldGroup::load(GroupKind::Language, None).is_empty());
        assert!(FieldGroup::load(GroupKind::Language, Some("not json")).is_empty());
        assert!(FieldGroup::load(GroupKind::Language, Some(r#"{"a":1}"#)).is_empty());
    }

    #[test]
    fn test_last_entry_cannot_be_removed() {
        let mut group = FieldGroup::new(GroupKind::Education);
        let only = group.add_empty();
        assert!(!group.remove(only));
        assert_eq!(group.len(), 1);

        let second = group.push("BSc, MIT, 2020".to_string());
        assert!(group.remove(only));
        assert_eq!(group.entries()[0].id, second);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut group = FieldGroup::new(GroupKind::Project);
        let a = group.add_empty();
        let b = group.add_empty();
        group.remove(b);
        let c = group.add_empty();
        assert!(a < c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_has_content_ignores_whitespace() {
        let mut group = FieldGroup::new(GroupKind::Certification);
        let id = group.add_empty();
        group.set(id, "   ".to_string());
        assert!(!group.has_content());
        group.set(id, "AWS Developer".to_string());
        assert!(group.has_content());
    }
}
