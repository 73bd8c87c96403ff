//! Field registry: the simple fields and repeatable groups of a resume.

use serde::{Deserialize, Serialize};

/// A single-value resume attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimpleFieldKind {
    Name,
    Email,
    Phone,
    Summary,
    Skills,
}

impl SimpleFieldKind {
    /// All simple fields in form order
    pub const ALL: [SimpleFieldKind; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Summary,
        Self::Skills,
    ];

    /// Key the raw value is stored under
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Name => "nameInput",
            Self::Email => "emailInput",
            Self::Phone => "phoneInput",
            Self::Summary => "summaryInput",
            Self::Skills => "skillsInput",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Summary => "Professional Summary",
            Self::Skills => "Skills",
        }
    }

    /// Hint shown while the input is empty
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Name => "Jane Doe",
            Self::Email => "jane@example.com",
            Self::Phone => "+1 555 123 4567",
            Self::Summary => "A short summary of your experience",
            Self::Skills => "Comma separated, e.g. Rust, SQL, Kubernetes",
        }
    }

    /// Whether the input accepts more than one line
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

/// A repeatable category of free-form entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Experience,
    Education,
    Project,
    Certification,
    Language,
}

impl GroupKind {
    /// All groups in form order
    pub const ALL: [GroupKind; 5] = [
        Self::Experience,
        Self::Education,
        Self::Project,
        Self::Certification,
        Self::Language,
    ];

    /// Key the serialized entry sequence is stored under
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Experience => "experienceFields",
            Self::Education => "educationFields",
            Self::Project => "projectFields",
            Self::Certification => "certificationFields",
            Self::Language => "languageFields",
        }
    }

    /// Section heading in form and preview
    pub fn title(&self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Project => "Projects",
            Self::Certification => "Certifications",
            Self::Language => "Languages",
        }
    }

    /// Hint shown inside an empty entry
    pub fn entry_hint(&self) -> &'static str {
        match self {
            Self::Experience => {
                "Job title, Company, Duration (e.g., \"Software Engineer, Google, 2020-2022\")"
            }
            Self::Education => {
                "Degree, University, Year (e.g., \"BSc Computer Science, MIT, 2020\")"
            }
            Self::Project => {
                "Project name, Technologies, Description (e.g., \"E-commerce Website, React/Node.js, Built a full-stack...\")"
            }
            Self::Certification => {
                "Certification name, Issuer, Year (e.g., \"AWS Certified Developer, Amazon, 2022\")"
            }
            Self::Language => "Language, Proficiency (e.g., \"Spanish, Fluent\")",
        }
    }

    /// Muted preview text while every entry is blank
    pub fn preview_placeholder(&self) -> &'static str {
        match self {
            Self::Experience => "Your experience entries will appear here",
            Self::Education => "Your education entries will appear here",
            Self::Project => "Your projects will appear here",
            Self::Certification => "Your certifications will appear here",
            Self::Language => "Your languages will appear here",
        }
    }
}

/// A simple field and its current raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleField {
    pub kind: SimpleFieldKind,
    pub value: String,
}

impl SimpleField {
    pub fn new(kind: SimpleFieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    /// Whether the field counts as filled in
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_storage_keys_are_unique() {
        let keys: HashSet<&str> = SimpleFieldKind::ALL
            .iter()
            .map(|k| k.storage_key())
            .chain(GroupKind::ALL.iter().map(|g| g.storage_key()))
            .collect();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_simple_field_filled_ignores_whitespace() {
        let mut field = SimpleField::new(SimpleFieldKind::Phone);
        assert!(!field.is_filled());
        field.value = "  \n".to_string();
        assert!(!field.is_filled());
        field.value = " 555 ".to_string();
        assert!(field.is_filled());
    }
}
