//! Completion progress of a resume.

use super::field::SimpleFieldKind;
use super::resume::Resume;

/// Derived completion state; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub completed: u32,
    pub total: u32,
    pub percent: u8,
}

impl ProgressSnapshot {
    /// Compute progress for `resume`.
    ///
    /// Every simple field counts toward the total. A group counts toward the
    /// total as soon as it has an entry, and toward completion only once one
    /// of its entries has text.
    pub fn calculate(resume: &Resume) -> Self {
        let simple_total = SimpleFieldKind::ALL.len() as u32;
        let simple_done = resume.fields().iter().filter(|f| f.is_filled()).count() as u32;

        let groups_present = resume.groups().iter().filter(|g| !g.is_empty()).count() as u32;
        let groups_done = resume.groups().iter().filter(|g| g.has_content()).count() as u32;

        Self::from_counts(simple_done + groups_done, simple_total + groups_present)
    }

    fn from_counts(completed: u32, total: u32) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    /// Gauge ratio in [0, 1]
    pub fn ratio(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }

    /// Text next to the progress bar
    pub fn label(&self) -> String {
        format!("{}% complete", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GroupKind;

    fn resume_with_empty_entries() -> Resume {
        let mut resume = Resume::new();
        for kind in GroupKind::ALL {
            resume.group_mut(kind).add_empty();
        }
        resume
    }

    #[test]
    fn test_everything_filled_is_complete() {
        let mut resume = Resume::new();
        for kind in SimpleFieldKind::ALL {
            resume.field_mut(kind).value = "x".to_string();
        }
        for kind in GroupKind::ALL {
            resume.group_mut(kind).push("entry".to_string());
        }

        let progress = ProgressSnapshot::calculate(&resume);
        assert_eq!((progress.completed, progress.total, progress.percent), (10, 10, 100));
        assert_eq!(progress.label(), "100% complete");
    }

    #[test]
    fn test_name_only_with_instantiated_groups() {
        let mut resume = resume_with_empty_entries();
        resume.field_mut(SimpleFieldKind::Name).value = "Jane Doe".to_string();

        let progress = ProgressSnapshot::calculate(&resume);
        assert_eq!((progress.completed, progress.total, progress.percent), (1, 10, 10));
    }

    #[test]
    fn test_groups_without_entries_leave_the_total() {
        let mut resume = Resume::new();
        resume.field_mut(SimpleFieldKind::Email).value = "a@b.co".to_string();

        let progress = ProgressSnapshot::calculate(&resume);
        assert_eq!((progress.completed, progress.total, progress.percent), (1, 5, 20));
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 2 of 3 => 66.67 => 67
        assert_eq!(ProgressSnapshot::from_counts(2, 3).percent, 67);
        assert_eq!(ProgressSnapshot::from_counts(1, 8).percent, 13);
        assert_eq!(ProgressSnapshot::from_counts(0, 0).percent, 0);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let resume = resume_with_empty_entries();
        assert_eq!(
            ProgressSnapshot::calculate(&resume),
            ProgressSnapshot::calculate(&resume)
        );
    }
}
