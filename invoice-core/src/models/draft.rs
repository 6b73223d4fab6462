use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ExtraLessonEntry, LessonEntry, SubjectEntry};
use crate::pricing;

/// Reasons a draft cannot be turned into an invoice document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("student name must not be empty")]
    MissingStudentName,

    #[error("at least one lesson entry is required")]
    NoLessons,

    #[error("at least one subject entry is required")]
    NoSubjects,
}

/// Transient aggregate of everything that goes on one invoice.
///
/// The draft lives only for the session; nothing is persisted. The total
/// is deliberately not a field: it is recomputed from the current subject
/// entries on every call to [`InvoiceDraft::total_amount`], so edits can
/// never leave a stale figure behind.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use invoice_core::models::{InvoiceDraft, LessonEntry, SubjectEntry};
///
/// let draft = InvoiceDraft {
///     student_name: "Alice".to_string(),
///     lessons: vec![LessonEntry {
///         date_range: "01/01/2024 - 07/01/2024".to_string(),
///         day: "Monday".to_string(),
///         time: "9AM-11AM".to_string(),
///     }],
///     extras: vec![],
///     subjects: vec![SubjectEntry {
///         subject: "Math".to_string(),
///         lesson_count: dec!(2),
///     }],
/// };
///
/// assert!(draft.validate().is_ok());
/// assert_eq!(draft.total_amount(), dec!(300));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub student_name: String,
    pub lessons: Vec<LessonEntry>,
    pub extras: Vec<ExtraLessonEntry>,
    pub subjects: Vec<SubjectEntry>,
}

impl InvoiceDraft {
    /// Total amount due: sum of all subject lesson counts times the unit
    /// price. Always derived, never stored.
    pub fn total_amount(&self) -> Decimal {
        pricing::invoice_total(&self.subjects)
    }

    /// Collects every precondition violation for generating a document.
    ///
    /// Generation requires a non-empty student name, at least one lesson
    /// entry, and at least one subject entry. Extra lessons are optional.
    pub fn problems(&self) -> Vec<DraftError> {
        let mut problems = Vec::new();
        if self.student_name.trim().is_empty() {
            problems.push(DraftError::MissingStudentName);
        }
        if self.lessons.is_empty() {
            problems.push(DraftError::NoLessons);
        }
        if self.subjects.is_empty() {
            problems.push(DraftError::NoSubjects);
        }
        problems
    }

    /// Checks the generation precondition, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] from [`InvoiceDraft::problems`].
    pub fn validate(&self) -> Result<(), DraftError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }
}
