use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recurring block of tutoring sessions over a date range.
///
/// The date range is kept as the display string ("dd/mm/yyyy - dd/mm/yyyy");
/// the UI layer normalises it from the individual date fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEntry {
    pub date_range: String,
    /// Weekday label, e.g. "Monday".
    pub day: String,
    /// Time-slot label, e.g. "9AM-11AM".
    pub time: String,
}

/// An ad-hoc, non-recurring tutoring session on a specific day/time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLessonEntry {
    pub day: String,
    pub time: String,
}

/// A subject name paired with the number of lessons billed under it.
///
/// Lesson counts move in half-lesson steps with a minimum of 0.5; see
/// [`crate::pricing::is_valid_lesson_count`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub subject: String,
    pub lesson_count: Decimal,
}
