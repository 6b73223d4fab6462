//! Per-session application state.
//!
//! One [`AppState`] lives in the cursive user data for the lifetime of the
//! process, so concurrent sessions of the tool never share anything. The
//! form lists hold raw field text; typed values are produced only when a
//! draft is snapshotted for rendering.

use std::path::PathBuf;

use rust_decimal::Decimal;
use tracing::warn;

use invoice_core::models::{ExtraLessonEntry, InvoiceDraft, LessonEntry, SubjectEntry};
use invoice_core::pricing;
use invoice_core::render::{InvoiceFonts, Logo};

use crate::input;

/// Assets and settings resolved once at startup.
pub struct Resources {
    pub fonts: InvoiceFonts,
    pub logo: Option<Logo>,
    pub output: PathBuf,
}

/// Everything stored in the cursive user data.
pub struct AppState {
    pub resources: Resources,
    pub session: SessionState,
}

/// One lesson block as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonForm {
    pub start_date: String,
    pub end_date: String,
    pub day: String,
    pub time: String,
}

/// One ad-hoc extra lesson as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraLessonForm {
    pub day: String,
    pub time: String,
}

/// One subject row as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectForm {
    pub subject: String,
    pub lessons: String,
}

impl Default for SubjectForm {
    /// New subject rows start at one lesson, so a freshly added row is
    /// already billable.
    fn default() -> Self {
        Self {
            subject: String::new(),
            lessons: "1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonField {
    StartDate,
    EndDate,
    Day,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraLessonField {
    Day,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectField {
    Subject,
    Lessons,
}

/// The form state manager: three growable lists plus the student name.
///
/// All mutations are index-bounds-checked; removing or updating a
/// nonexistent index is a warned no-op so a stale callback can never
/// panic the UI. Removal shifts later entries down, preserving order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub student_name: String,
    pub lessons: Vec<LessonForm>,
    pub extras: Vec<ExtraLessonForm>,
    pub subjects: Vec<SubjectForm>,
}

impl SessionState {
    pub fn add_lesson(&mut self) {
        self.lessons.push(LessonForm::default());
    }

    pub fn remove_lesson(&mut self, index: usize) -> bool {
        if index >= self.lessons.len() {
            warn!(index, len = self.lessons.len(), "remove_lesson out of bounds");
            return false;
        }
        self.lessons.remove(index);
        true
    }

    pub fn update_lesson(&mut self, index: usize, field: LessonField, value: &str) -> bool {
        let Some(row) = self.lessons.get_mut(index) else {
            warn!(index, "update_lesson out of bounds");
            return false;
        };
        match field {
            LessonField::StartDate => row.start_date = value.to_string(),
            LessonField::EndDate => row.end_date = value.to_string(),
            LessonField::Day => row.day = value.to_string(),
            LessonField::Time => row.time = value.to_string(),
        }
        true
    }

    pub fn add_extra(&mut self) {
        self.extras.push(ExtraLessonForm::default());
    }

    pub fn remove_extra(&mut self, index: usize) -> bool {
        if index >= self.extras.len() {
            warn!(index, len = self.extras.len(), "remove_extra out of bounds");
            return false;
        }
        self.extras.remove(index);
        true
    }

    pub fn update_extra(&mut self, index: usize, field: ExtraLessonField, value: &str) -> bool {
        let Some(row) = self.extras.get_mut(index) else {
            warn!(index, "update_extra out of bounds");
            return false;
        };
        match field {
            ExtraLessonField::Day => row.day = value.to_string(),
            ExtraLessonField::Time => row.time = value.to_string(),
        }
        true
    }

    pub fn add_subject(&mut self) {
        self.subjects.push(SubjectForm::default());
    }

    pub fn remove_subject(&mut self, index: usize) -> bool {
        if index >= self.subjects.len() {
            warn!(index, len = self.subjects.len(), "remove_subject out of bounds");
            return false;
        }
        self.subjects.remove(index);
        true
    }

    pub fn update_subject(&mut self, index: usize, field: SubjectField, value: &str) -> bool {
        let Some(row) = self.subjects.get_mut(index) else {
            warn!(index, "update_subject out of bounds");
            return false;
        };
        match field {
            SubjectField::Subject => row.subject = value.to_string(),
            SubjectField::Lessons => row.lessons = value.to_string(),
        }
        true
    }

    /// Live total for display while editing: unparseable counts are
    /// treated as zero, recomputed from the current rows on every call.
    pub fn running_total(&self) -> Decimal {
        self.subjects
            .iter()
            .map(|row| pricing::line_total(input::lenient_lesson_count(&row.lessons)))
            .sum()
    }

    /// Snapshots the form into a typed [`InvoiceDraft`].
    ///
    /// Date ranges are composed from the start/end fields; subject rows
    /// must carry a billable lesson count, and every bad row is reported
    /// (not just the first).
    pub fn to_draft(&self) -> Result<InvoiceDraft, Vec<String>> {
        let mut errors = Vec::new();

        let lessons = self
            .lessons
            .iter()
            .map(|row| LessonEntry {
                date_range: input::format_date_range(&row.start_date, &row.end_date),
                day: row.day.clone(),
                time: row.time.clone(),
            })
            .collect();

        let extras = self
            .extras
            .iter()
            .map(|row| ExtraLessonEntry {
                day: row.day.clone(),
                time: row.time.clone(),
            })
            .collect();

        let mut subjects = Vec::with_capacity(self.subjects.len());
        for (i, row) in self.subjects.iter().enumerate() {
            match input::parse_lesson_count(&row.lessons) {
                Ok(lesson_count) => subjects.push(SubjectEntry {
                    subject: row.subject.clone(),
                    lesson_count,
                }),
                Err(e) => errors.push(format!("Subject {}: {e}", i + 1)),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(InvoiceDraft {
            student_name: self.student_name.clone(),
            lessons,
            extras,
            subjects,
        })
    }
}
