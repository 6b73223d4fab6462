mod draft;
mod entries;

pub use draft::{DraftError, InvoiceDraft};
pub use entries::{ExtraLessonEntry, LessonEntry, SubjectEntry};
