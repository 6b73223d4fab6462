//! Parsing helpers for raw form field text.
//!
//! Form rows hold whatever the user typed; these helpers turn that text
//! into typed values when a draft is snapshotted, and into best-effort
//! values for live recalculation while the user is still editing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use invoice_core::pricing::{self, LESSON_STEP};

/// Display and entry format for dates: day/month/year.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LessonCountError {
    #[error("'{0}' is not a number")]
    Invalid(String),

    #[error("lesson count must be at least 0.5, got {0}")]
    TooSmall(Decimal),

    #[error("lesson count must be a multiple of 0.5, got {0}")]
    OffStep(Decimal),
}

/// Parses a lesson count field strictly: a number, at least 0.5, in
/// half-lesson steps.
pub fn parse_lesson_count(s: &str) -> Result<Decimal, LessonCountError> {
    let trimmed = s.trim();
    let value: Decimal = trimmed
        .parse()
        .map_err(|_| LessonCountError::Invalid(trimmed.to_string()))?;
    if value < LESSON_STEP {
        return Err(LessonCountError::TooSmall(value));
    }
    if !pricing::is_valid_lesson_count(value) {
        return Err(LessonCountError::OffStep(value));
    }
    Ok(value)
}

/// Lenient lesson count for live totals: unparseable input counts as
/// zero so a half-typed row never breaks the running sum.
pub fn lenient_lesson_count(s: &str) -> Decimal {
    s.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Parses a dd/mm/yyyy field.
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Composes the date-range display string from the two date fields.
///
/// When both fields parse as dd/mm/yyyy dates the output is normalised
/// ("1/1/2024" becomes "01/01/2024"); otherwise the raw text is joined
/// as typed, since presence is the only hard requirement.
pub fn format_date_range(start: &str, end: &str) -> String {
    match (parse_display_date(start), parse_display_date(end)) {
        (Some(from), Some(to)) => {
            format!("{} - {}", from.format(DATE_FORMAT), to.format(DATE_FORMAT))
        }
        _ => {
            if !start.trim().is_empty() || !end.trim().is_empty() {
                warn!(start, end, "date fields did not parse; using raw text");
            }
            format!("{} - {}", start.trim(), end.trim())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_lesson_count_accepts_half_steps() {
        assert_eq!(parse_lesson_count("2"), Ok(dec!(2)));
        assert_eq!(parse_lesson_count(" 1.5 "), Ok(dec!(1.5)));
        assert_eq!(parse_lesson_count("0.5"), Ok(dec!(0.5)));
    }

    #[test]
    fn parse_lesson_count_rejects_garbage() {
        assert_eq!(
            parse_lesson_count("two"),
            Err(LessonCountError::Invalid("two".to_string()))
        );
    }

    #[test]
    fn parse_lesson_count_rejects_below_minimum() {
        assert_eq!(
            parse_lesson_count("0"),
            Err(LessonCountError::TooSmall(dec!(0)))
        );
        assert_eq!(
            parse_lesson_count("0.25"),
            Err(LessonCountError::TooSmall(dec!(0.25)))
        );
    }

    #[test]
    fn parse_lesson_count_rejects_off_step_values() {
        assert_eq!(
            parse_lesson_count("1.75"),
            Err(LessonCountError::OffStep(dec!(1.75)))
        );
    }

    #[test]
    fn lenient_count_defaults_to_zero() {
        assert_eq!(lenient_lesson_count("1.5"), dec!(1.5));
        assert_eq!(lenient_lesson_count(""), Decimal::ZERO);
        assert_eq!(lenient_lesson_count("oops"), Decimal::ZERO);
    }

    #[test]
    fn date_range_normalises_parseable_dates() {
        assert_eq!(
            format_date_range("1/1/2024", "7/1/2024"),
            "01/01/2024 - 07/01/2024"
        );
    }

    #[test]
    fn date_range_passes_raw_text_through() {
        assert_eq!(
            format_date_range("early Jan", "mid Jan"),
            "early Jan - mid Jan"
        );
        assert_eq!(format_date_range("", ""), " - ");
    }
}
