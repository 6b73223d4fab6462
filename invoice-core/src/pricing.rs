//! Pricing rules for tutoring invoices.
//!
//! Every lesson is billed at a fixed unit price; subjects carry a lesson
//! count in half-lesson steps. All arithmetic is done in [`Decimal`] so
//! half-lesson counts never pick up binary-float noise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::SubjectEntry;

/// Fixed amount billed per lesson count unit. The currency unit is
/// implicit; amounts are rendered with a `$` prefix on the invoice.
pub const UNIT_PRICE: Decimal = dec!(150);

/// Smallest billable lesson increment.
pub const LESSON_STEP: Decimal = dec!(0.5);

/// Amount billed for one subject row.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use invoice_core::pricing::line_total;
///
/// assert_eq!(line_total(dec!(2)), dec!(300));
/// assert_eq!(line_total(dec!(1.5)), dec!(225));
/// ```
pub fn line_total(lesson_count: Decimal) -> Decimal {
    lesson_count * UNIT_PRICE
}

/// Grand total across all subject rows.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use invoice_core::models::SubjectEntry;
/// use invoice_core::pricing::invoice_total;
///
/// let subjects = vec![
///     SubjectEntry { subject: "Math".to_string(), lesson_count: dec!(2) },
///     SubjectEntry { subject: "Physics".to_string(), lesson_count: dec!(0.5) },
/// ];
///
/// assert_eq!(invoice_total(&subjects), dec!(375));
/// ```
pub fn invoice_total(subjects: &[SubjectEntry]) -> Decimal {
    subjects
        .iter()
        .map(|subject| line_total(subject.lesson_count))
        .sum()
}

/// Whether a lesson count is billable: at least half a lesson, in
/// half-lesson steps.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use invoice_core::pricing::is_valid_lesson_count;
///
/// assert!(is_valid_lesson_count(dec!(0.5)));
/// assert!(is_valid_lesson_count(dec!(2)));
/// assert!(!is_valid_lesson_count(dec!(0)));
/// assert!(!is_valid_lesson_count(dec!(1.25)));
/// ```
pub fn is_valid_lesson_count(count: Decimal) -> bool {
    count >= LESSON_STEP && (count % LESSON_STEP).is_zero()
}

/// Formats an amount or count for the invoice: trailing zeros dropped, so
/// whole amounts print without a decimal point (`300`, not `300.0`).
pub fn fmt_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
