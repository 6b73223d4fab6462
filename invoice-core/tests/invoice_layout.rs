//! End-to-end checks of the draft → layout pipeline.
//!
//! These complement the unit tests inside layout.rs (which probe
//! individual geometry rules) by walking one realistic invoice through
//! validation, pricing, and layout in a single pass.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use invoice_core::models::{InvoiceDraft, LessonEntry, SubjectEntry};
use invoice_core::render::{Element, TextMeasure, TextStyle, layout_invoice};

/// Fixed-advance stand-in for the embedded font.
struct EvenMeasure;

impl TextMeasure for EvenMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * 0.6 * size
    }
}

fn alice_draft() -> InvoiceDraft {
    InvoiceDraft {
        student_name: "Alice".to_string(),
        lessons: vec![LessonEntry {
            date_range: "01/01/2024 - 07/01/2024".to_string(),
            day: "Monday".to_string(),
            time: "9AM-11AM".to_string(),
        }],
        extras: vec![],
        subjects: vec![SubjectEntry {
            subject: "Math".to_string(),
            lesson_count: dec!(2),
        }],
    }
}

fn texts(elements: &[Element]) -> Vec<(&str, f32, f32, TextStyle)> {
    elements
        .iter()
        .filter_map(|el| match el {
            Element::Text { x, y, style, content } => Some((content.as_str(), *x, *y, *style)),
            _ => None,
        })
        .collect()
}

#[test]
fn alice_invoice_totals_three_hundred() {
    assert_eq!(alice_draft().total_amount(), dec!(300));
}

#[test]
fn alice_invoice_lays_out_every_expected_line() {
    let layout = layout_invoice(&alice_draft(), false, &EvenMeasure);
    let texts = texts(&layout.elements);

    // Date range with its underline.
    assert!(texts.contains(&("01/01/2024 - 07/01/2024", 100.0, 740.0, TextStyle::Body)));
    let underline_width = EvenMeasure.text_width("01/01/2024 - 07/01/2024", 12.0);
    assert!(layout.elements.contains(&Element::Rule {
        from: (100.0, 738.0),
        to: (100.0 + underline_width, 738.0),
    }));

    // Day and time slot on the next row.
    assert!(texts.contains(&("Monday", 100.0, 720.0, TextStyle::Body)));
    assert!(texts.contains(&("(9AM-11AM)", 180.0, 720.0, TextStyle::Body)));

    // Table row "Math | 2 | 300".
    assert!(texts.contains(&("Math", 100.0, 675.0, TextStyle::Body)));
    assert!(texts.contains(&("2", 270.0, 675.0, TextStyle::Body)));
    assert!(texts.contains(&("300", 420.0, 675.0, TextStyle::Body)));

    // Grand total line.
    assert!(texts.contains(&("$300", 420.0, 625.0, TextStyle::Heading)));
}

#[test]
fn validation_gates_generation() {
    let mut no_name = alice_draft();
    no_name.student_name.clear();
    assert!(no_name.validate().is_err());

    let mut empty_lists = alice_draft();
    empty_lists.lessons.clear();
    empty_lists.subjects.clear();
    assert!(empty_lists.validate().is_err());

    assert!(alice_draft().validate().is_ok());
}

#[test]
fn relayout_of_an_unchanged_draft_is_stable() {
    let draft = alice_draft();

    let first = layout_invoice(&draft, false, &EvenMeasure);
    let second = layout_invoice(&draft, false, &EvenMeasure);

    assert_eq!(first, second);
}
