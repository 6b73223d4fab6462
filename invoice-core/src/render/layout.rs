//! Page layout for the invoice document.
//!
//! [`layout_invoice`] walks the draft top to bottom with a vertical cursor
//! and produces a flat list of positioned elements; PDF emission is a
//! separate pass. Keeping this stage pure makes the geometry testable
//! without touching font files or a PDF writer.
//!
//! Coordinates are PDF points on a US-letter page, origin at the
//! bottom-left. The document is single-page by design: a long enough item
//! list walks the cursor below the bottom margin and the tail overprints
//! the footer. That is a known limitation, left as-is.

use crate::models::InvoiceDraft;
use crate::pricing::{self, fmt_amount};
use crate::render::metrics::TextMeasure;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

const TITLE_X: f32 = 100.0;
const TITLE_Y: f32 = 760.0;
const STUDENT_NAME_X: f32 = 450.0;

const LEFT_COL_X: f32 = 100.0;
const BODY_START_Y: f32 = 740.0;
const ROW_HEIGHT: f32 = 20.0;
const UNDERLINE_DROP: f32 = 2.0;

const TIME_COL_X: f32 = 180.0;
const EXTRA_TIME_COL_X: f32 = 260.0;

const TABLE_COUNT_X: f32 = 270.0;
const TABLE_TOTAL_X: f32 = 420.0;
const TABLE_RULE_LEFT: f32 = 90.0;
const TABLE_RULE_RIGHT: f32 = 500.0;
const TABLE_HEADER_GAP: f32 = 25.0;

const FOOTER_X: f32 = 100.0;
const FOOTER_Y: f32 = 100.0;
const FOOTER_TEXT: &str = "Generated with tutor-invoice";

const LOGO_X: f32 = 40.0;
const LOGO_Y: f32 = 720.0;
/// 1.5 in x 0.75 in.
pub const LOGO_MAX_WIDTH: f32 = 108.0;
pub const LOGO_MAX_HEIGHT: f32 = 54.0;

/// Text weight/size classes used on the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Bold 16 pt document title.
    Title,
    /// Bold 12 pt table headers and total line.
    Heading,
    /// Regular 12 pt line items.
    Body,
    /// Grey 10 pt footer.
    Footer,
}

impl TextStyle {
    pub fn size(self) -> f32 {
        match self {
            TextStyle::Title => 16.0,
            TextStyle::Heading | TextStyle::Body => 12.0,
            TextStyle::Footer => 10.0,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, TextStyle::Title | TextStyle::Heading)
    }
}

/// One positioned drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        style: TextStyle,
        content: String,
    },
    Rule {
        from: (f32, f32),
        to: (f32, f32),
    },
    Logo {
        x: f32,
        y: f32,
        max_width: f32,
        max_height: f32,
    },
}

/// The laid-out page, in drawing order.
///
/// Layouts compare by value; an unchanged draft lays out to an equal
/// layout every time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceLayout {
    pub elements: Vec<Element>,
}

impl InvoiceLayout {
    fn text(&mut self, x: f32, y: f32, style: TextStyle, content: impl Into<String>) {
        self.elements.push(Element::Text {
            x,
            y,
            style,
            content: content.into(),
        });
    }

    fn rule(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.elements.push(Element::Rule { from, to });
    }
}

/// Lays out the full invoice page.
///
/// The underline under each date range is exactly as wide as the measured
/// width of that string at the body font size; `measure` must wrap the
/// same face the emission pass embeds.
pub fn layout_invoice<M: TextMeasure>(
    draft: &InvoiceDraft,
    has_logo: bool,
    measure: &M,
) -> InvoiceLayout {
    let mut page = InvoiceLayout::default();

    if has_logo {
        page.elements.push(Element::Logo {
            x: LOGO_X,
            y: LOGO_Y,
            max_width: LOGO_MAX_WIDTH,
            max_height: LOGO_MAX_HEIGHT,
        });
    }

    page.text(TITLE_X, TITLE_Y, TextStyle::Title, "Tutoring Invoice");
    if !draft.student_name.is_empty() {
        page.text(
            STUDENT_NAME_X,
            TITLE_Y,
            TextStyle::Body,
            draft.student_name.clone(),
        );
    }

    let mut y = BODY_START_Y;

    for lesson in &draft.lessons {
        page.text(LEFT_COL_X, y, TextStyle::Body, lesson.date_range.clone());
        let width = measure.text_width(&lesson.date_range, TextStyle::Body.size());
        page.rule(
            (LEFT_COL_X, y - UNDERLINE_DROP),
            (LEFT_COL_X + width, y - UNDERLINE_DROP),
        );
        y -= ROW_HEIGHT;

        page.text(LEFT_COL_X, y, TextStyle::Body, lesson.day.clone());
        page.text(TIME_COL_X, y, TextStyle::Body, format!("({})", lesson.time));
        y -= ROW_HEIGHT;
    }

    for extra in &draft.extras {
        page.text(
            LEFT_COL_X,
            y,
            TextStyle::Body,
            format!("Extra Lesson: {}", extra.day),
        );
        page.text(
            EXTRA_TIME_COL_X,
            y,
            TextStyle::Body,
            format!("({})", extra.time),
        );
        y -= ROW_HEIGHT;
    }

    page.text(LEFT_COL_X, y, TextStyle::Heading, "Subject");
    page.text(TABLE_COUNT_X, y, TextStyle::Heading, "Number of Lessons");
    page.text(TABLE_TOTAL_X, y, TextStyle::Heading, "Total ($)");
    page.rule(
        (TABLE_RULE_LEFT, y - 5.0),
        (TABLE_RULE_RIGHT, y - 5.0),
    );
    y -= TABLE_HEADER_GAP;

    for subject in &draft.subjects {
        page.text(LEFT_COL_X, y, TextStyle::Body, subject.subject.clone());
        page.text(
            TABLE_COUNT_X,
            y,
            TextStyle::Body,
            fmt_amount(subject.lesson_count),
        );
        page.text(
            TABLE_TOTAL_X,
            y,
            TextStyle::Body,
            fmt_amount(pricing::line_total(subject.lesson_count)),
        );
        y -= ROW_HEIGHT;
    }

    page.rule(
        (TABLE_COUNT_X, y - 10.0),
        (TABLE_RULE_RIGHT, y - 10.0),
    );
    page.text(TABLE_COUNT_X, y - 30.0, TextStyle::Heading, "Total:");
    page.text(
        TABLE_TOTAL_X,
        y - 30.0,
        TextStyle::Heading,
        format!("${}", fmt_amount(draft.total_amount())),
    );

    page.text(FOOTER_X, FOOTER_Y, TextStyle::Footer, FOOTER_TEXT);

    page
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ExtraLessonEntry, LessonEntry, SubjectEntry};

    /// Deterministic measure: every character advances by a fixed amount,
    /// scaled linearly with the font size.
    struct FixedMeasure {
        advance: f32,
    }

    impl TextMeasure for FixedMeasure {
        fn text_width(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * self.advance * (size / 12.0)
        }
    }

    fn measure() -> FixedMeasure {
        FixedMeasure { advance: 7.2 }
    }

    fn spec_draft() -> InvoiceDraft {
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

    fn find_text<'a>(layout: &'a InvoiceLayout, wanted: &str) -> (f32, f32, TextStyle) {
        layout
            .elements
            .iter()
            .find_map(|el| match el {
                Element::Text { x, y, style, content } if content == wanted => {
                    Some((*x, *y, *style))
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("no text element '{wanted}'"))
    }

    #[test]
    fn title_and_student_name_share_the_top_line() {
        let layout = layout_invoice(&spec_draft(), false, &measure());

        assert_eq!(
            find_text(&layout, "Tutoring Invoice"),
            (100.0, 760.0, TextStyle::Title)
        );
        assert_eq!(find_text(&layout, "Alice"), (450.0, 760.0, TextStyle::Body));
    }

    #[test]
    fn empty_student_name_is_not_drawn() {
        let mut draft = spec_draft();
        draft.student_name.clear();
        let layout = layout_invoice(&draft, false, &measure());

        let names: Vec<_> = layout
            .elements
            .iter()
            .filter(|el| matches!(el, Element::Text { x, .. } if *x == STUDENT_NAME_X))
            .collect();
        assert_eq!(names.len(), 0);
    }

    #[test]
    fn underline_width_round_trips_through_the_measure() {
        let m = measure();
        let draft = spec_draft();
        let layout = layout_invoice(&draft, false, &m);

        let date_range = &draft.lessons[0].date_range;
        let (x, y, _) = find_text(&layout, date_range);
        let rule = layout
            .elements
            .iter()
            .find_map(|el| match el {
                Element::Rule { from, to } if from.1 == y - 2.0 => Some((*from, *to)),
                _ => None,
            })
            .expect("date range underline");

        assert_eq!(rule.0 .0, x);
        assert_eq!(rule.1 .0 - rule.0 .0, m.text_width(date_range, 12.0));
    }

    #[test]
    fn lesson_day_and_time_sit_one_row_below_the_date_range() {
        let layout = layout_invoice(&spec_draft(), false, &measure());

        assert_eq!(
            find_text(&layout, "Monday"),
            (100.0, 720.0, TextStyle::Body)
        );
        assert_eq!(
            find_text(&layout, "(9AM-11AM)"),
            (180.0, 720.0, TextStyle::Body)
        );
    }

    #[test]
    fn cursor_descends_one_row_height_per_line() {
        let mut draft = spec_draft();
        draft.lessons.push(LessonEntry {
            date_range: "08/01/2024 - 14/01/2024".to_string(),
            day: "Tuesday".to_string(),
            time: "4PM-6PM".to_string(),
        });
        draft.extras.push(ExtraLessonEntry {
            day: "Saturday".to_string(),
            time: "2PM-4PM".to_string(),
        });
        let layout = layout_invoice(&draft, false, &measure());

        assert_eq!(find_text(&layout, "01/01/2024 - 07/01/2024").1, 740.0);
        assert_eq!(find_text(&layout, "Monday").1, 720.0);
        assert_eq!(find_text(&layout, "08/01/2024 - 14/01/2024").1, 700.0);
        assert_eq!(find_text(&layout, "Tuesday").1, 680.0);
        assert_eq!(find_text(&layout, "Extra Lesson: Saturday").1, 660.0);
        assert_eq!(find_text(&layout, "Subject").1, 640.0);
    }

    #[test]
    fn extra_lessons_carry_their_prefix_and_column() {
        let mut draft = spec_draft();
        draft.extras.push(ExtraLessonEntry {
            day: "Saturday".to_string(),
            time: "2PM-4PM".to_string(),
        });
        let layout = layout_invoice(&draft, false, &measure());

        let (x, y, _) = find_text(&layout, "Extra Lesson: Saturday");
        assert_eq!((x, y), (100.0, 700.0));
        assert_eq!(find_text(&layout, "(2PM-4PM)"), (260.0, 700.0, TextStyle::Body));
    }

    #[test]
    fn table_header_is_bold_and_ruled_off() {
        let layout = layout_invoice(&spec_draft(), false, &measure());

        assert_eq!(
            find_text(&layout, "Subject"),
            (100.0, 700.0, TextStyle::Heading)
        );
        assert_eq!(
            find_text(&layout, "Number of Lessons"),
            (270.0, 700.0, TextStyle::Heading)
        );
        assert_eq!(
            find_text(&layout, "Total ($)"),
            (420.0, 700.0, TextStyle::Heading)
        );
        assert!(layout.elements.contains(&Element::Rule {
            from: (90.0, 695.0),
            to: (500.0, 695.0),
        }));
    }

    #[test]
    fn subject_row_shows_count_and_line_total() {
        let layout = layout_invoice(&spec_draft(), false, &measure());

        assert_eq!(find_text(&layout, "Math"), (100.0, 675.0, TextStyle::Body));
        assert_eq!(find_text(&layout, "2"), (270.0, 675.0, TextStyle::Body));
        assert_eq!(find_text(&layout, "300"), (420.0, 675.0, TextStyle::Body));
    }

    #[test]
    fn grand_total_sits_below_its_rule() {
        let layout = layout_invoice(&spec_draft(), false, &measure());

        // One subject row ends with the cursor at y = 655.
        assert!(layout.elements.contains(&Element::Rule {
            from: (270.0, 645.0),
            to: (500.0, 645.0),
        }));
        assert_eq!(
            find_text(&layout, "Total:"),
            (270.0, 625.0, TextStyle::Heading)
        );
        assert_eq!(
            find_text(&layout, "$300"),
            (420.0, 625.0, TextStyle::Heading)
        );
    }

    #[test]
    fn half_lesson_counts_price_correctly_in_the_table() {
        let mut draft = spec_draft();
        draft.subjects.push(SubjectEntry {
            subject: "Physics".to_string(),
            lesson_count: dec!(1.5),
        });
        let layout = layout_invoice(&draft, false, &measure());

        assert_eq!(find_text(&layout, "1.5").0, 270.0);
        assert_eq!(find_text(&layout, "225").0, 420.0);
        assert_eq!(find_text(&layout, "$525").0, 420.0);
    }

    #[test]
    fn logo_box_is_emitted_only_when_present() {
        let with = layout_invoice(&spec_draft(), true, &measure());
        let without = layout_invoice(&spec_draft(), false, &measure());

        assert!(with.elements.contains(&Element::Logo {
            x: 40.0,
            y: 720.0,
            max_width: 108.0,
            max_height: 54.0,
        }));
        assert!(
            !without
                .elements
                .iter()
                .any(|el| matches!(el, Element::Logo { .. }))
        );
    }

    #[test]
    fn footer_is_the_last_element() {
        let layout = layout_invoice(&spec_draft(), false, &measure());

        assert_eq!(
            layout.elements.last(),
            Some(&Element::Text {
                x: 100.0,
                y: 100.0,
                style: TextStyle::Footer,
                content: FOOTER_TEXT.to_string(),
            })
        );
    }

    #[test]
    fn unchanged_draft_lays_out_identically() {
        let draft = spec_draft();
        let m = measure();

        assert_eq!(
            layout_invoice(&draft, true, &m),
            layout_invoice(&draft, true, &m)
        );
    }
}
