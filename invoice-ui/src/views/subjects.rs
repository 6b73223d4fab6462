//! Subject list editor with live pricing.
//!
//! Each row pairs a subject with its lesson count (minimum 0.5, step
//! 0.5) and shows the row amount; the grand total at the bottom is
//! recalculated on every edit, never stored.

use cursive::Cursive;
use cursive::event::Key;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{Button, Dialog, DummyView, EditView, LinearLayout, OnEventView, TextView};

use invoice_core::pricing::{self, fmt_amount};

use super::main_menu::show_main_menu;
use super::status_bar::{hints, status_bar};
use crate::input;
use crate::state::{AppState, SubjectField, SubjectForm};

const TOTAL_VIEW: &str = "subjects_total";

/// Display the subject list editor.
pub fn show_subjects(siv: &mut Cursive) {
    let rows = siv
        .with_user_data(|app: &mut AppState| app.session.subjects.clone())
        .unwrap_or_default();

    let mut list = LinearLayout::vertical();
    list.add_child(TextView::new("    Subject             Lessons      Total ($)"));
    for (index, row) in rows.iter().enumerate() {
        list.add_child(subject_row(index, row));
    }
    if rows.is_empty() {
        list.add_child(TextView::new("No subjects yet - add one below."));
    }

    let total = TextView::new(String::new()).with_name(TOTAL_VIEW);
    let status = status_bar(&[hints::TAB, hints::ENTER, hints::ESC, hints::CTRL_Q]);

    let layout = LinearLayout::vertical()
        .child(TextView::new("Lesson counts bill in half-lesson steps (0.5 minimum)."))
        .child(DummyView.fixed_height(1))
        .child(list.scrollable())
        .child(TextView::new("─".repeat(50)))
        .child(total)
        .child(DummyView.fixed_height(1))
        .child(status);

    let dialog = Dialog::around(layout)
        .title("Subjects")
        .button("Add Subject", on_add)
        .button("Back", on_back)
        .padding_lrtb(1, 1, 0, 0);

    siv.add_layer(OnEventView::new(dialog).on_event(Key::Esc, on_back));

    recalculate(siv);
}

fn subject_row(index: usize, row: &SubjectForm) -> LinearLayout {
    let subject = EditView::new()
        .content(row.subject.clone())
        .on_edit(move |s, text, _| {
            s.with_user_data(|app: &mut AppState| {
                app.session.update_subject(index, SubjectField::Subject, text);
            });
        })
        .with_name(format!("subject_name_{index}"))
        .fixed_width(20);
    let lessons = EditView::new()
        .content(row.lessons.clone())
        .on_edit(move |s, text, _| {
            s.with_user_data(|app: &mut AppState| {
                app.session.update_subject(index, SubjectField::Lessons, text);
            });
            recalculate(s);
        })
        .with_name(format!("subject_lessons_{index}"))
        .fixed_width(8);
    let row_total = TextView::new(String::new()).with_name(format!("subject_total_{index}"));

    LinearLayout::horizontal()
        .child(TextView::new(format!("{:>2}. ", index + 1)))
        .child(subject)
        .child(TextView::new(" "))
        .child(lessons)
        .child(TextView::new("  "))
        .child(row_total.fixed_width(10))
        .child(TextView::new(" "))
        .child(Button::new("Remove", move |s| remove_row(s, index)))
}

/// Recompute the per-row amounts and grand total from session state.
fn recalculate(siv: &mut Cursive) {
    let (rows, total) = siv
        .with_user_data(|app: &mut AppState| {
            (app.session.subjects.clone(), app.session.running_total())
        })
        .unwrap_or_default();

    for (index, row) in rows.iter().enumerate() {
        let amount = pricing::line_total(input::lenient_lesson_count(&row.lessons));
        siv.call_on_name(&format!("subject_total_{index}"), |view: &mut TextView| {
            view.set_content(fmt_amount(amount));
        });
    }

    siv.call_on_name(TOTAL_VIEW, |view: &mut TextView| {
        view.set_content(format!("Total Amount: ${}", fmt_amount(total)));
    });
}

fn remove_row(siv: &mut Cursive, index: usize) {
    siv.with_user_data(|app: &mut AppState| {
        app.session.remove_subject(index);
    });
    refresh(siv);
}

fn on_add(siv: &mut Cursive) {
    siv.with_user_data(|app: &mut AppState| app.session.add_subject());
    refresh(siv);
}

fn refresh(siv: &mut Cursive) {
    siv.pop_layer();
    show_subjects(siv);
}

fn on_back(siv: &mut Cursive) {
    siv.pop_layer();
    show_main_menu(siv);
}
