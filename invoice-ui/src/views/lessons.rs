//! Lesson list editor.
//!
//! One row per lesson block: start date, end date, day, and time slot.
//! Edits write straight into session state; add/remove rebuild the screen
//! from that state so row indices always match the list.

use cursive::Cursive;
use cursive::event::Key;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{Button, Dialog, DummyView, EditView, LinearLayout, OnEventView, TextView};

use super::main_menu::show_main_menu;
use super::status_bar::{hints, status_bar};
use crate::state::{AppState, LessonField, LessonForm};

/// Display the lesson list editor.
pub fn show_lessons(siv: &mut Cursive) {
    let rows = siv
        .with_user_data(|app: &mut AppState| app.session.lessons.clone())
        .unwrap_or_default();

    let mut list = LinearLayout::vertical();
    list.add_child(TextView::new(
        "    Start         End           Day         Time Slot",
    ));
    for (index, row) in rows.iter().enumerate() {
        list.add_child(lesson_row(index, row));
    }
    if rows.is_empty() {
        list.add_child(TextView::new("No lessons yet - add one below."));
    }

    let status = status_bar(&[hints::TAB, hints::ENTER, hints::ESC, hints::CTRL_Q]);

    let layout = LinearLayout::vertical()
        .child(TextView::new("Dates are dd/mm/yyyy; time slots are free text (e.g. 9AM-11AM)."))
        .child(DummyView.fixed_height(1))
        .child(list.scrollable())
        .child(DummyView.fixed_height(1))
        .child(status);

    let dialog = Dialog::around(layout)
        .title("Lessons")
        .button("Add Lesson", on_add)
        .button("Back", on_back)
        .padding_lrtb(1, 1, 0, 0);

    siv.add_layer(OnEventView::new(dialog).on_event(Key::Esc, on_back));
}

/// One editable row; every field writes through to the session state.
fn lesson_row(index: usize, row: &LessonForm) -> LinearLayout {
    let start = EditView::new()
        .content(row.start_date.clone())
        .on_edit(move |s, text, _| set_field(s, index, LessonField::StartDate, text))
        .with_name(format!("lesson_start_{index}"))
        .fixed_width(12);
    let end = EditView::new()
        .content(row.end_date.clone())
        .on_edit(move |s, text, _| set_field(s, index, LessonField::EndDate, text))
        .with_name(format!("lesson_end_{index}"))
        .fixed_width(12);
    let day = EditView::new()
        .content(row.day.clone())
        .on_edit(move |s, text, _| set_field(s, index, LessonField::Day, text))
        .with_name(format!("lesson_day_{index}"))
        .fixed_width(11);
    let time = EditView::new()
        .content(row.time.clone())
        .on_edit(move |s, text, _| set_field(s, index, LessonField::Time, text))
        .with_name(format!("lesson_time_{index}"))
        .fixed_width(12);

    LinearLayout::horizontal()
        .child(TextView::new(format!("{:>2}. ", index + 1)))
        .child(start)
        .child(TextView::new(" "))
        .child(end)
        .child(TextView::new(" "))
        .child(day)
        .child(TextView::new(" "))
        .child(time)
        .child(TextView::new(" "))
        .child(Button::new("Remove", move |s| remove_row(s, index)))
}

fn set_field(siv: &mut Cursive, index: usize, field: LessonField, value: &str) {
    siv.with_user_data(|app: &mut AppState| {
        app.session.update_lesson(index, field, value);
    });
}

fn remove_row(siv: &mut Cursive, index: usize) {
    siv.with_user_data(|app: &mut AppState| {
        app.session.remove_lesson(index);
    });
    refresh(siv);
}

fn on_add(siv: &mut Cursive) {
    siv.with_user_data(|app: &mut AppState| app.session.add_lesson());
    refresh(siv);
}

/// Rebuild the screen from the current session state.
fn refresh(siv: &mut Cursive) {
    siv.pop_layer();
    show_lessons(siv);
}

fn on_back(siv: &mut Cursive) {
    siv.pop_layer();
    show_main_menu(siv);
}
