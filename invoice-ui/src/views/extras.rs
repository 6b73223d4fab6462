//! Extra-lesson list editor: ad-hoc sessions with just a day and a time.

use cursive::Cursive;
use cursive::event::Key;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{Button, Dialog, DummyView, EditView, LinearLayout, OnEventView, TextView};

use super::main_menu::show_main_menu;
use super::status_bar::{hints, status_bar};
use crate::state::{AppState, ExtraLessonField, ExtraLessonForm};

/// Display the extra-lesson list editor.
pub fn show_extras(siv: &mut Cursive) {
    let rows = siv
        .with_user_data(|app: &mut AppState| app.session.extras.clone())
        .unwrap_or_default();

    let mut list = LinearLayout::vertical();
    list.add_child(TextView::new("    Day             Time Slot"));
    for (index, row) in rows.iter().enumerate() {
        list.add_child(extra_row(index, row));
    }
    if rows.is_empty() {
        list.add_child(TextView::new("No extra lessons - that's fine, they're optional."));
    }

    let status = status_bar(&[hints::TAB, hints::ENTER, hints::ESC, hints::CTRL_Q]);

    let layout = LinearLayout::vertical()
        .child(list.scrollable())
        .child(DummyView.fixed_height(1))
        .child(status);

    let dialog = Dialog::around(layout)
        .title("Extra Lessons")
        .button("Add Extra Lesson", on_add)
        .button("Back", on_back)
        .padding_lrtb(1, 1, 0, 0);

    siv.add_layer(OnEventView::new(dialog).on_event(Key::Esc, on_back));
}

fn extra_row(index: usize, row: &ExtraLessonForm) -> LinearLayout {
    let day = EditView::new()
        .content(row.day.clone())
        .on_edit(move |s, text, _| set_field(s, index, ExtraLessonField::Day, text))
        .with_name(format!("extra_day_{index}"))
        .fixed_width(15);
    let time = EditView::new()
        .content(row.time.clone())
        .on_edit(move |s, text, _| set_field(s, index, ExtraLessonField::Time, text))
        .with_name(format!("extra_time_{index}"))
        .fixed_width(14);

    LinearLayout::horizontal()
        .child(TextView::new(format!("{:>2}. ", index + 1)))
        .child(day)
        .child(TextView::new(" "))
        .child(time)
        .child(TextView::new(" "))
        .child(Button::new("Remove", move |s| remove_row(s, index)))
}

fn set_field(siv: &mut Cursive, index: usize, field: ExtraLessonField, value: &str) {
    siv.with_user_data(|app: &mut AppState| {
        app.session.update_extra(index, field, value);
    });
}

fn remove_row(siv: &mut Cursive, index: usize) {
    siv.with_user_data(|app: &mut AppState| {
        app.session.remove_extra(index);
    });
    refresh(siv);
}

fn on_add(siv: &mut Cursive) {
    siv.with_user_data(|app: &mut AppState| app.session.add_extra());
    refresh(siv);
}

fn refresh(siv: &mut Cursive) {
    siv.pop_layer();
    show_extras(siv);
}

fn on_back(siv: &mut Cursive) {
    siv.pop_layer();
    show_main_menu(siv);
}
