//! Main screen: student name, session summary, and section navigation.

use cursive::Cursive;
use cursive::align::HAlign;
use cursive::view::{Nameable, Resizable};
use cursive::views::{Dialog, DummyView, EditView, LinearLayout, SelectView, TextView};

use invoice_core::pricing::fmt_amount;

use super::status_bar::{hints, status_bar};
use super::{extras, generate, lessons, subjects};
use crate::state::{AppState, SessionState};

const STUDENT_NAME_FIELD: &str = "student_name";

/// Menu actions available from the main screen.
#[derive(Debug, Clone, Copy)]
enum MenuAction {
    Lessons,
    ExtraLessons,
    Subjects,
    Generate,
    Quit,
}

/// Displays the main screen as the root layer.
pub fn show_main_menu(siv: &mut Cursive) {
    let session = siv
        .with_user_data(|app: &mut AppState| app.session.clone())
        .unwrap_or_else(SessionState::default);

    let name_row = LinearLayout::horizontal()
        .child(TextView::new("Student's Name: "))
        .child(
            EditView::new()
                .content(session.student_name.clone())
                .on_edit(|s, text, _| {
                    s.with_user_data(|app: &mut AppState| {
                        app.session.student_name = text.to_string();
                    });
                })
                .with_name(STUDENT_NAME_FIELD)
                .fixed_width(32),
        );

    let summary = TextView::new(format!(
        "Lessons: {}   Extra lessons: {}   Subjects: {}\nTotal Amount: ${}",
        session.lessons.len(),
        session.extras.len(),
        session.subjects.len(),
        fmt_amount(session.running_total()),
    ));

    let menu = SelectView::new()
        .item("1. Lessons", MenuAction::Lessons)
        .item("2. Extra Lessons", MenuAction::ExtraLessons)
        .item("3. Subjects", MenuAction::Subjects)
        .item("4. Generate Invoice", MenuAction::Generate)
        .item("Quit", MenuAction::Quit)
        .on_submit(handle_menu_selection);

    let header = LinearLayout::vertical()
        .child(
            TextView::new("Tutoring Invoice")
                .h_align(HAlign::Center)
                .full_width(),
        )
        .child(DummyView.fixed_height(1));

    let status = status_bar(&[hints::NAVIGATE, hints::ENTER, hints::CTRL_Q]);

    let layout = LinearLayout::vertical()
        .child(header)
        .child(name_row)
        .child(DummyView.fixed_height(1))
        .child(summary)
        .child(DummyView.fixed_height(1))
        .child(menu)
        .child(DummyView.fixed_height(1))
        .child(status);

    let dialog = Dialog::around(layout)
        .title("Invoice Generator")
        .padding_lrtb(2, 2, 1, 1);

    siv.add_layer(dialog);
}

/// Handles the user's menu selection.
fn handle_menu_selection(siv: &mut Cursive, action: &MenuAction) {
    match action {
        MenuAction::Lessons => {
            siv.pop_layer();
            lessons::show_lessons(siv);
        }
        MenuAction::ExtraLessons => {
            siv.pop_layer();
            extras::show_extras(siv);
        }
        MenuAction::Subjects => {
            siv.pop_layer();
            subjects::show_subjects(siv);
        }
        MenuAction::Generate => generate::generate_invoice(siv),
        MenuAction::Quit => siv.quit(),
    }
}
