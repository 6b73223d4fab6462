//! UI screens for the invoice tool.
//!
//! - `main_menu` - student name, summary, and navigation
//! - `lessons` / `extras` / `subjects` - the three list editors
//! - `generate` - validation and document generation
//! - `status_bar` - shared key-hint line

mod extras;
mod generate;
mod lessons;
mod main_menu;
mod status_bar;
mod subjects;

pub use main_menu::show_main_menu;
