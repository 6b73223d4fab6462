//! Key-hint line shown at the bottom of every screen.

use cursive::views::TextView;

/// Builds the hint line from (key, action) pairs.
pub fn status_bar(hints: &[(&str, &str)]) -> TextView {
    let text = hints
        .iter()
        .map(|(key, action)| format!("{key}: {action}"))
        .collect::<Vec<_>>()
        .join("  ");
    TextView::new(text)
}

/// Common key hints.
pub mod hints {
    pub const TAB: (&str, &str) = ("Tab", "Next field");
    pub const ENTER: (&str, &str) = ("Enter", "Select");
    pub const NAVIGATE: (&str, &str) = ("↑↓", "Navigate");
    pub const ESC: (&str, &str) = ("Esc", "Back");
    pub const CTRL_Q: (&str, &str) = ("C-q", "Quit");
}
