//! Invoice generation action.
//!
//! Snapshots the session into a draft, validates it, renders the PDF,
//! and writes it to the configured output path. Any failure surfaces in
//! a dialog and produces no output file.

use std::fs;
use std::path::PathBuf;

use cursive::Cursive;
use cursive::views::Dialog;
use tracing::{info, warn};

use invoice_core::render::render_invoice;

use crate::state::AppState;

/// Run the generate action, reporting the outcome in a dialog layered
/// over the current screen.
pub fn generate_invoice(siv: &mut Cursive) {
    let outcome = siv
        .with_user_data(|app: &mut AppState| run_generate(app))
        .unwrap_or_else(|| Err(vec!["session state is missing".to_string()]));

    let dialog = match outcome {
        Ok(path) => Dialog::text(format!("Invoice written to {}", path.display()))
            .title("Invoice Generated"),
        Err(problems) => Dialog::text(format!(
            "Cannot generate the invoice:\n\n{}",
            problems.join("\n")
        ))
        .title("Invoice Not Generated"),
    };

    siv.add_layer(dialog.button("OK", |s| {
        s.pop_layer();
    }));
}

fn run_generate(app: &mut AppState) -> Result<PathBuf, Vec<String>> {
    let draft = app.session.to_draft()?;

    let problems = draft.problems();
    if !problems.is_empty() {
        warn!(count = problems.len(), "draft failed validation");
        return Err(problems.iter().map(|p| p.to_string()).collect());
    }

    let bytes = render_invoice(&draft, &app.resources.fonts, app.resources.logo.as_ref())
        .map_err(|e| vec![e.to_string()])?;

    fs::write(&app.resources.output, &bytes).map_err(|e| {
        vec![format!(
            "cannot write '{}': {e}",
            app.resources.output.display()
        )]
    })?;

    info!(
        path = %app.resources.output.display(),
        size = bytes.len(),
        total = %draft.total_amount(),
        "invoice written"
    );
    Ok(app.resources.output.clone())
}
