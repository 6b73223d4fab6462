use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use cursive::event::Event;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use invoice_core::render::{InvoiceFonts, Logo};
use invoice_ui::state::{AppState, Resources, SessionState};
use invoice_ui::views;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive invoice generator for tutoring lessons.
///
/// Collects lesson blocks, extra lessons, and per-subject lesson counts
/// through a terminal form, then renders a single-page PDF invoice.
#[derive(Debug, Parser)]
struct Cli {
    /// Regular TrueType face to embed; the bold face is looked up as the
    /// sibling "-Bold" file. Defaults to the system DejaVu Sans.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Logo image for the invoice header.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Where to write the generated document.
    #[arg(long, default_value = "invoice.pdf")]
    output: PathBuf,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Writes to stderr so log records don't tear the form UI.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let fonts = InvoiceFonts::discover(cli.font.as_deref()).context("loading invoice fonts")?;
    let logo = match &cli.logo {
        Some(path) => Some(Logo::open(path).context("loading logo image")?),
        None => None,
    };
    debug!(output = %cli.output.display(), logo = cli.logo.is_some(), "assets ready");

    let mut siv = cursive::default();
    siv.set_user_data(AppState {
        resources: Resources {
            fonts,
            logo,
            output: cli.output,
        },
        session: SessionState::default(),
    });
    siv.add_global_callback(Event::CtrlChar('q'), |s| s.quit());

    views::show_main_menu(&mut siv);
    siv.run();

    info!("session ended");
    Ok(())
}
