//! tzgrid - Terminal Timezone Grid
//!
//! Shows a few moments side by side as civil time in a fixed list of
//! timezones. Arrow keys adjust the selected moment, Tab picks the column,
//! Enter copies the whole grid to the clipboard, Esc quits.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tzgrid::application::App;
use tzgrid::domain::{TimeGrid, DEFAULT_COLUMNS, HOME_TIMEZONES};
use tzgrid::infrastructure::SystemClipboard;
use tzgrid::presentation::{run_app, TerminalGuard};

#[derive(Parser, Debug)]
#[command(name = "tzgrid")]
#[command(about = "Compare moments across timezones and copy them as aligned text")]
#[command(version)]
struct Cli {
    /// Number of time columns
    #[arg(default_value_t = DEFAULT_COLUMNS, value_parser = parse_columns)]
    columns: usize,
}

fn parse_columns(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("column count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("failed to parse column count: {e}")),
    }
}

/// Entry point for tzgrid.
///
/// Builds the grid before touching the terminal, so a bad argument or an
/// unresolvable timezone is reported on a normal screen.
fn main() -> Result<()> {
    // Off by default; the alternate screen shares the tty with stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tzgrid=off".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let grid = TimeGrid::now(cli.columns).context("Failed to build the time grid")?;
    tracing::info!(columns = cli.columns, zones = ?HOME_TIMEZONES, "starting");

    let mut app = App::new(grid);
    let mut clipboard = SystemClipboard::new();

    let mut guard = TerminalGuard::acquire().context("Failed to initialise the terminal")?;
    run_app(&mut guard.terminal, &mut app, &mut clipboard, event::read)
        .context("Terminal I/O failed")?;

    Ok(())
}
