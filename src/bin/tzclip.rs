//! Places its argument on the system clipboard, using the same clipboard
//! service as the grid's export.

use clap::Parser;
use tzgrid::infrastructure::{ClipboardService, SystemClipboard};

#[derive(Parser, Debug)]
#[command(name = "tzclip")]
#[command(about = "Copy text to the system clipboard")]
#[command(version)]
struct Cli {
    /// Text to place on the clipboard
    text: String,
}

fn main() {
    let cli = Cli::parse();
    let mut clipboard = SystemClipboard::new();
    // A failed copy is reported, not escalated.
    if let Err(e) = clipboard.set_text(&cli.text) {
        println!("{e}");
    }
}
