//! Single-line progress indicator for enrichment runs.

use std::io::{self, Write};

const BAR_WIDTH: usize = 24;

/// `[#########---------------]  37%`
pub fn render_bar(percent: u8) -> String {
    let pct = percent.min(100) as usize;
    let filled = pct * BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        pct
    )
}

/// Redraw the progress line in place.
pub fn print_progress(label: &str, percent: u8) {
    print!("\r{label} {}", render_bar(percent));
    io::stdout().flush().ok();
}

/// Terminate the progress line.
pub fn finish_progress() {
    println!();
}
