//! CLI output formatting for the compose pipeline.
//!
//! Each line reports one stage of the pipeline, ending with the confirmation
//! line naming the output path:
//!
//! ```text
//! Source: photo.jpg (2000x3000)
//! Background: 1280x1920, cropped 1080x1920 at (100, 0), blur 30
//! Foreground: 1080x1620 at y=300
//! Saved: card.png
//! ```
//!
//! The `format_*` function returns `Vec<String>` for testability and the
//! `print_*` wrapper writes to stdout. Format functions are pure — no I/O,
//! no side effects.

use crate::imaging::CompositeReport;
use std::path::Path;

/// Format the report for a completed compose. Pure — no I/O.
pub fn format_compose_report(source: &Path, report: &CompositeReport) -> Vec<String> {
    vec![
        format!(
            "Source: {} ({}x{})",
            source.display(),
            report.source_width,
            report.source_height
        ),
        format!(
            "Background: {}x{}, cropped {}x{} at ({}, {}), blur {}",
            report.background_width,
            report.background_height,
            report.canvas_width,
            report.canvas_height,
            report.crop_left,
            report.crop_top,
            report.blur_radius
        ),
        format!(
            "Foreground: {}x{} at y={}",
            report.foreground_width, report.foreground_height, report.foreground_top
        ),
        format!("Saved: {}", report.output.display()),
    ]
}

/// Print the compose report to stdout.
pub fn print_compose_report(source: &Path, report: &CompositeReport) {
    for line in format_compose_report(source, report) {
        println!("{}", line);
    }
}
