//! Output formatting for route and airport rendering.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use layover_lib::{AirportSummary, RouteSummary};

use crate::terminal::{format_km, ColorPalette};

/// Output formats understood by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Airport and connection counts of the loaded graph.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GraphOverview {
    pub airports: usize,
    pub connections: usize,
}

/// Write `value` to stdout as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn write_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Text view of a planned route with tagged legs.
pub fn route_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {} to {} ({} hops):",
        summary.from, summary.to, summary.hops
    );

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let (tag_color, tag) = if step.index == 0 {
            (palette.tag_from, "FROM")
        } else if step.index == last {
            (palette.tag_to, " TO ")
        } else {
            (palette.tag_via, "VIA ")
        };

        let _ = write!(
            buffer,
            "{tag_color}{tag}{reset} {bold}{}{reset}",
            step.iata,
            reset = palette.reset,
            bold = palette.white_bold,
        );
        if step.index > 0 {
            let _ = write!(
                buffer,
                " {gray}+{reset}{green}{}{reset}",
                format_km(step.distance),
                gray = palette.gray,
                green = palette.green,
                reset = palette.reset,
            );
        }
        buffer.push('\n');
    }

    let _ = writeln!(
        buffer,
        "\nTotal distance: {}",
        format_km(summary.total_distance)
    );
    buffer
}

/// Text view of one airport and its direct connections.
pub fn airport_text(summary: &AirportSummary) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{} ({:.4}, {:.4}): {} connections",
        summary.iata,
        summary.latitude,
        summary.longitude,
        summary.connections.len()
    );
    for connection in &summary.connections {
        let _ = writeln!(
            buffer,
            "  - {} ({})",
            connection.iata,
            format_km(connection.distance)
        );
    }
    buffer
}

pub fn overview_text(overview: &GraphOverview) -> String {
    format!(
        "Loaded {} airports with {} connections\n",
        overview.airports, overview.connections
    )
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration, palette: &ColorPalette) {
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{}Completed in {}{}", palette.gray, time_str, palette.reset);
}
