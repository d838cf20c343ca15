//! Airports command handler.

use anyhow::{anyhow, Result};
use clap::Args;

use layover_lib::AirportSummary;

use layover_cli::output::{airport_text, overview_text, write_json, GraphOverview, OutputFormat};

use super::Context;

/// Arguments for the airports command.
#[derive(Args, Debug, Clone)]
pub struct AirportsArgs {
    /// Show a single airport and its direct connections.
    #[arg(long)]
    pub iata: Option<String>,
}

/// Handle the airports subcommand.
pub fn handle_airports_command(context: &Context, args: &AirportsArgs) -> Result<()> {
    let graph = context.load_graph()?;

    let Some(iata) = args.iata.as_deref() else {
        let overview = GraphOverview {
            airports: graph.len(),
            connections: graph.connection_count(),
        };
        match context.format {
            OutputFormat::Text => print!("{}", overview_text(&overview)),
            OutputFormat::Json => write_json(&overview)?,
        }
        return Ok(());
    };

    let code = iata.trim().to_uppercase();
    let airport = graph.airport(&code).ok_or_else(|| {
        let suggestions = graph.fuzzy_matches(&code, 3);
        if suggestions.is_empty() {
            anyhow!("Unknown airport '{}'.", code)
        } else {
            anyhow!(
                "Unknown airport '{}'. Did you mean one of: {}?",
                code,
                suggestions.join(", ")
            )
        }
    })?;

    let summary = AirportSummary::from_airport(&graph, airport);
    match context.format {
        OutputFormat::Text => print!("{}", airport_text(&summary)),
        OutputFormat::Json => write_json(&summary)?,
    }
    Ok(())
}
