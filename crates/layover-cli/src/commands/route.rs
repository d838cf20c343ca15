//! Route command handler.

use anyhow::{Context as _, Result};
use clap::Args;

use layover_lib::settings::validate_max_hops;
use layover_lib::{plan_route, Error as RouteError, RouteRequest, RouteSummary, Settings};

use layover_cli::output::{route_text, write_json, OutputFormat};
use layover_cli::terminal::ColorPalette;

use super::Context;

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Departure airport IATA code.
    #[arg(long = "from")]
    pub from: String,
    /// Arrival airport IATA code.
    #[arg(long = "to")]
    pub to: String,
    /// Maximum number of connections to take. Defaults to LAYOVER_MAX_HOPS or 4.
    #[arg(long)]
    pub max_hops: Option<usize>,
}

impl RouteArgs {
    fn to_request(&self, settings: &Settings) -> Result<RouteRequest> {
        let max_hops = match self.max_hops {
            Some(value) => validate_max_hops(value).context("--max-hops must be at least 1")?,
            None => settings.max_hops,
        };
        Ok(RouteRequest::new(
            self.from.trim().to_uppercase(),
            self.to.trim().to_uppercase(),
            max_hops,
        ))
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(context: &Context, args: &RouteArgs) -> Result<()> {
    let settings = Settings::from_env().context("failed to read settings")?;
    let request = args.to_request(&settings)?;
    let graph = context.load_graph()?;

    let plan = match plan_route(&graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };
    let summary = RouteSummary::from_plan(&graph, &plan);

    match context.format {
        OutputFormat::Text => print!("{}", route_text(&summary, &ColorPalette::detect())),
        OutputFormat::Json => write_json(&summary)?,
    }
    Ok(())
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport {
            role,
            iata,
            suggestions,
        } => anyhow::anyhow!(format_unknown_airport_message(
            &role.to_string(),
            &iata,
            &suggestions
        )),
        RouteError::RouteNotFound { from, to, max_hops } => anyhow::anyhow!(
            "No route found between {} and {} within {} hops. Try raising --max-hops.",
            from,
            to,
            max_hops
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_airport_message(role: &str, iata: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown {} airport '{}'.", role, iata);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}
