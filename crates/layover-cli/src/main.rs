use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use layover_cli::output::{print_footer, OutputFormat};
use layover_cli::terminal::ColorPalette;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest flight paths with a bounded number of layovers")]
struct Cli {
    /// Directory containing airports.json and connections.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest route between two airports.
    Route(commands::route::RouteArgs),
    /// Show graph statistics or a single airport's connections.
    Airports(commands::airports::AirportsArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let context = commands::Context {
        data_dir: cli.data_dir,
        format: cli.format,
    };
    match &cli.command {
        Command::Route(args) => commands::route::handle_route_command(&context, args)?,
        Command::Airports(args) => commands::airports::handle_airports_command(&context, args)?,
    }

    if context.format == OutputFormat::Text {
        print_footer(started.elapsed(), &ColorPalette::detect());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
