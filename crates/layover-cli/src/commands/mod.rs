// Each module handles one CLI subcommand; main.rs only parses and dispatches.

pub mod airports;
pub mod route;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use layover_lib::{load_graph, resolve_dataset, AirportGraph};

use layover_cli::output::OutputFormat;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub data_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the dataset and build the airport graph.
    pub fn load_graph(&self) -> Result<AirportGraph> {
        let paths = resolve_dataset(self.data_dir.as_deref())
            .context("failed to locate the airport dataset")?;
        load_graph(&paths).with_context(|| {
            format!(
                "failed to load dataset from {}",
                paths.airports.parent().unwrap_or(&paths.airports).display()
            )
        })
    }
}
