use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Convenient result alias for the Layover library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a path search an airport code was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Endpoint::Source => "source",
            Endpoint::Destination => "destination",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required collaborator or value was not supplied.
    #[error("argument '{argument}' is not defined")]
    InvalidArgument { argument: &'static str },

    /// Raised when a path search references an airport missing from the graph.
    #[error("{role} airport '{iata}' is not recognized{}", format_suggestions(.suggestions))]
    UnknownAirport {
        role: Endpoint,
        iata: String,
        suggestions: Vec<String>,
    },

    /// Raised by the routing facade when the search finished without a path.
    #[error("no route found between {from} and {to} within {max_hops} hops")]
    RouteNotFound {
        from: String,
        to: String,
        max_hops: usize,
    },

    /// Dataset files could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    ProjectDirsUnavailable,

    /// Raised when a raw record file is not valid JSON for the expected shape.
    #[error("failed to parse dataset file {path}: {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when a setting supplied through the environment cannot be used.
    #[error("invalid value '{value}' for setting {key}")]
    InvalidSetting { key: &'static str, value: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
