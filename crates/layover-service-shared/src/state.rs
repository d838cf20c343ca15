//! Application state shared by axum handlers.

use std::path::Path;
use std::sync::Arc;

use layover_lib::{load_graph, resolve_dataset, AirportGraph, Error as LibError, Settings};

/// Shared application state for all axum handlers.
///
/// Cheap to clone; the graph is built once at startup and never mutated.
///
/// ```ignore
/// use axum::{extract::State, routing::get, Router};
/// use layover_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) -> String {
///     state.graph().len().to_string()
/// }
///
/// let state = AppState::load(None, Settings::from_env()?)?;
/// let app: Router = Router::new().route("/count", get(handler)).with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    graph: AirportGraph,
    settings: Settings,
}

impl AppState {
    /// Resolve the dataset (explicit directory, `LAYOVER_DATA_DIR`, platform
    /// data dir) and build the airport graph.
    pub fn load(data_dir: Option<&Path>, settings: Settings) -> Result<Self, LibError> {
        let paths = resolve_dataset(data_dir)?;
        tracing::info!(
            airports = %paths.airports.display(),
            connections = %paths.connections.display(),
            "loading airport dataset"
        );
        let graph = load_graph(&paths)?;
        Ok(Self::from_components(graph, settings))
    }

    /// Create application state from an already built graph.
    pub fn from_components(graph: AirportGraph, settings: Settings) -> Self {
        Self {
            inner: Arc::new(AppStateInner { graph, settings }),
        }
    }

    pub fn graph(&self) -> &AirportGraph {
        &self.inner.graph
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("airport_count", &self.inner.graph.len())
            .field("connection_count", &self.inner.graph.connection_count())
            .field("settings", &self.inner.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use layover_lib::{build_graph, Haversine, RawAirport};

    use super::*;

    fn single_airport_graph() -> AirportGraph {
        build_graph(
            &Haversine,
            &[RawAirport {
                iata: "KEF".to_string(),
                latitude: 63.985001,
                longitude: -22.6056,
            }],
            &[],
        )
    }

    #[test]
    fn components_are_exposed() {
        let state = AppState::from_components(single_airport_graph(), Settings::default());
        assert_eq!(state.graph().len(), 1);
        assert_eq!(state.settings().max_hops, 4);
    }

    #[test]
    fn clones_share_the_graph() {
        let state = AppState::from_components(single_airport_graph(), Settings::default());
        let clone = state.clone();
        assert!(std::ptr::eq(state.graph(), clone.graph()));
    }

    #[test]
    fn debug_reports_counts() {
        let state = AppState::from_components(single_airport_graph(), Settings::default());
        let debug = format!("{:?}", state);

        assert!(debug.contains("AppState"));
        assert!(debug.contains("airport_count: 1"));
        assert!(debug.contains("connection_count: 0"));
    }

    #[test]
    fn load_fails_for_missing_dataset() {
        let result = AppState::load(
            Some(Path::new("/nonexistent/layover/data")),
            Settings::default(),
        );
        match result.unwrap_err() {
            LibError::DatasetNotFound { path } => {
                assert!(path.to_string_lossy().contains("nonexistent"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
