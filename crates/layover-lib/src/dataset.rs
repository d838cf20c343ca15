use std::env;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::Haversine;
use crate::error::{Error, Result};
use crate::graph::{AirportGraph, GraphBuilder};

/// Default filename for raw airport records.
pub const AIRPORTS_FILENAME: &str = "airports.json";

/// Default filename for raw connection records.
pub const CONNECTIONS_FILENAME: &str = "connections.json";

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "LAYOVER_DATA_DIR";

/// Airport record as produced by the data retriever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAirport {
    pub iata: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Connection record as produced by the data retriever. Direction carries no
/// meaning; every connection is treated as bidirectional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConnection {
    pub source_iata: String,
    pub destination_iata: String,
}

impl RawConnection {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source_iata: source.into(),
            destination_iata: destination.into(),
        }
    }
}

/// Provider of raw airport records.
pub trait AirportSource: Debug {
    fn airports(&self) -> Result<Vec<RawAirport>>;
}

/// Provider of raw connection records.
pub trait ConnectionSource: Debug {
    fn connections(&self) -> Result<Vec<RawConnection>>;
}

impl AirportSource for Vec<RawAirport> {
    fn airports(&self) -> Result<Vec<RawAirport>> {
        Ok(self.clone())
    }
}

impl ConnectionSource for Vec<RawConnection> {
    fn connections(&self) -> Result<Vec<RawConnection>> {
        Ok(self.clone())
    }
}

/// Airport records stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonAirportFile {
    path: PathBuf,
}

impl JsonAirportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AirportSource for JsonAirportFile {
    fn airports(&self) -> Result<Vec<RawAirport>> {
        read_json_records(&self.path)
    }
}

/// Connection records stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonConnectionFile {
    path: PathBuf,
}

impl JsonConnectionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConnectionSource for JsonConnectionFile {
    fn connections(&self) -> Result<Vec<RawConnection>> {
        read_json_records(&self.path)
    }
}

fn read_json_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let records: Vec<T> =
        serde_json::from_str(&contents).map_err(|source| Error::DatasetParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = records.len(), "read dataset file");
    Ok(records)
}

/// Paths to the raw record files that make up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub connections: PathBuf,
}

impl DatasetPaths {
    /// Standard file layout inside a dataset directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            connections: dir.join(CONNECTIONS_FILENAME),
        }
    }

    fn ensure_present(self) -> Result<Self> {
        for path in [&self.airports, &self.connections] {
            if !path.exists() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(self)
    }
}

/// Resolve the default dataset directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "layover", "layover").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the dataset files.
///
/// Resolution order:
/// 1. Explicit `target` directory when provided.
/// 2. `LAYOVER_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
///
/// Both files must exist in the resolved directory.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    if let Some(explicit) = target {
        return DatasetPaths::in_dir(explicit).ensure_present();
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return DatasetPaths::in_dir(Path::new(&env_path)).ensure_present();
    }

    let default = default_data_dir()?;
    DatasetPaths::in_dir(&default).ensure_present()
}

/// Build the airport graph from the JSON files of a dataset.
pub fn load_graph(paths: &DatasetPaths) -> Result<AirportGraph> {
    GraphBuilder::new()
        .with_distance_metric(Haversine)
        .with_airport_source(JsonAirportFile::new(&paths.airports))
        .with_connection_source(JsonConnectionFile::new(&paths.connections))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_records_use_camel_case_keys() {
        let airport: RawAirport =
            serde_json::from_str(r#"{"iata":"TLL","latitude":59.4,"longitude":24.8}"#)
                .expect("valid airport");
        assert_eq!(airport.iata, "TLL");

        let connection: RawConnection =
            serde_json::from_str(r#"{"sourceIata":"TLL","destinationIata":"RIX"}"#)
                .expect("valid connection");
        assert_eq!(connection, RawConnection::new("TLL", "RIX"));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = JsonAirportFile::new(dir.path().join(AIRPORTS_FILENAME));
        match source.airports().unwrap_err() {
            Error::DatasetNotFound { path } => assert!(path.ends_with(AIRPORTS_FILENAME)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONNECTIONS_FILENAME);
        fs::write(&path, r#"[{"sourceIata":"TLL"}]"#).expect("write file");

        let err = JsonConnectionFile::new(&path).connections().unwrap_err();
        assert!(matches!(err, Error::DatasetParse { .. }), "got {err:?}");
    }

    #[test]
    fn explicit_directory_requires_both_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join(AIRPORTS_FILENAME), "[]").expect("write airports");

        let err = resolve_dataset(Some(dir.path())).unwrap_err();
        match err {
            Error::DatasetNotFound { path } => assert!(path.ends_with(CONNECTIONS_FILENAME)),
            other => panic!("unexpected error: {other:?}"),
        }

        fs::write(dir.path().join(CONNECTIONS_FILENAME), "[]").expect("write connections");
        let paths = resolve_dataset(Some(dir.path())).expect("dataset resolves");
        assert_eq!(paths, DatasetPaths::in_dir(dir.path()));
    }
}
