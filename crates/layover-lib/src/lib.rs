//! Layover library entry points.
//!
//! This crate loads raw airport and connection records, builds the undirected
//! airport graph weighted by great-circle distance, and runs the hop-bounded
//! cheapest path search over it. Higher-level consumers (CLI, HTTP service)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod distance;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod settings;

pub use dataset::{
    default_data_dir, load_graph, resolve_dataset, AirportSource, ConnectionSource, DatasetPaths,
    JsonAirportFile, JsonConnectionFile, RawAirport, RawConnection,
};
pub use distance::{Coordinates, DistanceMetric, Haversine, EARTH_RADIUS_KM};
pub use error::{Endpoint, Error, Result};
pub use graph::{build_graph, Airport, AirportGraph, AirportId, Connection, GraphBuilder};
pub use output::{AirportSummary, ConnectionSummary, RouteStep, RouteSummary};
pub use path::find_path;
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use settings::Settings;
