use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::{AirportSource, ConnectionSource, RawAirport, RawConnection};
use crate::distance::{Coordinates, DistanceMetric};
use crate::error::{Error, Result};

/// Suggestions scoring below this similarity are not offered to users.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.5;

/// Position of an airport inside an [`AirportGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AirportId(pub usize);

/// Direct connection leading to `airport`, weighted by great-circle distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connection {
    pub airport: AirportId,
    pub distance: f64,
}

/// Airport node with its outgoing connections.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub iata: String,
    pub coordinates: Coordinates,
    connections: Vec<Connection>,
}

impl Airport {
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude
    }

    /// Connections leaving this airport, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    fn is_connected_to(&self, other: AirportId) -> bool {
        self.connections.iter().any(|c| c.airport == other)
    }
}

/// Immutable, undirected airport graph.
///
/// Cloning is cheap: all clones share the same adjacency data.
#[derive(Debug, Clone, Default)]
pub struct AirportGraph {
    inner: Arc<GraphInner>,
}

#[derive(Debug, Default)]
struct GraphInner {
    airports: Vec<Airport>,
    by_iata: HashMap<String, AirportId>,
}

impl AirportGraph {
    /// Lookup an airport by its IATA code.
    pub fn airport(&self, iata: &str) -> Option<&Airport> {
        self.id_of(iata).map(|id| self.get(id))
    }

    /// Identifier of an airport by its IATA code.
    pub fn id_of(&self, iata: &str) -> Option<AirportId> {
        self.inner.by_iata.get(iata).copied()
    }

    pub fn contains(&self, iata: &str) -> bool {
        self.inner.by_iata.contains_key(iata)
    }

    /// Airport for an identifier handed out by this graph.
    ///
    /// # Panics
    ///
    /// Panics when `id` was not produced by this graph.
    pub fn get(&self, id: AirportId) -> &Airport {
        &self.inner.airports[id.0]
    }

    /// IATA code for an identifier handed out by this graph.
    pub fn iata(&self, id: AirportId) -> &str {
        &self.get(id).iata
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.inner.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.airports.is_empty()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.inner
            .airports
            .iter()
            .map(|airport| airport.connections.len())
            .sum::<usize>()
            / 2
    }

    /// Iterate over all airports in construction order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.inner.airports.iter()
    }

    /// Return up to `limit` IATA codes similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim().to_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .inner
            .by_iata
            .keys()
            .map(|iata| (strsim::normalized_levenshtein(&query, iata), iata.as_str()))
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, iata)| iata.to_string())
            .collect()
    }
}

/// Collects the collaborators needed to build an [`AirportGraph`].
///
/// All three collaborators must be supplied; [`GraphBuilder::build`] reports
/// the first missing one as [`Error::InvalidArgument`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    distance_metric: Option<Box<dyn DistanceMetric>>,
    airport_source: Option<Box<dyn AirportSource>>,
    connection_source: Option<Box<dyn ConnectionSource>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance_metric(mut self, metric: impl DistanceMetric + 'static) -> Self {
        self.distance_metric = Some(Box::new(metric));
        self
    }

    pub fn with_airport_source(mut self, source: impl AirportSource + 'static) -> Self {
        self.airport_source = Some(Box::new(source));
        self
    }

    pub fn with_connection_source(mut self, source: impl ConnectionSource + 'static) -> Self {
        self.connection_source = Some(Box::new(source));
        self
    }

    /// Read both record sources and build the graph.
    pub fn build(self) -> Result<AirportGraph> {
        let metric = self.distance_metric.ok_or(Error::InvalidArgument {
            argument: "distance_metric",
        })?;
        let airport_source = self.airport_source.ok_or(Error::InvalidArgument {
            argument: "airport_source",
        })?;
        let connection_source = self.connection_source.ok_or(Error::InvalidArgument {
            argument: "connection_source",
        })?;

        let airports = airport_source.airports()?;
        let connections = connection_source.connections()?;
        Ok(build_graph(metric.as_ref(), &airports, &connections))
    }
}

/// Build an airport graph from raw records.
///
/// The first record for an IATA code wins. Connections naming an unknown
/// airport, connecting an airport to itself, or repeating an already linked
/// pair (in either direction) are skipped.
pub fn build_graph(
    metric: &dyn DistanceMetric,
    raw_airports: &[RawAirport],
    raw_connections: &[RawConnection],
) -> AirportGraph {
    let mut airports: Vec<Airport> = Vec::with_capacity(raw_airports.len());
    let mut by_iata: HashMap<String, AirportId> = HashMap::with_capacity(raw_airports.len());
    let mut duplicate_airports = 0usize;

    for raw in raw_airports {
        if by_iata.contains_key(&raw.iata) {
            duplicate_airports += 1;
            continue;
        }
        let id = AirportId(airports.len());
        airports.push(Airport {
            iata: raw.iata.clone(),
            coordinates: Coordinates::new(raw.latitude, raw.longitude),
            connections: Vec::new(),
        });
        by_iata.insert(raw.iata.clone(), id);
    }

    let mut dangling = 0usize;
    let mut repeated = 0usize;
    let mut linked = 0usize;

    for raw in raw_connections {
        let (Some(&source), Some(&destination)) = (
            by_iata.get(&raw.source_iata),
            by_iata.get(&raw.destination_iata),
        ) else {
            dangling += 1;
            continue;
        };

        if source == destination
            || airports[source.0].is_connected_to(destination)
            || airports[destination.0].is_connected_to(source)
        {
            repeated += 1;
            continue;
        }

        let distance = metric.distance(
            &airports[source.0].coordinates,
            &airports[destination.0].coordinates,
        );
        airports[source.0].connections.push(Connection {
            airport: destination,
            distance,
        });
        airports[destination.0].connections.push(Connection {
            airport: source,
            distance,
        });
        linked += 1;
    }

    debug!(
        duplicate_airports,
        dangling_connections = dangling,
        repeated_connections = repeated,
        "skipped raw records while building airport graph"
    );
    info!(
        airports = airports.len(),
        connections = linked,
        "airport graph built"
    );

    AirportGraph {
        inner: Arc::new(GraphInner { airports, by_iata }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Metric returning a fixed weight so tests can assert on exact values.
    #[derive(Debug)]
    struct FixedDistance(f64);

    impl DistanceMetric for FixedDistance {
        fn distance(&self, _from: &Coordinates, _to: &Coordinates) -> f64 {
            self.0
        }
    }

    fn airport(iata: &str, latitude: f64, longitude: f64) -> RawAirport {
        RawAirport {
            iata: iata.to_string(),
            latitude,
            longitude,
        }
    }

    fn baltic_airports() -> Vec<RawAirport> {
        vec![
            airport("TLL", 59.41329956049999, 24.832799911499997),
            airport("RIX", 56.92359924316406, 23.971099853515625),
        ]
    }

    #[test]
    fn missing_distance_metric_is_rejected() {
        let err = GraphBuilder::new()
            .with_airport_source(baltic_airports())
            .with_connection_source(Vec::<RawConnection>::new())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                argument: "distance_metric"
            }
        ));
    }

    #[test]
    fn missing_airport_source_is_rejected() {
        let err = GraphBuilder::new()
            .with_distance_metric(FixedDistance(1.0))
            .with_connection_source(Vec::<RawConnection>::new())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                argument: "airport_source"
            }
        ));
    }

    #[test]
    fn missing_connection_source_is_rejected() {
        let err = GraphBuilder::new()
            .with_distance_metric(FixedDistance(1.0))
            .with_airport_source(baltic_airports())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                argument: "connection_source"
            }
        ));
    }

    #[test]
    fn builds_airports_and_drops_unknown_endpoints() {
        let connections = vec![
            RawConnection::new("TLL", "RIX"),
            RawConnection::new("TLL", "VNO"),
            RawConnection::new("RIX", "VNO"),
            RawConnection::new("RIX", "TLL"),
        ];
        let graph = GraphBuilder::new()
            .with_distance_metric(FixedDistance(282.0))
            .with_airport_source(baltic_airports())
            .with_connection_source(connections)
            .build()
            .expect("graph builds");

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.connection_count(), 1);

        let tll = graph.airport("TLL").expect("TLL present");
        assert_eq!(tll.latitude(), 59.41329956049999);
        assert_eq!(tll.longitude(), 24.832799911499997);
        assert_eq!(tll.connections().len(), 1);
        assert_eq!(graph.iata(tll.connections()[0].airport), "RIX");
        assert_eq!(tll.connections()[0].distance, 282.0);

        let rix = graph.airport("RIX").expect("RIX present");
        assert_eq!(rix.connections().len(), 1);
        assert_eq!(graph.iata(rix.connections()[0].airport), "TLL");
        assert_eq!(rix.connections()[0].distance, 282.0);
    }

    #[test]
    fn first_airport_record_wins() {
        let mut airports = baltic_airports();
        airports.push(airport("TLL", 0.0, 0.0));

        let graph = build_graph(&FixedDistance(1.0), &airports, &[]);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.airport("TLL").unwrap().latitude(), 59.41329956049999);
    }

    #[test]
    fn self_connections_are_skipped() {
        let graph = build_graph(
            &FixedDistance(1.0),
            &baltic_airports(),
            &[RawConnection::new("TLL", "TLL")],
        );
        assert!(graph.airport("TLL").unwrap().connections().is_empty());
    }

    #[test]
    fn fuzzy_matches_suggest_close_codes() {
        let graph = build_graph(&FixedDistance(1.0), &baltic_airports(), &[]);

        assert_eq!(graph.fuzzy_matches("RIZ", 3), vec!["RIX".to_string()]);
        assert_eq!(graph.fuzzy_matches("tll", 3), vec!["TLL".to_string()]);
        assert!(graph.fuzzy_matches("narnia", 3).is_empty());
        assert!(graph.fuzzy_matches("TLX", 0).is_empty());
    }
}
