use serde::Serialize;

use crate::graph::{Airport, AirportGraph};
use crate::routing::RoutePlan;

/// Leg of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub iata: String,
    /// Distance flown to reach this airport; zero for the departure airport.
    pub distance: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub from: String,
    pub to: String,
    pub hops: usize,
    pub total_distance: f64,
    pub elapsed_ms: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved IATA codes.
    pub fn from_plan(graph: &AirportGraph, plan: &RoutePlan) -> Self {
        let steps = plan
            .legs
            .iter()
            .enumerate()
            .map(|(index, leg)| RouteStep {
                index,
                iata: graph.iata(leg.airport).to_string(),
                distance: leg.distance,
            })
            .collect();

        Self {
            from: plan.from.clone(),
            to: plan.to.clone(),
            hops: plan.hop_count(),
            total_distance: plan.total_distance(),
            elapsed_ms: plan.elapsed.as_secs_f64() * 1000.0,
            steps,
        }
    }
}

/// Direct connection as presented to users.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectionSummary {
    pub iata: String,
    pub distance: f64,
}

/// Airport with its direct connections, resolved to IATA codes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AirportSummary {
    pub iata: String,
    pub latitude: f64,
    pub longitude: f64,
    pub connections: Vec<ConnectionSummary>,
}

impl AirportSummary {
    pub fn from_airport(graph: &AirportGraph, airport: &Airport) -> Self {
        Self {
            iata: airport.iata.clone(),
            latitude: airport.latitude(),
            longitude: airport.longitude(),
            connections: airport
                .connections()
                .iter()
                .map(|connection| ConnectionSummary {
                    iata: graph.iata(connection.airport).to_string(),
                    distance: connection.distance,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::dataset::{RawAirport, RawConnection};
    use crate::distance::Haversine;
    use crate::graph::build_graph;
    use crate::routing::{plan_route, RouteRequest};

    fn baltic_graph() -> AirportGraph {
        build_graph(
            &Haversine,
            &[
                RawAirport {
                    iata: "TLL".into(),
                    latitude: 59.41329956049999,
                    longitude: 24.832799911499997,
                },
                RawAirport {
                    iata: "RIX".into(),
                    latitude: 56.92359924316406,
                    longitude: 23.971099853515625,
                },
            ],
            &[RawConnection::new("TLL", "RIX")],
        )
    }

    fn summary() -> RouteSummary {
        let graph = baltic_graph();
        let mut plan = plan_route(&graph, &RouteRequest::new("TLL", "RIX", 2)).unwrap();
        plan.elapsed = Duration::from_micros(1500);
        RouteSummary::from_plan(&graph, &plan)
    }

    #[test]
    fn summary_lists_every_leg() {
        let summary = summary();
        assert_eq!(summary.hops, 1);
        assert_eq!(summary.steps.len(), 2);
        assert_eq!(summary.steps[0].iata, "TLL");
        assert_eq!(summary.steps[0].distance, 0.0);
        assert_eq!(summary.steps[1].iata, "RIX");
        assert_eq!(summary.total_distance, summary.steps[1].distance);
        assert!((summary.elapsed_ms - 1.5).abs() < 1e-9);
    }

    #[test]
    fn json_uses_snake_case_fields() {
        let value = serde_json::to_value(summary()).unwrap();
        assert_eq!(value["from"], "TLL");
        assert_eq!(value["hops"], 1);
        assert!(value["total_distance"].is_number());
        assert!(value["elapsed_ms"].is_number());
        assert_eq!(value["steps"][1]["iata"], "RIX");
    }

    #[test]
    fn airport_summary_resolves_neighbours() {
        let graph = baltic_graph();
        let rix = graph.airport("RIX").unwrap();
        let summary = AirportSummary::from_airport(&graph, rix);

        assert_eq!(summary.iata, "RIX");
        assert_eq!(summary.latitude, 56.92359924316406);
        assert_eq!(summary.connections.len(), 1);
        assert_eq!(summary.connections[0].iata, "TLL");
        assert!((summary.connections[0].distance - 282.0).abs() <= 0.5);
    }
}
