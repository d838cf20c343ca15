mod common;

use layover_lib::{find_path, plan_route, AirportGraph, Connection, Error, RouteRequest};

fn codes(graph: &AirportGraph, legs: &[Connection]) -> Vec<String> {
    legs.iter()
        .map(|leg| graph.iata(leg.airport).to_string())
        .collect()
}

#[test]
fn cheapest_four_hop_route_wins() {
    let graph = common::fixture_graph();
    let legs = find_path(&graph, "TLL", "FRA", 4).expect("search runs");

    // Through HEL the trip is shorter than through RIX and VNO, even though
    // both take four hops.
    assert_eq!(codes(&graph, &legs), vec!["TLL", "HEL", "ARN", "CPH", "FRA"]);
    let total: f64 = legs.iter().skip(1).map(|leg| leg.distance).sum();
    assert!((total - 1725.6).abs() < 0.5, "got {total}");
}

#[test]
fn hop_budget_bounds_the_search() {
    let graph = common::fixture_graph();
    assert!(find_path(&graph, "TLL", "FRA", 3).unwrap().is_empty());
    assert!(find_path(&graph, "TLL", "CPH", 2).unwrap().is_empty());

    let legs = find_path(&graph, "TLL", "CPH", 3).unwrap();
    assert_eq!(codes(&graph, &legs), vec!["TLL", "HEL", "ARN", "CPH"]);
}

#[test]
fn reverse_route_mirrors_forward_route() {
    let graph = common::fixture_graph();
    let forward = find_path(&graph, "TLL", "FRA", 4).unwrap();
    let backward = find_path(&graph, "FRA", "TLL", 4).unwrap();

    let mut reversed = codes(&graph, &forward);
    reversed.reverse();
    assert_eq!(codes(&graph, &backward), reversed);
}

#[test]
fn plan_reports_hops_and_distance() {
    let graph = common::fixture_graph();
    let plan = plan_route(&graph, &RouteRequest::new("TLL", "VNO", 4)).expect("route exists");

    assert_eq!(plan.hop_count(), 2);
    assert!((plan.total_distance() - 549.1).abs() < 0.5);
}

#[test]
fn unreachable_airport_is_route_not_found() {
    let graph = common::fixture_graph();
    let err = plan_route(&graph, &RouteRequest::new("TLL", "KEF", 4)).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound { .. }), "got {err:?}");
}

#[test]
fn unknown_codes_carry_suggestions() {
    let graph = common::fixture_graph();
    let err = find_path(&graph, "TLX", "RIX", 4).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("source airport 'TLX' is not recognized"));
    assert!(message.contains("'TLL'"), "{message}");
}
