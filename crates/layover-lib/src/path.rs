//! Hop-bounded cheapest path search.
//!
//! The search keeps, for every airport, the Pareto frontier of arrivals over
//! (hop count, cumulative distance). A new arrival that is no worse in both
//! dimensions than an existing one replaces it, and every partial path already
//! grown from the replaced arrival is purged with it. Arrivals that are
//! strictly worse in one dimension but better in the other are kept side by
//! side, so a cheaper route with more legs is never lost while it still fits
//! the hop budget.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Endpoint, Error, Result};
use crate::graph::{AirportGraph, AirportId, Connection};

/// Number of "did you mean" suggestions attached to unknown airport errors.
const SUGGESTION_LIMIT: usize = 3;

type WaypointId = usize;

/// Partial path ending at `connection.airport`.
#[derive(Debug, Clone)]
struct Waypoint {
    connection: Connection,
    parent: Option<WaypointId>,
    distance: f64,
    hops: usize,
    children: Vec<WaypointId>,
    purged: bool,
}

impl Waypoint {
    fn airport(&self) -> AirportId {
        self.connection.airport
    }
}

/// Whether an arrival with `(hops, distance)` makes `other` redundant.
///
/// Exact ties resolve in favour of the newer arrival, so an incumbent never
/// rejects an identical candidate but a candidate always displaces an
/// identical incumbent.
fn covers(hops: usize, distance: f64, other_hops: usize, other_distance: f64) -> bool {
    hops <= other_hops && distance <= other_distance
}

fn rejects(existing: &Waypoint, hops: usize, distance: f64) -> bool {
    covers(existing.hops, existing.distance, hops, distance)
        && !(existing.hops == hops && existing.distance == distance)
}

/// Per-call search state: the waypoint arena, the work queue and the
/// best-arrivals index. Queue and index hold arena indices only.
struct Search<'g> {
    graph: &'g AirportGraph,
    destination: AirportId,
    max_hops: usize,
    waypoints: Vec<Waypoint>,
    queue: Vec<WaypointId>,
    best: HashMap<AirportId, Vec<WaypointId>>,
    reached: Vec<WaypointId>,
    purged: usize,
}

impl<'g> Search<'g> {
    fn new(
        graph: &'g AirportGraph,
        source: AirportId,
        destination: AirportId,
        max_hops: usize,
    ) -> Self {
        let start = Waypoint {
            connection: Connection {
                airport: source,
                distance: 0.0,
            },
            parent: None,
            distance: 0.0,
            hops: 0,
            children: Vec::new(),
            purged: false,
        };

        Self {
            graph,
            destination,
            max_hops,
            waypoints: vec![start],
            queue: vec![0],
            best: HashMap::from([(source, vec![0])]),
            reached: Vec::new(),
            purged: 0,
        }
    }

    fn run(&mut self) {
        // The queue grows while it is drained; the length is re-read every step.
        let mut cursor = 0;
        while cursor < self.queue.len() {
            let current = self.queue[cursor];
            cursor += 1;

            if self.waypoints[current].purged {
                continue;
            }

            if self.waypoints[current].airport() == self.destination {
                self.reached.push(current);
                continue;
            }

            if self.waypoints[current].hops == self.max_hops {
                continue;
            }

            self.expand(current);
        }
    }

    fn expand(&mut self, current: WaypointId) {
        let graph = self.graph;
        let (hops, distance) = {
            let waypoint = &self.waypoints[current];
            (waypoint.hops + 1, waypoint.distance)
        };

        for &connection in graph.get(self.waypoints[current].airport()).connections() {
            let candidate_distance = distance + connection.distance;
            let arrivals = self.best.entry(connection.airport).or_default();

            if arrivals
                .iter()
                .any(|&id| rejects(&self.waypoints[id], hops, candidate_distance))
            {
                continue;
            }

            let displaced: Vec<WaypointId> = arrivals
                .iter()
                .copied()
                .filter(|&id| {
                    let existing = &self.waypoints[id];
                    covers(hops, candidate_distance, existing.hops, existing.distance)
                })
                .collect();
            for id in displaced {
                self.purge(id);
            }

            let child = self.waypoints.len();
            self.waypoints.push(Waypoint {
                connection,
                parent: Some(current),
                distance: candidate_distance,
                hops,
                children: Vec::new(),
                purged: false,
            });
            self.waypoints[current].children.push(child);
            self.best.entry(connection.airport).or_default().push(child);
            self.queue.push(child);
        }
    }

    /// Mark `root` and everything grown from it as purged and withdraw them
    /// from the best-arrivals index. Purged waypoints stay in the arena and
    /// are skipped when the queue cursor reaches them.
    fn purge(&mut self, root: WaypointId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let waypoint = &mut self.waypoints[id];
            if waypoint.purged {
                continue;
            }
            waypoint.purged = true;
            stack.extend(waypoint.children.iter().copied());

            let airport = waypoint.airport();
            if let Some(arrivals) = self.best.get_mut(&airport) {
                arrivals.retain(|&other| other != id);
            }
            self.purged += 1;
        }
    }

    /// Cheapest surviving arrival at the destination. The first one wins ties.
    fn cheapest_arrival(&self) -> Option<WaypointId> {
        self.reached
            .iter()
            .copied()
            .filter(|&id| !self.waypoints[id].purged)
            .min_by(|&a, &b| {
                self.waypoints[a]
                    .distance
                    .total_cmp(&self.waypoints[b].distance)
            })
    }

    fn reconstruct(&self, last: WaypointId) -> Vec<Connection> {
        let mut legs = Vec::new();
        let mut current = Some(last);
        while let Some(id) = current {
            let waypoint = &self.waypoints[id];
            legs.push(waypoint.connection);
            current = waypoint.parent;
        }
        legs.reverse();
        legs
    }
}

fn resolve(graph: &AirportGraph, iata: &str, role: Endpoint) -> Result<AirportId> {
    graph.id_of(iata).ok_or_else(|| Error::UnknownAirport {
        role,
        iata: iata.to_string(),
        suggestions: graph.fuzzy_matches(iata, SUGGESTION_LIMIT),
    })
}

/// Find the cheapest path from `source` to `destination` using at most
/// `max_hops` connections.
///
/// The returned legs run source to destination. The first entry is a
/// synthetic zero-distance connection pointing at the source airport, so a
/// path with `n` hops has `n + 1` entries. An empty vector means no path fits
/// the hop budget; this is not an error.
///
/// # Errors
///
/// Returns [`Error::UnknownAirport`] when either code is not in the graph.
/// The source is checked first.
pub fn find_path(
    graph: &AirportGraph,
    source: &str,
    destination: &str,
    max_hops: usize,
) -> Result<Vec<Connection>> {
    let source_id = resolve(graph, source, Endpoint::Source)?;
    let destination_id = resolve(graph, destination, Endpoint::Destination)?;

    let mut search = Search::new(graph, source_id, destination_id, max_hops);
    search.run();

    let legs = search
        .cheapest_arrival()
        .map(|id| search.reconstruct(id))
        .unwrap_or_default();

    debug!(
        source,
        destination,
        max_hops,
        waypoints = search.waypoints.len(),
        purged = search.purged,
        reached = search.reached.len(),
        hops = legs.len().saturating_sub(1),
        "path search finished"
    );

    Ok(legs)
}
