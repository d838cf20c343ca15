use std::time::{Duration, Instant};

use tracing::info;

use crate::error::{Error, Result};
use crate::graph::{AirportGraph, Connection};
use crate::path::find_path;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
    pub max_hops: usize,
}

impl RouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, max_hops: usize) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            max_hops,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub from: String,
    pub to: String,
    /// Legs from source to destination, led by the synthetic start leg.
    pub legs: Vec<Connection>,
    /// Wall-clock time spent in the path search.
    pub elapsed: Duration,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    /// Sum of leg distances in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().skip(1).map(|leg| leg.distance).sum()
    }
}

/// Compute the cheapest route for `request`.
///
/// A search that finishes without a path is reported as
/// [`Error::RouteNotFound`].
pub fn plan_route(graph: &AirportGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let started = Instant::now();
    let legs = find_path(graph, &request.from, &request.to, request.max_hops)?;
    let elapsed = started.elapsed();

    if legs.is_empty() {
        return Err(Error::RouteNotFound {
            from: request.from.clone(),
            to: request.to.clone(),
            max_hops: request.max_hops,
        });
    }

    let plan = RoutePlan {
        from: request.from.clone(),
        to: request.to.clone(),
        legs,
        elapsed,
    };
    info!(
        from = %plan.from,
        to = %plan.to,
        hops = plan.hop_count(),
        distance_km = plan.total_distance(),
        elapsed_us = elapsed.as_micros() as u64,
        "route planned"
    );
    Ok(plan)
}
