use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Endpoint, Hours, Kilometers, RouteError, RouteGraph, Speed};

#[derive(Debug, Clone, Copy)]
pub struct RouterConfig {
    /// Average speed assumed on every connection when converting
    /// distances into travel times.
    pub average_speed: Speed,
}

impl RouterConfig {
    /// Typical travel speed over paved roads.
    pub const DEFAULT_AVERAGE_SPEED: Speed = Speed::from_kmh(17.0);
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            average_speed: Self::DEFAULT_AVERAGE_SPEED,
        }
    }
}

/// A minimum-travel-time route between two locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalRoute {
    /// Location names along the route, start and finish included.
    pub path: Vec<String>,
    pub total_time: Hours,
    /// Recovered as `total_time × average_speed`, which equals the sum
    /// of the traversed connection distances because every connection
    /// shares the same average speed.
    pub total_distance: Kilometers,
}

/// Outcome of a route query with valid endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Found(OptimalRoute),
    /// The start and finish lie in different connected components.
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement<'g> {
    /// Current best travel time from the start to this location.
    time: Hours,
    location: &'g str,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .cmp(&self.time)
            // breaking ties in a deterministic way
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for HeapElement<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the minimum-travel-time route from `start` to `finish`
/// with the default [`RouterConfig`].
pub fn find_optimal_path(
    graph: &RouteGraph,
    start: &str,
    finish: &str,
) -> Result<RouteOutcome, RouteError> {
    find_optimal_path_with(&RouterConfig::default(), graph, start, finish)
}

/// Computes the minimum-travel-time route from `start` to `finish`.
///
/// Both endpoints must be known to the graph. A pair of known but
/// disconnected endpoints is not an error and yields
/// [`RouteOutcome::Unreachable`].
pub fn find_optimal_path_with(
    config: &RouterConfig,
    graph: &RouteGraph,
    start: &str,
    finish: &str,
) -> Result<RouteOutcome, RouteError> {
    if !graph.has_location(start) {
        return Err(RouteError::InvalidLocation {
            endpoint: Endpoint::Start,
            name: start.to_owned(),
        });
    }
    if !graph.has_location(finish) {
        return Err(RouteError::InvalidLocation {
            endpoint: Endpoint::Finish,
            name: finish.to_owned(),
        });
    }

    debug!("Computing optimal route {start:?} -> {finish:?} with {config:?}");

    // (current) best travel time from the start to this location
    let mut best_times =
        FxHashMap::from_iter(graph.locations().map(|location| (location, Hours::INFINITY)));
    best_times.insert(start, Hours::ZERO);

    // previous location (value) on the current best known path from the start
    // to this location (key)
    let mut previous: FxHashMap<&str, &str> = FxHashMap::default();

    // priority queue over every known location, the start at zero and the
    // rest at infinity until a relaxation improves them
    let mut frontier: BinaryHeap<HeapElement<'_>> = best_times
        .iter()
        .map(|(&location, &time)| HeapElement { time, location })
        .collect();

    while let Some(element) = frontier.pop() {
        if element.location == finish {
            if element.time == Hours::INFINITY {
                // the finish surfaced before any relaxation reached it,
                // so nothing connects it to the start
                break;
            }

            // Unpacking: the optimal route from finish back to start
            let mut path = vec![finish.to_owned()];
            let mut next = finish;
            while let Some(&previous_location) = previous.get(next) {
                next = previous_location;
                path.push(next.to_owned());
            }
            path.reverse();

            let total_time = element.time;
            return Ok(RouteOutcome::Found(OptimalRoute {
                path,
                total_time,
                total_distance: total_time * config.average_speed,
            }));
        }

        // check if we already know a cheaper way to get to this location
        let best_time = *best_times.get(element.location).unwrap_or(&Hours::INFINITY);
        if element.time > best_time {
            continue;
        }

        for connection in graph.outgoing(element.location) {
            let candidate = element.time + connection.distance / config.average_speed;

            let neighbor_best = *best_times
                .get(connection.destination.as_str())
                .unwrap_or(&Hours::INFINITY);
            // check if we can follow the current connection to reach the
            // neighbor in a cheaper way
            if candidate < neighbor_best {
                let neighbor = HeapElement {
                    time: candidate,
                    location: connection.destination.as_str(),
                };

                // Relax: we have now found a better way that we are going to explore
                best_times.insert(neighbor.location, neighbor.time);
                previous.insert(neighbor.location, element.location);
                frontier.push(neighbor);
            }
        }
    }

    Ok(RouteOutcome::Unreachable)
}
