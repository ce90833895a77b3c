//! Per-request route multigraph.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use unordered_pair::UnorderedPair;

use crate::data::GameData;
use crate::models::TrackColor;

/// A blocked-route descriptor supplied with a solve request.
///
/// Identifies one specific route: the endpoint pair (order-insensitive)
/// plus the route index, so one of several parallel routes can be blocked
/// without affecting the others. Descriptors naming unknown cities or
/// indices are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockedRoute {
    /// One endpoint city name.
    pub from: String,
    /// Other endpoint city name.
    pub to: String,
    /// Index of the route in the static route list.
    pub route_index: usize,
}

impl BlockedRoute {
    /// Creates a blocked-route descriptor.
    pub fn new(from: impl Into<String>, to: impl Into<String>, route_index: usize) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            route_index,
        }
    }
}

/// One multigraph edge: a route that survived blocking, with endpoints
/// resolved to dense city ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEdge {
    /// One endpoint city id.
    pub a: usize,
    /// Other endpoint city id.
    pub b: usize,
    /// Edge weight (route length).
    pub weight: u32,
    /// Printed track color.
    pub color: TrackColor,
    /// Whether the route is a tunnel.
    pub tunnel: bool,
    /// Locomotive cards required for a ferry crossing.
    pub ferries: u32,
    /// Index of the route in the static route list.
    pub route_index: usize,
}

/// The per-request multigraph: every city as a node, every unblocked route
/// as a distinct edge.
///
/// Parallel routes between the same cities remain distinct edges, keyed by
/// route index. Built fresh per solve request and never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGraph {
    num_cities: usize,
    edges: Vec<RouteEdge>,
}

impl RouteGraph {
    /// Number of cities (all map cities are nodes, connected or not).
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// All surviving edges, in route-index order.
    pub fn edges(&self) -> &[RouteEdge] {
        &self.edges
    }
}

/// Builds the route multigraph from the static data, excluding blocked
/// routes.
///
/// A route is excluded when some descriptor matches its endpoint pair
/// (order-insensitive) and its route index. Descriptors that match nothing
/// are silently ignored.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use railplan::data::GameData;
/// use railplan::graph::{build_graph, BlockedRoute};
/// use railplan::models::{City, Route};
///
/// let data = GameData::new(
///     vec![City::new("A", 0.0, 0.0), City::new("B", 1.0, 0.0)],
///     vec![Route::new("A", "B", 2), Route::new("A", "B", 3)],
///     vec![],
///     BTreeMap::new(),
/// ).unwrap();
///
/// let graph = build_graph(&data, &[BlockedRoute::new("B", "A", 0)]);
/// assert_eq!(graph.edges().len(), 1);
/// assert_eq!(graph.edges()[0].route_index, 1);
/// ```
pub fn build_graph(data: &GameData, blocked: &[BlockedRoute]) -> RouteGraph {
    let mut blocked_set: HashSet<(UnorderedPair<usize>, usize)> =
        HashSet::with_capacity(blocked.len());
    for b in blocked {
        if let (Some(x), Some(y)) = (data.city_id(&b.from), data.city_id(&b.to)) {
            blocked_set.insert((UnorderedPair::from((x, y)), b.route_index));
        }
    }

    let mut edges = Vec::with_capacity(data.routes().len());
    for (route_index, route) in data.routes().iter().enumerate() {
        let (Some(a), Some(b)) = (data.city_id(&route.from), data.city_id(&route.to)) else {
            continue;
        };
        if blocked_set.contains(&(UnorderedPair::from((a, b)), route_index)) {
            continue;
        }
        edges.push(RouteEdge {
            a,
            b,
            weight: route.length,
            color: route.color,
            tunnel: route.tunnel,
            ferries: route.ferries,
            route_index,
        });
    }

    RouteGraph {
        num_cities: data.num_cities(),
        edges,
    }
}
