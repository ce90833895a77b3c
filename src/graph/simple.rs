//! Collapsed simple graph.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use unordered_pair::UnorderedPair;

use crate::graph::{RouteEdge, RouteGraph};
use crate::models::TrackColor;

/// The single surviving edge for a city pair after collapsing parallel
/// routes.
///
/// `weight` is the search weight and is scaled during alternative
/// generation; the remaining fields always carry the original route's
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEdge {
    /// Search weight; starts at the route length, may be penalized.
    pub weight: u64,
    /// Original route length.
    pub length: u32,
    /// Printed track color.
    pub color: TrackColor,
    /// Whether the route is a tunnel.
    pub tunnel: bool,
    /// Locomotive cards required for a ferry crossing.
    pub ferries: u32,
    /// Index of the originating route in the static route list.
    pub route_index: usize,
}

impl SimpleEdge {
    fn from_route_edge(edge: &RouteEdge) -> Self {
        Self {
            weight: u64::from(edge.weight),
            length: edge.weight,
            color: edge.color,
            tunnel: edge.tunnel,
            ferries: edge.ferries,
            route_index: edge.route_index,
        }
    }
}

/// A simple graph derived from a [`RouteGraph`] by keeping, per city pair,
/// only the minimum-weight parallel route.
///
/// The winning route's attributes are copied verbatim. When parallel routes
/// tie on weight, the one processed last wins; only the kept weight is part
/// of the contract. Cloned and re-weighted during alternative generation.
#[derive(Debug, Clone)]
pub struct SimpleGraph {
    num_cities: usize,
    edges: HashMap<UnorderedPair<usize>, SimpleEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl SimpleGraph {
    /// Collapses a multigraph into a simple graph.
    pub fn from_multigraph(graph: &RouteGraph) -> Self {
        let mut edges: HashMap<UnorderedPair<usize>, SimpleEdge> =
            HashMap::with_capacity(graph.edges().len());
        for edge in graph.edges() {
            let key = UnorderedPair::from((edge.a, edge.b));
            match edges.entry(key) {
                Entry::Occupied(mut kept) => {
                    if u64::from(edge.weight) <= kept.get().weight {
                        kept.insert(SimpleEdge::from_route_edge(edge));
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(SimpleEdge::from_route_edge(edge));
                }
            }
        }

        let mut adjacency = vec![Vec::new(); graph.num_cities()];
        for pair in edges.keys() {
            adjacency[pair.0].push(pair.1);
            adjacency[pair.1].push(pair.0);
        }
        // Deterministic traversal order regardless of hash-map iteration.
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }

        Self {
            num_cities: graph.num_cities(),
            edges,
            adjacency,
        }
    }

    /// Number of cities (all map cities are nodes, connected or not).
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Number of collapsed edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The collapsed edge between two cities, if any.
    pub fn edge(&self, a: usize, b: usize) -> Option<&SimpleEdge> {
        self.edges.get(&UnorderedPair::from((a, b)))
    }

    /// Cities adjacent to `city`, in ascending id order.
    pub fn neighbors(&self, city: usize) -> &[usize] {
        &self.adjacency[city]
    }

    /// Iterates over all collapsed edges.
    pub fn edges(&self) -> impl Iterator<Item = (UnorderedPair<usize>, &SimpleEdge)> {
        self.edges.iter().map(|(pair, edge)| (*pair, edge))
    }

    /// Multiplies the search weight of the edge between `a` and `b`.
    ///
    /// No-op when no such edge exists. Repeated penalties saturate at
    /// `u64::MAX`; a saturated edge reads as unreachable to the search.
    pub fn penalize(&mut self, a: usize, b: usize, factor: u64) {
        if let Some(edge) = self.edges.get_mut(&UnorderedPair::from((a, b))) {
            edge.weight = edge.weight.saturating_mul(factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::GameData;
    use crate::graph::build_graph;
    use crate::models::{City, Route};

    fn data(routes: Vec<Route>) -> GameData {
        GameData::new(
            vec![
                City::new("A", 0.0, 0.0),
                City::new("B", 1.0, 0.0),
                City::new("C", 2.0, 0.0),
            ],
            routes,
            vec![],
            BTreeMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_collapse_keeps_minimum_weight() {
        let data = data(vec![
            Route::new("A", "B", 5).with_color(TrackColor::Red),
            Route::new("B", "A", 2).with_color(TrackColor::Blue).with_tunnel(),
            Route::new("A", "B", 4),
            Route::new("B", "C", 3),
        ]);
        let simple = SimpleGraph::from_multigraph(&build_graph(&data, &[]));

        assert_eq!(simple.num_edges(), 2);
        let kept = simple.edge(0, 1).unwrap();
        assert_eq!(kept.weight, 2);
        assert_eq!(kept.length, 2);
        // Attributes come from the winning route, copied unchanged.
        assert_eq!(kept.color, TrackColor::Blue);
        assert!(kept.tunnel);
        assert_eq!(kept.route_index, 1);
    }

    #[test]
    fn test_collapse_tie_keeps_minimal_weight() {
        let data = data(vec![
            Route::new("A", "B", 3).with_color(TrackColor::Red),
            Route::new("A", "B", 3).with_color(TrackColor::Blue),
        ]);
        let simple = SimpleGraph::from_multigraph(&build_graph(&data, &[]));
        // Tie-break identity is implementation-defined; the weight is not.
        assert_eq!(simple.edge(0, 1).unwrap().weight, 3);
        assert_eq!(simple.num_edges(), 1);
    }

    #[test]
    fn test_edge_lookup_is_order_insensitive() {
        let data = data(vec![Route::new("A", "B", 2)]);
        let simple = SimpleGraph::from_multigraph(&build_graph(&data, &[]));
        assert!(simple.edge(0, 1).is_some());
        assert!(simple.edge(1, 0).is_some());
        assert!(simple.edge(0, 2).is_none());
    }

    #[test]
    fn test_neighbors_sorted() {
        let data = data(vec![Route::new("B", "A", 2), Route::new("B", "C", 2)]);
        let simple = SimpleGraph::from_multigraph(&build_graph(&data, &[]));
        assert_eq!(simple.neighbors(1), &[0, 2]);
        assert_eq!(simple.neighbors(0), &[1]);
    }

    #[test]
    fn test_penalize_scales_weight_only() {
        let data = data(vec![Route::new("A", "B", 4)]);
        let mut simple = SimpleGraph::from_multigraph(&build_graph(&data, &[]));
        simple.penalize(1, 0, 3);
        simple.penalize(0, 2, 3); // no such edge; no-op
        let edge = simple.edge(0, 1).unwrap();
        assert_eq!(edge.weight, 12);
        assert_eq!(edge.length, 4);
    }

    #[test]
    fn test_penalize_saturates_instead_of_wrapping() {
        let data = data(vec![Route::new("A", "B", 4)]);
        let mut simple = SimpleGraph::from_multigraph(&build_graph(&data, &[]));
        // 3^64 is far past u64::MAX; the weight must pin, not wrap.
        for _ in 0..64 {
            simple.penalize(0, 1, 3);
        }
        let edge = simple.edge(0, 1).unwrap();
        assert_eq!(edge.weight, u64::MAX);
        assert_eq!(edge.length, 4);
    }
}
