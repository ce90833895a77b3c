//! Steiner tree approximation.
//!
//! Implements the Kou-Markowsky-Berman construction: shortest paths from
//! every terminal, a minimum spanning tree of the terminal distance graph,
//! expansion of its edges back to original shortest paths, a second
//! spanning tree over the expanded subgraph, and pruning of non-terminal
//! leaves. The result connects all terminals, is acyclic, and weighs at
//! most twice the optimal Steiner tree.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashSet};

use itertools::Itertools;
use log::trace;
use unordered_pair::UnorderedPair;

use crate::data::GameData;
use crate::graph::{RouteGraph, SimpleGraph};
use crate::models::{PlanKind, PlannedEdge, RoutePlan};

/// Shortest-path distances and predecessors from a single source.
struct ShortestPaths {
    dist: Vec<u64>,
    prev: Vec<Option<usize>>,
}

fn dijkstra(graph: &SimpleGraph, source: usize) -> ShortestPaths {
    let n = graph.num_cities();
    let mut dist = vec![u64::MAX; n];
    let mut prev = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0;
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        for &v in graph.neighbors(u) {
            let Some(edge) = graph.edge(u, v) else {
                continue;
            };
            // Saturating: heavily penalized edges must not wrap into
            // cheap paths, they read as unreachable instead.
            let candidate = d.saturating_add(edge.weight);
            if candidate < dist[v] {
                dist[v] = candidate;
                prev[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    ShortestPaths { dist, prev }
}

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            // Path halving.
            self.parent[v] = self.parent[self.parent[v]];
            v = self.parent[v];
        }
        v
    }

    /// Merges the sets of `a` and `b`; `false` if already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else {
            if self.rank[ra] == self.rank[rb] {
                self.rank[ra] += 1;
            }
            self.parent[rb] = ra;
        }
        true
    }
}

/// Runs the KMB approximation over distinct terminal city ids.
///
/// Returns the tree edge pairs, or `None` when some pair of terminals is
/// mutually unreachable.
fn kmb_tree(graph: &SimpleGraph, terminals: &[usize]) -> Option<Vec<UnorderedPair<usize>>> {
    let paths: Vec<ShortestPaths> = terminals.iter().map(|&t| dijkstra(graph, t)).collect();

    // Complete distance graph among the terminals.
    let mut metric = Vec::with_capacity(terminals.len() * (terminals.len() - 1) / 2);
    for (i, j) in (0..terminals.len()).tuple_combinations() {
        let d = paths[i].dist[terminals[j]];
        if d == u64::MAX {
            trace!(
                "terminals {} and {} are mutually unreachable",
                terminals[i],
                terminals[j]
            );
            return None;
        }
        metric.push((d, i, j));
    }
    metric.sort_unstable();

    // Spanning tree of the distance graph, each accepted edge expanded back
    // to the underlying shortest path.
    let mut uf = UnionFind::new(terminals.len());
    let mut seen = HashSet::new();
    let mut expanded: Vec<UnorderedPair<usize>> = Vec::new();
    for &(_, i, j) in &metric {
        if !uf.union(i, j) {
            continue;
        }
        let mut v = terminals[j];
        while let Some(u) = paths[i].prev[v] {
            let pair = UnorderedPair::from((u, v));
            if seen.insert(pair) {
                expanded.push(pair);
            }
            v = u;
        }
    }

    // Spanning tree of the expanded subgraph, then prune stray branches.
    let mut subgraph: Vec<(u64, usize, usize)> = expanded
        .iter()
        .filter_map(|pair| {
            let (lo, hi) = (pair.0.min(pair.1), pair.0.max(pair.1));
            graph.edge(lo, hi).map(|e| (e.weight, lo, hi))
        })
        .collect();
    subgraph.sort_unstable();

    let mut uf = UnionFind::new(graph.num_cities());
    let mut tree: Vec<UnorderedPair<usize>> = Vec::new();
    let mut degree = vec![0usize; graph.num_cities()];
    for &(_, lo, hi) in &subgraph {
        if uf.union(lo, hi) {
            tree.push(UnorderedPair::from((lo, hi)));
            degree[lo] += 1;
            degree[hi] += 1;
        }
    }

    let terminal_set: HashSet<usize> = terminals.iter().copied().collect();
    loop {
        let before = tree.len();
        tree.retain(|pair| {
            let stray = (degree[pair.0] == 1 && !terminal_set.contains(&pair.0))
                || (degree[pair.1] == 1 && !terminal_set.contains(&pair.1));
            if stray {
                degree[pair.0] -= 1;
                degree[pair.1] -= 1;
            }
            !stray
        });
        if tree.len() == before {
            break;
        }
    }

    Some(tree)
}

/// Resolves terminal names to distinct dense city ids, dropping names the
/// graph does not know. Result is sorted by id.
pub(crate) fn resolve_terminals(data: &GameData, terminals: &[String]) -> Vec<usize> {
    let ids: BTreeSet<usize> = terminals
        .iter()
        .filter_map(|name| data.city_id(name))
        .collect();
    ids.into_iter().collect()
}

/// Approximates a Steiner tree on `search` and annotates the result from
/// `base`, which holds the unpenalized weights and route attributes.
pub(crate) fn steiner_plan(
    data: &GameData,
    base: &SimpleGraph,
    search: &SimpleGraph,
    terminal_ids: &[usize],
    kind: PlanKind,
) -> RoutePlan {
    if terminal_ids.len() < 2 {
        return RoutePlan::empty(kind);
    }
    let Some(tree) = kmb_tree(search, terminal_ids) else {
        return RoutePlan::empty(kind);
    };

    let mut edges = Vec::with_capacity(tree.len());
    for pair in tree {
        let (lo, hi) = (pair.0.min(pair.1), pair.0.max(pair.1));
        let Some(edge) = base.edge(lo, hi) else {
            continue;
        };
        edges.push(PlannedEdge {
            from: data.city_name(lo).to_string(),
            to: data.city_name(hi).to_string(),
            length: edge.length,
            color: edge.color,
            tunnel: edge.tunnel,
            ferries: edge.ferries,
            points: data.points_for_length(edge.length),
            route_index: edge.route_index,
        });
    }
    RoutePlan::from_edges(kind, edges)
}

/// Computes an approximate minimum Steiner tree connecting the terminal
/// cities.
///
/// Collapses the multigraph, filters out terminals the map does not know,
/// and runs a 2-approximation. Fewer than two valid terminals, or any pair
/// of terminals with no connecting path, yields an empty plan rather than
/// an error.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use railplan::data::GameData;
/// use railplan::graph::build_graph;
/// use railplan::models::{City, Route};
/// use railplan::solver::solve_steiner_tree;
///
/// let data = GameData::new(
///     vec![
///         City::new("A", 0.0, 0.0),
///         City::new("B", 1.0, 0.0),
///         City::new("C", 2.0, 0.0),
///     ],
///     vec![
///         Route::new("A", "B", 1),
///         Route::new("B", "C", 1),
///         Route::new("A", "C", 5),
///     ],
///     vec![],
///     BTreeMap::from([(1, 1)]),
/// ).unwrap();
///
/// let graph = build_graph(&data, &[]);
/// let plan = solve_steiner_tree(&data, &graph, &["A".into(), "C".into()]);
/// assert_eq!(plan.total_cars, 2); // via B, not the direct length-5 route
/// assert_eq!(plan.total_points, 2);
/// ```
pub fn solve_steiner_tree(data: &GameData, graph: &RouteGraph, terminals: &[String]) -> RoutePlan {
    let simple = SimpleGraph::from_multigraph(graph);
    let terminal_ids = resolve_terminals(data, terminals);
    steiner_plan(data, &simple, &simple, &terminal_ids, PlanKind::Optimal)
}
