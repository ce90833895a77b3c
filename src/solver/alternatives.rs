//! Ranked alternative generation.
//!
//! Repeats the Steiner approximation with edges used by earlier plans made
//! more expensive, steering each round toward unused track while still
//! allowing a shared edge when it is the only way to reach a terminal
//! (penalizing instead of removing keeps sole bridges usable).

use log::debug;

use crate::data::GameData;
use crate::graph::{RouteGraph, SimpleGraph};
use crate::models::{PlanKind, RoutePlan};
use crate::solver::steiner::{resolve_terminals, steiner_plan};

/// Weight multiplier applied per prior plan using an edge.
const PENALTY_FACTOR: u64 = 3;

/// Alternatives generated when a request does not say how many it wants.
pub const DEFAULT_NUM_ALTERNATIVES: usize = 2;

/// Computes the primary route plan plus up to `num_alternatives` diverse
/// alternatives.
///
/// The primary plan is the unpenalized approximation. Each alternative
/// round starts from a fresh copy of the collapsed graph and multiplies an
/// edge's weight by 3 for every previously accepted plan that uses it, so
/// penalties reflect all prior plans at once instead of compounding
/// incrementally. Reported edges always carry original route attributes.
///
/// An empty primary plan is returned alone; a failed round ends generation
/// without filling the remaining slots.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use railplan::data::GameData;
/// use railplan::graph::build_graph;
/// use railplan::models::{City, PlanKind, Route};
/// use railplan::solver::solve_with_alternatives;
///
/// // A square: two disjoint paths from A to C.
/// let data = GameData::new(
///     vec![
///         City::new("A", 0.0, 0.0),
///         City::new("B", 1.0, 0.0),
///         City::new("C", 1.0, 1.0),
///         City::new("D", 0.0, 1.0),
///     ],
///     vec![
///         Route::new("A", "B", 1),
///         Route::new("B", "C", 1),
///         Route::new("A", "D", 2),
///         Route::new("D", "C", 2),
///     ],
///     vec![],
///     BTreeMap::new(),
/// ).unwrap();
///
/// let graph = build_graph(&data, &[]);
/// let plans = solve_with_alternatives(&data, &graph, &["A".into(), "C".into()], 1);
/// assert_eq!(plans.len(), 2);
/// assert_eq!(plans[0].kind, PlanKind::Optimal);
/// assert_eq!(plans[0].total_cars, 2); // A-B-C
/// assert_eq!(plans[1].total_cars, 4); // pushed onto A-D-C
/// ```
pub fn solve_with_alternatives(
    data: &GameData,
    graph: &RouteGraph,
    terminals: &[String],
    num_alternatives: usize,
) -> Vec<RoutePlan> {
    let simple = SimpleGraph::from_multigraph(graph);
    let terminal_ids = resolve_terminals(data, terminals);

    let primary = steiner_plan(data, &simple, &simple, &terminal_ids, PlanKind::Optimal);
    let mut plans = vec![primary];
    if plans[0].is_empty() {
        return plans;
    }

    let rounds = u32::try_from(num_alternatives).unwrap_or(u32::MAX);
    for round in 1..=rounds {
        let mut penalized = simple.clone();
        let mut occurrences = 0usize;
        for plan in &plans {
            for edge in &plan.edges {
                let (Some(a), Some(b)) = (data.city_id(&edge.from), data.city_id(&edge.to))
                else {
                    continue;
                };
                penalized.penalize(a, b, PENALTY_FACTOR);
                occurrences += 1;
            }
        }
        debug!("alternative round {round}: penalized {occurrences} edge occurrences");

        let plan = steiner_plan(
            data,
            &simple,
            &penalized,
            &terminal_ids,
            PlanKind::Alternative(round),
        );
        if plan.is_empty() {
            debug!("alternative round {round} found no tree; stopping");
            break;
        }
        plans.push(plan);
    }

    plans
}
