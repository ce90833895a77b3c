//! Request and response shapes for the embedding service.
//!
//! An HTTP layer deserializes a [`SolveRequest`] straight from a request
//! body, calls [`solve`], and serializes the [`SolveResponse`];
//! [`game_data_view`] produces the indexed data listing the frontend uses
//! to render the map and the ticket picker.

use serde::{Deserialize, Serialize};

use crate::data::GameData;
use crate::graph::{build_graph, BlockedRoute};
use crate::models::{City, Route, RoutePlan, Ticket};
use crate::solver::{solve_with_alternatives, terminal_cities, DEFAULT_NUM_ALTERNATIVES};

/// A solve request: selected tickets, blocked routes, and how many
/// alternatives to generate beyond the primary plan.
///
/// All fields are optional in the wire format; `num_alternatives` defaults
/// to 2.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolveRequest {
    /// Indices into the static ticket list.
    #[serde(default)]
    pub tickets: Vec<usize>,
    /// Routes unavailable for this request.
    #[serde(default)]
    pub blocked: Vec<BlockedRoute>,
    /// Alternatives requested beyond the primary plan.
    #[serde(default = "default_num_alternatives")]
    pub num_alternatives: usize,
}

fn default_num_alternatives() -> usize {
    DEFAULT_NUM_ALTERNATIVES
}

impl Default for SolveRequest {
    fn default() -> Self {
        Self {
            tickets: Vec::new(),
            blocked: Vec::new(),
            num_alternatives: DEFAULT_NUM_ALTERNATIVES,
        }
    }
}

/// The solve result: terminal cities, the selected tickets' details, and
/// the ranked plans (primary first).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResponse {
    /// Distinct cities the selected tickets require connecting.
    pub terminals: Vec<String>,
    /// Details of the in-range selected tickets, in request order.
    pub selected_tickets: Vec<Ticket>,
    /// Ranked plans, primary first.
    pub solutions: Vec<RoutePlan>,
}

/// Runs the full solve pipeline for one request.
///
/// Degenerate selections (no tickets, out-of-range indices, blocked-off
/// terminals) produce an empty primary plan, never an error.
///
/// # Examples
///
/// ```
/// use railplan::api::{solve, SolveRequest};
/// use railplan::data::GameData;
///
/// let data = GameData::from_json(r#"{
///     "cities": [
///         {"name": "A", "x": 0.0, "y": 0.0},
///         {"name": "B", "x": 1.0, "y": 0.0},
///         {"name": "C", "x": 2.0, "y": 0.0}
///     ],
///     "routes": [
///         {"from": "A", "to": "B", "length": 1},
///         {"from": "B", "to": "C", "length": 2},
///         {"from": "A", "to": "C", "length": 5}
///     ],
///     "tickets": [{"from": "A", "to": "C", "points": 6}],
///     "scoring": {"1": 1, "2": 2, "5": 10}
/// }"#).unwrap();
///
/// let request: SolveRequest = serde_json::from_str(r#"{"tickets": [0]}"#).unwrap();
/// let response = solve(&data, &request);
///
/// assert_eq!(response.terminals, vec!["A", "C"]);
/// assert_eq!(response.solutions[0].total_cars, 3); // A-B-C beats the direct route
/// ```
pub fn solve(data: &GameData, request: &SolveRequest) -> SolveResponse {
    let graph = build_graph(data, &request.blocked);
    let terminals = terminal_cities(data, &request.tickets);
    let solutions =
        solve_with_alternatives(data, &graph, &terminals, request.num_alternatives);
    let selected_tickets = request
        .tickets
        .iter()
        .filter_map(|&index| data.tickets().get(index).cloned())
        .collect();

    SolveResponse {
        terminals,
        selected_tickets,
        solutions,
    }
}

/// A ticket paired with its index in the static ticket list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedTicket {
    /// Position in the static ticket list.
    pub index: usize,
    /// The ticket itself.
    #[serde(flatten)]
    pub ticket: Ticket,
}

/// A route paired with its index in the static route list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedRoute {
    /// Position in the static route list.
    pub index: usize,
    /// The route itself.
    #[serde(flatten)]
    pub route: Route,
}

/// The full game data listing served to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameDataView {
    /// All cities with display coordinates.
    pub cities: Vec<City>,
    /// All tickets with their selection indices.
    pub tickets: Vec<IndexedTicket>,
    /// All routes with their blocking indices.
    pub routes: Vec<IndexedRoute>,
    /// Route length to points.
    pub scoring: std::collections::BTreeMap<u32, u32>,
}

/// Builds the data listing the frontend renders the map from.
pub fn game_data_view(data: &GameData) -> GameDataView {
    GameDataView {
        cities: data.cities().to_vec(),
        tickets: data
            .tickets()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, ticket)| IndexedTicket { index, ticket })
            .collect(),
        routes: data
            .routes()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, route)| IndexedRoute { index, route })
            .collect(),
        scoring: data.scoring().clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::PlanKind;

    fn fixture() -> GameData {
        GameData::new(
            vec![
                City::new("A", 0.0, 0.0),
                City::new("B", 1.0, 0.0),
                City::new("C", 1.0, 1.0),
                City::new("D", 0.0, 1.0),
            ],
            vec![
                Route::new("A", "B", 1),
                Route::new("B", "C", 1),
                Route::new("A", "D", 2),
                Route::new("D", "C", 2),
            ],
            vec![
                Ticket::new("A", "C", 4),
                Ticket::new("B", "D", 3),
            ],
            BTreeMap::from([(1, 1), (2, 2)]),
        )
        .unwrap()
    }

    #[test]
    fn test_request_defaults() {
        let request: SolveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, SolveRequest::default());
        assert_eq!(request.num_alternatives, 2);
    }

    #[test]
    fn test_request_full_body() {
        let request: SolveRequest = serde_json::from_str(
            r#"{
                "tickets": [0, 1],
                "blocked": [{"from": "A", "to": "B", "route_index": 0}],
                "num_alternatives": 1
            }"#,
        )
        .unwrap();
        assert_eq!(request.tickets, vec![0, 1]);
        assert_eq!(request.blocked, vec![BlockedRoute::new("A", "B", 0)]);
        assert_eq!(request.num_alternatives, 1);
    }

    #[test]
    fn test_solve_end_to_end() {
        let data = fixture();
        let request = SolveRequest {
            tickets: vec![0],
            ..Default::default()
        };
        let response = solve(&data, &request);

        assert_eq!(response.terminals, vec!["A", "C"]);
        assert_eq!(response.selected_tickets, vec![Ticket::new("A", "C", 4)]);
        assert_eq!(response.solutions.len(), 3);
        assert_eq!(response.solutions[0].kind, PlanKind::Optimal);
        assert_eq!(response.solutions[0].total_cars, 2);
    }

    #[test]
    fn test_solve_skips_out_of_range_tickets() {
        let data = fixture();
        let request = SolveRequest {
            tickets: vec![0, 99],
            ..Default::default()
        };
        let response = solve(&data, &request);
        assert_eq!(response.selected_tickets.len(), 1);
        assert_eq!(response.terminals, vec!["A", "C"]);
    }

    #[test]
    fn test_solve_with_blocked_routes() {
        let data = fixture();
        let request = SolveRequest {
            tickets: vec![0],
            blocked: vec![BlockedRoute::new("B", "C", 1)],
            ..Default::default()
        };
        let response = solve(&data, &request);
        // The cheap corridor is gone; primary reroutes through D.
        assert_eq!(response.solutions[0].total_cars, 4);
    }

    #[test]
    fn test_solve_no_tickets_yields_empty_primary() {
        let data = fixture();
        let response = solve(&data, &SolveRequest::default());
        assert!(response.terminals.is_empty());
        assert_eq!(response.solutions.len(), 1);
        assert!(response.solutions[0].is_empty());
    }

    #[test]
    fn test_game_data_view_indices() {
        let view = game_data_view(&fixture());
        assert_eq!(view.cities.len(), 4);
        assert_eq!(view.tickets[1].index, 1);
        assert_eq!(view.routes[3].index, 3);
        assert_eq!(view.routes[3].route.from, "D");
        assert_eq!(view.scoring.get(&2), Some(&2));
    }

    #[test]
    fn test_response_serializes() {
        let data = fixture();
        let request = SolveRequest {
            tickets: vec![0],
            ..Default::default()
        };
        let json = serde_json::to_value(solve(&data, &request)).unwrap();
        assert_eq!(json["terminals"][0], "A");
        assert_eq!(json["solutions"][0]["kind"], "optimal");
        assert!(json["solutions"][0]["edges"][0]["route_index"].is_u64());
    }
}
