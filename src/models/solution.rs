//! Route plan (solution) types.

use std::fmt;

use serde::Serialize;

use super::TrackColor;

/// Which slot a plan occupies in the ranked solution list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// The primary, unpenalized approximation.
    Optimal,
    /// A diversified alternative, numbered from 1.
    Alternative(u32),
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanKind::Optimal => f.write_str("Optimal route"),
            PlanKind::Alternative(n) => write!(f, "Alternative route {n}"),
        }
    }
}

/// One edge of a planned tree, annotated with the originating route's
/// static attributes.
///
/// Attributes always reflect the original route data, never weights
/// adjusted during alternative generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedEdge {
    /// One endpoint city name.
    pub from: String,
    /// Other endpoint city name.
    pub to: String,
    /// Train cars required (original route length).
    pub length: u32,
    /// Printed track color.
    pub color: TrackColor,
    /// Whether the route is a tunnel.
    pub tunnel: bool,
    /// Locomotive cards required for a ferry crossing.
    pub ferries: u32,
    /// Points scored for claiming this route (0 when the length is not in
    /// the scoring table).
    pub points: u32,
    /// Index of the originating route in the static route list.
    pub route_index: usize,
}

/// A complete plan: a tree of routes connecting all terminal cities, plus
/// aggregate totals.
///
/// An empty plan (no edges, zero totals) means no connecting tree exists
/// for the requested terminals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Slot of this plan in the ranked output.
    pub kind: PlanKind,
    /// Tree edges, in construction order.
    pub edges: Vec<PlannedEdge>,
    /// Total train cars consumed (sum of edge lengths).
    pub total_cars: u32,
    /// Total points scored by the claimed routes.
    pub total_points: u32,
}

impl RoutePlan {
    /// Creates an empty plan for the given slot.
    pub fn empty(kind: PlanKind) -> Self {
        Self {
            kind,
            edges: Vec::new(),
            total_cars: 0,
            total_points: 0,
        }
    }

    /// Builds a plan from annotated edges, summing the totals.
    pub fn from_edges(kind: PlanKind, edges: Vec<PlannedEdge>) -> Self {
        let total_cars = edges.iter().map(|e| e.length).sum();
        let total_points = edges.iter().map(|e| e.points).sum();
        Self {
            kind,
            edges,
            total_cars,
            total_points,
        }
    }

    /// Returns `true` if the plan contains no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Human-readable label for presentation.
    pub fn label(&self) -> String {
        self.kind.to_string()
    }
}
