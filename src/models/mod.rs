//! Domain model types for the route planner.
//!
//! Provides the static map vocabulary (cities, routes, tickets) and the
//! solver output types (planned edges and ranked route plans).

mod city;
mod route;
mod solution;
mod ticket;

pub use city::City;
pub use route::{Route, TrackColor};
pub use solution::{PlanKind, PlannedEdge, RoutePlan};
pub use ticket::Ticket;
