//! Per-request graph structures.
//!
//! [`build_graph`] turns the static route list into a multigraph with
//! blocked routes removed; [`SimpleGraph`] collapses parallel routes down
//! to the cheapest edge per city pair for the solver.

mod multigraph;
mod simple;

pub use multigraph::{build_graph, BlockedRoute, RouteEdge, RouteGraph};
pub use simple::{SimpleEdge, SimpleGraph};
