//! # railplan
//!
//! Route planning for rail-network board games. Given static map data
//! (cities, routes, tickets, a scoring table), a set of selected tickets,
//! and routes blocked by other players, computes the cheapest tree of
//! routes connecting every required city, plus a ranked list of diverse
//! alternatives.
//!
//! The core is a Kou-Markowsky-Berman Steiner-tree 2-approximation over a
//! simple graph collapsed from the route multigraph; alternatives come
//! from re-running it with previously used edges penalized 3x.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (City, Route, Ticket, RoutePlan)
//! - [`data`] — Loaded, read-only game data ([`data::GameData`])
//! - [`graph`] — Per-request multigraph and collapsed simple graph
//! - [`solver`] — Steiner approximation, alternatives, terminal extraction
//! - [`api`] — Request/response shapes for the embedding service
//!
//! All solver state is request-local; a shared [`data::GameData`] is
//! read-only, so concurrent solves need no locking.

pub mod api;
pub mod data;
pub mod graph;
pub mod models;
pub mod solver;
