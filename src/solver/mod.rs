//! Route optimization core.
//!
//! [`solve_steiner_tree`] approximates the cheapest tree connecting a set
//! of terminal cities; [`solve_with_alternatives`] ranks it alongside
//! diversified alternatives; [`terminal_cities`] derives the terminal set
//! from selected tickets.
//!
//! Degenerate inputs (too few terminals, unreachable terminals,
//! out-of-range indices) degrade to empty or partial results instead of
//! errors: for an interactive planner a partial answer beats a hard
//! failure.

mod alternatives;
mod steiner;
mod terminals;

pub use alternatives::{solve_with_alternatives, DEFAULT_NUM_ALTERNATIVES};
pub use steiner::solve_steiner_tree;
pub use terminals::terminal_cities;
