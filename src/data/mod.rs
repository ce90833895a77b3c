//! Static game data loading.
//!
//! Game data (cities, routes, tickets, scoring) is loaded once into a
//! read-only [`GameData`] and passed into the solver entry points.

mod game;

pub use game::GameData;
