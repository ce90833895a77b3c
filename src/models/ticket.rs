//! Destination ticket type.

use serde::{Deserialize, Serialize};

/// A destination ticket: a pair of cities the player must connect.
///
/// The position of a ticket in the static ticket list is its ticket index;
/// solve requests select tickets by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// One endpoint city name.
    pub from: String,
    /// Other endpoint city name.
    pub to: String,
    /// Points awarded for completing the ticket.
    pub points: u32,
    /// Whether this is a long-haul ticket.
    #[serde(default)]
    pub is_long: bool,
}

impl Ticket {
    /// Creates a regular (non-long-haul) ticket.
    pub fn new(from: impl Into<String>, to: impl Into<String>, points: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            points,
            is_long: false,
        }
    }

    /// Marks the ticket as long-haul.
    pub fn long_haul(mut self) -> Self {
        self.is_long = true;
        self
    }
}
