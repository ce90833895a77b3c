//! Route and track color types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color of a printed route on the board.
///
/// `Gray` is the neutral color claimable with cards of any single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Black,
    White,
    #[default]
    Gray,
}

impl fmt::Display for TrackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackColor::Red => "red",
            TrackColor::Orange => "orange",
            TrackColor::Yellow => "yellow",
            TrackColor::Green => "green",
            TrackColor::Blue => "blue",
            TrackColor::Purple => "purple",
            TrackColor::Black => "black",
            TrackColor::White => "white",
            TrackColor::Gray => "gray",
        };
        f.write_str(name)
    }
}

/// A claimable route between two cities.
///
/// Routes are static map data. Multiple routes may share the same endpoint
/// pair (parallel routes); the position of a route in the static route list
/// is its route index, the stable identity used when blocking one parallel
/// route without affecting the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// One endpoint city name.
    pub from: String,
    /// Other endpoint city name.
    pub to: String,
    /// Train cars required to claim the route; the edge weight.
    pub length: u32,
    /// Printed track color.
    #[serde(default)]
    pub color: TrackColor,
    /// Whether the route is a tunnel.
    #[serde(default)]
    pub tunnel: bool,
    /// Locomotive cards required for a ferry crossing.
    #[serde(default)]
    pub ferries: u32,
}

impl Route {
    /// Creates a plain gray route with no tunnel or ferry requirement.
    pub fn new(from: impl Into<String>, to: impl Into<String>, length: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            length,
            color: TrackColor::Gray,
            tunnel: false,
            ferries: 0,
        }
    }

    /// Sets the printed color.
    pub fn with_color(mut self, color: TrackColor) -> Self {
        self.color = color;
        self
    }

    /// Marks the route as a tunnel.
    pub fn with_tunnel(mut self) -> Self {
        self.tunnel = true;
        self
    }

    /// Sets the ferry (locomotive card) requirement.
    pub fn with_ferries(mut self, ferries: u32) -> Self {
        self.ferries = ferries;
        self
    }
}
