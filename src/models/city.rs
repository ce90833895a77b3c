//! City type.

use serde::{Deserialize, Serialize};

/// A city on the game map.
///
/// The name is the identifier used by routes, tickets, and blocked-route
/// descriptors. Coordinates are display hints for the frontend; the
/// optimizer never reads them.
///
/// # Examples
///
/// ```
/// use railplan::models::City;
///
/// let city = City::new("Paris", 272.0, 406.0);
/// assert_eq!(city.name, "Paris");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique display name.
    pub name: String,
    /// Horizontal map position.
    pub x: f64,
    /// Vertical map position.
    pub y: f64,
}

impl City {
    /// Creates a city at the given map position.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}
