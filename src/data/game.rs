//! Loaded, read-only game data.

use std::collections::{BTreeMap, HashMap};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{City, Route, Ticket};

#[derive(Deserialize)]
struct GameDataFile {
    cities: Vec<City>,
    routes: Vec<Route>,
    #[serde(default)]
    tickets: Vec<Ticket>,
    #[serde(default)]
    scoring: BTreeMap<u32, u32>,
}

/// The static game data bundle: cities, routes, tickets, and the scoring
/// table.
///
/// Loaded once at startup and shared read-only across solve requests; all
/// per-request state lives in graphs built from this data. City names are
/// indexed to dense ids for graph work.
///
/// # Examples
///
/// ```
/// use railplan::data::GameData;
///
/// let data = GameData::from_json(r#"{
///     "cities": [
///         {"name": "Madrid", "x": 100.0, "y": 540.0},
///         {"name": "Pamplona", "x": 160.0, "y": 480.0}
///     ],
///     "routes": [
///         {"from": "Madrid", "to": "Pamplona", "length": 3, "color": "black"},
///         {"from": "Madrid", "to": "Pamplona", "length": 3, "color": "white"}
///     ],
///     "tickets": [{"from": "Madrid", "to": "Pamplona", "points": 4}],
///     "scoring": {"1": 1, "2": 2, "3": 4, "4": 7, "6": 15, "8": 21}
/// }"#).unwrap();
///
/// assert_eq!(data.num_cities(), 2);
/// assert_eq!(data.routes().len(), 2);
/// assert_eq!(data.points_for_length(3), 4);
/// assert_eq!(data.points_for_length(5), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameData {
    cities: Vec<City>,
    city_ids: HashMap<String, usize>,
    routes: Vec<Route>,
    tickets: Vec<Ticket>,
    scoring: BTreeMap<u32, u32>,
}

impl GameData {
    /// Assembles and validates a game data bundle.
    ///
    /// Fails on duplicate city names, routes or tickets naming unknown
    /// cities, and zero-length routes.
    pub fn new(
        cities: Vec<City>,
        routes: Vec<Route>,
        tickets: Vec<Ticket>,
        scoring: BTreeMap<u32, u32>,
    ) -> Result<Self> {
        let mut city_ids = HashMap::with_capacity(cities.len());
        for (id, city) in cities.iter().enumerate() {
            if city_ids.insert(city.name.clone(), id).is_some() {
                bail!("duplicate city name {:?}", city.name);
            }
        }
        for (index, route) in routes.iter().enumerate() {
            for name in [&route.from, &route.to] {
                if !city_ids.contains_key(name) {
                    bail!("route {index} references unknown city {name:?}");
                }
            }
            if route.length == 0 {
                bail!("route {index} has zero length");
            }
        }
        for (index, ticket) in tickets.iter().enumerate() {
            for name in [&ticket.from, &ticket.to] {
                if !city_ids.contains_key(name) {
                    bail!("ticket {index} references unknown city {name:?}");
                }
            }
        }
        Ok(Self {
            cities,
            city_ids,
            routes,
            tickets,
            scoring,
        })
    }

    /// Loads and validates a game data bundle from JSON.
    ///
    /// The scoring table maps route length to points; the `tickets` and
    /// `scoring` sections may be omitted.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: GameDataFile =
            serde_json::from_str(json).context("malformed game data JSON")?;
        Self::new(file.cities, file.routes, file.tickets, file.scoring)
    }

    /// All cities, in id order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities on the map.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Dense id of a city, or `None` for an unknown name.
    pub fn city_id(&self, name: &str) -> Option<usize> {
        self.city_ids.get(name).copied()
    }

    /// Name of the city with the given dense id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn city_name(&self, id: usize) -> &str {
        &self.cities[id].name
    }

    /// All routes; a route's position in this list is its route index.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// All tickets; a ticket's position in this list is its ticket index.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// The scoring table (route length to points).
    pub fn scoring(&self) -> &BTreeMap<u32, u32> {
        &self.scoring
    }

    /// Points awarded for a route of the given length; 0 when the length is
    /// not in the scoring table.
    pub fn points_for_length(&self, length: u32) -> u32 {
        self.scoring.get(&length).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(names: &[&str]) -> Vec<City> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| City::new(*n, i as f64, 0.0))
            .collect()
    }

    #[test]
    fn test_city_index() {
        let data = GameData::new(
            cities(&["A", "B", "C"]),
            vec![Route::new("A", "B", 2)],
            vec![],
            BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(data.city_id("B"), Some(1));
        assert_eq!(data.city_id("Z"), None);
        assert_eq!(data.city_name(2), "C");
    }

    #[test]
    fn test_duplicate_city_rejected() {
        let err = GameData::new(cities(&["A", "A"]), vec![], vec![], BTreeMap::new());
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_route_endpoint_rejected() {
        let err = GameData::new(
            cities(&["A", "B"]),
            vec![Route::new("A", "X", 2)],
            vec![],
            BTreeMap::new(),
        );
        assert!(err.unwrap_err().to_string().contains("unknown city"));
    }

    #[test]
    fn test_zero_length_route_rejected() {
        let err = GameData::new(
            cities(&["A", "B"]),
            vec![Route::new("A", "B", 0)],
            vec![],
            BTreeMap::new(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_ticket_endpoint_rejected() {
        let err = GameData::new(
            cities(&["A", "B"]),
            vec![],
            vec![Ticket::new("A", "X", 5)],
            BTreeMap::new(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_from_json_missing_sections() {
        let data = GameData::from_json(
            r#"{
                "cities": [{"name": "A", "x": 0.0, "y": 0.0},
                           {"name": "B", "x": 1.0, "y": 0.0}],
                "routes": [{"from": "A", "to": "B", "length": 4}]
            }"#,
        )
        .unwrap();
        assert!(data.tickets().is_empty());
        assert_eq!(data.points_for_length(4), 0);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(GameData::from_json("{not json").is_err());
    }
}
