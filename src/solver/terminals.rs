//! Terminal extraction from selected tickets.

use std::collections::BTreeSet;

use crate::data::GameData;

/// Collects the distinct cities named by the selected tickets.
///
/// Indices outside the ticket list are silently skipped. The result is
/// sorted by city id, so identical selections always produce the same
/// terminal list.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use railplan::data::GameData;
/// use railplan::models::{City, Ticket};
/// use railplan::solver::terminal_cities;
///
/// let data = GameData::new(
///     vec![
///         City::new("A", 0.0, 0.0),
///         City::new("B", 1.0, 0.0),
///         City::new("C", 2.0, 0.0),
///         City::new("D", 3.0, 0.0),
///     ],
///     vec![],
///     vec![
///         Ticket::new("A", "B", 5),
///         Ticket::new("B", "C", 6),
///         Ticket::new("C", "D", 7),
///     ],
///     BTreeMap::new(),
/// ).unwrap();
///
/// let terminals = terminal_cities(&data, &[0, 2, 99]);
/// assert_eq!(terminals, vec!["A", "B", "C", "D"]);
/// ```
pub fn terminal_cities(data: &GameData, ticket_indices: &[usize]) -> Vec<String> {
    let mut ids = BTreeSet::new();
    for &index in ticket_indices {
        let Some(ticket) = data.tickets().get(index) else {
            continue;
        };
        for name in [&ticket.from, &ticket.to] {
            if let Some(id) = data.city_id(name) {
                ids.insert(id);
            }
        }
    }
    ids.into_iter()
        .map(|id| data.city_name(id).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{City, Ticket};

    fn fixture() -> GameData {
        GameData::new(
            vec![
                City::new("A", 0.0, 0.0),
                City::new("B", 1.0, 0.0),
                City::new("C", 2.0, 0.0),
            ],
            vec![],
            vec![
                Ticket::new("A", "B", 5),
                Ticket::new("B", "C", 6),
                Ticket::new("A", "C", 9).long_haul(),
            ],
            BTreeMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicates_collapse() {
        let data = fixture();
        // A and B both appear twice across the selected tickets.
        assert_eq!(terminal_cities(&data, &[0, 1, 2]), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_out_of_range_indices_skipped() {
        let data = fixture();
        assert_eq!(terminal_cities(&data, &[0, 99]), vec!["A", "B"]);
        assert!(terminal_cities(&data, &[42]).is_empty());
    }

    #[test]
    fn test_empty_selection() {
        assert!(terminal_cities(&fixture(), &[]).is_empty());
    }

    #[test]
    fn test_repeated_indices() {
        let data = fixture();
        assert_eq!(terminal_cities(&data, &[1, 1, 1]), vec!["B", "C"]);
    }
}
