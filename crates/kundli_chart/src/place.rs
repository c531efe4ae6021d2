//! Place-name resolution.

use crate::config::PlaceEntry;

/// Resolves a place name to coordinates and a zone offset.
///
/// Geocoding services live outside this crate; [`PlaceTable`] serves
/// configured places.
pub trait PlaceResolver {
    fn resolve(&self, name: &str) -> Option<PlaceEntry>;
}

/// In-memory place table, matched case-insensitively on trimmed names.
#[derive(Debug, Clone, Default)]
pub struct PlaceTable {
    entries: Vec<PlaceEntry>,
}

impl PlaceTable {
    pub fn new(entries: Vec<PlaceEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PlaceResolver for PlaceTable {
    fn resolve(&self, name: &str) -> Option<PlaceEntry> {
        let wanted = name.trim();
        self.entries
            .iter()
            .find(|e| e.name.trim().eq_ignore_ascii_case(wanted))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PlaceTable {
        PlaceTable::new(vec![PlaceEntry {
            name: "Chennai".into(),
            latitude: 13.0827,
            longitude: 80.2707,
            utc_offset_hours: 5.5,
        }])
    }

    #[test]
    fn resolves_case_insensitively() {
        let t = table();
        assert_eq!(t.resolve(" chennai ").map(|p| p.utc_offset_hours), Some(5.5));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn unknown_place_is_none() {
        assert!(table().resolve("Atlantis").is_none());
        assert!(PlaceTable::default().is_empty());
    }
}
