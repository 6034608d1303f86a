//! Identifier-to-name lookup tables for authors and genres.
//!
//! Catalog files store authors and genres as flat id/name maps. The widget needs
//! those maps in two shapes: keyed lookup while rendering book rows, and a
//! stable ordered list while rendering filter pickers. [`Directory`] provides
//! both from a single structure.

use std::collections::HashMap;

/// Display name used when a book references an identifier the directory
/// does not contain.
pub const UNKNOWN_NAME: &str = "Unknown";

/// An ordered id/name lookup table.
///
/// Entries are sorted by display name (ties broken by id) at construction time,
/// so every picker and dropdown built from the same directory lists options in
/// the same order regardless of the source map's iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, String)>,
}

impl Directory {
    /// Builds a directory from a raw id/name map, sorting entries by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use bookstall::domain::Directory;
    ///
    /// let mut map = HashMap::new();
    /// map.insert("woolf".to_string(), "Virginia Woolf".to_string());
    /// map.insert("austen".to_string(), "Jane Austen".to_string());
    ///
    /// let authors = Directory::new(map);
    /// let names: Vec<&str> = authors.entries().iter().map(|(_, n)| n.as_str()).collect();
    /// assert_eq!(names, vec!["Jane Austen", "Virginia Woolf"]);
    /// ```
    #[must_use]
    pub fn new(map: HashMap<String, String>) -> Self {
        let mut entries: Vec<(String, String)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    /// Returns the display name for `id`, if the directory contains it.
    #[must_use]
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, name)| name.as_str())
    }

    /// Returns the display name for `id`, falling back to [`UNKNOWN_NAME`]
    /// when the identifier is absent.
    #[must_use]
    pub fn display_name(&self, id: &str) -> &str {
        self.name_of(id).unwrap_or(UNKNOWN_NAME)
    }

    /// Returns all `(id, name)` entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the directory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors() -> Directory {
        let mut map = HashMap::new();
        map.insert("melville".to_string(), "Herman Melville".to_string());
        map.insert("austen".to_string(), "Jane Austen".to_string());
        map.insert("shelley".to_string(), "Mary Shelley".to_string());
        Directory::new(map)
    }

    #[test]
    fn entries_are_sorted_by_display_name() {
        let names: Vec<&str> = authors()
            .entries()
            .iter()
            .map(|(_, name)| name.as_str())
            .collect();
        assert_eq!(names, vec!["Herman Melville", "Jane Austen", "Mary Shelley"]);
    }

    #[test]
    fn ties_on_name_are_broken_by_id() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), "Same Name".to_string());
        map.insert("a".to_string(), "Same Name".to_string());
        let dir = Directory::new(map);
        let ids: Vec<&str> = dir.entries().iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn name_of_resolves_known_ids() {
        let dir = authors();
        assert_eq!(dir.name_of("austen"), Some("Jane Austen"));
        assert_eq!(dir.name_of("nobody"), None);
    }

    #[test]
    fn display_name_falls_back_for_unknown_ids() {
        let dir = authors();
        assert_eq!(dir.display_name("melville"), "Herman Melville");
        assert_eq!(dir.display_name("nobody"), UNKNOWN_NAME);
    }

    #[test]
    fn empty_directory_reports_empty() {
        let dir = Directory::new(HashMap::new());
        assert!(dir.is_empty());
        assert_eq!(dir.len(), 0);
    }
}
