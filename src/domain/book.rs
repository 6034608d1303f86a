//! Book domain model and operations.
//!
//! This module defines the core `Book` type representing a single catalog entry.
//! Books are immutable once loaded; every other layer of the widget borrows or
//! clones them but never edits them in place.

use chrono::{DateTime, Datelike, Utc};

/// A single entry in the book catalog.
///
/// Books reference their author and genres by identifier rather than embedding
/// them, mirroring the catalog file layout where authors and genres live in
/// separate lookup tables. Use a [`Directory`](crate::domain::Directory) to
/// resolve those identifiers to display names.
///
/// # Fields
///
/// - `id`: Unique identifier within the catalog
/// - `title`: Display title
/// - `author_id`: Identifier resolved against the author directory
/// - `cover_url`: Location of the cover image, displayed verbatim
/// - `description`: Synopsis shown on the detail overlay
/// - `genre_ids`: Identifiers resolved against the genre directory
/// - `published`: Publication timestamp, usually rendered as a year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub cover_url: String,
    pub description: String,
    pub genre_ids: Vec<String>,
    pub published: DateTime<Utc>,
}

impl Book {
    /// Returns the publication year, the form the widget displays everywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookstall::domain::Book;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "Moby-Dick".to_string(),
    ///     author_id: "a1".to_string(),
    ///     cover_url: String::new(),
    ///     description: String::new(),
    ///     genre_ids: vec!["g1".to_string()],
    ///     published: Utc.with_ymd_and_hms(1851, 10, 18, 0, 0, 0).unwrap(),
    /// };
    /// assert_eq!(book.published_year(), 1851);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns true when any of the book's genre identifiers equals `genre_id`.
    #[must_use]
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genre_ids.iter().any(|g| g == genre_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Book {
        Book {
            id: "b1".to_string(),
            title: "Frankenstein".to_string(),
            author_id: "shelley".to_string(),
            cover_url: "https://example.invalid/frankenstein.jpg".to_string(),
            description: "A scientist assembles a creature.".to_string(),
            genre_ids: vec!["gothic".to_string(), "sciencefiction".to_string()],
            published: Utc.with_ymd_and_hms(1818, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn published_year_extracts_calendar_year() {
        assert_eq!(sample().published_year(), 1818);
    }

    #[test]
    fn has_genre_checks_membership() {
        let book = sample();
        assert!(book.has_genre("gothic"));
        assert!(book.has_genre("sciencefiction"));
        assert!(!book.has_genre("romance"));
    }
}
