//! Wire-format records for catalog files.
//!
//! These types mirror the on-disk JSON layout exactly and exist only at the
//! loading boundary. The rest of the crate works with
//! [`Book`](crate::domain::Book) and [`Directory`](crate::domain::Directory),
//! which the loader builds from these records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One book as stored in a catalog file.
///
/// Field names follow the file format, not the domain model: `author` holds an
/// author id and `image` a cover location. `genres` may be omitted entirely
/// for books without genre tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub published: DateTime<Utc>,
}

impl From<BookEntry> for crate::domain::Book {
    fn from(entry: BookEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            author_id: entry.author,
            cover_url: entry.image,
            description: entry.description,
            genre_ids: entry.genres,
            published: entry.published,
        }
    }
}

/// Top-level catalog file structure.
///
/// # File Format
///
/// ```json
/// {
///   "books_per_page": 6,
///   "authors": { "melville": "Herman Melville" },
///   "genres": { "adventure": "Adventure" },
///   "books": [
///     {
///       "id": "moby-dick",
///       "title": "Moby-Dick",
///       "author": "melville",
///       "image": "https://covers.example.org/moby-dick.jpg",
///       "description": "A whaling voyage narrated by Ishmael.",
///       "genres": ["adventure"],
///       "published": "1851-10-18T00:00:00Z"
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// How many books each result page holds. Must be positive.
    pub books_per_page: usize,

    /// Author id to display name map.
    #[serde(default)]
    pub authors: HashMap<String, String>,

    /// Genre id to display name map.
    #[serde(default)]
    pub genres: HashMap<String, String>,

    /// The catalog itself, in display order.
    #[serde(default)]
    pub books: Vec<BookEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Book;
    use chrono::TimeZone;

    #[test]
    fn book_entry_parses_from_wire_json() {
        let json = r#"{
            "id": "moby-dick",
            "title": "Moby-Dick",
            "author": "melville",
            "image": "https://covers.example.org/moby-dick.jpg",
            "description": "A whaling voyage narrated by Ishmael.",
            "genres": ["adventure", "classic"],
            "published": "1851-10-18T00:00:00Z"
        }"#;

        let entry: BookEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "moby-dick");
        assert_eq!(entry.author, "melville");
        assert_eq!(entry.genres, vec!["adventure", "classic"]);
        assert_eq!(
            entry.published,
            Utc.with_ymd_and_hms(1851, 10, 18, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn missing_genres_default_to_empty() {
        let json = r#"{
            "id": "pamphlet",
            "title": "A Pamphlet",
            "author": "anon",
            "image": "",
            "description": "",
            "published": "1900-01-01T00:00:00Z"
        }"#;

        let entry: BookEntry = serde_json::from_str(json).unwrap();
        assert!(entry.genres.is_empty());
    }

    #[test]
    fn entry_converts_into_domain_book() {
        let entry = BookEntry {
            id: "b1".to_string(),
            title: "Dracula".to_string(),
            author: "stoker".to_string(),
            image: "https://covers.example.org/dracula.jpg".to_string(),
            description: "Letters and diaries trace a count's arrival.".to_string(),
            genres: vec!["gothic".to_string()],
            published: Utc.with_ymd_and_hms(1897, 5, 26, 0, 0, 0).unwrap(),
        };

        let book = Book::from(entry);
        assert_eq!(book.id, "b1");
        assert_eq!(book.author_id, "stoker");
        assert_eq!(book.cover_url, "https://covers.example.org/dracula.jpg");
        assert_eq!(book.genre_ids, vec!["gothic"]);
        assert_eq!(book.published_year(), 1897);
    }

    #[test]
    fn catalog_file_maps_default_to_empty() {
        let json = r#"{ "books_per_page": 4 }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.books_per_page, 4);
        assert!(file.authors.is_empty());
        assert!(file.genres.is_empty());
        assert!(file.books.is_empty());
    }
}
