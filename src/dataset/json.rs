//! JSON catalog source.
//!
//! This module loads catalogs from the JSON wire format described in
//! [`records`](crate::dataset::records). A small public-domain catalog is
//! compiled into the binary so the widget works with no files at all;
//! pointing the source at a file swaps the dataset wholesale.

use crate::dataset::records::CatalogFile;
use crate::dataset::source::{CatalogSource, LoadedCatalog};
use crate::domain::{Book, BookstallError, Directory, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// Catalog compiled into the binary, used when no file is configured.
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// JSON-file catalog source.
///
/// Construction is free of I/O; reading and validation happen in
/// [`CatalogSource::load`]. The embedded variant parses the built-in dataset
/// instead of touching the filesystem.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    /// File to read, or `None` for the embedded catalog.
    path: Option<PathBuf>,
}

impl JsonCatalog {
    /// Returns a source backed by the catalog compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self { path: None }
    }

    /// Returns a source backed by a catalog file on disk.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookstall::dataset::{CatalogSource, JsonCatalog};
    /// use std::path::PathBuf;
    ///
    /// let source = JsonCatalog::from_file(PathBuf::from("/tmp/catalog.json"));
    /// let catalog = source.load()?;
    /// # Ok::<(), bookstall::domain::BookstallError>(())
    /// ```
    #[must_use]
    pub fn from_file(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Parses and validates catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the page size is zero, or
    /// two books share an id. Books referencing author or genre ids missing
    /// from the directories are allowed; they render with a fallback name.
    fn parse(contents: &str) -> Result<LoadedCatalog> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| BookstallError::Dataset(format!("failed to parse catalog JSON: {e}")))?;

        if file.books_per_page == 0 {
            return Err(BookstallError::Dataset(
                "books_per_page must be positive".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(file.books.len());
        for entry in &file.books {
            if !seen.insert(entry.id.as_str()) {
                return Err(BookstallError::Dataset(format!(
                    "duplicate book id: {}",
                    entry.id
                )));
            }
        }

        let authors = Directory::new(file.authors);
        let genres = Directory::new(file.genres);

        let unresolved = file
            .books
            .iter()
            .filter(|b| authors.name_of(&b.author).is_none())
            .count()
            + file
                .books
                .iter()
                .flat_map(|b| &b.genres)
                .filter(|g| genres.name_of(g).is_none())
                .count();
        if unresolved > 0 {
            tracing::debug!(unresolved, "catalog references ids its directories lack");
        }

        let books: Vec<Book> = file.books.into_iter().map(Book::from).collect();

        tracing::debug!(
            book_count = books.len(),
            author_count = authors.len(),
            genre_count = genres.len(),
            page_size = file.books_per_page,
            "catalog loaded"
        );

        Ok(LoadedCatalog {
            books,
            authors,
            genres,
            page_size: file.books_per_page,
        })
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<LoadedCatalog> {
        match &self.path {
            Some(path) => {
                tracing::debug!(path = ?path, "reading catalog file");
                let contents = std::fs::read_to_string(path)?;
                Self::parse(&contents)
            }
            None => {
                tracing::debug!("using embedded catalog");
                Self::parse(EMBEDDED_CATALOG)
            }
        }
    }
}
