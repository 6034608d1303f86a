//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where a
//! catalog comes from. The widget treats the catalog as environment-provided
//! read-only data: a source is asked once at startup and never written back.

use crate::domain::{Book, Directory, Result};

/// Everything a catalog source yields: the books plus the lookup tables and
/// paging constant that accompany them in the file format.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// All books in display order.
    pub books: Vec<Book>,

    /// Author id to name directory.
    pub authors: Directory,

    /// Genre id to name directory.
    pub genres: Directory,

    /// The catalog's own page size. Callers may override it from configuration.
    pub page_size: usize,
}

/// Abstraction over catalog providers.
///
/// Implementations validate as they load: a returned [`LoadedCatalog`] always
/// has unique book ids and a positive page size.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::dataset::JsonCatalog): reads a JSON catalog file,
///   or falls back to the catalog embedded in the binary (default)
///
/// # Examples
///
/// ```
/// use bookstall::dataset::{CatalogSource, JsonCatalog};
///
/// let catalog = JsonCatalog::embedded().load()?;
/// assert!(catalog.page_size > 0);
/// assert!(!catalog.books.is_empty());
/// # Ok::<(), bookstall::domain::BookstallError>(())
/// ```
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or its contents are
    /// malformed.
    fn load(&self) -> Result<LoadedCatalog>;
}
