//! Filter criteria and the matching predicate applied to catalog books.
//!
//! A [`Filter`] is the triple of constraints a search form produces: a title
//! substring, an author choice, and a genre choice. Author and genre arrive
//! from form surfaces as either the literal wildcard `"any"` or an exact
//! identifier; [`FilterChoice`] captures that distinction as a type so the
//! predicate never string-compares against the wildcard.

use crate::domain::Book;

/// Form value meaning "no constraint" for an author or genre picker.
pub const ANY_CHOICE: &str = "any";

/// An author or genre constraint as submitted by a filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterChoice {
    /// Matches every book.
    #[default]
    Any,
    /// Matches books carrying exactly this identifier. An identifier no book
    /// carries matches nothing, which is the intended treatment for malformed
    /// form values rather than an error.
    Id(String),
}

impl FilterChoice {
    /// Parses a raw form value: the literal `"any"` becomes [`FilterChoice::Any`],
    /// everything else is taken verbatim as an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookstall::catalog::FilterChoice;
    ///
    /// assert_eq!(FilterChoice::from_form_value("any"), FilterChoice::Any);
    /// assert_eq!(
    ///     FilterChoice::from_form_value("austen"),
    ///     FilterChoice::Id("austen".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_form_value(value: &str) -> Self {
        if value == ANY_CHOICE {
            Self::Any
        } else {
            Self::Id(value.to_string())
        }
    }

    /// Returns true for the wildcard choice.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// The complete set of constraints a search narrows the catalog with.
///
/// All three constraints must hold for a book to match. The default value is
/// the identity filter, which every book satisfies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Raw title input. Trimmed before comparison; blank after trimming means
    /// no title constraint.
    pub title: String,
    /// Author constraint, compared exactly against `Book::author_id`.
    pub author: FilterChoice,
    /// Genre constraint, matched against any element of `Book::genre_ids`.
    pub genre: FilterChoice,
}

impl Filter {
    /// Returns the identity filter: blank title, any author, any genre.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns true when this filter places no constraint on any book.
    ///
    /// Whitespace-only title input still counts as identity because the
    /// predicate trims it away.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Evaluates the three-way predicate against a single book.
    ///
    /// - Title: trimmed input is blank, or the book title contains it
    ///   case-insensitively.
    /// - Author: wildcard, or exact case-sensitive identifier equality.
    /// - Genre: wildcard, or exact membership in the book's genre list.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookstall::catalog::{Filter, FilterChoice};
    /// use bookstall::domain::Book;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let book = Book {
    ///     id: "b1".to_string(),
    ///     title: "The Picture of Dorian Gray".to_string(),
    ///     author_id: "wilde".to_string(),
    ///     cover_url: String::new(),
    ///     description: String::new(),
    ///     genre_ids: vec!["gothic".to_string()],
    ///     published: Utc.with_ymd_and_hms(1890, 6, 20, 0, 0, 0).unwrap(),
    /// };
    ///
    /// let filter = Filter {
    ///     title: "  dorian ".to_string(),
    ///     author: FilterChoice::Any,
    ///     genre: FilterChoice::Id("gothic".to_string()),
    /// };
    /// assert!(filter.matches(&book));
    /// ```
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.title.trim();
        let title_ok = needle.is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase());

        let author_ok = match &self.author {
            FilterChoice::Any => true,
            FilterChoice::Id(id) => &book.author_id == id,
        };

        let genre_ok = match &self.genre {
            FilterChoice::Any => true,
            FilterChoice::Id(id) => book.has_genre(id),
        };

        title_ok && author_ok && genre_ok
    }
}
