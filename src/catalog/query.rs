//! Stateful filter-and-paginate queries over an immutable catalog.
//!
//! [`CatalogQuery`] owns the full catalog plus the mutable query state the
//! widget session needs: the active filter, the cursor of the current page,
//! and the cached result of the last search. Every operation is synchronous,
//! total, and errorless; "nothing matched" and "page past the end" are both
//! expressed as empty slices, never as failures.

use crate::catalog::Filter;
use crate::domain::Book;

/// Filtering and paging state for one browsing session.
///
/// The catalog is loaded once and never mutated afterwards. Searches always
/// run against the full catalog, produce results in original catalog order,
/// and reset paging to the first page. Paging operations slice the cached
/// result without recomputing the filter.
///
/// # Examples
///
/// ```
/// use bookstall::catalog::{CatalogQuery, Filter, FilterChoice};
/// use bookstall::domain::Book;
/// use chrono::{TimeZone, Utc};
///
/// let book = |id: &str, title: &str| Book {
///     id: id.to_string(),
///     title: title.to_string(),
///     author_id: "a1".to_string(),
///     cover_url: String::new(),
///     description: String::new(),
///     genre_ids: vec![],
///     published: Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
/// };
///
/// let mut query = CatalogQuery::new(vec![book("b1", "North"), book("b2", "South")]);
/// assert_eq!(query.page_slice(1).len(), 1);
/// assert_eq!(query.remaining_count(1), 1);
///
/// let matches = query.search(Filter {
///     title: "south".to_string(),
///     author: FilterChoice::Any,
///     genre: FilterChoice::Any,
/// });
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].id, "b2");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    catalog: Vec<Book>,
    active_filter: Filter,
    current_page: usize,
    last_result: Vec<Book>,
}

impl CatalogQuery {
    /// Creates query state over `catalog` with the identity filter applied.
    ///
    /// The initial cached result is the whole catalog and the page cursor
    /// starts at page 1. An empty catalog is legal and simply yields empty
    /// slices everywhere.
    #[must_use]
    pub fn new(catalog: Vec<Book>) -> Self {
        let last_result = catalog.clone();
        Self {
            catalog,
            active_filter: Filter::identity(),
            current_page: 1,
            last_result,
        }
    }

    /// Applies `filter` to the full catalog and caches the outcome.
    ///
    /// The result is the subsequence of the catalog whose books satisfy the
    /// filter predicate, in unchanged catalog order. The page cursor resets to
    /// 1 on every call, including repeat searches with an identical filter.
    /// Returns the new result; an empty slice means nothing matched.
    pub fn search(&mut self, filter: Filter) -> &[Book] {
        let _span = tracing::debug_span!(
            "catalog_search",
            catalog_len = self.catalog.len(),
            identity = filter.is_identity(),
        )
        .entered();

        self.last_result = self
            .catalog
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect();
        self.active_filter = filter;
        self.current_page = 1;

        tracing::debug!(match_count = self.last_result.len(), "search applied");
        &self.last_result
    }

    /// Returns the current page's slice of the cached result.
    ///
    /// The slice covers zero-based offsets `(page - 1) * page_size` up to
    /// `page * page_size`, clipped to the result length. A cursor already past
    /// the last page yields an empty slice. Does not mutate the cursor.
    #[must_use]
    pub fn page_slice(&self, page_size: usize) -> &[Book] {
        let len = self.last_result.len();
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(page_size)
            .min(len);
        let end = self.current_page.saturating_mul(page_size).min(len);
        &self.last_result[start..end]
    }

    /// Advances the page cursor and returns the newly current page's slice.
    ///
    /// Safe to call repeatedly past the end of the result: the cursor keeps
    /// incrementing and the returned slice is simply empty.
    pub fn advance_page(&mut self, page_size: usize) -> &[Book] {
        self.current_page = self.current_page.saturating_add(1);
        self.page_slice(page_size)
    }

    /// Returns how many result entries lie beyond the current page.
    ///
    /// This is the number a "show more" control displays; it is zero, never
    /// negative, once every page has been consumed.
    #[must_use]
    pub fn remaining_count(&self, page_size: usize) -> usize {
        self.last_result
            .len()
            .saturating_sub(self.current_page.saturating_mul(page_size))
    }

    /// Looks up a book by exact id over the full catalog.
    ///
    /// Detail lookups deliberately ignore the active filter so a card rendered
    /// before a filter change stays resolvable after it. Returns `None` for an
    /// unknown id; callers treat that as a no-op, not a fault.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.catalog.iter().find(|book| book.id == id)
    }

    /// Returns the 1-based page cursor.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of books matching the active filter.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.last_result.len()
    }

    /// Returns the filter most recently applied via [`CatalogQuery::search`],
    /// or the identity filter before any search.
    #[must_use]
    pub fn active_filter(&self) -> &Filter {
        &self.active_filter
    }

    /// Returns the full immutable catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Book] {
        &self.catalog
    }

    /// Returns the cached result of the most recent search.
    #[must_use]
    pub fn results(&self) -> &[Book] {
        &self.last_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterChoice;
    use chrono::{TimeZone, Utc};

    fn book(id: &str, title: &str, author_id: &str, genre_ids: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author_id: author_id.to_string(),
            cover_url: String::new(),
            description: String::new(),
            genre_ids: genre_ids.iter().map(|g| (*g).to_string()).collect(),
            published: Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn five_books() -> Vec<Book> {
        vec![
            book("b1", "Alpha", "a1", &["g2"]),
            book("b2", "Beta", "a1", &["g1"]),
            book("b3", "Gamma", "a2", &["g2", "g3"]),
            book("b4", "Delta", "a2", &["g1", "g3"]),
            book("b5", "Epsilon", "a3", &[]),
        ]
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    fn genre(id: &str) -> Filter {
        Filter {
            genre: FilterChoice::Id(id.to_string()),
            ..Filter::identity()
        }
    }

    fn title(text: &str) -> Filter {
        Filter {
            title: text.to_string(),
            ..Filter::identity()
        }
    }

    #[test]
    fn fresh_query_exposes_the_whole_catalog() {
        let query = CatalogQuery::new(five_books());
        assert_eq!(query.match_count(), 5);
        assert_eq!(query.current_page(), 1);
        assert!(query.active_filter().is_identity());
        assert_eq!(ids(query.page_slice(2)), vec!["b1", "b2"]);
        assert_eq!(query.remaining_count(2), 3);
    }

    #[test]
    fn advancing_walks_pages_in_order() {
        let mut query = CatalogQuery::new(five_books());

        assert_eq!(ids(query.advance_page(2)), vec!["b3", "b4"]);
        assert_eq!(query.current_page(), 2);
        assert_eq!(query.remaining_count(2), 1);

        assert_eq!(ids(query.advance_page(2)), vec!["b5"]);
        assert_eq!(query.current_page(), 3);
        assert_eq!(query.remaining_count(2), 0);
    }

    #[test]
    fn advancing_past_the_end_is_harmless() {
        let mut query = CatalogQuery::new(five_books());
        for _ in 0..3 {
            query.advance_page(2);
        }
        assert!(query.advance_page(2).is_empty());
        assert!(query.advance_page(2).is_empty());
        assert_eq!(query.current_page(), 6);
        assert_eq!(query.remaining_count(2), 0);
        assert!(query.page_slice(2).is_empty());
    }

    #[test]
    fn genre_search_keeps_catalog_order_and_resets_paging() {
        let mut query = CatalogQuery::new(five_books());
        query.advance_page(2);

        let result = query.search(genre("g1"));
        assert_eq!(ids(result), vec!["b2", "b4"]);
        assert_eq!(query.current_page(), 1);
        assert_eq!(ids(query.page_slice(2)), vec!["b2", "b4"]);
        assert_eq!(query.remaining_count(2), 0);
    }

    #[test]
    fn unmatched_search_yields_an_empty_result_not_an_error() {
        let mut query = CatalogQuery::new(five_books());
        assert!(query.search(title("zzz")).is_empty());
        assert_eq!(query.match_count(), 0);
        assert!(query.page_slice(2).is_empty());
        assert_eq!(query.remaining_count(2), 0);
    }

    #[test]
    fn lookup_by_id_spans_the_full_catalog() {
        let mut query = CatalogQuery::new(five_books());
        assert_eq!(query.find_by_id("b3").map(|b| b.id.as_str()), Some("b3"));
        assert!(query.find_by_id("b99").is_none());

        // A book the active filter excludes must stay resolvable.
        query.search(genre("g1"));
        assert_eq!(query.find_by_id("b3").map(|b| b.id.as_str()), Some("b3"));
        assert_eq!(query.find_by_id("b5").map(|b| b.id.as_str()), Some("b5"));
    }

    #[test]
    fn results_are_a_subsequence_of_the_catalog() {
        let mut query = CatalogQuery::new(five_books());
        let result: Vec<String> = query
            .search(Filter {
                author: FilterChoice::Id("a2".to_string()),
                ..Filter::identity()
            })
            .iter()
            .map(|b| b.id.clone())
            .collect();
        assert_eq!(result, vec!["b3", "b4"]);

        let mut catalog_iter = query.catalog().iter();
        for id in &result {
            assert!(catalog_iter.any(|b| &b.id == id));
        }
    }

    #[test]
    fn repeating_a_search_is_idempotent() {
        let mut query = CatalogQuery::new(five_books());
        let first: Vec<Book> = query.search(genre("g3")).to_vec();
        query.advance_page(1);
        assert_eq!(query.current_page(), 2);

        let second: Vec<Book> = query.search(genre("g3")).to_vec();
        assert_eq!(first, second);
        assert_eq!(query.current_page(), 1);
    }

    #[test]
    fn every_match_satisfies_the_filter_and_nothing_else_does() {
        let mut query = CatalogQuery::new(five_books());
        let filter = Filter {
            title: " a ".to_string(),
            author: FilterChoice::Any,
            genre: FilterChoice::Id("g2".to_string()),
        };
        let matched: Vec<String> = query
            .search(filter.clone())
            .iter()
            .map(|b| b.id.clone())
            .collect();

        for b in query.catalog() {
            assert_eq!(matched.contains(&b.id), filter.matches(b));
        }
    }

    #[test]
    fn page_slices_never_exceed_the_page_size() {
        for page_size in 1..=6 {
            let mut query = CatalogQuery::new(five_books());
            assert!(query.page_slice(page_size).len() <= page_size);
            for _ in 0..8 {
                assert!(query.advance_page(page_size).len() <= page_size);
            }
        }
    }

    #[test]
    fn non_empty_page_count_matches_result_length() {
        for page_size in 1..=6 {
            let mut query = CatalogQuery::new(five_books());
            let expected = 5usize.div_ceil(page_size);

            let mut non_empty = usize::from(!query.page_slice(page_size).is_empty());
            for _ in 0..8 {
                if !query.advance_page(page_size).is_empty() {
                    non_empty += 1;
                }
            }
            assert_eq!(non_empty, expected);
        }
    }

    #[test]
    fn remaining_count_decreases_to_zero() {
        let mut query = CatalogQuery::new(five_books());
        let mut previous = query.remaining_count(2);
        for _ in 0..6 {
            query.advance_page(2);
            let current = query.remaining_count(2);
            assert!(current <= previous);
            previous = current;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn empty_catalog_yields_empty_everything() {
        let mut query = CatalogQuery::new(Vec::new());
        assert!(query.page_slice(2).is_empty());
        assert_eq!(query.remaining_count(2), 0);
        assert!(query.search(Filter::identity()).is_empty());
        assert!(query.advance_page(2).is_empty());
        assert!(query.find_by_id("b1").is_none());
    }

    #[test]
    fn oversized_page_swallows_the_whole_result() {
        let query = CatalogQuery::new(five_books());
        assert_eq!(query.page_slice(100).len(), 5);
        assert_eq!(query.remaining_count(100), 0);
    }

    #[test]
    fn degenerate_page_size_yields_empty_slices() {
        let mut query = CatalogQuery::new(five_books());
        assert!(query.page_slice(0).is_empty());
        assert!(query.advance_page(0).is_empty());
        assert_eq!(query.remaining_count(0), 5);
    }
}
