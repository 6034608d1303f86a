//! Catalog querying: the filter-and-paginate core of the widget.
//!
//! Everything in this module is pure, synchronous bookkeeping over plain data.
//! It knows nothing about terminals, forms, or files; the app layer feeds it
//! [`Filter`] values built from form input and renders whatever slices come
//! back.
//!
//! # Organization
//!
//! - [`filter`]: Filter criteria and the per-book matching predicate
//! - [`query`]: Session query state with paging over cached results

pub mod filter;
pub mod query;

pub use filter::{Filter, FilterChoice, ANY_CHOICE};
pub use query::CatalogQuery;
