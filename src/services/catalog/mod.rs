/// Catalog and reading-history data sources
///
/// The recommendation pipeline only talks to these traits. Implementations own
/// ordering and sampling: `fetch_by_genres` sorts by rating then shelf-adds,
/// `fetch_popular` by shelf-adds then rating, and `fetch_random` returns an
/// unordered sample. Every accessor must leave out the ids in `exclude`.
use std::collections::HashSet;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Book, BookId, GenreId, ReadingHistoryEntry},
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCatalog;
pub use postgres::PgCatalog;

/// Read access to the book catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Books in any of `genre_ids`, best rated first
    async fn fetch_by_genres(
        &self,
        genre_ids: &[GenreId],
        exclude: &HashSet<BookId>,
        limit: usize,
    ) -> AppResult<Vec<Book>>;

    /// Most shelved books first
    async fn fetch_popular(&self, exclude: &HashSet<BookId>, limit: usize) -> AppResult<Vec<Book>>;

    /// A random sample of books
    async fn fetch_random(&self, exclude: &HashSet<BookId>, limit: usize) -> AppResult<Vec<Book>>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Read access to a user's finished books
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReadingHistorySource: Send + Sync {
    /// Books on the user's "read" shelf, with their genres resolved
    async fn finished_books(&self, user_id: Uuid) -> AppResult<Vec<ReadingHistoryEntry>>;
}
