/// In-memory catalog
///
/// Holds the whole catalog and every user's shelves in vectors. Used by the
/// integration tests and for local runs without PostgreSQL, seeded from a JSON
/// file shaped like [`CatalogSeed`].
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookId, Genre, GenreId, ReadingHistoryEntry, Shelf},
    services::catalog::{CatalogSource, ReadingHistorySource},
};

/// One book placed on one user's shelf
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfEntry {
    pub user_id: Uuid,
    pub book_id: BookId,
    pub shelf: Shelf,
}

/// JSON layout of a catalog seed file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub shelves: Vec<ShelfEntry>,
}

pub struct InMemoryCatalog {
    genres: HashMap<GenreId, Genre>,
    books: Vec<Book>,
    shelves: Vec<ShelfEntry>,
    rng: Mutex<StdRng>,
}

impl InMemoryCatalog {
    pub fn new(seed: CatalogSeed) -> Self {
        Self::with_rng(seed, StdRng::from_entropy())
    }

    /// Builds a catalog whose random sampling is driven by `rng`
    pub fn with_rng(seed: CatalogSeed, rng: StdRng) -> Self {
        Self {
            genres: seed.genres.into_iter().map(|g| (g.id, g)).collect(),
            books: seed.books,
            shelves: seed.shelves,
            rng: Mutex::new(rng),
        }
    }

    /// Loads a seed file from disk
    pub fn from_json_file(path: &str) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::InvalidInput(format!("Cannot read catalog seed {}: {}", path, e))
        })?;
        let seed: CatalogSeed = serde_json::from_str(&raw).map_err(|e| {
            AppError::InvalidInput(format!("Invalid catalog seed {}: {}", path, e))
        })?;

        let genres = seed.genres.len();
        let shelves = seed.shelves.len();
        let catalog = Self::new(seed);

        tracing::info!(
            path = %path,
            genres,
            books = catalog.book_count(),
            shelves,
            "Loaded in-memory catalog"
        );

        Ok(catalog)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    fn eligible<'a>(&'a self, exclude: &'a HashSet<BookId>) -> impl Iterator<Item = &'a Book> {
        self.books.iter().filter(move |b| !exclude.contains(&b.id))
    }
}

fn by_rating_then_shelves(a: &Book, b: &Book) -> Ordering {
    b.rating_signal()
        .total_cmp(&a.rating_signal())
        .then_with(|| b.total_shelves.cmp(&a.total_shelves))
}

fn by_shelves_then_rating(a: &Book, b: &Book) -> Ordering {
    b.total_shelves
        .cmp(&a.total_shelves)
        .then_with(|| b.rating_signal().total_cmp(&a.rating_signal()))
}

#[async_trait::async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_by_genres(
        &self,
        genre_ids: &[GenreId],
        exclude: &HashSet<BookId>,
        limit: usize,
    ) -> AppResult<Vec<Book>> {
        let mut books: Vec<Book> = self
            .eligible(exclude)
            .filter(|b| b.genre_id.is_some_and(|g| genre_ids.contains(&g)))
            .cloned()
            .collect();
        books.sort_by(by_rating_then_shelves);
        books.truncate(limit);
        Ok(books)
    }

    async fn fetch_popular(&self, exclude: &HashSet<BookId>, limit: usize) -> AppResult<Vec<Book>> {
        let mut books: Vec<Book> = self.eligible(exclude).cloned().collect();
        books.sort_by(by_shelves_then_rating);
        books.truncate(limit);
        Ok(books)
    }

    async fn fetch_random(&self, exclude: &HashSet<BookId>, limit: usize) -> AppResult<Vec<Book>> {
        let pool: Vec<&Book> = self.eligible(exclude).collect();
        let mut rng = self.rng.lock().await;
        Ok(pool
            .choose_multiple(&mut *rng, limit)
            .map(|b| (*b).clone())
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[async_trait::async_trait]
impl ReadingHistorySource for InMemoryCatalog {
    async fn finished_books(&self, user_id: Uuid) -> AppResult<Vec<ReadingHistoryEntry>> {
        let books: HashMap<BookId, &Book> = self.books.iter().map(|b| (b.id, b)).collect();

        let history = self
            .shelves
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.shelf == Shelf::Read)
            .map(|entry| {
                let genre = books
                    .get(&entry.book_id)
                    .and_then(|book| book.genre_id)
                    .and_then(|genre_id| self.genres.get(&genre_id))
                    .cloned();
                ReadingHistoryEntry::new(entry.book_id, genre)
            })
            .collect();

        Ok(history)
    }
}
