/// PostgreSQL catalog
///
/// Books and shelves live in Postgres. Genre display names come from the
/// genre directory, which changes rarely and is cached in Redis.
use crate::{
    cached,
    db::{Cache, CacheKey},
    error::AppResult,
    models::{Book, BookId, Genre, GenreId, ReadingHistoryEntry, Shelf},
    services::catalog::{CatalogSource, ReadingHistorySource},
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

const BOOK_COLUMNS: &str =
    "id, title, author, genre_id, average_rating, total_shelves, page_count";

#[derive(Debug, sqlx::FromRow)]
struct FinishedRow {
    book_id: BookId,
    genre_id: Option<GenreId>,
    finished_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
    cache: Cache,
    genre_cache_ttl: u64,
}

impl PgCatalog {
    pub fn new(pool: PgPool, cache: Cache, genre_cache_ttl: u64) -> Self {
        Self {
            pool,
            cache,
            genre_cache_ttl,
        }
    }

    /// Every genre with its display name
    pub async fn genre_directory(&self) -> AppResult<Vec<Genre>> {
        cached!(
            self.cache,
            CacheKey::GenreDirectory,
            self.genre_cache_ttl,
            async move {
                let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
                    .fetch_all(&self.pool)
                    .await?;

                tracing::debug!(genres = genres.len(), "Loaded genre directory");

                Ok::<_, crate::error::AppError>(genres)
            }
        )
    }
}

fn excluded_ids(exclude: &HashSet<BookId>) -> Vec<Uuid> {
    exclude.iter().map(|id| id.0).collect()
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait::async_trait]
impl CatalogSource for PgCatalog {
    async fn fetch_by_genres(
        &self,
        genre_ids: &[GenreId],
        exclude: &HashSet<BookId>,
        limit: usize,
    ) -> AppResult<Vec<Book>> {
        if genre_ids.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let genres: Vec<Uuid> = genre_ids.iter().map(|id| id.0).collect();
        let query = format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE genre_id = ANY($1) AND NOT (id = ANY($2))
            ORDER BY average_rating DESC, total_shelves DESC
            LIMIT $3
            "#
        );

        let books = sqlx::query_as::<_, Book>(&query)
            .bind(&genres)
            .bind(excluded_ids(exclude))
            .bind(sql_limit(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    async fn fetch_popular(&self, exclude: &HashSet<BookId>, limit: usize) -> AppResult<Vec<Book>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE NOT (id = ANY($1))
            ORDER BY total_shelves DESC, average_rating DESC
            LIMIT $2
            "#
        );

        let books = sqlx::query_as::<_, Book>(&query)
            .bind(excluded_ids(exclude))
            .bind(sql_limit(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    async fn fetch_random(&self, exclude: &HashSet<BookId>, limit: usize) -> AppResult<Vec<Book>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE NOT (id = ANY($1))
            ORDER BY random()
            LIMIT $2
            "#
        );

        let books = sqlx::query_as::<_, Book>(&query)
            .bind(excluded_ids(exclude))
            .bind(sql_limit(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

#[async_trait::async_trait]
impl ReadingHistorySource for PgCatalog {
    async fn finished_books(&self, user_id: Uuid) -> AppResult<Vec<ReadingHistoryEntry>> {
        let rows = sqlx::query_as::<_, FinishedRow>(
            r#"
            SELECT s.book_id, b.genre_id, s.finished_at
            FROM shelf_entries s
            JOIN books b ON b.id = s.book_id
            WHERE s.user_id = $1 AND s.shelf = $2
            ORDER BY s.finished_at DESC NULLS LAST
            "#,
        )
        .bind(user_id)
        .bind(Shelf::Read.as_str())
        .fetch_all(&self.pool)
        .await?;

        let directory: HashMap<GenreId, Genre> = self
            .genre_directory()
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let history = rows
            .into_iter()
            .map(|row| {
                let genre = row.genre_id.and_then(|id| {
                    let genre = directory.get(&id).cloned();
                    if genre.is_none() {
                        tracing::warn!(genre_id = %id, "Genre missing from directory");
                    }
                    genre
                });
                ReadingHistoryEntry {
                    book_id: row.book_id,
                    genre,
                    finished_at: row.finished_at,
                }
            })
            .collect();

        Ok(history)
    }
}
