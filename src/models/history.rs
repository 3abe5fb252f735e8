use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{BookId, Genre, GenreId};

/// Shelf a user has put a book on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shelf {
    WantToRead,
    CurrentlyReading,
    Read,
}

impl Shelf {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shelf::WantToRead => "want_to_read",
            Shelf::CurrentlyReading => "currently_reading",
            Shelf::Read => "read",
        }
    }
}

/// A book the user has finished, with the book's genre when it has one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingHistoryEntry {
    pub book_id: BookId,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

impl ReadingHistoryEntry {
    pub fn new(book_id: BookId, genre: Option<Genre>) -> Self {
        Self {
            book_id,
            genre,
            finished_at: None,
        }
    }
}

/// Finished-book count for one genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreAffinity {
    pub genre: Genre,
    pub read_count: u32,
}

/// How many finished books the user has per genre
#[derive(Debug, Clone, Default)]
pub struct GenreAffinityMap {
    counts: HashMap<GenreId, GenreAffinity>,
}

impl GenreAffinityMap {
    /// Counts finished books per genre; entries without a genre are ignored
    pub fn from_history(history: &[ReadingHistoryEntry]) -> Self {
        let mut counts: HashMap<GenreId, GenreAffinity> = HashMap::new();

        for genre in history.iter().filter_map(|entry| entry.genre.as_ref()) {
            counts
                .entry(genre.id)
                .and_modify(|affinity| affinity.read_count += 1)
                .or_insert_with(|| GenreAffinity {
                    genre: genre.clone(),
                    read_count: 1,
                });
        }

        Self { counts }
    }

    pub fn get(&self, genre_id: &GenreId) -> Option<&GenreAffinity> {
        self.counts.get(genre_id)
    }

    pub fn read_count(&self, genre_id: &GenreId) -> u32 {
        self.counts.get(genre_id).map_or(0, |a| a.read_count)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Genres ordered by read count (descending), at most `n` of them
    ///
    /// Ties are broken by display name and then id so the order is stable.
    pub fn top_genres(&self, n: usize) -> Vec<&GenreAffinity> {
        let mut ranked: Vec<&GenreAffinity> = self.counts.values().collect();
        ranked.sort_by(|a, b| {
            b.read_count
                .cmp(&a.read_count)
                .then_with(|| a.genre.name.cmp(&b.genre.name))
                .then_with(|| a.genre.id.cmp(&b.genre.id))
        });
        ranked.truncate(n);
        ranked
    }
}
