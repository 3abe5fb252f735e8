use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Identifier of a book in the catalog
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a genre
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct GenreId(pub Uuid);

impl GenreId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GenreId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A genre with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GenreId::new(),
            name: name.into(),
        }
    }
}

/// A catalog book as handed to the recommendation engine
///
/// `average_rating` is expected in `[0, 5]` and `total_shelves` counts how many
/// readers added the book to any shelf. Neither is validated here: scoring
/// treats out-of-range values leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre_id: Option<GenreId>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_shelves: i64,
    #[serde(default)]
    pub page_count: Option<i32>,
}

impl Book {
    /// Creates a book with no ratings, shelves or genre
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: None,
            genre_id: None,
            average_rating: 0.0,
            total_shelves: 0,
            page_count: None,
        }
    }

    pub fn with_genre(mut self, genre_id: GenreId) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    pub fn with_rating(mut self, average_rating: f64) -> Self {
        self.average_rating = average_rating;
        self
    }

    pub fn with_shelves(mut self, total_shelves: i64) -> Self {
        self.total_shelves = total_shelves;
        self
    }

    /// Rating as a scoring signal: non-finite and negative values count as zero
    pub fn rating_signal(&self) -> f64 {
        if self.average_rating.is_finite() && self.average_rating > 0.0 {
            self.average_rating
        } else {
            0.0
        }
    }

    /// Shelf count as a scoring signal: negative values count as zero
    pub fn popularity_signal(&self) -> u64 {
        self.total_shelves.max(0) as u64
    }
}
