mod book;
mod history;
mod recommendation;

pub use book::{Book, BookId, Genre, GenreId};
pub use history::{GenreAffinity, GenreAffinityMap, ReadingHistoryEntry, Shelf};
pub use recommendation::{ReasonDetails, RecommendationEntry};
