use rand::Rng;
use std::collections::HashSet;

use crate::{
    error::AppResult,
    models::{Book, BookId, GenreAffinityMap, GenreId, ReadingHistoryEntry, RecommendationEntry},
    services::{
        catalog::CatalogSource,
        reasons::{generate_reason, ReasonOptions},
        scoring::{calculate_match_score, MatchSignals, FALLBACK_BASE_SCORE},
    },
};

/// Share of a cold-start list drawn from the popularity ranking
pub const POPULARITY_SHARE: f64 = 0.7;
/// How many of the user's genres feed the genre tier
pub const TOP_GENRE_COUNT: usize = 3;
pub const MIN_LIMIT: usize = 12;
pub const MAX_LIMIT: usize = 18;
/// Users with fewer finished books than this get cold-start recommendations
pub const COLD_START_THRESHOLD: usize = 3;
/// Popularity backfill asks for this many times the shortfall
pub const BACKFILL_OVERFETCH: usize = 2;

/// Tunables of the candidate selection pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub popularity_share: f64,
    pub top_genre_count: usize,
    pub min_limit: usize,
    pub max_limit: usize,
    pub cold_start_threshold: usize,
    pub backfill_overfetch: usize,
    pub fallback_base: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            popularity_share: POPULARITY_SHARE,
            top_genre_count: TOP_GENRE_COUNT,
            min_limit: MIN_LIMIT,
            max_limit: MAX_LIMIT,
            cold_start_threshold: COLD_START_THRESHOLD,
            backfill_overfetch: BACKFILL_OVERFETCH,
            fallback_base: FALLBACK_BASE_SCORE,
        }
    }
}

impl SelectionConfig {
    /// Bounds a requested size; `max_limit` wins if the bounds are inverted
    pub fn clamp_limit(&self, requested: usize) -> usize {
        requested.max(self.min_limit).min(self.max_limit)
    }

    /// Whether a history is too thin for genre affinity
    pub fn is_cold_start(&self, history: &[ReadingHistoryEntry]) -> bool {
        let distinct: HashSet<BookId> = history.iter().map(|entry| entry.book_id).collect();
        distinct.len() < self.cold_start_threshold
    }

    /// Number of cold-start slots filled from the popularity ranking
    pub fn popular_slots(&self, limit: usize) -> usize {
        let share = self.popularity_share.clamp(0.0, 1.0);
        ((limit as f64 * share).ceil() as usize).min(limit)
    }
}

/// Pipeline stage that produced a candidate, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    ColdStartPopular,
    ColdStartRandom,
    GenreAffinity,
    PopularBackfill,
    RandomBackfill,
}

/// Accepted entries plus every id that may no longer be picked
///
/// Starts out excluding the user's finished books. Each tier consumes the
/// state and hands back a new one, so later tiers always see the ids earlier
/// tiers picked.
#[derive(Debug, Clone)]
pub struct SelectionState {
    limit: usize,
    entries: Vec<RecommendationEntry>,
    excluded: HashSet<BookId>,
}

impl SelectionState {
    pub fn new(limit: usize, finished: impl IntoIterator<Item = BookId>) -> Self {
        Self {
            limit,
            entries: Vec::with_capacity(limit),
            excluded: finished.into_iter().collect(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.entries.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    pub fn excluded(&self) -> &HashSet<BookId> {
        &self.excluded
    }

    /// Appends candidates in order, skipping excluded ids, until full
    pub fn absorb<F>(mut self, books: Vec<Book>, mut to_entry: F) -> Self
    where
        F: FnMut(Book) -> RecommendationEntry,
    {
        for book in books {
            if self.is_full() {
                break;
            }
            if !self.excluded.insert(book.id) {
                tracing::trace!(book_id = %book.id, "Skipping excluded candidate");
                continue;
            }
            self.entries.push(to_entry(book));
        }
        self
    }

    pub fn into_entries(self) -> Vec<RecommendationEntry> {
        self.entries
    }
}

/// Entry for cold-start and backfill candidates
fn fallback_entry<R: Rng>(
    book: Book,
    config: &SelectionConfig,
    rng: &mut R,
) -> RecommendationEntry {
    let generated = generate_reason(&book, &ReasonOptions::fallback(), rng);
    let match_score = calculate_match_score(
        MatchSignals::new(book.rating_signal(), book.popularity_signal())
            .with_base(config.fallback_base),
    );

    RecommendationEntry {
        book,
        reason: generated.reason,
        reason_details: generated.details,
        match_score,
    }
}

/// Entry for a candidate surfaced by one of the user's genres
fn genre_entry<R: Rng>(
    book: Book,
    affinity: &GenreAffinityMap,
    rng: &mut R,
) -> RecommendationEntry {
    let matched = book.genre_id.and_then(|id| affinity.get(&id));
    let options = match matched {
        Some(a) => ReasonOptions::matched(a.genre.name.clone(), a.read_count),
        None => ReasonOptions::default(),
    };
    let read_count = book.genre_id.map_or(0, |id| affinity.read_count(&id));

    let generated = generate_reason(&book, &options, rng);
    let match_score = calculate_match_score(
        MatchSignals::new(book.rating_signal(), book.popularity_signal())
            .with_genre_count(read_count),
    );

    RecommendationEntry {
        book,
        reason: generated.reason,
        reason_details: generated.details,
        match_score,
    }
}

fn log_tier(tier: Tier, requested: usize, fetched: usize, state: &SelectionState) {
    tracing::debug!(
        tier = ?tier,
        requested,
        fetched,
        selected = state.len(),
        limit = state.limit(),
        "Selection tier complete"
    );
}

/// Popularity-ranked share followed by a random sample, all fallback entries
async fn cold_start_tier<R: Rng + Send>(
    state: SelectionState,
    catalog: &dyn CatalogSource,
    config: &SelectionConfig,
    rng: &mut R,
) -> AppResult<SelectionState> {
    let requested = config.popular_slots(state.limit());
    let popular = catalog.fetch_popular(state.excluded(), requested).await?;
    let fetched = popular.len();
    let state = state.absorb(popular, |book| fallback_entry(book, config, rng));
    log_tier(Tier::ColdStartPopular, requested, fetched, &state);

    if state.is_full() {
        return Ok(state);
    }

    let requested = state.remaining();
    let sample = catalog.fetch_random(state.excluded(), requested).await?;
    let fetched = sample.len();
    let state = state.absorb(sample, |book| fallback_entry(book, config, rng));
    log_tier(Tier::ColdStartRandom, requested, fetched, &state);

    Ok(state)
}

/// Best-rated unread books from the user's top genres
async fn genre_tier<R: Rng + Send>(
    state: SelectionState,
    affinity: &GenreAffinityMap,
    catalog: &dyn CatalogSource,
    config: &SelectionConfig,
    rng: &mut R,
) -> AppResult<SelectionState> {
    let top_genres: Vec<GenreId> = affinity
        .top_genres(config.top_genre_count)
        .iter()
        .map(|a| a.genre.id)
        .collect();

    if top_genres.is_empty() || state.is_full() {
        return Ok(state);
    }

    let requested = state.remaining();
    let books = catalog
        .fetch_by_genres(&top_genres, state.excluded(), requested)
        .await?;
    let fetched = books.len();
    let state = state.absorb(books, |book| genre_entry(book, affinity, rng));
    log_tier(Tier::GenreAffinity, requested, fetched, &state);

    Ok(state)
}

/// Fills the gap from the popularity ranking, over-fetching to absorb skips
async fn popular_backfill<R: Rng + Send>(
    state: SelectionState,
    catalog: &dyn CatalogSource,
    config: &SelectionConfig,
    rng: &mut R,
) -> AppResult<SelectionState> {
    if state.is_full() {
        return Ok(state);
    }

    let requested = state.remaining().saturating_mul(config.backfill_overfetch.max(1));
    let books = catalog.fetch_popular(state.excluded(), requested).await?;
    let fetched = books.len();
    let state = state.absorb(books, |book| fallback_entry(book, config, rng));
    log_tier(Tier::PopularBackfill, requested, fetched, &state);

    Ok(state)
}

/// Last resort: a random sample for whatever slots are left
async fn random_backfill<R: Rng + Send>(
    state: SelectionState,
    catalog: &dyn CatalogSource,
    config: &SelectionConfig,
    rng: &mut R,
) -> AppResult<SelectionState> {
    if state.is_full() {
        return Ok(state);
    }

    let requested = state.remaining();
    let books = catalog.fetch_random(state.excluded(), requested).await?;
    let fetched = books.len();
    let state = state.absorb(books, |book| fallback_entry(book, config, rng));
    log_tier(Tier::RandomBackfill, requested, fetched, &state);

    Ok(state)
}

/// Picks up to `limit` books for a user, best candidates first
///
/// `limit` is clamped to the configured range. Users below the cold-start
/// threshold get popular and random picks; everyone else gets books from
/// their top genres, backfilled from the popularity ranking and then a random
/// sample. Finished books and duplicates never appear. A catalog too small to
/// fill the list is not an error, but any accessor failure is returned as is.
pub async fn select_recommendations<R: Rng + Send>(
    history: &[ReadingHistoryEntry],
    limit: usize,
    catalog: &dyn CatalogSource,
    config: &SelectionConfig,
    rng: &mut R,
) -> AppResult<Vec<RecommendationEntry>> {
    let limit = config.clamp_limit(limit);
    let state = SelectionState::new(limit, history.iter().map(|entry| entry.book_id));
    let cold_start = config.is_cold_start(history);

    let state = if cold_start {
        cold_start_tier(state, catalog, config, rng).await?
    } else {
        let affinity = GenreAffinityMap::from_history(history);
        let state = genre_tier(state, &affinity, catalog, config, rng).await?;
        let state = popular_backfill(state, catalog, config, rng).await?;
        random_backfill(state, catalog, config, rng).await?
    };

    if !state.is_full() {
        tracing::info!(
            selected = state.len(),
            limit,
            "Catalog exhausted before reaching the limit"
        );
    }

    tracing::debug!(
        finished = history.len(),
        cold_start,
        selected = state.len(),
        "Recommendations selected"
    );

    Ok(state.into_entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::Genre;
    use crate::services::catalog::{memory::CatalogSeed, InMemoryCatalog, MockCatalogSource};
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    fn finished(books: &[&Book], genre: Option<&Genre>) -> Vec<ReadingHistoryEntry> {
        books
            .iter()
            .map(|b| ReadingHistoryEntry::new(b.id, genre.cloned()))
            .collect()
    }

    fn assert_unique_and_unread(entries: &[RecommendationEntry], history: &[ReadingHistoryEntry]) {
        let ids: HashSet<BookId> = entries.iter().map(|e| e.book.id).collect();
        assert_eq!(ids.len(), entries.len(), "duplicate book in recommendations");
        for entry in history {
            assert!(!ids.contains(&entry.book_id), "finished book recommended");
        }
    }

    /// 20 untagged books, book `i` has `(i + 1) * 100` shelves
    fn popularity_catalog() -> (InMemoryCatalog, Vec<Book>) {
        let books: Vec<Book> = (0..20)
            .map(|i| {
                Book::new(format!("Book {}", i))
                    .with_rating(3.0 + f64::from(i % 5) * 0.4)
                    .with_shelves((i64::from(i) + 1) * 100)
            })
            .collect();
        let seed = CatalogSeed {
            genres: Vec::new(),
            books: books.clone(),
            shelves: Vec::new(),
        };
        (
            InMemoryCatalog::with_rng(seed, StdRng::seed_from_u64(11)),
            books,
        )
    }

    fn mock_catalog() -> MockCatalogSource {
        let mut mock = MockCatalogSource::new();
        mock.expect_name().return_const("mock");
        mock
    }

    #[test]
    fn test_config_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.clamp_limit(0), 12);
        assert_eq!(config.clamp_limit(15), 15);
        assert_eq!(config.clamp_limit(100), 18);
        assert_eq!(config.popular_slots(12), 9);
        assert_eq!(config.popular_slots(18), 13);
        assert_eq!(config.top_genre_count, 3);
        assert_eq!(config.fallback_base, 60.0);
    }

    #[test]
    fn test_cold_start_counts_distinct_books() {
        let config = SelectionConfig::default();
        let book = Book::new("Reread");
        let history = finished(&[&book, &book, &book], None);
        assert!(config.is_cold_start(&history));

        let others = [Book::new("A"), Book::new("B"), Book::new("C")];
        let history = finished(&others.iter().collect::<Vec<_>>(), None);
        assert!(!config.is_cold_start(&history));
    }

    #[test]
    fn test_absorb_skips_excluded_and_stops_when_full() {
        let read = Book::new("Read");
        let books: Vec<Book> = (0..5).map(|i| Book::new(format!("B{}", i))).collect();
        let state = SelectionState::new(3, [read.id]);

        let mut candidates = vec![read.clone(), books[0].clone(), books[0].clone()];
        candidates.extend(books[1..].iter().cloned());

        let mut rng = rng();
        let config = SelectionConfig::default();
        let state = state.absorb(candidates, |b| fallback_entry(b, &config, &mut rng));

        assert!(state.is_full());
        let titles: Vec<String> = state
            .into_entries()
            .into_iter()
            .map(|e| e.book.title)
            .collect();
        assert_eq!(titles, vec!["B0", "B1", "B2"]);
    }

    #[tokio::test]
    async fn test_cold_start_new_user() {
        let (catalog, books) = popularity_catalog();
        let config = SelectionConfig::default();

        let entries = select_recommendations(&[], 12, &catalog, &config, &mut rng())
            .await
            .unwrap();

        assert_eq!(entries.len(), 12);
        assert_unique_and_unread(&entries, &[]);
        assert!(entries.iter().all(|e| e.reason_details.is_fallback()));

        // the first nine come from the popularity ranking, most shelved first
        let expected: Vec<BookId> = books.iter().rev().take(9).map(|b| b.id).collect();
        let actual: Vec<BookId> = entries.iter().take(9).map(|e| e.book.id).collect();
        assert_eq!(actual, expected);

        // fallback scores use base 60: Book 19 has 4.6 stars and 2000 shelves
        assert_eq!(entries[0].match_score, 88);
    }

    #[tokio::test]
    async fn test_cold_start_excludes_finished_books() {
        let (catalog, books) = popularity_catalog();
        let history = finished(&[&books[19], &books[18]], None);

        let entries = select_recommendations(
            &history,
            12,
            &catalog,
            &SelectionConfig::default(),
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 12);
        assert_unique_and_unread(&entries, &history);
        assert_eq!(entries[0].book.id, books[17].id);
    }

    #[tokio::test]
    async fn test_genre_tier_reports_matched_genre() {
        let scifi = Genre::new("Sci-Fi");
        let romance = Genre::new("Romance");

        let read_scifi: Vec<Book> = (0..5)
            .map(|i| Book::new(format!("Read SF {}", i)).with_genre(scifi.id))
            .collect();
        let read_romance = Book::new("Read Romance").with_genre(romance.id);
        let unread_scifi: Vec<Book> = (0..6)
            .map(|i| {
                Book::new(format!("SF {}", i))
                    .with_genre(scifi.id)
                    .with_rating(4.0 + f64::from(i) * 0.1)
                    .with_shelves(50)
            })
            .collect();
        let unread_romance: Vec<Book> = (0..2)
            .map(|i| {
                Book::new(format!("Romance {}", i))
                    .with_genre(romance.id)
                    .with_rating(3.5)
                    .with_shelves(40)
            })
            .collect();
        let others: Vec<Book> = (0..10)
            .map(|i| Book::new(format!("Other {}", i)).with_shelves(1_000 + i64::from(i)))
            .collect();

        let mut history = finished(&read_scifi.iter().collect::<Vec<_>>(), Some(&scifi));
        history.extend(finished(&[&read_romance], Some(&romance)));

        let mut all_books = Vec::new();
        all_books.extend(read_scifi.iter().cloned());
        all_books.push(read_romance.clone());
        all_books.extend(unread_scifi.iter().cloned());
        all_books.extend(unread_romance.iter().cloned());
        all_books.extend(others.iter().cloned());

        let catalog = InMemoryCatalog::with_rng(
            CatalogSeed {
                genres: vec![scifi.clone(), romance.clone()],
                books: all_books,
                shelves: Vec::new(),
            },
            StdRng::seed_from_u64(3),
        );

        let entries = select_recommendations(
            &history,
            12,
            &catalog,
            &SelectionConfig::default(),
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 12);
        assert_unique_and_unread(&entries, &history);

        // six Sci-Fi books outrank the romance ones on rating
        for entry in &entries[..6] {
            assert_eq!(entry.reason_details.matched_genre.as_deref(), Some("Sci-Fi"));
            assert_eq!(entry.reason_details.read_count_for_genre, Some(5));
            assert!(!entry.reason_details.is_fallback());
        }
        assert_eq!(entries[0].book.title, "SF 5");

        for entry in &entries[6..8] {
            assert_eq!(entry.reason_details.matched_genre.as_deref(), Some("Romance"));
            assert_eq!(entry.reason_details.read_count_for_genre, Some(1));
        }

        // the rest is popularity backfill
        for entry in &entries[8..] {
            assert!(entry.reason_details.is_fallback());
            assert!(entry.book.title.starts_with("Other"));
        }
        assert_eq!(entries[8].book.title, "Other 9");

        // 65 + 4.5*4 + 0.5 + 10 = 93.5 -> 94
        assert_eq!(entries[0].match_score, 94);
    }

    #[tokio::test]
    async fn test_small_catalog_returns_what_it_has() {
        let genre = Genre::new("Poetry");
        let read: Vec<Book> = (0..3)
            .map(|i| Book::new(format!("Read {}", i)).with_genre(genre.id))
            .collect();
        let unread: Vec<Book> = (0..4)
            .map(|i| Book::new(format!("Unread {}", i)).with_shelves(i64::from(i)))
            .collect();

        let mut books = read.clone();
        books.extend(unread.iter().cloned());
        let catalog = InMemoryCatalog::new(CatalogSeed {
            genres: vec![genre.clone()],
            books,
            shelves: Vec::new(),
        });

        let history = finished(&read.iter().collect::<Vec<_>>(), Some(&genre));
        let entries = select_recommendations(
            &history,
            18,
            &catalog,
            &SelectionConfig::default(),
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 4);
        assert_unique_and_unread(&entries, &history);
    }

    #[test]
    fn test_inverted_limit_bounds_do_not_panic() {
        let config = SelectionConfig {
            min_limit: 18,
            max_limit: 12,
            ..SelectionConfig::default()
        };
        assert_eq!(config.clamp_limit(0), 12);
        assert_eq!(config.clamp_limit(15), 12);
        assert_eq!(config.clamp_limit(40), 12);
    }

    #[tokio::test]
    async fn test_inverted_limit_bounds_select_max_limit() {
        let (catalog, _) = popularity_catalog();
        let config = SelectionConfig {
            min_limit: 18,
            max_limit: 12,
            ..SelectionConfig::default()
        };

        let entries = select_recommendations(&[], 15, &catalog, &config, &mut rng())
            .await
            .unwrap();
        assert_eq!(entries.len(), 12);
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        let (catalog, _) = popularity_catalog();
        let config = SelectionConfig::default();

        let entries = select_recommendations(&[], 3, &catalog, &config, &mut rng())
            .await
            .unwrap();
        assert_eq!(entries.len(), 12);

        let entries = select_recommendations(&[], 50, &catalog, &config, &mut rng())
            .await
            .unwrap();
        assert_eq!(entries.len(), 18);
    }

    #[tokio::test]
    async fn test_random_backfill_fills_remaining_slots() {
        let genre = Genre::new("Drama");
        let read: Vec<Book> = (0..3)
            .map(|i| Book::new(format!("Read {}", i)).with_genre(genre.id))
            .collect();
        let history = finished(&read.iter().collect::<Vec<_>>(), Some(&genre));
        let popular: Vec<Book> = (0..5).map(|i| Book::new(format!("Popular {}", i))).collect();
        let random: Vec<Book> = (0..7).map(|i| Book::new(format!("Random {}", i))).collect();

        let mut catalog = mock_catalog();
        catalog
            .expect_fetch_by_genres()
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        let popular_books = popular.clone();
        catalog
            .expect_fetch_popular()
            .withf(|_, limit| *limit == 24)
            .times(1)
            .returning(move |_, _| Ok(popular_books.clone()));
        let random_books = random.clone();
        catalog
            .expect_fetch_random()
            .withf(|exclude, limit| exclude.len() == 8 && *limit == 7)
            .times(1)
            .returning(move |_, _| Ok(random_books.clone()));

        let entries = select_recommendations(
            &history,
            12,
            &catalog,
            &SelectionConfig::default(),
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 12);
        assert!(entries.iter().all(|e| e.reason_details.is_fallback()));
        assert_eq!(entries[5].book.title, "Random 0");
    }

    #[tokio::test]
    async fn test_misbehaving_catalog_is_deduplicated() {
        let read = [Book::new("R0"), Book::new("R1"), Book::new("R2")];
        let history = finished(&read.iter().collect::<Vec<_>>(), None);
        let fresh: Vec<Book> = (0..12).map(|i| Book::new(format!("Fresh {}", i))).collect();

        let mut candidates = vec![read[0].clone(), fresh[0].clone(), fresh[0].clone()];
        candidates.extend(fresh[1..].iter().cloned());

        let mut catalog = mock_catalog();
        catalog.expect_fetch_by_genres().times(0);
        catalog
            .expect_fetch_popular()
            .times(1)
            .returning(move |_, _| Ok(candidates.clone()));
        catalog.expect_fetch_random().times(0);

        let entries = select_recommendations(
            &history,
            12,
            &catalog,
            &SelectionConfig::default(),
            &mut rng(),
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 12);
        assert_unique_and_unread(&entries, &history);
    }

    #[tokio::test]
    async fn test_catalog_failure_propagates() {
        let genre = Genre::new("Horror");
        let read: Vec<Book> = (0..4)
            .map(|i| Book::new(format!("Read {}", i)).with_genre(genre.id))
            .collect();
        let history = finished(&read.iter().collect::<Vec<_>>(), Some(&genre));

        let mut catalog = mock_catalog();
        catalog
            .expect_fetch_by_genres()
            .withf(move |genres, exclude, limit| {
                genres.len() == 1 && genres[0] == genre.id && exclude.len() == 4 && *limit == 12
            })
            .times(1)
            .returning(|_, _, _| Err(AppError::DataSource("catalog offline".to_string())));
        catalog.expect_fetch_popular().times(0);
        catalog.expect_fetch_random().times(0);

        let result = select_recommendations(
            &history,
            12,
            &catalog,
            &SelectionConfig::default(),
            &mut rng(),
        )
        .await;

        assert!(matches!(result, Err(AppError::DataSource(msg)) if msg == "catalog offline"));
    }

    #[tokio::test]
    async fn test_cold_start_failure_in_random_draw_propagates() {
        let mut catalog = mock_catalog();
        catalog
            .expect_fetch_popular()
            .withf(|_, limit| *limit == 9)
            .times(1)
            .returning(|_, _| Ok(vec![Book::new("Only one")]));
        catalog
            .expect_fetch_random()
            .withf(|exclude, limit| exclude.len() == 1 && *limit == 11)
            .times(1)
            .returning(|_, _| Err(AppError::DataSource("sampler down".to_string())));

        let result = select_recommendations(
            &[],
            12,
            &catalog,
            &SelectionConfig::default(),
            &mut rng(),
        )
        .await;

        assert!(matches!(result, Err(AppError::DataSource(_))));
    }
}
