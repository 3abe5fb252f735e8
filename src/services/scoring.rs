/// Base score for recommendations backed by the user's own reading
pub const DEFAULT_BASE_SCORE: f64 = 65.0;
/// Base score for cold-start and backfill recommendations
pub const FALLBACK_BASE_SCORE: f64 = 60.0;

pub const MIN_MATCH_SCORE: f64 = 50.0;
pub const MAX_MATCH_SCORE: f64 = 98.0;

const RATING_MULTIPLIER: f64 = 4.0;
const RATING_BONUS_CAP: f64 = 20.0;
const SHELVES_PER_POPULARITY_POINT: f64 = 100.0;
const POPULARITY_BONUS_CAP: f64 = 10.0;
const GENRE_MULTIPLIER: f64 = 3.0;
const GENRE_BOOST_CAP: f64 = 10.0;

/// Signals blended into a match score
///
/// Every field is optional; missing values count as zero and `base` falls back
/// to [`DEFAULT_BASE_SCORE`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchSignals {
    pub average_rating: Option<f64>,
    pub total_shelves: Option<u64>,
    pub read_count_for_genre: Option<u32>,
    pub base: Option<f64>,
}

impl MatchSignals {
    pub fn new(average_rating: f64, total_shelves: u64) -> Self {
        Self {
            average_rating: Some(average_rating),
            total_shelves: Some(total_shelves),
            ..Self::default()
        }
    }

    pub fn with_genre_count(mut self, read_count_for_genre: u32) -> Self {
        self.read_count_for_genre = Some(read_count_for_genre);
        self
    }

    pub fn with_base(mut self, base: f64) -> Self {
        self.base = Some(base);
        self
    }
}

/// Blends rating, popularity and genre affinity into a match percentage
///
/// Each bonus is capped on its own and the sum is clamped to `[50, 98]`, so the
/// result never claims certainty and never looks dismissive. It is a display
/// value, not a probability.
pub fn calculate_match_score(signals: MatchSignals) -> u8 {
    let rating = non_negative(signals.average_rating.unwrap_or(0.0));
    let shelves = signals.total_shelves.unwrap_or(0) as f64;
    let genre_count = signals.read_count_for_genre.unwrap_or(0);
    let base = signals
        .base
        .filter(|b| b.is_finite())
        .unwrap_or(DEFAULT_BASE_SCORE);

    let rating_bonus = (rating * RATING_MULTIPLIER).min(RATING_BONUS_CAP);
    let popularity_bonus = (shelves / SHELVES_PER_POPULARITY_POINT).min(POPULARITY_BONUS_CAP);
    let genre_boost = if genre_count > 0 {
        (f64::from(genre_count) * GENRE_MULTIPLIER).min(GENRE_BOOST_CAP)
    } else {
        0.0
    };

    let raw = base + rating_bonus + popularity_bonus + genre_boost;

    raw.clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE).round() as u8
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
