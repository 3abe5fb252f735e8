use rand::{seq::SliceRandom, Rng};

use crate::models::{Book, ReasonDetails};

/// Options for [`generate_reason`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReasonOptions {
    /// Use the fixed cold-start/backfill template
    pub fallback: bool,
    /// Display name of the genre that surfaced the book
    pub matched_genre: Option<String>,
    /// How many books of `matched_genre` the user has finished
    pub read_count_for_genre: Option<u32>,
}

impl ReasonOptions {
    pub fn fallback() -> Self {
        Self {
            fallback: true,
            ..Self::default()
        }
    }

    pub fn matched(genre: impl Into<String>, read_count_for_genre: u32) -> Self {
        Self {
            fallback: false,
            matched_genre: Some(genre.into()),
            read_count_for_genre: Some(read_count_for_genre),
        }
    }
}

/// Headline templates for matched recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonTemplate {
    GenreAffinity,
    CommunityRating,
    Popularity,
    Similarity,
}

impl ReasonTemplate {
    const ALL: [ReasonTemplate; 4] = [
        ReasonTemplate::GenreAffinity,
        ReasonTemplate::CommunityRating,
        ReasonTemplate::Popularity,
        ReasonTemplate::Similarity,
    ];

    /// Whether the book and options carry what this template talks about
    pub fn applies_to(&self, book: &Book, options: &ReasonOptions) -> bool {
        match self {
            ReasonTemplate::GenreAffinity => options.matched_genre.is_some(),
            ReasonTemplate::CommunityRating => book.rating_signal() > 0.0,
            ReasonTemplate::Popularity => book.popularity_signal() > 0,
            ReasonTemplate::Similarity => true,
        }
    }

    fn render(&self, book: &Book, options: &ReasonOptions) -> String {
        match self {
            ReasonTemplate::GenreAffinity => {
                let genre = options.matched_genre.as_deref().unwrap_or("this genre");
                match options.read_count_for_genre.unwrap_or(0) {
                    0 => format!("Matches your interest in {}", genre),
                    1 => format!("You've finished a {} book", genre),
                    n => format!("You've finished {} {} books", n, genre),
                }
            }
            ReasonTemplate::CommunityRating => {
                format!("Readers rate it {:.1} out of 5", book.rating_signal())
            }
            ReasonTemplate::Popularity => match book.popularity_signal() {
                1 => "On another reader's shelf".to_string(),
                n => format!("On {} readers' shelves", n),
            },
            ReasonTemplate::Similarity => "Similar to books you've enjoyed".to_string(),
        }
    }
}

/// Headline reason plus the structured details behind it
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReason {
    pub reason: String,
    pub details: ReasonDetails,
}

/// Picks the headline template for a matched recommendation
///
/// Chosen uniformly among the templates that apply; the generic similarity
/// template always applies so there is always a candidate.
pub fn choose_template<R: Rng + ?Sized>(
    book: &Book,
    options: &ReasonOptions,
    rng: &mut R,
) -> ReasonTemplate {
    let applicable: Vec<ReasonTemplate> = ReasonTemplate::ALL
        .into_iter()
        .filter(|t| t.applies_to(book, options))
        .collect();

    applicable
        .choose(rng)
        .copied()
        .unwrap_or(ReasonTemplate::Similarity)
}

/// Builds the reason shown next to a recommended book
///
/// In fallback mode the text is fixed and only references the community
/// rating. Otherwise a template is drawn from `rng`, and the details carry
/// every signal whichever template was drawn.
pub fn generate_reason<R: Rng + ?Sized>(
    book: &Book,
    options: &ReasonOptions,
    rng: &mut R,
) -> GeneratedReason {
    if options.fallback {
        return GeneratedReason {
            reason: format!(
                "Popular with readers, rated {:.1} out of 5",
                book.rating_signal()
            ),
            details: ReasonDetails {
                fallback: Some(true),
                matched_genre: None,
                read_count_for_genre: None,
                community_rating: book.average_rating,
                popularity: book.total_shelves,
            },
        };
    }

    let template = choose_template(book, options, rng);

    GeneratedReason {
        reason: template.render(book, options),
        details: ReasonDetails {
            fallback: None,
            matched_genre: options.matched_genre.clone(),
            read_count_for_genre: options.read_count_for_genre,
            community_rating: book.average_rating,
            popularity: book.total_shelves,
        },
    }
}
