pub mod catalog;
pub mod reasons;
pub mod recommendations;
pub mod scoring;
pub mod selection;

pub use reasons::{generate_reason, GeneratedReason, ReasonOptions, ReasonTemplate};
pub use scoring::{calculate_match_score, MatchSignals};
pub use selection::{select_recommendations, SelectionConfig, SelectionState};
