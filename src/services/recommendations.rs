use rand::Rng;
use serde::Serialize;
use std::time::Instant;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::RecommendationEntry,
    services::{
        catalog::{CatalogSource, ReadingHistorySource},
        selection::{select_recommendations, SelectionConfig},
    },
};

/// Recommendations for one user, ready to serialize
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub recommendations: Vec<RecommendationEntry>,
    pub count: usize,
    /// The user had too little history for genre matching
    pub cold_start: bool,
}

/// Generates personalized book recommendations
///
/// Loads the user's finished books, then runs the tiered selection pipeline
/// against the catalog. Data source failures are returned unchanged.
pub async fn get_recommendations<R: Rng + Send>(
    history_source: &dyn ReadingHistorySource,
    catalog: &dyn CatalogSource,
    config: &SelectionConfig,
    user_id: Uuid,
    limit: usize,
    rng: &mut R,
) -> AppResult<RecommendationSet> {
    let start = Instant::now();

    let history = history_source.finished_books(user_id).await?;
    let cold_start = config.is_cold_start(&history);

    tracing::info!(
        user_id = %user_id,
        finished = history.len(),
        cold_start,
        catalog = catalog.name(),
        "Selecting recommendations"
    );

    let recommendations = select_recommendations(&history, limit, catalog, config, rng).await?;

    tracing::info!(
        user_id = %user_id,
        count = recommendations.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Recommendations ready"
    );

    Ok(RecommendationSet {
        count: recommendations.len(),
        recommendations,
        cold_start,
    })
}
