use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    routes::AppState,
    services::recommendations::{self, RecommendationSet},
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

/// Handler for the per-user recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationSet>> {
    let limit = params.limit.unwrap_or(state.default_limit);

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        limit,
        "Processing recommendation request"
    );

    let mut rng = StdRng::from_entropy();
    let result = recommendations::get_recommendations(
        state.history.as_ref(),
        state.catalog.as_ref(),
        &state.selection,
        user_id,
        limit,
        &mut rng,
    )
    .await;

    match result {
        Ok(set) => Ok(Json(set)),
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                user_id = %user_id,
                error = %e,
                "Recommendation request failed"
            );
            Err(e)
        }
    }
}
