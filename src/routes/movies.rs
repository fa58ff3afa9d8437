use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::RecommendationResult,
    routes::{parse_seed, required, AppState},
    services::SeenTitles,
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    mood: Option<String>,
    /// Blank means "use the clock"
    seed: Option<String>,
    /// Comma-separated titles already shown to the caller
    exclude: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MovieRecommendationResponse {
    pub movie: RecommendationResult,
}

/// Handler for mood-based movie recommendations
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    query: Result<Query<RecommendQuery>, QueryRejection>,
) -> AppResult<Json<MovieRecommendationResponse>> {
    let Query(params) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let mood = required(params.mood, "mood")?;
    let seed = parse_seed(params.seed.as_deref())?;
    let seen = SeenTitles::new(params.exclude.as_deref().unwrap_or_default().split(','));

    tracing::info!(
        request_id = %request_id,
        mood = %mood,
        seed,
        excluded = seen.len(),
        "Processing movie recommendation request"
    );

    let movie = state.movie_recommender()?.recommend(&mood, seed, &seen).await?;

    tracing::info!(
        request_id = %request_id,
        title = %movie.item.title,
        source = ?movie.source,
        "Movie recommendation completed"
    );

    Ok(Json(MovieRecommendationResponse { movie }))
}
