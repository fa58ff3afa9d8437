use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::Genre,
    routes::{required, AppState},
    services::{mood_taxonomy, prompts::MovieSummaryInput},
};

#[derive(Debug, Deserialize)]
pub struct MovieSummaryRequest {
    title: Option<String>,
    overview: Option<String>,
    mood: Option<String>,
    #[serde(default)]
    genres: Vec<Genre>,
    #[serde(default)]
    mood_keywords: Vec<String>,
    #[serde(default)]
    ai_reasons: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookSummaryRequest {
    description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Handler for movie summaries; keywords default to the mood's own list
pub async fn summarize_movie(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    body: Result<Json<MovieSummaryRequest>, JsonRejection>,
) -> AppResult<Json<SummaryResponse>> {
    let Json(request) = body.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let title = required(request.title, "title")?;
    let overview = required(request.overview, "overview")?;
    let mood = required(request.mood, "mood")?;

    let mood_keywords = if request.mood_keywords.is_empty() {
        mood_taxonomy::lookup(&mood).keywords
    } else {
        request.mood_keywords
    };

    tracing::info!(request_id = %request_id, title = %title, mood = %mood, "Summarizing movie");

    let input = MovieSummaryInput {
        title: &title,
        overview: &overview,
        genres: &request.genres,
        mood: &mood,
        mood_keywords: &mood_keywords,
        ai_reasons: &request.ai_reasons,
    };
    let summary = state.summarizer()?.summarize_movie(&input).await?;

    Ok(Json(SummaryResponse { summary }))
}

/// Handler for book description summaries
pub async fn summarize_book(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    body: Result<Json<BookSummaryRequest>, JsonRejection>,
) -> AppResult<Json<SummaryResponse>> {
    let Json(request) = body.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let description = required(request.description, "description")?;

    tracing::info!(
        request_id = %request_id,
        chars = description.len(),
        "Summarizing book description"
    );

    let summary = state.summarizer()?.summarize_book(&description).await?;

    Ok(Json(SummaryResponse { summary }))
}
