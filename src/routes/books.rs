use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Book, BookRecommendation},
    routes::{parse_seed, required, AppState},
    services::summary,
};

const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Deserialize)]
pub struct BookSearchQuery {
    query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookRecommendQuery {
    mood: Option<String>,
    /// Blank means "use the clock"
    seed: Option<String>,
}

/// Handler for free-text book search
pub async fn search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BookSearchQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Book>>> {
    let Query(params) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let query = required(params.query, "query")?;

    let books = state.book_catalog()?.search_books(&query).await?;
    Ok(Json(books))
}

/// Handler for mood-based book recommendations
///
/// A failed summary is replaced by a placeholder rather than failing the request.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    query: Result<Query<BookRecommendQuery>, QueryRejection>,
) -> AppResult<Json<BookRecommendation>> {
    let Query(params) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let mood = required(params.mood, "mood")?;
    let seed = parse_seed(params.seed.as_deref())?;

    tracing::info!(request_id = %request_id, mood = %mood, seed, "Processing book recommendation request");

    let book = state.book_recommender()?.recommend(&mood, seed).await?;

    let description = book
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);
    let summary = summary::or_placeholder(state.summarizer()?.summarize_book(description).await);

    tracing::info!(request_id = %request_id, title = %book.title, "Book recommendation completed");

    Ok(Json(BookRecommendation { book, summary }))
}
