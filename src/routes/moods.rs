use axum::Json;
use serde::Serialize;

use crate::services::mood_taxonomy;

#[derive(Debug, Serialize)]
pub struct MoodSummary {
    pub key: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Lists every known mood
pub async fn list() -> Json<Vec<MoodSummary>> {
    let moods = mood_taxonomy::all_moods()
        .into_iter()
        .map(|profile| MoodSummary {
            key: profile.key,
            description: profile.description,
            keywords: profile.keywords,
        })
        .collect();

    Json(moods)
}
