use std::sync::Arc;

use crate::{
    config::SummarySettings,
    error::{AppError, AppResult},
    services::{
        mood_taxonomy,
        prompts::{self, MovieSummaryInput},
        providers::TextGenerator,
    },
};

/// Shown in place of a summary when generation fails
pub const SUMMARY_PLACEHOLDER: &str = "Failed to generate summary.";

/// Short mood-aware summaries for movies and books
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
    settings: Arc<SummarySettings>,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: Arc<SummarySettings>) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Any generator failure surfaces as `SummaryUnavailable`
    pub async fn summarize_movie(&self, input: &MovieSummaryInput<'_>) -> AppResult<String> {
        let profile = mood_taxonomy::lookup(input.mood);
        let prompt = prompts::movie_summary(input, &profile);

        tracing::debug!(title = %input.title, mood = %profile.key, "Generating movie summary");

        self.generate(&prompt, &self.settings.movie_model).await
    }

    pub async fn summarize_book(&self, description: &str) -> AppResult<String> {
        let prompt = prompts::book_summary(description);
        self.generate(&prompt, &self.settings.book_model).await
    }

    async fn generate(&self, prompt: &str, model: &str) -> AppResult<String> {
        match self.generator.complete(prompt, model).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => Err(AppError::SummaryUnavailable(
                "generator returned an empty summary".to_string(),
            )),
            Err(e) => {
                tracing::warn!(
                    model = %model,
                    provider = self.generator.name(),
                    error = %e,
                    "Summary generation failed"
                );
                Err(AppError::SummaryUnavailable(e.to_string()))
            }
        }
    }
}

/// Collapses a failed summary into [`SUMMARY_PLACEHOLDER`]
pub fn or_placeholder(result: AppResult<String>) -> String {
    result.unwrap_or_else(|_| SUMMARY_PLACEHOLDER.to_string())
}
