use std::sync::Arc;

use crate::{
    config::RecommendationSettings,
    error::{AppError, AppResult},
    models::Book,
    services::{
        prompts,
        providers::{BookCatalog, TextGenerator},
        shuffle::select_index,
    },
};

/// Picks one book for a mood: a generated title first, a subject search otherwise
pub struct BookRecommender {
    generator: Arc<dyn TextGenerator>,
    catalog: Arc<dyn BookCatalog>,
    settings: Arc<RecommendationSettings>,
}

impl BookRecommender {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        catalog: Arc<dyn BookCatalog>,
        settings: Arc<RecommendationSettings>,
    ) -> Self {
        Self {
            generator,
            catalog,
            settings,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn recommend(&self, mood: &str, seed: i64) -> AppResult<Book> {
        match self.recommend_from_suggestion(mood).await {
            Ok(Some(book)) => return Ok(book),
            Ok(None) => tracing::info!("Suggested book not found, searching by subject"),
            Err(e) => tracing::warn!(error = %e, "Book suggestion failed, searching by subject"),
        }

        self.recommend_from_subject(mood, seed).await
    }

    async fn recommend_from_suggestion(&self, mood: &str) -> AppResult<Option<Book>> {
        let prompt = prompts::book_suggestion(mood);
        let reply = self
            .generator
            .complete(&prompt, self.settings.model_for(mood))
            .await?;

        let Some(title) = clean_title(&reply) else {
            return Ok(None);
        };

        tracing::debug!(title = %title, "Generated book title");
        let books = self.catalog.search_books(&title).await?;
        Ok(books.into_iter().next())
    }

    async fn recommend_from_subject(&self, mood: &str, seed: i64) -> AppResult<Book> {
        let query = format!("subject:{}", mood.trim().to_lowercase());
        let mut books = self.catalog.search_books(&query).await?;

        let index = select_index(books.len(), seed)
            .ok_or_else(|| AppError::NotFound("No books found for this mood".to_string()))?;
        Ok(books.swap_remove(index))
    }
}

/// First non-blank line of the reply without quotes, emphasis or a "Title:" label
fn clean_title(reply: &str) -> Option<String> {
    let line = reply.lines().map(str::trim).find(|line| !line.is_empty())?;
    let line = line
        .strip_prefix("Title:")
        .or_else(|| line.strip_prefix("title:"))
        .unwrap_or(line);
    let title = line
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '*' | '“' | '”' | '_'))
        .trim();

    (!title.is_empty()).then(|| title.to_string())
}
