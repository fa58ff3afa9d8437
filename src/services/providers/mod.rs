/// External backend abstractions
///
/// The resolvers only talk to these traits. Each concrete client wraps one
/// HTTP API (OpenRouter for text generation, TMDB for movies, Google Books for
/// books) and can be swapped for a stub in tests.
use std::fmt::Display;

use crate::{
    error::{AppError, AppResult},
    models::{Book, TmdbMovie, TmdbMovieDetails},
};

pub mod google_books;
pub mod openrouter;
pub mod tmdb;

pub use google_books::GoogleBooksClient;
pub use openrouter::OpenRouterClient;
pub use tmdb::TmdbClient;

/// Text-generation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Completes a single user prompt with the given model
    ///
    /// Error payloads from the backend are returned as `AppError::ExternalApi`.
    async fn complete(&self, prompt: &str, model: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Movie metadata backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies by free-text query, most relevant first
    async fn search_movies(&self, query: &str) -> AppResult<Vec<TmdbMovie>>;

    /// Extended details including credits and videos
    async fn movie_details(&self, id: u64) -> AppResult<TmdbMovieDetails>;

    /// Genre-filtered browse used by the fallback path
    async fn discover_movies(&self, query: &DiscoverQuery) -> AppResult<Vec<TmdbMovie>>;

    fn name(&self) -> &'static str;
}

/// Book metadata backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookCatalog: Send + Sync {
    async fn search_books(&self, query: &str) -> AppResult<Vec<Book>>;

    fn name(&self) -> &'static str;
}

/// Parameters for a genre-filtered catalog browse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    /// Any of these genres matches
    pub genre_ids: Vec<u32>,
    /// 1-based result page
    pub page: u32,
    pub sort_by: SortOrder,
    pub min_vote_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PopularityDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PopularityDesc => "popularity.desc",
        }
    }
}

impl DiscoverQuery {
    /// TMDB `with_genres` value; `|` means OR
    pub fn genre_filter(&self) -> String {
        self.genre_ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl Display for DiscoverQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.genre_filter(),
            self.page,
            self.sort_by.as_str(),
            self.min_vote_count
        )
    }
}

/// Turns a non-success response into an `ExternalApi` error carrying the body
pub(crate) async fn ensure_success(
    provider: &str,
    response: reqwest::Response,
) -> AppResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::ExternalApi(format!(
        "{} API returned status {}: {}",
        provider, status, body
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_query_genre_filter() {
        let query = DiscoverQuery {
            genre_ids: vec![18, 35],
            page: 3,
            sort_by: SortOrder::PopularityDesc,
            min_vote_count: 100,
        };

        assert_eq!(query.genre_filter(), "18|35");
        assert_eq!(query.to_string(), "18|35:3:popularity.desc:100");
    }
}
