/// Google Books v1 catalog client
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::{Book, Volume, VolumeList},
    services::providers::{ensure_success, BookCatalog},
};

#[derive(Clone)]
pub struct GoogleBooksClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Cache,
    cache_ttl: u64,
}

impl GoogleBooksClient {
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Duration,
        cache: Cache,
        cache_ttl: u64,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
            cache_ttl,
        })
    }
}

#[async_trait::async_trait]
impl BookCatalog for GoogleBooksClient {
    async fn search_books(&self, query: &str) -> AppResult<Vec<Book>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        cached!(
            self.cache,
            CacheKey::BookSearch(query.to_string()),
            self.cache_ttl,
            async move {
                let url = format!("{}/volumes", self.api_url);
                let response = self
                    .http_client
                    .get(&url)
                    .query(&[("q", query), ("key", self.api_key.as_str())])
                    .send()
                    .await?;
                let response = ensure_success("Google Books", response).await?;

                let volumes: VolumeList = response.json().await?;
                let books: Vec<Book> = volumes
                    .items
                    .into_iter()
                    .filter_map(Volume::into_book)
                    .collect();

                tracing::info!(
                    query = %query,
                    results = books.len(),
                    provider = "google_books",
                    "Book search completed"
                );

                Ok::<_, AppError>(books)
            }
        )
    }

    fn name(&self) -> &'static str {
        "google_books"
    }
}
