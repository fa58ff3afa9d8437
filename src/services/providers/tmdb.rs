/// TMDB v3 movie catalog client
///
/// API Flow:
/// 1. Search: /search/movie?query= → ranked movie list
/// 2. Details: /movie/{id}?append_to_response=videos,credits → trailer, crew, cast
/// 3. Discover: /discover/movie?with_genres=&page=&sort_by=&vote_count.gte= → fallback browse
///
/// Authenticates with the v3 `api_key` query parameter, a v4 read access token
/// sent as a bearer token, or both.
use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder};

use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::{TmdbMovie, TmdbMovieDetails, TmdbMovieList},
    services::providers::{ensure_success, DiscoverQuery, MovieCatalog},
};

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: Option<String>,
    access_token: Option<String>,
    api_url: String,
    cache: Cache,
    cache_ttl: u64,
}

impl TmdbClient {
    pub fn new(
        api_key: Option<String>,
        access_token: Option<String>,
        api_url: String,
        timeout: Duration,
        cache: Cache,
        cache_ttl: u64,
    ) -> AppResult<Self> {
        if api_key.is_none() && access_token.is_none() {
            return Err(AppError::Configuration(
                "Missing TMDB API credentials in environment variables".to_string(),
            ));
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            access_token,
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
            cache_ttl,
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let mut request = self.http_client.get(format!("{}{}", self.api_url, path));

        if let Some(api_key) = &self.api_key {
            request = request.query(&[("api_key", api_key.as_str())]);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        request
    }

    async fn fetch_list(&self, request: RequestBuilder) -> AppResult<Vec<TmdbMovie>> {
        let response = ensure_success("TMDB", request.send().await?).await?;
        let list: TmdbMovieList = response.json().await?;
        Ok(list.results)
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<TmdbMovie>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        cached!(
            self.cache,
            CacheKey::MovieSearch(query.to_string()),
            self.cache_ttl,
            async move {
                let request = self
                    .get("/search/movie")
                    .query(&[("query", query), ("include_adult", "false")]);
                let movies = self.fetch_list(request).await?;

                tracing::info!(
                    query = %query,
                    results = movies.len(),
                    provider = "tmdb",
                    "Movie search completed"
                );

                Ok::<_, AppError>(movies)
            }
        )
    }

    async fn movie_details(&self, id: u64) -> AppResult<TmdbMovieDetails> {
        cached!(
            self.cache,
            CacheKey::MovieDetails(id),
            self.cache_ttl,
            async move {
                let request = self
                    .get(&format!("/movie/{}", id))
                    .query(&[("append_to_response", "videos,credits")]);
                let response = ensure_success("TMDB", request.send().await?).await?;
                let details: TmdbMovieDetails = response.json().await?;

                tracing::debug!(movie_id = id, title = %details.title, "Movie details fetched");

                Ok::<_, AppError>(details)
            }
        )
    }

    async fn discover_movies(&self, query: &DiscoverQuery) -> AppResult<Vec<TmdbMovie>> {
        cached!(
            self.cache,
            CacheKey::Discover(query.to_string()),
            self.cache_ttl,
            async move {
                let page = query.page.to_string();
                let min_votes = query.min_vote_count.to_string();
                let request = self.get("/discover/movie").query(&[
                    ("with_genres", query.genre_filter().as_str()),
                    ("page", page.as_str()),
                    ("sort_by", query.sort_by.as_str()),
                    ("vote_count.gte", min_votes.as_str()),
                ]);
                let movies = self.fetch_list(request).await?;

                tracing::info!(
                    genres = %query.genre_filter(),
                    page = query.page,
                    results = movies.len(),
                    provider = "tmdb",
                    "Discover completed"
                );

                Ok::<_, AppError>(movies)
            }
        )
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
