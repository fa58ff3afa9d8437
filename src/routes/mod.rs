use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    cache::Cache,
    config::{Config, RecommendationSettings, SummarySettings},
    error::{AppError, AppResult},
    middleware::{make_span_with_request_id, request_id_middleware},
    services::{
        providers::{
            BookCatalog, GoogleBooksClient, MovieCatalog, OpenRouterClient, TextGenerator,
            TmdbClient,
        },
        BookRecommender, MovieRecommender, Summarizer,
    },
};

pub mod books;
pub mod moods;
pub mod movies;
pub mod summarize;

/// Shared application state
///
/// Backends whose credentials are missing stay `None`; handlers that need
/// them answer with a configuration error instead of failing startup.
#[derive(Clone)]
pub struct AppState {
    pub text_generator: Option<Arc<dyn TextGenerator>>,
    pub movie_catalog: Option<Arc<dyn MovieCatalog>>,
    pub book_catalog: Option<Arc<dyn BookCatalog>>,
    pub recommendation_settings: Arc<RecommendationSettings>,
    pub summary_settings: Arc<SummarySettings>,
}

impl AppState {
    pub fn from_config(config: &Config, cache: Cache) -> anyhow::Result<Self> {
        let timeout = config.request_timeout();

        let text_generator: Option<Arc<dyn TextGenerator>> = match &config.openrouter_api_key {
            Some(key) => Some(Arc::new(OpenRouterClient::new(
                key.clone(),
                config.openrouter_api_url.clone(),
                timeout,
            )?)),
            None => None,
        };

        let movie_catalog: Option<Arc<dyn MovieCatalog>> =
            if config.tmdb_api_key.is_some() || config.tmdb_access_token.is_some() {
                Some(Arc::new(TmdbClient::new(
                    config.tmdb_api_key.clone(),
                    config.tmdb_access_token.clone(),
                    config.tmdb_api_url.clone(),
                    timeout,
                    cache.clone(),
                    config.catalog_cache_ttl_secs,
                )?))
            } else {
                None
            };

        let book_catalog: Option<Arc<dyn BookCatalog>> = match &config.google_books_api_key {
            Some(key) => Some(Arc::new(GoogleBooksClient::new(
                key.clone(),
                config.google_books_api_url.clone(),
                timeout,
                cache,
                config.catalog_cache_ttl_secs,
            )?)),
            None => None,
        };

        for (name, configured) in [
            ("openrouter", text_generator.is_some()),
            ("tmdb", movie_catalog.is_some()),
            ("google_books", book_catalog.is_some()),
        ] {
            if !configured {
                tracing::warn!(provider = name, "Credentials missing, endpoints using it will fail");
            }
        }

        Ok(Self {
            text_generator,
            movie_catalog,
            book_catalog,
            recommendation_settings: Arc::new(config.recommendation_settings()?),
            summary_settings: Arc::new(config.summary_settings()),
        })
    }

    fn require_text_generator(&self) -> AppResult<Arc<dyn TextGenerator>> {
        self.text_generator.clone().ok_or_else(|| {
            AppError::Configuration("Missing OPENROUTER_API_KEY environment variable".to_string())
        })
    }

    fn require_movie_catalog(&self) -> AppResult<Arc<dyn MovieCatalog>> {
        self.movie_catalog.clone().ok_or_else(|| {
            AppError::Configuration(
                "Missing TMDB API credentials in environment variables".to_string(),
            )
        })
    }

    fn require_book_catalog(&self) -> AppResult<Arc<dyn BookCatalog>> {
        self.book_catalog.clone().ok_or_else(|| {
            AppError::Configuration(
                "Missing GOOGLE_BOOKS_API_KEY environment variable".to_string(),
            )
        })
    }

    /// Catalog credentials are checked before the generator's
    pub fn movie_recommender(&self) -> AppResult<MovieRecommender> {
        let catalog = self.require_movie_catalog()?;
        let generator = self.require_text_generator()?;
        Ok(MovieRecommender::new(
            generator,
            catalog,
            self.recommendation_settings.clone(),
        ))
    }

    pub fn book_recommender(&self) -> AppResult<BookRecommender> {
        let catalog = self.require_book_catalog()?;
        let generator = self.require_text_generator()?;
        Ok(BookRecommender::new(
            generator,
            catalog,
            self.recommendation_settings.clone(),
        ))
    }

    pub fn book_catalog(&self) -> AppResult<Arc<dyn BookCatalog>> {
        self.require_book_catalog()
    }

    pub fn summarizer(&self) -> AppResult<Summarizer> {
        Ok(Summarizer::new(
            self.require_text_generator()?,
            self.summary_settings.clone(),
        ))
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/moods", get(moods::list))
        .route("/movies/recommend", get(movies::recommend))
        .route("/movies/summarize", post(summarize::summarize_movie))
        .route("/books", get(books::search))
        .route("/books/recommend", get(books::recommend))
        .route("/summarize", post(summarize::summarize_book))
}

async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Time-based seed used when the caller does not supply one
pub(crate) fn default_seed() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// An absent or blank seed means "use the clock"; other text must be an integer
pub(crate) fn parse_seed(value: Option<&str>) -> AppResult<i64> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default_seed()),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("seed must be an integer, got '{}'", raw))),
    }
}

/// Trims a required text parameter, rejecting blanks
pub(crate) fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("{} is required", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured_state() -> AppState {
        AppState {
            text_generator: None,
            movie_catalog: None,
            book_catalog: None,
            recommendation_settings: Arc::new(RecommendationSettings::default()),
            summary_settings: Arc::new(SummarySettings::default()),
        }
    }

    #[test]
    fn test_missing_catalog_reported_before_generator() {
        let err = unconfigured_state().movie_recommender().err().unwrap();
        assert!(err.to_string().contains("TMDB"));

        let err = unconfigured_state().summarizer().err().unwrap();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(Some(" 42 ")).unwrap(), 42);
        assert_eq!(parse_seed(Some("-7")).unwrap(), -7);

        let before = default_seed();
        assert!(parse_seed(Some("")).unwrap() >= before);
        assert!(parse_seed(None).unwrap() >= before);

        assert!(matches!(
            parse_seed(Some("tomorrow")),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required(Some("  happy ".into()), "mood").unwrap(), "happy");
        assert!(matches!(
            required(Some("   ".into()), "mood"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(required(None, "mood").is_err());
    }
}
