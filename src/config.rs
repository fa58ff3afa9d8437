use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

/// How the resolver walks the AI suggestion list
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSelection {
    /// Try every candidate in seeded-shuffle order until one resolves
    #[default]
    Shuffle,
    /// Try only the candidate at `seed mod count`
    Single,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenRouter API key for recommendation and summary prompts
    #[serde(default)]
    pub openrouter_api_key: Option<String>,

    /// OpenRouter API base URL
    #[serde(default = "default_openrouter_api_url")]
    pub openrouter_api_url: String,

    /// TMDB v3 API key (sent as the `api_key` query parameter)
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB read access token (sent as a bearer token)
    #[serde(default)]
    pub tmdb_access_token: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Google Books API key
    #[serde(default)]
    pub google_books_api_key: Option<String>,

    /// Google Books API base URL
    #[serde(default = "default_google_books_api_url")]
    pub google_books_api_url: String,

    /// Model used for movie and book suggestions
    #[serde(default = "default_recommendation_model")]
    pub recommendation_model: String,

    /// Model used for movie summaries
    #[serde(default = "default_movie_summary_model")]
    pub movie_summary_model: String,

    /// Model used for book description summaries
    #[serde(default = "default_recommendation_model")]
    pub book_summary_model: String,

    /// Per-mood recommendation model overrides, e.g. `horror=model-a,comedy=model-b`
    #[serde(default)]
    pub mood_models: Option<String>,

    #[serde(default)]
    pub candidate_selection: CandidateSelection,

    /// Minimum TMDB vote count for fallback discovery
    #[serde(default = "default_min_vote_count")]
    pub min_vote_count: u32,

    /// Timeout applied to every outbound request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Redis connection URL; catalog caching is disabled when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    #[serde(default = "default_catalog_cache_ttl_secs")]
    pub catalog_cache_ttl_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_openrouter_api_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_google_books_api_url() -> String {
    "https://www.googleapis.com/books/v1".to_string()
}

fn default_recommendation_model() -> String {
    "deepseek/deepseek-chat:free".to_string()
}

fn default_movie_summary_model() -> String {
    "mistralai/mistral-nemo".to_string()
}

fn default_min_vote_count() -> u32 {
    100
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_catalog_cache_ttl_secs() -> u64 {
    3600
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Settings handed to the movie and book resolvers at construction
#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    pub default_model: String,
    pub mood_models: HashMap<String, String>,
    pub selection: CandidateSelection,
    pub min_vote_count: u32,
}

impl RecommendationSettings {
    /// Model for a mood, honouring the per-mood overrides
    pub fn model_for(&self, mood: &str) -> &str {
        self.mood_models
            .get(&mood.trim().to_lowercase())
            .map(String::as_str)
            .unwrap_or(&self.default_model)
    }
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_model: default_recommendation_model(),
            mood_models: HashMap::new(),
            selection: CandidateSelection::default(),
            min_vote_count: default_min_vote_count(),
        }
    }
}

/// Settings handed to the summary generator at construction
#[derive(Debug, Clone)]
pub struct SummarySettings {
    pub movie_model: String,
    pub book_model: String,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            movie_model: default_movie_summary_model(),
            book_model: default_recommendation_model(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn recommendation_settings(&self) -> anyhow::Result<RecommendationSettings> {
        let mood_models = match &self.mood_models {
            Some(raw) => parse_mood_models(raw)?,
            None => HashMap::new(),
        };

        Ok(RecommendationSettings {
            default_model: self.recommendation_model.clone(),
            mood_models,
            selection: self.candidate_selection,
            min_vote_count: self.min_vote_count,
        })
    }

    pub fn summary_settings(&self) -> SummarySettings {
        SummarySettings {
            movie_model: self.movie_summary_model.clone(),
            book_model: self.book_summary_model.clone(),
        }
    }
}

/// Parses `mood=model` pairs separated by commas; mood keys are lowercased
fn parse_mood_models(raw: &str) -> anyhow::Result<HashMap<String, String>> {
    let mut models = HashMap::new();

    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (mood, model) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid MOOD_MODELS entry '{}'", pair))?;

        let (mood, model) = (mood.trim(), model.trim());
        if mood.is_empty() || model.is_empty() {
            anyhow::bail!("Invalid MOOD_MODELS entry '{}'", pair);
        }

        models.insert(mood.to_lowercase(), model.to_string());
    }

    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mood_models() {
        let models = parse_mood_models("Horror=model-a, comedy = model-b,").unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models["horror"], "model-a");
        assert_eq!(models["comedy"], "model-b");
    }

    #[test]
    fn test_parse_mood_models_rejects_missing_separator() {
        assert!(parse_mood_models("horror").is_err());
        assert!(parse_mood_models("horror=").is_err());
    }

    #[test]
    fn test_model_for_falls_back_to_default() {
        let mut settings = RecommendationSettings::default();
        settings
            .mood_models
            .insert("horror".to_string(), "scary-model".to_string());

        assert_eq!(settings.model_for("HORROR"), "scary-model");
        assert_eq!(settings.model_for("happy"), "deepseek/deepseek-chat:free");
    }

    #[test]
    fn test_candidate_selection_deserialization() {
        let selection: CandidateSelection = serde_json::from_str(r#""single""#).unwrap();
        assert_eq!(selection, CandidateSelection::Single);
        assert_eq!(CandidateSelection::default(), CandidateSelection::Shuffle);
    }
}
