use serde::Serialize;

/// Everything the prompts and the genre fallback need to know about a mood
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodProfile {
    /// Lowercased mood key, e.g. "horror"
    pub key: String,
    /// Noun phrase describing the films that fit the mood
    pub description: String,
    /// Primary TMDB genre ids, in priority order
    pub genre_ids: Vec<u32>,
    pub keywords: Vec<String>,
    /// Human-readable genres that suit the mood, used in prompts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_hint: Option<String>,
    /// Well-known titles that exemplify the mood, used in prompts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_titles: Option<String>,
    #[serde(skip)]
    pub is_default: bool,
}

impl MoodProfile {
    /// Generic profile for moods missing from the taxonomy
    ///
    /// The key is normalised for lookups; the description keeps the caller's wording.
    pub fn fallback(mood: &str) -> Self {
        let mood = mood.trim();
        Self {
            description: format!("movies that would make someone feel {}", mood),
            key: mood.to_lowercase(),
            genre_ids: Vec::new(),
            keywords: Vec::new(),
            genre_hint: None,
            example_titles: None,
            is_default: true,
        }
    }
}
