use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// TMDB genre as returned in movie details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// A title suggested by the text generator, not yet checked against the catalog
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Candidate {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub reasons: Vec<String>,
}

impl Candidate {
    /// Catalog query for the first lookup: title plus year when known
    pub fn search_query(&self) -> String {
        match &self.year {
            Some(year) => format!("{} {}", self.title, year),
            None => self.title.clone(),
        }
    }
}

/// Models sometimes emit years as numbers and sometimes as strings
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Accepts `null`, a single string, or an array of strings
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Movie details as presented to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: Option<String>,
    pub vote_average: f64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genres: Vec<Genre>,
    pub trailer_key: Option<String>,
    pub director: Option<String>,
    pub cast: Vec<String>,
}

/// Which stage of the resolver produced a recommendation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Ai,
    GenreFallback,
}

/// The single movie returned for a mood
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationResult {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub mood_keywords: Vec<String>,
    pub ai_reasons: Vec<String>,
    pub source: RecommendationSource,
}

// ============================================================================
// TMDB API Types
// ============================================================================

const CAST_LIMIT: usize = 5;

/// Movie entry from /search/movie and /discover/movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Paged list response shared by search and discover
#[derive(Debug, Deserialize)]
pub struct TmdbMovieList {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// Response of /movie/{id}?append_to_response=videos,credits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbMovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub videos: Option<TmdbVideos>,
    #[serde(default)]
    pub credits: Option<TmdbCredits>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbVideos {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbVideo {
    #[serde(rename = "type")]
    pub video_type: String,
    pub site: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbCastMember {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbCrewMember {
    pub job: String,
    pub name: String,
}

impl TmdbMovieDetails {
    /// First YouTube trailer, if any
    pub fn trailer_key(&self) -> Option<&str> {
        self.videos
            .as_ref()?
            .results
            .iter()
            .find(|video| video.video_type == "Trailer" && video.site == "YouTube")
            .map(|video| video.key.as_str())
    }

    pub fn director(&self) -> Option<&str> {
        self.credits
            .as_ref()?
            .crew
            .iter()
            .find(|member| member.job == "Director")
            .map(|member| member.name.as_str())
    }
}

impl From<TmdbMovieDetails> for CatalogItem {
    fn from(details: TmdbMovieDetails) -> Self {
        let trailer_key = details.trailer_key().map(str::to_string);
        let director = details.director().map(str::to_string);
        let cast = details
            .credits
            .map(|credits| {
                credits
                    .cast
                    .into_iter()
                    .take(CAST_LIMIT)
                    .map(|member| member.name)
                    .collect()
            })
            .unwrap_or_default();

        CatalogItem {
            id: details.id,
            title: details.title,
            overview: details.overview.unwrap_or_default(),
            release_date: details.release_date.filter(|d| !d.is_empty()),
            vote_average: details.vote_average,
            poster_path: details.poster_path,
            backdrop_path: details.backdrop_path,
            genres: details.genres,
            trailer_key,
            director,
            cast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details_json() -> &'static str {
        r#"{
            "id": 694,
            "title": "The Shining",
            "overview": "Jack Torrance accepts a caretaker job at the Overlook Hotel.",
            "release_date": "1980-05-23",
            "vote_average": 8.2,
            "poster_path": "/poster.jpg",
            "backdrop_path": "/backdrop.jpg",
            "genres": [{"id": 27, "name": "Horror"}, {"id": 53, "name": "Thriller"}],
            "videos": {"results": [
                {"type": "Featurette", "site": "YouTube", "key": "feat1"},
                {"type": "Trailer", "site": "Vimeo", "key": "vimeo1"},
                {"type": "Trailer", "site": "YouTube", "key": "yt-trailer"}
            ]},
            "credits": {
                "cast": [
                    {"name": "Jack Nicholson"}, {"name": "Shelley Duvall"},
                    {"name": "Danny Lloyd"}, {"name": "Scatman Crothers"},
                    {"name": "Barry Nelson"}, {"name": "Philip Stone"}
                ],
                "crew": [
                    {"job": "Producer", "name": "Jan Harlan"},
                    {"job": "Director", "name": "Stanley Kubrick"}
                ]
            }
        }"#
    }

    #[test]
    fn test_details_to_catalog_item() {
        let details: TmdbMovieDetails = serde_json::from_str(details_json()).unwrap();
        let item = CatalogItem::from(details);

        assert_eq!(item.id, 694);
        assert_eq!(item.trailer_key.as_deref(), Some("yt-trailer"));
        assert_eq!(item.director.as_deref(), Some("Stanley Kubrick"));
        assert_eq!(item.cast.len(), 5);
        assert_eq!(item.cast[0], "Jack Nicholson");
        assert_eq!(item.genres[0].name, "Horror");
        assert_eq!(item.release_date.as_deref(), Some("1980-05-23"));
    }

    #[test]
    fn test_details_without_credits_or_videos() {
        let details: TmdbMovieDetails =
            serde_json::from_str(r#"{"id": 1, "title": "Bare", "release_date": ""}"#).unwrap();
        let item = CatalogItem::from(details);

        assert_eq!(item.trailer_key, None);
        assert_eq!(item.director, None);
        assert!(item.cast.is_empty());
        assert_eq!(item.release_date, None);
        assert_eq!(item.overview, "");
    }

    #[test]
    fn test_candidate_accepts_numeric_and_string_years() {
        let candidates: Vec<Candidate> = serde_json::from_str(
            r#"[
                {"title": "Get Out", "year": 2017, "director": "Jordan Peele", "reasons": ["Tense"]},
                {"title": "Hereditary", "year": "2018", "director": null, "reasons": "Grief"},
                {"title": "The Thing"}
            ]"#,
        )
        .unwrap();

        assert_eq!(candidates[0].year.as_deref(), Some("2017"));
        assert_eq!(candidates[0].search_query(), "Get Out 2017");
        assert_eq!(candidates[1].year.as_deref(), Some("2018"));
        assert_eq!(candidates[1].director, None);
        assert_eq!(candidates[1].reasons, vec!["Grief".to_string()]);
        assert_eq!(candidates[2].year, None);
        assert_eq!(candidates[2].search_query(), "The Thing");
        assert!(candidates[2].reasons.is_empty());
    }

    #[test]
    fn test_recommendation_result_flattens_item() {
        let details: TmdbMovieDetails = serde_json::from_str(details_json()).unwrap();
        let result = RecommendationResult {
            item: CatalogItem::from(details),
            mood_keywords: vec!["chilling".to_string()],
            ai_reasons: vec![],
            source: RecommendationSource::GenreFallback,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["title"], "The Shining");
        assert_eq!(json["trailer_key"], "yt-trailer");
        assert_eq!(json["mood_keywords"][0], "chilling");
        assert_eq!(json["source"], "genre_fallback");
    }
}
