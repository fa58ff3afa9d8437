use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    config::{CandidateSelection, RecommendationSettings},
    error::{AppError, AppResult},
    models::{
        Candidate, CatalogItem, MoodProfile, RecommendationResult, RecommendationSource, TmdbMovie,
    },
    services::{
        candidates::parse_candidates,
        mood_taxonomy, prompts,
        providers::{DiscoverQuery, MovieCatalog, SortOrder, TextGenerator},
        shuffle::{select_index, shuffle},
    },
};

const UNKNOWN_DIRECTOR: &str = "Unknown";
const FALLBACK_PAGES: usize = 5;

/// Titles the caller has already been shown, compared case-insensitively
#[derive(Debug, Clone, Default)]
pub struct SeenTitles(HashSet<String>);

impl SeenTitles {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            titles
                .into_iter()
                .map(|title| normalize_title(title.as_ref()))
                .filter(|title| !title.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(&normalize_title(title))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Result of checking one suggestion against the catalog
enum CandidateOutcome {
    Found(CatalogItem),
    NotFound,
}

/// Picks one movie for a mood
///
/// Asks the text generator for suggestions and validates them against the
/// catalog in seeded order; the first one the catalog knows wins. When the
/// suggestion stage yields nothing, browses the mood's genres instead.
pub struct MovieRecommender {
    generator: Arc<dyn TextGenerator>,
    catalog: Arc<dyn MovieCatalog>,
    settings: Arc<RecommendationSettings>,
}

impl MovieRecommender {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        catalog: Arc<dyn MovieCatalog>,
        settings: Arc<RecommendationSettings>,
    ) -> Self {
        Self {
            generator,
            catalog,
            settings,
        }
    }

    /// Recommends one movie; only the genre fallback's failures reach the caller
    #[tracing::instrument(skip(self, seen), fields(excluded = seen.len()))]
    pub async fn recommend(
        &self,
        mood: &str,
        seed: i64,
        seen: &SeenTitles,
    ) -> AppResult<RecommendationResult> {
        let profile = mood_taxonomy::lookup(mood);

        match self
            .recommend_from_suggestions(mood, &profile, seed, seen)
            .await
        {
            Ok(Some(result)) => return Ok(result),
            Ok(None) => {
                tracing::info!("No suggested movie resolved in the catalog, using genre fallback")
            }
            Err(e) => {
                tracing::warn!(error = %e, "AI recommendation failed, using genre fallback")
            }
        }

        self.recommend_from_genres(&profile, seed, seen).await
    }

    /// `Ok(None)` when every candidate missed the catalog
    async fn recommend_from_suggestions(
        &self,
        mood: &str,
        profile: &MoodProfile,
        seed: i64,
        seen: &SeenTitles,
    ) -> AppResult<Option<RecommendationResult>> {
        let prompt = prompts::movie_suggestions(mood, profile, seed);
        let model = self.settings.model_for(&profile.key);

        let reply = self.generator.complete(&prompt, model).await?;
        let candidates = parse_candidates(&reply)?;
        let suggested = candidates.len();
        let ordered = self.order_candidates(candidates, seed, seen);

        tracing::info!(
            model = %model,
            suggested,
            to_try = ordered.len(),
            "Parsed movie suggestions"
        );

        for candidate in ordered {
            match self.resolve_candidate(&candidate).await {
                CandidateOutcome::Found(item) => {
                    tracing::info!(
                        title = %item.title,
                        movie_id = item.id,
                        "Suggested movie resolved"
                    );
                    return Ok(Some(from_suggestion(item, candidate, profile)));
                }
                CandidateOutcome::NotFound => {
                    tracing::debug!(title = %candidate.title, "Suggested movie not in catalog");
                }
            }
        }

        Ok(None)
    }

    fn order_candidates(
        &self,
        candidates: Vec<Candidate>,
        seed: i64,
        seen: &SeenTitles,
    ) -> Vec<Candidate> {
        let fresh: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !seen.contains(&candidate.title))
            .collect();

        match self.settings.selection {
            CandidateSelection::Shuffle => shuffle(fresh, seed),
            CandidateSelection::Single => match select_index(fresh.len(), seed) {
                Some(index) => fresh.into_iter().skip(index).take(1).collect(),
                None => Vec::new(),
            },
        }
    }

    /// Catalog failures for a single candidate only rule out that candidate
    async fn resolve_candidate(&self, candidate: &Candidate) -> CandidateOutcome {
        match self.lookup_candidate(candidate).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    title = %candidate.title,
                    error = %e,
                    catalog = self.catalog.name(),
                    "Catalog lookup failed for candidate"
                );
                CandidateOutcome::NotFound
            }
        }
    }

    async fn lookup_candidate(&self, candidate: &Candidate) -> AppResult<CandidateOutcome> {
        let mut results = self.catalog.search_movies(&candidate.search_query()).await?;

        if results.is_empty() && candidate.year.is_some() {
            results = self.catalog.search_movies(&candidate.title).await?;
        }

        let Some(top) = results.into_iter().next() else {
            return Ok(CandidateOutcome::NotFound);
        };

        let details = self.catalog.movie_details(top.id).await?;
        Ok(CandidateOutcome::Found(CatalogItem::from(details)))
    }

    async fn recommend_from_genres(
        &self,
        profile: &MoodProfile,
        seed: i64,
        seen: &SeenTitles,
    ) -> AppResult<RecommendationResult> {
        let query = DiscoverQuery {
            genre_ids: mood_taxonomy::fallback_genre_ids(profile),
            page: fallback_page(seed),
            sort_by: SortOrder::PopularityDesc,
            min_vote_count: self.settings.min_vote_count,
        };

        let movies = self.catalog.discover_movies(&query).await?;
        let pool = prefer_unseen(&movies, seen);

        let index = select_index(pool.len(), seed)
            .ok_or_else(|| AppError::NotFound("No movies found for this mood".to_string()))?;
        let selected = pool[index];

        tracing::info!(
            genres = %query.genre_filter(),
            page = query.page,
            results = movies.len(),
            title = %selected.title,
            "Genre fallback selected a movie"
        );

        let details = self.catalog.movie_details(selected.id).await?;
        let mut item = CatalogItem::from(details);
        item.director
            .get_or_insert_with(|| UNKNOWN_DIRECTOR.to_string());

        Ok(RecommendationResult {
            item,
            mood_keywords: profile.keywords.clone(),
            ai_reasons: Vec::new(),
            source: RecommendationSource::GenreFallback,
        })
    }
}

/// `(seed mod 5) + 1`, so repeated requests page through popular titles
fn fallback_page(seed: i64) -> u32 {
    select_index(FALLBACK_PAGES, seed).unwrap_or(0) as u32 + 1
}

/// Unseen movies, or all of them when everything has been seen
fn prefer_unseen<'a>(movies: &'a [TmdbMovie], seen: &SeenTitles) -> Vec<&'a TmdbMovie> {
    let fresh: Vec<&TmdbMovie> = movies
        .iter()
        .filter(|movie| !seen.contains(&movie.title))
        .collect();

    if fresh.is_empty() {
        movies.iter().collect()
    } else {
        fresh
    }
}

/// Director preference: the suggestion's, then the catalog crew's, then "Unknown"
fn from_suggestion(
    mut item: CatalogItem,
    candidate: Candidate,
    profile: &MoodProfile,
) -> RecommendationResult {
    let director = candidate
        .director
        .or_else(|| item.director.take())
        .unwrap_or_else(|| UNKNOWN_DIRECTOR.to_string());
    item.director = Some(director);

    RecommendationResult {
        item,
        mood_keywords: profile.keywords.clone(),
        ai_reasons: candidate.reasons,
        source: RecommendationSource::Ai,
    }
}
