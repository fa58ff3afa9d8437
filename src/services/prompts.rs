//! Prompt templates for the text generator

use crate::models::{Genre, MoodProfile};
use crate::services::shuffle;

/// Number of movies requested from the text generator
pub const SUGGESTION_COUNT: usize = 5;

const VARIATIONS: [&str; 3] = [
    "Include some well-known classics as well as a few less obvious choices.",
    "Include a mix of recent releases and timeless favorites.",
    "Include both mainstream and some critically-acclaimed but less known films.",
];

/// Phrasing variant picked by `seed mod 3`
pub fn variation_text(seed: i64) -> &'static str {
    VARIATIONS[shuffle::variation(seed, VARIATIONS.len())]
}

/// Prompt asking for a JSON list of movie suggestions for `mood`
pub fn movie_suggestions(mood: &str, profile: &MoodProfile, seed: i64) -> String {
    let genre_hint = profile.genre_hint.as_deref().unwrap_or("various genres");
    let examples = profile.example_titles.as_deref().unwrap_or("various movies");

    format!(
        r#"As a film expert, suggest {count} specific movies that would be perfect for someone in a "{mood}" mood.

A "{mood}" mood typically calls for {description}.
Genres that often work well for this mood include: {genre_hint}.
Examples of films that fit this mood well: {examples}.

{variation}

For each movie, provide:
1. Full title (exactly as it would appear in a database)
2. Year of release
3. Director (if notable)
4. 1-2 sentences on why it's perfect for a "{mood}" mood

Format your response as a JSON array with properties: title, year, director, reasons (array of strings).
Don't include any other text in your response except the valid JSON."#,
        count = SUGGESTION_COUNT,
        mood = mood.trim(),
        description = profile.description,
        variation = variation_text(seed),
    )
}

/// Inputs for the movie summary prompt
#[derive(Debug, Clone, Default)]
pub struct MovieSummaryInput<'a> {
    pub title: &'a str,
    pub overview: &'a str,
    pub genres: &'a [Genre],
    pub mood: &'a str,
    pub mood_keywords: &'a [String],
    pub ai_reasons: &'a [String],
}

/// Prompt for a short, spoiler-free summary tying a film to a mood
pub fn movie_summary(input: &MovieSummaryInput<'_>, profile: &MoodProfile) -> String {
    let mood = input.mood.trim().to_uppercase();
    let genre_list = input
        .genres
        .iter()
        .map(|genre| genre.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut details = format!(
        "- Title: {title}\n- Overview: {overview}\n- Genres: {genre_list}\n- Mood/Genre: {mood}\n- Mood description: {description}",
        title = input.title,
        overview = input.overview,
        description = profile.description,
    );

    if !input.ai_reasons.is_empty() {
        details.push_str("\n\nThe film has been selected for the following reasons:");
        for reason in input.ai_reasons {
            details.push_str("\n- ");
            details.push_str(reason);
        }
    }

    if !input.mood_keywords.is_empty() {
        details.push_str("\n- Mood keywords: ");
        details.push_str(&input.mood_keywords.join(", "));
    }

    format!(
        r#"You are tasked with creating a brief, engaging summary for the film "{title}" that highlights its connection to a {mood} mood/genre.

Film details:
{details}

Write a CONCISE summary (maximum 80-100 words) that:
1. Briefly highlights how the film creates a {mood} experience
2. Mentions 1-2 specific elements that contribute to this mood/genre
3. Explains why someone looking for this mood would enjoy it

Your summary should be engaging but avoid revealing major plot twists or spoilers. Focus on mood and atmosphere rather than detailed plot points.

Keep your response short, direct, and conversational in tone."#,
        title = input.title,
    )
}

/// Prompt asking for one book title
pub fn book_suggestion(mood: &str) -> String {
    format!(
        "Suggest one book title that reflects the mood: {}. Reply with the title only.",
        mood.trim()
    )
}

pub fn book_summary(description: &str) -> String {
    format!(
        "Summarize the following book description in a concise way:\n{}",
        description
    )
}
