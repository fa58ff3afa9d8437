//! Canonical mood table
//!
//! One entry per mood the front-end can send. Emotional moods (happy, scared, ...)
//! carry genre hints and example titles for the suggestion prompt; genre moods
//! (horror, western, ...) only carry a description and keywords.

use crate::models::MoodProfile;

/// Drama and Comedy, used when a mood maps to no genres
pub const DEFAULT_GENRE_IDS: [u32; 2] = [18, 35];

struct MoodEntry {
    key: &'static str,
    description: &'static str,
    genre_ids: &'static [u32],
    keywords: &'static [&'static str],
    genre_hint: Option<&'static str>,
    example_titles: Option<&'static str>,
}

const MOODS: &[MoodEntry] = &[
    // Emotional moods
    MoodEntry {
        key: "happy",
        description: "joyful, uplifting, and light-hearted movies that leave viewers feeling good",
        genre_ids: &[35],
        keywords: &["uplifting", "cheerful", "joyful", "funny", "light-hearted"],
        genre_hint: Some("Comedy, Family, Animation, Musical"),
        example_titles: Some("The Lego Movie, Singin' in the Rain, Toy Story, School of Rock"),
    },
    MoodEntry {
        key: "sad",
        description: "emotionally moving, melancholic films that may evoke tears or deep emotions",
        genre_ids: &[18],
        keywords: &["emotional", "moving", "tragic", "somber", "poignant"],
        genre_hint: Some("Drama, Romance (with tragic elements), War"),
        example_titles: Some("The Shawshank Redemption, Schindler's List, Life is Beautiful"),
    },
    MoodEntry {
        key: "excited",
        description: "thrilling, high-energy, and adrenaline-pumping films with intense action",
        genre_ids: &[28],
        keywords: &["thrilling", "high-energy", "adrenaline-pumping", "intense", "action-packed"],
        genre_hint: Some("Action, Adventure, Sci-Fi, Superhero"),
        example_titles: Some("Mad Max: Fury Road, Die Hard, Mission Impossible series"),
    },
    MoodEntry {
        key: "relaxed",
        description: "calm, peaceful films with beautiful scenery or gentle storytelling",
        genre_ids: &[12],
        keywords: &["calm", "peaceful", "laid-back", "soothing", "gentle"],
        genre_hint: Some("Documentary, Nature, Gentle Comedy, Slice-of-Life"),
        example_titles: Some("The Secret Life of Walter Mitty, Chef, Lost in Translation"),
    },
    MoodEntry {
        key: "romantic",
        description: "heartfelt love stories with emotional relationships at their center",
        genre_ids: &[10749],
        keywords: &["love", "passionate", "heartwarming", "emotional", "intimate"],
        genre_hint: Some("Romance, Romantic Comedy, Drama with love stories"),
        example_titles: Some("The Notebook, Before Sunrise, When Harry Met Sally"),
    },
    MoodEntry {
        key: "scared",
        description: "frightening, tense horror or thriller films designed to create fear",
        genre_ids: &[27],
        keywords: &["frightening", "terrifying", "chilling", "creepy", "unsettling"],
        genre_hint: Some("Horror, Supernatural, Psychological Thriller"),
        example_titles: Some("The Shining, Get Out, A Quiet Place, Hereditary"),
    },
    MoodEntry {
        key: "thoughtful",
        description: "philosophical, intellectually stimulating films that make viewers think",
        genre_ids: &[878, 18],
        keywords: &["profound", "philosophical", "thought-provoking", "deep", "intelligent"],
        genre_hint: Some("Drama, Sci-Fi with philosophical themes, Arthouse"),
        example_titles: Some("Inception, Arrival, The Matrix, Eternal Sunshine of the Spotless Mind"),
    },
    MoodEntry {
        key: "mysterious",
        description: "enigmatic films with puzzles, secrets, or detective elements",
        genre_ids: &[9648],
        keywords: &["enigmatic", "puzzling", "suspenseful", "intriguing", "twisty"],
        genre_hint: Some("Mystery, Thriller, Crime, Detective"),
        example_titles: Some("Knives Out, Gone Girl, Memento, The Prestige"),
    },
    MoodEntry {
        key: "adventurous",
        description: "journey-filled movies with exploration, discovery, and action",
        genre_ids: &[12],
        keywords: &["epic", "journey", "exploration", "quest", "discovery"],
        genre_hint: Some("Adventure, Action, Fantasy, Expedition films"),
        example_titles: Some("Indiana Jones series, The Lord of the Rings, Pirates of the Caribbean"),
    },
    MoodEntry {
        key: "nostalgic",
        description: "films that evoke memories of the past or have a timeless quality",
        genre_ids: &[36],
        keywords: &["classic", "reminiscent", "memorable", "timeless", "retro"],
        genre_hint: Some("Period Dramas, Coming-of-Age, Classic films"),
        example_titles: Some("The Sandlot, Stand By Me, Back to the Future"),
    },
    MoodEntry {
        key: "inspired",
        description: "motivational stories often based on real achievements or overcoming obstacles",
        genre_ids: &[99, 18],
        keywords: &["motivational", "encouraging", "true story", "uplifting", "triumphant"],
        genre_hint: Some("Biographical, Sports, Underdog stories"),
        example_titles: Some("The Pursuit of Happyness, Rocky, Hidden Figures"),
    },
    MoodEntry {
        key: "tense",
        description: "suspenseful films that keep viewers on the edge of their seats",
        genre_ids: &[53],
        keywords: &["suspenseful", "edge-of-seat", "gripping", "nail-biting", "riveting"],
        genre_hint: Some("Thriller, Crime, Psychological Suspense"),
        example_titles: Some("No Country for Old Men, Sicario, Prisoners"),
    },
    MoodEntry {
        key: "funny",
        description: "comedies focused on humor and laughter with jokes and amusing situations",
        genre_ids: &[35],
        keywords: &["hilarious", "laugh-out-loud", "comedic", "witty", "amusing"],
        genre_hint: Some("Comedy, Slapstick, Satire, Rom-Com"),
        example_titles: Some("Superbad, Bridesmaids, The Hangover, Shaun of the Dead"),
    },
    MoodEntry {
        key: "epic",
        description: "grand, sweeping tales with large-scale stories, often in fantasy or historical settings",
        genre_ids: &[14, 12],
        keywords: &["grand", "sweeping", "monumental", "majestic", "vast"],
        genre_hint: Some("Fantasy, Historical Epic, War, Mythology-based"),
        example_titles: Some("Gladiator, Braveheart, The Lord of the Rings"),
    },
    MoodEntry {
        key: "heartwarming",
        description: "emotionally satisfying films with positive messages about humanity",
        genre_ids: &[10751, 18],
        keywords: &["touching", "feel-good", "emotional", "uplifting", "sweet"],
        genre_hint: Some("Family, Inspirational Drama, Feel-good films"),
        example_titles: Some("Forrest Gump, The Intouchables, CODA"),
    },
    // Genre moods
    MoodEntry {
        key: "action",
        description: "high-energy, thrilling films with exciting confrontations and dynamic sequences that deliver an adrenaline rush",
        genre_ids: &[28],
        keywords: &["explosive", "high-octane", "thrilling", "fast-paced", "action-packed"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "comedy",
        description: "humorous, witty, and amusing films with laugh-out-loud moments that create a lighthearted mood",
        genre_ids: &[35],
        keywords: &["hilarious", "witty", "laugh-out-loud", "amusing", "lighthearted"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "drama",
        description: "emotionally resonant, powerful films with complex character development and meaningful human experiences",
        genre_ids: &[18],
        keywords: &["powerful", "resonant", "moving", "character-driven", "poignant"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "horror",
        description: "frightening, tense films with suspense and scares that create feelings of dread and unease",
        genre_ids: &[27],
        keywords: &["frightening", "terrifying", "chilling", "creepy", "unsettling"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "adventure",
        description: "exciting journey-filled films with exploration, discovery, and scenarios that inspire wonder",
        genre_ids: &[12],
        keywords: &["epic", "journey", "exploration", "quest", "discovery"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "thriller",
        description: "suspenseful, intense films with high-stakes situations that create nail-biting anticipation",
        genre_ids: &[53],
        keywords: &["suspenseful", "edge-of-seat", "gripping", "nail-biting", "riveting"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "romance",
        description: "emotionally touching love stories with meaningful relationships and heartfelt connections",
        genre_ids: &[10749],
        keywords: &["love", "passionate", "heartfelt", "tender", "intimate"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "animation",
        description: "visually creative and imaginative films with expressive characters and artistic visual storytelling",
        genre_ids: &[16],
        keywords: &["imaginative", "colorful", "whimsical", "charming", "inventive"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "fantasy",
        description: "magical, enchanting films with fantastical elements that transport viewers to imaginative worlds",
        genre_ids: &[14],
        keywords: &["magical", "enchanting", "otherworldly", "mythical", "spellbinding"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "scifi",
        description: "futuristic, speculative films with technological concepts and innovative ideas that expand the mind",
        genre_ids: &[878],
        keywords: &["futuristic", "mind-bending", "visionary", "speculative", "cosmic"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "historical",
        description: "period-authentic films with attention to historical detail and context from significant eras",
        genre_ids: &[36],
        keywords: &["period", "authentic", "sweeping", "timeless", "classic"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "mystery",
        description: "enigmatic, puzzling films with intriguing questions that engage viewers in solving the central puzzle",
        genre_ids: &[9648],
        keywords: &["enigmatic", "puzzling", "suspenseful", "intriguing", "twisty"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "musical",
        description: "rhythmic, melodic films with songs and choreography that express emotions through music",
        genre_ids: &[10402],
        keywords: &["melodic", "toe-tapping", "rhythmic", "joyful", "show-stopping"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "documentary",
        description: "informative, educational films with factual information presented in a revealing and insightful way",
        genre_ids: &[99],
        keywords: &["insightful", "revealing", "true story", "eye-opening", "informative"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "crime",
        description: "gritty, investigative films featuring criminal activities and moral complexities within the justice system",
        genre_ids: &[80],
        keywords: &["gritty", "investigative", "dark", "morally complex", "tense"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "western",
        description: "frontier-focused films with rugged landscapes and themes of law and lawlessness in the Old West",
        genre_ids: &[37],
        keywords: &["rugged", "frontier", "lawless", "dusty", "classic"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "superhero",
        description: "heroic films with extraordinary characters and powers that showcase courage in epic circumstances",
        genre_ids: &[28, 878],
        keywords: &["heroic", "larger-than-life", "action-packed", "epic", "powerful"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "war",
        description: "battlefield-focused films with combat sequences and strategic elements that depict military conflict",
        genre_ids: &[10752],
        keywords: &["harrowing", "intense", "courageous", "sobering", "epic"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "foreign",
        description: "international films with cultural elements and perspectives from non-English speaking countries",
        genre_ids: &[18],
        keywords: &["international", "cultural", "subtitled", "distinctive", "worldly"],
        genre_hint: None,
        example_titles: None,
    },
    MoodEntry {
        key: "indie",
        description: "unique, artistic films with a personal creative vision that often breaks from conventional filmmaking",
        genre_ids: &[18, 35],
        keywords: &["quirky", "artistic", "offbeat", "intimate", "original"],
        genre_hint: None,
        example_titles: None,
    },
];

impl MoodEntry {
    fn to_profile(&self) -> MoodProfile {
        MoodProfile {
            key: self.key.to_string(),
            description: self.description.to_string(),
            genre_ids: self.genre_ids.to_vec(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            genre_hint: self.genre_hint.map(str::to_string),
            example_titles: self.example_titles.map(str::to_string),
            is_default: false,
        }
    }
}

/// Resolves a mood label, case-insensitively, to its profile
///
/// Unknown moods get [`MoodProfile::fallback`] so a prompt can always be built.
pub fn lookup(mood: &str) -> MoodProfile {
    let key = mood.trim().to_lowercase();

    MOODS
        .iter()
        .find(|entry| entry.key == key)
        .map(MoodEntry::to_profile)
        .unwrap_or_else(|| MoodProfile::fallback(mood))
}

/// Every mood in the table, in table order
pub fn all_moods() -> Vec<MoodProfile> {
    MOODS.iter().map(MoodEntry::to_profile).collect()
}

/// Genre ids for the fallback discovery, never empty
pub fn fallback_genre_ids(profile: &MoodProfile) -> Vec<u32> {
    if profile.genre_ids.is_empty() {
        DEFAULT_GENRE_IDS.to_vec()
    } else {
        profile.genre_ids.clone()
    }
}
