pub mod book;
pub mod mood;
pub mod movie;

pub use book::{Book, BookRecommendation, Volume, VolumeList};
pub use mood::MoodProfile;
pub use movie::{
    Candidate, CatalogItem, Genre, RecommendationResult, RecommendationSource, TmdbMovie,
    TmdbMovieDetails, TmdbMovieList,
};
