pub mod books;
pub mod candidates;
pub mod mood_taxonomy;
pub mod prompts;
pub mod providers;
pub mod recommendations;
pub mod shuffle;
pub mod summary;

pub use books::BookRecommender;
pub use recommendations::{MovieRecommender, SeenTitles};
pub use summary::Summarizer;
