use serde::{Deserialize, Serialize};

/// A book as presented to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub average_rating: Option<f64>,
    pub thumbnail: Option<String>,
}

/// A book recommendation with its generated summary
#[derive(Debug, Clone, Serialize)]
pub struct BookRecommendation {
    pub book: Book,
    pub summary: String,
}

// ============================================================================
// Google Books API Types
// ============================================================================

/// Response of /volumes?q=
#[derive(Debug, Deserialize)]
pub struct VolumeList {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Volume {
    /// Volumes without a title are useless to the client
    pub fn into_book(self) -> Option<Book> {
        let info = self.volume_info;
        let title = info.title.filter(|t| !t.trim().is_empty())?;

        Some(Book {
            title,
            authors: info.authors,
            description: info.description,
            categories: info.categories,
            average_rating: info.average_rating,
            thumbnail: info.image_links.and_then(|links| links.thumbnail),
        })
    }
}
