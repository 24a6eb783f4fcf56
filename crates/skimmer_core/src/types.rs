use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One extracted article card, in the shape the front end consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: usize,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
    pub category: Category,
    pub read_time: String,
}

/// Fixed topic taxonomy. Ordering matters: the classifier walks these
/// top to bottom and the first keyword hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Health,
    Business,
    Sports,
    Politics,
    World,
    General,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Technology => "Technology",
            Category::Health => "Health",
            Category::Business => "Business",
            Category::Sports => "Sports",
            Category::Politics => "Politics",
            Category::World => "World",
            Category::General => "General",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub articles: Vec<ArticleRecord>,
    /// Distinct articles found, before the result cap was applied.
    pub total: usize,
    pub source: String,
}
