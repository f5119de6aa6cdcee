//! NewsAPI `everything` search response models

use serde::{Deserialize, Serialize};

/// Top-level NewsAPI search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    /// "ok" or "error"
    pub status: String,

    /// Total number of matching articles upstream
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,

    /// The page of articles returned (at most `pageSize`)
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A single article from a NewsAPI search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Publishing outlet
    pub source: ArticleSource,

    /// Article author, frequently absent
    #[serde(default)]
    pub author: Option<String>,

    /// Headline. Null for articles the upstream has delisted.
    #[serde(default)]
    pub title: Option<String>,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Canonical URL
    #[serde(default)]
    pub url: Option<String>,

    /// Publish timestamp, RFC 3339
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
}

/// Source descriptor nested inside an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// NewsAPI source id, often null
    #[serde(default)]
    pub id: Option<String>,

    /// Display name of the outlet
    pub name: String,
}
