//! NewsAPI `everything` search endpoint

use crate::transport::Transport;
use dp_core::{Result, NEWS_PAGE_SIZE};
use dp_models::news::NewsResponse;
use std::sync::Arc;
use tracing::instrument;

/// Full-text news search for a company name.
pub struct NewsEndpoints {
    transport: Arc<Transport>,
    base_url: String,
    api_key: String,
}

impl NewsEndpoints {
    /// Create a new news endpoints instance
    pub fn new(transport: Arc<Transport>, base_url: String, api_key: String) -> Self {
        Self { transport, base_url, api_key }
    }

    /// Search the most recent English-language articles for a query.
    ///
    /// Results are sorted by publish date and capped at
    /// [`NEWS_PAGE_SIZE`] articles, matching what the sentiment pipeline
    /// consumes per instrument.
    #[instrument(skip(self), fields(query))]
    pub async fn everything(&self, query: &str) -> Result<NewsResponse> {
        let endpoint = format!("{}/everything", self.base_url);
        let page_size = NEWS_PAGE_SIZE.to_string();

        self.transport
            .get(
                &endpoint,
                &[
                    ("q", query),
                    ("language", "en"),
                    ("sortBy", "publishedAt"),
                    ("pageSize", &page_size),
                    ("apiKey", &self.api_key),
                ],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_creation() {
        let endpoints = NewsEndpoints::new(
            Arc::new(Transport::new_mock()),
            "https://mock.newsapi.org/v2".to_string(),
            "test_key".to_string(),
        );
        assert_eq!(endpoints.base_url, "https://mock.newsapi.org/v2");
    }
}
