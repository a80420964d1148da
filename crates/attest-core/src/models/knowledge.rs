use serde::{Deserialize, Serialize};

/// Body for `POST /knowledge/search`.
#[derive(Debug, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            limit: None,
        }
    }
}

/// One knowledge-base match.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub score: f64,
}

/// Payload of `POST /knowledge/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    pub results: Vec<SearchHit>,
}
