//! Query string construction for list endpoints.
//!
//! Filters are optional everywhere: only keys with present, non-empty values
//! reach the wire, and zero surviving pairs leaves the URL without a `?`
//! suffix at all.

use reqwest::Url;

/// Accumulates `key=value` pairs, skipping absent and empty values.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair when the value is present and non-empty.
    pub fn push_opt(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() {
                self.pairs.push((key, v.to_string()));
            }
        }
    }

    /// Add an unconditional pair.
    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        self.pairs.push((key, value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Append the surviving pairs to `url`, percent-encoded. A query-less URL
    /// stays query-less.
    pub fn apply(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_omitted() {
        let mut query = Query::new();
        query.push_opt("project_id", Some(""));
        query.push_opt("status", Some("open"));
        query.push_opt("assignee", None);

        let mut url = Url::parse("http://localhost:8000/api/v1/tasks").expect("url");
        query.apply(&mut url);
        assert_eq!(url.query(), Some("status=open"));
    }

    #[test]
    fn test_no_pairs_leaves_url_untouched() {
        let query = Query::new();
        let mut url = Url::parse("http://localhost:8000/api/v1/projects").expect("url");
        query.apply(&mut url);
        assert_eq!(url.query(), None);
        assert!(!url.as_str().contains('?'));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut query = Query::new();
        query.push("q", "access control");
        let mut url = Url::parse("http://localhost:8000/api/v1/knowledge").expect("url");
        query.apply(&mut url);
        assert_eq!(url.query(), Some("q=access+control"));
    }
}
