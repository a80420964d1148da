use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::query::Query;

/// An advisory engagement grouping interviews, tasks, and reports.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /projects`.
#[derive(Debug, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters for `GET /projects`. Empty values are omitted from the query
/// string entirely.
#[derive(Debug, Default)]
pub struct ProjectFilter {
    pub status: Option<String>,
}

impl ProjectFilter {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("status", self.status.as_deref());
        query
    }
}
