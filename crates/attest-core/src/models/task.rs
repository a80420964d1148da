use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::query::Query;

/// A follow-up item raised during an engagement.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /tasks`.
#[derive(Debug, Serialize)]
pub struct NewTask {
    pub project_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters for `GET /tasks`. Empty values are omitted from the query string
/// entirely.
#[derive(Debug, Default)]
pub struct TaskFilter {
    pub project_id: Option<String>,
    pub status: Option<String>,
}

impl TaskFilter {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("project_id", self.project_id.as_deref());
        query.push_opt("status", self.status.as_deref());
        query
    }
}
