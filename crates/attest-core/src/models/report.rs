use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated advisory report.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /reports/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
