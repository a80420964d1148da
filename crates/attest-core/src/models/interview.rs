use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::query::Query;

/// Lifecycle state of an interview.
///
/// Transitions happen only through the dedicated `start`/`complete`
/// endpoints, never through field edits on the resource itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Draft,
    InProgress,
    Completed,
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InterviewStatus::Draft => "draft",
            InterviewStatus::InProgress => "in_progress",
            InterviewStatus::Completed => "completed",
        })
    }
}

/// An AI-assisted interview session within a project.
#[derive(Debug, Clone, Deserialize)]
pub struct Interview {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub status: InterviewStatus,
    #[serde(default)]
    pub interviewee: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body for `POST /interviews`.
#[derive(Debug, Serialize)]
pub struct NewInterview {
    pub project_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewee: Option<String>,
}

/// Filters for `GET /interviews`. Empty values are omitted from the query
/// string entirely.
#[derive(Debug, Default)]
pub struct InterviewFilter {
    pub project_id: Option<String>,
    pub status: Option<String>,
}

impl InterviewFilter {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("project_id", self.project_id.as_deref());
        query.push_opt("status", self.status.as_deref());
        query
    }
}

/// One utterance in an interview transcript.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: String,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Payload of `GET /interviews/{id}/transcript`.
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    pub interview_id: String,
    pub entries: Vec<TranscriptEntry>,
}
