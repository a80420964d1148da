//! Wire types for the Attest backend.
//!
//! These mirror the backend's JSON schemas. Identifiers are opaque strings,
//! timestamps are RFC 3339 via chrono, and optional fields default so a newer
//! server can add fields without breaking older clients.

pub mod auth;
pub mod interview;
pub mod knowledge;
pub mod llm;
pub mod notification;
pub mod project;
pub mod report;
pub mod task;

pub use auth::{LoginRequest, LoginResponse, User};
pub use interview::{
    Interview, InterviewFilter, InterviewStatus, NewInterview, Transcript, TranscriptEntry,
};
pub use knowledge::{SearchHit, SearchRequest, SearchResults};
pub use llm::ModelInfo;
pub use notification::{Notification, UnreadCount};
pub use project::{NewProject, Project, ProjectFilter};
pub use report::{GenerateReport, Report};
pub use task::{NewTask, Task, TaskFilter};
