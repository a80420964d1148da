use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One in-app notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload of `GET /notifications/unread-count`.
///
/// The count is server-sourced; the client never derives it locally, which is
/// what keeps it from ever going negative around idempotent mark-read calls.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}
