//! Namespaced wrappers for the backend resource groups.
//!
//! Each group is a stateless borrow of the client sharing a path prefix. The
//! wrappers are pass-throughs to the executor: no retries, no client-side
//! auth pre-checks, no response caching. Retry policy belongs to callers.

use crate::models::{
    GenerateReport, Interview, InterviewFilter, LoginRequest, LoginResponse, ModelInfo,
    NewInterview, NewProject, NewTask, Notification, Project, ProjectFilter, Report,
    SearchRequest, SearchResults, Task, TaskFilter, Transcript, UnreadCount, User,
};

use super::client::ApiClient;
use super::error::ApiError;
use super::query::Query;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi { client: self }
    }

    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi { client: self }
    }

    pub fn interviews(&self) -> InterviewsApi<'_> {
        InterviewsApi { client: self }
    }

    pub fn knowledge(&self) -> KnowledgeApi<'_> {
        KnowledgeApi { client: self }
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { client: self }
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi { client: self }
    }

    pub fn models(&self) -> ModelsApi<'_> {
        ModelsApi { client: self }
    }
}

/// `/auth` endpoints plus the local credential lifecycle.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl AuthApi<'_> {
    /// Log in and persist the access token.
    ///
    /// The token is written to the credential store before this returns, so a
    /// successful login is immediately visible to subsequent requests. The
    /// full payload, refresh token included, is returned unchanged - callers
    /// never persist the token themselves.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { email, password };
        let response: LoginResponse = self.client.post("/auth/login", &body).await?;
        self.client
            .store()
            .set(&response.access_token)
            .map_err(|e| ApiError::Store(Box::new(e)))?;
        Ok(response)
    }

    /// Log out by discarding the stored token.
    ///
    /// Deliberately performs no backend call: the server keeps no session
    /// state for bearer tokens, so forgetting the token is the whole
    /// operation.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.client
            .store()
            .clear()
            .map_err(|e| ApiError::Store(Box::new(e)))
    }

    /// Fetch the identity behind the stored token.
    ///
    /// No local credential check happens first; an unauthenticated call is
    /// sent as-is and the server's 401 comes back as an `Api` error.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.client.get("/auth/me").await
    }
}

/// `/projects` endpoints.
pub struct ProjectsApi<'a> {
    client: &'a ApiClient,
}

impl ProjectsApi<'_> {
    pub async fn list(&self, filter: Option<&ProjectFilter>) -> Result<Vec<Project>, ApiError> {
        let query = filter.map(ProjectFilter::to_query).unwrap_or_default();
        self.client.get_query("/projects", query).await
    }

    pub async fn get(&self, id: &str) -> Result<Project, ApiError> {
        self.client.get(&format!("/projects/{id}")).await
    }

    pub async fn create(&self, project: &NewProject) -> Result<Project, ApiError> {
        self.client.post("/projects", project).await
    }
}

/// `/tasks` endpoints.
pub struct TasksApi<'a> {
    client: &'a ApiClient,
}

impl TasksApi<'_> {
    pub async fn list(&self, filter: Option<&TaskFilter>) -> Result<Vec<Task>, ApiError> {
        let query = filter.map(TaskFilter::to_query).unwrap_or_default();
        self.client.get_query("/tasks", query).await
    }

    pub async fn get(&self, id: &str) -> Result<Task, ApiError> {
        self.client.get(&format!("/tasks/{id}")).await
    }

    pub async fn create(&self, task: &NewTask) -> Result<Task, ApiError> {
        self.client.post("/tasks", task).await
    }
}

/// `/interviews` endpoints, including the lifecycle transitions.
pub struct InterviewsApi<'a> {
    client: &'a ApiClient,
}

impl InterviewsApi<'_> {
    pub async fn list(&self, filter: Option<&InterviewFilter>) -> Result<Vec<Interview>, ApiError> {
        let query = filter.map(InterviewFilter::to_query).unwrap_or_default();
        self.client.get_query("/interviews", query).await
    }

    pub async fn get(&self, id: &str) -> Result<Interview, ApiError> {
        self.client.get(&format!("/interviews/{id}")).await
    }

    pub async fn create(&self, interview: &NewInterview) -> Result<Interview, ApiError> {
        self.client.post("/interviews", interview).await
    }

    /// Begin an interview. A lifecycle event, not a field edit: POST against
    /// the `start` sub-path with no request body.
    pub async fn start(&self, id: &str) -> Result<Interview, ApiError> {
        self.client
            .post_no_body(&format!("/interviews/{id}/start"))
            .await
    }

    /// Finish an interview. Same shape as [`start`](Self::start).
    pub async fn complete(&self, id: &str) -> Result<Interview, ApiError> {
        self.client
            .post_no_body(&format!("/interviews/{id}/complete"))
            .await
    }

    pub async fn transcript(&self, id: &str) -> Result<Transcript, ApiError> {
        self.client.get(&format!("/interviews/{id}/transcript")).await
    }
}

/// `/knowledge` endpoints.
pub struct KnowledgeApi<'a> {
    client: &'a ApiClient,
}

impl KnowledgeApi<'_> {
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults, ApiError> {
        self.client.post("/knowledge/search", request).await
    }
}

/// `/reports` endpoints.
pub struct ReportsApi<'a> {
    client: &'a ApiClient,
}

impl ReportsApi<'_> {
    pub async fn list(&self) -> Result<Vec<Report>, ApiError> {
        self.client.get("/reports").await
    }

    pub async fn get(&self, id: &str) -> Result<Report, ApiError> {
        self.client.get(&format!("/reports/{id}")).await
    }

    pub async fn generate(&self, request: &GenerateReport) -> Result<Report, ApiError> {
        self.client.post("/reports/generate", request).await
    }
}

/// `/notifications` endpoints.
pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl NotificationsApi<'_> {
    /// Latest notifications, newest first. `limit` caps the page size.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<Notification>, ApiError> {
        let mut query = Query::new();
        if let Some(limit) = limit {
            query.push("limit", limit);
        }
        self.client.get_query("/notifications", query).await
    }

    pub async fn unread_count(&self) -> Result<u64, ApiError> {
        let count: UnreadCount = self.client.get("/notifications/unread-count").await?;
        Ok(count.count)
    }

    /// Mark one notification read. Idempotent server-side: re-marking an
    /// already-read notification succeeds and leaves the unread count
    /// untouched.
    pub async fn mark_read(&self, id: &str) -> Result<Notification, ApiError> {
        self.client
            .post_no_body(&format!("/notifications/{id}/read"))
            .await
    }

    pub async fn mark_all_read(&self) -> Result<(), ApiError> {
        self.client.post_discard("/notifications/read-all").await
    }
}

/// `/models` endpoints - the LLM backends available for interviews.
pub struct ModelsApi<'a> {
    client: &'a ApiClient,
}

impl ModelsApi<'_> {
    pub async fn list(&self) -> Result<Vec<ModelInfo>, ApiError> {
        self.client.get("/models").await
    }
}
