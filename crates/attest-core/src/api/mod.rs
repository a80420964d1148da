//! REST API client module for the Attest backend.
//!
//! `ApiClient` performs authenticated JSON calls against the Attest REST API
//! and exposes one wrapper per backend resource group: auth, projects, tasks,
//! interviews, knowledge, reports, notifications, and models.
//!
//! Authentication is a bearer token read from the credential store before
//! each request. A missing token is not an error here - the request simply
//! goes out unauthenticated and the server decides whether to reject it.

pub mod client;
pub mod error;
pub mod query;
pub mod resources;
pub mod transport;

pub use client::{ApiClient, RequestDescriptor};
pub use error::ApiError;
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};
