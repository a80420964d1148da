//! Core client library for Attest, an AI-assisted interview and GRC advisory
//! platform.
//!
//! This crate is the authenticated REST API client shared by the Attest front
//! ends. It provides:
//! - `auth::CredentialStore`: secure bearer-token persistence (OS keychain in
//!   production, in-memory for tests and embedders without a keychain)
//! - `api::ApiClient`: a uniform request executor with normalized errors and
//!   one wrapper per backend resource group
//! - `poller::UnreadPoller`: the best-effort unread-notification poll loop
//!   behind the dashboard badge
//!
//! There is no global client instance. Construct one with [`ApiClient::new`]
//! (or [`ApiClient::with_parts`] for dependency injection) and clone it
//! freely - clones share the connection pool and credential store.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod poller;
pub mod testing;

pub use api::{ApiClient, ApiError};
pub use auth::{CredentialStore, KeyringStore, MemoryStore};
pub use config::Config;
pub use poller::UnreadPoller;
