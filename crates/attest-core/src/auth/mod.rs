//! Credential management for the Attest client.
//!
//! The only credential the client holds is an opaque bearer token. The
//! `CredentialStore` trait abstracts where it lives: the OS keychain in
//! desktop builds (`KeyringStore`) or process memory for tests and embedders
//! without a keychain (`MemoryStore`).
//!
//! The token is written on login, read before every request, and deleted on
//! logout. No expiry is tracked client-side; an expired token is discovered
//! through a 401 response.

pub mod credentials;

pub use credentials::{CredentialError, CredentialStore, KeyringStore, MemoryStore};
