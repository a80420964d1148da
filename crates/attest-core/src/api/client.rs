//! Request executor for the Attest API.
//!
//! Every call goes through [`ApiClient::execute`]: read the credential,
//! build headers, serialize the body, run the transport, and normalize the
//! outcome into [`ApiError`]. Resource-group wrappers in
//! [`resources`](super::resources) are thin pass-throughs over this.

use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::{CredentialStore, KeyringStore};

use super::error::ApiError;
use super::query::Query;
use super::transport::{HttpTransport, ReqwestTransport, TransportRequest};

/// One outbound API call before credential attachment.
///
/// Paths are relative to the client's base URL and start with `/`. The body,
/// when present, is already serialized JSON; requests without a body send no
/// body bytes at all.
#[derive(Debug)]
pub struct RequestDescriptor<'a> {
    method: Method,
    path: &'a str,
    query: Query,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> RequestDescriptor<'a> {
    pub fn new(method: Method, path: &'a str) -> Self {
        Self {
            method,
            path,
            query: Query::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attach a query string. Pairs with empty values were already dropped by
    /// [`Query`]; an empty query adds nothing to the URL.
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Request(Box::new(e)))?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// Add an extra header, merged over the client defaults.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// API client for the Attest backend.
/// Clone is cheap - the transport and credential store are shared via Arc.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Production client: reqwest transport plus the OS keychain store.
    ///
    /// `base_url` comes from [`Config::resolve_base_url`](crate::Config) and
    /// is fixed for the lifetime of the client.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new().map_err(ApiError::Transport)?;
        Self::with_parts(base_url, Arc::new(transport), Arc::new(KeyringStore::new()))
    }

    /// Dependency-injection factory: tests substitute an in-memory credential
    /// store and a fake transport here.
    pub fn with_parts(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::Request(Box::new(e)))?;
        Ok(Self {
            inner: Arc::new(Inner {
                base_url,
                transport,
                store,
            }),
        })
    }

    pub(crate) fn store(&self) -> &dyn CredentialStore {
        self.inner.store.as_ref()
    }

    /// Execute a request and decode the JSON response body.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor<'_>,
    ) -> Result<T, ApiError> {
        let (url, body) = self.send(request).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.into(),
            source,
        })
    }

    /// Execute a request, discarding the response body. For endpoints whose
    /// payload carries nothing the caller needs.
    pub async fn execute_empty(&self, request: RequestDescriptor<'_>) -> Result<(), ApiError> {
        self.send(request).await?;
        Ok(())
    }

    /// The request pipeline: credential read, header assembly, transport
    /// call, status classification.
    ///
    /// A missing or unreadable credential is not an error - the request is
    /// sent without an Authorization header and the server decides. When a
    /// credential is present the Authorization header is inserted (not
    /// appended), so exactly one is ever sent.
    async fn send(&self, request: RequestDescriptor<'_>) -> Result<(Url, Vec<u8>), ApiError> {
        let mut url = self.endpoint(request.path)?;
        request.query.apply(&mut url);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.extend(request.headers);
        if let Some(token) = self.inner.store.get() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::Request(Box::new(e)))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        debug!(method = %request.method, url = %url, "sending request");

        let response = self
            .inner
            .transport
            .execute(TransportRequest {
                method: request.method,
                url: url.clone(),
                headers,
                body: request.body,
            })
            .await
            .map_err(ApiError::Transport)?;

        if !response.status.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok((url, response.body))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.inner.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::Request(Box::new(e)))
    }

    // ===== Conveniences used by the resource groups =====

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(RequestDescriptor::new(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query,
    ) -> Result<T, ApiError> {
        self.execute(RequestDescriptor::new(Method::GET, path).query(query))
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(RequestDescriptor::new(Method::POST, path).json(body)?)
            .await
    }

    /// POST with no request body. Lifecycle events (`start`, `complete`,
    /// `read`) are modeled this way: an explicit verb against a sub-path,
    /// never a field edit.
    pub(crate) async fn post_no_body<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(RequestDescriptor::new(Method::POST, path)).await
    }

    /// POST with no body and no interesting response.
    pub(crate) async fn post_discard(&self, path: &str) -> Result<(), ApiError> {
        self.execute_empty(RequestDescriptor::new(Method::POST, path))
            .await
    }
}
