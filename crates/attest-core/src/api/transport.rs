//! HTTP transport abstraction.
//!
//! The executor in [`client`](super::client) builds a fully-formed
//! [`TransportRequest`]; the transport only moves bytes. Production code uses
//! [`ReqwestTransport`]; tests substitute `testing::FakeTransport`.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};

use super::error::BoxError;

/// HTTP request timeout in seconds.
/// 30s allows for slow LLM-backed endpoints while failing fast enough for
/// interactive callers.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One fully-prepared outbound request. Transient: constructed per call,
/// never retained.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw response: status plus undecoded body bytes.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Performs a single HTTP round trip.
///
/// `Err` means no response was obtained at all; a response with a non-success
/// status is still `Ok` and is classified by the executor. No retries happen
/// at this layer. Cancellation is dropping the future.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError>;
}

/// Production transport backed by reqwest.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, BoxError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(TransportResponse { status, body })
    }
}
