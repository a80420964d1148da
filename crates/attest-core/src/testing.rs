//! In-memory test doubles for the API client.
//!
//! [`FakeTransport`] scripts responses in FIFO order and records every
//! outbound request, so tests can assert on exact methods, URLs, headers, and
//! bodies without a network. Pair it with [`MemoryStore`] through
//! [`ApiClient::with_parts`](crate::ApiClient::with_parts).

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::error::BoxError;
use crate::api::{HttpTransport, TransportRequest, TransportResponse};

pub use crate::auth::MemoryStore;

enum Scripted {
    Response(TransportResponse),
    ConnectFailure(String),
}

/// Transport double: scripted responses, recorded requests.
#[derive(Default)]
pub struct FakeTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, body: &str) {
        self.push(Scripted::Response(TransportResponse {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.as_bytes().to_vec(),
        }));
    }

    /// Queue a connect-style failure: the request goes out, no response comes
    /// back.
    pub fn fail_connect(&self, message: &str) {
        self.push(Scripted::ConnectFailure(message.to_string()));
    }

    fn push(&self, item: Scripted) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(item);
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of requests executed so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
        let next = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::ConnectFailure(message)) => Err(Box::new(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                message,
            ))),
            None => Err(Box::new(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "no scripted response left",
            ))),
        }
    }
}
