//! HTTP adapter abstraction
//!
//! The paginator and the endpoint factories only ever talk to the network
//! through [`HttpAdapter`], so the transport can be swapped for a mock in
//! tests or for a different client in applications.

use crate::error::{Error, Result};
use crate::types::StringMap;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A raw HTTP response as seen by the pagination engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: StringMap,
    /// Response body
    pub body: String,
}

impl RawResponse {
    /// Create a 200 response with the given body and no headers
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: StringMap::new(),
            body: body.into(),
        }
    }

    /// Create a response with an explicit status
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: StringMap::new(),
            body: body.into(),
        }
    }

    /// Add a header (the name is lower-cased)
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Look up a header by name, ignoring case
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single GET request
#[async_trait]
pub trait HttpAdapter: Send + Sync {
    /// Send a GET to `path` with exactly the given headers
    async fn execute(&self, path: &str, headers: &StringMap) -> Result<RawResponse>;
}

// ============================================================================
// Mock Adapter
// ============================================================================

/// A single request seen by [`MockAdapter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Requested path
    pub path: String,
    /// Headers passed by the caller
    pub headers: StringMap,
}

#[derive(Debug, Clone)]
enum MockReply {
    Response(RawResponse),
    Failure(String),
}

/// Adapter that replies with canned responses and records every request
///
/// Queued replies are consumed in order; once the queue is empty the
/// fallback response is returned for every further request.
#[derive(Debug)]
pub struct MockAdapter {
    fallback: RawResponse,
    queue: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockAdapter {
    /// Create an adapter that always answers with `response`
    pub fn new(response: RawResponse) -> Self {
        Self {
            fallback: response,
            queue: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create an adapter that always answers 200 with `body`
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(RawResponse::ok(body))
    }

    /// Queue a response to be returned before the fallback
    #[must_use]
    pub fn then_respond(self, response: RawResponse) -> Self {
        self.lock_queue().push_back(MockReply::Response(response));
        self
    }

    /// Queue a transport failure to be returned before the fallback
    #[must_use]
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.lock_queue().push_back(MockReply::Failure(message.into()));
        self
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock_requests().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.lock_requests().len()
    }

    /// Headers of the most recent request
    pub fn last_headers(&self) -> Option<StringMap> {
        self.lock_requests().last().map(|r| r.headers.clone())
    }

    fn lock_queue(&self) -> std::sync::MutexGuard<'_, VecDeque<MockReply>> {
        self.queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<RecordedRequest>> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpAdapter for MockAdapter {
    async fn execute(&self, path: &str, headers: &StringMap) -> Result<RawResponse> {
        self.lock_requests().push(RecordedRequest {
            path: path.to_string(),
            headers: headers.clone(),
        });

        match self.lock_queue().pop_front() {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(message)) => Err(Error::transport(message)),
            None => Ok(self.fallback.clone()),
        }
    }
}
