//! HTTP transport for activation calls.
//!
//! One independent blocking transaction per request; no connection
//! pooling, no reuse across calls. URL, connect, send, and receive
//! failures all collapse into [`ActivationError::Network`]; non-2xx
//! statuses are not failures, because the licensing service ships
//! protocol documents on error statuses too.

use crate::error::{ActivationError, ActivationResult};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// A transport that can perform one request/response exchange.
pub trait Transport: Send + Sync {
    /// Performs one blocking exchange and returns the raw response body.
    fn request(&self, method: &str, path: &str, body: Option<&Value>) -> ActivationResult<String>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn request(&self, method: &str, path: &str, body: Option<&Value>) -> ActivationResult<String> {
        (**self).request(method, path, body)
    }
}

/// Blocking HTTP(S) transport against a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the given base URL (scheme + host +
    /// optional port). The URL is validated when a request is made, so
    /// a malformed base surfaces as a request-time network failure.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn request(&self, method: &str, path: &str, body: Option<&Value>) -> ActivationResult<String> {
        let url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| ActivationError::Network(format!("invalid URL: {e}")))?;

        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|e| ActivationError::Network(format!("invalid method: {e}")))?;

        debug!("{method} {url}");

        // A fresh client per call: each exchange opens and tears down
        // its own connection.
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ActivationError::Network(e.to_string()))?;

        let mut request = client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| {
            warn!("transport exchange failed: {e}");
            ActivationError::Network(e.to_string())
        })?;

        response.text().map_err(|e| {
            warn!("transport body read failed: {e}");
            ActivationError::Network(e.to_string())
        })
    }
}

/// Scripted transports for testing.
pub mod mock {
    use super::{ActivationError, ActivationResult, Transport, Value};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// One request as observed by [`MockTransport`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        /// HTTP method.
        pub method: String,
        /// Request path relative to the base URL.
        pub path: String,
        /// JSON body, if one was sent.
        pub body: Option<Value>,
    }

    /// A transport that replays queued responses and records every
    /// request it serves.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<ActivationResult<String>>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl MockTransport {
        /// Creates an empty mock; requests fail until responses are
        /// queued.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response body for the next request.
        pub fn push_body(&self, body: impl Into<String>) {
            self.responses.lock().unwrap().push_back(Ok(body.into()));
        }

        /// Queues a network failure for the next request.
        pub fn push_network_failure(&self, detail: impl Into<String>) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(ActivationError::Network(detail.into())));
        }

        /// The requests served so far, in order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        fn request(
            &self,
            method: &str,
            path: &str,
            body: Option<&Value>,
        ) -> ActivationResult<String> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: method.to_string(),
                path: path.to_string(),
                body: body.cloned(),
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ActivationError::Network("no scripted response".into())))
        }
    }
}
