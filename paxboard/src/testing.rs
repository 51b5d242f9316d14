//! Test doubles for the transport seam

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::api::{Method, Transport, TransportError};

/// One request as seen by the spy
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport spy: records every request and replays canned responses in
/// FIFO order.
///
/// Responses are the already-unwrapped `data` payloads the real transport
/// would return. Executing with an empty queue fails with a
/// [`TransportError::MissingData`], which keeps an under-seeded test from
/// hanging or panicking inside the client.
#[derive(Default)]
pub struct SpyTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
}

impl SpyTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success payload
    pub fn enqueue(&self, data: Value) {
        self.responses.lock().unwrap().push_back(Ok(data));
    }

    /// Queue a failure
    pub fn enqueue_error(&self, err: TransportError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Everything executed so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for SpyTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::MissingData))
    }
}
