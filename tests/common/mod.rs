#![allow(dead_code)] // not every test binary uses every helper

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use spotify_web::{Error, Result, Transport, TransportRequest, TransportResponse};

/// Transport test double: records every outgoing request and replays canned
/// responses in order.
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(MockTransport {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push_json(&self, status: u16, status_text: &str, body: serde_json::Value) {
        self.push_response(TransportResponse {
            status,
            status_text: status_text.to_string(),
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        });
    }

    pub fn push_text(&self, status: u16, status_text: &str, body: &str) {
        self.push_response(TransportResponse {
            status,
            status_text: status_text.to_string(),
            content_type: Some("text/plain".to_string()),
            body: body.to_string(),
        });
    }

    pub fn push_response(&self, response: TransportResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Transport("mock transport has no canned response left".into()))
    }
}
