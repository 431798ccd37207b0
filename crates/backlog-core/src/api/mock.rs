//! In-process [`Doer`] that records requests and replays queued responses.

use super::client::BacklogClient;
use super::transport::{Doer, HttpRequest, HttpResponse};
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "test-token";
pub const BASE_URL: &str = "https://test.backlog.com";

pub type Reply = Result<HttpResponse, TransportError>;

#[derive(Default)]
pub struct MockDoer {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl MockDoer {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into()),
        }
    }

    pub fn json(status: u16, body: &str) -> Reply {
        let status = StatusCode::from_u16(status).expect("valid status");
        Ok(HttpResponse::from_bytes(status, body.as_bytes().to_vec()))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("at least one request was sent")
    }
}

#[async_trait]
impl Doer for MockDoer {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().expect("requests lock").push(request);
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| panic!("no reply queued for request"))
    }
}

pub fn mock_client(replies: Vec<Reply>) -> (BacklogClient, Arc<MockDoer>) {
    let doer = Arc::new(MockDoer::new(replies));
    let client = BacklogClient::with_doer(BASE_URL, TOKEN, doer.clone()).expect("mock client");
    (client, doer)
}

/// Query pairs of `request` with the token removed.
pub fn query_without_token(request: &HttpRequest) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .filter(|(key, _)| key != "apiKey")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Decoded form body of `request`.
pub fn form_pairs(request: &HttpRequest) -> Vec<(String, String)> {
    let body = request.body.as_deref().unwrap_or_default();
    url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
