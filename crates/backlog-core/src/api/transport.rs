//! Transport abstraction and the reqwest-backed default.

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::fmt;
use std::io::{Cursor, Read};
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("backlog-core/", env!("CARGO_PKG_VERSION"));

/// Response body handed back to the caller. Dropping it closes it.
pub type ResponseBody = Box<dyn Read + Send>;

/// A fully prepared request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<ResponseBody>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: Option<ResponseBody>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// Response whose body is an in-memory buffer.
    pub fn from_bytes(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, Some(Box::new(Cursor::new(body.into()))))
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body.is_some())
            .finish()
    }
}

/// Executes one prepared request.
///
/// Implementations own timeouts and connection handling. The client never
/// retries and never rewrites the error returned here.
#[async_trait]
pub trait Doer: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Doer`] backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestDoer {
    client: reqwest::Client,
}

impl ReqwestDoer {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Doer for ReqwestDoer {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body: Some(Box::new(Cursor::new(body))),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Other(Box::new(err))
    }
}
