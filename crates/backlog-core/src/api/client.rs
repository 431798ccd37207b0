use super::multipart::MultipartBody;
use super::params::{FORM_CONTENT_TYPE, FormParams, QueryParams};
use super::response::check_response;
use super::transport::{DEFAULT_TIMEOUT_SECS, Doer, HttpRequest, HttpResponse, ReqwestDoer};
use crate::Result;
use crate::core::services::{
    IssueService, ProjectService, PullRequestService, SpaceService, UserService, WikiService,
};
use crate::error::{BacklogError, ClientError};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const API_PREFIX: [&str; 2] = ["api", "v2"];
const API_KEY_PARAM: &str = "apiKey";

/// Entry point to the Backlog API.
///
/// Every request goes through [`BacklogClient::execute`], which authenticates
/// it with the `apiKey` query parameter and classifies the response.
#[derive(Clone)]
pub struct BacklogClient {
    base_url: Url,
    token: String,
    doer: Arc<dyn Doer>,
}

impl BacklogClient {
    /// Client backed by [`ReqwestDoer`] with the default timeout.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Self::with_timeout(base_url, token, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let doer = ReqwestDoer::new(timeout)?;
        Self::with_doer(base_url, token, Arc::new(doer))
    }

    /// Client that sends through `doer`.
    pub fn with_doer(base_url: &str, token: &str, doer: Arc<dyn Doer>) -> Result<Self> {
        if token.is_empty() {
            return Err(ClientError::new("missing token").into());
        }
        if base_url.trim().is_empty() {
            return Err(ClientError::new("missing base URL").into());
        }

        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ClientError::new(format!("invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::new(format!("invalid base URL: {}", base_url)).into());
        }

        Ok(Self {
            base_url,
            token: token.to_string(),
            doer,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn space(&self) -> SpaceService {
        SpaceService::new(self.clone())
    }

    pub fn project(&self) -> ProjectService {
        ProjectService::new(self.clone())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.clone())
    }

    pub fn wiki(&self) -> WikiService {
        WikiService::new(self.clone())
    }

    pub fn issue(&self) -> IssueService {
        IssueService::new(self.clone())
    }

    pub fn pull_request(&self) -> PullRequestService {
        PullRequestService::new(self.clone())
    }

    /// Prepares an authenticated request for `spath` below `api/v2`.
    pub fn build_request(
        &self,
        method: Method,
        spath: &str,
        query: Option<QueryParams>,
        content_type: Option<HeaderValue>,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest> {
        if spath.is_empty() {
            return Err(ClientError::new("spath must not be empty").into());
        }

        let mut query = query.unwrap_or_default();
        query.set(API_KEY_PARAM, self.token.as_str());

        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::new("base URL cannot carry a path"))?;
            segments.pop_if_empty();
            segments.extend(API_PREFIX);
            segments.extend(spath.split('/').filter(|segment| !segment.is_empty()));
        }
        url.set_query(Some(&query.encode()));

        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, content_type);
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends a prepared request and classifies the response.
    ///
    /// Transport failures come back unchanged as [`BacklogError::Transport`].
    pub async fn execute(&self, request: HttpRequest) -> Result<Option<HttpResponse>> {
        let method = request.method.clone();
        let path = request.url.path().to_string();
        log::debug!("{} {}", method, path);

        let response = self.doer.execute(request).await?;
        log::debug!("{} {} -> {}", method, path, response.status.as_u16());

        check_response(response)
    }

    pub async fn get(&self, spath: &str, query: Option<QueryParams>) -> Result<Option<HttpResponse>> {
        let request = self.build_request(Method::GET, spath, query, None, None)?;
        self.execute(request).await
    }

    pub async fn post(&self, spath: &str, form: Option<FormParams>) -> Result<Option<HttpResponse>> {
        self.send_form(Method::POST, spath, form).await
    }

    pub async fn patch(&self, spath: &str, form: Option<FormParams>) -> Result<Option<HttpResponse>> {
        self.send_form(Method::PATCH, spath, form).await
    }

    pub async fn delete(&self, spath: &str, form: Option<FormParams>) -> Result<Option<HttpResponse>> {
        self.send_form(Method::DELETE, spath, form).await
    }

    /// Posts `reader` as the `file` part of a multipart body.
    ///
    /// `reader` is drained synchronously before the request is sent, so
    /// callers on a runtime should hand over in-memory data, e.g. a
    /// `Cursor` over bytes read with `tokio::fs::read`.
    pub async fn upload<R: Read>(
        &self,
        spath: &str,
        file_name: &str,
        reader: R,
    ) -> Result<Option<HttpResponse>> {
        if file_name.is_empty() {
            return Err(ClientError::new("fileName must not be empty").into());
        }

        let body = MultipartBody::single_file(file_name, reader)?;
        let content_type = HeaderValue::from_str(&body.content_type())
            .map_err(|e| ClientError::new(format!("invalid content type: {}", e)))?;

        let request = self.build_request(
            Method::POST,
            spath,
            None,
            Some(content_type),
            Some(body.into_bytes()),
        )?;
        self.execute(request).await
    }

    async fn send_form(
        &self,
        method: Method,
        spath: &str,
        form: Option<FormParams>,
    ) -> Result<Option<HttpResponse>> {
        let body = form.unwrap_or_default().to_body();
        let request = self.build_request(
            method,
            spath,
            None,
            Some(HeaderValue::from_static(FORM_CONTENT_TYPE)),
            Some(body),
        )?;
        self.execute(request).await
    }
}

impl fmt::Debug for BacklogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BacklogClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Decodes the JSON payload of a classified response.
pub(crate) fn decode<T: DeserializeOwned>(response: Option<HttpResponse>) -> Result<T> {
    let body = response
        .and_then(|mut response| response.body.take())
        .ok_or_else(|| BacklogError::from(ClientError::new("response body is empty")))?;
    Ok(serde_json::from_reader(body)?)
}
