//! Classification of raw responses into success, no-content and API failure.

use super::transport::HttpResponse;
use crate::Result;
use crate::error::{ApiErrorDetail, ApiResponseError};
use crate::utils::nullable::null_as_default;
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<ApiErrorDetail>,
}

/// Sorts a response into one of three outcomes.
///
/// - 2xx except 204: returned unchanged, body still open.
/// - 204: body closed, `Ok(None)`.
/// - anything else: body decoded as `{"errors": [...]}` and closed, then
///   returned as [`ApiResponseError`]. An undecodable body yields an error
///   with no entries.
pub fn check_response(mut response: HttpResponse) -> Result<Option<HttpResponse>> {
    let status = response.status;

    if status == StatusCode::NO_CONTENT {
        drop(response.body.take());
        return Ok(None);
    }

    if status.is_success() {
        return Ok(Some(response));
    }

    let errors = response
        .body
        .take()
        .and_then(|body| serde_json::from_reader::<_, ErrorBody>(body).ok())
        .map(|decoded| decoded.errors)
        .unwrap_or_default();

    log::debug!(
        "API responded with status {} and {} error entries",
        status.as_u16(),
        errors.len()
    );

    Err(ApiResponseError {
        status_code: status.as_u16(),
        errors,
    }
    .into())
}
