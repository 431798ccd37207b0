//! End-to-end checks of the reqwest transport against a local mock server.

use backlog_core::BacklogError;
use backlog_core::error::TransportError;
use backlog_core::option::{ActivityOptionService, ProjectOptionService, WikiOptionService};
use backlog_core::prelude::*;
use serde_json::json;
use std::io::Cursor;
use std::time::Duration;
use wiremock::matchers::{body_string, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "integration-key";

fn client_for(server: &MockServer) -> BacklogClient {
    BacklogClient::with_timeout(&server.uri(), API_KEY, Duration::from_secs(5))
        .expect("client for mock server")
}

#[tokio::test]
async fn test_project_list_sends_api_key_and_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/projects"))
        .and(query_param("apiKey", API_KEY))
        .and(query_param("archived", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "projectKey": "TEST", "name": "test", "textFormattingRule": "markdown"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client_for(&server)
        .project()
        .all(&[ProjectOptionService.with_query_archived(false)])
        .await
        .expect("project list");

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].project_key, "TEST");
}

#[tokio::test]
async fn test_activity_type_ids_are_repeated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/space/activities"))
        .and(query_param("activityTypeId[]", "1"))
        .and(query_param("activityTypeId[]", "3"))
        .and(query_param("count", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let o = ActivityOptionService;
    let activities = client_for(&server)
        .space()
        .activity()
        .list(&[o.with_query_activity_type_ids(&[1, 3]), o.with_query_count(50)])
        .await
        .expect("activities");

    assert!(activities.is_empty());
}

#[tokio::test]
async fn test_form_body_is_urlencoded() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v2/wikis/34"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("content=a+b%26c&name=Home"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 34, "name": "Home"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let o = WikiOptionService;
    let wiki = client_for(&server)
        .wiki()
        .update(34, &[o.with_form_name("Home"), o.with_form_content("a b&c")])
        .await
        .expect("wiki update");

    assert_eq!(wiki.id, 34);
}

#[tokio::test]
async fn test_upload_sends_multipart_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/space/attachment"))
        .and(body_string_contains("name=\"file\"; filename=\"notes.txt\""))
        .and(body_string_contains("attached text"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 8, "name": "notes.txt", "size": 13})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let attachment = client_for(&server)
        .space()
        .attachment()
        .upload("notes.txt", Cursor::new(b"attached text".to_vec()))
        .await
        .expect("upload");

    assert_eq!(attachment.id, 8);
    assert_eq!(attachment.size, 13);
}

#[tokio::test]
async fn test_error_body_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/projects/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"message": "No project.", "code": 6, "moreInfo": ""}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .project()
        .one("NOPE")
        .await
        .expect_err("missing project");

    match err {
        BacklogError::Api(api) => {
            assert_eq!(api.status_code, 404);
            assert_eq!(api.errors.len(), 1);
            assert_eq!(api.errors[0].code, 6);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/myself"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .user()
        .own()
        .await
        .expect_err("maintenance");

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.to_string(), "Status Code:503");
}

#[tokio::test]
async fn test_no_content_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/projects/TEST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .delete("projects/TEST", None)
        .await
        .expect("204 is not an error");
    assert!(response.is_none());
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on the discard port.
    let client = BacklogClient::with_timeout("http://127.0.0.1:9", API_KEY, Duration::from_secs(2))
        .expect("client");

    let err = client.user().own().await.expect_err("connection refused");
    assert!(matches!(
        err,
        BacklogError::Transport(TransportError::Connection(_) | TransportError::Timeout)
    ));
}
