use super::*;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn get_me_returns_user_with_roles() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200).json_body(json!({
            "id": "u1",
            "username": "alice",
            "full_name": "Alice Example",
            "roles": ["admin", "editor"]
        }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let user = api.get_me().await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.roles, vec!["admin".to_string(), "editor".to_string()]);
}

#[tokio::test]
async fn get_me_surfaces_api_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(401).json_body(json!({
            "error": "Session expired",
            "code": "UNAUTHORIZED"
        }));
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api.get_me().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.error, "Session expired");
}

#[tokio::test]
async fn get_me_maps_plain_failures_to_status_codes() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(502).body("bad gateway");
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api.get_me().await.unwrap_err();
    assert_eq!(err.code, "HTTP_502");
}

#[tokio::test]
async fn get_me_reports_malformed_success_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200).body("not json");
    });

    let api = ApiClient::new_with_base_url(server.url("/api"));
    let err = api.get_me().await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
}
