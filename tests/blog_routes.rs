//! End-to-end route tests over the in-memory repository.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use blog_api::error::ErrorCause;
use blog_api::{app, AppConfig, AppState, Blog, Container, MemoryBlogRepository};
use rstest::{fixture, rstest};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const MIB: usize = 1024 * 1024;

fn router_with_body_limit(body_limit: usize) -> Router {
    let mut config = AppConfig::with_database_url("postgres://localhost/blogs_test");
    config.body_limit = body_limit;
    app(AppState::new(Container::new(config), Arc::new(MemoryBlogRepository::new())))
}

#[fixture]
fn router() -> Router {
    let container = Container::new(AppConfig::with_database_url("postgres://localhost/blogs_test"));
    app(AppState::new(container, Arc::new(MemoryBlogRepository::new())))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

async fn create_blog(router: &Router, title: &str, body: &str) -> Blog {
    let (status, bytes) = send(router, Method::POST, "/blogs/", Some(json!({ "title": title, "body": body }))).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

#[rstest]
#[tokio::test]
async fn create_then_show_round_trips(router: Router) {
    let created = create_blog(&router, "my first blog post", "hello world!").await;
    assert_ne!(created.id, 0);
    assert_eq!(created.title, "my first blog post");
    assert_eq!(created.body, "hello world!");

    let (status, bytes) = send(&router, Method::GET, &format!("/blogs/{}", created.id), None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Blog = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test]
async fn index_lists_live_blogs(router: Router) {
    let (status, bytes) = send(&router, Method::GET, "/blogs/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&bytes), json!([]));

    let first = create_blog(&router, "one", "first").await;
    let second = create_blog(&router, "two", "second").await;
    let (_, bytes) = send(&router, Method::DELETE, &format!("/blogs/{}", first.id), None).await;
    assert!(bytes.is_empty());

    let (status, bytes) = send(&router, Method::GET, "/blogs/", None).await;
    assert_eq!(status, StatusCode::OK);
    let blogs: Vec<Blog> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(blogs, vec![second]);
}

#[rstest]
#[tokio::test]
async fn delete_then_show_is_not_found(router: Router) {
    let blog = create_blog(&router, "short lived", "bye").await;

    let (status, bytes) = send(&router, Method::DELETE, &format!("/blogs/{}", blog.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, bytes) = send(&router, Method::GET, &format!("/blogs/{}", blog.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&bytes), json!({ "code": 404, "message": "Not Found" }));
}

#[rstest]
#[tokio::test]
async fn delete_of_unknown_id_is_no_content(router: Router) {
    let (status, _) = send(&router, Method::DELETE, "/blogs/12345", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test]
async fn word_count_of_body(router: Router) {
    let blog = create_blog(
        &router,
        "colours",
        "red red red blue green green yellow yellow yellow yellow",
    )
    .await;

    let (status, bytes) = send(&router, Method::GET, &format!("/blogs/{}/words", blog.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&bytes), json!({ "red": 3, "blue": 1, "green": 2, "yellow": 4 }));
}

#[rstest]
#[tokio::test]
async fn word_count_of_missing_blog_is_not_found(router: Router) {
    let (status, _) = send(&router, Method::GET, "/blogs/77/words", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn new_is_not_implemented(router: Router) {
    let (status, bytes) = send(&router, Method::GET, "/blogs/new", None).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(json_of(&bytes), json!({ "code": 501, "message": "Not Implemented" }));
    assert!(!String::from_utf8_lossy(&bytes).contains("action is not implemented"));
}

#[rstest]
#[case("/blogs/abc")]
#[case("/blogs/1.5")]
#[case("/nowhere")]
#[tokio::test]
async fn unmatched_paths_are_not_found(router: Router, #[case] uri: &str) {
    let (status, bytes) = send(&router, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_of(&bytes)["message"], "Not Found");
}

#[rstest]
#[tokio::test]
async fn update_replaces_title_and_body(router: Router) {
    let blog = create_blog(&router, "draft", "first body").await;

    let (status, bytes) = send(
        &router,
        Method::PUT,
        &format!("/blogs/{}", blog.id),
        Some(json!({ "title": "final", "body": "second body" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Blog = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(updated.id, blog.id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.body, "second body");
    assert_eq!(updated.created_at, blog.created_at);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_blog_is_not_found(router: Router) {
    let (status, _) = send(
        &router,
        Method::PUT,
        "/blogs/404",
        Some(json!({ "title": "t", "body": "b" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case(json!({ "title": "no body" }))]
#[case(json!({ "body": "no title" }))]
#[case(json!({ "title": "", "body": "empty title" }))]
#[case(json!({ "title": "empty body", "body": "" }))]
#[case(json!("just a string"))]
#[tokio::test]
async fn create_rejects_incomplete_payloads(router: Router, #[case] payload: Value) {
    let (status, bytes) = send(&router, Method::POST, "/blogs/", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_of(&bytes), json!({ "code": 400, "message": "Bad Request" }));

    let (_, bytes) = send(&router, Method::GET, "/blogs/", None).await;
    assert_eq!(json_of(&bytes), json!([]));
}

#[rstest]
#[tokio::test]
async fn create_without_json_content_type_is_bad_request(router: Router) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/blogs/")
        .body(Body::from(r#"{"title":"t","body":"b"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[tokio::test]
async fn non_numeric_id_is_bad_request(router: Router, #[case] method: Method) {
    let (status, _) = send(&router, method, "/blogs/abc", Some(json!({ "title": "t", "body": "b" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn collection_requires_trailing_slash(router: Router) {
    let (status, _) = send(&router, Method::GET, "/blogs", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn common_routes_respond(router: Router) {
    let (status, bytes) = send(&router, Method::GET, "/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&bytes), json!({ "message": "pong" }));

    let (status, bytes) = send(&router, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&bytes)["database"], "ok");

    let (status, bytes) = send(&router, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&bytes)["name"], "blog-api");

    let (status, bytes) = send(&router, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json_of(&bytes)["paths"].get("/blogs/{id}/words").is_some());
}

#[rstest]
#[tokio::test]
async fn whitespace_only_fields_are_stored(router: Router) {
    let blog = create_blog(&router, "t", "   ").await;
    assert_eq!(blog.body, "   ");

    let (status, bytes) = send(&router, Method::GET, &format!("/blogs/{}/words", blog.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&bytes), json!({}));
}

#[tokio::test]
async fn configured_body_limit_above_extractor_default_is_honoured() {
    let router = router_with_body_limit(8 * MIB);
    let body = "word ".repeat(3 * MIB / 5);
    let (status, bytes) = send(&router, Method::POST, "/blogs/", Some(json!({ "title": "long read", "body": body }))).await;
    assert_eq!(status, StatusCode::OK);
    let created: Blog = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created.body.len(), body.len());
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn oversized_body_is_payload_too_large(#[case] with_content_length: bool) {
    let router = router_with_body_limit(1024);
    let payload = json!({ "title": "too long", "body": "x".repeat(5 * 1024) }).to_string();
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/blogs/")
        .header(header::CONTENT_TYPE, "application/json");
    if with_content_length {
        builder = builder.header(header::CONTENT_LENGTH, payload.len().to_string());
    }
    let response = router.clone().oneshot(builder.body(Body::from(payload)).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response.extensions().get::<ErrorCause>().is_some());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(json_of(&bytes), json!({ "code": 413, "message": "Payload Too Large" }));

    let (_, bytes) = send(&router, Method::GET, "/blogs/", None).await;
    assert_eq!(json_of(&bytes), json!([]));
}

#[rstest]
#[case(Method::PATCH, "/blogs/1")]
#[case(Method::DELETE, "/blogs/")]
#[case(Method::POST, "/ping")]
#[tokio::test]
async fn wrong_method_is_classified(router: Router, #[case] method: Method, #[case] uri: &str) {
    let (status, bytes) = send(&router, method, uri, None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json_of(&bytes), json!({ "code": 405, "message": "Method Not Allowed" }));
}

#[rstest]
#[tokio::test]
async fn error_cause_reaches_the_outer_layers(router: Router) {
    let request = Request::builder().uri("/blogs/999").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let ErrorCause(cause) = response.extensions().get::<ErrorCause>().cloned().unwrap();
    assert!(cause.contains("no rows"), "{cause}");
}
