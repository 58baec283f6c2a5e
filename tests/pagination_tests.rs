//! Integration tests for cursor pagination.
//!
//! Each page is a separate mock keyed on the `offset` query parameter, and
//! every mock declares how often it must be hit, so the exact request count
//! is verified when the server drops.

use std::time::Duration;

use kong_admin::clients::{Context, ListOpt, Page, PageState};
use kong_admin::{BaseUrl, HttpError, KongClient, KongConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> KongClient {
    let config = KongConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    KongClient::new(&config).unwrap()
}

async fn mount_page(
    server: &MockServer,
    offset: Option<&str>,
    body: serde_json::Value,
    expected_calls: u64,
) {
    let mock = Mock::given(method("GET")).and(path("/rbac/roles"));
    let mock = match offset {
        Some(offset) => mock.and(query_param("offset", offset)),
        None => mock.and(query_param_is_missing("offset")),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ============================================================================
// list_all
// ============================================================================

#[tokio::test]
async fn test_list_all_concatenates_pages_in_order() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"data": [1, 2], "offset": "p2"}), 1).await;
    mount_page(&server, Some("p2"), json!({"data": [3, 4], "offset": "p3"}), 1).await;
    mount_page(&server, Some("p3"), json!({"data": [5], "next": null}), 1).await;

    let client = client_for(&server);
    let all: Vec<u32> = client
        .list_all(&Context::background(), "/rbac/roles")
        .await
        .unwrap();

    assert_eq!(all, vec![1, 2, 3, 4, 5]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_all_uses_page_size_1000() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rbac/roles"))
        .and(query_param("size", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let all: Vec<u32> = client
        .list_all(&Context::background(), "/rbac/roles")
        .await
        .unwrap();

    assert!(all.is_empty());
}

#[tokio::test]
async fn test_empty_page_with_cursor_does_not_stop() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"data": [], "offset": "p2"}), 1).await;
    mount_page(&server, Some("p2"), json!({"data": [7]}), 1).await;

    let client = client_for(&server);
    let all: Vec<u32> = client
        .list_all(&Context::background(), "/rbac/roles")
        .await
        .unwrap();

    assert_eq!(all, vec![7]);
}

#[tokio::test]
async fn test_second_page_failure_returns_only_the_error() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"data": [1, 2], "offset": "p2"}), 1).await;
    Mock::given(method("GET"))
        .and(path("/rbac/roles"))
        .and(query_param("offset", "p2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .list_all::<u32>(&Context::background(), "/rbac/roles")
        .await;

    let error = result.unwrap_err();
    let api = error.api_error().unwrap();
    assert_eq!(api.code(), 500);
    assert_eq!(api.message(), "boom");
}

#[tokio::test]
async fn test_list_all_with_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rbac/roles"))
        .and(query_param("size", "2"))
        .and(query_param("tags", "prod,edge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [1]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let opt = ListOpt::new(2).with_tags(["prod", "edge"]).match_all_tags(true);
    let all: Vec<u32> = client
        .list_all_with(&Context::background(), "/rbac/roles", opt)
        .await
        .unwrap();

    assert_eq!(all, vec![1]);
}

// ============================================================================
// list_page and Paginator
// ============================================================================

#[tokio::test]
async fn test_list_page_returns_next_options() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        None,
        json!({"data": [1], "next": "/rbac/roles?offset=p2", "offset": "p2"}),
        1,
    )
    .await;

    let client = client_for(&server);
    let opt = ListOpt::new(1);
    let page: Page<u32> = client
        .list_page(&Context::background(), "/rbac/roles", Some(&opt))
        .await
        .unwrap();

    assert_eq!(page.items, vec![1]);
    assert_eq!(page.next.as_ref().and_then(ListOpt::offset), Some("p2"));
    assert_eq!(opt.offset(), None);
}

#[tokio::test]
async fn test_paginator_walks_pages() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"data": [1], "offset": "p2"}), 1).await;
    mount_page(&server, Some("p2"), json!({"data": [2]}), 1).await;

    let client = client_for(&server);
    let ctx = Context::background();
    let mut pages = client.paginate::<u32>("/rbac/roles", ListOpt::new(1));

    let mut seen = Vec::new();
    while let Some(page) = pages.next_page(&ctx).await {
        seen.push(page.unwrap());
    }

    assert_eq!(seen, vec![vec![1], vec![2]]);
    assert_eq!(pages.state(), PageState::Done);
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_cancel_mid_pagination_returns_no_items() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"data": [1], "offset": "p2"}), 1).await;
    Mock::given(method("GET"))
        .and(path("/rbac/roles"))
        .and(query_param("offset", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [2]}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (ctx, cancel) = Context::background().with_cancel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel.cancel();
    });

    let result = client.list_all::<u32>(&ctx, "/rbac/roles").await;

    assert!(matches!(result, Err(HttpError::Cancelled)));
}

#[tokio::test]
async fn test_parent_cancel_stops_list_under_child_context() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"data": [1], "offset": "p2"}), 1).await;
    Mock::given(method("GET"))
        .and(path("/rbac/roles"))
        .and(query_param("offset", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [2]}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (parent, cancel) = Context::background().with_cancel();
    let (child, _child_cancel) = parent.with_cancel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel.cancel();
    });

    let result = client.list_all::<u32>(&child, "/rbac/roles").await;

    assert!(matches!(result, Err(HttpError::Cancelled)));
}

#[tokio::test]
async fn test_expired_context_sends_no_request() {
    let server = MockServer::start().await;
    mount_page(&server, None, json!({"data": [1]}), 0).await;

    let client = client_for(&server);
    let ctx = Context::background().with_timeout(Duration::ZERO);

    let result = client.list_all::<u32>(&ctx, "/rbac/roles").await;

    assert!(matches!(result, Err(HttpError::DeadlineExceeded)));
}
