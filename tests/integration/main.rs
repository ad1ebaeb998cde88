//! End-to-end tests for the Item API router.
//!
//! Run with: cargo test --test integration
//!
//! Each test drives one shared router through a sequence of requests, the
//! same way a client talking to a running server would.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use item_api::api::{create_router, AppState};
use item_api::{Item, ItemStore};

/// Send one request through a clone of the router.
async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Create, read, update and delete one item, checking every status and body.
#[tokio::test]
async fn test_item_lifecycle() {
    let app = create_router(AppState::new());

    let (status, body) = call(
        &app,
        "POST",
        "/items/",
        Some(json!({"id": 1, "name": "Item1", "description": "A test item"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Item1");

    let (status, body) = call(&app, "GET", "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, body) = call(&app, "GET", "/items/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");

    let (status, body) = call(
        &app,
        "PUT",
        "/items/1",
        Some(json!({"id": 1, "name": "UpdatedItem", "description": "Updated description"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "UpdatedItem");

    let (status, body) = call(
        &app,
        "PUT",
        "/items/999",
        Some(json!({"id": 999, "name": "NonExistent", "description": "Does not exist"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");

    let (status, body) = call(&app, "DELETE", "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], "Item 1 deleted successfully");

    let (status, body) = call(&app, "DELETE", "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");

    let (status, body) = call(&app, "DELETE", "/items/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");
}

/// A full replacement drops fields the new body leaves out.
#[tokio::test]
async fn test_update_replaces_whole_record() {
    let store = ItemStore::new();
    let app = create_router(AppState::with_store(store.clone()));

    call(
        &app,
        "POST",
        "/items/",
        Some(json!({"id": 2, "name": "Widget", "description": "Blue"})),
    )
    .await;

    let (status, body) = call(&app, "PUT", "/items/2", Some(json!({"id": 2, "name": "Gadget"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "name": "Gadget", "description": null}));

    let (_, body) = call(&app, "GET", "/items/2", None).await;
    assert_eq!(body, json!({"id": 2, "name": "Gadget", "description": null}));
    assert_eq!(store.get(2), Some(Item::new(2, "Gadget", None)));
}

/// Duplicate creates are rejected and keep the first value.
#[tokio::test]
async fn test_duplicate_create_keeps_original() {
    let app = create_router(AppState::new());

    let first = json!({"id": 5, "name": "First", "description": null});
    let (status, _) = call(&app, "POST", "/items/", Some(first.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, "POST", "/items/", Some(json!({"id": 5, "name": "Second"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Item already exists with this ID");

    let (_, body) = call(&app, "GET", "/items/5", None).await;
    assert_eq!(body, first);
}

/// Field constraints are enforced at the boundary.
#[tokio::test]
async fn test_validation_rules() {
    let store = ItemStore::new();
    let app = create_router(AppState::with_store(store.clone()));

    let rejected = [
        json!({"id": 1, "name": "ab"}),
        json!({"id": 1, "name": "     "}),
        json!({"id": 0, "name": "abc"}),
        json!({"id": -3, "name": "abc"}),
        json!({"id": 1, "name": "abc", "description": "x".repeat(201)}),
        json!({"name": "abc"}),
    ];
    for body in rejected {
        let (status, _) = call(&app, "POST", "/items/", Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
    }
    assert!(store.is_empty());

    let (status, _) = call(&app, "POST", "/items/", Some(json!({"id": 1, "name": "abc"}))).await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Concurrent creates of the same id admit exactly one.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_same_id() {
    let store = ItemStore::new();
    let app = create_router(AppState::with_store(store.clone()));

    let tasks: Vec<_> = (0..20)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                call(
                    &app,
                    "POST",
                    "/items/",
                    Some(json!({"id": 42, "name": format!("Racer{n}")})),
                )
                .await
                .0
            })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        if task.await.unwrap() == StatusCode::CREATED {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(store.len(), 1);
}
