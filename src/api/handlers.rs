//! HTTP API handlers.

use std::fmt;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{ApiError, ValidationErrors, Violation};
use crate::item::{self, parse_item_id, validate_item, Detail, Item, Message, ValidationDetail};
use crate::metrics::{self, LatencyTimer, Operation};
use crate::store::ItemStore;

use super::error::outcome_label;

/// Text returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to the Item API. Visit /docs for Swagger UI.";

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Item store.
    pub store: ItemStore,
    /// Prometheus render handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state around an empty store, without metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state around an existing store.
    pub fn with_store(store: ItemStore) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    #[schema(value_type = String)]
    pub status: &'static str,
    /// Number of stored items.
    pub items: usize,
}

/// Welcome message for the root path.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Welcome message", body = Message))
)]
pub async fn read_root() -> Json<Message> {
    Json(Message {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        items: state.store.len(),
    })
}

/// Prometheus exposition, 404 when metrics are disabled.
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Create a new item. Returns 400 if an item with the same ID already exists.
#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Item already exists with this ID", body = Detail),
        (status = 422, description = "Validation error", body = ValidationDetail)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let _timer = LatencyTimer::new(Operation::Create);

    let result = decode_body(body)
        .and_then(|new_item| item::create_item(&state.store, new_item).map_err(ApiError::from));

    finish(Operation::Create, &state.store, result).map(|item| (StatusCode::CREATED, Json(item)))
}

/// Retrieve an item by its ID. Returns 404 if not found.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = Detail),
        (status = 422, description = "Invalid item id", body = ValidationDetail)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let _timer = LatencyTimer::new(Operation::Get);

    let result = parse_item_id(&item_id)
        .map_err(ApiError::from)
        .and_then(|id| item::get_item(&state.store, id).map_err(ApiError::from));

    finish(Operation::Get, &state.store, result).map(Json)
}

/// Replace an item by its ID. Returns 404 if not found.
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item identifier")),
    request_body = Item,
    responses(
        (status = 200, description = "Item replaced", body = Item),
        (status = 400, description = "Body id does not match path id", body = Detail),
        (status = 404, description = "Item not found", body = Detail),
        (status = 422, description = "Validation error", body = ValidationDetail)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let _timer = LatencyTimer::new(Operation::Update);

    let result = parse_item_id(&item_id)
        .map_err(ApiError::from)
        .and_then(|id| decode_body(body).map(|replacement| (id, replacement)))
        .and_then(|(id, replacement)| {
            item::update_item(&state.store, id, replacement).map_err(ApiError::from)
        });

    finish(Operation::Update, &state.store, result).map(Json)
}

/// Delete an item by its ID. Returns 404 if not found.
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item deleted", body = Detail),
        (status = 404, description = "Item not found", body = Detail),
        (status = 422, description = "Invalid item id", body = ValidationDetail)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Detail>, ApiError> {
    let _timer = LatencyTimer::new(Operation::Delete);

    let result = parse_item_id(&item_id)
        .map_err(ApiError::from)
        .and_then(|id| item::delete_item(&state.store, id).map_err(ApiError::from));

    finish(Operation::Delete, &state.store, result).map(|detail| Json(Detail::new(detail)))
}

/// Turn the extracted JSON body into a validated item.
fn decode_body(body: Result<Json<Value>, JsonRejection>) -> Result<Item, ApiError> {
    let Json(value) = body.map_err(|rejection| {
        ValidationErrors::single(Violation::new("body", "json", rejection.body_text()))
    })?;
    Ok(validate_item(&value)?)
}

/// Record metrics for a finished request.
fn finish<T>(
    operation: Operation,
    store: &ItemStore,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => outcome_label(e),
    };
    metrics::record_request(operation, outcome);
    metrics::set_items_stored(store.len());
    result
}
