//! HTTP API route definitions.

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState, HealthResponse};
use crate::error::Violation;
use crate::item::{Detail, Item, Message, ValidationDetail};

/// OpenAPI document served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item API",
        version = "1.0.0",
        description = "A simple CRUD API for managing items"
    ),
    paths(
        handlers::read_root,
        handlers::health,
        handlers::create_item,
        handlers::get_item,
        handlers::update_item,
        handlers::delete_item
    ),
    components(schemas(Item, Detail, Message, ValidationDetail, Violation, HealthResponse)),
    tags(
        (name = "items", description = "Item CRUD operations"),
        (name = "health", description = "Liveness and welcome endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health endpoints
        .route("/", get(handlers::read_root))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics_handler))
        // Item endpoints
        .route("/items", post(handlers::create_item))
        .route("/items/", post(handlers::create_item))
        .route(
            "/items/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        // Docs
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
