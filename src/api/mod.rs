//! HTTP API module: item CRUD, health, docs and metrics endpoints.

pub mod error;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_router, ApiDoc};
