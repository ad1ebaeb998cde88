//! Item API: a minimal CRUD service over an in-memory item store.
//!
//! Items are created, fetched, replaced and deleted over HTTP. Input is
//! validated before it can reach the store:
//!
//! ```text
//! id:          integer > 0
//! name:        3..=50 characters, not blank
//! description: optional, at most 200 characters
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`item`]: Item type, validation and operations
//! - [`store`]: In-process item store
//! - [`api`]: HTTP handlers, routes and OpenAPI document
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod item;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError, StoreError, ValidationErrors, Violation};
pub use item::Item;
pub use store::ItemStore;
