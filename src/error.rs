//! Unified error types for the item service.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Startup and runtime errors for the service process.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),
}

/// Item store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An item with this id is already stored.
    #[error("item {id} already exists")]
    AlreadyExists {
        /// The colliding id.
        id: i64,
    },

    /// No item is stored under this id.
    #[error("item {id} not found")]
    NotFound {
        /// The missing id.
        id: i64,
    },

    /// The replacement item carries a different id than the key it is stored under.
    #[error("item id {body_id} does not match key {path_id}")]
    IdMismatch {
        /// Key the caller addressed.
        path_id: i64,
        /// Id carried by the replacement item.
        body_id: i64,
    },
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Offending field (`id`, `name`, `description`, `body` or `item_id`).
    #[schema(value_type = String)]
    pub field: &'static str,
    /// Constraint name, e.g. `min_length` or `greater_than`.
    #[schema(value_type = String)]
    pub constraint: &'static str,
    /// Human readable diagnostic.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(field: &'static str, constraint: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            constraint,
            message: message.into(),
        }
    }
}

/// Input rejected before reaching the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", summary(.0))]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    /// Wrap a single violation.
    pub fn single(violation: Violation) -> Self {
        Self(vec![violation])
    }

    /// All violations, in rule order.
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Check whether a given field/constraint pair was violated.
    pub fn has(&self, field: &str, constraint: &str) -> bool {
        self.0
            .iter()
            .any(|v| v.field == field && v.constraint == constraint)
    }
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body or path failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
