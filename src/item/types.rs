//! Item types and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Violation;

/// Minimum name length in characters.
pub const NAME_MIN_LEN: usize = 3;
/// Maximum name length in characters.
pub const NAME_MAX_LEN: usize = 50;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// A stored item.
///
/// Instances are only built by [`validate_item`](super::validate_item), so every
/// `Item` held by the store satisfies the field constraints below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Identifier, strictly positive. Doubles as the store key.
    #[schema(minimum = 1, example = 1)]
    pub id: i64,
    /// Display name, 3 to 50 characters, not blank.
    #[schema(min_length = 3, max_length = 50, example = "Item1")]
    pub name: String,
    /// Optional free text, at most 200 characters.
    #[serde(default)]
    #[schema(max_length = 200, example = "A test item")]
    pub description: Option<String>,
}

impl Item {
    /// Create an item without checking constraints.
    ///
    /// Used by tests and fixtures; request input goes through validation.
    pub fn new(id: i64, name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

/// `{"detail": "..."}` body used for store errors and delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Detail {
    /// Human readable outcome.
    pub detail: String,
}

impl Detail {
    /// Wrap a message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// `{"message": "..."}` body of the welcome endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    /// Welcome text.
    pub message: String,
}

/// 422 body listing every violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationDetail {
    /// Violations in rule order.
    pub detail: Vec<Violation>,
}
