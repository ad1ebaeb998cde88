//! Item record, input validation and store operations.

pub mod operations;
pub mod types;
pub mod validation;

pub use operations::{create_item, delete_item, get_item, update_item};
pub use types::{Detail, Item, Message, ValidationDetail};
pub use validation::{parse_item_id, validate_item};
