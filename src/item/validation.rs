//! Decoding of untyped JSON input into a well-formed [`Item`].
//!
//! Rules run in field order (`id`, `name`, `description`) and every
//! violation is collected, so a single response can report all of them.

use serde_json::{Map, Value};

use super::types::{Item, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN};
use crate::error::{ValidationErrors, Violation};

/// Validate a request body and build an [`Item`] from it.
///
/// Unknown fields are ignored. A `null` or missing `description` yields
/// `None`; an empty string is kept as `Some("")`.
pub fn validate_item(body: &Value) -> Result<Item, ValidationErrors> {
    let Some(fields) = body.as_object() else {
        return Err(ValidationErrors::single(Violation::new(
            "body",
            "type",
            "body must be a JSON object",
        )));
    };

    let mut violations = Vec::new();
    let id = check_id(fields, &mut violations);
    let name = check_name(fields, &mut violations);
    let description = check_description(fields, &mut violations);

    match (id, name, description) {
        (Some(id), Some(name), Some(description)) if violations.is_empty() => Ok(Item {
            id,
            name,
            description,
        }),
        _ => Err(ValidationErrors(violations)),
    }
}

/// Parse the `{item_id}` path segment.
///
/// Any integer is accepted here; ids that were never stored simply miss.
pub fn parse_item_id(raw: &str) -> Result<i64, ValidationErrors> {
    raw.parse::<i64>().map_err(|_| {
        ValidationErrors::single(Violation::new(
            "item_id",
            "type",
            format!("'{raw}' is not a valid integer"),
        ))
    })
}

fn check_id(fields: &Map<String, Value>, violations: &mut Vec<Violation>) -> Option<i64> {
    let Some(value) = fields.get("id") else {
        violations.push(Violation::new("id", "missing", "field required"));
        return None;
    };

    let Some(id) = value.as_i64() else {
        violations.push(Violation::new("id", "type", "must be an integer"));
        return None;
    };

    if id <= 0 {
        violations.push(Violation::new("id", "greater_than", "must be greater than 0"));
        return None;
    }

    Some(id)
}

fn check_name(fields: &Map<String, Value>, violations: &mut Vec<Violation>) -> Option<String> {
    let Some(value) = fields.get("name") else {
        violations.push(Violation::new("name", "missing", "field required"));
        return None;
    };

    let Some(name) = value.as_str() else {
        violations.push(Violation::new("name", "type", "must be a string"));
        return None;
    };

    // Length is measured on the raw value; trimming only matters for blankness.
    let len = name.chars().count();
    if len < NAME_MIN_LEN {
        violations.push(Violation::new(
            "name",
            "min_length",
            format!("must be at least {NAME_MIN_LEN} characters"),
        ));
        return None;
    }
    if len > NAME_MAX_LEN {
        violations.push(Violation::new(
            "name",
            "max_length",
            format!("must be at most {NAME_MAX_LEN} characters"),
        ));
        return None;
    }

    if name.trim_matches(is_strippable).is_empty() {
        violations.push(Violation::new(
            "name",
            "not_blank",
            "Name cannot be blank or just spaces",
        ));
        return None;
    }

    Some(name.to_string())
}

/// Whitespace plus the ASCII information separators (U+001C..=U+001F).
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Returns `Some(None)` for an absent description and `None` on violation.
fn check_description(
    fields: &Map<String, Value>,
    violations: &mut Vec<Violation>,
) -> Option<Option<String>> {
    let description = match fields.get("description") {
        None | Some(Value::Null) => return Some(None),
        Some(Value::String(s)) => s,
        Some(_) => {
            violations.push(Violation::new("description", "type", "must be a string"));
            return None;
        }
    };

    if description.chars().count() > DESCRIPTION_MAX_LEN {
        violations.push(Violation::new(
            "description",
            "max_length",
            format!("must be at most {DESCRIPTION_MAX_LEN} characters"),
        ));
        return None;
    }

    Some(Some(description.clone()))
}
