//! Key-naming normalization at the wire boundary.
//!
//! The backend speaks snake_case JSON; everything client-side (typed
//! records, UI payloads) is camelCase. Conversion is a recursive walk over
//! `serde_json::Value`, so nested objects and arrays keep one convention
//! end to end. Keys that are already all-lowercase without underscores
//! pass through both directions unchanged, and non-object values are
//! never touched.

use serde_json::Value;

/// Convert every map key from camelCase to snake_case (outbound payloads).
pub fn snake_case_keys(value: Value) -> Value {
    transform(value, camel_to_snake)
}

/// Convert every map key from snake_case to camelCase (inbound payloads).
pub fn camel_case_keys(value: Value) -> Value {
    transform(value, snake_to_camel)
}

fn transform(value: Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform(item, rename))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, item)| (rename(&key), transform(item, rename)))
                .collect(),
        ),
        other => other,
    }
}

/// "personId" → "person_id". Keys without uppercase letters are unchanged.
fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// "person_id" → "personId". Only an underscore followed by a lowercase
/// ASCII letter collapses; anything else is kept as-is.
fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    chars.next();
                    out.push(next.to_ascii_uppercase());
                    continue;
                }
            }
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}
