//! Flattening of nested JSON into the bracket-notation query pairs the
//! content store's REST API parses (`where[and][0][_status][equals]=published`).

use serde_json::Value;
use storefront_core::Predicate;

/// Appends one `(key, value)` pair per scalar leaf of `value`.
///
/// Objects and arrays extend the key with `[name]` / `[index]`. `null`
/// becomes an empty value. Empty objects and arrays produce nothing.
pub fn flatten_json(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_json(&format!("{prefix}[{key}]"), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_json(&format!("{prefix}[{index}]"), child, out);
            }
        }
        Value::String(s) => out.push((prefix.to_owned(), s.clone())),
        Value::Number(n) => out.push((prefix.to_owned(), n.to_string())),
        Value::Bool(b) => out.push((prefix.to_owned(), b.to_string())),
        Value::Null => out.push((prefix.to_owned(), String::new())),
    }
}

/// Query pairs for a `where` clause built from `predicate`.
#[must_use]
pub fn where_pairs(predicate: &Predicate) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    flatten_json("where", &predicate.to_where(), &mut pairs);
    pairs
}
