//! Storefront link builders.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::documents::DocumentId;

pub const SHOP_PATH: &str = "/shop";

/// Characters left alone by a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters left alone by `application/x-www-form-urlencoded` serialization.
/// Spaces are handled separately (`+`).
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Serializes pairs as a form-encoded query string, without the leading `?`.
#[must_use]
pub fn form_encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `/shop` with the given query pairs, or bare `/shop` when there are none.
#[must_use]
pub fn shop_href(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        SHOP_PATH.to_string()
    } else {
        format!("{SHOP_PATH}?{}", form_encode_pairs(pairs))
    }
}

#[must_use]
pub fn category_href(id: &DocumentId) -> String {
    format!("{SHOP_PATH}?category={}", encode_uri_component(&id.to_string()))
}

#[must_use]
pub fn product_href(slug: &str) -> String {
    format!("/products/{slug}")
}

/// Target of the header search form. Blank input does not navigate.
#[must_use]
pub fn search_href(input: &str) -> Option<String> {
    let query = input.trim();
    if query.is_empty() {
        None
    } else {
        Some(format!("{SHOP_PATH}?q={}", encode_uri_component(query)))
    }
}
