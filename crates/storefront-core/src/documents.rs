//! Shared shapes of documents returned by the content store.
//!
//! ## Observed shape
//!
//! ### IDs
//! Postgres-backed stores return numeric IDs (`42`), document-database stores
//! return strings (`"6650f0c2..."`). [`DocumentId`] accepts both.
//!
//! ### Relationships
//! A relationship field holds either the populated document (an object) or,
//! when the query depth did not reach it, the bare ID. Access rules can also
//! leave `null` in place of a document. [`Relation`] keeps the populated case
//! typed and everything else as raw JSON.
//!
//! ### Nulls
//! Optional array fields come back as `null` rather than `[]` on documents
//! created before the field existed; see [`null_as_empty`].

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a content-store document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{n}"),
            DocumentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DocumentId {
    fn from(value: i64) -> Self {
        DocumentId::Number(value)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        DocumentId::Text(value.to_string())
    }
}

/// A relationship slot: the populated document, or whatever the store left there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Populated(T),
    Unpopulated(serde_json::Value),
}

impl<T> Relation<T> {
    #[must_use]
    pub fn populated(&self) -> Option<&T> {
        match self {
            Relation::Populated(doc) => Some(doc),
            Relation::Unpopulated(_) => None,
        }
    }
}

/// An uploaded media document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: DocumentId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Deserializes `null` or a missing field as `T::default()`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
