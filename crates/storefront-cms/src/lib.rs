//! Client for the headless content store backing the storefront.

pub mod client;
pub mod error;
pub mod query_string;
mod retry;
pub mod types;

pub use client::CmsClient;
pub use error::CmsError;
pub use query_string::{flatten_json, where_pairs};
pub use types::{CategoryQuery, PaginatedDocs, ProductQuery};
