//! Entity records returned by the remote collection
//!
//! The core treats everything beyond `id` as opaque pass-through data for
//! the presentation layer; no invariant depends on field content except
//! `id` uniqueness within one page.

use serde::{Deserialize, Serialize};

/// One character record as returned by the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier within a page, used as the list key
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    /// The remote calls this field `type`; it is a keyword here
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: Place,
    #[serde(default)]
    pub location: Place,
    /// Avatar image URL, passed through untouched
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

/// A named place reference (origin or last known location)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Pagination metadata the remote sends alongside each page
///
/// Parsed leniently; the core ignores it apart from surfacing `pages` in
/// status output. Navigation never consults `next`/`prev`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// The wire envelope: one page of characters plus metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: PageInfo,
    /// The records for this page, in remote order; may be empty
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// Number of records in this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this page carries no records
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
