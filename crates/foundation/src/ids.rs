use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Case folding shared by region ids and the label values they are
/// searched for in.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Identifier of an interactive map region, e.g. `state4`.
///
/// Keeps the configured spelling (trimmed) for element lookups, which are
/// case-sensitive in the DOM. Equality, ordering and hashing use the
/// case-folded [`key`](Self::key).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RegionId {
    raw: String,
    key: String,
}

impl RegionId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref().trim().to_string();
        let key = fold_case(&raw);
        RegionId { raw, key }
    }

    /// The id as configured; matches the shape's `id` attribute.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-folded form used for label matching and comparisons.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for RegionId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for RegionId {}

impl Hash for RegionId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for RegionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RegionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl From<String> for RegionId {
    fn from(value: String) -> Self {
        RegionId::new(value)
    }
}

impl From<RegionId> for String {
    fn from(value: RegionId) -> Self {
        value.raw
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Canonical lowercase-hyphenated content collection id, e.g. `character-hooks`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(raw: impl AsRef<str>) -> Self {
        CategorySlug(raw.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for CategorySlug {
    fn from(value: String) -> Self {
        CategorySlug::new(value)
    }
}

impl From<&str> for CategorySlug {
    fn from(value: &str) -> Self {
        CategorySlug::new(value)
    }
}

impl From<CategorySlug> for String {
    fn from(value: CategorySlug) -> Self {
        value.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
