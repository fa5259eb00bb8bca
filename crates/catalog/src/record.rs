use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CatalogError;

/// One narrative entry from a category data file (`data/<category>.json`).
///
/// Every field except `id` is optional in the source JSON. `id` and
/// `difficulty` may be written as numbers; they are read as strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default, deserialize_with = "string_like_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<String>,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub complications: Vec<String>,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub rewards: Vec<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ContentRecord {
    /// Title shown on cards and detail pages; falls back to the id.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(&self.id)
    }

    pub fn summary(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(self.region.as_deref())
    }

    pub fn difficulty(&self) -> Option<&str> {
        non_empty(self.difficulty.as_deref())
    }

    pub fn updated(&self) -> Option<&str> {
        non_empty(self.updated.as_deref())
    }

    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }
}

/// One row of the flat content index that feeds the home page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    #[serde(default, deserialize_with = "string_like_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "string_like_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "string_like", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IndexEntry {
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(&self.id)
    }

    pub fn summary(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }

    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }
}

/// Parses a category data file. The payload must be a JSON array.
pub fn parse_records(json: &str, source_name: &str) -> Result<Vec<ContentRecord>, CatalogError> {
    parse_array(json, source_name)
}

/// Parses the flat content index. The payload must be a JSON array.
pub fn parse_index(json: &str, source_name: &str) -> Result<Vec<IndexEntry>, CatalogError> {
    parse_array(json, source_name)
}

fn parse_array<T>(json: &str, source_name: &str) -> Result<Vec<T>, CatalogError>
where
    T: for<'de> Deserialize<'de>,
{
    let value: Value =
        serde_json::from_str(json).map_err(|e| CatalogError::Corrupt(format!("{source_name}: {e}")))?;
    let Value::Array(items) = value else {
        return Err(CatalogError::NotAnArray {
            source_name: source_name.to_string(),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| CatalogError::Corrupt(format!("{source_name}[{i}]: {e}")))
        })
        .collect()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_like<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?.and_then(scalar_to_string))
}

fn string_like_or_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_like(d)?.unwrap_or_default())
}

// Non-array values and non-scalar items are dropped rather than rejected.
fn string_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(d)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::{ContentRecord, parse_index, parse_records};
    use crate::error::CatalogError;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_record() {
        let json = r#"[{
            "id": "old-mill",
            "title": "The Old Mill",
            "summary": "A ruin by the river.",
            "tags": ["ruin", "river"],
            "region": "north",
            "difficulty": 3,
            "body": ["First.", "Second."],
            "hooks": ["A light at night"],
            "createdAt": "2024-05-01"
        }]"#;
        let records = parse_records(json, "locations.json").unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, "old-mill");
        assert_eq!(r.display_title(), "The Old Mill");
        assert_eq!(r.difficulty(), Some("3"));
        assert_eq!(r.tags, vec!["ruin".to_string(), "river".to_string()]);
        assert_eq!(r.body.len(), 2);
        assert_eq!(r.hooks, vec!["A light at night".to_string()]);
        assert!(r.rewards.is_empty());
        assert_eq!(r.created_at(), "2024-05-01");
    }

    #[test]
    fn numeric_id_and_missing_fields() {
        let records = parse_records(r#"[{"id": 42}, {}]"#, "items.json").unwrap();
        assert_eq!(records[0].id, "42");
        assert_eq!(records[0].display_title(), "42");
        assert_eq!(records[1], ContentRecord::default());
    }

    #[test]
    fn empty_title_falls_back_to_id() {
        let records = parse_records(r#"[{"id": "x", "title": ""}]"#, "items.json").unwrap();
        assert_eq!(records[0].display_title(), "x");
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let err = parse_records(r#"{"id": "x"}"#, "data/items.json").unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotAnArray {
                source_name: "data/items.json".to_string()
            }
        );
        assert_eq!(err.to_string(), "expected an array in data/items.json");
    }

    #[test]
    fn malformed_json_is_corrupt() {
        assert!(matches!(
            parse_records("[{", "items.json"),
            Err(CatalogError::Corrupt(_))
        ));
    }

    #[test]
    fn parses_index_entries() {
        let json = r#"[{"id": "a", "category": "items", "createdAt": "2024-01-02", "url": "x.html", "image": "a.png"}]"#;
        let entries = parse_index(json, "content-index.json").unwrap();
        assert_eq!(entries[0].category, "items");
        assert_eq!(entries[0].url.as_deref(), Some("x.html"));
        assert_eq!(entries[0].image.as_deref(), Some("a.png"));
        assert_eq!(entries[0].created_at(), "2024-01-02");
    }
}
