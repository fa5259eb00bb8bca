use foundation::{CategorySlug, RegionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub id: RegionId,
    pub category: CategorySlug,
    /// Text for the hover overlay; derived from the id when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RegionSpec {
    pub fn new(id: &str, category: &str) -> Self {
        Self {
            id: RegionId::new(id),
            category: CategorySlug::new(category),
            name: None,
        }
    }

    /// `state4` reads as `Region 4` unless a name is configured.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.id.as_str().replacen("state", "Region ", 1),
        }
    }
}

/// Fixed region → category mapping for the map page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    regions: Vec<RegionSpec>,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::new(vec![
            RegionSpec::new("state1", "locations"),
            RegionSpec::new("state2", "items"),
            RegionSpec::new("state3", "puzzles"),
            RegionSpec::new("state4", "character-hooks"),
            RegionSpec::new("state5", "npc"),
            RegionSpec::new("state6", "contact"),
            RegionSpec::new("state7", "story-hooks"),
            RegionSpec::new("state8", "site-lore"),
            RegionSpec::new("state9", "submit-your-own"),
            RegionSpec::new("state10", "secrets"),
        ])
    }
}

impl RegionTable {
    /// Later duplicates of an id are dropped.
    pub fn new(regions: Vec<RegionSpec>) -> Self {
        let mut out: Vec<RegionSpec> = Vec::with_capacity(regions.len());
        for spec in regions {
            if !out.iter().any(|r| r.id == spec.id) {
                out.push(spec);
            }
        }
        Self { regions: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionSpec> + '_ {
        self.regions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RegionId> + '_ {
        self.regions.iter().map(|r| &r.id)
    }

    pub fn get(&self, id: &RegionId) -> Option<&RegionSpec> {
        self.regions.iter().find(|r| &r.id == id)
    }

    pub fn category_for(&self, id: &RegionId) -> Option<&CategorySlug> {
        self.get(id).map(|r| &r.category)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RegionSpec, RegionTable};
    use foundation::RegionId;

    #[test]
    fn default_table_matches_site_layout() {
        let t = RegionTable::default();
        assert_eq!(t.len(), 10);
        let cat = |id: &str| t.category_for(&RegionId::new(id)).map(|c| c.to_string());
        assert_eq!(cat("state1").as_deref(), Some("locations"));
        assert_eq!(cat("state4").as_deref(), Some("character-hooks"));
        assert_eq!(cat("state10").as_deref(), Some("secrets"));
        assert_eq!(cat("state11"), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(RegionSpec::new("state7", "x").display_name(), "Region 7");
        let mut named = RegionSpec::new("state7", "x");
        named.name = Some("The Marsh".to_string());
        assert_eq!(named.display_name(), "The Marsh");
    }

    #[test]
    fn duplicates_are_dropped_and_json_round_trips() {
        let t = RegionTable::new(vec![
            RegionSpec::new("a1", "items"),
            RegionSpec::new("A1", "npc"),
        ]);
        assert_eq!(t.len(), 1);
        let parsed: RegionTable =
            serde_json::from_str(r#"[{"id": "north", "category": "Locations", "name": "North"}]"#)
                .unwrap();
        assert_eq!(parsed.iter().next().map(|r| r.category.as_str()), Some("locations"));
    }
}
