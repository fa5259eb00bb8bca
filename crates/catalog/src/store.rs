use std::collections::{BTreeMap, HashSet};

use foundation::CategorySlug;

use crate::error::CatalogError;
use crate::record::ContentRecord;

/// Loaded category arrays, keyed by slug.
///
/// Record order inside a category is the order of the source file.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogStore {
    categories: BTreeMap<CategorySlug, Vec<ContentRecord>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a single-category store, rejecting missing or duplicate ids.
    pub fn from_records(
        category: CategorySlug,
        records: Vec<ContentRecord>,
    ) -> Result<Self, CatalogError> {
        let mut store = Self::new();
        store.insert_category(category, records)?;
        Ok(store)
    }

    /// Replaces the records of `category`.
    pub fn insert_category(
        &mut self,
        category: CategorySlug,
        records: Vec<ContentRecord>,
    ) -> Result<(), CatalogError> {
        check_ids(&category, &records)?;
        self.categories.insert(category, records);
        Ok(())
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategorySlug> + '_ {
        self.categories.keys()
    }

    pub fn list(&self, category: &CategorySlug) -> &[ContentRecord] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Exact, case-sensitive id lookup.
    pub fn get(&self, category: &CategorySlug, id: &str) -> Option<&ContentRecord> {
        find_record(self.list(category), id)
    }
}

/// First record whose id string equals `id` exactly.
pub fn find_record<'a>(records: &'a [ContentRecord], id: &str) -> Option<&'a ContentRecord> {
    records.iter().find(|r| r.id == id)
}

/// Every record needs a non-empty id, unique within its category.
pub fn check_ids(category: &CategorySlug, records: &[ContentRecord]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(CatalogError::MissingId {
                category: category.to_string(),
                position,
            });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                category: category.to_string(),
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{InMemoryCatalogStore, find_record};
    use crate::error::CatalogError;
    use crate::record::ContentRecord;
    use foundation::CategorySlug;

    fn rec(id: &str) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            ..ContentRecord::default()
        }
    }

    #[test]
    fn get_is_exact_match() {
        let items = CategorySlug::new("items");
        let store =
            InMemoryCatalogStore::from_records(items.clone(), vec![rec("key"), rec("Key2")]).unwrap();
        assert_eq!(store.get(&items, "key").map(|r| r.id.as_str()), Some("key"));
        assert!(store.get(&items, "KEY").is_none());
        assert!(store.get(&items, "ke").is_none());
    }

    #[test]
    fn unknown_category_lists_nothing() {
        let store = InMemoryCatalogStore::new();
        assert!(store.list(&CategorySlug::new("items")).is_empty());
    }

    #[test]
    fn rejects_duplicates_and_missing_ids() {
        let items = CategorySlug::new("items");
        let dup = InMemoryCatalogStore::from_records(items.clone(), vec![rec("a"), rec("a")]);
        assert_eq!(
            dup.unwrap_err(),
            CatalogError::DuplicateId {
                category: "items".to_string(),
                id: "a".to_string()
            }
        );
        let missing = InMemoryCatalogStore::from_records(items, vec![rec("a"), rec(" ")]);
        assert!(matches!(
            missing,
            Err(CatalogError::MissingId { position: 1, .. })
        ));
    }

    #[test]
    fn find_record_returns_first_match() {
        let records = vec![rec("x"), rec("y")];
        assert_eq!(find_record(&records, "y").map(|r| &r.id), Some(&"y".to_string()));
        assert!(find_record(&records, "z").is_none());
    }
}
