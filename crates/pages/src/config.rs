use std::collections::BTreeMap;

use catalog::links::{data_url, join_path};
use catalog::{CategoryAliases, DEFAULT_CATEGORY};
use foundation::{CategorySlug, DEFAULT_RECENCY_DAYS, RecencyWindow};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_INDEX_FILE: &str = "content-index.json";
pub const DEFAULT_LATEST_LIMIT: usize = 6;

/// Site-wide content settings. Every field has a default, so partial JSON
/// overrides are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub data_dir: String,
    pub fallback_category: String,
    pub index_file: String,
    pub recency_days: i64,
    pub latest_limit: usize,
    /// Extra alias → slug entries layered over the built-in table.
    pub aliases: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            fallback_category: DEFAULT_CATEGORY.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            recency_days: DEFAULT_RECENCY_DAYS,
            latest_limit: DEFAULT_LATEST_LIMIT,
            aliases: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    pub fn aliases(&self) -> CategoryAliases {
        let mut aliases = CategoryAliases::default().with_fallback(&self.fallback_category);
        for (alias, slug) in &self.aliases {
            aliases.insert(alias, slug);
        }
        aliases
    }

    pub fn recency(&self) -> RecencyWindow {
        RecencyWindow::days(self.recency_days)
    }

    pub fn category_data_url(&self, category: &CategorySlug) -> String {
        data_url(&self.data_dir, category)
    }

    pub fn index_url(&self) -> String {
        join_path(&self.data_dir, &self.index_file)
    }
}
