use pages::SiteConfig;
use regions::MapConfig;
use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::log;

/// Id of the optional `<script type="application/json">` block carrying
/// overrides for the built-in tables.
pub const CONFIG_ELEMENT_ID: &str = "redlife-config";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub site: SiteConfig,
    pub map: MapConfig,
}

pub fn parse_page_config(json: &str) -> Result<PageConfig, serde_json::Error> {
    if json.trim().is_empty() {
        return Ok(PageConfig::default());
    }
    serde_json::from_str(json)
}

/// Reads the config block, falling back to defaults when it is absent or
/// malformed.
pub fn load(document: &Document) -> PageConfig {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let text = el.text_content().unwrap_or_default();
    match parse_page_config(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn(&format!("ignoring #{CONFIG_ELEMENT_ID}: {e}"));
            PageConfig::default()
        }
    }
}
