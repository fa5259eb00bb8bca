use serde::{Deserialize, Serialize};

use crate::lookup::LabelLookup;
use crate::table::RegionTable;

/// Hover-clear debounce; long enough to move between a shape and its label.
pub const DEFAULT_CLEAR_DELAY_MS: u32 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub clear_delay_ms: u32,
    pub dim_opacity: String,
    pub active_opacity: String,
    pub active_stroke: String,
    pub active_stroke_width: String,
    pub active_filter: String,
    /// Near-transparent fill that keeps unfilled shapes hoverable.
    pub hit_fill: String,
    pub transition: String,
    /// Class toggled on the hover overlay while a region is active.
    pub visible_class: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            clear_delay_ms: DEFAULT_CLEAR_DELAY_MS,
            dim_opacity: "0.35".to_string(),
            active_opacity: "1".to_string(),
            active_stroke: "rgba(255,255,255,0.9)".to_string(),
            active_stroke_width: "3".to_string(),
            active_filter: "drop-shadow(0 6px 10px rgba(0,0,0,0.35)) \
                            drop-shadow(0 0 10px rgba(180,220,255,0.55))"
                .to_string(),
            hit_fill: "rgba(255,255,255,0.01)".to_string(),
            transition: "filter 0.18s ease-out, stroke 0.18s ease-out, \
                         stroke-width 0.18s ease-out, opacity 0.18s ease-out"
                .to_string(),
            visible_class: "is-visible".to_string(),
        }
    }
}

/// Everything the map page needs to bind its regions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub regions: RegionTable,
    pub lookup: LabelLookup,
    pub highlight: HighlightConfig,
}
