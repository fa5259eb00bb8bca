//! User-visible strings shared by the page builders and the browser glue.

pub const COLLECTION_SUBTITLE: &str = "Browse entries. Add new content by editing data JSON files.";
pub const EMPTY_LIST: &str = "No entries yet.";
pub const MISSING_ID: &str = "Missing id.";
pub const NEW_BADGE: &str = "New";

pub fn load_failed(category: &str) -> String {
    format!("Could not load data for \"{category}\".")
}

pub fn not_found(id: &str) -> String {
    format!("Not found: {id}")
}

pub fn back_to(title: &str) -> String {
    format!("Back to {title}")
}
