//! Navigation conventions shared by the map and the content pages.

use foundation::CategorySlug;

pub const COLLECTION_PAGE: &str = "collection.html";
pub const DETAIL_PAGE: &str = "detail.html";

pub fn collection_url(category: &CategorySlug) -> String {
    format!(
        "{COLLECTION_PAGE}?category={}",
        urlencoding::encode(category.as_str())
    )
}

pub fn detail_url(category: &CategorySlug, id: &str) -> String {
    format!(
        "{DETAIL_PAGE}?category={}&id={}",
        urlencoding::encode(category.as_str()),
        urlencoding::encode(id)
    )
}

/// Location of a category data file under `data_dir`.
pub fn data_url(data_dir: &str, category: &CategorySlug) -> String {
    let file = format!("{}.json", urlencoding::encode(category.as_str()));
    join_path(data_dir, &file)
}

pub fn join_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
