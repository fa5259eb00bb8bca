//! Offline checks and generators for a `data/` directory.

use std::fs;
use std::path::{Path, PathBuf};

use catalog::links::detail_url;
use catalog::{
    CatalogError, ContentRecord, IndexEntry, InMemoryCatalogStore, parse_records, sort_by_recency,
};
use foundation::CategorySlug;
use pages::{DEFAULT_INDEX_FILE, DetailView, nodes_to_html, render_filtered_list, resolve_detail};
use tracing::{debug, warn};

/// One `<category>.json` file found in the data directory.
#[derive(Debug)]
pub struct CategoryFile {
    pub category: CategorySlug,
    pub path: PathBuf,
    pub records: Result<Vec<ContentRecord>, CatalogError>,
}

fn io_err(path: &Path, e: std::io::Error) -> CatalogError {
    CatalogError::Io(format!("{}: {e}", path.display()))
}

/// Reads every category file under `dir`, sorted by file name. The content
/// index is skipped.
pub fn scan_data_dir(dir: &Path) -> Result<Vec<CategoryFile>, CatalogError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let path = entry.map_err(|e| io_err(dir, e))?.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_index = path.file_name().is_some_and(|n| n == DEFAULT_INDEX_FILE);
        if path.is_file() && is_json && !is_index {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let source = path.display().to_string();
            let records = fs::read_to_string(&path)
                .map_err(|e| io_err(&path, e))
                .and_then(|text| parse_records(&text, &source));
            debug!(file = %source, ok = records.is_ok(), "scanned");
            Ok(CategoryFile {
                category: CategorySlug::new(stem),
                path,
                records,
            })
        })
        .collect()
}

/// Loads every category file that passes the id checks. Each rejected
/// file yields one human-readable problem line.
pub fn load_catalog(dir: &Path) -> Result<(InMemoryCatalogStore, Vec<String>), CatalogError> {
    let mut store = InMemoryCatalogStore::new();
    let mut problems = Vec::new();
    for file in scan_data_dir(dir)? {
        let result = file
            .records
            .and_then(|records| store.insert_category(file.category, records));
        if let Err(e) = result {
            problems.push(format!("{}: {e}", file.path.display()));
        }
    }
    Ok((store, problems))
}

pub fn validate(dir: &Path) -> Result<Vec<String>, CatalogError> {
    load_catalog(dir).map(|(_, problems)| problems)
}

fn to_index_entry(category: &CategorySlug, record: &ContentRecord) -> IndexEntry {
    IndexEntry {
        id: record.id.clone(),
        title: record.title.clone(),
        summary: record.summary.clone(),
        category: category.to_string(),
        tags: record.tags.clone(),
        created_at: record.created_at.clone(),
        image: None,
        url: Some(detail_url(category, &record.id)),
    }
}

/// Flattens every valid category file into a recency-sorted index.
/// Rejected files are logged and left out.
pub fn build_index(dir: &Path) -> Result<Vec<IndexEntry>, CatalogError> {
    let (store, problems) = load_catalog(dir)?;
    for problem in &problems {
        warn!("skipped {problem}");
    }
    let mut entries: Vec<IndexEntry> = store
        .categories()
        .flat_map(|c| store.list(c).iter().map(move |r| to_index_entry(c, r)))
        .collect();
    sort_by_recency(&mut entries);
    Ok(entries)
}

pub fn write_index(entries: &[IndexEntry], out: &Path) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(entries).map_err(|e| CatalogError::Corrupt(e.to_string()))?;
    fs::write(out, json + "\n").map_err(|e| io_err(out, e))
}

/// HTML for the collection list, or the detail view when `id` is given.
pub fn preview(
    dir: &Path,
    category: &CategorySlug,
    id: Option<&str>,
    query: Option<&str>,
) -> Result<String, CatalogError> {
    let path = dir.join(format!("{category}.json"));
    let text = fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    let records = parse_records(&text, &path.display().to_string())?;

    let html = match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => match resolve_detail(category, &records, id) {
            DetailView::Record(nodes) => nodes_to_html(&nodes),
            DetailView::Message(text) => text,
        },
        None => nodes_to_html(&render_filtered_list(category, &records, query.unwrap_or(""))),
    };
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::{build_index, preview, validate, write_index};
    use catalog::parse_index;
    use foundation::CategorySlug;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn data_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("items.json"),
            r#"[
                {"id": "key", "title": "Brass Key", "tags": ["loot"], "createdAt": "2024-02-01"},
                {"id": "lamp", "summary": "Oil lamp", "createdAt": "2024-04-01"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("npc.json"),
            r#"[{"id": "miller", "title": "The Miller"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("content-index.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        dir
    }

    #[test]
    fn clean_directory_validates() {
        let dir = data_dir();
        assert_eq!(validate(dir.path()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn validation_reports_each_bad_file() {
        let dir = data_dir();
        fs::write(dir.path().join("puzzles.json"), r#"{"id": "x"}"#).unwrap();
        fs::write(dir.path().join("secrets.json"), r#"[{"id": "a"}, {"id": "a"}]"#).unwrap();
        let problems = validate(dir.path()).unwrap();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("puzzles.json"));
        assert!(problems[0].contains("expected an array"));
        assert!(problems[1].contains("secrets.json"));
    }

    #[test]
    fn index_is_sorted_and_linked() {
        let dir = data_dir();
        let entries = build_index(dir.path()).unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["lamp", "key", "miller"]);
        assert_eq!(entries[1].category, "items");
        assert_eq!(entries[1].url.as_deref(), Some("detail.html?category=items&id=key"));
        assert_eq!(entries[1].tags, vec!["loot".to_string()]);

        let out = dir.path().join("content-index.json");
        write_index(&entries, &out).unwrap();
        let reread = parse_index(&fs::read_to_string(&out).unwrap(), "index").unwrap();
        assert_eq!(reread, entries);
    }

    #[test]
    fn preview_list_and_detail() {
        let dir = data_dir();
        let items = CategorySlug::new("items");

        let list = preview(dir.path(), &items, None, Some("oil")).unwrap();
        assert!(list.contains("Oil lamp"));
        assert!(!list.contains("Brass Key"));

        let detail = preview(dir.path(), &items, Some(" key "), None).unwrap();
        assert!(detail.starts_with("<h1 class=\"detail-title\">Brass Key</h1>"));

        let missing = preview(dir.path(), &items, Some("nope"), None).unwrap();
        assert_eq!(missing, "Not found: nope");

        assert!(preview(dir.path(), &CategorySlug::new("bestiary"), None, None).is_err());
    }
}
