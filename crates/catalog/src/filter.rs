use crate::record::ContentRecord;

/// Lower-cased text a search query is matched against.
///
/// Non-empty `id`, `title`, `summary`, each tag, `region` and `difficulty`,
/// joined by single spaces.
pub fn search_text(record: &ContentRecord) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(5 + record.tags.len());
    parts.push(&record.id);
    parts.extend(record.title.as_deref());
    parts.extend(record.summary.as_deref());
    parts.extend(record.tags.iter().map(String::as_str));
    parts.extend(record.region.as_deref());
    parts.extend(record.difficulty.as_deref());
    parts.retain(|p| !p.is_empty());
    parts.join(" ").to_lowercase()
}

/// Case-insensitive substring filter. A blank query keeps every record.
///
/// Input order is preserved.
pub fn filter_records<'a>(records: &'a [ContentRecord], query: &str) -> Vec<&'a ContentRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| search_text(r).contains(&query))
        .collect()
}
