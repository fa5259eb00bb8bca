use chrono::{DateTime, Utc};
use foundation::{CategorySlug, RecencyWindow};

use crate::category::CategoryAliases;
use crate::record::IndexEntry;

/// Sorts newest first by comparing `createdAt` strings lexicographically.
///
/// Missing timestamps compare as the empty string and therefore sink to the
/// end. The sort is stable, so ties keep their input order.
pub fn sort_by_recency(entries: &mut [IndexEntry]) {
    entries.sort_by(|a, b| b.created_at().cmp(a.created_at()));
}

/// Groups entries by normalized category, each group sorted by recency.
///
/// Groups appear in the order their newest entry appears in the global
/// recency order.
pub fn group_by_category(
    entries: &[IndexEntry],
    aliases: &CategoryAliases,
) -> Vec<(CategorySlug, Vec<IndexEntry>)> {
    let mut sorted = entries.to_vec();
    sort_by_recency(&mut sorted);

    let mut groups: Vec<(CategorySlug, Vec<IndexEntry>)> = Vec::new();
    for entry in sorted {
        let slug = aliases.normalize(Some(&entry.category));
        match groups.iter_mut().find(|(s, _)| *s == slug) {
            Some((_, items)) => items.push(entry),
            None => groups.push((slug, vec![entry])),
        }
    }
    groups
}

pub fn is_new(entry: &IndexEntry, window: RecencyWindow, now: DateTime<Utc>) -> bool {
    window.is_recent(entry.created_at(), now)
}
