use catalog::links::collection_url;
use catalog::{CategoryAliases, ContentRecord, find_record, title_case_category};
use foundation::CategorySlug;

use crate::collection::render_tags;
use crate::messages;
use crate::query::PageQuery;
use crate::view::ViewNode;

/// Query-derived inputs of a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub category: CategorySlug,
    pub title: String,
    pub id: Option<String>,
}

impl DetailRequest {
    pub fn resolve(query: &PageQuery, aliases: &CategoryAliases) -> Self {
        let category = aliases.normalize(query.category());
        Self {
            title: title_case_category(category.as_str()),
            id: query.id().map(str::to_string),
            category,
        }
    }
}

/// What the detail container should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Plain text message (missing id, not found, load failure).
    Message(String),
    Record(Vec<ViewNode>),
}

impl DetailView {
    pub fn missing_id() -> Self {
        DetailView::Message(messages::MISSING_ID.to_string())
    }

    pub fn load_failed(category: &CategorySlug) -> Self {
        DetailView::Message(messages::load_failed(category.as_str()))
    }
}

/// Looks `id` up by exact match in the loaded category.
pub fn resolve_detail(category: &CategorySlug, records: &[ContentRecord], id: &str) -> DetailView {
    match find_record(records, id) {
        Some(record) => DetailView::Record(render_detail(category, record)),
        None => DetailView::Message(messages::not_found(id)),
    }
}

pub fn render_detail(category: &CategorySlug, record: &ContentRecord) -> Vec<ViewNode> {
    let mut out = vec![ViewNode::el("h1", "detail-title", record.display_title())];

    if let Some(summary) = record.summary() {
        out.push(ViewNode::el("p", "detail-summary", summary));
    }
    if !record.tags.is_empty() {
        out.push(render_tags(&record.tags));
    }

    let mut meta = Vec::new();
    if let Some(region) = record.region() {
        meta.push(format!("Region: {region}"));
    }
    if let Some(difficulty) = record.difficulty() {
        meta.push(format!("Difficulty: {difficulty}"));
    }
    if let Some(updated) = record.updated() {
        meta.push(format!("Updated: {updated}"));
    }
    if !meta.is_empty() {
        out.push(ViewNode::el("div", "detail-meta", &meta.join(" • ")));
    }

    out.extend(record.body.iter().map(|p| ViewNode::el("p", "detail-p", p)));

    for (label, items) in [
        ("Hooks", &record.hooks),
        ("Complications", &record.complications),
        ("Rewards", &record.rewards),
    ] {
        if items.is_empty() {
            continue;
        }
        out.push(ViewNode::el("h2", "detail-h2", label));
        out.push(
            ViewNode::new("ul")
                .with_class("detail-list")
                .with_children(items.iter().map(|it| ViewNode::el("li", "", it))),
        );
    }

    out.push(
        ViewNode::el(
            "a",
            "detail-back",
            &messages::back_to(&title_case_category(category.as_str())),
        )
        .with_attr("href", &collection_url(category)),
    );
    out
}
