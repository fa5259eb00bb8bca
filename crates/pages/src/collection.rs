use catalog::links::detail_url;
use catalog::{CategoryAliases, ContentRecord, filter_records, title_case_category};
use foundation::CategorySlug;

use crate::messages;
use crate::query::PageQuery;
use crate::view::ViewNode;

/// Static parts of a collection page, resolved from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionHeader {
    pub category: CategorySlug,
    pub title: String,
    pub subtitle: &'static str,
}

impl CollectionHeader {
    pub fn resolve(query: &PageQuery, aliases: &CategoryAliases) -> Self {
        let category = aliases.normalize(query.category());
        Self {
            title: title_case_category(category.as_str()),
            category,
            subtitle: messages::COLLECTION_SUBTITLE,
        }
    }
}

pub fn render_tags(tags: &[String]) -> ViewNode {
    ViewNode::new("div")
        .with_class("tags")
        .with_children(tags.iter().map(|t| ViewNode::el("span", "tag", t)))
}

/// One list card linking to the record's detail page.
pub fn render_card(category: &CategorySlug, record: &ContentRecord) -> ViewNode {
    let mut card = ViewNode::new("a")
        .with_class("notice")
        .with_attr("href", &detail_url(category, &record.id))
        .with_child(ViewNode::new("div").with_class("pin2"))
        .with_child(ViewNode::el("div", "notice-title", record.display_title()));

    if let Some(summary) = record.summary() {
        card = card.with_child(ViewNode::el("div", "notice-summary", summary));
    }

    let meta: Vec<String> = [record.region(), record.difficulty()]
        .into_iter()
        .flatten()
        .map(str::to_uppercase)
        .collect();
    if !meta.is_empty() {
        card = card.with_child(ViewNode::el("div", "notice-meta", &meta.join(" • ")));
    }

    if !record.tags.is_empty() {
        card = card.with_child(render_tags(&record.tags));
    }
    card
}

/// Children of the list container: one card per record, or a placeholder.
pub fn render_list<'a, I>(category: &CategorySlug, records: I) -> Vec<ViewNode>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    let cards: Vec<ViewNode> = records
        .into_iter()
        .map(|r| render_card(category, r))
        .collect();
    if cards.is_empty() {
        return vec![ViewNode::el("div", "empty", messages::EMPTY_LIST)];
    }
    cards
}

/// Filters by the search box value and renders the result.
pub fn render_filtered_list(
    category: &CategorySlug,
    records: &[ContentRecord],
    search: &str,
) -> Vec<ViewNode> {
    render_list(category, filter_records(records, search))
}

#[cfg(test)]
mod tests {
    use super::{CollectionHeader, render_card, render_filtered_list, render_list};
    use crate::query::PageQuery;
    use crate::view::nodes_to_html;
    use catalog::{CategoryAliases, ContentRecord};
    use foundation::CategorySlug;
    use pretty_assertions::assert_eq;

    fn mill() -> ContentRecord {
        ContentRecord {
            id: "old-mill".to_string(),
            title: Some("The Old Mill".to_string()),
            summary: Some("A ruin.".to_string()),
            region: Some("north".to_string()),
            difficulty: Some("hard".to_string()),
            tags: vec!["ruin".to_string()],
            ..ContentRecord::default()
        }
    }

    #[test]
    fn header_from_query() {
        let header =
            CollectionHeader::resolve(&PageQuery::parse("?category=NPCs"), &CategoryAliases::default());
        assert_eq!(header.category.as_str(), "npc");
        assert_eq!(header.title, "Npc");

        let fallback = CollectionHeader::resolve(&PageQuery::parse(""), &CategoryAliases::default());
        assert_eq!(fallback.category.as_str(), "locations");
        assert_eq!(fallback.title, "Locations");
    }

    #[test]
    fn full_card_markup() {
        let card = render_card(&CategorySlug::new("locations"), &mill());
        assert_eq!(
            card.to_html(),
            "<a class=\"notice\" href=\"detail.html?category=locations&amp;id=old-mill\">\
             <div class=\"pin2\"></div>\
             <div class=\"notice-title\">The Old Mill</div>\
             <div class=\"notice-summary\">A ruin.</div>\
             <div class=\"notice-meta\">NORTH • HARD</div>\
             <div class=\"tags\"><span class=\"tag\">ruin</span></div></a>"
        );
    }

    #[test]
    fn minimal_card_uses_id_as_title() {
        let record = ContentRecord {
            id: "k1".to_string(),
            ..ContentRecord::default()
        };
        let card = render_card(&CategorySlug::new("items"), &record);
        assert_eq!(card.children.len(), 2);
        assert_eq!(card.find_class("notice-title").and_then(|n| n.text.as_deref()), Some("k1"));
        assert!(card.find_class("notice-meta").is_none());
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let nodes = render_list(&CategorySlug::new("items"), &[]);
        assert_eq!(nodes_to_html(&nodes), "<div class=\"empty\">No entries yet.</div>");
    }

    #[test]
    fn search_narrows_cards() {
        let other = ContentRecord {
            id: "well".to_string(),
            ..ContentRecord::default()
        };
        let records = vec![mill(), other];
        let slug = CategorySlug::new("locations");
        assert_eq!(render_filtered_list(&slug, &records, "").len(), 2);
        assert_eq!(render_filtered_list(&slug, &records, "NORTH").len(), 1);
        let none = render_filtered_list(&slug, &records, "dragon");
        assert_eq!(none[0].class.as_deref(), Some("empty"));
    }
}
