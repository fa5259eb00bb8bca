use catalog::links::{collection_url, detail_url};
use catalog::{CategoryAliases, IndexEntry, group_by_category, is_new, sort_by_recency, title_case_category};
use chrono::{DateTime, Utc};
use foundation::{CategorySlug, RecencyWindow};

use crate::collection::render_tags;
use crate::config::SiteConfig;
use crate::messages;
use crate::view::ViewNode;

/// Rendered home page: children for `#home-latest` and `#home-categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub latest: Vec<ViewNode>,
    pub categories: Vec<ViewNode>,
}

/// Card for one index entry. Links to `url` when set, else to the detail page.
pub fn render_index_card(
    entry: &IndexEntry,
    aliases: &CategoryAliases,
    window: RecencyWindow,
    now: DateTime<Utc>,
) -> ViewNode {
    let href = match entry.url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => url.to_string(),
        None => detail_url(&aliases.normalize(Some(&entry.category)), &entry.id),
    };
    let mut card = ViewNode::new("a").with_class("notice").with_attr("href", &href);

    if let Some(image) = entry.image.as_deref().filter(|i| !i.is_empty()) {
        card = card.with_child(
            ViewNode::new("img")
                .with_class("card-image")
                .with_attr("src", image)
                .with_attr("alt", ""),
        );
    }

    let mut title = ViewNode::el("div", "notice-title", entry.display_title());
    if is_new(entry, window, now) {
        title = title.with_child(ViewNode::el("span", "badge-new", messages::NEW_BADGE));
    }
    card = card.with_child(title);

    if let Some(summary) = entry.summary() {
        card = card.with_child(ViewNode::el("div", "notice-summary", summary));
    }
    if !entry.tags.is_empty() {
        card = card.with_child(render_tags(&entry.tags));
    }
    card
}

fn render_cards<'a, I>(entries: I, aliases: &CategoryAliases, window: RecencyWindow, now: DateTime<Utc>) -> Vec<ViewNode>
where
    I: IntoIterator<Item = &'a IndexEntry>,
{
    let cards: Vec<ViewNode> = entries
        .into_iter()
        .map(|e| render_index_card(e, aliases, window, now))
        .collect();
    if cards.is_empty() {
        return vec![ViewNode::el("div", "empty", messages::EMPTY_LIST)];
    }
    cards
}

fn render_section(
    category: &CategorySlug,
    entries: &[IndexEntry],
    aliases: &CategoryAliases,
    window: RecencyWindow,
    now: DateTime<Utc>,
) -> ViewNode {
    let title = title_case_category(category.as_str());
    ViewNode::new("section")
        .with_class("home-category")
        .with_attr("data-category", category.as_str())
        .with_child(ViewNode::el("h2", "home-category-title", &title))
        .with_child(
            ViewNode::new("div")
                .with_class("home-category-list")
                .with_children(render_cards(entries, aliases, window, now)),
        )
        .with_child(
            ViewNode::el("a", "home-category-link", &format!("All {title}"))
                .with_attr("href", &collection_url(category)),
        )
}

/// Builds the home page from the flat content index.
pub fn render_home(entries: &[IndexEntry], config: &SiteConfig, now: DateTime<Utc>) -> HomeView {
    let aliases = config.aliases();
    let window = config.recency();

    let mut sorted = entries.to_vec();
    sort_by_recency(&mut sorted);
    let latest = render_cards(sorted.iter().take(config.latest_limit), &aliases, window, now);

    let categories = group_by_category(entries, &aliases)
        .iter()
        .map(|(slug, items)| render_section(slug, items, &aliases, window, now))
        .collect::<Vec<_>>();
    let categories = if categories.is_empty() {
        vec![ViewNode::el("div", "empty", messages::EMPTY_LIST)]
    } else {
        categories
    };

    HomeView { latest, categories }
}
