use foundation::{RegionId, fold_case};
use serde::{Deserialize, Serialize};

use crate::element::MapElement;

/// Where a label value is read from, tried in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LabelStrategy {
    /// Value of an attribute such as `data-for`.
    Attribute { name: String },
    /// The element id, e.g. `label-state3`.
    ElementId,
}

impl LabelStrategy {
    pub fn attribute(name: &str) -> Self {
        LabelStrategy::Attribute {
            name: name.to_string(),
        }
    }

    fn value<E: MapElement>(&self, el: &E) -> Option<String> {
        let value = match self {
            LabelStrategy::Attribute { name } => el.attribute(name)?,
            LabelStrategy::ElementId => el.id(),
        };
        (!value.trim().is_empty()).then_some(value)
    }
}

/// A query used to collect label candidates from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSelector {
    HasAttribute(String),
    IdContains(String),
    Class(String),
}

impl LabelSelector {
    pub fn to_css(&self) -> String {
        match self {
            LabelSelector::HasAttribute(name) => format!("[{name}]"),
            LabelSelector::IdContains(fragment) => format!("[id*=\"{fragment}\"]"),
            LabelSelector::Class(class) => format!(".{class}"),
        }
    }

    pub fn matches<E: MapElement>(&self, el: &E) -> bool {
        match self {
            LabelSelector::HasAttribute(name) => el.attribute(name).is_some(),
            LabelSelector::IdContains(fragment) => el.id().contains(fragment.as_str()),
            LabelSelector::Class(class) => el.has_class(class),
        }
    }
}

/// Which document a label search runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelScope {
    /// The SVG document embedded in the map object.
    Embedded,
    /// The host HTML page (overlay labels).
    Host,
}

/// Label discovery table: ordered strategies plus the selectors that feed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLookup {
    pub strategies: Vec<LabelStrategy>,
    /// Substring for the `[id*=…]` candidate selector.
    pub id_fragment: String,
    /// Classes marking overlay labels in the host page.
    pub host_classes: Vec<String>,
}

impl Default for LabelLookup {
    fn default() -> Self {
        Self {
            strategies: vec![
                LabelStrategy::attribute("data-for"),
                LabelStrategy::attribute("data-state"),
                LabelStrategy::attribute("data-region"),
                LabelStrategy::attribute("data-label-for"),
                LabelStrategy::ElementId,
            ],
            id_fragment: "state".to_string(),
            host_classes: vec!["map-label".to_string()],
        }
    }
}

impl LabelLookup {
    pub fn selectors(&self, scope: LabelScope) -> Vec<LabelSelector> {
        let mut out = Vec::new();
        for strategy in &self.strategies {
            let sel = match strategy {
                LabelStrategy::Attribute { name } => LabelSelector::HasAttribute(name.clone()),
                LabelStrategy::ElementId if !self.id_fragment.is_empty() => {
                    LabelSelector::IdContains(self.id_fragment.clone())
                }
                LabelStrategy::ElementId => continue,
            };
            if !out.contains(&sel) {
                out.push(sel);
            }
        }
        if scope == LabelScope::Host {
            out.extend(self.host_classes.iter().cloned().map(LabelSelector::Class));
        }
        out
    }

    /// First region named by the strategies, in table order.
    pub fn infer_region<'a, E, I>(&self, el: &E, known: I) -> Option<RegionId>
    where
        E: MapElement,
        I: IntoIterator<Item = &'a RegionId> + Clone,
    {
        self.strategies
            .iter()
            .filter_map(|s| s.value(el))
            .find_map(|value| find_region_token(&value, known.clone()))
    }
}

/// Finds the earliest known region id inside `value`, comparing case-folded
/// forms.
///
/// An occurrence only counts when the next character does not continue the
/// id's trailing run: `state1` is not found in `state10` or `state1b`, but is
/// found in `label-state1` and `state1_label`. Ties at the same position go
/// to the longer id.
pub fn find_region_token<'a, I>(value: &str, known: I) -> Option<RegionId>
where
    I: IntoIterator<Item = &'a RegionId>,
{
    let hay = fold_case(value);
    let mut best: Option<(usize, usize, &RegionId)> = None;
    for id in known {
        let needle = id.key();
        let Some(last) = needle.chars().last() else {
            continue;
        };
        let hit = hay.match_indices(needle).map(|(pos, _)| pos).find(|&pos| {
            let next = hay[pos + needle.len()..].chars().next();
            !next.is_some_and(|c| continues_run(last, c))
        });
        let Some(pos) = hit else {
            continue;
        };
        let better = match best {
            None => true,
            Some((bp, blen, _)) => pos < bp || (pos == bp && needle.len() > blen),
        };
        if better {
            best = Some((pos, needle.len(), id));
        }
    }
    best.map(|(_, _, id)| id.clone())
}

fn continues_run(last: char, next: char) -> bool {
    (last.is_ascii_digit() && next.is_ascii_digit())
        || (last.is_alphabetic() && next.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::{LabelLookup, LabelScope, LabelSelector, find_region_token};
    use crate::table::RegionTable;
    use crate::testing::FakeElement;
    use foundation::RegionId;

    fn known() -> Vec<RegionId> {
        RegionTable::default().ids().cloned().collect()
    }

    fn token(value: &str) -> Option<String> {
        find_region_token(value, &known()).map(|r| r.to_string())
    }

    #[test]
    fn naming_conventions() {
        assert_eq!(token("label-state1").as_deref(), Some("state1"));
        assert_eq!(token("state1-label").as_deref(), Some("state1"));
        assert_eq!(token("state1_label").as_deref(), Some("state1"));
        assert_eq!(token("foo-State3-bar").as_deref(), Some("state3"));
        assert_eq!(token("state10").as_deref(), Some("state10"));
        assert_eq!(token("label-state10-x").as_deref(), Some("state10"));
    }

    #[test]
    fn unknown_or_partial_ids_do_not_match() {
        assert_eq!(token("state12"), None);
        assert_eq!(token("state"), None);
        assert_eq!(token("hover-label"), None);
        assert_eq!(token("statement"), None);
    }

    #[test]
    fn configured_ids_match_in_any_case() {
        let known = vec![RegionId::new("North"), RegionId::new("ÉTAT2")];
        let hit = |v: &str| find_region_token(v, &known).map(|r| r.as_str().to_string());
        assert_eq!(hit("label-north").as_deref(), Some("North"));
        assert_eq!(hit("NORTH_LABEL").as_deref(), Some("North"));
        assert_eq!(hit("état2").as_deref(), Some("ÉTAT2"));
        assert_eq!(hit("northern"), None);
    }

    #[test]
    fn earliest_token_wins() {
        assert_eq!(token("state2 then state1").as_deref(), Some("state2"));
    }

    #[test]
    fn strategies_run_in_order() {
        let lookup = LabelLookup::default();
        let ids = known();

        let el = FakeElement::new("text").with_id("state5-label").with_attr("data-for", "state2");
        assert_eq!(lookup.infer_region(&el, &ids).map(|r| r.to_string()).as_deref(), Some("state2"));

        // A non-matching attribute falls through to later strategies.
        let el = FakeElement::new("div").with_id("label-state9").with_attr("data-for", "nowhere");
        assert_eq!(lookup.infer_region(&el, &ids).map(|r| r.to_string()).as_deref(), Some("state9"));

        let el = FakeElement::new("div").with_attr("data-label-for", "STATE4");
        assert_eq!(lookup.infer_region(&el, &ids).map(|r| r.to_string()).as_deref(), Some("state4"));

        let el = FakeElement::new("div").with_id("legend");
        assert_eq!(lookup.infer_region(&el, &ids), None);
    }

    #[test]
    fn selectors_per_scope() {
        let lookup = LabelLookup::default();
        let css = |scope| -> Vec<String> {
            lookup.selectors(scope).iter().map(LabelSelector::to_css).collect()
        };
        assert_eq!(
            css(LabelScope::Embedded),
            vec!["[data-for]", "[data-state]", "[data-region]", "[data-label-for]", "[id*=\"state\"]"]
        );
        assert_eq!(css(LabelScope::Host).last().map(String::as_str), Some(".map-label"));
    }

    #[test]
    fn selector_matching() {
        let el = FakeElement::new("span").with_id("x-state2").with_class("map-label");
        assert!(LabelSelector::IdContains("state".into()).matches(&el));
        assert!(LabelSelector::Class("map-label".into()).matches(&el));
        assert!(!LabelSelector::HasAttribute("data-for".into()).matches(&el));
    }
}
