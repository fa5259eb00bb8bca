//! `web_sys` implementations of the region traits, plus `ViewNode` → DOM.
//!
//! Shapes and labels can live in the SVG document embedded by the map
//! `<object>`, which is a separate JS realm. Casts therefore use
//! `unchecked_*` and property reads go through `Reflect`; `instanceof` based
//! `dyn_*` casts would fail on those nodes.

use std::fmt::Debug;

use js_sys::Reflect;
use pages::{PageError, ViewNode};
use regions::{HoverLabel, LabelSelector, MapDocument, MapElement};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, Node};

use crate::log;

/// Warning text for a failed DOM call; `what` is only built on failure.
pub fn describe_failure<T, E: Debug>(result: &Result<T, E>, what: impl FnOnce() -> String) -> Option<String> {
    result
        .as_ref()
        .err()
        .map(|e| format!("{} failed: {e:?}", what()))
}

pub fn warn_on_err<T>(result: Result<T, JsValue>, what: impl FnOnce() -> String) {
    if let Some(line) = describe_failure(&result, what) {
        log::warn(&line);
    }
}

#[derive(Debug, Clone)]
pub struct WebElement(pub Element);

impl WebElement {
    fn inline_style(&self) -> Option<CssStyleDeclaration> {
        Reflect::get(&self.0, &JsValue::from_str("style"))
            .ok()
            .filter(JsValue::is_object)
            .map(JsCast::unchecked_into)
    }
}

impl MapElement for WebElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn id(&self) -> String {
        self.0.id()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        warn_on_err(self.0.set_attribute(name, value), || {
            format!("setting {name} on <{}#{}>", self.0.tag_name(), self.0.id())
        });
    }

    fn remove_attribute(&self, name: &str) {
        warn_on_err(self.0.remove_attribute(name), || {
            format!("removing {name} from <{}#{}>", self.0.tag_name(), self.0.id())
        });
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn style_property(&self, name: &str) -> String {
        self.inline_style()
            .and_then(|s| s.get_property_value(name).ok())
            .unwrap_or_default()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        let Some(style) = self.inline_style() else {
            return;
        };
        if value.is_empty() {
            warn_on_err(style.remove_property(name), || format!("clearing style {name}"));
        } else {
            warn_on_err(style.set_property(name, value), || format!("setting style {name}"));
        }
    }

    fn is_hovered(&self) -> bool {
        self.0.matches(":hover").unwrap_or(false)
    }

    fn same_element(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(&*other.0))
    }
}

#[derive(Debug, Clone)]
pub struct WebDocument(pub Document);

impl MapDocument for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn query_all(&self, selector: &LabelSelector) -> Vec<WebElement> {
        let Ok(list) = self.0.query_selector_all(&selector.to_css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter(|n| n.node_type() == Node::ELEMENT_NODE)
            .map(|n| WebElement(n.unchecked_into()))
            .collect()
    }
}

/// The `#hover-label` overlay: text plus a visibility class.
#[derive(Debug, Clone)]
pub struct DomHoverLabel {
    el: Element,
    visible_class: String,
}

impl DomHoverLabel {
    pub fn new(el: Element, visible_class: &str) -> Self {
        Self {
            el,
            visible_class: visible_class.to_string(),
        }
    }
}

impl HoverLabel for DomHoverLabel {
    fn show(&self, text: &str) {
        self.el.set_text_content(Some(text));
        warn_on_err(self.el.class_list().add_1(&self.visible_class), || {
            format!("adding class {}", self.visible_class)
        });
    }

    fn hide(&self) {
        warn_on_err(self.el.class_list().remove_1(&self.visible_class), || {
            format!("removing class {}", self.visible_class)
        });
    }
}

pub fn require_element(document: &Document, id: &str) -> Result<Element, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))
}

/// Builds real DOM nodes for a view tree.
pub fn materialize(document: &Document, node: &ViewNode) -> Result<Element, JsValue> {
    let el = document.create_element(&node.tag)?;
    if let Some(class) = &node.class {
        el.set_class_name(class);
    }
    for (name, value) in &node.attrs {
        el.set_attribute(name, value)?;
    }
    if let Some(text) = &node.text {
        el.append_child(&document.create_text_node(text))?;
    }
    for child in &node.children {
        let child_el: Element = materialize(document, child)?;
        el.append_child(&child_el)?;
    }
    Ok(el)
}

/// Replaces the children of `container` with `nodes`.
pub fn render_into(document: &Document, container: &Element, nodes: &[ViewNode]) -> Result<(), JsValue> {
    container.set_text_content(None);
    for node in nodes {
        let node_el: Element = materialize(document, node)?;
        container.append_child(&node_el)?;
    }
    Ok(())
}

pub fn set_text(container: &Element, text: &str) {
    container.set_text_content(Some(text));
}

#[cfg(test)]
mod tests {
    use super::describe_failure;
    use pretty_assertions::assert_eq;

    #[test]
    fn failures_are_described_and_successes_are_silent() {
        let failed: Result<(), &str> = Err("InvalidCharacterError");
        assert_eq!(
            describe_failure(&failed, || "setting stroke on <path#state1>".to_string()),
            Some("setting stroke on <path#state1> failed: \"InvalidCharacterError\"".to_string())
        );

        let ok: Result<(), &str> = Ok(());
        let built = std::cell::Cell::new(false);
        let line = describe_failure(&ok, || {
            built.set(true);
            String::new()
        });
        assert_eq!(line, None);
        assert!(!built.get());
    }
}
