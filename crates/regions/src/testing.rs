//! In-memory stand-ins for DOM nodes used by the unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::element::{HoverLabel, MapDocument, MapElement};
use crate::lookup::LabelSelector;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FakeState {
    pub tag: String,
    pub id: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub hovered: bool,
}

#[derive(Debug, Clone)]
pub struct FakeElement(Rc<RefCell<FakeState>>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        FakeElement(Rc::new(RefCell::new(FakeState {
            tag: tag.to_string(),
            ..FakeState::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = id.to_string();
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_style(self, name: &str, value: &str) -> Self {
        self.set_style_property(name, value);
        self
    }

    pub fn set_hovered(&self, hovered: bool) {
        self.0.borrow_mut().hovered = hovered;
    }

    /// Presentation state, ignoring the hover flag.
    pub fn state(&self) -> FakeState {
        let mut s = self.0.borrow().clone();
        s.hovered = false;
        s
    }

    pub fn style(&self, name: &str) -> String {
        self.style_property(name)
    }
}

impl MapElement for FakeElement {
    fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        if name == "id" {
            let id = self.id();
            return (!id.is_empty()).then_some(id);
        }
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attrs.remove(name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn style_property(&self, name: &str) -> String {
        self.0.borrow().style.get(name).cloned().unwrap_or_default()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        let mut s = self.0.borrow_mut();
        if value.is_empty() {
            s.style.remove(name);
        } else {
            s.style.insert(name.to_string(), value.to_string());
        }
    }

    fn is_hovered(&self) -> bool {
        self.0.borrow().hovered
    }

    fn same_element(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeDocument {
    pub elements: Vec<FakeElement>,
}

impl FakeDocument {
    pub fn new(elements: Vec<FakeElement>) -> Self {
        Self { elements }
    }
}

impl MapDocument for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements.iter().find(|e| e.id() == id).cloned()
    }

    fn query_all(&self, selector: &LabelSelector) -> Vec<FakeElement> {
        self.elements
            .iter()
            .filter(|e| selector.matches(*e))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeHoverLabel(Rc<RefCell<Option<String>>>);

impl FakeHoverLabel {
    /// Text currently shown, `None` while hidden.
    pub fn shown(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl HoverLabel for FakeHoverLabel {
    fn show(&self, text: &str) {
        *self.0.borrow_mut() = Some(text.to_string());
    }

    fn hide(&self) {
        *self.0.borrow_mut() = None;
    }
}
