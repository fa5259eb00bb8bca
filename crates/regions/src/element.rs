use crate::lookup::LabelSelector;

/// The slice of a DOM/SVG element the highlight controller needs.
///
/// Methods take `&self` because the underlying nodes have interior
/// mutability; clones refer to the same node.
pub trait MapElement: Clone {
    fn tag_name(&self) -> String;
    fn id(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Inline style value, empty when unset.
    fn style_property(&self, name: &str) -> String;
    /// Setting an empty value removes the inline property.
    fn set_style_property(&self, name: &str, value: &str);
    fn is_hovered(&self) -> bool;
    fn same_element(&self, other: &Self) -> bool;
}

/// A document the controller can search for shapes and labels.
pub trait MapDocument {
    type Element: MapElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &LabelSelector) -> Vec<Self::Element>;
}

/// Overlay that shows the active region's name.
pub trait HoverLabel {
    fn show(&self, text: &str);
    fn hide(&self);
}
