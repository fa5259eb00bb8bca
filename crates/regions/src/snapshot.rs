use crate::element::MapElement;

/// Presentation of a region shape as it was before any highlighting.
///
/// Captured once per shape; every restore writes these exact values back, so
/// repeated hover cycles cannot drift.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyleSnapshot {
    pub stroke: String,
    pub stroke_width: String,
    pub fill_opacity: String,
    pub filter: String,
    pub transform: String,
    pub transform_origin: String,
    pub opacity: String,
}

impl StyleSnapshot {
    pub fn capture<E: MapElement>(el: &E) -> Self {
        Self {
            stroke: el.attribute("stroke").unwrap_or_default(),
            stroke_width: el.attribute("stroke-width").unwrap_or_default(),
            fill_opacity: el.attribute("fill-opacity").unwrap_or_default(),
            filter: el.style_property("filter"),
            transform: el.style_property("transform"),
            transform_origin: el.style_property("transform-origin"),
            opacity: el.style_property("opacity"),
        }
    }

    /// Empty attribute values are removed rather than written as `""`.
    pub fn restore<E: MapElement>(&self, el: &E) {
        restore_attribute(el, "stroke", &self.stroke);
        restore_attribute(el, "stroke-width", &self.stroke_width);
        restore_attribute(el, "fill-opacity", &self.fill_opacity);
        el.set_style_property("filter", &self.filter);
        el.set_style_property("transform", &self.transform);
        el.set_style_property("transform-origin", &self.transform_origin);
        el.set_style_property("opacity", &self.opacity);
    }
}

fn restore_attribute<E: MapElement>(el: &E, name: &str, value: &str) {
    if value.is_empty() {
        el.remove_attribute(name);
    } else {
        el.set_attribute(name, value);
    }
}
