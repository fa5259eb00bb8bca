/// Renderer-neutral element tree.
///
/// Mirrors the DOM operations the pages need: create an element, set its
/// class, text and attributes, append children. Text is placed before
/// children.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub tag: String,
    pub class: Option<String>,
    pub text: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<ViewNode>,
}

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input"];

impl ViewNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// `<tag class=…>text</tag>` in one call.
    pub fn el(tag: &str, class: &str, text: &str) -> Self {
        Self::new(tag).with_class(class).with_text(text)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = (!class.is_empty()).then(|| class.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the first node with `class`.
    pub fn find_class(&self, class: &str) -> Option<&ViewNode> {
        if self.class.as_deref() == Some(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_class(class))
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for c in &self.children {
            out.push_str(&c.text_content());
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(class) = &self.class {
            push_attr(out, "class", class);
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Serializes a list of sibling nodes.
pub fn nodes_to_html(nodes: &[ViewNode]) -> String {
    nodes.iter().map(ViewNode::to_html).collect()
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{ViewNode, nodes_to_html};

    #[test]
    fn serializes_with_escaping() {
        let node = ViewNode::new("a")
            .with_class("notice")
            .with_attr("href", "detail.html?category=items&id=1")
            .with_child(ViewNode::el("div", "notice-title", "Fish & <Chips>"));
        assert_eq!(
            node.to_html(),
            "<a class=\"notice\" href=\"detail.html?category=items&amp;id=1\">\
             <div class=\"notice-title\">Fish &amp; &lt;Chips&gt;</div></a>"
        );
    }

    #[test]
    fn void_tags_and_empty_class() {
        let img = ViewNode::new("img").with_class("").with_attr("src", "a.png");
        assert_eq!(img.to_html(), "<img src=\"a.png\">");
        assert_eq!(
            nodes_to_html(&[ViewNode::el("li", "", "a"), ViewNode::el("li", "", "b")]),
            "<li>a</li><li>b</li>"
        );
    }

    #[test]
    fn lookup_helpers() {
        let tree = ViewNode::new("div")
            .with_child(ViewNode::el("span", "tag", "x"))
            .with_child(ViewNode::el("span", "tag", "y"));
        assert_eq!(tree.find_class("tag").and_then(|n| n.text.as_deref()), Some("x"));
        assert_eq!(tree.text_content(), "xy");
        let linked = ViewNode::new("a").with_attr("href", "1").with_attr("href", "2");
        assert_eq!(linked.attr("href"), Some("2"));
        assert_eq!(linked.attrs.len(), 1);
    }
}
