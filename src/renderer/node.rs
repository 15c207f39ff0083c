//! Render tree shared by both surfaces

use serde::Serialize;

/// One node of a rendered slide
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderNode {
    Element(Element),
    Text { text: String },
}

/// An element with class tokens, inline styles, attributes and children
///
/// Web trees carry their look in `classes`; PDF trees carry it in `style`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

/// Start a new element
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: vec![],
            style: vec![],
            attrs: vec![],
            children: vec![],
        }
    }

    /// Add whitespace-separated class tokens
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    /// Add an inline style declaration
    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.push((property.to_string(), value.into()));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<RenderNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Add a child only when `node` is `Some`
    pub fn child_opt(mut self, node: Option<impl Into<RenderNode>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<RenderNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(RenderNode::text(text))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Value of an inline style property
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        RenderNode::Element(element)
    }
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderNode::Element(e) => Some(e),
            RenderNode::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            RenderNode::Text { text } => out.push_str(text),
            RenderNode::Element(e) => out.push_str(&e.text_content()),
        }
    }

    /// Visit every element in document order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        if let RenderNode::Element(e) = self {
            visit(e);
            for child in &e.children {
                child.walk(visit);
            }
        }
    }

    /// All elements with the given tag, in document order
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |e| {
            if e.tag == tag {
                found.push(e);
            }
        });
        found
    }

    /// All elements carrying the given class token, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |e| {
            if e.has_class(class) {
                found.push(e);
            }
        });
        found
    }

    /// Serialize to an HTML fragment
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

fn write_html(node: &RenderNode, out: &mut String) {
    match node {
        RenderNode::Text { text } => out.push_str(&escape_xml(text)),
        RenderNode::Element(e) => {
            out.push('<');
            out.push_str(&e.tag);
            if !e.classes.is_empty() {
                out.push_str(&format!(r#" class="{}""#, escape_xml(&e.classes.join(" "))));
            }
            if !e.style.is_empty() {
                let css = e
                    .style
                    .iter()
                    .map(|(p, v)| format!("{}: {}", p, v))
                    .collect::<Vec<_>>()
                    .join("; ");
                out.push_str(&format!(r#" style="{}""#, escape_xml(&css)));
            }
            for (name, value) in &e.attrs {
                out.push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
            }
            out.push('>');
            for child in &e.children {
                write_html(child, out);
            }
            out.push_str("</");
            out.push_str(&e.tag);
            out.push('>');
        }
    }
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens_are_split() {
        let e = el("div").class("a  b\tc");
        assert_eq!(e.classes, vec!["a", "b", "c"]);
        assert!(e.has_class("b"));
    }

    #[test]
    fn test_html_serialization() {
        let node: RenderNode = el("div")
            .class("box wide")
            .style("width", "10px")
            .style("color", "red")
            .attr("data-slide", "1")
            .child(el("p").text("a < b"))
            .into();
        insta::assert_snapshot!(
            node.to_html(),
            @r#"<div class="box wide" style="width: 10px; color: red" data-slide="1"><p>a &lt; b</p></div>"#
        );
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let node: RenderNode = el("div")
            .child(el("span").text("1"))
            .text("/")
            .child(el("span").text("5"))
            .into();
        assert_eq!(node.text_content(), "1/5");
    }

    #[test]
    fn test_child_opt_skips_none() {
        let e = el("div").child_opt(None::<Element>).child_opt(Some(el("p")));
        assert_eq!(e.children.len(), 1);
    }

    #[test]
    fn test_find_by_tag_and_class() {
        let node: RenderNode = el("div")
            .child(el("p").class("x"))
            .child(el("div").child(el("p").class("x y")))
            .into();
        assert_eq!(node.find_by_tag("p").len(), 2);
        assert_eq!(node.find_by_class("y").len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let node: RenderNode = el("h1").text("Hi").into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "h1");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["text"], "Hi");
        assert!(json.get("classes").is_none());
    }
}
