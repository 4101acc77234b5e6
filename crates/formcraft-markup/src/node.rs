#![forbid(unsafe_code)]

//! Element and node types.

use std::collections::BTreeMap;
use std::fmt;

use crate::html;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tag with attributes and children.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered markup, emitted verbatim.
    Raw(String),
    /// A sequence of sibling nodes with no wrapper tag.
    Fragment(Vec<Node>),
}

impl Node {
    /// Text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Verbatim markup node.
    #[must_use]
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// Sibling sequence.
    #[must_use]
    pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Fragment(nodes.into_iter().collect())
    }

    /// Returns the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The element that post-processing should target.
    ///
    /// For an element this is the element itself. For a fragment it is the
    /// first element found depth-first among its children. Text and raw
    /// nodes have none.
    pub fn primary_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Fragment(nodes) => nodes.iter_mut().find_map(Node::primary_element_mut),
            Self::Text(_) | Self::Raw(_) => None,
        }
    }

    /// Read-only counterpart of [`Node::primary_element_mut`].
    #[must_use]
    pub fn primary_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Fragment(nodes) => nodes.iter().find_map(Node::primary_element),
            Self::Text(_) | Self::Raw(_) => None,
        }
    }

    /// Visit every element depth-first, parents before children.
    pub fn for_each_element_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        match self {
            Self::Element(el) => el.for_each_element_mut(f),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.for_each_element_mut(f);
                }
            }
            Self::Text(_) | Self::Raw(_) => {}
        }
    }

    /// Serialize into `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(el) => el.write_html(out),
            Self::Text(text) => html::escape_into(out, text),
            Self::Raw(markup) => out.push_str(markup),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
        }
    }

    /// Serialize to an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// A single HTML tag.
///
/// Builder methods consume and return `self`; the `set_*`/`push_*` methods
/// mutate in place for post-processing passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    // -- builders --

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute only when `cond` holds.
    #[must_use]
    pub fn attr_if(self, cond: bool, name: impl Into<String>, value: impl Into<String>) -> Self {
        if cond { self.attr(name, value) } else { self }
    }

    /// Set an attribute only when `value` is non-empty.
    #[must_use]
    pub fn attr_non_empty(self, name: impl Into<String>, value: &str) -> Self {
        self.attr_if(!value.is_empty(), name, value)
    }

    /// Replace the class list. An empty string removes the attribute.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        if class.is_empty() {
            self.attrs.remove("class");
        } else {
            self.set_attr("class", class);
        }
        self
    }

    /// Append class tokens.
    #[must_use]
    pub fn add_class(mut self, class: &str) -> Self {
        self.push_class(class);
        self
    }

    /// Append a style declaration.
    #[must_use]
    pub fn style(mut self, style: &str) -> Self {
        self.push_style(style);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when present.
    #[must_use]
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append several children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append an escaped text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append a verbatim markup child.
    #[must_use]
    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    // -- in-place mutation --

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Append class tokens in place. Empty input is ignored.
    pub fn push_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        match self.attrs.get_mut("class") {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            _ => {
                self.attrs.insert("class".to_owned(), class.to_owned());
            }
        }
    }

    /// Append a style declaration in place.
    ///
    /// Declarations are concatenated as given; each caller supplies its own
    /// trailing `;`.
    pub fn push_style(&mut self, style: &str) {
        if style.is_empty() {
            return;
        }
        self.attrs
            .entry("style".to_owned())
            .or_default()
            .push_str(style);
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    // -- accessors --

    /// Tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the class list contains `token`.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_whitespace().any(|t| t == token))
    }

    /// Attributes in serialization order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Child nodes.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Mutable child nodes.
    pub fn child_nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Visit this element and every descendant element, depth-first.
    pub fn for_each_element_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.for_each_element_mut(f);
        }
    }

    /// Serialize into `out`.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            html::escape_into(out, value);
            out.push('"');
        }
        if html::is_void_element(&self.tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Serialize to an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_render_sorted() {
        let el = Element::new("input")
            .attr("type", "text")
            .attr("name", "q")
            .attr("class", "form-control")
            .attr("id", "id_q");
        assert_eq!(
            el.to_html(),
            r#"<input class="form-control" id="id_q" name="q" type="text" />"#
        );
    }

    #[test]
    fn attr_replaces_previous_value() {
        let el = Element::new("a").attr("href", "/one").attr("href", "/two");
        assert_eq!(el.attribute("href"), Some("/two"));
    }

    #[test]
    fn style_appends() {
        let el = Element::new("div")
            .style("margin-bottom: 15px;")
            .style("width:100%;");
        assert_eq!(el.attribute("style"), Some("margin-bottom: 15px;width:100%;"));
    }

    #[test]
    fn add_class_appends_tokens() {
        let el = Element::new("input").class("form-control").add_class("is-invalid");
        assert_eq!(el.attribute("class"), Some("form-control is-invalid"));
        assert!(el.has_class("is-invalid"));
        assert!(!el.has_class("invalid"));
    }

    #[test]
    fn add_class_on_unclassed_element() {
        let el = Element::new("input").add_class("border-red-500");
        assert_eq!(el.attribute("class"), Some("border-red-500"));
    }

    #[test]
    fn empty_class_is_omitted() {
        let el = Element::new("div").class("");
        assert_eq!(el.to_html(), "<div></div>");
        let el = Element::new("div").class("row").add_class("");
        assert_eq!(el.to_html(), r#"<div class="row"></div>"#);
    }

    #[test]
    fn text_is_escaped_raw_is_not() {
        let el = Element::new("p")
            .text("a < b & c")
            .raw("<b>bold</b>");
        assert_eq!(el.to_html(), "<p>a &lt; b &amp; c<b>bold</b></p>");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let el = Element::new("input").attr("value", r#"say "hi" <now>"#);
        assert_eq!(
            el.to_html(),
            r#"<input value="say &quot;hi&quot; &lt;now&gt;" />"#
        );
    }

    #[test]
    fn nested_children_serialize_in_order() {
        let el = Element::new("div")
            .class("form-group")
            .child(Element::new("label").text("Name"))
            .child(Element::new("input").attr("name", "name"));
        assert_eq!(
            el.to_html(),
            r#"<div class="form-group"><label>Name</label><input name="name" /></div>"#
        );
    }

    #[test]
    fn fragment_has_no_wrapper() {
        let node = Node::fragment([
            Element::new("textarea").into(),
            Element::new("script").raw("init();").into(),
        ]);
        assert_eq!(node.to_html(), "<textarea></textarea><script>init();</script>");
    }

    #[test]
    fn primary_element_of_fragment_is_first_element() {
        let mut node = Node::fragment([
            Node::text("lead"),
            Node::fragment([Element::new("table").into()]),
            Element::new("div").into(),
        ]);
        let el = node.primary_element_mut().expect("element");
        assert_eq!(el.tag_name(), "table");
        el.set_attr("readonly", "readonly");
        assert!(node.to_html().starts_with(r#"lead<table readonly="readonly">"#));
    }

    #[test]
    fn primary_element_of_raw_is_none() {
        let mut node = Node::raw("<hr>");
        assert!(node.primary_element_mut().is_none());
    }

    #[test]
    fn visits_elements_in_document_order() {
        let mut node = Node::fragment([
            Element::new("div")
                .child(Element::new("input").attr("name", "a"))
                .child(Node::raw("<b>skip</b>"))
                .into(),
            Node::text("t"),
            Element::new("textarea").into(),
        ]);
        let mut tags = Vec::new();
        node.for_each_element_mut(&mut |el: &mut Element| {
            tags.push(el.tag_name().to_owned());
            if el.tag_name() == "input" {
                el.set_attr("disabled", "disabled");
            }
        });
        assert_eq!(tags, ["div", "input", "textarea"]);
        assert!(node.to_html().contains(r#"<input disabled="disabled" name="a" />"#));
    }

    #[test]
    fn remove_attr_returns_previous() {
        let mut el = Element::new("input").attr("name", "x");
        assert_eq!(el.remove_attr("name").as_deref(), Some("x"));
        assert!(el.attribute("name").is_none());
    }

    #[test]
    fn display_matches_to_html() {
        let el = Element::new("sup").class("text-danger").text("*");
        assert_eq!(format!("{el}"), el.to_html());
        let node = Node::from(el.clone());
        assert_eq!(format!("{node}"), el.to_html());
    }
}
