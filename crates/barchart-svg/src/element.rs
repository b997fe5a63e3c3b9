// File: crates/barchart-svg/src/element.rs
// Summary: Minimal SVG element tree; ordered attributes, children, text content.

use std::fmt;

/// A single SVG element. Attribute insertion order is preserved so serialized
/// output is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Root `<svg>` element carrying the standard namespace.
    pub fn svg() -> Self {
        Self::new("svg").with_attr("xmlns", "http://www.w3.org/2000/svg")
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set or replace an attribute; new keys keep their insertion position.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a child, returning a handle to it inside the tree.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// True when the `class` attribute contains `class_name` as a whitespace
    /// separated token.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|t| t == class_name))
            .unwrap_or(false)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (k, v) in &self.attrs {
            write!(f, " {}=\"{}\"", k, escape(v, true))?;
        }
        if self.children.is_empty() && self.text.is_none() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", escape(text, false))?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// XML-escape markup-significant characters; quotes only matter inside
/// attribute values.
fn escape(s: &str, in_attr: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
