// File: crates/barchart-svg/src/document.rs
// Summary: Document wrapper with class/tag selection over the element tree.

use crate::element::Element;

/// An element tree root standing in for the page the chart renders into.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// First element matching `selector`, depth-first, the root included.
    ///
    /// Selectors are a single class (`".chart"`) or a bare tag name
    /// (`"svg"`); a miss returns `None` rather than failing.
    pub fn select(&self, selector: &str) -> Option<&Element> {
        find_first(&self.root, selector)
    }

    pub fn select_mut(&mut self, selector: &str) -> Option<&mut Element> {
        find_first_mut(&mut self.root, selector)
    }
}

fn matches(el: &Element, selector: &str) -> bool {
    match selector.strip_prefix('.') {
        Some(class) => el.has_class(class),
        None => el.name() == selector,
    }
}

fn find_first<'a>(el: &'a Element, selector: &str) -> Option<&'a Element> {
    if matches(el, selector) {
        return Some(el);
    }
    for child in el.children() {
        if let Some(hit) = find_first(child, selector) {
            return Some(hit);
        }
    }
    None
}

fn find_first_mut<'a>(el: &'a mut Element, selector: &str) -> Option<&'a mut Element> {
    if matches(el, selector) {
        return Some(el);
    }
    for child in el.children_mut() {
        if let Some(hit) = find_first_mut(child, selector) {
            return Some(hit);
        }
    }
    None
}
