//! Flat, document-ordered element container.

use std::collections::HashMap;

use crate::node::Element;

/// The page's element container.
///
/// Elements live in a flat map keyed by id; document order (insertion
/// order) is kept separately and drives every query, matching how markup
/// order drives `querySelectorAll`-style scans. Parent/child links are
/// maintained through [`append_child`](Document::append_child).
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
    /// Ids in document order.
    order: Vec<String>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root-level element. Replaces any element with the same id.
    pub fn insert(&mut self, element: Element) {
        let id = element.id.clone();
        if self.elements.insert(id.clone(), element).is_none() {
            self.order.push(id);
        }
    }

    /// Insert an element as the last child of `parent_id`.
    ///
    /// The child is dropped silently if the parent does not exist, mirroring
    /// how the page scripts guard every lookup.
    pub fn append_child(&mut self, parent_id: &str, mut element: Element) {
        if !self.elements.contains_key(parent_id) {
            return;
        }
        element.parent = Some(parent_id.to_string());
        let child_id = element.id.clone();
        self.insert(element);
        if let Some(parent) = self.elements.get_mut(parent_id) {
            if !parent.children.contains(&child_id) {
                parent.children.push(child_id);
            }
        }
    }

    /// Remove an element (and its link from its parent). Children are kept
    /// but orphaned; the runtime only removes leaf nodes (trail dots).
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let removed = self.elements.remove(id)?;
        self.order.retain(|o| o != id);
        if let Some(parent_id) = &removed.parent {
            if let Some(parent) = self.elements.get_mut(parent_id) {
                parent.children.retain(|c| c != id);
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Ids of elements carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<String> {
        self.elements()
            .filter(|el| el.has_class(class))
            .map(|el| el.id.clone())
            .collect()
    }

    /// Ids of elements carrying the `data-*` attribute `key`, in document
    /// order.
    pub fn query_data(&self, key: &str) -> Vec<String> {
        self.elements()
            .filter(|el| el.dataset.contains_key(key))
            .map(|el| el.id.clone())
            .collect()
    }

    /// Ids of elements with the given tag, in document order.
    pub fn query_tag(&self, tag: &str) -> Vec<String> {
        self.elements()
            .filter(|el| el.tag == tag)
            .map(|el| el.id.clone())
            .collect()
    }

    /// Child ids of `parent_id` in markup order.
    pub fn children_of(&self, parent_id: &str) -> Vec<String> {
        self.elements
            .get(parent_id)
            .map(|el| el.children.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.insert(Element::new("hero").with_tag("section").with_class("hero"));
        doc.insert(
            Element::new("services")
                .with_tag("section")
                .with_data("animate", "fade-up"),
        );
        doc.insert(Element::new("grid").with_data("animate-children", "zoom-in"));
        doc.append_child("grid", Element::new("card-a").with_class("card"));
        doc.append_child("grid", Element::new("card-b").with_class("card"));
        doc
    }

    #[test]
    fn document_order_is_preserved() {
        let doc = sample();
        let ids: Vec<_> = doc.elements().map(|el| el.id.as_str()).collect();
        assert_eq!(ids, ["hero", "services", "grid", "card-a", "card-b"]);
    }

    #[test]
    fn queries_follow_document_order() {
        let doc = sample();
        assert_eq!(doc.query_class("card"), ["card-a", "card-b"]);
        assert_eq!(doc.query_data("animate"), ["services"]);
        assert_eq!(doc.query_tag("section"), ["hero", "services"]);
    }

    #[test]
    fn children_keep_markup_order() {
        let doc = sample();
        assert_eq!(doc.children_of("grid"), ["card-a", "card-b"]);
        assert_eq!(doc.get("card-a").unwrap().parent.as_deref(), Some("grid"));
    }

    #[test]
    fn append_to_missing_parent_is_dropped() {
        let mut doc = sample();
        doc.append_child("nope", Element::new("lost"));
        assert!(!doc.contains("lost"));
    }

    #[test]
    fn remove_unlinks_from_parent() {
        let mut doc = sample();
        assert!(doc.remove("card-a").is_some());
        assert_eq!(doc.children_of("grid"), ["card-b"]);
        assert!(doc.remove("card-a").is_none());
    }

    #[test]
    fn insert_with_same_id_replaces_in_place() {
        let mut doc = sample();
        let len = doc.len();
        doc.insert(Element::new("hero").with_rect(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(doc.len(), len);
        assert_eq!(doc.get("hero").unwrap().rect.width, 1.0);
    }
}
