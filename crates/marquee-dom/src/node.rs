//! Page elements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::style::InlineStyle;

/// A single page node.
///
/// Elements are identified by string ids (unique within a [`Document`]),
/// carry class markers and `data-*` attributes the way the page's markup
/// declares them, and expose a typed inline style bag plus a page-absolute
/// rect. Form controls additionally use `value`; text nodes use `text`.
///
/// [`Document`]: crate::Document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    /// Tag name, lowercase ("section", "div", "input", ...).
    pub tag: String,
    pub classes: Vec<String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub dataset: BTreeMap<String, String>,
    pub style: InlineStyle,
    /// Page-absolute geometry (not viewport-relative).
    pub rect: Rect,
    /// Rendered text content.
    pub text: String,
    /// Current control value (inputs, selects, textareas).
    pub value: String,
    pub parent: Option<String>,
    pub children: Vec<String>,
}

impl Element {
    /// Create a div element with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: "div".to_string(),
            classes: Vec::new(),
            dataset: BTreeMap::new(),
            style: InlineStyle::default(),
            rect: Rect::default(),
            text: String::new(),
            value: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the tag name.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Add a class marker.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set a `data-*` attribute (key without the `data-` prefix).
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    /// Set the page-absolute rect.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the control value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Read a `data-*` attribute.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    /// Write a `data-*` attribute.
    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.dataset.insert(key.into(), value.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if absent. Returns true if it was added.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    /// Remove a class if present. Returns true if it was removed.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Toggle a class; returns whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }
}
