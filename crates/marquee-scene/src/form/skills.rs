//! The career form's skill tag picker.
//!
//! Tags are toggle buttons carrying a `data-val`; clicking one flips its
//! `active` class and membership in the selection. The selection is
//! mirrored into a hidden input as a comma-joined list (in the order
//! skills were picked) so the form validator sees it like any other
//! field.

use marquee_dom::Document;

const ACTIVE_CLASS: &str = "active";

/// Ordered multi-select over skill tag elements.
#[derive(Debug, Clone)]
pub struct SkillTagPicker {
    input_id: String,
    selected: Vec<String>,
}

impl SkillTagPicker {
    /// `input_id` names the hidden input the selection is mirrored into.
    pub fn new(input_id: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
            selected: Vec::new(),
        }
    }

    /// Selected skill values, in pick order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// The comma-joined form value for the current selection.
    pub fn joined(&self) -> String {
        self.selected.join(",")
    }

    /// Toggle the tag element's skill. Returns whether the skill is
    /// selected afterwards; a tag without a `data-val` is inert.
    pub fn toggle(&mut self, doc: &mut Document, tag_id: &str) -> bool {
        let Some(value) = doc.get(tag_id).and_then(|tag| tag.data("val")).map(str::to_string)
        else {
            return false;
        };

        let now_selected = if self.is_selected(&value) {
            self.selected.retain(|v| *v != value);
            false
        } else {
            self.selected.push(value.clone());
            true
        };

        if let Some(tag) = doc.get_mut(tag_id) {
            if now_selected {
                tag.add_class(ACTIVE_CLASS);
            } else {
                tag.remove_class(ACTIVE_CLASS);
            }
        }
        if let Some(input) = doc.get_mut(&self.input_id) {
            input.value = self.joined();
        }
        now_selected
    }
}
