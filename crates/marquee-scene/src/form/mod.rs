//! Form validation and the career form's skill tag picker.
//!
//! A [`FormValidator`] is a declarative list of field specs checked on
//! submit. Failing fields get an error accent (red border plus glow) and
//! their error message element is shown; a clean submit hides the form
//! and shows its success panel instead. Typing into a field clears its
//! error as soon as there is real content, so users aren't nagged while
//! fixing a mistake.

pub mod rules;
pub mod skills;

pub use rules::FieldRule;
pub use skills::SkillTagPicker;

use marquee_dom::{BoxShadow, Display, Document};
use serde::{Deserialize, Serialize};

/// Border color while a field is in error (`#ff5555`).
const ERROR_BORDER: [f32; 4] = [1.0, 0.333, 0.333, 1.0];
/// Soft glow paired with the error border.
const ERROR_SHADOW: BoxShadow = BoxShadow {
    offset_x: 0.0,
    offset_y: 0.0,
    blur: 12.0,
    color: [1.0, 0.333, 0.333, 0.15],
};

/// One field: where its value lives, where its error message lives, and
/// the rule that must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field_id: String,
    pub error_id: String,
    pub rule: FieldRule,
    /// Whether a failing check accents the input itself. Hidden inputs
    /// (like the skills list behind the tag picker) only show the
    /// message.
    #[serde(default = "default_true")]
    pub accent_input: bool,
}

fn default_true() -> bool {
    true
}

impl FieldSpec {
    pub fn new(
        field_id: impl Into<String>,
        error_id: impl Into<String>,
        rule: FieldRule,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            error_id: error_id.into(),
            rule,
            accent_input: true,
        }
    }

    /// Skip the input accent for this field.
    pub fn message_only(mut self) -> Self {
        self.accent_input = false;
        self
    }
}

/// Validates a form's fields and swaps in the success panel on a clean
/// submit.
#[derive(Debug, Clone)]
pub struct FormValidator {
    form_id: String,
    success_id: String,
    fields: Vec<FieldSpec>,
}

impl FormValidator {
    pub fn new(form_id: impl Into<String>, success_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            success_id: success_id.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field spec.
    pub fn field(
        mut self,
        field_id: impl Into<String>,
        error_id: impl Into<String>,
        rule: FieldRule,
    ) -> Self {
        self.fields.push(FieldSpec::new(field_id, error_id, rule));
        self
    }

    /// Add a field spec that never accents its input element.
    pub fn hidden_field(
        mut self,
        field_id: impl Into<String>,
        error_id: impl Into<String>,
        rule: FieldRule,
    ) -> Self {
        self.fields
            .push(FieldSpec::new(field_id, error_id, rule).message_only());
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Run a submit: check every field, update error presentation, and on
    /// success hide the form and reveal the success panel. Returns whether
    /// the submit was accepted.
    pub fn submit(&self, doc: &mut Document) -> bool {
        let mut valid = true;
        for spec in &self.fields {
            let value = doc
                .get(&spec.field_id)
                .map(|el| el.value.clone())
                .unwrap_or_default();
            if spec.rule.check(&value) {
                self.hide_error(doc, spec);
            } else {
                self.show_error(doc, spec);
                valid = false;
            }
        }
        if valid {
            if let Some(form) = doc.get_mut(&self.form_id) {
                form.style.display = Some(Display::None);
            }
            if let Some(success) = doc.get_mut(&self.success_id) {
                success.style.display = Some(Display::Block);
            }
            log::info!("form {} accepted", self.form_id);
        } else {
            log::debug!("form {} rejected", self.form_id);
        }
        valid
    }

    /// React to a field edit: once the trimmed value is non-empty, clear
    /// the field's error presentation. Full rules re-run on submit.
    pub fn handle_input(&self, doc: &mut Document, field_id: &str) {
        let Some(spec) = self.fields.iter().find(|s| s.field_id == field_id) else {
            return;
        };
        let has_content = doc
            .get(field_id)
            .map(|el| !el.value.trim().is_empty())
            .unwrap_or(false);
        if has_content {
            self.hide_error(doc, spec);
        }
    }

    fn show_error(&self, doc: &mut Document, spec: &FieldSpec) {
        if let Some(err) = doc.get_mut(&spec.error_id) {
            err.style.display = Some(Display::Block);
        }
        if spec.accent_input {
            if let Some(input) = doc.get_mut(&spec.field_id) {
                input.style.border_color = Some(ERROR_BORDER);
                input.style.box_shadow = Some(ERROR_SHADOW);
            }
        }
    }

    fn hide_error(&self, doc: &mut Document, spec: &FieldSpec) {
        if let Some(err) = doc.get_mut(&spec.error_id) {
            err.style.display = Some(Display::None);
        }
        if spec.accent_input {
            if let Some(input) = doc.get_mut(&spec.field_id) {
                input.style.clear_accent();
            }
        }
    }
}

/// The client contact form: name, email, phone, service select, message.
pub fn client_contact_form() -> FormValidator {
    FormValidator::new("clientForm", "formSuccess")
        .field("cf-name", "err-name", FieldRule::MinLength { min: 2 })
        .field("cf-email", "err-email", FieldRule::Email)
        .field("cf-phone", "err-phone", FieldRule::MinLength { min: 7 })
        .field("cf-service", "err-service", FieldRule::Selected)
        .field("cf-message", "err-message", FieldRule::MinLength { min: 10 })
}

/// The career application form: adds experience, skills, portfolio and
/// availability on top of the contact basics, with a longer message
/// minimum.
pub fn career_application_form() -> FormValidator {
    FormValidator::new("careerForm", "careerFormSuccess")
        .field("ca-name", "ca-err-name", FieldRule::MinLength { min: 2 })
        .field("ca-email", "ca-err-email", FieldRule::Email)
        .field("ca-phone", "ca-err-phone", FieldRule::MinLength { min: 7 })
        .field("ca-experience", "ca-err-exp", FieldRule::Selected)
        .hidden_field("ca-skills", "ca-err-skills", FieldRule::NonEmptyList)
        .field("ca-portfolio", "ca-err-portfolio", FieldRule::NonEmpty)
        .field("ca-message", "ca-err-message", FieldRule::MinLength { min: 20 })
        .field("ca-availability", "ca-err-avail", FieldRule::Selected)
}
