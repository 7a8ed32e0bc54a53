//! The inline style property bag.
//!
//! Elements carry a typed equivalent of the handful of CSS properties the
//! runtime writes: opacity, a 2D transform, a blur filter, the transition
//! declaration, visibility/display, and the error accent pair used by form
//! validation. Everything is optional; `None` means "not set inline".

use serde::{Deserialize, Serialize};

/// 2D transform with the components the reveal poses and menu toggle use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    #[serde(default)]
    pub rotate_deg: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate_deg: 0.0,
        }
    }
}

impl Transform2D {
    /// The identity transform (translate 0, scale 1).
    pub fn identity() -> Self {
        Self::default()
    }

    /// A pure vertical offset.
    pub fn translate_y(offset: f64) -> Self {
        Self {
            translate_y: offset,
            ..Self::default()
        }
    }

    /// A pure horizontal offset.
    pub fn translate_x(offset: f64) -> Self {
        Self {
            translate_x: offset,
            ..Self::default()
        }
    }

    /// A pure uniform scale.
    pub fn scale(factor: f64) -> Self {
        Self {
            scale: factor,
            ..Self::default()
        }
    }

    /// A pure rotation, in degrees.
    pub fn rotate(degrees: f64) -> Self {
        Self {
            rotate_deg: degrees,
            ..Self::default()
        }
    }

    /// True if all components are at their identity values.
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.scale == 1.0
            && self.rotate_deg == 0.0
    }
}

/// A property name a transition declaration can scope to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionProperty {
    Opacity,
    Transform,
    Filter,
}

/// An inline transition declaration, the typed form of
/// `transition: opacity, transform 700ms cubic-bezier(...) 100ms`.
///
/// The easing field holds the cubic-bezier control points `(x1, y1, x2, y2)`;
/// evaluation lives in the scene crate, the style bag only records the
/// declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionStyle {
    /// Properties the transition is scoped to.
    pub properties: Vec<TransitionProperty>,
    /// Transition length in milliseconds.
    pub duration_ms: u32,
    /// Delay before the transition starts in milliseconds.
    pub delay_ms: u32,
    /// Cubic-bezier control points.
    pub easing: [f32; 4],
}

impl TransitionStyle {
    /// True if the declaration covers `property`.
    pub fn covers(&self, property: TransitionProperty) -> bool {
        self.properties.contains(&property)
    }
}

/// CSS-like visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// CSS-like display, reduced to what form flows toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    Block,
    None,
}

/// Box shadow parameters, used for the form error glow.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxShadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    /// RGBA components in `0.0..=1.0`.
    pub color: [f32; 4],
}

impl BoxShadow {
    pub fn new(offset_x: f64, offset_y: f64, blur: f64, color: [f32; 4]) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }
}

/// The inline style bag for an element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineStyle {
    pub opacity: Option<f32>,
    pub transform: Option<Transform2D>,
    /// Blur filter radius in pixels. `Some(0.0)` is an explicit `blur(0)`.
    pub blur_px: Option<f64>,
    /// `None` means transitions are disabled (`transition: none`); style
    /// writes while this is unset land instantly.
    pub transition: Option<TransitionStyle>,
    pub visibility: Option<Visibility>,
    pub display: Option<Display>,
    /// Border color accent (RGBA), set while a form field is in error.
    pub border_color: Option<[f32; 4]>,
    pub box_shadow: Option<BoxShadow>,
}

impl InlineStyle {
    /// Effective opacity; unset inline opacity reads as fully opaque.
    pub fn effective_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    /// Effective transform; unset reads as identity.
    pub fn effective_transform(&self) -> Transform2D {
        self.transform.unwrap_or_default()
    }

    /// Remove the error accent pair.
    pub fn clear_accent(&mut self) {
        self.border_color = None;
        self.box_shadow = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_constructors() {
        assert!(Transform2D::identity().is_identity());
        assert_eq!(Transform2D::translate_y(40.0).translate_y, 40.0);
        assert_eq!(Transform2D::translate_x(-50.0).translate_x, -50.0);
        assert_eq!(Transform2D::scale(0.92).scale, 0.92);
        assert_eq!(Transform2D::rotate(45.0).rotate_deg, 45.0);
        assert!(!Transform2D::scale(0.92).is_identity());
        assert!(!Transform2D::rotate(45.0).is_identity());
    }

    #[test]
    fn transition_covers() {
        let t = TransitionStyle {
            properties: vec![TransitionProperty::Opacity, TransitionProperty::Transform],
            duration_ms: 700,
            delay_ms: 0,
            easing: [0.22, 1.0, 0.36, 1.0],
        };
        assert!(t.covers(TransitionProperty::Opacity));
        assert!(!t.covers(TransitionProperty::Filter));
    }

    #[test]
    fn style_defaults_read_as_identity() {
        let style = InlineStyle::default();
        assert_eq!(style.effective_opacity(), 1.0);
        assert!(style.effective_transform().is_identity());
        assert!(style.transition.is_none());
    }

    #[test]
    fn accent_clears_as_a_pair() {
        let mut style = InlineStyle {
            border_color: Some([1.0, 0.0, 0.0, 1.0]),
            box_shadow: Some(BoxShadow::new(0.0, 0.0, 12.0, [1.0, 0.0, 0.0, 0.15])),
            ..Default::default()
        };
        style.clear_accent();
        assert!(style.border_color.is_none());
        assert!(style.box_shadow.is_none());
    }

    #[test]
    fn style_roundtrips_through_json() {
        let style = InlineStyle {
            opacity: Some(0.0),
            transform: Some(Transform2D::translate_y(30.0)),
            ..Default::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        let parsed: InlineStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, parsed);
    }
}
