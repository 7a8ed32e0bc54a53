//! Reveal descriptors: the kind/delay/duration configuration attached to
//! an animated element.
//!
//! Descriptors are parsed from dataset attributes (`data-animate`,
//! `data-delay`, `data-duration`). Parsing never fails: missing or
//! malformed fields resolve to documented defaults, and an unrecognized
//! kind falls back to [`RevealKind::Default`].

use marquee_dom::Element;
use serde::{Deserialize, Serialize};

/// The reveal animation applied to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealKind {
    /// Fades in while translating upward.
    FadeUp,
    /// Fades in while sliding from the left.
    FadeLeft,
    /// Fades in while sliding from the right.
    FadeRight,
    /// Fades in while scaling up from slightly smaller, with a blur.
    ZoomIn,
    /// The fallback reveal: a shorter upward drift.
    Default,
}

impl Default for RevealKind {
    fn default() -> Self {
        Self::Default
    }
}

impl RevealKind {
    /// Parse a `data-animate` attribute value. Unrecognized values resolve
    /// to [`RevealKind::Default`].
    pub fn from_attr(value: &str) -> Self {
        match value {
            "fade-up" => Self::FadeUp,
            "fade-left" => Self::FadeLeft,
            "fade-right" => Self::FadeRight,
            "zoom-in" => Self::ZoomIn,
            _ => Self::Default,
        }
    }

    /// The `data-animate` attribute value for this kind.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::FadeUp => "fade-up",
            Self::FadeLeft => "fade-left",
            Self::FadeRight => "fade-right",
            Self::ZoomIn => "zoom-in",
            Self::Default => "default",
        }
    }

    /// True if the reveal animates the blur filter as well as
    /// opacity/transform.
    pub fn animates_filter(&self) -> bool {
        matches!(self, Self::ZoomIn)
    }
}

/// Legacy shorthand classes mapped to their implicit reveal kinds.
///
/// Consulted once at registration; an explicit `data-animate` attribute
/// always wins over a legacy class.
pub const LEGACY_CLASS_KINDS: &[(&str, RevealKind)] = &[
    ("reveal", RevealKind::FadeUp),
    ("reveal-left", RevealKind::FadeLeft),
    ("reveal-right", RevealKind::FadeRight),
];

/// Look up the reveal kind a legacy class implies, if any.
pub fn legacy_kind_for_class(class: &str) -> Option<RevealKind> {
    LEGACY_CLASS_KINDS
        .iter()
        .find(|(name, _)| *name == class)
        .map(|(_, kind)| *kind)
}

/// Typed reveal configuration for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealDescriptor {
    pub kind: RevealKind,
    /// Stagger offset before the transition starts, in milliseconds.
    pub delay_ms: u32,
    /// Transition length in milliseconds.
    pub duration_ms: u32,
}

impl Default for RevealDescriptor {
    fn default() -> Self {
        Self {
            kind: RevealKind::Default,
            delay_ms: 0,
            duration_ms: 700,
        }
    }
}

impl RevealDescriptor {
    /// Create a descriptor for a kind with default timing.
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the stagger delay.
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the transition duration.
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Parse an element's dataset into a descriptor.
    ///
    /// `data-animate` selects the kind (unrecognized → `Default`),
    /// `data-delay` and `data-duration` override the timing. Malformed
    /// numbers fall back to the defaults rather than failing.
    pub fn parse(element: &Element, default_duration_ms: u32) -> Self {
        let kind = element
            .data("animate")
            .map(RevealKind::from_attr)
            .unwrap_or_default();
        let delay_ms = element
            .data("delay")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let duration_ms = element
            .data("duration")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&d| d > 0)
            .unwrap_or(default_duration_ms);
        Self {
            kind,
            delay_ms,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_attr_roundtrip() {
        for kind in [
            RevealKind::FadeUp,
            RevealKind::FadeLeft,
            RevealKind::FadeRight,
            RevealKind::ZoomIn,
        ] {
            assert_eq!(RevealKind::from_attr(kind.as_attr()), kind);
        }
    }

    #[test]
    fn unrecognized_kind_falls_back_to_default() {
        assert_eq!(RevealKind::from_attr("spiral-in"), RevealKind::Default);
        assert_eq!(RevealKind::from_attr(""), RevealKind::Default);
    }

    #[test]
    fn only_zoom_animates_filter() {
        assert!(RevealKind::ZoomIn.animates_filter());
        assert!(!RevealKind::FadeUp.animates_filter());
        assert!(!RevealKind::Default.animates_filter());
    }

    #[test]
    fn legacy_class_mapping() {
        assert_eq!(legacy_kind_for_class("reveal"), Some(RevealKind::FadeUp));
        assert_eq!(
            legacy_kind_for_class("reveal-left"),
            Some(RevealKind::FadeLeft)
        );
        assert_eq!(
            legacy_kind_for_class("reveal-right"),
            Some(RevealKind::FadeRight)
        );
        assert_eq!(legacy_kind_for_class("card"), None);
    }

    #[test]
    fn parse_with_full_dataset() {
        let el = Element::new("a")
            .with_data("animate", "zoom-in")
            .with_data("delay", "200")
            .with_data("duration", "900");
        let d = RevealDescriptor::parse(&el, 700);
        assert_eq!(d.kind, RevealKind::ZoomIn);
        assert_eq!(d.delay_ms, 200);
        assert_eq!(d.duration_ms, 900);
    }

    #[test]
    fn parse_defaults_for_missing_and_malformed() {
        let el = Element::new("a")
            .with_data("animate", "wobble")
            .with_data("delay", "soon")
            .with_data("duration", "0");
        let d = RevealDescriptor::parse(&el, 700);
        assert_eq!(d.kind, RevealKind::Default);
        assert_eq!(d.delay_ms, 0);
        assert_eq!(d.duration_ms, 700);

        let bare = Element::new("b");
        assert_eq!(RevealDescriptor::parse(&bare, 700), RevealDescriptor::default());
    }

    #[test]
    fn descriptor_serializes_kebab_case() {
        let d = RevealDescriptor::new(RevealKind::FadeLeft);
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"fade-left\""));
        let parsed: RevealDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }
}
