//! Hidden and visible style snapshots.
//!
//! A pose is the full set of style values a reveal writes in one go. The
//! hidden pose is a deterministic function of the reveal kind; the visible
//! pose is always the identity. Applying the hidden pose disables
//! transitions first so the jump to the offset position is instantaneous,
//! never animated.

use marquee_dom::{Element, InlineStyle, Transform2D, TransitionProperty, TransitionStyle};
use serde::{Deserialize, Serialize};

use super::descriptor::{RevealDescriptor, RevealKind};

/// Vertical offset for `fade-up`, in pixels.
const FADE_UP_OFFSET: f64 = 40.0;
/// Horizontal offset magnitude for `fade-left` / `fade-right`, in pixels.
const FADE_SIDE_OFFSET: f64 = 50.0;
/// Start scale for `zoom-in`.
const ZOOM_IN_SCALE: f64 = 0.92;
/// Blur radius for `zoom-in`'s hidden pose, in pixels.
const ZOOM_IN_BLUR: f64 = 4.0;
/// Vertical offset for the fallback kind, in pixels.
const DEFAULT_OFFSET: f64 = 30.0;

/// A complete reveal style snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub opacity: f32,
    pub transform: Transform2D,
    pub blur_px: f64,
}

impl Pose {
    /// The pre-animation pose for a reveal kind: offset and fully faded.
    pub fn hidden(kind: RevealKind) -> Self {
        let (transform, blur_px) = match kind {
            RevealKind::FadeUp => (Transform2D::translate_y(FADE_UP_OFFSET), 0.0),
            RevealKind::FadeLeft => (Transform2D::translate_x(-FADE_SIDE_OFFSET), 0.0),
            RevealKind::FadeRight => (Transform2D::translate_x(FADE_SIDE_OFFSET), 0.0),
            RevealKind::ZoomIn => (Transform2D::scale(ZOOM_IN_SCALE), ZOOM_IN_BLUR),
            RevealKind::Default => (Transform2D::translate_y(DEFAULT_OFFSET), 0.0),
        };
        Self {
            opacity: 0.0,
            transform,
            blur_px,
        }
    }

    /// The post-animation pose: identity transform, opaque, unblurred.
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            transform: Transform2D::identity(),
            blur_px: 0.0,
        }
    }

    /// Write this pose into a style bag (transition untouched).
    fn write(&self, style: &mut InlineStyle) {
        style.opacity = Some(self.opacity);
        style.transform = Some(self.transform);
        style.blur_px = Some(self.blur_px);
    }
}

/// The properties the reveal transition is scoped to for a kind.
pub fn transition_properties(kind: RevealKind) -> Vec<TransitionProperty> {
    let mut props = vec![TransitionProperty::Opacity, TransitionProperty::Transform];
    if kind.animates_filter() {
        props.push(TransitionProperty::Filter);
    }
    props
}

/// Snap an element to the hidden pose for `kind`.
///
/// Transitions are disabled before the write so the reset never flashes.
pub fn apply_hidden(element: &mut Element, kind: RevealKind) {
    element.style.transition = None;
    Pose::hidden(kind).write(&mut element.style);
}

/// Transition an element to the visible pose.
///
/// Re-enables transitions scoped to the properties that actually change,
/// then writes the identity pose. Callers must have already committed the
/// hidden pose across a paint boundary or the write lands instantly.
pub fn apply_visible(element: &mut Element, descriptor: &RevealDescriptor, easing: [f32; 4]) {
    element.style.transition = Some(TransitionStyle {
        properties: transition_properties(descriptor.kind),
        duration_ms: descriptor.duration_ms,
        delay_ms: descriptor.delay_ms,
        easing,
    });
    Pose::visible().write(&mut element.style);
}
