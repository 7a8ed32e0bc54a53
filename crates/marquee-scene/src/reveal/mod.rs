//! Scroll-reveal animation core.
//!
//! This module drives elements through a two-state (hidden ⇄ visible)
//! lifecycle as they enter and leave the tracked viewport region:
//! - **Descriptors**: typed kind/delay/duration configuration parsed from
//!   dataset attributes with defaults (never fails)
//! - **Poses**: the hidden and visible style snapshots per reveal kind
//! - **Easing**: the deceleration curve applied to the reveal transition
//! - **Animator**: the per-element state machine, including the two-frame
//!   deferral that keeps the browser-style pipeline from coalescing the
//!   hidden write and the transition enable into a no-op
//! - **Stagger**: per-child delay assignment for container groups
//!
//! Reveals deliberately replay every time an element re-enters the region;
//! the reset-on-exit is part of the page's design, not an oversight.

pub mod animator;
pub mod descriptor;
pub mod easing;
pub mod events;
pub mod pose;
pub mod stagger;

pub use animator::{RevealAnimator, VisibilityState};
pub use descriptor::{legacy_kind_for_class, RevealDescriptor, RevealKind};
pub use easing::EasingFunction;
pub use events::{RevealEvent, RevealEventQueue};
pub use pose::Pose;
pub use stagger::StaggerGroup;
