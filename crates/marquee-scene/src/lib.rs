//! # Marquee Scene
//!
//! The interactivity runtime for a marketing page: scroll-reveal
//! animations, navbar state, stat counters, form validation, skill tags,
//! and the decorative cursor trail — all driven deterministically over the
//! [`marquee_dom`] page model.
//!
//! # Architecture
//!
//! ```text
//! PageController
//!   ├── RevealAnimator      (hidden ⇄ visible reveal lifecycle)
//!   ├── ViewportObserver    (intersection entries from scroll updates)
//!   ├── NavController       (scrolled state, active link, mobile menu)
//!   ├── CounterGroup        (play-once hero stat count-ups)
//!   ├── FormValidator(s)    (client contact / career application)
//!   ├── SkillTagPicker      (career form multi-select)
//!   └── CursorTrail         (pointer-move dot spawner)
//! ```
//!
//! Everything runs single-threaded: scroll updates produce intersection
//! entries, paint-frame ticks advance deferred style writes and timed
//! effects, and each state write is idempotent so the latest one wins.

pub mod counter;
pub mod cursor;
pub mod form;
pub mod nav;
pub mod observer;
pub mod page;
pub mod reveal;

pub use counter::{CounterGroup, StatCounter};
pub use cursor::{CursorTrail, TrailDot};
pub use form::{FieldRule, FieldSpec, FormValidator, SkillTagPicker};
pub use nav::{NavController, SpanPose};
pub use observer::{IntersectionEntry, ViewportObserver};
pub use page::PageController;
pub use reveal::{
    EasingFunction, RevealAnimator, RevealDescriptor, RevealEvent, RevealEventQueue, RevealKind,
    VisibilityState,
};
