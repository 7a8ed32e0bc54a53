//! The reveal animator: per-element hidden ⇄ visible state machine.
//!
//! Registration snaps an element to its hidden pose (transitions disabled,
//! so there is no flash) and starts observing it. Intersection entries then
//! drive the state machine:
//!
//! ```text
//!          ratio ≥ threshold (entering)
//!   Hidden ────────────────────────────▶ Visible
//!      ▲                                   │
//!      └───────────────────────────────────┘
//!          leaves tracked region (hidden pose reapplied → replays)
//! ```
//!
//! The visible-state write is deferred by two paint-frame boundaries after
//! the hidden write; committing the transition property on a later frame
//! than the hidden pose keeps the rendering pipeline from coalescing the
//! two writes into a no-op with no perceptible animation. An exit that
//! arrives during the deferral cancels the pending write — the latest
//! state always wins, so rapid enter/exit/enter sequences need no
//! coordination.

use std::collections::HashMap;

use marquee_config::RevealConfig;
use marquee_dom::Document;
use serde::{Deserialize, Serialize};

use super::descriptor::RevealDescriptor;
use super::easing::EasingFunction;
use super::events::{RevealEvent, RevealEventQueue};
use super::pose::{apply_hidden, apply_visible};
use super::stagger::StaggerGroup;
use crate::observer::{IntersectionEntry, ViewportObserver};

/// Paint-frame boundaries between the hidden write and the visible write.
/// One frame commits the hidden pose, the next commits the transition
/// property before the target values change.
const REVEAL_DEFER_FRAMES: u8 = 2;

/// Lifecycle state of a registered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityState {
    Hidden,
    Visible,
}

#[derive(Debug)]
struct Tracked {
    descriptor: RevealDescriptor,
    state: VisibilityState,
}

#[derive(Debug)]
struct PendingReveal {
    target: String,
    frames_left: u8,
}

/// Drives registered elements through the reveal lifecycle.
#[derive(Debug)]
pub struct RevealAnimator {
    config: RevealConfig,
    easing: EasingFunction,
    tracked: HashMap<String, Tracked>,
    /// Deferred visible writes, in entry order.
    pending: Vec<PendingReveal>,
    events: RevealEventQueue,
}

impl RevealAnimator {
    /// Create an animator with the given reveal settings.
    pub fn new(config: RevealConfig) -> Self {
        let easing = EasingFunction::from_points(config.easing);
        Self {
            config,
            easing,
            tracked: HashMap::new(),
            pending: Vec::new(),
            events: RevealEventQueue::new(),
        }
    }

    /// Register an element with an explicit descriptor.
    ///
    /// Immediately applies the hidden pose (transitions disabled) and, if an
    /// observer is available, begins observing the element's rect. Without
    /// an observer the element simply stays hidden — degraded, not an error.
    /// Returns false if the element does not exist.
    pub fn register(
        &mut self,
        doc: &mut Document,
        observer: Option<&mut ViewportObserver>,
        id: &str,
        descriptor: RevealDescriptor,
    ) -> bool {
        let Some(element) = doc.get_mut(id) else {
            log::debug!("reveal: skipping unknown element {id:?}");
            return false;
        };
        apply_hidden(element, descriptor.kind);
        let rect = element.rect;
        self.tracked.insert(
            id.to_string(),
            Tracked {
                descriptor,
                state: VisibilityState::Hidden,
            },
        );
        if let Some(observer) = observer {
            observer.observe(id, rect);
        }
        true
    }

    /// Register an element, parsing its descriptor from dataset attributes
    /// with the configured default duration.
    pub fn register_element(
        &mut self,
        doc: &mut Document,
        observer: Option<&mut ViewportObserver>,
        id: &str,
    ) -> bool {
        let Some(element) = doc.get(id) else {
            return false;
        };
        let descriptor = RevealDescriptor::parse(element, self.config.duration_ms);
        self.register(doc, observer, id, descriptor)
    }

    /// Register every child of a stagger container, assigning delays from
    /// markup position. Returns the number of children registered.
    pub fn register_group(
        &mut self,
        doc: &mut Document,
        mut observer: Option<&mut ViewportObserver>,
        parent_id: &str,
    ) -> usize {
        let Some(group) = StaggerGroup::from_container(doc, parent_id, &self.config) else {
            return 0;
        };
        let mut registered = 0;
        for (child_id, descriptor) in group.assignments(self.config.duration_ms) {
            // Record the derived attributes on the child so later scans see
            // it as an ordinary animated element.
            if let Some(child) = doc.get_mut(&child_id) {
                child.set_data("animate", descriptor.kind.as_attr());
                child.set_data("delay", descriptor.delay_ms.to_string());
            }
            if self.register(doc, observer.as_deref_mut(), &child_id, descriptor) {
                registered += 1;
            }
        }
        registered
    }

    /// Feed intersection entries through the state machine.
    pub fn handle_intersections(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) {
        for entry in entries {
            let Some(tracked) = self.tracked.get_mut(&entry.target) else {
                continue;
            };
            if entry.is_intersecting {
                if tracked.state == VisibilityState::Hidden {
                    tracked.state = VisibilityState::Visible;
                    self.pending.retain(|p| p.target != entry.target);
                    self.pending.push(PendingReveal {
                        target: entry.target.clone(),
                        frames_left: REVEAL_DEFER_FRAMES,
                    });
                    log::debug!("reveal: {} entered (ratio {:.2})", entry.target, entry.ratio);
                    self.events.push(RevealEvent::Entered {
                        target: entry.target.clone(),
                        ratio: entry.ratio,
                    });
                }
            } else {
                let was_visible = tracked.state == VisibilityState::Visible;
                tracked.state = VisibilityState::Hidden;
                self.pending.retain(|p| p.target != entry.target);
                // Reapply the snapshot unconditionally; exits are idempotent
                // and the reset is what makes the reveal replay on re-entry.
                if let Some(element) = doc.get_mut(&entry.target) {
                    apply_hidden(element, tracked.descriptor.kind);
                }
                if was_visible {
                    log::debug!("reveal: {} exited", entry.target);
                    self.events.push(RevealEvent::Exited {
                        target: entry.target.clone(),
                    });
                }
            }
        }
    }

    /// Advance one paint-frame boundary, committing any visible writes
    /// whose deferral has elapsed.
    pub fn frame(&mut self, doc: &mut Document) {
        let mut ready = Vec::new();
        self.pending.retain_mut(|pending| {
            pending.frames_left -= 1;
            if pending.frames_left == 0 {
                ready.push(pending.target.clone());
                false
            } else {
                true
            }
        });

        for target in ready {
            let Some(tracked) = self.tracked.get(&target) else {
                continue;
            };
            // An exit may have raced the deferral; only commit if still due.
            if tracked.state != VisibilityState::Visible {
                continue;
            }
            if let Some(element) = doc.get_mut(&target) {
                apply_visible(element, &tracked.descriptor, self.easing.as_points());
            }
            self.events.push(RevealEvent::Revealed {
                target: target.clone(),
            });
        }
    }

    /// Current lifecycle state of an element, if registered.
    pub fn state_of(&self, id: &str) -> Option<VisibilityState> {
        self.tracked.get(id).map(|t| t.state)
    }

    /// Descriptor an element was registered with, if any.
    pub fn descriptor_of(&self, id: &str) -> Option<&RevealDescriptor> {
        self.tracked.get(id).map(|t| &t.descriptor)
    }

    /// Number of registered elements.
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Number of visible writes still waiting on the frame deferral.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drain all recorded lifecycle events in order.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        self.events.drain().collect()
    }
}
