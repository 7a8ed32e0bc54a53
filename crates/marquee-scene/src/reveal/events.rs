//! Reveal lifecycle events.
//!
//! The animator records each transition into a drainable queue so callers
//! (logging, tests, the demo binary) can observe the lifecycle without
//! holding callbacks into the animator.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A reveal lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealEvent {
    /// The element crossed the entry threshold; its visible write is
    /// pending the frame deferral.
    Entered {
        target: String,
        /// Visible fraction reported by the intersection entry.
        ratio: f64,
    },
    /// The deferred visible write was committed.
    Revealed { target: String },
    /// The element left the tracked region and was snapped back to its
    /// hidden pose.
    Exited { target: String },
}

impl RevealEvent {
    /// The element this event concerns.
    pub fn target(&self) -> &str {
        match self {
            Self::Entered { target, .. }
            | Self::Revealed { target }
            | Self::Exited { target } => target,
        }
    }
}

/// FIFO queue of reveal events.
#[derive(Debug, Default)]
pub struct RevealEventQueue {
    events: VecDeque<RevealEvent>,
}

impl RevealEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: RevealEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<RevealEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain all pending events in order.
    pub fn drain(&mut self) -> impl Iterator<Item = RevealEvent> + '_ {
        self.events.drain(..)
    }

    /// Pending events for one element.
    pub fn events_for(&self, target: &str) -> Vec<&RevealEvent> {
        self.events.iter().filter(|e| e.target() == target).collect()
    }
}
