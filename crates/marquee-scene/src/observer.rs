//! Viewport intersection tracking.
//!
//! Elements are observed against a tracked region: the viewport with a
//! margin shaved off its bottom edge, so reveals start slightly before an
//! element would reach the very edge of the screen. An element intersects
//! when its visible fraction of the tracked region meets the entry
//! threshold. Entries are emitted when that predicate changes, plus once
//! for every element on its first poll after being observed, mirroring the
//! initial report a freshly-observed target receives.
//!
//! Element rects live in page coordinates; scrolling moves the viewport
//! down the page rather than moving the elements.

use marquee_dom::Rect;
use serde::{Deserialize, Serialize};

/// One observation report for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: String,
    /// Fraction of the target inside the tracked region, `0.0..=1.0`.
    pub ratio: f64,
    /// Whether the ratio meets the entry threshold.
    pub is_intersecting: bool,
}

#[derive(Debug)]
struct Observed {
    id: String,
    rect: Rect,
    threshold: f64,
    intersecting: bool,
    reported: bool,
}

/// Tracks observed elements against the scrolling viewport.
#[derive(Debug)]
pub struct ViewportObserver {
    viewport: Rect,
    threshold: f64,
    bottom_margin_px: f64,
    /// Observation order; entries are reported in the order targets were
    /// registered, which follows document order during page setup.
    observed: Vec<Observed>,
}

impl ViewportObserver {
    pub fn new(viewport: Rect, threshold: f64, bottom_margin_px: f64) -> Self {
        Self {
            viewport,
            threshold,
            bottom_margin_px,
            observed: Vec::new(),
        }
    }

    /// The region elements are tested against: the viewport minus the
    /// bottom margin.
    pub fn tracked_region(&self) -> Rect {
        self.viewport.shrink_bottom(self.bottom_margin_px)
    }

    /// Current viewport rect in page coordinates.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Vertical scroll position.
    pub fn scroll_y(&self) -> f64 {
        self.viewport.y
    }

    /// Begin observing a target at the observer's default threshold.
    /// Re-observing replaces the stored rect and re-arms the initial
    /// report.
    pub fn observe(&mut self, id: &str, rect: Rect) {
        let threshold = self.threshold;
        self.observe_with_threshold(id, rect, threshold);
    }

    /// Begin observing a target with its own entry threshold (counter
    /// sections arm later than reveals).
    pub fn observe_with_threshold(&mut self, id: &str, rect: Rect, threshold: f64) {
        if let Some(entry) = self.observed.iter_mut().find(|o| o.id == id) {
            entry.rect = rect;
            entry.threshold = threshold;
            entry.reported = false;
        } else {
            self.observed.push(Observed {
                id: id.to_string(),
                rect,
                threshold,
                intersecting: false,
                reported: false,
            });
        }
    }

    /// Stop observing a target.
    pub fn unobserve(&mut self, id: &str) {
        self.observed.retain(|o| o.id != id);
    }

    /// Update a target's page-coordinate rect after layout moves it.
    pub fn update_rect(&mut self, id: &str, rect: Rect) {
        if let Some(entry) = self.observed.iter_mut().find(|o| o.id == id) {
            entry.rect = rect;
        }
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Scroll the viewport to a vertical offset and report what changed.
    pub fn scroll_to(&mut self, y: f64) -> Vec<IntersectionEntry> {
        self.viewport.y = y.max(0.0);
        self.poll()
    }

    /// Re-test every observed target, returning entries for first reports
    /// and for targets whose intersection predicate flipped.
    pub fn poll(&mut self) -> Vec<IntersectionEntry> {
        let region = self.tracked_region();
        let mut entries = Vec::new();
        for observed in &mut self.observed {
            let ratio = observed.rect.visible_fraction(&region);
            let is_intersecting = ratio >= observed.threshold;
            if !observed.reported || is_intersecting != observed.intersecting {
                observed.reported = true;
                observed.intersecting = is_intersecting;
                entries.push(IntersectionEntry {
                    target: observed.id.clone(),
                    ratio,
                    is_intersecting,
                });
            }
        }
        entries
    }
}
