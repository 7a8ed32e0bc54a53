//! Animated stat counters.
//!
//! A counter group sits in a section observed at a higher threshold than
//! the reveals; when half the section is visible every counter in it
//! counts from zero to its target, each one starting a slot later than
//! the previous so the numbers roll in sequence. The group plays once and
//! then stops listening.
//!
//! The count advances in fixed ticks. Each tick adds `target / total_ticks`
//! and the rendered text is the floor of the running value, so the display
//! climbs through round numbers and lands exactly on the target.

use marquee_config::CounterConfig;
use marquee_dom::Document;

use crate::observer::IntersectionEntry;

/// Length of one counting tick, in milliseconds.
const TICK_MS: u32 = 16;

/// One number element counting up to a target.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    pub element_id: String,
    pub target: f64,
    /// Appended verbatim after the number (`"+"`, `"%"`, …).
    pub suffix: String,
}

impl StatCounter {
    pub fn new(element_id: impl Into<String>, target: f64, suffix: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            target,
            suffix: suffix.into(),
        }
    }

    /// Parse a counter from an element's `data-target` / `data-suffix`.
    /// Returns `None` when there is no parseable target.
    fn parse(doc: &Document, id: &str) -> Option<Self> {
        let el = doc.get(id)?;
        let target = el.data("target")?.trim().parse::<f64>().ok()?;
        let suffix = el.data("suffix").unwrap_or("").to_string();
        Some(Self::new(id, target, suffix))
    }

    /// Rendered text after `active_ms` of counting (negative = not started).
    fn display_at(&self, active_ms: i64, duration_ms: u32) -> Option<String> {
        if active_ms < 0 {
            return None;
        }
        let total_ticks = (duration_ms / TICK_MS).max(1) as f64;
        let ticks = (active_ms as u64 / TICK_MS as u64) as f64;
        let value = self.target / total_ticks * ticks;
        if value >= self.target {
            Some(format!("{}{}", self.target, self.suffix))
        } else {
            Some(format!("{}{}", value.floor() as i64, self.suffix))
        }
    }

    /// Whether the count has landed on the target at `active_ms`.
    fn done_at(&self, active_ms: i64, duration_ms: u32) -> bool {
        if active_ms < 0 {
            return false;
        }
        let total_ticks = (duration_ms / TICK_MS).max(1) as u64;
        active_ms as u64 / TICK_MS as u64 >= total_ticks
    }
}

/// A section's worth of counters sharing one trigger.
#[derive(Debug)]
pub struct CounterGroup {
    config: CounterConfig,
    counters: Vec<StatCounter>,
    triggered: bool,
    /// Milliseconds since the trigger fired.
    clock_ms: u64,
}

impl CounterGroup {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            counters: Vec::new(),
            triggered: false,
            clock_ms: 0,
        }
    }

    /// Collect the counters under a section element, in markup order.
    /// Children without a parseable `data-target` are skipped.
    pub fn from_section(doc: &Document, section_id: &str, config: CounterConfig) -> Self {
        let mut group = Self::new(config);
        for child_id in doc.children_of(section_id) {
            if let Some(counter) = StatCounter::parse(doc, &child_id) {
                group.counters.push(counter);
            }
        }
        group
    }

    pub fn push(&mut self, counter: StatCounter) {
        self.counters.push(counter);
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Feed the section's intersection entry. The group arms on the first
    /// entry meeting the trigger threshold and ignores everything after,
    /// so leaving and re-entering the section never replays the count.
    pub fn handle_intersection(&mut self, entry: &IntersectionEntry) -> bool {
        if !self.triggered && entry.is_intersecting && entry.ratio >= self.config.trigger_threshold {
            self.triggered = true;
            log::debug!("counters armed ({} targets)", self.counters.len());
        }
        self.triggered
    }

    /// Advance the group clock and rewrite every running counter's text.
    /// Counter `i` starts `i * group_stagger_ms` after the trigger.
    pub fn advance(&mut self, doc: &mut Document, dt_ms: u64) {
        if !self.triggered {
            return;
        }
        self.clock_ms += dt_ms;
        for (i, counter) in self.counters.iter().enumerate() {
            let start = i as u64 * self.config.group_stagger_ms as u64;
            let active_ms = self.clock_ms as i64 - start as i64;
            if let Some(text) = counter.display_at(active_ms, self.config.duration_ms) {
                if let Some(el) = doc.get_mut(&counter.element_id) {
                    el.text = text;
                }
            }
        }
    }

    /// True once every counter has landed on its target.
    pub fn is_complete(&self) -> bool {
        self.triggered
            && self.counters.iter().enumerate().all(|(i, c)| {
                let start = i as u64 * self.config.group_stagger_ms as u64;
                c.done_at(self.clock_ms as i64 - start as i64, self.config.duration_ms)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_dom::Element;

    fn stats_doc() -> Document {
        let mut doc = Document::new();
        doc.insert(Element::new("hero-stats"));
        for (id, target, suffix) in [("s0", "50", "+"), ("s1", "100", "%"), ("s2", "6", "")] {
            let mut el = Element::new(id).with_data("target", target);
            if !suffix.is_empty() {
                el.set_data("suffix", suffix);
            }
            doc.append_child("hero-stats", el);
        }
        doc
    }

    fn entry(ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            target: "hero-stats".to_string(),
            ratio,
            is_intersecting: ratio >= 0.1,
        }
    }

    #[test]
    fn section_scan_collects_counters_in_order() {
        let doc = stats_doc();
        let group = CounterGroup::from_section(&doc, "hero-stats", CounterConfig::default());
        assert_eq!(group.len(), 3);
        assert_eq!(group.counters[0], StatCounter::new("s0", 50.0, "+"));
        assert_eq!(group.counters[2].suffix, "");
    }

    #[test]
    fn children_without_targets_are_skipped() {
        let mut doc = stats_doc();
        doc.append_child("hero-stats", Element::new("label").with_text("projects"));
        doc.append_child("hero-stats", Element::new("bad").with_data("target", "many"));
        let group = CounterGroup::from_section(&doc, "hero-stats", CounterConfig::default());
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn group_arms_only_at_the_trigger_threshold() {
        let doc = stats_doc();
        let mut group = CounterGroup::from_section(&doc, "hero-stats", CounterConfig::default());
        assert!(!group.handle_intersection(&entry(0.3)));
        assert!(group.handle_intersection(&entry(0.5)));
        assert!(group.triggered());
    }

    #[test]
    fn untriggered_group_never_writes() {
        let mut doc = stats_doc();
        let mut group = CounterGroup::from_section(&doc, "hero-stats", CounterConfig::default());
        group.advance(&mut doc, 2000);
        assert_eq!(doc.get("s0").unwrap().text, "");
    }

    #[test]
    fn counters_climb_and_land_exactly_on_target() {
        let mut doc = stats_doc();
        let mut group = CounterGroup::from_section(&doc, "hero-stats", CounterConfig::default());
        group.handle_intersection(&entry(0.8));

        group.advance(&mut doc, 750);
        let halfway = doc.get("s0").unwrap().text.clone();
        // Roughly half the target, suffix attached, not yet finished
        assert!(halfway.ends_with('+'));
        let n: i64 = halfway.trim_end_matches('+').parse().unwrap();
        assert!((20..30).contains(&n), "unexpected midpoint {n}");

        // Past duration plus the last counter's stagger slot
        group.advance(&mut doc, 2000);
        assert_eq!(doc.get("s0").unwrap().text, "50+");
        assert_eq!(doc.get("s1").unwrap().text, "100%");
        assert_eq!(doc.get("s2").unwrap().text, "6");
        assert!(group.is_complete());
    }

    #[test]
    fn stagger_slots_delay_later_counters() {
        let mut doc = stats_doc();
        let mut group = CounterGroup::from_section(&doc, "hero-stats", CounterConfig::default());
        group.handle_intersection(&entry(1.0));

        // After 100ms only the first counter has started
        group.advance(&mut doc, 100);
        assert_ne!(doc.get("s0").unwrap().text, "");
        assert_eq!(doc.get("s1").unwrap().text, "");
        assert_eq!(doc.get("s2").unwrap().text, "");

        // After 300ms the second has started, the third has not
        group.advance(&mut doc, 200);
        assert_ne!(doc.get("s1").unwrap().text, "");
        assert_eq!(doc.get("s2").unwrap().text, "");
    }

    #[test]
    fn replaying_the_trigger_does_not_reset_the_clock() {
        let mut doc = stats_doc();
        let mut group = CounterGroup::from_section(&doc, "hero-stats", CounterConfig::default());
        group.handle_intersection(&entry(0.9));
        group.advance(&mut doc, 5000);
        assert!(group.is_complete());

        group.handle_intersection(&entry(0.0));
        group.handle_intersection(&entry(0.9));
        group.advance(&mut doc, 16);
        assert_eq!(doc.get("s0").unwrap().text, "50+");
        assert!(group.is_complete());
    }
}
