//! Stagger groups: containers whose children reveal in sequence.
//!
//! A container opts in with `data-animate-children`, naming the reveal
//! kind every child receives. Each child's delay is its markup position
//! times the group interval, so the group cascades instead of popping in
//! at once. Children keep any `data-duration` of their own; an explicit
//! `data-delay` on a child is overridden by its computed slot.

use marquee_config::RevealConfig;
use marquee_dom::Document;

use super::descriptor::{RevealDescriptor, RevealKind};

/// A resolved stagger container: the shared kind, the per-slot interval,
/// and the children in markup order.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggerGroup {
    pub kind: RevealKind,
    pub interval_ms: u32,
    pub children: Vec<String>,
}

impl StaggerGroup {
    /// Resolve a container element into a group.
    ///
    /// Returns `None` if the element doesn't exist or doesn't carry
    /// `data-animate-children`. An empty children list is a valid group.
    pub fn from_container(doc: &Document, parent_id: &str, config: &RevealConfig) -> Option<Self> {
        let parent = doc.get(parent_id)?;
        let kind = RevealKind::from_attr(parent.data("animate-children")?);
        let interval_ms = parent
            .data("stagger")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(config.stagger_interval_ms);
        Some(Self {
            kind,
            interval_ms,
            children: doc.children_of(parent_id),
        })
    }

    /// Descriptor for each child: slot `i` gets delay `i * interval_ms`.
    ///
    /// A child's own `data-duration` is not consulted here; the group
    /// assigns timing wholesale and the animator records it back onto the
    /// child's dataset.
    pub fn assignments(&self, default_duration_ms: u32) -> Vec<(String, RevealDescriptor)> {
        self.children
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let descriptor = RevealDescriptor::new(self.kind)
                    .with_delay(i as u32 * self.interval_ms)
                    .with_duration(default_duration_ms);
                (id.clone(), descriptor)
            })
            .collect()
    }
}
