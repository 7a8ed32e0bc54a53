//! Page orchestration: one controller owning every subsystem and routing
//! scroll, frame, pointer, and form events to them.
//!
//! Well-known element ids and classes follow the page markup: the bar is
//! `#navbar`, the mobile menu `#navLinks` with its `#hamburger` toggle,
//! the counters live under `#hero-stats`, and nav links carry a
//! `data-section` naming the section they point at. Everything else is
//! discovered from attributes at initialization.
//!
//! The controller works without a viewport too: constructed with no
//! viewport rect there is no observer, so registered elements simply stay
//! hidden and every other subsystem keeps working. That is the fallback
//! for environments that cannot report geometry.

use marquee_config::MarqueeConfig;
use marquee_dom::{Document, Rect, Visibility};

use crate::counter::CounterGroup;
use crate::cursor::CursorTrail;
use crate::form::{career_application_form, client_contact_form, FormValidator, SkillTagPicker};
use crate::nav::NavController;
use crate::observer::ViewportObserver;
use crate::reveal::descriptor::LEGACY_CLASS_KINDS;
use crate::reveal::{RevealAnimator, RevealEvent, VisibilityState};

const NAVBAR_ID: &str = "navbar";
const NAV_MENU_ID: &str = "navLinks";
const NAV_TOGGLE_ID: &str = "hamburger";
const STATS_SECTION_ID: &str = "hero-stats";
const SKILLS_INPUT_ID: &str = "ca-skills";

/// Hero elements made visible immediately; they sit above the fold and
/// never take part in the reveal flow.
const HERO_CLASSES: &[&str] = &[
    "hero-badge",
    "hero-heading",
    "hero-sub",
    "hero-buttons",
    "hero-stats",
];

/// Owns and coordinates all page interactivity.
pub struct PageController {
    config: MarqueeConfig,
    animator: RevealAnimator,
    observer: Option<ViewportObserver>,
    nav: NavController,
    counters: Option<CounterGroup>,
    client_form: FormValidator,
    career_form: FormValidator,
    skills: SkillTagPicker,
    trail: CursorTrail,
    nav_links: Vec<(String, String)>,
}

impl PageController {
    /// Build a controller. `viewport` is the initial viewport rect in page
    /// coordinates; pass `None` when geometry is unavailable and the
    /// reveal flow degrades to keeping elements hidden.
    pub fn new(config: MarqueeConfig, viewport: Option<Rect>) -> Self {
        let observer = viewport.map(|rect| {
            ViewportObserver::new(
                rect,
                config.reveal.threshold,
                config.reveal.bottom_margin_px,
            )
        });
        if observer.is_none() {
            log::warn!("no viewport geometry, reveals stay hidden");
        }
        Self {
            animator: RevealAnimator::new(config.reveal.clone()),
            nav: NavController::new(config.nav.clone()),
            counters: None,
            client_form: client_contact_form(),
            career_form: career_application_form(),
            skills: SkillTagPicker::new(SKILLS_INPUT_ID),
            trail: CursorTrail::new(config.trail.clone()),
            nav_links: Vec::new(),
            observer,
            config,
        }
    }

    /// Scan the document and wire every subsystem: legacy reveal classes,
    /// `data-animate` elements, stagger containers, the counter section,
    /// hero visibility, and the initial nav state.
    pub fn initialize(&mut self, doc: &mut Document) {
        // Legacy shorthand classes become data-animate; an explicit
        // attribute wins.
        for &(class, kind) in LEGACY_CLASS_KINDS {
            for id in doc.query_class(class) {
                if let Some(el) = doc.get_mut(&id) {
                    if el.data("animate").is_none() {
                        el.set_data("animate", kind.as_attr());
                    }
                }
            }
        }

        for id in doc.query_data("animate") {
            self.animator
                .register_element(doc, self.observer.as_mut(), &id);
        }
        for id in doc.query_data("animate-children") {
            self.animator
                .register_group(doc, self.observer.as_mut(), &id);
        }

        if doc.contains(STATS_SECTION_ID) {
            let group =
                CounterGroup::from_section(doc, STATS_SECTION_ID, self.config.counter.clone());
            if !group.is_empty() {
                if let (Some(observer), Some(section)) =
                    (self.observer.as_mut(), doc.get(STATS_SECTION_ID))
                {
                    observer.observe_with_threshold(
                        STATS_SECTION_ID,
                        section.rect,
                        self.config.counter.trigger_threshold,
                    );
                }
                self.counters = Some(group);
            }
        }

        // The hero is above the fold; force it visible so nothing there
        // waits on an observer report.
        for class in HERO_CLASSES {
            for id in doc.query_class(class) {
                if let Some(el) = doc.get_mut(&id) {
                    el.style.visibility = Some(Visibility::Visible);
                }
            }
        }

        // Nav links point at sections via data-section.
        self.nav_links = doc
            .query_data("section")
            .into_iter()
            .filter_map(|id| {
                let section = doc.get(&id)?.data("section")?.to_string();
                Some((id, section))
            })
            .collect();

        let scroll_y = self.scroll_y();
        self.nav.update_scrolled(doc, NAVBAR_ID, scroll_y);
        self.sync_nav(doc, scroll_y);

        // Report the initial intersections so above-fold reveals start
        // without waiting for a scroll.
        if let Some(observer) = self.observer.as_mut() {
            let entries = observer.poll();
            self.route_entries(doc, &entries);
        }

        log::info!(
            "page initialized: {} reveals, {} counters, {} nav links",
            self.animator.tracked_count(),
            self.counters.as_ref().map_or(0, CounterGroup::len),
            self.nav_links.len()
        );
    }

    /// Handle a scroll to vertical offset `y`.
    pub fn handle_scroll(&mut self, doc: &mut Document, y: f64) {
        if let Some(observer) = self.observer.as_mut() {
            let entries = observer.scroll_to(y);
            self.route_entries(doc, &entries);
        }
        let scroll_y = self.scroll_y();
        self.nav.update_scrolled(doc, NAVBAR_ID, scroll_y);
        self.sync_nav(doc, scroll_y);
    }

    /// Advance one paint frame: deferred reveal writes, counter text, and
    /// trail dot ages.
    pub fn frame(&mut self, doc: &mut Document, dt_ms: u64) {
        self.animator.frame(doc);
        if let Some(counters) = self.counters.as_mut() {
            counters.advance(doc, dt_ms);
        }
        self.trail.advance(dt_ms);
    }

    /// Follow an in-page anchor: close the mobile menu and scroll so the
    /// target clears the fixed bar. Returns the scroll destination, or
    /// `None` for an unknown target.
    pub fn follow_anchor(&mut self, doc: &mut Document, section_id: &str) -> Option<f64> {
        self.nav.close_menu(doc, NAV_MENU_ID, NAV_TOGGLE_ID);
        let y = self.nav.anchor_target_y(doc, section_id)?;
        self.handle_scroll(doc, y);
        Some(y)
    }

    /// Toggle the mobile menu. Returns whether it is open afterwards.
    pub fn toggle_menu(&mut self, doc: &mut Document) -> bool {
        self.nav.toggle_menu(doc, NAV_MENU_ID, NAV_TOGGLE_ID)
    }

    /// Submit the client contact form.
    pub fn submit_client_form(&mut self, doc: &mut Document) -> bool {
        self.client_form.submit(doc)
    }

    /// Submit the career application form.
    pub fn submit_career_form(&mut self, doc: &mut Document) -> bool {
        self.career_form.submit(doc)
    }

    /// Route a field edit to whichever form owns the field.
    pub fn field_input(&mut self, doc: &mut Document, field_id: &str) {
        self.client_form.handle_input(doc, field_id);
        self.career_form.handle_input(doc, field_id);
    }

    /// Toggle a skill tag and re-mirror the selection into the form.
    pub fn toggle_skill(&mut self, doc: &mut Document, tag_id: &str) -> bool {
        let selected = self.skills.toggle(doc, tag_id);
        // A selection with content clears a pending skills error.
        self.career_form.handle_input(doc, SKILLS_INPUT_ID);
        selected
    }

    /// Handle pointer movement; may spawn a trail dot.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.trail.pointer_moved(x, y)
    }

    /// Reveal lifecycle events recorded since the last drain.
    pub fn drain_reveal_events(&mut self) -> Vec<RevealEvent> {
        self.animator.drain_events()
    }

    /// Reveal state of an element, if registered.
    pub fn reveal_state(&self, id: &str) -> Option<VisibilityState> {
        self.animator.state_of(id)
    }

    pub fn scroll_y(&self) -> f64 {
        self.observer.as_ref().map_or(0.0, ViewportObserver::scroll_y)
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn counters(&self) -> Option<&CounterGroup> {
        self.counters.as_ref()
    }

    fn route_entries(&mut self, doc: &mut Document, entries: &[crate::observer::IntersectionEntry]) {
        self.animator.handle_intersections(doc, entries);
        if let Some(counters) = self.counters.as_mut() {
            for entry in entries.iter().filter(|e| e.target == STATS_SECTION_ID) {
                counters.handle_intersection(entry);
            }
        }
    }

    fn sync_nav(&mut self, doc: &mut Document, scroll_y: f64) {
        if self.nav_links.is_empty() {
            return;
        }
        let links: Vec<(&str, &str)> = self
            .nav_links
            .iter()
            .map(|(link, section)| (link.as_str(), section.as_str()))
            .collect();
        self.nav.sync_active_links(doc, &links, scroll_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_dom::Element;

    fn controller_with_viewport() -> PageController {
        PageController::new(
            MarqueeConfig::default(),
            Some(Rect::new(0.0, 0.0, 1200.0, 800.0)),
        )
    }

    fn sample_page() -> Document {
        let mut doc = Document::new();
        doc.insert(Element::new("navbar").with_tag("nav"));
        doc.insert(Element::new("navLinks"));
        doc.insert(Element::new("hamburger"));
        doc.insert(
            Element::new("link-services")
                .with_tag("a")
                .with_data("section", "services"),
        );
        doc.insert(
            Element::new("hero-heading")
                .with_class("hero-heading")
                .with_rect(Rect::new(0.0, 100.0, 1200.0, 80.0)),
        );
        doc.insert(
            Element::new("services")
                .with_tag("section")
                .with_rect(Rect::new(0.0, 1600.0, 1200.0, 900.0)),
        );
        doc.insert(
            Element::new("services-card")
                .with_data("animate", "fade-up")
                .with_rect(Rect::new(100.0, 1700.0, 400.0, 300.0)),
        );
        doc.insert(
            Element::new("legacy-quote")
                .with_class("reveal-left")
                .with_rect(Rect::new(100.0, 2600.0, 400.0, 200.0)),
        );
        doc
    }

    #[test]
    fn fresh_controller_starts_with_nothing_wired() {
        let mut doc = sample_page();
        let mut page = controller_with_viewport();

        assert_eq!(page.reveal_state("services-card"), None);
        assert!(page.counters().is_none());
        assert_eq!(page.scroll_y(), 0.0);

        // Usable before initialize: scrolling just moves the viewport and
        // updates the bar, with no links or reveals wired yet.
        page.handle_scroll(&mut doc, 500.0);
        assert_eq!(page.scroll_y(), 500.0);
        assert!(doc.get("navbar").unwrap().has_class("scrolled"));
        assert!(!doc.get("link-services").unwrap().has_class("active"));
    }

    #[test]
    fn initialize_registers_and_hides_animated_elements() {
        let mut doc = sample_page();
        let mut page = controller_with_viewport();
        page.initialize(&mut doc);

        assert_eq!(page.reveal_state("services-card"), Some(VisibilityState::Hidden));
        assert_eq!(doc.get("services-card").unwrap().style.opacity, Some(0.0));
        // Legacy class got the attribute and was registered too
        assert_eq!(doc.get("legacy-quote").unwrap().data("animate"), Some("fade-left"));
        assert_eq!(page.reveal_state("legacy-quote"), Some(VisibilityState::Hidden));
    }

    #[test]
    fn hero_elements_are_forced_visible() {
        let mut doc = sample_page();
        let mut page = controller_with_viewport();
        page.initialize(&mut doc);
        assert_eq!(
            doc.get("hero-heading").unwrap().style.visibility,
            Some(Visibility::Visible)
        );
    }

    #[test]
    fn scrolling_reveals_after_the_frame_deferral() {
        let mut doc = sample_page();
        let mut page = controller_with_viewport();
        page.initialize(&mut doc);

        page.handle_scroll(&mut doc, 1500.0);
        assert_eq!(page.reveal_state("services-card"), Some(VisibilityState::Visible));
        page.frame(&mut doc, 16);
        page.frame(&mut doc, 16);
        assert_eq!(doc.get("services-card").unwrap().style.opacity, Some(1.0));

        let targets: Vec<String> = page
            .drain_reveal_events()
            .iter()
            .map(|e| e.target().to_string())
            .collect();
        assert!(targets.contains(&"services-card".to_string()));
    }

    #[test]
    fn scroll_updates_nav_state() {
        let mut doc = sample_page();
        let mut page = controller_with_viewport();
        page.initialize(&mut doc);

        page.handle_scroll(&mut doc, 1600.0);
        assert!(doc.get("navbar").unwrap().has_class("scrolled"));
        assert!(doc.get("link-services").unwrap().has_class("active"));

        page.handle_scroll(&mut doc, 0.0);
        assert!(!doc.get("navbar").unwrap().has_class("scrolled"));
        assert!(!doc.get("link-services").unwrap().has_class("active"));
    }

    #[test]
    fn follow_anchor_scrolls_past_the_fixed_bar() {
        let mut doc = sample_page();
        let mut page = controller_with_viewport();
        page.initialize(&mut doc);
        page.toggle_menu(&mut doc);

        let y = page.follow_anchor(&mut doc, "services");
        assert_eq!(y, Some(1520.0));
        assert_eq!(page.scroll_y(), 1520.0);
        assert!(!doc.get("navLinks").unwrap().has_class("open"));
    }

    #[test]
    fn no_viewport_degrades_to_hidden_elements() {
        let mut doc = sample_page();
        let mut page = PageController::new(MarqueeConfig::default(), None);
        page.initialize(&mut doc);

        assert_eq!(page.reveal_state("services-card"), Some(VisibilityState::Hidden));
        page.handle_scroll(&mut doc, 2000.0);
        page.frame(&mut doc, 16);
        page.frame(&mut doc, 16);
        // Never revealed, never errored
        assert_eq!(page.reveal_state("services-card"), Some(VisibilityState::Hidden));
        assert_eq!(doc.get("services-card").unwrap().style.opacity, Some(0.0));
        // Other subsystems still run
        assert!(page.toggle_menu(&mut doc));
    }

    #[test]
    fn counters_arm_from_their_section() {
        let mut doc = sample_page();
        doc.insert(Element::new("hero-stats").with_rect(Rect::new(0.0, 3200.0, 1200.0, 200.0)));
        let mut stat = Element::new("stat-projects").with_data("target", "50");
        stat.set_data("suffix", "+");
        doc.append_child("hero-stats", stat);

        let mut page = controller_with_viewport();
        page.initialize(&mut doc);
        assert!(!page.counters().unwrap().triggered());

        // Section fully inside the viewport: ratio 1.0 ≥ 0.5
        page.handle_scroll(&mut doc, 3000.0);
        assert!(page.counters().unwrap().triggered());

        page.frame(&mut doc, 5000);
        assert_eq!(doc.get("stat-projects").unwrap().text, "50+");
    }
}
