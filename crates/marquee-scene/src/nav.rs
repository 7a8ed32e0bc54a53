//! Navigation bar behavior: the scrolled state, active-link highlighting,
//! anchor scroll targets, and the mobile menu toggle.
//!
//! All of it is class and geometry bookkeeping driven by the scroll
//! position, so the controller is plain functions over the document plus a
//! small config.

use marquee_config::NavConfig;
use marquee_dom::{Document, Transform2D};
use serde::{Deserialize, Serialize};

/// Class applied to the bar once the page has scrolled past the top band.
const SCROLLED_CLASS: &str = "scrolled";
/// Class marking the link whose section is currently in view.
const ACTIVE_CLASS: &str = "active";
/// Class on the mobile menu (and its toggle) while the menu is open.
const OPEN_CLASS: &str = "open";

/// Inline pose for one hamburger bar. While the menu is open the three
/// bars fold into a cross: the outer bars rotate toward each other and
/// the middle one fades out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanPose {
    pub transform: Transform2D,
    pub opacity: f32,
}

impl SpanPose {
    /// Poses for the three bars, top to bottom, in the open state.
    pub fn crossed() -> [Self; 3] {
        let top = Transform2D {
            translate_x: 5.0,
            translate_y: 5.0,
            ..Transform2D::rotate(45.0)
        };
        let bottom = Transform2D {
            translate_x: 5.0,
            translate_y: -5.0,
            ..Transform2D::rotate(-45.0)
        };
        [
            Self {
                transform: top,
                opacity: 1.0,
            },
            Self {
                transform: Transform2D::identity(),
                opacity: 0.0,
            },
            Self {
                transform: bottom,
                opacity: 1.0,
            },
        ]
    }
}

/// Drives navigation chrome from the scroll position.
#[derive(Debug)]
pub struct NavController {
    config: NavConfig,
}

impl NavController {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }

    /// Toggle the bar's scrolled styling. Returns whether the bar is in
    /// the scrolled state after the update.
    pub fn update_scrolled(&self, doc: &mut Document, bar_id: &str, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.config.scrolled_after_px;
        if let Some(bar) = doc.get_mut(bar_id) {
            if scrolled {
                bar.add_class(SCROLLED_CLASS);
            } else {
                bar.remove_class(SCROLLED_CLASS);
            }
        }
        scrolled
    }

    /// The section the viewport is currently "in": the last section whose
    /// top, minus the activation offset, is at or above the scroll
    /// position. Returns `None` above the first section.
    pub fn active_section(
        &self,
        doc: &Document,
        section_ids: &[&str],
        scroll_y: f64,
    ) -> Option<String> {
        let mut active = None;
        for id in section_ids {
            let Some(section) = doc.get(id) else { continue };
            if scroll_y >= section.rect.y - self.config.active_link_offset_px {
                active = Some((*id).to_string());
            }
        }
        active
    }

    /// Move the `active` class to the link pointing at the current
    /// section. `links` pairs each link element with the section it
    /// targets.
    pub fn sync_active_links(
        &self,
        doc: &mut Document,
        links: &[(&str, &str)],
        scroll_y: f64,
    ) {
        let sections: Vec<&str> = links.iter().map(|(_, section)| *section).collect();
        let active = self.active_section(doc, &sections, scroll_y);
        for (link_id, section_id) in links {
            let is_active = active.as_deref() == Some(*section_id);
            if let Some(link) = doc.get_mut(link_id) {
                if is_active {
                    link.add_class(ACTIVE_CLASS);
                } else {
                    link.remove_class(ACTIVE_CLASS);
                }
            }
        }
    }

    /// Scroll destination for an in-page anchor: the target's top minus
    /// the fixed-bar offset, clamped to the top of the page.
    pub fn anchor_target_y(&self, doc: &Document, section_id: &str) -> Option<f64> {
        let section = doc.get(section_id)?;
        Some((section.rect.y - self.config.anchor_offset_px).max(0.0))
    }

    /// Toggle the mobile menu open or closed. The menu and its toggle
    /// button flip the `open` class together so the button can render its
    /// crossed state. Returns whether the menu is open after.
    pub fn toggle_menu(&self, doc: &mut Document, menu_id: &str, toggle_id: &str) -> bool {
        let open = match doc.get_mut(menu_id) {
            Some(menu) => menu.toggle_class(OPEN_CLASS),
            None => return false,
        };
        if let Some(toggle) = doc.get_mut(toggle_id) {
            if open {
                toggle.add_class(OPEN_CLASS);
            } else {
                toggle.remove_class(OPEN_CLASS);
            }
        }
        self.pose_toggle_spans(doc, toggle_id, open);
        open
    }

    /// Close the mobile menu (used when a nav link is followed).
    pub fn close_menu(&self, doc: &mut Document, menu_id: &str, toggle_id: &str) {
        for id in [menu_id, toggle_id] {
            if let Some(el) = doc.get_mut(id) {
                el.remove_class(OPEN_CLASS);
            }
        }
        self.pose_toggle_spans(doc, toggle_id, false);
    }

    /// Pose the toggle button's three bars: crossed while open, inline
    /// styles cleared while closed.
    fn pose_toggle_spans(&self, doc: &mut Document, toggle_id: &str, open: bool) {
        let spans = doc.children_of(toggle_id);
        let poses = SpanPose::crossed();
        for (i, span_id) in spans.iter().take(poses.len()).enumerate() {
            if let Some(span) = doc.get_mut(span_id) {
                if open {
                    span.style.transform = Some(poses[i].transform);
                    span.style.opacity = Some(poses[i].opacity);
                } else {
                    span.style.transform = None;
                    span.style.opacity = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_dom::{Element, Rect};

    fn page() -> Document {
        let mut doc = Document::new();
        doc.insert(Element::new("navbar").with_tag("nav"));
        doc.insert(Element::new("menu"));
        doc.insert(Element::new("hamburger"));
        for i in 0..3 {
            doc.append_child("hamburger", Element::new(format!("bar-{i}")).with_tag("span"));
        }
        for (id, y) in [("home", 0.0), ("about", 900.0), ("contact", 1800.0)] {
            doc.insert(Element::new(id).with_rect(Rect::new(0.0, y, 1000.0, 900.0)));
            doc.insert(Element::new(format!("link-{id}")));
        }
        doc
    }

    fn controller() -> NavController {
        NavController::new(NavConfig::default())
    }

    #[test]
    fn scrolled_class_tracks_the_top_band() {
        let mut doc = page();
        let nav = controller();

        assert!(!nav.update_scrolled(&mut doc, "navbar", 0.0));
        assert!(!doc.get("navbar").unwrap().has_class("scrolled"));

        assert!(nav.update_scrolled(&mut doc, "navbar", 61.0));
        assert!(doc.get("navbar").unwrap().has_class("scrolled"));

        // Exactly at the boundary is still "not scrolled"
        assert!(!nav.update_scrolled(&mut doc, "navbar", 60.0));
        assert!(!doc.get("navbar").unwrap().has_class("scrolled"));
    }

    #[test]
    fn active_section_is_the_last_one_entered() {
        let doc = page();
        let nav = controller();
        let sections = ["home", "about", "contact"];

        assert_eq!(nav.active_section(&doc, &sections, 0.0).as_deref(), Some("home"));
        // about starts at 900; activation offset 120 pulls it to 780
        assert_eq!(nav.active_section(&doc, &sections, 779.0).as_deref(), Some("home"));
        assert_eq!(nav.active_section(&doc, &sections, 780.0).as_deref(), Some("about"));
        assert_eq!(nav.active_section(&doc, &sections, 5000.0).as_deref(), Some("contact"));
    }

    #[test]
    fn active_class_moves_with_scroll() {
        let mut doc = page();
        let nav = controller();
        let links = [
            ("link-home", "home"),
            ("link-about", "about"),
            ("link-contact", "contact"),
        ];

        nav.sync_active_links(&mut doc, &links, 0.0);
        assert!(doc.get("link-home").unwrap().has_class("active"));
        assert!(!doc.get("link-about").unwrap().has_class("active"));

        nav.sync_active_links(&mut doc, &links, 1000.0);
        assert!(!doc.get("link-home").unwrap().has_class("active"));
        assert!(doc.get("link-about").unwrap().has_class("active"));
    }

    #[test]
    fn anchor_target_accounts_for_the_fixed_bar() {
        let doc = page();
        let nav = controller();
        assert_eq!(nav.anchor_target_y(&doc, "about"), Some(820.0));
        // Clamped at the top of the page
        assert_eq!(nav.anchor_target_y(&doc, "home"), Some(0.0));
        assert_eq!(nav.anchor_target_y(&doc, "nowhere"), None);
    }

    #[test]
    fn menu_toggle_flips_both_elements() {
        let mut doc = page();
        let nav = controller();

        assert!(nav.toggle_menu(&mut doc, "menu", "hamburger"));
        assert!(doc.get("menu").unwrap().has_class("open"));
        assert!(doc.get("hamburger").unwrap().has_class("open"));

        assert!(!nav.toggle_menu(&mut doc, "menu", "hamburger"));
        assert!(!doc.get("menu").unwrap().has_class("open"));
        assert!(!doc.get("hamburger").unwrap().has_class("open"));
    }

    #[test]
    fn open_menu_crosses_the_toggle_bars() {
        let mut doc = page();
        let nav = controller();
        nav.toggle_menu(&mut doc, "menu", "hamburger");

        let top = doc.get("bar-0").unwrap();
        assert_eq!(top.style.transform.unwrap().rotate_deg, 45.0);
        assert_eq!(top.style.transform.unwrap().translate_x, 5.0);
        assert_eq!(doc.get("bar-1").unwrap().style.opacity, Some(0.0));
        assert_eq!(doc.get("bar-2").unwrap().style.transform.unwrap().rotate_deg, -45.0);

        // Closing clears the inline styles entirely
        nav.toggle_menu(&mut doc, "menu", "hamburger");
        for id in ["bar-0", "bar-1", "bar-2"] {
            let bar = doc.get(id).unwrap();
            assert!(bar.style.transform.is_none(), "{id}");
            assert!(bar.style.opacity.is_none(), "{id}");
        }
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut doc = page();
        let nav = controller();
        nav.toggle_menu(&mut doc, "menu", "hamburger");
        nav.close_menu(&mut doc, "menu", "hamburger");
        nav.close_menu(&mut doc, "menu", "hamburger");
        assert!(!doc.get("menu").unwrap().has_class("open"));
    }
}
