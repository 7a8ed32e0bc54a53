//! Demo driver: builds a small marketing page, scrolls through it, and
//! logs the reveal lifecycle along the way.
//!
//! Run with `RUST_LOG=debug` to watch individual intersection and reveal
//! decisions.

use anyhow::Result;
use marquee_config::MarqueeConfig;
use marquee_dom::{Document, Element, Rect};
use marquee_scene::PageController;

fn build_page(doc: &mut Document) {
    doc.insert(Element::new("navbar").with_tag("nav"));
    doc.insert(Element::new("navLinks"));
    doc.insert(Element::new("hamburger"));

    doc.insert(
        Element::new("hero")
            .with_tag("section")
            .with_rect(Rect::new(0.0, 0.0, 1280.0, 900.0)),
    );
    doc.insert(
        Element::new("hero-heading")
            .with_class("hero-heading")
            .with_rect(Rect::new(120.0, 200.0, 1040.0, 120.0)),
    );

    doc.insert(
        Element::new("hero-stats")
            .with_class("hero-stats")
            .with_rect(Rect::new(120.0, 650.0, 1040.0, 160.0)),
    );
    for (id, target, suffix) in [
        ("stat-projects", "50", "+"),
        ("stat-satisfaction", "100", "%"),
        ("stat-years", "6", ""),
    ] {
        let mut stat = Element::new(id).with_data("target", target);
        if !suffix.is_empty() {
            stat.set_data("suffix", suffix);
        }
        doc.append_child("hero-stats", stat);
    }

    doc.insert(
        Element::new("services")
            .with_tag("section")
            .with_rect(Rect::new(0.0, 900.0, 1280.0, 900.0)),
    );
    doc.insert(
        Element::new("link-services")
            .with_tag("a")
            .with_data("section", "services"),
    );
    let mut grid = Element::new("services-grid").with_data("animate-children", "fade-up");
    grid.rect = Rect::new(120.0, 1100.0, 1040.0, 500.0);
    doc.insert(grid);
    for i in 0..3 {
        let card = Element::new(format!("service-card-{i}")).with_rect(Rect::new(
            120.0 + 360.0 * i as f64,
            1150.0,
            320.0,
            400.0,
        ));
        doc.append_child("services-grid", card);
    }

    doc.insert(
        Element::new("about-quote")
            .with_class("reveal-left")
            .with_rect(Rect::new(120.0, 2000.0, 800.0, 240.0)),
    );
    doc.insert(
        Element::new("portfolio-shot")
            .with_data("animate", "zoom-in")
            .with_data("duration", "900")
            .with_rect(Rect::new(120.0, 2500.0, 1040.0, 560.0)),
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let config = MarqueeConfig::load();
    let mut doc = Document::new();
    build_page(&mut doc);

    let viewport = Rect::new(0.0, 0.0, 1280.0, 960.0);
    let mut page = PageController::new(config, Some(viewport));
    page.initialize(&mut doc);

    // Scroll through the page in steps, ticking two frames per stop so
    // deferred reveal writes land, then drain what happened.
    for y in (0..=2600).step_by(200) {
        page.handle_scroll(&mut doc, y as f64);
        page.frame(&mut doc, 16);
        page.frame(&mut doc, 16);
        for event in page.drain_reveal_events() {
            log::info!("scroll {y}: {event:?}");
        }
    }

    // Let the counters run out.
    page.frame(&mut doc, 3000);
    for id in ["stat-projects", "stat-satisfaction", "stat-years"] {
        if let Some(stat) = doc.get(id) {
            log::info!("{id} settled at {:?}", stat.text);
        }
    }

    // Scroll back up: reveals reset and replay.
    page.handle_scroll(&mut doc, 0.0);
    for event in page.drain_reveal_events() {
        log::info!("back at top: {event:?}");
    }

    Ok(())
}
