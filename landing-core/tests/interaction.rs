//! Interaction contracts of the landing page, driven through the public API.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use careathome_core::reveal::observe_pending;
use careathome_core::{
    Carousel, IntersectionEvent, ScrollTracker, SectionId, SiteConfig, ViewportObserver,
    VisibleSections, content,
};

// ============================================
// Scroll flag
// ============================================

mod navbar {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn at_or_below_threshold_is_top() {
        let mut tracker = ScrollTracker::new(50.0);
        for offset in [0.0, 1.0, 25.0, 49.99, 50.0] {
            tracker.on_scroll(offset);
            assert!(!tracker.scrolled(), "offset {offset} should not be scrolled");
        }
    }

    #[test]
    fn above_threshold_is_scrolled() {
        let mut tracker = ScrollTracker::new(50.0);
        for offset in [50.01, 51.0, 500.0, 10_000.0] {
            tracker.on_scroll(offset);
            assert!(tracker.scrolled(), "offset {offset} should be scrolled");
        }
    }

    #[test]
    fn threshold_comes_from_config() {
        let config = SiteConfig::from_toml_str("[navbar]\nscroll_threshold = 120.0").unwrap();
        let mut tracker = ScrollTracker::new(config.navbar.scroll_threshold);
        tracker.on_scroll(100.0);
        assert!(!tracker.scrolled());
        tracker.on_scroll(121.0);
        assert!(tracker.scrolled());
    }
}

// ============================================
// Visible-section set
// ============================================

/// Viewport double: remembers what it watches and replays scripted scrolls
/// into the handler, the way a browser observer would.
struct ScriptedViewport {
    watched: BTreeMap<SectionId, String>,
    handler: Box<dyn FnMut(IntersectionEvent)>,
    connected: bool,
}

impl ScriptedViewport {
    fn new(handler: impl FnMut(IntersectionEvent) + 'static) -> Self {
        Self {
            watched: BTreeMap::new(),
            handler: Box::new(handler),
            connected: true,
        }
    }

    fn emit(&mut self, event: IntersectionEvent) {
        if self.connected && self.watched.contains_key(&event.section) {
            (self.handler)(event);
        }
    }
}

impl ViewportObserver for ScriptedViewport {
    type Target = str;
    type Error = String;

    fn observe(&mut self, section: SectionId, target: &str) -> Result<(), String> {
        if target.is_empty() {
            return Err(format!("no element for {section}"));
        }
        self.watched.insert(section, target.to_string());
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.watched.clear();
    }
}

fn wired() -> (ScriptedViewport, Rc<RefCell<VisibleSections>>) {
    let visible = Rc::new(RefCell::new(VisibleSections::new(0.1)));
    let sink = Rc::clone(&visible);
    let viewport = ScriptedViewport::new(move |event| {
        sink.borrow_mut().record(&event);
    });
    (viewport, visible)
}

fn page_targets() -> Vec<(SectionId, &'static str)> {
    SectionId::ALL.into_iter().map(|id| (id, id.key())).collect()
}

mod reveal {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registers_everything_but_hero() {
        let (mut viewport, visible) = wired();
        let targets = page_targets();
        let count = observe_pending(
            &mut viewport,
            &visible.borrow(),
            targets.iter().map(|(id, t)| (*id, *t)),
        )
        .unwrap();

        assert_eq!(count, SectionId::ALL.len() - 1);
        assert!(!viewport.watched.contains_key(&SectionId::Hero));
    }

    #[test]
    fn set_never_shrinks_across_scroll_session() {
        let (mut viewport, visible) = wired();
        let targets = page_targets();
        observe_pending(
            &mut viewport,
            &visible.borrow(),
            targets.iter().map(|(id, t)| (*id, *t)),
        )
        .unwrap();

        // Down the page, back up, and down again.
        let script = [
            IntersectionEvent::entering(SectionId::Services, 0.3),
            IntersectionEvent::entering(SectionId::WhyChooseUs, 0.05),
            IntersectionEvent::entering(SectionId::WhyChooseUs, 0.2),
            IntersectionEvent::leaving(SectionId::Services),
            IntersectionEvent::entering(SectionId::Gallery, 1.0),
            IntersectionEvent::leaving(SectionId::Gallery),
            IntersectionEvent::leaving(SectionId::WhyChooseUs),
            IntersectionEvent::entering(SectionId::Services, 0.8),
            IntersectionEvent::entering(SectionId::Contact, 0.15),
        ];

        let mut previous = 0;
        let mut members: Vec<SectionId> = Vec::new();
        for event in script {
            viewport.emit(event);
            let now = visible.borrow();
            assert!(now.len() >= previous, "set shrank after {event:?}");
            for id in &members {
                assert!(now.contains(*id), "{id} dropped after {event:?}");
            }
            previous = now.len();
            members = now.iter().collect();
        }

        assert_eq!(
            members,
            vec![
                SectionId::Services,
                SectionId::WhyChooseUs,
                SectionId::Gallery,
                SectionId::Contact,
            ]
        );
    }

    #[test]
    fn already_revealed_sections_are_not_observed_again() {
        let (mut viewport, visible) = wired();
        visible.borrow_mut().mark(SectionId::Packages);

        let targets = page_targets();
        let count = observe_pending(
            &mut viewport,
            &visible.borrow(),
            targets.iter().map(|(id, t)| (*id, *t)),
        )
        .unwrap();

        assert_eq!(count, SectionId::ALL.len() - 2);
        assert!(!viewport.watched.contains_key(&SectionId::Packages));
    }

    #[test]
    fn missing_target_is_reported() {
        let (mut viewport, visible) = wired();
        let err = observe_pending(
            &mut viewport,
            &visible.borrow(),
            [(SectionId::Safety, "")],
        )
        .unwrap_err();
        assert_eq!(err, "no element for safety");
    }

    #[test]
    fn disconnected_viewport_stops_reporting() {
        let (mut viewport, visible) = wired();
        let targets = page_targets();
        observe_pending(
            &mut viewport,
            &visible.borrow(),
            targets.iter().map(|(id, t)| (*id, *t)),
        )
        .unwrap();

        viewport.emit(IntersectionEvent::entering(SectionId::About, 0.5));
        viewport.disconnect();
        viewport.emit(IntersectionEvent::entering(SectionId::Safety, 0.5));

        let seen: Vec<_> = visible.borrow().iter().collect();
        assert_eq!(seen, vec![SectionId::About]);
    }

    #[test]
    fn failed_registration_falls_back_to_all_visible() {
        let (mut viewport, visible) = wired();
        let registered = observe_pending(
            &mut viewport,
            &visible.borrow(),
            [(SectionId::Services, "services"), (SectionId::Gallery, "")],
        );
        assert!(registered.is_err());

        assert!(visible.borrow_mut().reveal_all());
        let seen: Vec<_> = visible.borrow().iter().collect();
        let animated: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|id| id.reveals_on_scroll())
            .collect();
        assert_eq!(seen, animated);
    }
}

// ============================================
// Carousel
// ============================================

mod carousel {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gallery() -> Carousel {
        Carousel::new(content::SLIDES.len()).unwrap()
    }

    #[test]
    fn k_ticks_land_on_k_mod_n() {
        for k in 0..40 {
            let mut carousel = gallery();
            for _ in 0..k {
                carousel.tick();
            }
            assert_eq!(carousel.index(), k % 5, "after {k} ticks");
        }
    }

    #[test]
    fn twelve_ticks_is_slide_two() {
        let mut carousel = gallery();
        (0..12).for_each(|_| carousel.tick());
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn next_and_prev_are_inverses() {
        for start in 0..5 {
            let mut carousel = gallery();
            carousel.select(start).unwrap();

            carousel.prev();
            carousel.next();
            assert_eq!(carousel.index(), start);

            carousel.next();
            carousel.prev();
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn dot_selection_is_absolute() {
        for prior in 0..5 {
            for k in 0..5 {
                let mut carousel = gallery();
                carousel.select(prior).unwrap();
                carousel.tick();
                carousel.select(k).unwrap();
                assert_eq!(carousel.index(), k);
            }
        }
    }

    #[test]
    fn mixed_navigation_stays_in_range() {
        let mut carousel = gallery();
        // Deterministic pseudo-random walk over all transitions.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..1_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 4 {
                0 => carousel.tick(),
                1 => carousel.next(),
                2 => carousel.prev(),
                _ => {
                    let _ = carousel.select((seed as usize / 4) % 7);
                }
            }
            assert!(carousel.index() < carousel.len());
        }
    }
}
