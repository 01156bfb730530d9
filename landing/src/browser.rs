//! Browser subscriptions behind the page's interactive state.
//!
//! Each subscription is acquired while the page mounts and released through
//! `on_cleanup`, so nothing keeps pointing at a torn-down view.

use anyhow::{Context, Result, anyhow};
use careathome_core::reveal::observe_pending;
use careathome_core::{
    IntersectionEvent, RevealConfig, ScrollTracker, SectionId, ViewportObserver, VisibleSections,
};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn js_err(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{context}: {err:?}")
}

/// Feed every window scroll event into the navbar tracker.
///
/// The tracker only notifies when the flag actually flips.
pub fn track_scroll(tracker: RwSignal<ScrollTracker>) {
    let sample = move || {
        if let Some(window) = web_sys::window() {
            if let Ok(offset) = window.scroll_y() {
                tracker.maybe_update(|t| t.on_scroll(offset));
            }
        }
    };

    // Reloads can land mid-page.
    sample();

    let handle = window_event_listener(ev::scroll, move |_| sample());
    on_cleanup(move || handle.remove());
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// `IntersectionObserver` reporting entries as [`IntersectionEvent`]s.
///
/// The section of an entry is read back from its `data-section` attribute.
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealObserver {
    pub fn new(
        config: &RevealConfig,
        mut handler: impl FnMut(IntersectionEvent) + 'static,
    ) -> Result<Self> {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(key) = entry.target().get_attribute("data-section") else {
                        continue;
                    };
                    match key.parse::<SectionId>() {
                        Ok(section) => handler(IntersectionEvent {
                            section,
                            ratio: entry.intersection_ratio(),
                            is_intersecting: entry.is_intersecting(),
                        }),
                        Err(e) => log::warn!("[careathome][reveal] {e}"),
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| js_err("IntersectionObserver unavailable", e))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl ViewportObserver for RevealObserver {
    type Target = web_sys::Element;
    type Error = anyhow::Error;

    fn observe(&mut self, section: SectionId, target: &web_sys::Element) -> Result<()> {
        target
            .set_attribute("data-section", section.key())
            .map_err(|e| js_err("tagging section element", e))?;
        self.observer.observe(target);
        Ok(())
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Elements carrying a known `data-section` key, in document order.
fn section_elements() -> Result<Vec<(SectionId, web_sys::Element)>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document to observe")?;
    let nodes = document
        .query_selector_all("[data-section]")
        .map_err(|e| js_err("querying sections", e))?;

    let mut found = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Some(key) = element.get_attribute("data-section") else {
            continue;
        };
        if let Ok(section) = key.parse::<SectionId>() {
            found.push((section, element));
        }
    }
    Ok(found)
}

/// Watch every section that still has its fade-in pending.
///
/// Must run after the sections are in the DOM (from an effect). The
/// observer is disconnected when the owning scope is cleaned up.
pub fn observe_sections(config: &RevealConfig, visible: RwSignal<VisibleSections>) -> Result<()> {
    let mut observer = RevealObserver::new(config, move |event| {
        visible.maybe_update(|v| {
            let first = v.record(&event);
            if first {
                log::debug!("[careathome][reveal] {} in view", event.section);
            }
            first
        });
    })?;

    let targets = section_elements()?;
    let registered = visible.with_untracked(|v| {
        observe_pending(&mut observer, v, targets.iter().map(|(id, el)| (*id, el)))
    })?;
    log::debug!("[careathome][reveal] observing {registered} sections");

    let observer = StoredValue::new_local(observer);
    on_cleanup(move || {
        observer.update_value(|o| o.disconnect());
    });
    Ok(())
}

/// Run `tick` every `period` while the current scope lives.
pub fn every(period: std::time::Duration, tick: impl Fn() + 'static) -> Result<()> {
    let handle = set_interval_with_handle(tick, period)
        .map_err(|e| js_err("registering interval", e))?;
    on_cleanup(move || handle.clear());
    Ok(())
}
