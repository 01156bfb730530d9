// CareAtHome landing page, Leptos 0.8 CSR

mod browser;
mod sections;

use careathome_core::{ScrollTracker, SiteConfig, VisibleSections};
use leptos::prelude::*;
use sections::*;

const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    log::info!("[careathome] starting v{}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::load_or_default(SITE_CONFIG);
    provide_context(config.clone());

    let visible = RwSignal::new(VisibleSections::new(config.reveal.threshold));
    provide_context(visible);

    let scroll = RwSignal::new(ScrollTracker::new(config.navbar.scroll_threshold));
    browser::track_scroll(scroll);

    // Sections are in the DOM once effects run.
    let reveal = config.reveal.clone();
    Effect::new(move |_| {
        if let Err(e) = browser::observe_sections(&reveal, visible) {
            log::error!("[careathome][reveal] observer not installed: {e:#}");
            // Without an observer nothing would ever fade in.
            visible.maybe_update(VisibleSections::reveal_all);
        }
    });

    view! {
        <Nav scroll=scroll.read_only() />
        <main>
            <Hero />
            <Services />
            <WhyChooseUs />
            <Featured />
            <Gallery />
            <HowItWorks />
            <Testimonials />
            <Packages />
            <About />
            <Safety />
            <Contact />
        </main>
        <Footer />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shipped_config_spells_out_defaults() {
        let config = SiteConfig::from_toml_str(SITE_CONFIG).expect("site.toml parses");
        assert_eq!(config, SiteConfig::default());
    }
}
