use careathome_core::content::{BOOKING_TARGET, BRAND_PREFIX, BRAND_SUFFIX, MENU_ICON_PATH, NAV_LINKS};
use careathome_core::{NavbarStyle, ScrollTracker};
use leptos::prelude::*;

fn bar_class(style: NavbarStyle) -> &'static str {
    match style {
        NavbarStyle::Solid => "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white shadow-md",
        NavbarStyle::Transparent => "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent",
    }
}

fn brand_class(style: NavbarStyle) -> &'static str {
    match style {
        NavbarStyle::Solid => "text-xl lg:text-2xl font-bold transition-colors text-teal-600",
        NavbarStyle::Transparent => "text-xl lg:text-2xl font-bold transition-colors text-white",
    }
}

fn link_class(style: NavbarStyle) -> &'static str {
    match style {
        NavbarStyle::Solid => "transition-colors font-medium text-gray-700 hover:text-teal-600",
        NavbarStyle::Transparent => "transition-colors font-medium text-white hover:text-teal-200",
    }
}

fn cta_class(style: NavbarStyle) -> &'static str {
    match style {
        NavbarStyle::Solid => {
            "px-5 py-2 rounded-full font-semibold transition-all bg-teal-600 text-white hover:bg-teal-700"
        }
        NavbarStyle::Transparent => {
            "px-5 py-2 rounded-full font-semibold transition-all bg-white text-teal-600 hover:bg-teal-50"
        }
    }
}

fn menu_button_class(style: NavbarStyle) -> &'static str {
    match style {
        NavbarStyle::Solid => "md:hidden text-gray-700",
        NavbarStyle::Transparent => "md:hidden text-white",
    }
}

#[component]
pub fn Nav(scroll: ReadSignal<ScrollTracker>) -> impl IntoView {
    let style = Memo::new(move |_| scroll.with(|t| t.style()));
    let (menu_open, set_menu_open) = signal(false);
    let book_href = BOOKING_TARGET.anchor();

    view! {
        <nav class=move || bar_class(style.get())>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16 lg:h-18">
                    <a href="#" class="flex items-center">
                        <h1 class=move || brand_class(style.get())>
                            {BRAND_PREFIX}
                            <span class="text-teal-700">{BRAND_SUFFIX}</span>
                        </h1>
                    </a>
                    <div class="hidden md:flex items-center space-x-6 text-sm">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <a href=link.target.anchor() class=move || link_class(style.get())>
                                    {link.label}
                                </a>
                            })
                            .collect_view()}
                        <a href=book_href class=move || cta_class(style.get())>
                            "Book Now"
                        </a>
                    </div>
                    <button
                        class=move || menu_button_class(style.get())
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=MENU_ICON_PATH
                            />
                        </svg>
                    </button>
                </div>
            </div>

            // Mobile drawer
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white shadow-md">
                    <div class="px-4 py-3 space-y-2 text-sm">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <a
                                    href=link.target.anchor()
                                    class="block py-2 font-medium text-gray-700 hover:text-teal-600"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            })
                            .collect_view()}
                        <a
                            href=BOOKING_TARGET.anchor()
                            class="block text-center py-2 rounded-full font-semibold bg-teal-600 text-white"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Book Now"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_over_hero() {
        assert!(bar_class(NavbarStyle::Transparent).contains("bg-transparent"));
        assert!(brand_class(NavbarStyle::Transparent).contains("text-white"));
        assert!(link_class(NavbarStyle::Transparent).contains("text-white"));
    }

    #[test]
    fn solid_after_scroll() {
        let bar = bar_class(NavbarStyle::Solid);
        assert!(bar.contains("bg-white"));
        assert!(bar.contains("shadow-md"));
        assert!(brand_class(NavbarStyle::Solid).contains("text-teal-600"));
        assert!(cta_class(NavbarStyle::Solid).contains("bg-teal-600"));
    }

    #[test]
    fn style_follows_tracker() {
        let mut tracker = ScrollTracker::new(50.0);
        tracker.on_scroll(51.0);
        assert_eq!(bar_class(tracker.style()), bar_class(NavbarStyle::Solid));
    }
}
