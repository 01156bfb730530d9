//! "Care in Action" carousel.
//!
//! The slide index lives in a [`Carousel`]; the timer, the arrows and the
//! dots all go through it, so the index can never leave `0..SLIDES.len()`.

use careathome_core::content::{GALLERY_HEADING, SLIDES};
use careathome_core::{Carousel, SectionId, SiteConfig};
use leptos::either::Either;
use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};
use crate::browser;

fn track_style(offset_percent: f64) -> String {
    format!("transform: translateX({offset_percent}%);")
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "w-3 h-3 rounded-full transition-all bg-white"
    } else {
        "w-3 h-3 rounded-full transition-all bg-white/50"
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let body = match Carousel::new(SLIDES.len()) {
        Ok(carousel) => Either::Left(view! { <Slides carousel=carousel /> }),
        Err(e) => {
            log::warn!("[careathome][gallery] {e}");
            Either::Right(())
        }
    };

    view! {
        <RevealSection id=SectionId::Gallery class="py-16 lg:py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader heading=GALLERY_HEADING />
                {body}
            </div>
        </RevealSection>
    }
}

#[component]
fn Slides(carousel: Carousel) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let carousel = RwSignal::new(carousel);

    if let Err(e) = browser::every(config.carousel.interval(), move || {
        carousel.update(Carousel::tick)
    }) {
        log::error!("[careathome][gallery] autoplay disabled: {e:#}");
    }

    let go_prev = move |_| {
        carousel.update(Carousel::prev);
        log::debug!("[careathome][gallery] prev -> {}", carousel.with_untracked(Carousel::index));
    };
    let go_next = move |_| {
        carousel.update(Carousel::next);
        log::debug!("[careathome][gallery] next -> {}", carousel.with_untracked(Carousel::index));
    };

    view! {
        <div class="relative max-w-4xl mx-auto">
            <div class="overflow-hidden rounded-2xl shadow-2xl">
                <div
                    class="flex transition-transform duration-500 ease-in-out"
                    style=move || track_style(carousel.with(Carousel::offset_percent))
                >
                    {SLIDES
                        .iter()
                        .map(|slide| view! {
                            <div class="min-w-full relative">
                                <img
                                    src=slide.image
                                    alt=slide.alt
                                    class="w-full h-64 sm:h-80 lg:h-96 object-cover"
                                    loading="lazy"
                                />
                                <div class="absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/70 to-transparent p-6">
                                    <p class="text-white text-lg font-semibold">{slide.caption}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                class="absolute left-4 top-1/2 -translate-y-1/2 bg-white/80 hover:bg-white text-gray-800 w-10 h-10 rounded-full shadow-lg flex items-center justify-center"
                aria-label="Previous slide"
                on:click=go_prev
            >
                "‹"
            </button>
            <button
                class="absolute right-4 top-1/2 -translate-y-1/2 bg-white/80 hover:bg-white text-gray-800 w-10 h-10 rounded-full shadow-lg flex items-center justify-center"
                aria-label="Next slide"
                on:click=go_next
            >
                "›"
            </button>

            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">
                {(0..SLIDES.len())
                    .map(|i| view! {
                        <button
                            class=move || dot_class(carousel.with(|c| c.is_current(i)))
                            aria-label=format!("Go to slide {}", i + 1)
                            on:click=move |_| {
                                let mut outcome = Ok(());
                                carousel.update(|c| outcome = c.select(i));
                                match outcome {
                                    Ok(()) => log::debug!("[careathome][gallery] dot -> {i}"),
                                    Err(e) => log::warn!("[careathome][gallery] {e}"),
                                }
                            }
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
