use careathome_core::SectionId;
use careathome_core::content::{STAR_ICON_PATH, TESTIMONIALS, TESTIMONIALS_HEADING, Testimonial};
use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

#[component]
fn Stars(count: usize) -> impl IntoView {
    view! {
        <div class="flex text-yellow-400 mb-3">
            {(0..count)
                .map(|_| view! {
                    <svg class="w-4 h-4" fill="currentColor" viewBox="0 0 20 20">
                        <path d=STAR_ICON_PATH />
                    </svg>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ReviewCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="bg-gray-50 p-6 rounded-xl border border-gray-100">
            <Stars count=testimonial.stars() />
            <p class="text-sm text-gray-700 mb-4 italic">"\""{testimonial.review}"\""</p>
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 bg-teal-600 text-white rounded-full flex items-center justify-center text-sm font-bold">
                    {testimonial.initials()}
                </div>
                <div>
                    <p class="text-sm font-semibold text-gray-900">{testimonial.name}</p>
                    <p class="text-xs text-gray-500">{testimonial.location}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::Testimonials class="py-16 lg:py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader heading=TESTIMONIALS_HEADING />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! { <ReviewCard testimonial=*t /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
