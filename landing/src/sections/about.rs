use careathome_core::SectionId;
use careathome_core::content::{ABOUT, CHECK_ICON_PATH};
use leptos::prelude::*;

use super::reveal::RevealSection;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::About class="py-16 lg:py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-6">
                            {ABOUT.title}
                        </h2>
                        <p class="text-sm text-gray-600 mb-6 leading-relaxed">{ABOUT.blurb}</p>
                        <div class="grid grid-cols-2 gap-6 mb-6">
                            {ABOUT
                                .stats
                                .iter()
                                .map(|stat| view! {
                                    <div class="bg-teal-50 p-4 rounded-xl text-center">
                                        <p class="text-3xl font-bold text-teal-600">{stat.value}</p>
                                        <p class="text-xs text-gray-600">{stat.label}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <ul class="space-y-3">
                            {ABOUT
                                .highlights
                                .iter()
                                .map(|line| view! {
                                    <li class="flex items-center gap-2 text-sm text-gray-700">
                                        <svg class="w-5 h-5 text-teal-600 flex-shrink-0" fill="currentColor" viewBox="0 0 20 20">
                                            <path fill-rule="evenodd" d=CHECK_ICON_PATH clip-rule="evenodd" />
                                        </svg>
                                        {*line}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <img
                        src=ABOUT.image
                        alt=ABOUT.image_alt
                        class="rounded-2xl shadow-xl w-full h-80 lg:h-96 object-cover"
                        loading="lazy"
                    />
                </div>
            </div>
        </RevealSection>
    }
}
