use careathome_core::SectionId;
use careathome_core::content::{HOW_IT_WORKS_HEADING, STEPS};
use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::HowItWorks class="py-16 lg:py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader heading=HOW_IT_WORKS_HEADING />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| view! {
                            <div class="text-center">
                                <div class="w-14 h-14 bg-teal-600 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                                    {i + 1}
                                </div>
                                <h3 class="text-base font-bold text-gray-900 mb-2">{step.title}</h3>
                                <p class="text-xs text-gray-600">{step.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
