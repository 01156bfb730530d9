use careathome_core::SectionId;
use careathome_core::content::{FEATURED, FEATURED_HEADING};
use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

#[component]
pub fn Featured() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::Featured class="py-16 lg:py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader heading=FEATURED_HEADING />
                <div class="grid md:grid-cols-3 gap-6">
                    {FEATURED
                        .iter()
                        .map(|featured| view! {
                            <div class="bg-white rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-all">
                                <img
                                    src=featured.image
                                    alt=featured.card.title
                                    class="w-full h-48 object-cover"
                                    loading="lazy"
                                />
                                <div class="p-6">
                                    <div class="text-3xl mb-3">{featured.card.icon}</div>
                                    <h3 class="text-lg font-bold text-gray-900 mb-2">
                                        {featured.card.title}
                                    </h3>
                                    <p class="text-sm text-gray-600">{featured.card.description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
