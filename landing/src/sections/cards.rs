//! Icon-and-text card grids: services, reasons to choose us, safety.

use careathome_core::SectionId;
use careathome_core::content::{
    Card, SAFETY, SAFETY_HEADING, SERVICES, SERVICES_HEADING, SectionHeading, WHY_CHOOSE_US,
    WHY_CHOOSE_US_HEADING,
};
use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CardLook {
    /// Large emoji on a tinted card.
    Plain,
    /// Emoji inside a teal badge.
    Badged,
    /// Centered, on a white card.
    Centered,
}

impl CardLook {
    fn grid_class(self) -> &'static str {
        match self {
            CardLook::Plain | CardLook::Centered => "grid sm:grid-cols-2 lg:grid-cols-4 gap-6",
            CardLook::Badged => "grid sm:grid-cols-2 lg:grid-cols-3 gap-6",
        }
    }
}

#[component]
fn CardView(card: Card, look: CardLook) -> impl IntoView {
    match look {
        CardLook::Plain => view! {
            <div class="bg-gray-50 p-6 rounded-xl hover:shadow-lg transition-all border border-gray-100">
                <div class="text-4xl mb-4">{card.icon}</div>
                <h3 class="text-base font-bold text-gray-900 mb-2">{card.title}</h3>
                <p class="text-xs text-gray-600 leading-relaxed">{card.description}</p>
            </div>
        }
        .into_any(),
        CardLook::Badged => view! {
            <div class="bg-white p-6 rounded-xl border border-gray-200">
                <div class="w-10 h-10 bg-teal-100 text-teal-600 rounded-lg flex items-center justify-center text-xl font-bold mb-4">
                    {card.icon}
                </div>
                <h3 class="text-base font-bold text-gray-900 mb-2">{card.title}</h3>
                <p class="text-xs text-gray-600 leading-relaxed">{card.description}</p>
            </div>
        }
        .into_any(),
        CardLook::Centered => view! {
            <div class="bg-white p-6 rounded-xl text-center border border-gray-200">
                <div class="text-3xl mb-3">{card.icon}</div>
                <h3 class="text-base font-bold text-gray-900 mb-2">{card.title}</h3>
                <p class="text-xs text-gray-600">{card.description}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn CardSection(
    id: SectionId,
    heading: SectionHeading,
    cards: &'static [Card],
    look: CardLook,
    background: &'static str,
) -> impl IntoView {
    view! {
        <RevealSection id=id class=format!("py-16 lg:py-20 {background}")>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader heading=heading />
                <div class=look.grid_class()>
                    {cards
                        .iter()
                        .map(|card| view! { <CardView card=*card look=look /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <CardSection
            id=SectionId::Services
            heading=SERVICES_HEADING
            cards=SERVICES
            look=CardLook::Plain
            background="bg-white"
        />
    }
}

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <CardSection
            id=SectionId::WhyChooseUs
            heading=WHY_CHOOSE_US_HEADING
            cards=WHY_CHOOSE_US
            look=CardLook::Badged
            background="bg-gray-50"
        />
    }
}

#[component]
pub fn Safety() -> impl IntoView {
    view! {
        <CardSection
            id=SectionId::Safety
            heading=SAFETY_HEADING
            cards=SAFETY
            look=CardLook::Centered
            background="bg-gray-50"
        />
    }
}
