use careathome_core::SectionId;
use careathome_core::content::{BOOKING_TARGET, CHECK_ICON_PATH, PACKAGES, PACKAGES_HEADING, Package};
use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

fn card_class(highlighted: bool) -> &'static str {
    if highlighted {
        "bg-white p-8 rounded-2xl border-2 border-teal-600 shadow-xl relative md:-translate-y-2"
    } else {
        "bg-white p-8 rounded-2xl border border-gray-200 hover:shadow-lg transition-all"
    }
}

fn button_class(highlighted: bool) -> &'static str {
    if highlighted {
        "block text-center w-full py-3 rounded-full font-semibold transition-all bg-teal-600 text-white hover:bg-teal-700"
    } else {
        "block text-center w-full py-3 rounded-full font-semibold transition-all border-2 border-teal-600 text-teal-600 hover:bg-teal-50"
    }
}

#[component]
fn PackageCard(package: Package) -> impl IntoView {
    view! {
        <div class=card_class(package.highlighted)>
            {package.highlighted.then(|| view! {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 bg-teal-600 text-white text-xs font-semibold px-3 py-1 rounded-full">
                    "Most Popular"
                </span>
            })}
            <h3 class="text-xl font-bold text-gray-900 mb-1">{package.name}</h3>
            <p class="text-sm text-gray-500 mb-4">{package.hours}</p>
            <p class="text-3xl font-bold text-teal-600 mb-6">
                {package.price}
                <span class="text-sm font-normal text-gray-500">"/day"</span>
            </p>
            <ul class="space-y-3 mb-8">
                {package
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-center gap-2 text-sm text-gray-700">
                            <svg class="w-5 h-5 text-teal-600 flex-shrink-0" fill="currentColor" viewBox="0 0 20 20">
                                <path fill-rule="evenodd" d=CHECK_ICON_PATH clip-rule="evenodd" />
                            </svg>
                            {*feature}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <a href=BOOKING_TARGET.anchor() class=button_class(package.highlighted)>
                "Choose Plan"
            </a>
        </div>
    }
}

#[component]
pub fn Packages() -> impl IntoView {
    view! {
        <RevealSection id=SectionId::Packages class="py-16 lg:py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader heading=PACKAGES_HEADING />
                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {PACKAGES
                        .iter()
                        .map(|package| view! { <PackageCard package=*package /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tier_stands_out() {
        let highlighted: Vec<&str> = PACKAGES
            .iter()
            .filter(|p| card_class(p.highlighted).contains("border-teal-600"))
            .map(|p| p.name)
            .collect();
        assert_eq!(highlighted, ["Standard"]);
        assert!(button_class(true).contains("bg-teal-600"));
        assert!(button_class(false).contains("border-teal-600"));
    }
}
