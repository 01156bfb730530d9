//! Section wrapper that fades in the first time it scrolls into view.

use careathome_core::content::SectionHeading;
use careathome_core::{SectionId, VisibleSections};
use leptos::prelude::*;

/// Class list of a section: its own layout classes plus the reveal state.
pub(crate) fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal revealed")
    } else {
        format!("{base} reveal")
    }
}

#[component]
pub fn RevealSection(
    id: SectionId,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let visible = expect_context::<RwSignal<VisibleSections>>();
    let revealed = Memo::new(move |_| visible.with(|v| v.contains(id)));

    view! {
        <section
            id=id.key()
            data-section=id.key()
            class=move || reveal_class(&class, revealed.get())
        >
            {children()}
        </section>
    }
}

/// Centered title and optional subtitle above a section's content.
#[component]
pub fn SectionHeader(heading: SectionHeading) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-3">
                {heading.title}
            </h2>
            {heading.subtitle.map(|subtitle| view! {
                <p class="text-sm text-gray-600 max-w-2xl mx-auto">{subtitle}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_revealed() {
        assert_eq!(reveal_class("py-16 bg-white", false), "py-16 bg-white reveal");
        assert_eq!(
            reveal_class("py-16 bg-white", true),
            "py-16 bg-white reveal revealed"
        );
    }
}
