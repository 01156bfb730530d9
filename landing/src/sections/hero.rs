use careathome_core::content::{BOOKING_TARGET, HERO};
use careathome_core::{SectionId, SiteConfig};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let [first_line, second_line] = HERO.title_lines;

    view! {
        <section
            id=SectionId::Hero.key()
            class="relative h-screen flex items-center justify-center bg-gradient-to-br from-teal-600 to-teal-800 text-white overflow-hidden"
        >
            <div class="absolute inset-0 z-0">
                <img
                    src=HERO.image
                    alt=HERO.image_alt
                    class="w-full h-full object-cover opacity-20"
                />
            </div>
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="flex flex-wrap justify-center gap-3 mb-6 text-xs">
                    {HERO
                        .badges
                        .iter()
                        .map(|badge| view! {
                            <span class="bg-white/20 backdrop-blur-sm px-4 py-1.5 rounded-full font-medium">
                                {*badge}
                            </span>
                        })
                        .collect_view()}
                </div>
                <h1 class="text-3xl sm:text-4xl lg:text-5xl xl:text-6xl font-bold mb-4 leading-tight">
                    {first_line}
                    <br />
                    {second_line}
                </h1>
                <p class="text-sm sm:text-base lg:text-lg mb-8 max-w-3xl mx-auto opacity-90">
                    {HERO.subtitle}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href=BOOKING_TARGET.anchor()
                        class="bg-white text-teal-600 px-8 py-3 rounded-full hover:bg-teal-50 transition-all font-semibold text-sm shadow-lg"
                    >
                        {HERO.primary_action}
                    </a>
                    <a
                        href=config.contact.tel_href()
                        class="border-2 border-white text-white px-8 py-3 rounded-full hover:bg-white/10 transition-all font-semibold text-sm"
                    >
                        {HERO.secondary_action}
                    </a>
                </div>
            </div>
        </section>
    }
}
