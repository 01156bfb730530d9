use careathome_core::SiteConfig;
use careathome_core::content::{
    BRAND_PREFIX, BRAND_SUFFIX, COPYRIGHT, FOOTER_BLURB, FOOTER_COMPANY_LINKS,
    FOOTER_SERVICE_LINKS, FooterLink, SOCIAL_LINKS,
};
use leptos::prelude::*;

#[component]
fn LinkColumn(title: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-white font-semibold mb-4">{title}</h4>
            <ul class="space-y-2 text-sm">
                {links
                    .iter()
                    .map(|link| view! {
                        <li>
                            <a href=link.href class="hover:text-teal-400 transition-colors">
                                {link.label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let contact = expect_context::<SiteConfig>().contact;

    view! {
        <footer class="bg-gray-900 text-gray-400 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8 mb-8">
                    <div>
                        <h3 class="text-2xl font-bold text-white mb-4">
                            {BRAND_PREFIX}
                            <span class="text-teal-400">{BRAND_SUFFIX}</span>
                        </h3>
                        <p class="text-sm mb-4">{FOOTER_BLURB}</p>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| view! {
                                    <a
                                        href=social.href
                                        aria-label=social.label
                                        class="w-9 h-9 bg-gray-800 rounded-full flex items-center justify-center hover:bg-teal-600 transition-colors"
                                    >
                                        <svg class="w-4 h-4" fill="currentColor" viewBox="0 0 24 24">
                                            <path d=social.icon_path />
                                        </svg>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <LinkColumn title="Services" links=FOOTER_SERVICE_LINKS />
                    <LinkColumn title="Company" links=FOOTER_COMPANY_LINKS />
                    <div>
                        <h4 class="text-white font-semibold mb-4">"Contact"</h4>
                        <ul class="space-y-2 text-sm">
                            <li>
                                <a href=contact.tel_href() class="hover:text-teal-400 transition-colors">
                                    {contact.phone_display.clone()}
                                </a>
                            </li>
                            <li>
                                <a href=contact.mailto_href() class="hover:text-teal-400 transition-colors">
                                    {contact.email.clone()}
                                </a>
                            </li>
                            <li>{contact.address.clone()}</li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 pt-6 text-center text-sm">
                    <p>{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}
