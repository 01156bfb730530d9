//! "Request a Home Visit" form plus direct contact channels.
//!
//! There is no backend: submit is intercepted, missing required fields get
//! marked, and a complete draft is written to the console log.

use careathome_core::content::{
    CONTACT_AVAILABILITY, CONTACT_HEADING, SERVICE_PLACEHOLDER, service_options,
};
use careathome_core::{BookingDraft, BookingField, SectionId, ServiceKind, SiteConfig};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::reveal::{RevealSection, SectionHeader};

const FIELD_BASE: &str =
    "w-full px-4 py-2.5 border rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-teal-500";

fn field_class(missing: bool) -> String {
    if missing {
        format!("{FIELD_BASE} border-red-500 bg-red-50")
    } else {
        format!("{FIELD_BASE} border-gray-300")
    }
}

#[component]
fn ContactChannels() -> impl IntoView {
    let contact = expect_context::<SiteConfig>().contact;

    view! {
        <div class="space-y-6">
            <a
                href=contact.tel_href()
                class="flex items-center gap-4 bg-teal-600 text-white p-5 rounded-xl hover:bg-teal-700 transition-all"
            >
                <span class="text-2xl">"📞"</span>
                <div>
                    <p class="text-xs opacity-80">"Call Us"</p>
                    <p class="font-semibold">{contact.phone_display.clone()}</p>
                </div>
            </a>
            <a
                href=contact.whatsapp_href()
                target="_blank"
                rel="noopener"
                class="flex items-center gap-4 bg-green-500 text-white p-5 rounded-xl hover:bg-green-600 transition-all"
            >
                <span class="text-2xl">"💬"</span>
                <div>
                    <p class="text-xs opacity-80">"WhatsApp"</p>
                    <p class="font-semibold">{contact.whatsapp_display.clone()}</p>
                </div>
            </a>
            <a
                href=contact.mailto_href()
                class="flex items-center gap-4 bg-white border border-gray-200 p-5 rounded-xl hover:shadow-md transition-all"
            >
                <span class="text-2xl">"✉️"</span>
                <div>
                    <p class="text-xs text-gray-500">"Email"</p>
                    <p class="font-semibold text-gray-900">{contact.email.clone()}</p>
                </div>
            </a>
            <div class="flex items-center gap-4 bg-white border border-gray-200 p-5 rounded-xl">
                <span class="text-2xl">"📍"</span>
                <div>
                    <p class="text-xs text-gray-500">"Address"</p>
                    <p class="font-semibold text-gray-900">{contact.address.clone()}</p>
                </div>
            </div>
            <p class="text-sm font-semibold text-teal-700 text-center">{CONTACT_AVAILABILITY}</p>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let draft = RwSignal::new(BookingDraft::default());
    let attempted = RwSignal::new(false);
    let missing = Memo::new(move |_| draft.with(BookingDraft::missing_required));
    let is_marked =
        move |field: BookingField| attempted.get() && missing.with(|m| m.contains(&field));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        attempted.set(true);
        let gaps = missing.get_untracked();
        if gaps.is_empty() {
            draft.with_untracked(|d| log::info!("[careathome][contact] visit requested: {d:?}"));
        } else {
            let labels: Vec<&str> = gaps.iter().map(BookingField::label).collect();
            log::info!("[careathome][contact] submit held, missing {}", labels.join(", "));
        }
    };

    view! {
        <RevealSection id=SectionId::Contact class="py-16 lg:py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader heading=CONTACT_HEADING />
                <div class="grid lg:grid-cols-3 gap-8">
                    <ContactChannels />
                    <form
                        class="lg:col-span-2 bg-gray-50 p-6 sm:p-8 rounded-2xl space-y-4"
                        novalidate=true
                        on:submit=on_submit
                    >
                        <div class="grid sm:grid-cols-2 gap-4">
                            <input
                                type="text"
                                placeholder=BookingField::Name.label()
                                class=move || field_class(is_marked(BookingField::Name))
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                            <input
                                type="tel"
                                placeholder=BookingField::Phone.label()
                                class=move || field_class(is_marked(BookingField::Phone))
                                prop:value=move || draft.with(|d| d.phone.clone())
                                on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                            />
                        </div>
                        <textarea
                            rows="2"
                            placeholder=BookingField::Address.label()
                            class=move || field_class(is_marked(BookingField::Address))
                            prop:value=move || draft.with(|d| d.address.clone())
                            on:input=move |ev| draft.update(|d| d.address = event_target_value(&ev))
                        />
                        <div class="grid sm:grid-cols-2 gap-4">
                            <select
                                aria-label=BookingField::Service.label()
                                class=move || field_class(is_marked(BookingField::Service))
                                on:change=move |ev| {
                                    let service = ServiceKind::from_label(&event_target_value(&ev));
                                    draft.update(|d| d.service = service);
                                }
                            >
                                <option value="">{SERVICE_PLACEHOLDER}</option>
                                {service_options()
                                    .map(|label| view! { <option value=label>{label}</option> })
                                    .collect_view()}
                            </select>
                            <input
                                type="time"
                                aria-label=BookingField::PreferredTime.label()
                                class=move || field_class(is_marked(BookingField::PreferredTime))
                                prop:value=move || draft.with(|d| d.preferred_time.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.preferred_time = event_target_value(&ev))
                                }
                            />
                        </div>
                        <textarea
                            rows="3"
                            placeholder=BookingField::Message.label()
                            class=field_class(false)
                            prop:value=move || draft.with(|d| d.message.clone())
                            on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                        />
                        <Show when=move || attempted.get() && !missing.with(Vec::is_empty)>
                            <p class="text-xs text-red-600">
                                "Please fill in: "
                                {move || {
                                    missing
                                        .get()
                                        .iter()
                                        .map(BookingField::label)
                                        .collect::<Vec<_>>()
                                        .join(", ")
                                }}
                            </p>
                        </Show>
                        <button
                            type="submit"
                            class="w-full bg-teal-600 text-white py-3 rounded-full font-semibold hover:bg-teal-700 transition-all"
                        >
                            "Request Home Visit"
                        </button>
                    </form>
                </div>
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_highlighted() {
        assert!(field_class(true).contains("border-red-500"));
        assert!(!field_class(false).contains("border-red-500"));
    }

    #[test]
    fn placeholder_is_not_a_service() {
        assert_eq!(ServiceKind::from_label(SERVICE_PLACEHOLDER), None);
        assert!(service_options().all(|label| ServiceKind::from_label(label).is_some()));
    }

    #[test]
    fn empty_form_marks_every_required_field() {
        let marked: Vec<BookingField> = BookingDraft::default().missing_required();
        assert!(!marked.contains(&BookingField::Message));
        assert_eq!(marked.len(), BookingField::ALL.len() - 1);
    }
}
