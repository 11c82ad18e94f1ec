//! Quote-request form. Validation is local; the request itself is a
//! prefilled WhatsApp message, not an API call.

use leptos::prelude::*;

use crate::components::icons::{CheckCircle, Send};
use crate::components::layout::{COMPANY_WHATSAPP, whatsapp_url};
use crate::forms::validate_quote;
use crate::web::route::AppRoute;
use crate::web::router::Link;

const SERVICE_OPTIONS: [&str; 6] = [
    "Electrical installation",
    "Solar energy system",
    "CCTV & security",
    "Smart home automation",
    "Electric fencing",
    "Other / not sure yet",
];

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[component]
pub fn QuotePage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (service, set_service) = signal(SERVICE_OPTIONS[0].to_string());
    let (details, set_details) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if let Err(msg) = validate_quote(&name.get(), &email.get(), &details.get()) {
            set_error_msg.set(Some(msg));
            return;
        }

        let message = format!(
            "Quote request from {}\nEmail: {}\nPhone: {}\nService: {}\n\n{}",
            name.get(),
            email.get(),
            phone.get(),
            service.get(),
            details.get(),
        );
        open_in_new_tab(&whatsapp_url(COMPANY_WHATSAPP, &message));
        set_submitted.set(true);
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| view! {
                <div class="min-h-[60vh] flex items-center justify-center bg-base-200 px-4">
                    <div class="card bg-base-100 shadow-xl p-8 text-center max-w-md">
                        <CheckCircle attr:class="h-16 w-16 text-success mx-auto mb-6" />
                        <h2 class="text-3xl font-bold mb-4">"Request Sent!"</h2>
                        <p class="opacity-70 mb-8">
                            "Thanks for your interest. Our team will review your request and get
                            back to you within 24 hours."
                        </p>
                        <Link to=AppRoute::Home class="btn btn-primary">"Back to Home"</Link>
                    </div>
                </div>
            }
        >
            <section class="hero bg-neutral text-neutral-content py-20">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <span class="badge badge-primary mb-4">"Quote Request"</span>
                        <h1 class="text-4xl md:text-5xl font-bold mb-4">"Get a Professional Quote"</h1>
                        <p class="text-lg opacity-80">
                            "Tell us about your project and we'll provide a detailed estimate
                            tailored to your needs."
                        </p>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-base-200">
                <div class="max-w-2xl mx-auto px-4">
                    <form class="card bg-base-100 shadow-xl p-8 space-y-4" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="quote-name">
                                    <span class="label-text">"Full name"</span>
                                </label>
                                <input
                                    id="quote-name"
                                    type="text"
                                    required
                                    placeholder="Jane Doe"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    prop:value=name
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="quote-email">
                                    <span class="label-text">"Email address"</span>
                                </label>
                                <input
                                    id="quote-email"
                                    type="email"
                                    required
                                    placeholder="jane@example.com"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                />
                            </div>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="quote-phone">
                                    <span class="label-text">"Phone number"</span>
                                </label>
                                <input
                                    id="quote-phone"
                                    type="tel"
                                    placeholder="+234 ..."
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                                    prop:value=phone
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="quote-service">
                                    <span class="label-text">"Service needed"</span>
                                </label>
                                <select
                                    id="quote-service"
                                    class="select select-bordered w-full"
                                    on:change=move |ev| set_service.set(event_target_value(&ev))
                                >
                                    {SERVICE_OPTIONS
                                        .iter()
                                        .map(|opt| view! { <option value=*opt>{*opt}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label" for="quote-details">
                                <span class="label-text">"Project details"</span>
                            </label>
                            <textarea
                                id="quote-details"
                                rows="5"
                                required
                                placeholder="Property type, rough size, timelines..."
                                class="textarea textarea-bordered w-full"
                                on:input=move |ev| set_details.set(event_target_value(&ev))
                                prop:value=details
                            ></textarea>
                        </div>

                        <button type="submit" class="btn btn-primary w-full gap-2">
                            <Send attr:class="h-4 w-4" />
                            "Send Request"
                        </button>
                    </form>
                </div>
            </section>
        </Show>
    }
}
