//! Contact page: company details plus direct channels.

use leptos::prelude::*;

use crate::components::icons::{Mail, MapPin, MessageCircle, Phone};
use crate::components::layout::{
    COMPANY_ADDRESS, COMPANY_EMAIL, COMPANY_WHATSAPP, whatsapp_url,
};
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn ContactPage() -> impl IntoView {
    let chat_href = whatsapp_url(COMPANY_WHATSAPP, "Hello! I'd like to talk about a project.");
    let mail_href = format!("mailto:{COMPANY_EMAIL}");
    let tel_href = format!("tel:{}", COMPANY_WHATSAPP.replace(' ', ""));

    view! {
        <section class="hero bg-neutral text-neutral-content py-20">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <span class="badge badge-primary mb-4">"Get in Touch"</span>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Contact Us"</h1>
                    <p class="text-lg opacity-80">
                        "Questions about a product, a running installation or a new project —
                        we answer within one business day."
                    </p>
                </div>
            </div>
        </section>

        <section class="py-16 bg-base-200">
            <div class="max-w-4xl mx-auto px-4 grid grid-cols-1 md:grid-cols-3 gap-6">
                <a href=chat_href target="_blank" rel="noopener noreferrer"
                    class="card bg-base-100 shadow-md p-6 items-center text-center hover:shadow-xl transition-shadow">
                    <MessageCircle attr:class="h-10 w-10 text-success mb-3" />
                    <h3 class="font-semibold">"WhatsApp"</h3>
                    <p class="text-sm opacity-70">{COMPANY_WHATSAPP}</p>
                </a>
                <a href=tel_href
                    class="card bg-base-100 shadow-md p-6 items-center text-center hover:shadow-xl transition-shadow">
                    <Phone attr:class="h-10 w-10 text-primary mb-3" />
                    <h3 class="font-semibold">"Call us"</h3>
                    <p class="text-sm opacity-70">"Mon-Sat, 8:00-18:00"</p>
                </a>
                <a href=mail_href
                    class="card bg-base-100 shadow-md p-6 items-center text-center hover:shadow-xl transition-shadow">
                    <Mail attr:class="h-10 w-10 text-primary mb-3" />
                    <h3 class="font-semibold">"Email"</h3>
                    <p class="text-sm opacity-70">{COMPANY_EMAIL}</p>
                </a>
            </div>
            <div class="max-w-4xl mx-auto px-4 mt-6">
                <div class="card bg-base-100 shadow-md p-6 flex-row items-center gap-4">
                    <MapPin attr:class="h-8 w-8 text-primary shrink-0" />
                    <div>
                        <h3 class="font-semibold">"Visit our office"</h3>
                        <p class="text-sm opacity-70">{COMPANY_ADDRESS}</p>
                    </div>
                </div>
            </div>
        </section>

        <section class="py-16 bg-base-100 text-center">
            <h2 class="text-3xl font-bold mb-4">"Have a project in mind?"</h2>
            <p class="max-w-xl mx-auto opacity-70 mb-8">
                "Use the quote form and we'll come back with a detailed estimate."
            </p>
            <Link to=AppRoute::Quote class="btn btn-primary btn-lg">"Request a Quote"</Link>
        </section>
    }
}
