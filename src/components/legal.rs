//! Static legal pages.

use leptos::prelude::*;

use crate::components::layout::{COMPANY_EMAIL, COMPANY_NAME};

#[component]
fn LegalShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="py-16 bg-base-100">
            <div class="max-w-3xl mx-auto px-4 prose">
                <h1>{title}</h1>
                <p class="text-sm opacity-60">"Last updated: January 2025"</p>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <LegalShell title="Terms of Service">
            <h2>"1. Services and products"</h2>
            <p>
                {format!(
                    "{COMPANY_NAME} provides electrical, solar, security and smart-home \
                     engineering services and sells related hardware. Product listings on \
                     this site are invitations to enquire; prices are confirmed in the \
                     final quote."
                )}
            </p>
            <h2>"2. Quotes and estimates"</h2>
            <p>
                "Quotes issued through this site are estimates based on the information you
                provide. A binding price requires a site survey and a signed agreement."
            </p>
            <h2>"3. Warranties"</h2>
            <p>
                "Installed equipment carries the manufacturer's warranty. Our workmanship is
                guaranteed for twelve months from commissioning."
            </p>
            <h2>"4. Contact"</h2>
            <p>{format!("Questions about these terms: {COMPANY_EMAIL}.")}</p>
        </LegalShell>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <LegalShell title="Privacy Policy">
            <h2>"1. What we collect"</h2>
            <p>
                "The quote form collects your name, email, phone number and project details
                solely to respond to your request. We do not run analytics or advertising
                trackers on this site."
            </p>
            <h2>"2. WhatsApp"</h2>
            <p>
                "Product and service enquiries open a WhatsApp conversation from your own
                device. Messages you send there are governed by WhatsApp's own privacy
                policy."
            </p>
            <h2>"3. Retention"</h2>
            <p>
                "Enquiry details are kept only as long as needed to handle your request and
                any resulting project."
            </p>
            <h2>"4. Contact"</h2>
            <p>{format!("Privacy questions: {COMPANY_EMAIL}.")}</p>
        </LegalShell>
    }
}
