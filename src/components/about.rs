//! Static about page.

use leptos::prelude::*;

use crate::components::icons::{CheckCircle, ShieldCheck};
use crate::components::layout::COMPANY_NAME;
use crate::web::route::AppRoute;
use crate::web::router::Link;

const VALUES: [(&str, &str); 4] = [
    ("Safety first", "Every installation is certified and inspected against national standards."),
    ("Honest pricing", "Detailed quotes up front, no surprises on the final invoice."),
    ("Quality hardware", "We only fit equipment we'd put in our own homes."),
    ("Lasting support", "Maintenance plans and a real person on the phone when you need one."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="hero bg-neutral text-neutral-content py-20">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <span class="badge badge-primary mb-4">"Who We Are"</span>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{format!("About {COMPANY_NAME}")}</h1>
                    <p class="text-lg opacity-80">
                        "A family-run engineering firm delivering electrical, solar, security and
                        smart-home installations since 2009."
                    </p>
                </div>
            </div>
        </section>

        <section class="py-16 bg-base-100">
            <div class="max-w-4xl mx-auto px-4 prose">
                <h2>"Our story"</h2>
                <p>
                    "What started as a two-person electrical contractor has grown into a full
                    engineering team covering renewable energy, physical security and home
                    automation. The constant through all of it: we treat every property like
                    it's our own."
                </p>
                <p>
                    "Today our certified engineers design and install systems for homes,
                    offices and industrial sites across the region, with manufacturer-backed
                    warranties on every component we fit."
                </p>
            </div>
        </section>

        <section class="py-16 bg-base-200">
            <div class="max-w-5xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-10 flex items-center justify-center gap-3">
                    <ShieldCheck attr:class="h-8 w-8 text-primary" />
                    "What we stand for"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {VALUES
                        .iter()
                        .map(|(title, body)| view! {
                            <div class="card bg-base-100 shadow-md p-6">
                                <h3 class="font-semibold flex items-center gap-2 mb-2">
                                    <CheckCircle attr:class="h-5 w-5 text-success" />
                                    {*title}
                                </h3>
                                <p class="text-sm opacity-70">{*body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="py-16 bg-base-100 text-center">
            <h2 class="text-3xl font-bold mb-4">"Work with us"</h2>
            <p class="max-w-xl mx-auto opacity-70 mb-8">
                "See what we've built, or tell us about your next project."
            </p>
            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                <Link to=AppRoute::Gallery class="btn btn-outline">"View our work"</Link>
                <Link to=AppRoute::Quote class="btn btn-primary">"Get a quote"</Link>
            </div>
        </section>
    }
}
