//! Landing page. Rotating hero, static marketing sections, and a
//! featured-products strip fed by the same one-shot fetch as the store.

use leptos::prelude::*;

use crate::api;
use crate::components::carousel::Carousel;
use crate::components::icons::{Fence, HomeIcon, Shield, Sun, Zap};
use crate::listing::{self, Collection};
use crate::models::Product;
use crate::web::route::AppRoute;
use crate::web::router::Link;

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("15+", "Years of experience"),
    ("1200+", "Projects completed"),
    ("800+", "Happy customers"),
    ("24/7", "Support available"),
];

/// Hero rotation: headline, supporting line, CTA label and target.
const HERO_SLIDES: [(&str, &str, &str, AppRoute); 3] = [
    (
        "Powering Homes. Securing Futures.",
        "Certified electrical, solar, security and smart-home installations,
         engineered to last and backed by a responsive local team.",
        "Request a Quote",
        AppRoute::Quote,
    ),
    (
        "Cut Your Power Bills with Solar.",
        "Panels, inverters and battery storage sized to your actual usage,
         installed and commissioned by certified engineers.",
        "Explore Services",
        AppRoute::Services,
    ),
    (
        "See Everything. Worry Less.",
        "CCTV, alarms and electric fencing with remote monitoring, for homes,
         offices and industrial sites.",
        "Browse the Store",
        AppRoute::Store,
    ),
];

fn hero_slides() -> Vec<AnyView> {
    HERO_SLIDES
        .iter()
        .map(|(headline, sub, cta, target)| {
            view! {
                <div class="hero py-24">
                    <div class="hero-content text-center">
                        <div class="max-w-3xl">
                            <h1 class="text-4xl md:text-6xl font-bold mb-6">{*headline}</h1>
                            <p class="text-lg md:text-xl opacity-80 mb-8">{*sub}</p>
                            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                                <Link to=target.clone() class="btn btn-primary btn-lg">
                                    {*cta}
                                </Link>
                                <Link to=AppRoute::Contact class="btn btn-outline btn-lg">
                                    "Talk to Us"
                                </Link>
                            </div>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        })
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (products, set_products) = signal(Collection::<Product>::Loading);
    listing::load(set_products, api::products::get_all());

    let featured = move || {
        products.with(|p| {
            p.items()
                .iter()
                .filter(|product| product.featured)
                .take(4)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="bg-neutral text-neutral-content">
            <Carousel slides=hero_slides() />
        </section>

        <section class="py-12 bg-base-100">
            <div class="stats stats-vertical md:stats-horizontal shadow w-full max-w-5xl mx-auto">
                {HIGHLIGHTS
                    .iter()
                    .map(|(value, label)| view! {
                        <div class="stat text-center">
                            <div class="stat-value text-primary">{*value}</div>
                            <div class="stat-desc text-base">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="py-16 bg-base-200">
            <div class="max-w-7xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-10">"What We Install"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-6">
                    <div class="card bg-base-100 shadow-md p-6 items-center text-center">
                        <Zap attr:class="h-10 w-10 text-primary mb-3" />
                        <h3 class="font-semibold">"Electrical"</h3>
                        <p class="text-sm opacity-70">"Wiring, panels, lighting and safety inspections."</p>
                    </div>
                    <div class="card bg-base-100 shadow-md p-6 items-center text-center">
                        <Sun attr:class="h-10 w-10 text-primary mb-3" />
                        <h3 class="font-semibold">"Solar"</h3>
                        <p class="text-sm opacity-70">"Panels, inverters and battery storage."</p>
                    </div>
                    <div class="card bg-base-100 shadow-md p-6 items-center text-center">
                        <Shield attr:class="h-10 w-10 text-primary mb-3" />
                        <h3 class="font-semibold">"Security"</h3>
                        <p class="text-sm opacity-70">"CCTV, alarms and remote monitoring."</p>
                    </div>
                    <div class="card bg-base-100 shadow-md p-6 items-center text-center">
                        <HomeIcon attr:class="h-10 w-10 text-primary mb-3" />
                        <h3 class="font-semibold">"Smart Home"</h3>
                        <p class="text-sm opacity-70">"Automation, climate and voice control."</p>
                    </div>
                    <div class="card bg-base-100 shadow-md p-6 items-center text-center">
                        <Fence attr:class="h-10 w-10 text-primary mb-3" />
                        <h3 class="font-semibold">"Perimeter"</h3>
                        <p class="text-sm opacity-70">"Electric fencing and access control."</p>
                    </div>
                </div>
            </div>
        </section>

        <Show when=move || !featured().is_empty()>
            <section class="py-16 bg-base-100">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="flex items-center justify-between mb-8">
                        <h2 class="text-3xl font-bold">"Featured Products"</h2>
                        <Link to=AppRoute::Store class="btn btn-ghost btn-sm">
                            "View all →"
                        </Link>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        <For
                            each=featured
                            key=|p| p.id.clone()
                            children=move |product| {
                                let image = product.images.first().map(|img| img.url.clone());
                                view! {
                                    <div class="card bg-base-100 border border-base-300">
                                        <figure class="aspect-square bg-base-200">
                                            {image.map(|url| view! {
                                                <img src=url alt=product.name.clone() class="w-full h-full object-cover" />
                                            })}
                                        </figure>
                                        <div class="card-body p-4">
                                            <h3 class="card-title text-base">{product.name.clone()}</h3>
                                            <span class="font-bold">{format!("₦{:.2}", product.price)}</span>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </section>
        </Show>
    }
}
