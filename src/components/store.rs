//! Public store page: products fetched once, filtered client-side.
//!
//! Unlike Gallery/Services this page also fetches the live category list,
//! so admin-created categories show up as filter tabs.

use leptos::prelude::*;

use crate::api;
use crate::components::feedback::{EmptyState, FetchError, Spinner};
use crate::components::icons::{Package, Star};
use crate::components::layout::{COMPANY_WHATSAPP, whatsapp_url};
use crate::listing::{self, CategoryFilter, Collection};
use crate::models::{Category, Product};
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let image = product.images.first().map(|img| img.url.clone());
    let stars = format!("{:.1}", product.rating);

    view! {
        <div class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow">
            <figure class="aspect-square bg-base-200">
                {match image {
                    Some(url) => view! { <img src=url alt=product.name.clone() class="w-full h-full object-cover" /> }.into_any(),
                    None => view! { <Package attr:class="h-12 w-12 text-base-content/30" /> }.into_any(),
                }}
            </figure>
            <div class="card-body p-4">
                <span class="badge badge-primary badge-outline">{product.category.clone()}</span>
                <h3 class="card-title text-base">{product.name.clone()}</h3>
                <div class="flex items-center justify-between">
                    <span class="font-bold text-lg">{format!("₦{:.2}", product.price)}</span>
                    <span class="flex items-center gap-1 text-sm opacity-70">
                        <Star attr:class="h-4 w-4 text-warning" />
                        {stars}
                    </span>
                </div>
                <div class="card-actions justify-end mt-2">
                    <Link to=AppRoute::Contact class="btn btn-primary btn-sm">
                        "Enquire"
                    </Link>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn StorePage() -> impl IntoView {
    let (products, set_products) = signal(Collection::<Product>::Loading);
    let (categories, set_categories) = signal(Collection::<Category>::Loading);
    let (filter, set_filter) = signal(CategoryFilter::All);

    // One fetch per collection on mount; the filter never refetches.
    listing::load(set_products, api::products::get_all());
    listing::load(set_categories, api::categories::get_all());

    let filter_tabs = move || {
        let mut labels = vec!["All".to_string()];
        categories.with(|c| {
            labels.extend(c.items().iter().map(|cat| cat.name.clone()));
        });
        labels
            .into_iter()
            .map(|label| {
                let select = label.clone();
                let text = label.clone();
                let active = move || filter.get().label() == label;
                view! {
                    <button
                        class=move || {
                            if active() { "btn btn-primary btn-sm rounded-full" }
                            else { "btn btn-ghost btn-sm rounded-full border border-base-300" }
                        }
                        on:click=move |_| set_filter.set(CategoryFilter::from_label(&select))
                    >
                        {text}
                    </button>
                }
            })
            .collect_view()
    };

    let visible = move || {
        products.with(|p| filter.with(|f| listing::filtered(p.items(), f, |item| &item.category)))
    };

    view! {
        <section class="hero bg-neutral text-neutral-content py-20">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <span class="badge badge-primary mb-4">"Our Store"</span>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Quality Products & Equipment"</h1>
                    <p class="text-lg opacity-80">
                        "Premium electrical, solar, security and smart-home products, all with
                        manufacturer warranties and professional installation options."
                    </p>
                </div>
            </div>
        </section>

        <section class="py-16 bg-base-200">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex flex-wrap gap-3 mb-10 justify-center">{filter_tabs}</div>

                {move || {
                    products.with(|state| match state {
                        Collection::Loading => view! { <Spinner /> }.into_any(),
                        Collection::Failed(msg) => {
                            view! { <FetchError message=msg.clone() /> }.into_any()
                        }
                        Collection::Ready(_) if state.is_empty() => {
                            view! { <EmptyState message="No products available yet." /> }
                                .into_any()
                        }
                        Collection::Ready(_) => view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                                <For
                                    each=visible
                                    key=|p| p.id.clone()
                                    children=move |product| view! { <ProductCard product=product /> }
                                />
                            </div>
                            <Show when=move || visible().is_empty()>
                                <EmptyState message="No products found in this category." />
                            </Show>
                        }
                        .into_any(),
                    })
                }}
            </div>
        </section>

        <section class="py-16 bg-base-100 text-center">
            <h2 class="text-3xl font-bold mb-4">"Need Help Choosing?"</h2>
            <p class="max-w-xl mx-auto opacity-70 mb-8">
                "Our team can help you pick the right products for your project, with
                personalized recommendations and bulk pricing."
            </p>
            <a
                href=whatsapp_url(COMPANY_WHATSAPP, "Hi! I need help choosing products.")
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-warning"
            >
                "WhatsApp for a Quick Quote"
            </a>
        </section>
    }
}
