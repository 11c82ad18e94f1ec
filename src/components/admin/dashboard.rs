//! Admin landing screen: one count per managed collection plus shortcuts.

use leptos::prelude::*;

use crate::api;
use crate::components::icons::{ImageIcon, Package, Plus, Wrench};
use crate::listing::{self, Collection};
use crate::models::{GalleryItem, Product, Service};
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
fn StatCard<T: Send + Sync + 'static>(
    label: &'static str,
    state: ReadSignal<Collection<T>>,
    to: AppRoute,
    children: Children,
) -> impl IntoView {
    view! {
        <Link to=to class="stat bg-base-100 rounded-box shadow hover:shadow-md transition-shadow">
            <div class="stat-figure text-primary">{children()}</div>
            <div class="stat-title">{label}</div>
            <div class="stat-value">
                {move || {
                    state.with(|s| match s {
                        Collection::Loading => view! {
                            <span class="loading loading-dots loading-md"></span>
                        }
                        .into_any(),
                        Collection::Failed(_) => "—".into_any(),
                        Collection::Ready(items) => items.len().into_any(),
                    })
                }}
            </div>
        </Link>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let (products, set_products) = signal(Collection::<Product>::Loading);
    let (services, set_services) = signal(Collection::<Service>::Loading);
    let (gallery, set_gallery) = signal(Collection::<GalleryItem>::Loading);

    listing::load(set_products, api::products::get_all());
    listing::load(set_services, api::services::get_all_admin());
    listing::load(set_gallery, api::gallery::get_all());

    view! {
        <div class="max-w-5xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="opacity-60">"Overview of the storefront content."</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard label="Products" state=products to=AppRoute::AdminProducts>
                    <Package attr:class="h-8 w-8" />
                </StatCard>
                <StatCard label="Services" state=services to=AppRoute::AdminServices>
                    <Wrench attr:class="h-8 w-8" />
                </StatCard>
                <StatCard label="Gallery items" state=gallery to=AppRoute::AdminGallery>
                    <ImageIcon attr:class="h-8 w-8" />
                </StatCard>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Quick actions"</h2>
                    <div class="flex flex-wrap gap-3">
                        <Link to=AppRoute::AdminProductNew class="btn btn-primary btn-sm gap-2">
                            <Plus attr:class="h-4 w-4" />
                            "New product"
                        </Link>
                        <Link to=AppRoute::AdminServiceNew class="btn btn-outline btn-sm gap-2">
                            <Plus attr:class="h-4 w-4" />
                            "New service"
                        </Link>
                        <Link to=AppRoute::AdminGallery class="btn btn-outline btn-sm gap-2">
                            <Plus attr:class="h-4 w-4" />
                            "Upload to gallery"
                        </Link>
                    </div>
                </div>
            </div>
        </div>
    }
}
