//! Product management table.
//!
//! Deletion splices the local collection on success instead of refetching;
//! seeding (offered only on an empty collection) refetches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, FetchError, Notice, NoticeBanner, Spinner};
use crate::components::icons::{Download, Edit2, Plus, Star, Trash2};
use crate::listing::{self, Collection};
use crate::models::Product;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let (products, set_products) = signal(Collection::<Product>::Loading);
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (pending_delete, set_pending_delete) = signal(Option::<Product>::None);
    let (deleting, set_deleting) = signal(false);
    let (seeding, set_seeding) = signal(false);

    listing::load(set_products, api::products::get_all());

    let confirm_delete = move |()| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::products::delete(&product.id).await {
                Ok(()) => {
                    let _ = set_products.try_update(|c| c.retain(|p| p.id != product.id));
                    let _ = set_notice.try_set(Some(Notice::Success(format!(
                        "Deleted \"{}\"",
                        product.name
                    ))));
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Failed to delete product: {err}"
                    ))));
                }
            }
            let _ = set_deleting.try_set(false);
            let _ = set_pending_delete.try_set(None);
        });
    };

    let seed = move |_| {
        set_seeding.set(true);
        spawn_local(async move {
            match api::products::seed().await {
                Ok(()) => listing::load(set_products, api::products::get_all()),
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Seeding failed: {err}"
                    ))));
                }
            }
            let _ = set_seeding.try_set(false);
        });
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Products"</h1>
                    <p class="opacity-60">"Everything visible in the store."</p>
                </div>
                <Link to=AppRoute::AdminProductNew class="btn btn-primary gap-2">
                    <Plus attr:class="h-4 w-4" />
                    "New Product"
                </Link>
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            {move || {
                products.with(|state| match state {
                    Collection::Loading => view! { <Spinner /> }.into_any(),
                    Collection::Failed(msg) => {
                        view! { <FetchError message=msg.clone() /> }.into_any()
                    }
                    Collection::Ready(_) if state.is_empty() => view! {
                        <EmptyState message="No products yet.">
                            <button
                                class="btn btn-outline gap-2"
                                disabled=move || seeding.get()
                                on:click=seed
                            >
                                <Download attr:class="h-4 w-4" />
                                {move || if seeding.get() { "Loading samples..." } else { "Load sample products" }}
                            </button>
                        </EmptyState>
                    }
                    .into_any(),
                    Collection::Ready(items) => view! {
                        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Product"</th>
                                        <th>"Category"</th>
                                        <th>"Price"</th>
                                        <th>"Rating"</th>
                                        <th></th>
                                        <th class="text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .iter()
                                        .map(|product| {
                                            let row = product.clone();
                                            view! { <ProductRow product=row on_delete=set_pending_delete /> }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any(),
                })
            }}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title=Signal::derive(|| "Delete product".to_string())
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|p| format!("Delete \"{}\"? Its images are removed from storage too.", p.name))
                        .unwrap_or_default()
                })
                busy=deleting
                on_confirm=confirm_delete
                on_cancel=move |()| {
                    if !deleting.get_untracked() {
                        set_pending_delete.set(None);
                    }
                }
            />
        </div>
    }
}

#[component]
fn ProductRow(product: Product, on_delete: WriteSignal<Option<Product>>) -> impl IntoView {
    let thumb = product.images.first().map(|img| img.url.clone());
    let delete_target = product.clone();

    view! {
        <tr>
            <td>
                <div class="flex items-center gap-3">
                    <div class="avatar">
                        <div class="w-12 h-12 rounded bg-base-200">
                            {thumb.map(|url| view! {
                                <img src=url alt=product.name.clone() class="object-cover" />
                            })}
                        </div>
                    </div>
                    <span class="font-medium">{product.name.clone()}</span>
                </div>
            </td>
            <td>{product.category.clone()}</td>
            <td>{format!("₦{:.2}", product.price)}</td>
            <td>
                <span class="flex items-center gap-1">
                    <Star attr:class="h-4 w-4 text-warning" />
                    {format!("{:.1}", product.rating)}
                </span>
            </td>
            <td>
                <Show when={
                    let featured = product.featured;
                    move || featured
                }>
                    <span class="badge badge-primary badge-sm">"Featured"</span>
                </Show>
            </td>
            <td class="text-right">
                <div class="flex justify-end gap-2">
                    <Link
                        to=AppRoute::AdminProductEdit(product.id.clone())
                        class="btn btn-ghost btn-sm"
                    >
                        <Edit2 attr:class="h-4 w-4" />
                    </Link>
                    <button
                        class="btn btn-ghost btn-sm text-error"
                        on:click=move |_| on_delete.set(Some(delete_target.clone()))
                    >
                        <Trash2 attr:class="h-4 w-4" />
                    </button>
                </div>
            </td>
        </tr>
    }
}
