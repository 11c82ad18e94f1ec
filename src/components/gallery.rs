//! Public project gallery: one fetch, fixed category tabs, lightbox.

use leptos::prelude::*;

use crate::api;
use crate::components::feedback::{EmptyState, FetchError, Spinner};
use crate::components::icons::{Film, X};
use crate::listing::{self, CategoryFilter, Collection};
use crate::models::{GalleryItem, MediaType};

/// Gallery categories are a fixed set, unlike the store's live list.
pub const GALLERY_CATEGORIES: [&str; 4] = ["Electrical", "Solar", "Security", "Smart Home"];

/// Media branch shared by the public grid, the lightbox, and the admin list.
pub fn media_view(item: &GalleryItem, class: &'static str) -> AnyView {
    match item.media_type {
        MediaType::Image => {
            view! { <img src=item.url.clone() alt=item.title.clone() class=class /> }.into_any()
        }
        MediaType::Video => {
            view! { <video src=item.url.clone() class=class controls=true></video> }.into_any()
        }
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let (items, set_items) = signal(Collection::<GalleryItem>::Loading);
    let (filter, set_filter) = signal(CategoryFilter::All);
    let (lightbox, set_lightbox) = signal(Option::<GalleryItem>::None);

    listing::load(set_items, api::gallery::get_all());

    let filter_tabs = move || {
        std::iter::once("All")
            .chain(GALLERY_CATEGORIES)
            .map(|label| {
                let active = move || filter.get().label() == label;
                view! {
                    <button
                        class=move || {
                            if active() { "btn btn-primary btn-sm rounded-full" }
                            else { "btn btn-ghost btn-sm rounded-full border border-base-300" }
                        }
                        on:click=move |_| set_filter.set(CategoryFilter::from_label(label))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let visible = move || {
        items.with(|i| filter.with(|f| listing::filtered(i.items(), f, |item| &item.category)))
    };

    view! {
        <section class="hero bg-neutral text-neutral-content py-20">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <span class="badge badge-primary mb-4">"Our Work"</span>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Project Gallery"</h1>
                    <p class="text-lg opacity-80">
                        "A portfolio of completed installations. Each one reflects our commitment
                        to quality, safety and customer satisfaction."
                    </p>
                </div>
            </div>
        </section>

        <section class="py-16 bg-base-200">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex flex-wrap gap-3 mb-10 justify-center">{filter_tabs}</div>

                {move || {
                    items.with(|state| match state {
                        Collection::Loading => view! { <Spinner /> }.into_any(),
                        Collection::Failed(msg) => {
                            view! { <FetchError message=msg.clone() /> }.into_any()
                        }
                        Collection::Ready(_) if state.is_empty() => {
                            view! { <EmptyState message="No projects published yet." /> }.into_any()
                        }
                        Collection::Ready(_) => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                <For
                                    each=visible
                                    key=|item| item.id.clone()
                                    children=move |item| {
                                        let open_item = item.clone();
                                        view! {
                                            <div
                                                class="card bg-base-100 shadow-md overflow-hidden cursor-pointer hover:shadow-xl transition-shadow"
                                                on:click=move |_| set_lightbox.set(Some(open_item.clone()))
                                            >
                                                <figure class="aspect-video bg-base-300 relative">
                                                    {media_view(&item, "w-full h-full object-cover")}
                                                    <Show when={
                                                        let is_video = item.media_type == MediaType::Video;
                                                        move || is_video
                                                    }>
                                                        <span class="badge badge-neutral absolute top-2 right-2 gap-1">
                                                            <Film attr:class="h-3 w-3" />
                                                            "Video"
                                                        </span>
                                                    </Show>
                                                </figure>
                                                <div class="card-body p-4">
                                                    <span class="badge badge-primary badge-outline">
                                                        {item.category.clone()}
                                                    </span>
                                                    <h3 class="card-title text-base">{item.title.clone()}</h3>
                                                    <p class="text-sm opacity-70">{item.description.clone()}</p>
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                            <Show when=move || visible().is_empty()>
                                <EmptyState message="No projects found in this category." />
                            </Show>
                        }
                        .into_any(),
                    })
                }}
            </div>
        </section>

        // Lightbox
        <Show when=move || lightbox.get().is_some()>
            <div
                class="fixed inset-0 z-50 bg-black/80 flex items-center justify-center p-4"
                on:click=move |_| set_lightbox.set(None)
            >
                <button class="btn btn-circle btn-ghost absolute top-4 right-4 text-white">
                    <X attr:class="h-6 w-6" />
                </button>
                {move || {
                    lightbox.get().map(|item| view! {
                        <div class="max-w-4xl w-full">
                            {media_view(&item, "w-full max-h-[80vh] object-contain rounded-lg")}
                            <p class="text-white text-center mt-4 text-lg">{item.title.clone()}</p>
                        </div>
                    })
                }}
            </div>
        </Show>
    }
}
