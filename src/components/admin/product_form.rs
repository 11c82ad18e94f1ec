//! Product create/edit form.
//!
//! Images are staged locally (`ImageStaging`) and only reconciled with the
//! server on submit: new files upload as multipart parts, removed existing
//! images ride along as storage ids to delete. Creating navigates back to
//! the list after a short success beat; updating stays on the form.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ProductFields};
use crate::components::feedback::{Notice, NoticeBanner, Spinner};
use crate::components::icons::{ArrowLeft, Upload, X};
use crate::forms::{ImageStaging, StagedImage, validate_product};
use crate::listing::{self, Collection};
use crate::models::Category;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};

#[component]
pub fn ProductFormPage(editing: Option<String>) -> impl IntoView {
    let is_edit = editing.is_some();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (featured, set_featured) = signal(false);
    let (rating, set_rating) = signal("0".to_string());
    // File handles are not thread-safe, so the staging state is local-only.
    let (staging, set_staging) = signal_local(ImageStaging::<web_sys::File>::new());

    let (categories, set_categories) = signal(Collection::<Category>::Loading);
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (loading, set_loading) = signal(is_edit);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);

    listing::load(set_categories, api::categories::get_all());

    // Creating: preselect the first category once the list arrives.
    Effect::new(move |_| {
        if is_edit {
            return;
        }
        categories.with(|c| {
            if let Some(first) = c.items().first() {
                if category.get_untracked().is_empty() {
                    set_category.set(first.name.clone());
                }
            }
        });
    });

    if let Some(id) = editing.clone() {
        spawn_local(async move {
            match api::products::get_by_id(&id).await {
                Ok(product) => {
                    let _ = set_name.try_set(product.name);
                    let _ = set_price.try_set(product.price.to_string());
                    let _ = set_description.try_set(product.description);
                    let _ = set_category.try_set(product.category);
                    let _ = set_featured.try_set(product.featured);
                    let _ = set_rating.try_set(product.rating.to_string());
                    let _ = set_staging.try_set(ImageStaging::from_existing(
                        product.images.into_iter().map(|img| (img.url, img.storage_id)),
                    ));
                    let _ = set_loading.try_set(false);
                }
                Err(err) => {
                    let _ = set_load_error.try_set(Some(err.to_string()));
                    let _ = set_loading.try_set(false);
                }
            }
        });
    }

    let file_input = NodeRef::<leptos::html::Input>::new();
    let on_files = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                if let Ok(preview) = web_sys::Url::create_object_url_with_blob(&file) {
                    set_staging.update(|s| s.add_new(preview, file.clone()));
                }
            }
        }
        // Allow re-selecting the same file.
        input.set_value("");
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }

            let image_count = staging.with_untracked(|s| s.len());
            if let Err(msg) = validate_product(
                &name.get_untracked(),
                &price.get_untracked(),
                &category.get_untracked(),
                image_count,
            ) {
                set_notice.set(Some(Notice::Error(msg)));
                return;
            }

            let fields = ProductFields {
                name: name.get_untracked(),
                price: price.get_untracked(),
                description: description.get_untracked(),
                category: category.get_untracked(),
                featured: featured.get_untracked(),
                rating: rating.get_untracked(),
            };
            let form = match staging.with_untracked(|s| api::product_form_data(&fields, s)) {
                Ok(form) => form,
                Err(err) => {
                    set_notice.set(Some(Notice::Error(err.to_string())));
                    return;
                }
            };

            set_busy.set(true);
            let id = editing.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = match &id {
                    Some(id) => api::products::update(id, form).await,
                    None => api::products::create(form).await,
                };
                match result {
                    Ok(saved) => {
                        if id.is_some() {
                            let _ = set_notice.try_set(Some(Notice::Success(format!(
                                "\"{}\" updated",
                                saved.name
                            ))));
                            // Re-staged from the server response so removed
                            // images disappear and new ones get storage ids.
                            let _ = set_staging.try_set(ImageStaging::from_existing(
                                saved.images.into_iter().map(|img| (img.url, img.storage_id)),
                            ));
                        } else {
                            let _ = set_notice.try_set(Some(Notice::Success(format!(
                                "\"{}\" created",
                                saved.name
                            ))));
                            set_timeout(
                                move || navigate(AppRoute::AdminProducts),
                                Duration::from_millis(1200),
                            );
                        }
                    }
                    Err(err) => {
                        let _ = set_notice.try_set(Some(Notice::Error(format!(
                            "Save failed: {err}"
                        ))));
                    }
                }
                let _ = set_busy.try_set(false);
            });
        }
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex items-center gap-3">
                <Link to=AppRoute::AdminProducts class="btn btn-ghost btn-sm gap-2">
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Products"
                </Link>
                <h1 class="text-3xl font-bold">
                    {if is_edit { "Edit Product" } else { "New Product" }}
                </h1>
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            <Show when=move || load_error.get().is_some()>
                <div class="alert alert-error">
                    <span>{move || load_error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || !loading.get() && load_error.get().is_none()
                fallback=|| view! { <Spinner /> }
            >
                <form class="card bg-base-100 shadow p-6 space-y-4" on:submit=on_submit.clone()>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="product-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="product-name"
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="product-price">
                                <span class="label-text">"Price (₦)"</span>
                            </label>
                            <input
                                id="product-price"
                                type="number"
                                step="0.01"
                                min="0"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_price.set(event_target_value(&ev))
                                prop:value=price
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="product-category">
                            <span class="label-text">"Category"</span>
                        </label>
                        {move || {
                            categories.with(|state| match state {
                                Collection::Ready(items) if !items.is_empty() => {
                                    let options = items.clone();
                                    view! {
                                        <select
                                            id="product-category"
                                            class="select select-bordered w-full"
                                            on:change=move |ev| set_category.set(event_target_value(&ev))
                                            prop:value=category
                                        >
                                            {options
                                                .iter()
                                                .map(|c| {
                                                    let name = c.name.clone();
                                                    view! {
                                                        <option value=name.clone()>{name.clone()}</option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    }
                                    .into_any()
                                }
                                // Category list unavailable: fall back to free text.
                                _ => view! {
                                    <input
                                        id="product-category"
                                        type="text"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| set_category.set(event_target_value(&ev))
                                        prop:value=category
                                    />
                                }
                                .into_any(),
                            })
                        }}
                    </div>

                    <div class="form-control">
                        <label class="label" for="product-description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="product-description"
                            rows="4"
                            class="textarea textarea-bordered w-full"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=description
                        ></textarea>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4 items-end">
                        <div class="form-control">
                            <label class="label" for="product-rating">
                                <span class="label-text">"Rating (0-5)"</span>
                            </label>
                            <input
                                id="product-rating"
                                type="number"
                                step="0.1"
                                min="0"
                                max="5"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_rating.set(event_target_value(&ev))
                                prop:value=rating
                            />
                        </div>
                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                prop:checked=featured
                                on:change=move |ev| set_featured.set(event_target_checked(&ev))
                            />
                            <span class="label-text">"Featured on the home page"</span>
                        </label>
                    </div>

                    <div class="form-control">
                        <span class="label-text mb-2">"Images"</span>
                        <div class="flex flex-wrap gap-3">
                            {move || {
                                staging.with(|s| {
                                    s.images()
                                        .iter()
                                        .enumerate()
                                        .map(|(index, image)| {
                                            let preview = image.preview().to_string();
                                            let is_new =
                                                matches!(image, StagedImage::New { .. });
                                            view! {
                                                <div class="relative">
                                                    <img
                                                        src=preview
                                                        class="w-24 h-24 object-cover rounded border border-base-300"
                                                    />
                                                    <Show when=move || is_new>
                                                        <span class="badge badge-info badge-xs absolute bottom-1 left-1">
                                                            "new"
                                                        </span>
                                                    </Show>
                                                    <button
                                                        type="button"
                                                        class="btn btn-circle btn-error btn-xs absolute -top-2 -right-2"
                                                        on:click=move |_| {
                                                            set_staging.update(|s| s.remove(index))
                                                        }
                                                    >
                                                        <X attr:class="h-3 w-3" />
                                                    </button>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                            <button
                                type="button"
                                class="w-24 h-24 rounded border-2 border-dashed border-base-300 flex flex-col items-center justify-center gap-1 text-base-content/50 hover:border-primary hover:text-primary"
                                on:click=move |_| {
                                    if let Some(input) = file_input.get_untracked() {
                                        input.click();
                                    }
                                }
                            >
                                <Upload attr:class="h-5 w-5" />
                                <span class="text-xs">"Add"</span>
                            </button>
                        </div>
                        <input
                            type="file"
                            accept="image/*"
                            multiple
                            class="hidden"
                            node_ref=file_input
                            on:change=on_files
                        />
                    </div>

                    <div class="flex justify-end">
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            <Show
                                when=move || busy.get()
                                fallback=move || if is_edit { "Save Changes" } else { "Create Product" }
                            >
                                <span class="loading loading-spinner loading-sm"></span>
                                "Saving..."
                            </Show>
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
