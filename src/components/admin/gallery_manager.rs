//! Gallery management: inline upload form above the grid.
//!
//! A successful upload prepends the returned item so it shows first, the
//! same position it will occupy after the next full fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, FetchError, Notice, NoticeBanner, Spinner};
use crate::components::gallery::{GALLERY_CATEGORIES, media_view};
use crate::components::icons::{Film, Trash2, Upload};
use crate::forms::validate_gallery_upload;
use crate::listing::{self, Collection};
use crate::models::{GalleryItem, MediaType};

#[component]
pub fn GalleryManagementPage() -> impl IntoView {
    let (items, set_items) = signal(Collection::<GalleryItem>::Loading);
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (pending_delete, set_pending_delete) = signal(Option::<GalleryItem>::None);
    let (deleting, set_deleting) = signal(false);

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(GALLERY_CATEGORIES[0].to_string());
    let (media, set_media) = signal_local(Option::<web_sys::File>::None);
    let (uploading, set_uploading) = signal(false);

    listing::load(set_items, api::gallery::get_all());

    let file_input = NodeRef::<leptos::html::Input>::new();
    let on_file = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            set_media.set(Some(file));
        }
    };

    let on_upload = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }

        let has_file = media.with_untracked(|m| m.is_some());
        if let Err(msg) = validate_gallery_upload(
            &title.get_untracked(),
            &category.get_untracked(),
            has_file,
        ) {
            set_notice.set(Some(Notice::Error(msg)));
            return;
        }
        let Some(file) = media.get_untracked() else {
            return;
        };

        let form = match api::gallery_form_data(
            &title.get_untracked(),
            &description.get_untracked(),
            &category.get_untracked(),
            &file,
        ) {
            Ok(form) => form,
            Err(err) => {
                set_notice.set(Some(Notice::Error(err.to_string())));
                return;
            }
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::gallery::create(form).await {
                Ok(item) => {
                    let _ = set_items.try_update(|c| c.prepend(item));
                    let _ = set_notice.try_set(Some(Notice::Success("Uploaded".to_string())));
                    let _ = set_title.try_set(String::new());
                    let _ = set_description.try_set(String::new());
                    let _ = set_media.try_set(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Upload failed: {err}"
                    ))));
                }
            }
            let _ = set_uploading.try_set(false);
        });
    };

    let confirm_delete = move |()| {
        let Some(item) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::gallery::delete(&item.id).await {
                Ok(()) => {
                    let _ = set_items.try_update(|c| c.retain(|g| g.id != item.id));
                    let _ = set_notice.try_set(Some(Notice::Success(format!(
                        "Deleted \"{}\"",
                        item.title
                    ))));
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Failed to delete item: {err}"
                    ))));
                }
            }
            let _ = set_deleting.try_set(false);
            let _ = set_pending_delete.try_set(None);
        });
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Gallery"</h1>
                <p class="opacity-60">"Photos and videos shown on the public gallery page."</p>
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            <form class="card bg-base-100 shadow p-6 space-y-4" on:submit=on_upload>
                <h2 class="font-semibold">"Upload new item"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div class="form-control">
                        <label class="label" for="gallery-title">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="gallery-title"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="gallery-category">
                            <span class="label-text">"Category"</span>
                        </label>
                        <select
                            id="gallery-category"
                            class="select select-bordered w-full"
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                            prop:value=category
                        >
                            {GALLERY_CATEGORIES
                                .iter()
                                .map(|opt| view! { <option value=*opt>{*opt}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="gallery-file">
                            <span class="label-text">"Photo or video"</span>
                        </label>
                        <input
                            id="gallery-file"
                            type="file"
                            accept="image/*,video/*"
                            class="file-input file-input-bordered w-full"
                            node_ref=file_input
                            on:change=on_file
                        />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="gallery-description">
                        <span class="label-text">"Description (optional)"</span>
                    </label>
                    <input
                        id="gallery-description"
                        type="text"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        prop:value=description
                    />
                </div>
                <div class="flex justify-end">
                    <button type="submit" class="btn btn-primary gap-2" disabled=move || uploading.get()>
                        <Show
                            when=move || uploading.get()
                            fallback=|| view! {
                                <Upload attr:class="h-4 w-4" />
                                "Upload"
                            }
                        >
                            <span class="loading loading-spinner loading-sm"></span>
                            "Uploading..."
                        </Show>
                    </button>
                </div>
            </form>

            {move || {
                items.with(|state| match state {
                    Collection::Loading => view! { <Spinner /> }.into_any(),
                    Collection::Failed(msg) => {
                        view! { <FetchError message=msg.clone() /> }.into_any()
                    }
                    Collection::Ready(_) if state.is_empty() => {
                        view! { <EmptyState message="Nothing in the gallery yet. Upload the first item above." /> }
                            .into_any()
                    }
                    Collection::Ready(list) => view! {
                        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                            {list
                                .iter()
                                .map(|item| {
                                    let card = item.clone();
                                    view! { <GalleryCard item=card on_delete=set_pending_delete /> }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                })
            }}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title=Signal::derive(|| "Delete gallery item".to_string())
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|g| format!("Delete \"{}\"? The file is removed from storage.", g.title))
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
fn GalleryCard(item: GalleryItem, on_delete: WriteSignal<Option<GalleryItem>>) -> impl IntoView {
    let delete_target = item.clone();
    let is_video = item.media_type == MediaType::Video;

    view! {
        <div class="card bg-base-100 shadow overflow-hidden">
            <figure class="relative aspect-video bg-base-200">
                {media_view(&item, "w-full h-full object-cover")}
                <Show when=move || is_video>
                    <span class="badge badge-neutral gap-1 absolute top-2 left-2">
                        <Film attr:class="h-3 w-3" />
                        "Video"
                    </span>
                </Show>
            </figure>
            <div class="card-body p-3 flex-row items-center justify-between">
                <div class="min-w-0">
                    <p class="font-medium text-sm truncate">{item.title.clone()}</p>
                    <p class="text-xs opacity-60">{item.category.clone()}</p>
                </div>
                <button
                    class="btn btn-ghost btn-sm text-error"
                    on:click=move |_| on_delete.set(Some(delete_target.clone()))
                >
                    <Trash2 attr:class="h-4 w-4" />
                </button>
            </div>
        </div>
    }
}
