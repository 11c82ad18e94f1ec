//! Service create/edit form.
//!
//! Submits as JSON unless a new image file was picked, in which case the
//! whole payload goes out as multipart so the file rides along.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Payload};
use crate::components::feedback::{Notice, NoticeBanner, Spinner};
use crate::components::icons::{ArrowLeft, Plus, Upload, X, service_icon};
use crate::forms::{clean_features, validate_service};
use crate::models::ServicePayload;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};

/// Symbolic icon names the backend stores; resolved by `service_icon`.
const ICON_OPTIONS: [&str; 7] = ["Zap", "Shield", "Sun", "Home", "Fence", "Wrench", "Settings"];

type FeatureRow = (usize, RwSignal<String>);

#[component]
pub fn ServiceFormPage(editing: Option<String>) -> impl IntoView {
    let is_edit = editing.is_some();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (icon, set_icon) = signal("Zap".to_string());
    let (whatsapp_number, set_whatsapp_number) = signal(String::new());
    let (contact_name, set_contact_name) = signal(String::new());
    let (is_active, set_is_active) = signal(true);
    let (existing_image, set_existing_image) = signal(String::new());
    // A freshly picked file replaces the stored image on save.
    let (new_image, set_new_image) = signal_local(Option::<(String, web_sys::File)>::None);

    // Feature rows are keyed so typing in one row never re-renders the list.
    let next_key = StoredValue::new(1usize);
    let (features, set_features) = signal(vec![(0usize, RwSignal::new(String::new()))]);

    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (loading, set_loading) = signal(is_edit);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);

    let add_feature = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        set_features.update(|rows| rows.push((key, RwSignal::new(String::new()))));
    };

    let set_feature_rows = move |values: Vec<String>| {
        let mut rows: Vec<FeatureRow> = Vec::new();
        let mut key = next_key.get_value();
        for value in values {
            rows.push((key, RwSignal::new(value)));
            key += 1;
        }
        if rows.is_empty() {
            rows.push((key, RwSignal::new(String::new())));
            key += 1;
        }
        next_key.set_value(key);
        set_features.set(rows);
    };

    if let Some(id) = editing.clone() {
        spawn_local(async move {
            match api::services::get_by_id(&id).await {
                Ok(service) => {
                    let _ = set_name.try_set(service.name);
                    let _ = set_description.try_set(service.description);
                    if !service.icon.is_empty() {
                        let _ = set_icon.try_set(service.icon);
                    }
                    let _ = set_whatsapp_number.try_set(service.whatsapp_number);
                    let _ = set_contact_name.try_set(service.whatsapp_contact_name);
                    let _ = set_is_active.try_set(service.is_active);
                    let _ = set_existing_image.try_set(service.image);
                    set_feature_rows(service.features);
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
    let on_file = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Ok(preview) = web_sys::Url::create_object_url_with_blob(&file) {
            set_new_image.set(Some((preview, file)));
        }
        input.set_value("");
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }

            if let Err(msg) =
                validate_service(&name.get_untracked(), &whatsapp_number.get_untracked())
            {
                set_notice.set(Some(Notice::Error(msg)));
                return;
            }

            let feature_values: Vec<String> = features
                .get_untracked()
                .iter()
                .map(|(_, row)| row.get_untracked())
                .collect();
            let payload = ServicePayload {
                name: name.get_untracked(),
                description: description.get_untracked(),
                icon: icon.get_untracked(),
                image: existing_image.get_untracked(),
                features: clean_features(&feature_values),
                whatsapp_number: whatsapp_number.get_untracked(),
                whatsapp_contact_name: contact_name.get_untracked(),
                is_active: is_active.get_untracked(),
            };

            let body = match new_image.get_untracked() {
                Some((_, file)) => match api::service_form_data(&payload, &file) {
                    Ok(form) => Payload::Multipart(form),
                    Err(err) => {
                        set_notice.set(Some(Notice::Error(err.to_string())));
                        return;
                    }
                },
                None => match serde_json::to_value(&payload) {
                    Ok(json) => Payload::Json(json),
                    Err(err) => {
                        set_notice.set(Some(Notice::Error(err.to_string())));
                        return;
                    }
                },
            };

            set_busy.set(true);
            let id = editing.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = match &id {
                    Some(id) => api::services::update(id, body).await,
                    None => api::services::create(body).await,
                };
                match result {
                    Ok(saved) => {
                        if id.is_some() {
                            let _ = set_notice.try_set(Some(Notice::Success(format!(
                                "\"{}\" updated",
                                saved.name
                            ))));
                            let _ = set_existing_image.try_set(saved.image);
                            let _ = set_new_image.try_set(None);
                        } else {
                            let _ = set_notice.try_set(Some(Notice::Success(format!(
                                "\"{}\" created",
                                saved.name
                            ))));
                            set_timeout(
                                move || navigate(AppRoute::AdminServices),
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
                <Link to=AppRoute::AdminServices class="btn btn-ghost btn-sm gap-2">
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Services"
                </Link>
                <h1 class="text-3xl font-bold">
                    {if is_edit { "Edit Service" } else { "New Service" }}
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
                            <label class="label" for="service-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="service-name"
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="service-icon">
                                <span class="label-text">"Icon"</span>
                            </label>
                            <div class="flex items-center gap-3">
                                <select
                                    id="service-icon"
                                    class="select select-bordered flex-1"
                                    on:change=move |ev| set_icon.set(event_target_value(&ev))
                                    prop:value=icon
                                >
                                    {ICON_OPTIONS
                                        .iter()
                                        .map(|opt| view! { <option value=*opt>{*opt}</option> })
                                        .collect_view()}
                                </select>
                                <div class="text-primary">
                                    {move || service_icon(&icon.get())}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="service-description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="service-description"
                            rows="3"
                            class="textarea textarea-bordered w-full"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=description
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <span class="label-text mb-2">"Features"</span>
                        <div class="space-y-2">
                            <For
                                each=move || features.get()
                                key=|(key, _)| *key
                                children=move |(key, row)| {
                                    view! {
                                        <div class="flex gap-2">
                                            <input
                                                type="text"
                                                class="input input-bordered input-sm flex-1"
                                                placeholder="e.g. 24/7 monitoring"
                                                on:input=move |ev| row.set(event_target_value(&ev))
                                                prop:value=row
                                            />
                                            <button
                                                type="button"
                                                class="btn btn-ghost btn-sm text-error"
                                                on:click=move |_| {
                                                    set_features.update(|rows| {
                                                        if rows.len() > 1 {
                                                            rows.retain(|(k, _)| *k != key);
                                                        }
                                                    })
                                                }
                                            >
                                                <X attr:class="h-4 w-4" />
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <button
                            type="button"
                            class="btn btn-ghost btn-sm gap-2 self-start mt-2"
                            on:click=add_feature
                        >
                            <Plus attr:class="h-4 w-4" />
                            "Add feature"
                        </button>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="service-whatsapp">
                                <span class="label-text">"WhatsApp number"</span>
                            </label>
                            <input
                                id="service-whatsapp"
                                type="tel"
                                placeholder="+234 801 234 5678"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_whatsapp_number.set(event_target_value(&ev))
                                prop:value=whatsapp_number
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="service-contact">
                                <span class="label-text">"Contact name"</span>
                            </label>
                            <input
                                id="service-contact"
                                type="text"
                                placeholder="Sales team"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_contact_name.set(event_target_value(&ev))
                                prop:value=contact_name
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <span class="label-text mb-2">"Image"</span>
                        <div class="flex items-center gap-4">
                            {move || {
                                let preview = new_image
                                    .with(|n| n.as_ref().map(|(url, _)| url.clone()))
                                    .or_else(|| {
                                        let url = existing_image.get();
                                        (!url.is_empty()).then_some(url)
                                    });
                                preview.map(|url| view! {
                                    <img
                                        src=url
                                        class="w-28 h-20 object-cover rounded border border-base-300"
                                    />
                                })
                            }}
                            <button
                                type="button"
                                class="btn btn-outline btn-sm gap-2"
                                on:click=move |_| {
                                    if let Some(input) = file_input.get_untracked() {
                                        input.click();
                                    }
                                }
                            >
                                <Upload attr:class="h-4 w-4" />
                                "Choose image"
                            </button>
                        </div>
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            node_ref=file_input
                            on:change=on_file
                        />
                    </div>

                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="toggle toggle-success"
                            prop:checked=is_active
                            on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"Visible on the public services page"</span>
                    </label>

                    <div class="flex justify-end">
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            <Show
                                when=move || busy.get()
                                fallback=move || if is_edit { "Save Changes" } else { "Create Service" }
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
