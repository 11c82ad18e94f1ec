//! Category management.
//!
//! Unlike products and gallery items, every mutation here refetches the
//! list: category changes cascade into products server-side, so the local
//! copy is not trusted after a write.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, FetchError, Notice, NoticeBanner, Spinner};
use crate::components::icons::{Download, Plus, Tags, Trash2};
use crate::listing::{self, Collection};
use crate::models::Category;

#[component]
pub fn CategoryManagementPage() -> impl IntoView {
    let (categories, set_categories) = signal(Collection::<Category>::Loading);
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (new_name, set_new_name) = signal(String::new());
    let (creating, set_creating) = signal(false);
    let (pending_delete, set_pending_delete) = signal(Option::<Category>::None);
    let (deleting, set_deleting) = signal(false);
    let (seeding, set_seeding) = signal(false);

    listing::load(set_categories, api::categories::get_all());

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        if name.trim().is_empty() || creating.get_untracked() {
            return;
        }
        set_creating.set(true);
        spawn_local(async move {
            match api::categories::create(name.trim()).await {
                Ok(created) => {
                    let _ = set_notice.try_set(Some(Notice::Success(format!(
                        "Added \"{}\"",
                        created.name
                    ))));
                    let _ = set_new_name.try_set(String::new());
                    listing::load(set_categories, api::categories::get_all());
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Failed to add category: {err}"
                    ))));
                }
            }
            let _ = set_creating.try_set(false);
        });
    };

    let confirm_delete = move |()| {
        let Some(category) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::categories::delete(&category.id).await {
                Ok(()) => {
                    let _ = set_notice.try_set(Some(Notice::Success(format!(
                        "Deleted \"{}\"",
                        category.name
                    ))));
                    listing::load(set_categories, api::categories::get_all());
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Failed to delete category: {err}"
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
            match api::categories::seed().await {
                Ok(()) => listing::load(set_categories, api::categories::get_all()),
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
        <div class="max-w-3xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Categories"</h1>
                <p class="opacity-60">"Product categories used by the store filter."</p>
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            <form class="flex gap-3" on:submit=on_create>
                <input
                    type="text"
                    placeholder="New category name"
                    class="input input-bordered flex-1"
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    prop:value=new_name
                />
                <button type="submit" class="btn btn-primary gap-2" disabled=move || creating.get()>
                    <Plus attr:class="h-4 w-4" />
                    {move || if creating.get() { "Adding..." } else { "Add" }}
                </button>
            </form>

            {move || {
                categories.with(|state| match state {
                    Collection::Loading => view! { <Spinner /> }.into_any(),
                    Collection::Failed(msg) => {
                        view! { <FetchError message=msg.clone() /> }.into_any()
                    }
                    Collection::Ready(_) if state.is_empty() => view! {
                        <EmptyState message="No categories yet.">
                            <button
                                class="btn btn-outline gap-2"
                                disabled=move || seeding.get()
                                on:click=seed
                            >
                                <Download attr:class="h-4 w-4" />
                                {move || if seeding.get() { "Loading samples..." } else { "Load sample categories" }}
                            </button>
                        </EmptyState>
                    }
                    .into_any(),
                    Collection::Ready(items) => view! {
                        <ul class="bg-base-100 rounded-box shadow divide-y divide-base-200">
                            {items
                                .iter()
                                .map(|category| {
                                    let target = category.clone();
                                    view! {
                                        <li class="flex items-center gap-3 p-4">
                                            <Tags attr:class="h-4 w-4 text-primary" />
                                            <span class="flex-1 font-medium">
                                                {category.name.clone()}
                                            </span>
                                            <button
                                                class="btn btn-ghost btn-sm text-error"
                                                on:click=move |_| {
                                                    set_pending_delete.set(Some(target.clone()))
                                                }
                                            >
                                                <Trash2 attr:class="h-4 w-4" />
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                })
            }}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title=Signal::derive(|| "Delete category".to_string())
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|c| {
                            format!(
                                "Delete \"{}\"? Products in this category are deleted with it.",
                                c.name
                            )
                        })
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
