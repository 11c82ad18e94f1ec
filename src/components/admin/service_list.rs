//! Service management list (admin view, includes inactive services).
//!
//! The active toggle is optimistic in shape but not in timing: the flag is
//! flipped locally only after the server accepts the partial update.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Payload};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, FetchError, Notice, NoticeBanner, Spinner};
use crate::components::icons::{Download, Edit2, Plus, Trash2, service_icon};
use crate::listing::{self, Collection};
use crate::models::Service;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn ServiceManagementPage() -> impl IntoView {
    let (services, set_services) = signal(Collection::<Service>::Loading);
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (pending_delete, set_pending_delete) = signal(Option::<Service>::None);
    let (deleting, set_deleting) = signal(false);
    let (seeding, set_seeding) = signal(false);

    listing::load(set_services, api::services::get_all_admin());

    let toggle_active = move |service: Service| {
        let next = !service.is_active;
        spawn_local(async move {
            let body = serde_json::json!({ "isActive": next });
            match api::services::update(&service.id, Payload::Json(body)).await {
                Ok(_) => {
                    let _ = set_services.try_update(|c| {
                        c.update_where(|s| s.id == service.id, |s| s.is_active = next);
                    });
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Failed to update service: {err}"
                    ))));
                }
            }
        });
    };

    let confirm_delete = move |()| {
        let Some(service) = pending_delete.get_untracked() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::services::delete(&service.id).await {
                Ok(()) => {
                    let _ = set_services.try_update(|c| c.retain(|s| s.id != service.id));
                    let _ = set_notice.try_set(Some(Notice::Success(format!(
                        "Deleted \"{}\"",
                        service.name
                    ))));
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Failed to delete service: {err}"
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
            match api::services::seed().await {
                Ok(()) => listing::load(set_services, api::services::get_all_admin()),
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
        <div class="max-w-5xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Services"</h1>
                    <p class="opacity-60">"Inactive services stay hidden from the public page."</p>
                </div>
                <Link to=AppRoute::AdminServiceNew class="btn btn-primary gap-2">
                    <Plus attr:class="h-4 w-4" />
                    "New Service"
                </Link>
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            {move || {
                services.with(|state| match state {
                    Collection::Loading => view! { <Spinner /> }.into_any(),
                    Collection::Failed(msg) => {
                        view! { <FetchError message=msg.clone() /> }.into_any()
                    }
                    Collection::Ready(_) if state.is_empty() => view! {
                        <EmptyState message="No services yet.">
                            <button
                                class="btn btn-outline gap-2"
                                disabled=move || seeding.get()
                                on:click=seed
                            >
                                <Download attr:class="h-4 w-4" />
                                {move || if seeding.get() { "Loading samples..." } else { "Load sample services" }}
                            </button>
                        </EmptyState>
                    }
                    .into_any(),
                    Collection::Ready(items) => view! {
                        <div class="space-y-3">
                            {items
                                .iter()
                                .map(|service| {
                                    let row = service.clone();
                                    view! {
                                        <ServiceRow
                                            service=row
                                            on_toggle=toggle_active
                                            on_delete=set_pending_delete
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                })
            }}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title=Signal::derive(|| "Delete service".to_string())
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|s| format!("Delete \"{}\"? This cannot be undone.", s.name))
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
fn ServiceRow(
    service: Service,
    on_toggle: impl Fn(Service) + Copy + 'static,
    on_delete: WriteSignal<Option<Service>>,
) -> impl IntoView {
    let toggle_target = service.clone();
    let delete_target = service.clone();
    let is_active = service.is_active;

    view! {
        <div class="card bg-base-100 shadow flex-row items-center gap-4 p-4">
            <div class="text-primary shrink-0">{service_icon(&service.icon)}</div>
            <div class="flex-1 min-w-0">
                <div class="flex items-center gap-2">
                    <h3 class="font-semibold truncate">{service.name.clone()}</h3>
                    <span class=if is_active {
                        "badge badge-success badge-sm"
                    } else {
                        "badge badge-ghost badge-sm"
                    }>
                        {if is_active { "Active" } else { "Hidden" }}
                    </span>
                </div>
                <p class="text-sm opacity-60 truncate">{service.description.clone()}</p>
            </div>
            <input
                type="checkbox"
                class="toggle toggle-success"
                prop:checked=is_active
                on:change=move |_| on_toggle(toggle_target.clone())
            />
            <Link
                to=AppRoute::AdminServiceEdit(service.id.clone())
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
    }
}
