//! Account settings: password change for the signed-in admin.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::use_auth;
use crate::components::feedback::{Notice, NoticeBanner};
use crate::components::icons::Lock;
use crate::forms::validate_password_change;

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let ctx = use_auth();

    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (busy, set_busy) = signal(false);

    let username = move || {
        ctx.state
            .with(|s| s.admin.as_ref().map(|a| a.username.clone()))
            .unwrap_or_default()
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        if let Err(msg) = validate_password_change(
            &current.get_untracked(),
            &new_password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            set_notice.set(Some(Notice::Error(msg)));
            return;
        }

        set_busy.set(true);
        let old = current.get_untracked();
        let new = new_password.get_untracked();
        spawn_local(async move {
            match api::auth::change_password(&old, &new).await {
                Ok(()) => {
                    let _ = set_notice.try_set(Some(Notice::Success(
                        "Password changed".to_string(),
                    )));
                    let _ = set_current.try_set(String::new());
                    let _ = set_new_password.try_set(String::new());
                    let _ = set_confirm.try_set(String::new());
                }
                Err(err) if err.is_unauthorized() => {
                    let _ = set_notice.try_set(Some(Notice::Error(
                        "Current password is incorrect".to_string(),
                    )));
                }
                Err(err) => {
                    let _ = set_notice.try_set(Some(Notice::Error(format!(
                        "Password change failed: {err}"
                    ))));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="opacity-60">
                    "Account settings for " <span class="font-medium">{username}</span>
                </p>
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            <form class="card bg-base-100 shadow p-6 space-y-4" on:submit=on_submit>
                <h2 class="font-semibold flex items-center gap-2">
                    <Lock attr:class="h-4 w-4" />
                    "Change password"
                </h2>
                <div class="form-control">
                    <label class="label" for="settings-current">
                        <span class="label-text">"Current password"</span>
                    </label>
                    <input
                        id="settings-current"
                        type="password"
                        autocomplete="current-password"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_current.set(event_target_value(&ev))
                        prop:value=current
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="settings-new">
                        <span class="label-text">"New password"</span>
                    </label>
                    <input
                        id="settings-new"
                        type="password"
                        autocomplete="new-password"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        prop:value=new_password
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="settings-confirm">
                        <span class="label-text">"Confirm new password"</span>
                    </label>
                    <input
                        id="settings-confirm"
                        type="password"
                        autocomplete="new-password"
                        class="input input-bordered w-full"
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        prop:value=confirm
                    />
                </div>
                <div class="flex justify-end">
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        <Show when=move || busy.get() fallback=|| "Update Password">
                            <span class="loading loading-spinner loading-sm"></span>
                            "Updating..."
                        </Show>
                    </button>
                </div>
            </form>
        </div>
    }
}
