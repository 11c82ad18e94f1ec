//! Admin login screen. On success the router's session listener moves the
//! user to the dashboard; this component only drives the credentials call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{self, use_auth};
use crate::components::icons::Lock;
use crate::components::layout::COMPANY_NAME;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let ctx = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_error_msg.set(None);
        set_busy.set(true);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        spawn_local(async move {
            if let Err(msg) = auth::login(&ctx, user, pass).await {
                let _ = set_error_msg.try_set(Some(msg));
            }
            let _ = set_busy.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 px-4">
            <div class="card bg-base-100 shadow-xl w-full max-w-sm">
                <div class="card-body">
                    <div class="text-center mb-4">
                        <Lock attr:class="h-10 w-10 text-primary mx-auto mb-2" />
                        <h1 class="text-2xl font-bold">"Admin Login"</h1>
                        <p class="text-sm opacity-60">{COMPANY_NAME}</p>
                    </div>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form class="space-y-4" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="login-username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="login-username"
                                type="text"
                                required
                                autocomplete="username"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="login-password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="login-password"
                                type="password"
                                required
                                autocomplete="current-password"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled=move || busy.get()
                        >
                            <Show when=move || busy.get() fallback=|| "Sign In">
                                <span class="loading loading-spinner loading-sm"></span>
                                "Signing in..."
                            </Show>
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
