//! Router service over the History API.
//!
//! All `window.history` access lives here. Navigation runs a
//! listen -> guard -> apply flow, with the session status injected as a
//! signal so the router stays decoupled from the auth module.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::auth::SessionStatus;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<SessionStatus>,
}

impl RouterService {
    fn new(session: Signal<SessionStatus>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);
        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, to: AppRoute) {
        self.navigate_to_route(to, true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let session = self.session.get_untracked();

        // A route that needs auth is blocked only for a resolved anonymous
        // session. While the startup identity check is Pending the admin
        // shell renders a spinner instead.
        if target.requires_auth() && session == SessionStatus::Anonymous {
            web_sys::console::log_1(&"[Router] Access denied, redirecting to login.".into());
            let redirect = AppRoute::auth_failure_redirect();
            self.apply(redirect, use_push);
            return;
        }

        if target.should_redirect_when_authenticated() && session == SessionStatus::Authenticated {
            let redirect = AppRoute::auth_success_redirect();
            self.apply(redirect, use_push);
            return;
        }

        self.apply(target, use_push);
    }

    fn apply(&self, route: AppRoute, use_push: bool) {
        let path = route.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(route);
    }

    /// Back/forward buttons run the same guard as programmatic navigation.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            if target.requires_auth() && session.get_untracked() == SessionStatus::Anonymous {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app lifetime.
        closure.forget();
    }

    /// Redirects when the session status changes out from under the current
    /// route: logout on an admin page, login while on the login page, or a
    /// pending startup check resolving to anonymous.
    fn setup_session_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;

        Effect::new(move |_| {
            let status = session.get();
            let route = current_route.get_untracked();

            match status {
                SessionStatus::Pending => {}
                SessionStatus::Authenticated => {
                    if route.should_redirect_when_authenticated() {
                        let redirect = AppRoute::auth_success_redirect();
                        push_history_state(&redirect.to_path());
                        set_route.set(redirect);
                    }
                }
                SessionStatus::Anonymous => {
                    if route.requires_auth() {
                        web_sys::console::log_1(
                            &"[Router] Session ended, redirecting to login.".into(),
                        );
                        let redirect = AppRoute::auth_failure_redirect();
                        push_history_state(&redirect.to_path());
                        set_route.set(redirect);
                    }
                }
            }
        });
    }
}

fn provide_router(session: Signal<SessionStatus>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    router.setup_session_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Navigation closure for event handlers.
pub fn use_navigate() -> impl Fn(AppRoute) + Clone {
    let router = use_router();
    move |to: AppRoute| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

#[component]
pub fn Router(
    /// Session status signal injected into the guard.
    session: Signal<SessionStatus>,
    children: Children,
) -> impl IntoView {
    provide_router(session);
    children()
}

#[component]
pub fn RouterOutlet(
    /// Maps the current route to its view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// An anchor that keeps real hrefs (middle-click still works) but routes
/// client-side on plain clicks.
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
