//! Guarded admin chrome. Routing already blocks anonymous sessions; this
//! shell covers the window where the startup identity check is still
//! pending by rendering a spinner instead of admin content.

use leptos::prelude::*;

use crate::auth::{self, SessionStatus, use_auth};
use crate::components::icons::{
    ImageIcon, LayoutDashboard, LogOut, Package, SettingsIcon, Tags, Wrench,
};
use crate::components::layout::COMPANY_NAME;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

#[component]
fn SidebarLink(
    to: AppRoute,
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();
    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.clone());
    };

    view! {
        <li>
            <a
                href=href
                class=move || if active.get() { "active font-medium" } else { "" }
                on:click=on_click
            >
                {children()}
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn AdminShell(children: ChildrenFn) -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();
    let current = router.current_route();
    let session = auth::session_status_signal(&ctx);

    let username = move || {
        ctx.state
            .with(|s| s.admin.as_ref().map(|a| a.username.clone()))
            .unwrap_or_default()
    };

    let section_active = move |route: AppRoute| {
        Signal::derive(move || current.with(|c| c.admin_section() == Some(route.clone())))
    };

    view! {
        <Show
            when=move || session.get() == SessionStatus::Authenticated
            // Pending: identity check in flight. Anonymous: the router's
            // session listener is about to swap in the login page; the
            // spinner avoids a flash of admin chrome either way.
            fallback=|| view! {
                <div class="min-h-screen flex items-center justify-center bg-base-200">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="drawer lg:drawer-open min-h-screen bg-base-200">
                <input id="admin-drawer" type="checkbox" class="drawer-toggle" />
                <div class="drawer-content flex flex-col">
                    <header class="navbar bg-base-100 shadow-sm lg:hidden">
                        <label for="admin-drawer" class="btn btn-ghost drawer-button">"☰"</label>
                        <span class="font-bold">{COMPANY_NAME}" Admin"</span>
                    </header>
                    <main class="flex-1 p-6">{children()}</main>
                </div>
                <div class="drawer-side">
                    <label for="admin-drawer" class="drawer-overlay"></label>
                    <aside class="w-64 min-h-full bg-base-100 flex flex-col">
                        <div class="p-4 border-b border-base-300">
                            <Link to=AppRoute::Home class="font-bold text-lg">
                                {COMPANY_NAME}
                            </Link>
                            <p class="text-xs opacity-60">"Admin Panel"</p>
                        </div>
                        <ul class="menu p-4 gap-1 flex-1">
                            <SidebarLink
                                to=AppRoute::AdminDashboard
                                label="Dashboard"
                                active=section_active(AppRoute::AdminDashboard)
                            >
                                <LayoutDashboard attr:class="h-4 w-4" />
                            </SidebarLink>
                            <SidebarLink
                                to=AppRoute::AdminProducts
                                label="Products"
                                active=section_active(AppRoute::AdminProducts)
                            >
                                <Package attr:class="h-4 w-4" />
                            </SidebarLink>
                            <SidebarLink
                                to=AppRoute::AdminServices
                                label="Services"
                                active=section_active(AppRoute::AdminServices)
                            >
                                <Wrench attr:class="h-4 w-4" />
                            </SidebarLink>
                            <SidebarLink
                                to=AppRoute::AdminGallery
                                label="Gallery"
                                active=section_active(AppRoute::AdminGallery)
                            >
                                <ImageIcon attr:class="h-4 w-4" />
                            </SidebarLink>
                            <SidebarLink
                                to=AppRoute::AdminCategories
                                label="Categories"
                                active=section_active(AppRoute::AdminCategories)
                            >
                                <Tags attr:class="h-4 w-4" />
                            </SidebarLink>
                            <SidebarLink
                                to=AppRoute::AdminSettings
                                label="Settings"
                                active=section_active(AppRoute::AdminSettings)
                            >
                                <SettingsIcon attr:class="h-4 w-4" />
                            </SidebarLink>
                        </ul>
                        <div class="p-4 border-t border-base-300 space-y-2">
                            <p class="text-sm opacity-70 truncate">
                                "Signed in as " <span class="font-medium">{username}</span>
                            </p>
                            <button
                                class="btn btn-ghost btn-sm w-full justify-start gap-2"
                                on:click=move |_| auth::logout(&ctx)
                            >
                                <LogOut attr:class="h-4 w-4" />
                                "Logout"
                            </button>
                        </div>
                    </aside>
                </div>
            </div>
        </Show>
    }
}
