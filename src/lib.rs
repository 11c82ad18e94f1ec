//! Voltra Engineering storefront.
//!
//! Context-driven architecture, kept deliberately flat:
//! - `web::route`: route table (domain model, DOM-free)
//! - `web::router`: router service (history API engine + auth guard)
//! - `auth`: session state management
//! - `api`: REST facade, one module per backend resource
//! - `listing`: the shared fetch-once / filter-locally collection machine
//! - `components`: UI layer

mod api;
mod auth;
mod forms;
mod listing;
mod models;

mod components {
    pub mod carousel;
    pub mod confirm_dialog;
    pub mod feedback;
    pub mod icons;
    pub mod layout;

    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod home;
    pub mod legal;
    pub mod quote;
    pub mod services;
    pub mod store;

    pub mod admin {
        pub mod categories;
        pub mod dashboard;
        pub mod gallery_manager;
        pub mod layout;
        pub mod login;
        pub mod product_form;
        pub mod product_list;
        pub mod service_form;
        pub mod service_list;
        pub mod settings;
    }
}

// Native web API wrappers: routing is hand-rolled over the History API so the
// guard logic stays a plain testable enum instead of living in view markup.
pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::about::AboutPage;
use crate::components::admin::categories::CategoryManagementPage;
use crate::components::admin::dashboard::AdminDashboardPage;
use crate::components::admin::gallery_manager::GalleryManagementPage;
use crate::components::admin::layout::AdminShell;
use crate::components::admin::login::AdminLoginPage;
use crate::components::admin::product_form::ProductFormPage;
use crate::components::admin::product_list::ProductListPage;
use crate::components::admin::service_form::ServiceFormPage;
use crate::components::admin::service_list::ServiceManagementPage;
use crate::components::admin::settings::AdminSettingsPage;
use crate::components::contact::ContactPage;
use crate::components::gallery::GalleryPage;
use crate::components::home::HomePage;
use crate::components::layout::PublicShell;
use crate::components::legal::{PrivacyPage, TermsPage};
use crate::components::quote::QuotePage;
use crate::components::services::ServicesPage;
use crate::components::store::StorePage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

fn public(inner: AnyView) -> AnyView {
    view! { <PublicShell>{inner}</PublicShell> }.into_any()
}

// The admin shell re-renders its children when the session resolves, so it
// takes them as a closure rather than a one-shot view.
fn admin(inner: impl Fn() -> AnyView + Send + Sync + 'static) -> AnyView {
    view! { <AdminShell>{inner()}</AdminShell> }.into_any()
}

/// Maps the current route to its view. Public pages get the marketing chrome,
/// admin pages the guarded shell.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => public(view! { <HomePage /> }.into_any()),
        AppRoute::Services => public(view! { <ServicesPage /> }.into_any()),
        AppRoute::Store => public(view! { <StorePage /> }.into_any()),
        AppRoute::Gallery => public(view! { <GalleryPage /> }.into_any()),
        AppRoute::About => public(view! { <AboutPage /> }.into_any()),
        AppRoute::Contact => public(view! { <ContactPage /> }.into_any()),
        AppRoute::Quote => public(view! { <QuotePage /> }.into_any()),
        AppRoute::Terms => public(view! { <TermsPage /> }.into_any()),
        AppRoute::Privacy => public(view! { <PrivacyPage /> }.into_any()),
        AppRoute::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
        AppRoute::AdminDashboard => admin(|| view! { <AdminDashboardPage /> }.into_any()),
        AppRoute::AdminProducts => admin(|| view! { <ProductListPage /> }.into_any()),
        AppRoute::AdminProductNew => {
            admin(|| view! { <ProductFormPage editing=None /> }.into_any())
        }
        AppRoute::AdminProductEdit(id) => admin(move || {
            view! { <ProductFormPage editing=Some(id.clone()) /> }.into_any()
        }),
        AppRoute::AdminServices => admin(|| view! { <ServiceManagementPage /> }.into_any()),
        AppRoute::AdminServiceNew => {
            admin(|| view! { <ServiceFormPage editing=None /> }.into_any())
        }
        AppRoute::AdminServiceEdit(id) => admin(move || {
            view! { <ServiceFormPage editing=Some(id.clone()) /> }.into_any()
        }),
        AppRoute::AdminCategories => admin(|| view! { <CategoryManagementPage /> }.into_any()),
        AppRoute::AdminGallery => admin(|| view! { <GalleryManagementPage /> }.into_any()),
        AppRoute::AdminSettings => admin(|| view! { <AdminSettingsPage /> }.into_any()),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session store: constructed once here, shared through context, reset to
    // its empty state on logout.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // Kick off the startup identity check (token in storage -> /auth/me).
    init_auth(&auth_ctx);

    let session = auth::session_status_signal(&auth_ctx);

    view! {
        <Router session=session>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
