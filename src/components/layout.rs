//! Public site chrome: header, footer, floating WhatsApp button.

use leptos::prelude::*;

use crate::components::icons::{Mail, MapPin, Menu, MessageCircle, Phone, X, Zap};
use crate::forms::whatsapp_digits;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

pub const COMPANY_NAME: &str = "Voltra Engineering";
pub const COMPANY_WHATSAPP: &str = "+234 801 234 5678";
pub const COMPANY_EMAIL: &str = "hello@voltra-engineering.com";
pub const COMPANY_ADDRESS: &str = "14 Adeola Odeku Street, Victoria Island, Lagos";

/// `https://wa.me/...` deep link with an optional prefilled message.
pub fn whatsapp_url(number: &str, text: &str) -> String {
    let digits = whatsapp_digits(number);
    if text.is_empty() {
        format!("https://wa.me/{digits}")
    } else {
        format!(
            "https://wa.me/{digits}?text={}",
            js_sys::encode_uri_component(text)
        )
    }
}

const NAV_ITEMS: [(&str, AppRoute); 7] = [
    ("Home", AppRoute::Home),
    ("Services", AppRoute::Services),
    ("Store", AppRoute::Store),
    ("Gallery", AppRoute::Gallery),
    ("About", AppRoute::About),
    ("Contact", AppRoute::Contact),
    ("Get a Quote", AppRoute::Quote),
];

#[component]
fn Header() -> impl IntoView {
    let router = use_router();
    let (menu_open, set_menu_open) = signal(false);

    let nav_links = move || {
        let current = router.current_route().get();
        NAV_ITEMS
            .iter()
            .map(|(label, route)| {
                let class = if *route == current {
                    "btn btn-ghost btn-sm text-primary"
                } else {
                    "btn btn-ghost btn-sm"
                };
                view! {
                    <Link to=route.clone() class=class>
                        {*label}
                    </Link>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar bg-base-100 shadow-md fixed top-0 z-40">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl gap-2">
                    <Zap attr:class="h-6 w-6 text-primary" />
                    {COMPANY_NAME}
                </Link>
            </div>
            <nav class="flex-none hidden lg:flex gap-1">{nav_links}</nav>
            <button
                class="btn btn-ghost btn-square lg:hidden"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || {
                    if menu_open.get() {
                        view! { <X attr:class="h-6 w-6" /> }.into_any()
                    } else {
                        view! { <Menu attr:class="h-6 w-6" /> }.into_any()
                    }
                }}
            </button>
            <Show when=move || menu_open.get()>
                <nav
                    class="absolute top-full left-0 right-0 bg-base-100 shadow-lg flex flex-col p-4 gap-2 lg:hidden"
                    on:click=move |_| set_menu_open.set(false)
                >
                    {nav_links}
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer sm:footer-horizontal bg-neutral text-neutral-content p-10">
            <aside>
                <div class="flex items-center gap-2 text-lg font-bold">
                    <Zap attr:class="h-6 w-6 text-primary" />
                    {COMPANY_NAME}
                </div>
                <p class="max-w-xs opacity-70">
                    "Electrical, solar, security and smart-home installations for homes and businesses."
                </p>
            </aside>
            <nav>
                <h6 class="footer-title">"Explore"</h6>
                <Link to=AppRoute::Services class="link link-hover">"Services"</Link>
                <Link to=AppRoute::Store class="link link-hover">"Store"</Link>
                <Link to=AppRoute::Gallery class="link link-hover">"Project gallery"</Link>
                <Link to=AppRoute::Quote class="link link-hover">"Request a quote"</Link>
            </nav>
            <nav>
                <h6 class="footer-title">"Company"</h6>
                <Link to=AppRoute::About class="link link-hover">"About us"</Link>
                <Link to=AppRoute::Contact class="link link-hover">"Contact"</Link>
                <Link to=AppRoute::Terms class="link link-hover">"Terms of service"</Link>
                <Link to=AppRoute::Privacy class="link link-hover">"Privacy policy"</Link>
            </nav>
            <nav>
                <h6 class="footer-title">"Reach us"</h6>
                <span class="flex items-center gap-2">
                    <Phone attr:class="h-4 w-4" />
                    {COMPANY_WHATSAPP}
                </span>
                <span class="flex items-center gap-2">
                    <Mail attr:class="h-4 w-4" />
                    {COMPANY_EMAIL}
                </span>
                <span class="flex items-center gap-2">
                    <MapPin attr:class="h-4 w-4" />
                    {COMPANY_ADDRESS}
                </span>
            </nav>
        </footer>
    }
}

/// Fixed quick-chat button, present on every public page.
#[component]
fn WhatsAppFloat() -> impl IntoView {
    let href = whatsapp_url(COMPANY_WHATSAPP, "Hello! I'd like to ask about your services.");
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="btn btn-success btn-circle btn-lg fixed bottom-6 right-6 z-40 shadow-xl"
            aria-label="Chat on WhatsApp"
        >
            <MessageCircle attr:class="h-7 w-7" />
        </a>
    }
}

#[component]
pub fn PublicShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-base-100 font-sans">
            <Header />
            <main class="flex-1 pt-16">{children()}</main>
            <Footer />
            <WhatsAppFloat />
        </div>
    }
}
