//! Public services page: active services fetched from the backend, each with
//! its own WhatsApp contact line.

use leptos::prelude::*;

use crate::api;
use crate::components::feedback::{EmptyState, FetchError, Spinner};
use crate::components::icons::{CheckCircle, MessageCircle, service_icon};
use crate::components::layout::whatsapp_url;
use crate::listing::{self, Collection};
use crate::models::Service;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let greeting = format!(
        "Hello {}! I'm interested in your {} service.",
        service.whatsapp_contact_name, service.name
    );
    let chat_href = whatsapp_url(&service.whatsapp_number, &greeting);
    let figure_image = service.image.clone();
    let figure_alt = service.name.clone();

    view! {
        <div class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow">
            <Show when={
                let has_image = !service.image.is_empty();
                move || has_image
            }>
                <figure class="aspect-video bg-base-200">
                    <img
                        src=figure_image.clone()
                        alt=figure_alt.clone()
                        class="w-full h-full object-cover"
                    />
                </figure>
            </Show>
            <div class="card-body">
                <div class="text-primary">{service_icon(&service.icon)}</div>
                <h3 class="card-title">{service.name.clone()}</h3>
                <p class="opacity-70">{service.description.clone()}</p>
                <ul class="space-y-2 my-2">
                    {service
                        .features
                        .iter()
                        .map(|feature| view! {
                            <li class="flex items-center gap-2 text-sm">
                                <CheckCircle attr:class="h-4 w-4 text-success shrink-0" />
                                {feature.clone()}
                            </li>
                        })
                        .collect_view()}
                </ul>
                <div class="card-actions justify-end">
                    <a
                        href=chat_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-success btn-sm gap-2"
                    >
                        <MessageCircle attr:class="h-4 w-4" />
                        "Chat with us"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let (services, set_services) = signal(Collection::<Service>::Loading);

    // Public endpoint: the server already filters to active services.
    listing::load(set_services, api::services::get_all());

    view! {
        <section class="hero bg-neutral text-neutral-content py-20">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <span class="badge badge-primary mb-4">"What We Do"</span>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Our Services"</h1>
                    <p class="text-lg opacity-80">
                        "End-to-end engineering services, from first site survey to final
                        commissioning and maintenance."
                    </p>
                </div>
            </div>
        </section>

        <section class="py-16 bg-base-200">
            <div class="max-w-7xl mx-auto px-4">
                {move || {
                    services.with(|state| match state {
                        Collection::Loading => view! { <Spinner /> }.into_any(),
                        Collection::Failed(msg) => {
                            view! { <FetchError message=msg.clone() /> }.into_any()
                        }
                        Collection::Ready(_) if state.is_empty() => {
                            view! { <EmptyState message="Our service list is being updated. Check back soon." /> }
                                .into_any()
                        }
                        Collection::Ready(items) => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {items
                                    .iter()
                                    .map(|service| view! { <ServiceCard service=service.clone() /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                    })
                }}
            </div>
        </section>

        <section class="py-16 bg-base-100 text-center">
            <h2 class="text-3xl font-bold mb-4">"Ready to Start Your Project?"</h2>
            <p class="max-w-xl mx-auto opacity-70 mb-8">
                "Tell us what you need and we'll put together a detailed, no-obligation estimate."
            </p>
            <Link to=AppRoute::Quote class="btn btn-primary btn-lg">
                "Get a Free Quote"
            </Link>
        </section>
    }
}
