//! Signal-driven slide rotation with autoplay and dot navigation.

use std::time::Duration;

use leptos::prelude::*;

/// Wrapping successor of a slide index.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Renders every slide up front and toggles visibility by class, so slide
/// content (links, images) is built once. Autoplay stops with the component.
#[component]
pub fn Carousel(
    slides: Vec<AnyView>,
    #[prop(optional)] interval: Option<Duration>,
) -> impl IntoView {
    let len = slides.len();
    let (current, set_current) = signal(0usize);

    if len > 1 {
        let interval = interval.unwrap_or(Duration::from_secs(6));
        if let Ok(handle) = set_interval_with_handle(
            move || {
                let _ = set_current.try_update(|i| *i = next_slide(*i, len));
            },
            interval,
        ) {
            on_cleanup(move || handle.clear());
        }
    }

    view! {
        <div class="relative overflow-hidden">
            {slides
                .into_iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <div class=move || {
                            if current.get() == index { "block" } else { "hidden" }
                        }>
                            {slide}
                        </div>
                    }
                })
                .collect_view()}
            <Show when={move || len > 1}>
                <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2 z-10">
                    {(0..len)
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if current.get() == index {
                                            "w-3 h-3 rounded-full bg-primary"
                                        } else {
                                            "w-3 h-3 rounded-full bg-base-100/40 hover:bg-base-100/70"
                                        }
                                    }
                                    aria-label=format!("Go to slide {}", index + 1)
                                    on:click=move |_| set_current.set(index)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_wraps_back_to_the_first_slide() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(1, 3), 2);
        assert_eq!(next_slide(2, 3), 0);
    }

    #[test]
    fn single_slide_stays_put() {
        assert_eq!(next_slide(0, 1), 0);
    }

    #[test]
    fn empty_carousel_never_indexes() {
        assert_eq!(next_slide(0, 0), 0);
    }
}
