//! Transient banners and loading states shared across screens.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::icons::{AlertCircle, CheckCircle};

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Arms the success auto-clear and invalidates stale timeouts: each notice
/// change bumps the generation, so a timeout armed by an earlier success
/// cannot clear a notice (an error, say) raised inside its window.
#[derive(Debug, Default)]
pub struct AutoClear {
    generation: u64,
}

impl AutoClear {
    /// Records a notice change; returns an arming token only for notices
    /// that should self-clear.
    pub fn observe(&mut self, notice: &Option<Notice>) -> Option<u64> {
        self.generation += 1;
        match notice {
            Some(Notice::Success(_)) => Some(self.generation),
            _ => None,
        }
    }

    pub fn still_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

/// Inline banner near the action it reports on. Success notices self-clear
/// after 3 seconds; errors persist until manually dismissed.
#[component]
pub fn NoticeBanner(
    notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
) -> impl IntoView {
    let auto_clear = StoredValue::new(AutoClear::default());

    Effect::new(move |_| {
        let current = notice.get();
        let token = auto_clear
            .try_update_value(|a| a.observe(&current))
            .flatten();
        if let Some(token) = token {
            set_timeout(
                move || {
                    let current_still = auto_clear
                        .try_with_value(|a| a.still_current(token))
                        .unwrap_or(false);
                    if current_still {
                        let _ = set_notice.try_set(None);
                    }
                },
                Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class=move || {
                if notice.get().is_some_and(|n| n.is_error()) {
                    "alert alert-error mb-6"
                } else {
                    "alert alert-success mb-6"
                }
            }>
                {move || {
                    if notice.get().is_some_and(|n| n.is_error()) {
                        view! { <AlertCircle attr:class="h-5 w-5 shrink-0" /> }.into_any()
                    } else {
                        view! { <CheckCircle attr:class="h-5 w-5 shrink-0" /> }.into_any()
                    }
                }}
                <span class="flex-1">
                    {move || notice.get().map(|n| n.message().to_string()).unwrap_or_default()}
                </span>
                <button class="btn btn-ghost btn-xs" on:click=move |_| set_notice.set(None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}

/// The loading indicator is the only content shown while a fetch is pending.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// Error state for a failed collection fetch.
#[component]
pub fn FetchError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-error my-8">
            <AlertCircle attr:class="h-5 w-5 shrink-0" />
            <span>{message}</span>
        </div>
    }
}

/// Empty state, distinct from the error state.
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <p class="text-base-content/60 text-lg mb-6">{message}</p>
            {children.map(|children| children())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undisturbed_success_still_clears_when_its_timeout_fires() {
        let mut timer = AutoClear::default();
        let token = timer
            .observe(&Some(Notice::Success("Saved".into())))
            .unwrap();
        assert!(timer.still_current(token));
    }

    #[test]
    fn error_raised_inside_the_success_window_survives_the_timeout() {
        let mut timer = AutoClear::default();
        let token = timer
            .observe(&Some(Notice::Success("Saved".into())))
            .unwrap();
        assert_eq!(timer.observe(&Some(Notice::Error("Save failed".into()))), None);
        assert!(!timer.still_current(token));
    }

    #[test]
    fn back_to_back_successes_invalidate_the_older_timeout() {
        let mut timer = AutoClear::default();
        let first = timer
            .observe(&Some(Notice::Success("First".into())))
            .unwrap();
        let second = timer
            .observe(&Some(Notice::Success("Second".into())))
            .unwrap();
        assert!(!timer.still_current(first));
        assert!(timer.still_current(second));
    }

    #[test]
    fn errors_and_dismissals_never_arm_the_timer() {
        let mut timer = AutoClear::default();
        assert_eq!(timer.observe(&Some(Notice::Error("boom".into()))), None);
        assert_eq!(timer.observe(&None), None);
    }
}
