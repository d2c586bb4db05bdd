//! Dismissible inline notice with a fixed auto-hide interval.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::state::notice::{Notice, Severity};

// Sequence numbers for notice showings; a timer only dismisses the
// showing it was armed for.
static NEXT_SEQ: AtomicU64 = AtomicU64::new(1);

/// Show a notice in `slot` and arm the auto-hide timer.
pub fn show(slot: RwSignal<Option<Notice>>, severity: Severity, message: impl Into<String>) {
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    slot.set(Some(Notice::new(severity, message, seq)));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::notice::AUTO_HIDE_MS).await;
            slot.update(|current| {
                if crate::state::notice::timer_may_dismiss(current.as_ref(), seq) {
                    *current = None;
                }
            });
        });
    }
}

/// Show an error-severity notice.
pub fn show_error(slot: RwSignal<Option<Notice>>, message: impl Into<String>) {
    show(slot, Severity::Error, message);
}

/// Show a success-severity notice.
pub fn show_success(slot: RwSignal<Option<Notice>>, message: impl Into<String>) {
    show(slot, Severity::Success, message);
}

/// Renders the notice currently in `state`, with a manual dismiss button.
#[component]
pub fn NoticeHost(state: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            state.get()
                .map(|notice| {
                    view! {
                        <div class=notice.css_class() role="alert">
                            <span class="notice__message">{notice.message.clone()}</span>
                            <button
                                type="button"
                                class="notice__dismiss"
                                on:click=move |_| state.set(None)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
