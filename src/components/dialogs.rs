//! Transient overlay dialogs.
//!
//! Dialogs are mounted by a `<Show>` in the owning page and hold no
//! state beyond their own inputs; dismissing one simply unmounts it.

use leptos::prelude::*;

/// Yes/No confirmation dialog. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    body: &'static str,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p>{body}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "No"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
