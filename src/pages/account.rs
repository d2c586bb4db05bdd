//! Account page: profile view, edit, logout, and account deletion.
//!
//! Nothing renders here until the session gate has validated the stored
//! token on this page load; the fetched user record is passed down the
//! view explicitly and forgotten on navigation.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::dialogs::ConfirmDialog;
use crate::components::notice::{NoticeHost, show_error, show_success};
use crate::net::types::User;
use crate::state::notice::Notice;
use crate::util::validate::{validate_delete_confirmation, validate_profile};

const UPDATE_FALLBACK: &str = "There was an error updating your profile.";
const DELETE_FALLBACK: &str = "There was an error deleting your account.";

/// Token-gated account page.
#[component]
pub fn AccountPage() -> impl IntoView {
    let user = RwSignal::new(None::<User>);
    let notice = RwSignal::new(None::<Notice>);
    let show_logout = RwSignal::new(false);
    let show_edit = RwSignal::new(false);
    let show_delete = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Session gate: no token or a rejected token means this page never
    // renders and the browser lands on login instead.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::session::{Outcome, Page};

                match crate::session::check(Page::Account).await {
                    Outcome::RenderAccount(validated) => user.set(Some(validated)),
                    Outcome::RedirectToLogin { .. } => {
                        navigate("/", NavigateOptions::default());
                    }
                    // The gate never asks the account page to render forms.
                    Outcome::RenderForms => {}
                }
            });
        });
    }

    // Logout clears the token locally; no API call involved.
    let on_logout = {
        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let _ = crate::storage::clear_token().await;
                    navigate("/", NavigateOptions::default());
                });
            }
        })
    };

    let on_saved = Callback::new(move |updated: User| {
        user.set(Some(updated));
        show_edit.set(false);
        show_success(notice, "Profile successfully updated.");
    });

    view! {
        <div class="account-page">
            <Show
                when=move || user.get().is_some()
                fallback=|| view! { <p class="account-page__loading">"Checking your session..."</p> }
            >
                {move || {
                    user.get()
                        .map(|current| {
                            view! {
                                <ProfileCard
                                    user=current
                                    on_edit=Callback::new(move |()| show_edit.set(true))
                                    on_logout=Callback::new(move |()| show_logout.set(true))
                                    on_delete=Callback::new(move |()| show_delete.set(true))
                                />
                            }
                        })
                }}
            </Show>

            <NoticeHost state=notice/>

            <Show when=move || show_logout.get()>
                <ConfirmDialog
                    title="Confirm Logout"
                    body="Are you sure you want to logout?"
                    confirm_label="Yes"
                    on_confirm=on_logout
                    on_cancel=Callback::new(move |()| show_logout.set(false))
                />
            </Show>

            <Show when=move || show_edit.get()>
                {move || {
                    user.get()
                        .map(|current| {
                            view! {
                                <EditProfileDialog
                                    current=current
                                    notice=notice
                                    on_cancel=Callback::new(move |()| show_edit.set(false))
                                    on_saved=on_saved
                                />
                            }
                        })
                }}
            </Show>

            <Show when=move || show_delete.get()>
                {move || {
                    user.get()
                        .map(|current| {
                            view! {
                                <DeleteAccountDialog
                                    user_id=current.id
                                    notice=notice
                                    on_cancel=Callback::new(move |()| show_delete.set(false))
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Profile details plus the action buttons.
#[component]
fn ProfileCard(
    user: User,
    on_edit: Callback<()>,
    on_logout: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let active = user.active;
    let role_label = user.role.label();

    view! {
        <div class="account-page__card">
            <h1 class="account-page__name">{user.name.clone()}</h1>
            <p class="account-page__field">{format!("Email: {}", user.email)}</p>
            <p class="account-page__field">{format!("User ID: {}", user.id)}</p>
            <p class="account-page__field">{format!("Role: {role_label}")}</p>
            <Show when=move || !active>
                <div class="notice notice--error">"Your account is not active."</div>
            </Show>
            <div class="account-page__actions">
                <button class="btn btn--secondary" on:click=move |_| on_edit.run(())>
                    "Edit Profile"
                </button>
                <button class="btn btn--primary" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                "Delete Account"
            </button>
        </div>
    }
}

/// Modal for editing name/email and optionally the password.
///
/// A blank password field keeps the current password: the update payload
/// simply carries no password key.
#[component]
fn EditProfileDialog(
    current: User,
    notice: RwSignal<Option<Notice>>,
    on_cancel: Callback<()>,
    on_saved: Callback<User>,
) -> impl IntoView {
    let name = RwSignal::new(current.name.clone());
    let email = RwSignal::new(current.email.clone());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let user_id = current.id;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        if let Err(err) = validate_profile(&name_value, &email_value) {
            show_error(notice, err.to_string());
            return;
        }

        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let id = user_id.clone();
            leptos::task::spawn_local(async move {
                let token = match crate::storage::get_token().await {
                    Ok(Some(token)) => token,
                    _ => {
                        show_error(notice, crate::session::SESSION_EXPIRED);
                        busy.set(false);
                        return;
                    }
                };
                let update =
                    crate::net::types::UpdateProfile::new(name_value, email_value, password_value);
                match crate::net::api::update_account(&token, &id, &update).await {
                    Ok(updated) => on_saved.run(updated),
                    Err(err) => {
                        show_error(
                            notice,
                            err.server_message().unwrap_or(UPDATE_FALLBACK).to_owned(),
                        );
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value, &user_id);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Profile"</h2>
                <form on:submit=on_submit>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="password"
                        placeholder="Password (leave blank to keep current)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            prop:disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Modal requiring password re-confirmation before the destructive call.
#[component]
fn DeleteAccountDialog(
    user_id: String,
    notice: RwSignal<Option<Notice>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_confirm = {
        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        move |_| {
            if busy.get() {
                return;
            }

            let password_value = password.get();
            if let Err(err) = validate_delete_confirmation(&password_value) {
                show_error(notice, err.to_string());
                return;
            }

            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let id = user_id.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let token = match crate::storage::get_token().await {
                        Ok(Some(token)) => token,
                        _ => {
                            show_error(notice, crate::session::SESSION_EXPIRED);
                            busy.set(false);
                            return;
                        }
                    };
                    match crate::net::api::delete_account(&token, &id, &password_value).await {
                        Ok(()) => {
                            let _ = crate::storage::clear_token().await;
                            let _ = crate::storage::queue_notice(
                                &crate::state::notice::QueuedNotice::success(
                                    "Account successfully deleted.",
                                ),
                            )
                            .await;
                            navigate("/", NavigateOptions::default());
                        }
                        Err(err) => {
                            show_error(
                                notice,
                                err.server_message().unwrap_or(DELETE_FALLBACK).to_owned(),
                            );
                            busy.set(false);
                        }
                    }
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (password_value, &user_id);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Account"</h2>
                <p>"Are you sure you want to delete your account?"</p>
                <input
                    class="dialog__input"
                    type="password"
                    placeholder="Confirm your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "No"
                    </button>
                    <button
                        class="btn btn--danger"
                        type="button"
                        prop:disabled=move || busy.get()
                        on:click=on_confirm
                    >
                        {move || if busy.get() { "Deleting..." } else { "Yes" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
