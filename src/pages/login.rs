//! Login page.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::notice::{NoticeHost, show_error};
use crate::state::notice::Notice;
use crate::util::validate::validate_login;

const SUBMIT_FALLBACK: &str = "An error occurred while logging in.";

/// Login page — email/password form plus the session gate.
///
/// An already-valid session redirects straight to the account page; a
/// stale one is evicted by the gate and its "session expired" notice
/// shows here, over the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Session gate, once per page load.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::session::{Outcome, Page};

                match crate::session::check(Page::Login).await {
                    Outcome::RenderAccount(_) => {
                        navigate("/account", NavigateOptions::default());
                    }
                    Outcome::RenderForms | Outcome::RedirectToLogin { .. } => {
                        // This is the login page; just surface whatever
                        // the gate (or a previous page) queued.
                        if let Ok(Some(queued)) = crate::storage::take_notice().await {
                            crate::components::notice::show(notice, queued.severity, queued.message);
                        }
                    }
                }
            });
        });
    }

    let on_submit = {
        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }

            let email_value = email.get();
            let password_value = password.get();
            if let Err(err) = validate_login(&email_value, &password_value) {
                show_error(notice, err.to_string());
                return;
            }

            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let credentials = crate::net::types::Credentials {
                        email: email_value,
                        password: password_value,
                    };
                    match crate::net::api::login(&credentials).await {
                        Ok(token) => {
                            if let Err(err) = crate::storage::set_token(&token).await {
                                // The account gate will bounce back here.
                                log::error!("failed to persist session token: {err}");
                            }
                            navigate("/account", NavigateOptions::default());
                        }
                        Err(err) => {
                            show_error(
                                notice,
                                err.server_message().unwrap_or(SUBMIT_FALLBACK).to_owned(),
                            );
                            busy.set(false);
                        }
                    }
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email_value, password_value);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1 class="auth-page__title">"Account Portal"</h1>
                <p class="auth-page__subtitle">"Log in to your account."</p>
                <form class="auth-page__form" on:submit=on_submit>
                    <input
                        class="auth-page__input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-page__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                    <NoticeHost state=notice/>
                    <a class="auth-page__link" href="/register">
                        "Don't have an account? Register"
                    </a>
                </form>
            </div>
        </div>
    }
}
