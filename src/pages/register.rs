//! Registration page.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::notice::{NoticeHost, show_error};
use crate::state::notice::Notice;
use crate::util::validate::validate_registration;

const SUBMIT_FALLBACK: &str = "An error occurred while registering.";

/// Registration page — name/email/password form plus the session gate.
///
/// Successful registration signs the new account in directly: the
/// returned token is persisted and the browser moves to the account
/// page. A session that is already valid skips the form the same way
/// the login page does; a stale one is evicted and the visitor is sent
/// to the login page where the expiry notice shows.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
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

                match crate::session::check(Page::Register).await {
                    Outcome::RenderAccount(_) => {
                        navigate("/account", NavigateOptions::default());
                    }
                    Outcome::RedirectToLogin { .. } => {
                        navigate("/", NavigateOptions::default());
                    }
                    Outcome::RenderForms => {}
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

            let name_value = name.get();
            let email_value = email.get();
            let password_value = password.get();
            if let Err(err) = validate_registration(&name_value, &email_value, &password_value) {
                show_error(notice, err.to_string());
                return;
            }

            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let registration = crate::net::types::Registration {
                        name: name_value,
                        email: email_value,
                        password: password_value,
                    };
                    match crate::net::api::register(&registration).await {
                        Ok(token) => {
                            if let Err(err) = crate::storage::set_token(&token).await {
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
                let _ = (name_value, email_value, password_value);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1 class="auth-page__title">"Register"</h1>
                <p class="auth-page__subtitle">"Create your account."</p>
                <form class="auth-page__form" on:submit=on_submit>
                    <input
                        class="auth-page__input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                    <NoticeHost state=notice/>
                    <a class="auth-page__link" href="/">
                        "Already have an account? Log in"
                    </a>
                </form>
            </div>
        </div>
    }
}
