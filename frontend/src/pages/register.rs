//! Registration page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::services::auth::AuthApi;
use crate::state::session::use_session_context;
use crate::state::toast::use_toast_context;
use crate::utils::validation::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let full_name = full_name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let confirm = confirm.get_untracked();

        let result = validate_registration(&email, &password, &confirm);
        if !result.is_valid {
            if let Some(message) = result.error {
                toasts.error(message);
            }
            return;
        }

        set_busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let auth = AuthApi::new();
            let registered = auth
                .register(&email, &password, Some(full_name))
                .await;
            match registered {
                // A fresh account signs straight in rather than bouncing
                // through the login form
                Ok(_) => match auth.login(&email, &password).await {
                    Ok(_) => match auth.current_user().await {
                        Ok(user) => {
                            let name = user.display_name().to_string();
                            session.set_user(Some(user));
                            toasts.success(format!("Welcome to StoryLand, {name}! 🎉"));
                            navigate("/", Default::default());
                        }
                        Err(err) => toasts.error(err.to_string()),
                    },
                    Err(err) => toasts.error(err.to_string()),
                },
                Err(err) => toasts.error(err.to_string()),
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card card">
                <h1 class="auth-title">"Join StoryLand ✨"</h1>
                <p class="auth-subtitle">"Free forever. Upgrade anytime."</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Your name (optional)"</span>
                        <input
                            type="text"
                            placeholder="Parent or guardian name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="At least 6 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Confirm password"</span>
                        <input
                            type="password"
                            placeholder="Same password again"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn-primary btn-lg" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up Free" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
