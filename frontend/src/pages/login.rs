//! Login page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::services::auth::AuthApi;
use crate::state::session::use_session_context;
use crate::state::toast::use_toast_context;
use crate::utils::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();

        let result = validate_login(&email, &password);
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
            match auth.login(&email, &password).await {
                Ok(_) => match auth.current_user().await {
                    Ok(user) => {
                        let name = user.display_name().to_string();
                        session.set_user(Some(user));
                        toasts.success(format!("Welcome back, {name}! 📖"));
                        navigate("/", Default::default());
                    }
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
                <h1 class="auth-title">"Welcome Back! 👋"</h1>
                <p class="auth-subtitle">"Sign in to keep reading"</p>

                <div class="demo-hint">
                    "Just looking around? Try the demo account: "
                    <code>"demo@storyland.com"</code>" / "<code>"demo123"</code>
                </div>

                <form class="auth-form" on:submit=on_submit>
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
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn-primary btn-lg" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "New to StoryLand? "
                    <A href="/register">"Create a free account"</A>
                </p>
            </div>
        </div>
    }
}
