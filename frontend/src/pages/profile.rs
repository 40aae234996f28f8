//! Profile page: account details, subscription management, logout

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::dto::subscription::SubscriptionStatus;
use shared::utils::capitalize;

use crate::services::auth::AuthApi;
use crate::services::http::ApiError;
use crate::services::subscription::SubscriptionApi;
use crate::state::session::{expire_session, use_session_context};
use crate::state::toast::use_toast_context;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if !session.is_authenticated() {
                navigate("/login", Default::default());
            }
        });
    }

    let (status, set_status) = signal(None::<SubscriptionStatus>);
    let (cancelling, set_cancelling) = signal(false);

    // Refresh both the user projection and the subscription status on mount;
    // the persisted session may be stale after a reload
    leptos::task::spawn_local(async move {
        let auth = AuthApi::new();
        let subs = SubscriptionApi::new();
        let (user_result, status_result) = futures::join!(auth.current_user(), subs.status());

        match user_result {
            Ok(user) => session.set_user(Some(user)),
            Err(ApiError::AuthExpired) => {
                expire_session(&session);
                return;
            }
            Err(err) => log::warn!("could not refresh user: {err}"),
        }
        // Status is supplementary; the page renders from the session alone
        match status_result {
            Ok(fetched) => {
                set_status.try_set(Some(fetched));
            }
            Err(err) => log::warn!("could not load subscription status: {err}"),
        }
    });

    let on_cancel = move |_| {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message(
                        "Cancel your premium subscription? You'll keep access until the end of the billing period.",
                    )
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_cancelling.set(true);
        leptos::task::spawn_local(async move {
            match SubscriptionApi::new().cancel().await {
                Ok(()) => {
                    toasts.success("Subscription cancelled");
                    // The tier changed server-side; pull the fresh projection
                    if let Ok(user) = AuthApi::new().current_user().await {
                        session.set_user(Some(user));
                    }
                    if let Ok(fetched) = SubscriptionApi::new().status().await {
                        set_status.try_set(Some(fetched));
                    }
                }
                Err(ApiError::AuthExpired) => expire_session(&session),
                Err(err) => toasts.error(err.to_string()),
            }
            set_cancelling.try_set(false);
        });
    };

    let on_logout = move |_| {
        session.clear();
        toasts.success("Logged out successfully");
        navigate("/", Default::default());
    };

    view! {
        <div class="page profile-page">
            <h1 class="page-title">"My Profile"</h1>

            {move || session.user().map(|user| {
                let tier = capitalize(&user.subscription_tier);
                let name = user.display_name().to_string();
                view! {
                    <div class="profile-card card">
                        <div class="profile-header">
                            <span class="profile-avatar">"🧑‍🚀"</span>
                            <div>
                                <h2 class="profile-name">{name}</h2>
                                <p class="profile-email">{user.email.clone()}</p>
                            </div>
                            {user.is_subscribed.then(|| view! {
                                <span class="premium-badge">"👑 Premium"</span>
                            })}
                        </div>
                        <p class="profile-tier">{format!("Plan: {tier}")}</p>
                    </div>
                }
            })}

            {move || status.get().map(|status| {
                let features = status.features.clone();
                view! {
                    <div class="subscription-card card">
                        <h2 class="section-title">"Your Plan"</h2>
                        {features.map(|features| view! {
                            <ul class="plan-features">
                                <li>{format!("📚 {}", features.stories_label())}</li>
                                <li>{if features.can_generate { "✨ Custom story generation" } else { "✨ Custom stories: premium only" }}</li>
                                <li>{if features.can_download { "⬇️ PDF downloads" } else { "⬇️ Downloads: premium only" }}</li>
                                <li>{if features.ad_free { "🚫 Ad-free" } else { "📢 Ad-supported" }}</li>
                            </ul>
                        })}
                        {status.is_subscribed.then(|| view! {
                            <button
                                class="btn btn-ghost btn-danger"
                                disabled=move || cancelling.get()
                                on:click=on_cancel
                            >
                                {move || if cancelling.get() { "Cancelling..." } else { "Cancel Subscription" }}
                            </button>
                        })}
                    </div>
                }
            })}

            <button class="btn btn-secondary" on:click=on_logout>
                "Log Out"
            </button>
        </div>
    }
}
