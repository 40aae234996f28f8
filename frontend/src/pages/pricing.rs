//! Pricing page: plan comparison and checkout entry point

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::services::http::ApiError;
use crate::services::subscription::SubscriptionApi;
use crate::state::session::{expire_session, use_session_context};
use crate::state::toast::use_toast_context;

const FAQS: &[(&str, &str)] = &[
    (
        "Can I cancel anytime?",
        "Yes! Cancel from your profile page and you keep premium access until the end of your billing period.",
    ),
    (
        "What does 'unlimited stories' mean?",
        "Premium members can read every story in the library and generate as many custom stories as they like.",
    ),
    (
        "Are the stories safe for kids?",
        "Every story is written for ages 3-12 and reviewed for age-appropriate content.",
    ),
    (
        "Do generated stories belong to me?",
        "Yes, stories you create stay in your library and can be downloaded as PDFs.",
    ),
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let (busy, set_busy) = signal(false);

    let on_upgrade = move |_| {
        if !session.is_authenticated() {
            navigate("/login", Default::default());
            return;
        }
        if session.is_subscribed() {
            toasts.success("You're already a premium member! 🎉");
            return;
        }
        set_busy.set(true);
        leptos::task::spawn_local(async move {
            match SubscriptionApi::new().create_checkout_session().await {
                Ok(checkout) => {
                    // Full-page handoff to the payment provider
                    if let Some(window) = web_sys::window() {
                        if window.location().set_href(&checkout.checkout_url).is_err() {
                            toasts.error("Could not open the checkout page");
                        }
                    }
                }
                Err(ApiError::AuthExpired) => expire_session(&session),
                Err(err) => toasts.error(err.to_string()),
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <div class="page pricing-page">
            <h1 class="page-title">"Pick Your Adventure 🗺️"</h1>
            <p class="page-subtitle">"Start free. Upgrade when your reader wants more."</p>

            <div class="plan-grid">
                <div class="plan card">
                    <h2 class="plan-name">"Free Explorer"</h2>
                    <p class="plan-price">"$0"<span class="plan-period">"/month"</span></p>
                    <ul class="plan-features">
                        <li>"✅ 5 stories per month"</li>
                        <li>"✅ All free stories"</li>
                        <li>"✅ Ratings and favorites"</li>
                        <li>"❌ Premium stories"</li>
                        <li>"❌ Custom story generation"</li>
                        <li>"❌ PDF downloads"</li>
                    </ul>
                    {move || (!session.is_authenticated()).then(|| view! {
                        <button
                            class="btn btn-secondary btn-lg"
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href("/register");
                                }
                            }
                        >
                            "Start Free"
                        </button>
                    })}
                </div>

                <div class="plan plan-premium card">
                    <span class="plan-badge">"Most Popular"</span>
                    <h2 class="plan-name">"👑 Premium Storyteller"</h2>
                    <p class="plan-price">"$9.99"<span class="plan-period">"/month"</span></p>
                    <ul class="plan-features">
                        <li>"✅ Unlimited stories"</li>
                        <li>"✅ Every premium story"</li>
                        <li>"✅ Create custom stories with AI"</li>
                        <li>"✅ Download stories as PDFs"</li>
                        <li>"✅ Ad-free reading"</li>
                        <li>"✅ New stories every week"</li>
                    </ul>
                    <button
                        class="btn btn-primary btn-lg"
                        disabled=move || busy.get()
                        on:click=on_upgrade
                    >
                        {move || {
                            if session.is_subscribed() {
                                "You're Premium! 🎉"
                            } else if busy.get() {
                                "Opening checkout..."
                            } else {
                                "Go Premium"
                            }
                        }}
                    </button>
                </div>
            </div>

            <section class="faq-section">
                <h2 class="section-title">"Questions? Answers."</h2>
                <div class="faq-list">
                    {FAQS.iter().map(|(question, answer)| view! {
                        <div class="faq card">
                            <h3 class="faq-question">{*question}</h3>
                            <p class="faq-answer">{*answer}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
