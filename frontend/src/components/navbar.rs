//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session_context;
use crate::state::toast::use_toast_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        toasts.success("Logged out successfully");
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/" attr:class="navbar-brand">
                    <span class="brand-mark">"📖"</span>
                    <span class="brand-name">"StoryLand"</span>
                </A>

                <div class="navbar-links">
                    <A href="/stories" attr:class="nav-link">"📚 Library"</A>
                    {move || {
                        // Create Story only surfaces for premium members
                        (session.is_authenticated() && session.is_subscribed()).then(|| view! {
                            <A href="/generate" attr:class="nav-link">"✨ Create Story"</A>
                        })
                    }}
                    <A href="/pricing" attr:class="nav-link">"⭐ Premium"</A>
                </div>

                <div class="navbar-auth">
                    {move || {
                        let logout = on_logout.clone();
                        if session.is_authenticated() {
                            view! {
                                <div class="navbar-user">
                                    {session.is_subscribed().then(|| view! {
                                        <span class="premium-badge">"👑 Premium"</span>
                                    })}
                                    <A href="/profile" attr:class="nav-link">"My Profile"</A>
                                    <button class="btn btn-ghost" on:click=logout>
                                        "Log Out"
                                    </button>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div class="navbar-user">
                                    <A href="/login" attr:class="nav-link">"Sign In"</A>
                                    <A href="/register" attr:class="btn btn-primary">"Sign Up Free"</A>
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
