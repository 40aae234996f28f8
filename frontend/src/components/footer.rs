//! Site footer

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="brand-mark">"📖"</span>
                    <span class="brand-name">"StoryLand"</span>
                    <p class="footer-tagline">"Magical stories for young readers, anywhere, anytime."</p>
                </div>
                <div class="footer-links">
                    <A href="/stories">"Story Library"</A>
                    <A href="/pricing">"Premium Plans"</A>
                    <A href="/register">"Create Account"</A>
                </div>
                <p class="footer-copy">"© 2025 StoryLand. All stories reviewed for age-appropriate content."</p>
            </div>
        </footer>
    }
}
