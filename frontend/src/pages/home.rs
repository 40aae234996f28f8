//! Home page: hero, featured stories, and theme shortcuts

use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::story::Story;

use crate::components::StoryCard;
use crate::services::http::ApiError;
use crate::services::stories::StoriesApi;
use crate::state::session::{expire_session, use_session_context};
use crate::utils::constants::THEMES;
use crate::utils::demo;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();
    let (featured, set_featured) = signal::<Vec<Story>>(vec![]);
    let (loading, set_loading) = signal(true);

    leptos::task::spawn_local(async move {
        match StoriesApi::new().featured().await {
            Ok(stories) => {
                set_featured.try_set(stories);
            }
            Err(ApiError::AuthExpired) => expire_session(&session),
            Err(err) => {
                // Degrade to the built-in showcase rather than an error state
                log::warn!("featured stories unavailable, using fallback: {err}");
                set_featured.try_set(demo::demo_featured());
            }
        }
        set_loading.try_set(false);
    });

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">"Magical Stories for Curious Minds ✨"</h1>
                <p class="hero-subtitle">
                    "Discover hundreds of illustrated stories for ages 3 to 12, \
                     or create your very own with a sprinkle of AI magic."
                </p>
                <div class="hero-actions">
                    <A href="/stories" attr:class="btn btn-primary btn-lg">"Browse the Library"</A>
                    {move || (!session.is_authenticated()).then(|| view! {
                        <A href="/register" attr:class="btn btn-secondary btn-lg">"Start Free"</A>
                    })}
                </div>
            </section>

            <section class="featured-section">
                <h2 class="section-title">"⭐ Featured Stories"</h2>
                {move || {
                    if loading.get() {
                        view! { <p class="loading-hint">"Gathering stories..."</p> }.into_any()
                    } else {
                        view! {
                            <div class="story-grid">
                                {featured.get().into_iter().map(|story| view! {
                                    <StoryCard story=story/>
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </section>

            <section class="themes-section">
                <h2 class="section-title">"Explore by Theme"</h2>
                <div class="theme-grid">
                    {THEMES.iter().map(|(id, name, emoji)| view! {
                        <A href=format!("/stories?theme={id}") attr:class="theme-tile">
                            <span class="theme-emoji">{*emoji}</span>
                            <span class="theme-name">{*name}</span>
                        </A>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
