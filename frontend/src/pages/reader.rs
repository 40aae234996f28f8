//! Reader page: the story PDF embedded full-width

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::services::stories::StoriesApi;

#[component]
pub fn ReaderPage() -> impl IntoView {
    let params = use_params_map();
    let story_id = params
        .with_untracked(|params| params.get("id"))
        .and_then(|id| id.parse::<i64>().ok());

    let (title, set_title) = signal(String::from("StoryLand Reader"));

    if let Some(id) = story_id {
        leptos::task::spawn_local(async move {
            // Title is decoration; the reader works even if this fails
            if let Ok(story) = StoriesApi::new().get(id).await {
                set_title.try_set(story.title);
            }
        });
    }

    view! {
        <div class="page reader-page">
            {match story_id {
                None => view! {
                    <div class="card">
                        <p>"That story link looks broken."</p>
                        <A href="/stories" attr:class="btn btn-primary">"Back to the Library"</A>
                    </div>
                }.into_any(),
                Some(id) => {
                    let back_href = format!("/stories/{id}");
                    let view_url = StoriesApi::new().view_url(id);
                    view! {
                        <div class="reader-toolbar">
                            <A href=back_href attr:class="btn btn-ghost">"← Back to story"</A>
                            <h1 class="reader-title">{move || title.get()}</h1>
                        </div>
                        <iframe
                            class="reader-frame"
                            src=view_url
                            title="Story reader"
                        ></iframe>
                    }.into_any()
                }
            }}
        </div>
    }
}
