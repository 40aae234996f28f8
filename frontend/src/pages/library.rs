//! Library page: the filterable, paginated story catalog

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use shared::dto::story::Story;

use crate::components::StoryCard;
use crate::services::http::ApiError;
use crate::services::stories::{StoriesApi, StoryListQuery};
use crate::state::session::{expire_session, use_session_context};
use crate::utils::constants::{AGE_GROUPS, STORIES_PAGE_SIZE, THEMES};
use crate::utils::demo;
use crate::utils::url::get_query_param;

/// Page count for a listing total, never less than one.
fn page_count(total: u64, page_size: u32) -> u32 {
    let pages = total.div_ceil(page_size as u64);
    pages.max(1) as u32
}

/// Case-insensitive title search over the current page of results. Purely
/// cosmetic narrowing; the server never sees the search text.
fn search_titles(stories: &[Story], needle: &str) -> Vec<Story> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return stories.to_vec();
    }
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    let session = use_session_context();
    let query = use_query_map();

    // Landing with ?theme=... (the home page theme tiles) preselects a filter
    let initial_theme = query
        .with_untracked(|params| params.get("theme"))
        .or_else(|| get_query_param("theme"));

    let (stories, set_stories) = signal::<Vec<Story>>(vec![]);
    let (total, set_total) = signal(0u64);
    let (page, set_page) = signal(1u32);
    let (theme, set_theme) = signal(initial_theme);
    let (age_group, set_age_group) = signal(None::<String>);
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(true);
    // Monotonic fetch counter; a response only lands if it is still the latest
    let (request_seq, set_request_seq) = signal(0u64);

    Effect::new(move || {
        let list_query = StoryListQuery {
            page: page.get(),
            theme: theme.get(),
            age_group: age_group.get(),
            ..Default::default()
        };
        let seq = request_seq.get_untracked() + 1;
        set_request_seq.set(seq);
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            let result = StoriesApi::new().list(&list_query).await;
            if request_seq.try_get_untracked() != Some(seq) {
                return;
            }
            match result {
                Ok(list) => {
                    set_total.try_set(list.total);
                    set_stories.try_set(list.stories);
                }
                Err(ApiError::AuthExpired) => expire_session(&session),
                Err(err) => {
                    log::warn!("story listing unavailable, using fallback: {err}");
                    let fallback = demo::filter_stories(
                        demo::demo_library(),
                        list_query.theme.as_deref(),
                        list_query.age_group.as_deref(),
                    );
                    set_total.try_set(fallback.len() as u64);
                    set_stories.try_set(fallback);
                }
            }
            set_loading.try_set(false);
        });
    });

    let select_theme = move |id: &'static str| {
        set_page.set(1);
        set_theme.update(|current| {
            // Clicking the active theme clears the filter
            *current = if current.as_deref() == Some(id) {
                None
            } else {
                Some(id.to_string())
            };
        });
    };

    let total_pages = move || page_count(total.get(), STORIES_PAGE_SIZE);

    view! {
        <div class="page library-page">
            <h1 class="page-title">"📚 Story Library"</h1>

            <div class="library-filters">
                <input
                    type="search"
                    class="search-input"
                    placeholder="🔍 Search by title..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <div class="theme-filter">
                    {THEMES.iter().map(|(id, name, emoji)| {
                        let id = *id;
                        view! {
                            <button
                                class="filter-chip"
                                class:active=move || theme.get().as_deref() == Some(id)
                                on:click=move |_| select_theme(id)
                            >
                                {format!("{emoji} {name}")}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <select
                    class="age-filter"
                    on:change=move |ev| {
                        set_page.set(1);
                        let value = event_target_value(&ev);
                        set_age_group.set((!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"All ages"</option>
                    {AGE_GROUPS.iter().map(|(id, label, _)| view! {
                        <option value=*id>{*label}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="loading-hint">"Loading stories..."</p> }.into_any();
                }
                let visible = stories.with(|stories| search_titles(stories, &search.get()));
                if visible.is_empty() {
                    view! {
                        <p class="empty-hint">"No stories match these filters yet. Try another theme!"</p>
                    }.into_any()
                } else {
                    view! {
                        <div class="story-grid">
                            {visible.into_iter().map(|story| view! {
                                <StoryCard story=story/>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            <div class="pagination">
                <button
                    class="btn btn-ghost"
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|page| *page = page.saturating_sub(1).max(1))
                >
                    "← Previous"
                </button>
                <span class="pagination-label">
                    {move || format!("Page {} of {}", page.get(), total_pages())}
                </span>
                <button
                    class="btn btn-ghost"
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| set_page.update(|page| *page += 1)
                >
                    "Next →"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_titles() {
        let stories = crate::utils::demo::demo_library();
        assert_eq!(search_titles(&stories, "").len(), 6);
        assert_eq!(search_titles(&stories, "  ").len(), 6);

        let hits = search_titles(&stories, "dragon");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Dragon Who Couldn't Breathe Fire");

        assert!(search_titles(&stories, "zebra").is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 12), 1);
        assert_eq!(page_count(6, 12), 1);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(120, 12), 10);
    }
}
