//! Story detail page: cover, metadata, reviews, rating form, and actions

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use shared::dto::story::{Rating, Story};
use shared::utils::format_read_count;

use crate::services::http::ApiError;
use crate::services::stories::StoriesApi;
use crate::state::session::{expire_session, use_session_context};
use crate::state::toast::use_toast_context;
use crate::utils::demo;
use crate::utils::validation::validate_rating;

/// Class for one star button given the currently selected rating.
fn star_class(selected: u8, value: u8) -> &'static str {
    if selected >= value {
        "star selected"
    } else {
        "star"
    }
}

fn star_glyph(selected: u8, value: u8) -> &'static str {
    if selected >= value {
        "★"
    } else {
        "☆"
    }
}

#[component]
pub fn StoryDetailPage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();
    let params = use_params_map();

    let story_id = params
        .with_untracked(|params| params.get("id"))
        .and_then(|id| id.parse::<i64>().ok());

    let (story, set_story) = signal(None::<Story>);
    let (ratings, set_ratings) = signal::<Vec<Rating>>(vec![]);
    let (is_favorite, set_is_favorite) = signal(false);
    let (loading, set_loading) = signal(true);

    // Rating form state
    let (stars, set_stars) = signal(0u8);
    let (comment, set_comment) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    if let Some(id) = story_id {
        leptos::task::spawn_local(async move {
            let api = StoriesApi::new();
            // Both reads start together; the page renders when both settle
            let (story_result, ratings_result) = futures::join!(api.get(id), api.ratings(id));

            match story_result {
                Ok(fetched) => {
                    set_story.try_set(Some(fetched));
                }
                Err(ApiError::AuthExpired) => expire_session(&session),
                Err(err) => {
                    log::warn!("story {id} unavailable, using fallback: {err}");
                    set_story.try_set(Some(demo::demo_story(id)));
                }
            }
            match ratings_result {
                Ok(fetched) => {
                    set_ratings.try_set(fetched);
                }
                Err(err) => {
                    log::warn!("ratings for story {id} unavailable, using fallback: {err}");
                    set_ratings.try_set(demo::demo_ratings());
                }
            }
            set_loading.try_set(false);
        });
    }

    let toggle_favorite = {
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = story_id else { return };
            if !session.is_authenticated() {
                navigate("/login", Default::default());
                return;
            }
            leptos::task::spawn_local(async move {
                match StoriesApi::new().toggle_favorite(id).await {
                    Ok(ack) => {
                        set_is_favorite.try_set(ack.is_favorite);
                        toasts.success(ack.message);
                    }
                    Err(ApiError::AuthExpired) => expire_session(&session),
                    Err(err) => toasts.error(err.to_string()),
                }
            });
        }
    };

    let submit_rating = move |_| {
        let Some(id) = story_id else { return };
        if !session.is_authenticated() {
            toasts.error("Please sign in to rate stories");
            return;
        }
        let result = validate_rating(stars.get_untracked());
        if !result.is_valid {
            if let Some(message) = result.error {
                toasts.error(message);
            }
            return;
        }
        let selected = stars.get_untracked();
        let text = comment.get_untracked();
        set_submitting.set(true);
        leptos::task::spawn_local(async move {
            let api = StoriesApi::new();
            match api.rate(id, selected, Some(text)).await {
                Ok(_) => {
                    toasts.success("Thanks for sharing your review! ⭐");
                    set_stars.try_set(0);
                    set_comment.try_set(String::new());
                    // Refresh so the new review appears in the list
                    if let Ok(fresh) = api.ratings(id).await {
                        set_ratings.try_set(fresh);
                    }
                }
                Err(ApiError::AuthExpired) => expire_session(&session),
                Err(err) => toasts.error(err.to_string()),
            }
            set_submitting.try_set(false);
        });
    };

    let download = move |_| {
        let Some(id) = story_id else { return };
        if !session.is_authenticated() {
            navigate("/login", Default::default());
            return;
        }
        let url = StoriesApi::new().download_url(id);
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                toasts.error("Could not open the download");
            }
        }
    };

    view! {
        <div class="page story-detail-page">
            {move || {
                let toggle_favorite = toggle_favorite.clone();
                let download = download.clone();
                if story_id.is_none() {
                    return view! {
                        <div class="card">
                            <p>"That story link looks broken."</p>
                            <A href="/stories" attr:class="btn btn-primary">"Back to the Library"</A>
                        </div>
                    }.into_any();
                }
                if loading.get() {
                    return view! { <p class="loading-hint">"Opening the book..."</p> }.into_any();
                }
                let Some(story) = story.get() else {
                    return view! { <p class="empty-hint">"Story not found."</p> }.into_any();
                };

                let api = StoriesApi::new();
                let cover = if story.cover_image_url.is_some() {
                    api.cover_url(story.id)
                } else {
                    format!("https://picsum.photos/seed/story{}/600/450", story.id)
                };
                let rating_label = story
                    .average_rating
                    .map(|rating| format!("⭐ {rating:.1}"))
                    .unwrap_or_else(|| "⭐ New".to_string());
                let read_href = format!("/read/{}", story.id);

                view! {
                    <div class="story-detail">
                        <div class="story-detail-cover">
                            <img src=cover alt=story.title.clone()/>
                        </div>
                        <div class="story-detail-info">
                            <h1 class="story-title">{story.title.clone()}</h1>
                            {story.author.clone().map(|author| view! {
                                <p class="story-author">{format!("by {author}")}</p>
                            })}
                            <div class="story-meta">
                                {story.age_group.clone().map(|age| view! {
                                    <span class="meta-badge">{format!("Ages {age}")}</span>
                                })}
                                {story.theme.clone().map(|theme| view! {
                                    <span class="meta-badge">{shared::utils::capitalize(&theme)}</span>
                                })}
                                <span class="meta-badge">{format!("{} pages", story.page_count)}</span>
                                <span class="meta-badge">{rating_label}</span>
                                <span class="meta-badge">
                                    {format!("{} reads", format_read_count(story.read_count))}
                                </span>
                                {story.is_premium.then(|| view! {
                                    <span class="meta-badge premium">"👑 Premium"</span>
                                })}
                            </div>
                            {story.description.clone().map(|description| view! {
                                <p class="story-description">{description}</p>
                            })}
                            <div class="story-actions">
                                <A href=read_href attr:class="btn btn-primary btn-lg">"📖 Read Now"</A>
                                <button class="btn btn-secondary" on:click=download>
                                    "⬇️ Download PDF"
                                </button>
                                <button
                                    class="btn btn-ghost"
                                    class:active=move || is_favorite.get()
                                    on:click=toggle_favorite
                                >
                                    {move || if is_favorite.get() { "❤️ Favorited" } else { "🤍 Favorite" }}
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_any()
            }}

            <section class="reviews-section">
                <h2 class="section-title">"Reviews"</h2>

                <div class="rating-form card">
                    <h3>"Leave a review"</h3>
                    <div class="star-picker">
                        {(1u8..=5).map(|value| view! {
                            <button
                                class=move || star_class(stars.get(), value)
                                on:click=move |_| set_stars.set(value)
                            >
                                {move || star_glyph(stars.get(), value)}
                            </button>
                        }).collect_view()}
                    </div>
                    <textarea
                        class="rating-comment"
                        placeholder="What did your little reader think? (optional)"
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                        on:click=submit_rating
                    >
                        {move || if submitting.get() { "Sending..." } else { "Submit Review" }}
                    </button>
                </div>

                {move || {
                    let reviews = ratings.get();
                    if reviews.is_empty() {
                        view! { <p class="empty-hint">"No reviews yet. Be the first!"</p> }.into_any()
                    } else {
                        view! {
                            <div class="review-list">
                                {reviews.into_iter().map(|review| {
                                    let stars = "★".repeat(review.rating.round() as usize);
                                    view! {
                                        <div class="review card">
                                            <div class="review-header">
                                                <span class="review-author">
                                                    {review.user_name.clone().unwrap_or_else(|| "A reader".to_string())}
                                                </span>
                                                <span class="review-stars">{stars}</span>
                                                {review.created_at.clone().map(|date| view! {
                                                    <span class="review-date">{date}</span>
                                                })}
                                            </div>
                                            {review.comment.clone().map(|comment| view! {
                                                <p class="review-comment">{comment}</p>
                                            })}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_picker_highlights_up_to_selection() {
        // With 3 stars selected, buttons 1-3 render filled and 4-5 empty
        assert_eq!(star_class(3, 1), "star selected");
        assert_eq!(star_class(3, 3), "star selected");
        assert_eq!(star_class(3, 4), "star");
        assert_eq!(star_glyph(3, 2), "★");
        assert_eq!(star_glyph(3, 5), "☆");

        // Nothing selected yet: all empty
        assert_eq!(star_class(0, 1), "star");
        assert_eq!(star_glyph(0, 1), "☆");
    }
}
