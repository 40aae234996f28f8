//! Story Card Component
//!
//! One card per story, used by the home and library grids. Fallback stories
//! render through the same card as server data.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::format_read_count;

use crate::services::stories::StoriesApi;
use crate::utils::constants::THEMES;

/// Emoji for a theme id, or a neutral book for unknown themes.
fn theme_emoji(theme: Option<&str>) -> &'static str {
    theme
        .and_then(|theme| {
            THEMES
                .iter()
                .find(|(id, _, _)| *id == theme)
                .map(|(_, _, emoji)| *emoji)
        })
        .unwrap_or("📖")
}

#[component]
pub fn StoryCard(story: shared::dto::story::Story) -> impl IntoView {
    let api = StoriesApi::new();
    let detail_href = format!("/stories/{}", story.id);
    // Stories without uploaded artwork get a deterministic placeholder image
    let cover = if story.cover_image_url.is_some() {
        api.cover_url(story.id)
    } else {
        format!("https://picsum.photos/seed/story{}/400/300", story.id)
    };
    let emoji = theme_emoji(story.theme.as_deref());
    let rating = story
        .average_rating
        .map(|rating| format!("⭐ {rating:.1}"))
        .unwrap_or_else(|| "⭐ New".to_string());
    let reads = format_read_count(story.read_count);

    view! {
        <A href=detail_href attr:class="story-card">
            <div class="story-card-cover">
                <img src=cover alt=story.title.clone() loading="lazy"/>
                <span class="story-card-theme">{emoji}</span>
                {story.is_premium.then(|| view! {
                    <span class="story-card-premium">"👑 Premium"</span>
                })}
            </div>
            <div class="story-card-body">
                <h3 class="story-card-title">{story.title.clone()}</h3>
                <p class="story-card-description">
                    {story.description.clone().unwrap_or_default()}
                </p>
                <div class="story-card-meta">
                    {story.age_group.clone().map(|age| view! {
                        <span class="story-card-age">{format!("Ages {age}")}</span>
                    })}
                    <span class="story-card-rating">{rating}</span>
                    <span class="story-card-reads">{format!("{reads} reads")}</span>
                </div>
            </div>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_emoji_known() {
        assert_eq!(theme_emoji(Some("bedtime")), "🌙");
        assert_eq!(theme_emoji(Some("space")), "🚀");
    }

    #[test]
    fn test_theme_emoji_unknown_falls_back() {
        assert_eq!(theme_emoji(Some("noir")), "📖");
        assert_eq!(theme_emoji(None), "📖");
    }
}
