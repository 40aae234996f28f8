//! Stories gateway: catalog listing, detail, ratings, favorites, generation
//!
//! Pure request/response wrappers; one semantic action maps to one HTTP call.
//! No caching, no retries, no batching.

use shared::dto::story::{
    FavoriteResponse, GenerateStoryRequest, Rating, RateRequest, Story, StoryList,
};

use crate::services::http::{ApiClient, ApiError};

/// Catalog listing parameters for `GET /stories/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryListQuery {
    pub page: u32,
    pub page_size: u32,
    pub age_group: Option<String>,
    pub theme: Option<String>,
    pub featured_only: bool,
}

impl Default for StoryListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: crate::utils::constants::STORIES_PAGE_SIZE,
            age_group: None,
            theme: None,
            featured_only: false,
        }
    }
}

impl StoryListQuery {
    /// Serialize to the server's snake_case query parameters. Unset filters
    /// are omitted rather than sent empty.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("page_size={}", self.page_size),
        ];
        if let Some(age_group) = self.age_group.as_deref().filter(|v| !v.is_empty()) {
            params.push(format!("age_group={}", urlencoding::encode(age_group)));
        }
        if let Some(theme) = self.theme.as_deref().filter(|v| !v.is_empty()) {
            params.push(format!("theme={}", urlencoding::encode(theme)));
        }
        if self.featured_only {
            params.push("featured_only=true".to_string());
        }
        params.join("&")
    }
}

#[derive(Clone, Debug, Default)]
pub struct StoriesApi {
    client: ApiClient,
}

impl StoriesApi {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    /// Paginated, filterable story listing.
    pub async fn list(&self, query: &StoryListQuery) -> Result<StoryList, ApiError> {
        let path = format!("/stories/?{}", query.to_query_string());
        self.client.get_json(&path).await
    }

    /// Hand-picked featured stories for the home page.
    pub async fn featured(&self) -> Result<Vec<Story>, ApiError> {
        self.client.get_json("/stories/featured").await
    }

    pub async fn get(&self, id: i64) -> Result<Story, ApiError> {
        self.client.get_json(&format!("/stories/{id}")).await
    }

    pub async fn ratings(&self, id: i64) -> Result<Vec<Rating>, ApiError> {
        self.client.get_json(&format!("/stories/{id}/ratings")).await
    }

    /// Submit a star rating with an optional comment. Fire-and-confirm: the
    /// caller refreshes the rating list after the acknowledgment.
    pub async fn rate(
        &self,
        id: i64,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Rating, ApiError> {
        let request = RateRequest {
            story_id: id,
            rating: rating as f32,
            comment: comment.filter(|comment| !comment.is_empty()),
        };
        self.client
            .post_json(&format!("/stories/{id}/rate"), &request)
            .await
    }

    /// Toggle the favorite flag; the acknowledgment carries the new state.
    pub async fn toggle_favorite(&self, id: i64) -> Result<FavoriteResponse, ApiError> {
        self.client
            .post_empty(&format!("/stories/{id}/favorite"))
            .await
    }

    /// Request a custom story. A single blocking call; the server may take up
    /// to a minute and the UI's only concession is a busy indicator.
    pub async fn generate(&self, request: &GenerateStoryRequest) -> Result<Story, ApiError> {
        self.client.post_json("/stories/generate", request).await
    }

    /// Cover image URL for an `<img>` tag.
    pub fn cover_url(&self, id: i64) -> String {
        self.client.url(&format!("/stories/{id}/cover"))
    }

    /// PDF download URL; opened in a new browsing context, not fetched here.
    pub fn download_url(&self, id: i64) -> String {
        self.client.url(&format!("/stories/{id}/download"))
    }

    /// Inline PDF view URL for the embedded reader.
    pub fn view_url(&self, id: i64) -> String {
        self.client.url(&format!("/stories/{id}/view"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_defaults() {
        let query = StoryListQuery::default();
        assert_eq!(query.to_query_string(), "page=1&page_size=12");
    }

    #[test]
    fn test_query_string_with_filters() {
        let query = StoryListQuery {
            page: 3,
            page_size: 12,
            age_group: Some("6-8".to_string()),
            theme: Some("fairy-tales".to_string()),
            featured_only: true,
        };
        assert_eq!(
            query.to_query_string(),
            "page=3&page_size=12&age_group=6-8&theme=fairy-tales&featured_only=true"
        );
    }

    #[test]
    fn test_query_string_skips_empty_filters() {
        let query = StoryListQuery {
            age_group: Some(String::new()),
            theme: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "page=1&page_size=12");
    }
}
