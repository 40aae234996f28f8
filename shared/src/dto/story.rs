use serde::{Deserialize, Serialize};

/// A story as projected by the catalog endpoints
///
/// Local copies are disposable render data; the server remains authoritative
/// and the client only mutates story state through the explicit rate and
/// favorite endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Story {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub read_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Paginated story listing response from `GET /stories/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryList {
    pub stories: Vec<Story>,
    pub total: u64,
}

/// A single reader rating for a story
///
/// The server stores ratings as floats even though the client submits whole
/// stars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Rating submission body for `POST /stories/{id}/rate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateRequest {
    pub story_id: i64,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Acknowledgment returned by `POST /stories/{id}/favorite`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteResponse {
    pub is_favorite: bool,
    pub message: String,
}

/// Custom story generation request for `POST /stories/generate`
///
/// The server treats this as a long-running operation (up to a minute); the
/// client issues a single blocking request with no polling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateStoryRequest {
    pub title: String,
    pub age_group: String,
    pub theme: String,
    pub page_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_wire_format() {
        // The server contract is snake_case; camelCase form state must be
        // translated before it reaches this DTO
        let req = GenerateStoryRequest {
            title: "The Sleepy Cloud".to_string(),
            age_group: "3-5".to_string(),
            theme: "bedtime".to_string(),
            page_count: 10,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"age_group\":\"3-5\""));
        assert!(json.contains("\"page_count\":10"));
    }

    #[test]
    fn test_story_tolerates_sparse_payload() {
        let story: Story =
            serde_json::from_str(r#"{"id": 7, "title": "The Brave Little Star"}"#).unwrap();
        assert_eq!(story.read_count, 0);
        assert!(!story.is_premium);
        assert!(story.average_rating.is_none());
    }

    #[test]
    fn test_rate_request_omits_empty_comment() {
        let req = RateRequest {
            story_id: 7,
            rating: 5.0,
            comment: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("comment"));
    }
}
