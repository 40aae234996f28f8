use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Login response (OAuth2 password grant)
///
/// The login endpoint takes a multipart form (`username`, `password`) rather
/// than JSON; only the response body is a DTO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// User account information (public, safe to hold client-side)
///
/// Replaced wholesale on login and on every `/users/me` refresh; never
/// patched field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_subscribed: bool,
    #[serde(default = "default_tier")]
    pub subscription_tier: String,
}

fn default_tier() -> String {
    "free".to_string()
}

impl User {
    /// Display name for the navbar and profile header.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Story Explorer")
    }
}

/// Error response body returned by the API on 4xx/5xx
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_to_free_tier() {
        // A minimal server payload must still produce a coherent user
        let user: User =
            serde_json::from_str(r#"{"id": 1, "email": "demo@storyland.com"}"#).unwrap();
        assert!(!user.is_subscribed);
        assert_eq!(user.subscription_tier, "free");
        assert_eq!(user.display_name(), "Story Explorer");
    }

    #[test]
    fn test_display_name_usable_after_storing_the_user() {
        // The login flow formats a greeting from the name and then hands the
        // user off to the session; the greeting must not borrow from it
        let user = User {
            id: 1,
            email: "demo@storyland.com".to_string(),
            full_name: Some("Demo Family".to_string()),
            is_subscribed: true,
            subscription_tier: "premium".to_string(),
        };
        let name = user.display_name().to_string();
        let stored = Some(user);
        assert_eq!(name, "Demo Family");
        assert!(stored.is_some());
    }

    #[test]
    fn test_register_request_omits_missing_name() {
        let req = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            full_name: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("full_name"));
    }
}
