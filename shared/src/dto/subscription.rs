use serde::{Deserialize, Serialize};

/// Response from `POST /subscriptions/create-checkout-session`
///
/// The caller performs a full-page navigation to `checkout_url`; payment
/// itself happens entirely in the external processor's flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSession {
    pub checkout_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Subscription status from `GET /subscriptions/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub is_subscribed: bool,
    #[serde(default = "default_tier")]
    pub subscription_tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<SubscriptionFeatures>,
}

fn default_tier() -> String {
    "free".to_string()
}

/// Plan entitlements attached to a subscription status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionFeatures {
    /// -1 means unlimited
    pub stories_per_month: i32,
    #[serde(default)]
    pub can_download: bool,
    #[serde(default)]
    pub can_generate: bool,
    #[serde(default)]
    pub ad_free: bool,
}

impl SubscriptionFeatures {
    /// Human-readable monthly story allowance.
    pub fn stories_label(&self) -> String {
        if self.stories_per_month == -1 {
            "Unlimited stories".to_string()
        } else {
            format!("{} stories/month", self.stories_per_month)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stories_label() {
        let unlimited = SubscriptionFeatures {
            stories_per_month: -1,
            can_download: true,
            can_generate: true,
            ad_free: true,
        };
        assert_eq!(unlimited.stories_label(), "Unlimited stories");

        let free = SubscriptionFeatures {
            stories_per_month: 5,
            can_download: false,
            can_generate: false,
            ad_free: false,
        };
        assert_eq!(free.stories_label(), "5 stories/month");
    }

    #[test]
    fn test_status_parses_server_shape() {
        let status: SubscriptionStatus = serde_json::from_str(
            r#"{
                "is_subscribed": true,
                "subscription_tier": "premium",
                "features": {
                    "stories_per_month": -1,
                    "can_download": true,
                    "can_generate": true,
                    "ad_free": true
                }
            }"#,
        )
        .unwrap();
        assert!(status.is_subscribed);
        assert_eq!(status.subscription_tier, "premium");
        assert!(status.features.unwrap().can_generate);
    }

    #[test]
    fn test_status_defaults() {
        let status: SubscriptionStatus = serde_json::from_str("{}").unwrap();
        assert!(!status.is_subscribed);
        assert_eq!(status.subscription_tier, "free");
        assert!(status.features.is_none());
    }
}
