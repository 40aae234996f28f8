//! Subscription gateway: checkout, status, and cancellation

use serde::Deserialize;
use shared::dto::subscription::{CheckoutSession, SubscriptionStatus};

use crate::services::http::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct CancelResponse {
    #[allow(dead_code)]
    message: String,
}

#[derive(Clone, Debug, Default)]
pub struct SubscriptionApi {
    client: ApiClient,
}

impl SubscriptionApi {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    /// Start a checkout session. The caller navigates the whole page to the
    /// returned URL; the payment flow never runs in-app.
    pub async fn create_checkout_session(&self) -> Result<CheckoutSession, ApiError> {
        self.client
            .post_empty("/subscriptions/create-checkout-session")
            .await
    }

    pub async fn status(&self) -> Result<SubscriptionStatus, ApiError> {
        self.client.get_json("/subscriptions/status").await
    }

    pub async fn cancel(&self) -> Result<(), ApiError> {
        let _ack: CancelResponse = self.client.post_empty("/subscriptions/cancel").await?;
        Ok(())
    }
}
