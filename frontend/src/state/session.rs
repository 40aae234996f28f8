//! Session state management
//!
//! One `SessionContext` is provided at app start and reached from every
//! consumer (navbar, page controllers) through Leptos context, so the
//! dependency is explicit rather than an ambient singleton. The context owns
//! both pieces of authentication state: the persisted user projection and the
//! bearer credential. `clear()` is the only way either durable entry is
//! removed, which keeps the two from drifting apart.
//!
//! A present credential is necessary but not sufficient for
//! `is_authenticated()`; authenticated pages re-fetch `/users/me` on mount to
//! heal a credential-without-user divergence after reloads.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use shared::dto::auth::User;

use crate::utils::constants::SESSION_STORAGE_KEY;
use crate::utils::storage;

/// Durable form of the session, written through on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
}

impl SessionSnapshot {
    /// Authenticated exactly when a user projection is held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: RwSignal<Option<User>>,
}

impl SessionContext {
    /// Rehydrate from durable storage; absent or corrupt state starts
    /// unauthenticated.
    pub fn load() -> Self {
        let snapshot = storage::get(SESSION_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str::<SessionSnapshot>(&raw).ok())
            .unwrap_or_default();

        Self {
            user: RwSignal::new(snapshot.user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Reactive view of the user for templates.
    pub fn user_signal(&self) -> RwSignal<Option<User>> {
        self.user
    }

    pub fn is_subscribed(&self) -> bool {
        self.user.with(|user| {
            user.as_ref()
                .map(|user| user.is_subscribed)
                .unwrap_or(false)
        })
    }

    /// Replace the user wholesale and write the snapshot through to storage.
    pub fn set_user(&self, user: Option<User>) {
        let snapshot = SessionSnapshot { user: user.clone() };
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                storage::set(SESSION_STORAGE_KEY, &json);
            }
            Err(err) => log::error!("failed to persist session: {err}"),
        }
        self.user.set(user);
    }

    /// Store the bearer credential (7-day expiry).
    pub fn store_token(&self, token: &str) {
        storage::save_token(token);
    }

    /// Current bearer credential, if present and unexpired.
    pub fn token(&self) -> Option<String> {
        storage::load_token()
    }

    /// Clear the session and the credential in one step. Logout and
    /// authorization expiry both come through here; nothing else removes
    /// either durable entry.
    pub fn clear(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        storage::clear_token();
        self.user.set(None);
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::load();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// React to an expired authorization: purge the session and issue one full
/// navigation to the login route. Page controllers call this when a gateway
/// returns [`crate::services::http::ApiError::AuthExpired`]; the networking
/// layer itself never navigates.
pub fn expire_session(session: &SessionContext) {
    session.clear();
    if let Some(window) = web_sys::window() {
        if window.location().set_href("/login").is_err() {
            log::error!("failed to navigate to /login after session expiry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_authentication_follows_user() {
        let mut snapshot = SessionSnapshot::default();
        assert!(!snapshot.is_authenticated());

        snapshot.user = Some(User {
            id: 1,
            email: "demo@storyland.com".to_string(),
            full_name: Some("Demo Family".to_string()),
            is_subscribed: true,
            subscription_tier: "premium".to_string(),
        });
        assert!(snapshot.is_authenticated());

        snapshot.user = None;
        assert!(!snapshot.is_authenticated());
    }

    #[test]
    fn test_snapshot_survives_round_trip() {
        let snapshot = SessionSnapshot {
            user: Some(User {
                id: 7,
                email: "parent@example.com".to_string(),
                full_name: None,
                is_subscribed: false,
                subscription_tier: "free".to_string(),
            }),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let rehydrated: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(rehydrated, snapshot);
        assert!(rehydrated.is_authenticated());
    }

    #[test]
    fn test_cleared_snapshot_round_trip() {
        let json = serde_json::to_string(&SessionSnapshot::default()).unwrap();
        let rehydrated: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert!(rehydrated.user.is_none());
        assert!(!rehydrated.is_authenticated());
    }
}
