//! LocalStorage access for the session snapshot and the bearer credential.
//!
//! Two durable entries exist: the serialized session (user projection) and a
//! separate short-lived token entry carrying its own expiry timestamp, so the
//! 7-day credential lifetime survives page reloads. Both are only ever
//! removed together through [`crate::state::session::SessionContext::clear`].

use serde::{Deserialize, Serialize};

use crate::utils::constants::{TOKEN_STORAGE_KEY, TOKEN_TTL_DAYS};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Bearer credential with a client-side expiry deadline (ms since epoch).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredToken {
    pub token: String,
    pub expires_at: f64,
}

impl StoredToken {
    /// Build a token entry valid for [`TOKEN_TTL_DAYS`] from `now_ms`.
    pub fn issued_at(token: String, now_ms: f64) -> Self {
        Self {
            token,
            expires_at: now_ms + TOKEN_TTL_DAYS * MS_PER_DAY,
        }
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read a raw string value; `None` when absent or storage is unavailable.
pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a value, returning whether the write succeeded.
pub fn set(key: &str, value: &str) -> bool {
    local_storage()
        .and_then(|s| s.set_item(key, value).ok())
        .is_some()
}

/// Remove an entry, returning whether the removal succeeded.
pub fn remove(key: &str) -> bool {
    local_storage()
        .and_then(|s| s.remove_item(key).ok())
        .is_some()
}

/// Store the bearer credential with a fresh 7-day expiry.
pub fn save_token(token: &str) {
    let entry = StoredToken::issued_at(token.to_string(), js_sys::Date::now());
    match serde_json::to_string(&entry) {
        Ok(json) => {
            set(TOKEN_STORAGE_KEY, &json);
        }
        Err(err) => log::error!("failed to serialize credential: {err}"),
    }
}

/// Load the bearer credential. Expired or unreadable entries are dropped and
/// read as absent.
pub fn load_token() -> Option<String> {
    let raw = get(TOKEN_STORAGE_KEY)?;
    let entry: StoredToken = match serde_json::from_str(&raw) {
        Ok(entry) => entry,
        Err(_) => {
            remove(TOKEN_STORAGE_KEY);
            return None;
        }
    };
    if entry.is_expired(js_sys::Date::now()) {
        remove(TOKEN_STORAGE_KEY);
        return None;
    }
    Some(entry.token)
}

/// Remove the bearer credential.
pub fn clear_token() {
    remove(TOKEN_STORAGE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_expiry_window() {
        let issued = StoredToken::issued_at("abc".to_string(), 0.0);
        assert_eq!(issued.expires_at, 7.0 * MS_PER_DAY);
        assert!(!issued.is_expired(0.0));
        assert!(!issued.is_expired(7.0 * MS_PER_DAY - 1.0));
        assert!(issued.is_expired(7.0 * MS_PER_DAY));
    }

    #[test]
    fn test_token_round_trip() {
        let entry = StoredToken::issued_at("eyJhbGci".to_string(), 1_000.0);
        let json = serde_json::to_string(&entry).unwrap();
        let back: StoredToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
