//! Session Store
//!
//! Token + user profile persistence and JWT claim helpers.
//! Claims are only decoded, never verified: the backend owns signatures.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde_json::{Map, Value};

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::models::{LoginResponse, Role, SessionUser};

/// JWT claims map
pub type Claims = Map<String, Value>;

const ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
const NAME_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
const NAME_ID_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";

// ========================
// Storage backends
// ========================

/// Synchronous string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `window.localStorage`
///
/// Every call re-resolves the storage handle; when it is unavailable
/// (private mode, sandboxed iframe) reads return `None` and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::error!("[SESSION] Failed to write {}", key);
                }
            }
            None => log::warn!("[SESSION] localStorage unavailable, {} not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ========================
// Session store
// ========================

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore = LocalStorage> {
    storage: S,
}

impl SessionStore<LocalStorage> {
    pub fn browser() -> Self {
        Self { storage: LocalStorage }
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn set_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => log::error!("[SESSION] Failed to serialize user: {}", e),
        }
    }

    /// Stored profile; an unreadable entry counts as absent
    pub fn get_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("[SESSION] Discarding unreadable user profile: {}", e);
                None
            }
        }
    }

    pub fn clear_auth(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        log::info!("[SESSION] Cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(now_secs())
    }

    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.get_token()
            .map(|token| !is_token_expired_at(&token, now))
            .unwrap_or(false)
    }

    /// Restore a complete, unexpired session; anything else clears the store
    pub fn restore(&self) -> Option<SessionUser> {
        self.restore_at(now_secs())
    }

    pub fn restore_at(&self, now: i64) -> Option<SessionUser> {
        let user = self.get_user();
        match (self.is_authenticated_at(now), user) {
            (true, Some(user)) => Some(user),
            _ => {
                self.clear_auth();
                None
            }
        }
    }

    /// Persist a fresh login
    pub fn start(&self, token: &str, user: &SessionUser) {
        self.set_token(token);
        self.set_user(user);
    }
}

// ========================
// JWT helpers
// ========================

pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Decode the payload segment of a `header.payload.signature` token
pub fn parse_jwt(token: &str) -> Option<Claims> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || payload.is_empty() {
        return None;
    }

    let trimmed = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .ok()?;

    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

pub fn is_token_expired(token: &str) -> bool {
    is_token_expired_at(token, now_secs())
}

/// Fail-closed: no decodable numeric `exp` means expired
pub fn is_token_expired_at(token: &str, now: i64) -> bool {
    let exp = parse_jwt(token).and_then(|claims| claims.get("exp").and_then(Value::as_f64));
    match exp {
        Some(exp) => exp < now as f64,
        None => true,
    }
}

fn claim_str<'a>(claims: &'a Claims, key: &str) -> Option<&'a str> {
    match claims.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        Value::Array(values) => values.iter().find_map(Value::as_str),
        _ => None,
    }
}

/// Build the persisted profile from login form email + response + token claims
pub fn derive_user(email: &str, token: &str, response: &LoginResponse) -> SessionUser {
    let claims = parse_jwt(token).unwrap_or_default();

    let role = response
        .roles
        .first()
        .cloned()
        .or_else(|| claim_str(&claims, ROLE_CLAIM).map(str::to_string))
        .unwrap_or_else(|| Role::Client.as_str().to_string());

    SessionUser {
        email: email.to_string(),
        username: claim_str(&claims, NAME_CLAIM).unwrap_or(email).to_string(),
        role,
        roles: response.roles.clone(),
        expiration: response.expiration.clone(),
        jti: claim_str(&claims, "jti").map(str::to_string),
        user_id: claim_str(&claims, NAME_ID_CLAIM).map(str::to_string),
    }
}
