//! View Controller
//!
//! Top-level auth state machine and role dispatch. Kept free of Leptos so
//! transitions can be tested natively; `AppContext` drives it from signals.

use crate::models::{Role, SessionUser};
use crate::session::{KeyValueStore, SessionStore};

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(SessionUser),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    /// Valid stored session found at startup
    SessionRestored(SessionUser),
    LoggedIn(SessionUser),
    LoggedOut,
    /// Backend answered 401
    Unauthorized,
}

impl AuthState {
    /// Startup decision from persisted state
    pub fn from_store<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        let mut state = AuthState::Unauthenticated;
        if let Some(user) = store.restore() {
            state.apply(AuthEvent::SessionRestored(user));
        }
        state
    }

    /// Apply an event; returns whether the state changed
    pub fn apply(&mut self, event: AuthEvent) -> bool {
        let next = match (&*self, event) {
            (_, AuthEvent::SessionRestored(user)) | (_, AuthEvent::LoggedIn(user)) => {
                AuthState::Authenticated(user)
            }
            (AuthState::Unauthenticated, AuthEvent::LoggedOut | AuthEvent::Unauthorized) => {
                return false;
            }
            (AuthState::Authenticated(_), AuthEvent::LoggedOut | AuthEvent::Unauthorized) => {
                AuthState::Unauthenticated
            }
        };
        let changed = *self != next;
        *self = next;
        changed
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            AuthState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }
}

/// Dashboard fragment picked for a user
#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    Admin,
    ServiceProvider,
    Client,
    /// Role string the client has no view for
    Unsupported(String),
}

impl Dashboard {
    pub fn for_user(user: &SessionUser) -> Self {
        match user.role() {
            Some(Role::Admin) => Dashboard::Admin,
            Some(Role::ServiceProvider) => Dashboard::ServiceProvider,
            Some(Role::Client) => Dashboard::Client,
            None => Dashboard::Unsupported(user.role.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::session::tests::{make_token, make_user, MemoryStorage};

    #[test]
    fn test_startup_with_valid_session() {
        let store = SessionStore::new(MemoryStorage::default());
        store.start(&make_token(json!({ "exp": 4_000_000_000u64 })), &make_user("Client"));
        assert_eq!(AuthState::from_store(&store), AuthState::Authenticated(make_user("Client")));
    }

    #[test]
    fn test_startup_with_expired_session_clears_store() {
        let store = SessionStore::new(MemoryStorage::default());
        store.start(&make_token(json!({ "exp": 1 })), &make_user("Client"));
        assert_eq!(AuthState::from_store(&store), AuthState::Unauthenticated);
        assert!(store.get_user().is_none());
    }

    #[test]
    fn test_transitions() {
        let mut state = AuthState::Unauthenticated;
        assert!(!state.apply(AuthEvent::LoggedOut));
        assert!(state.apply(AuthEvent::LoggedIn(make_user("Admin"))));
        assert!(state.is_authenticated());
        assert!(state.apply(AuthEvent::LoggedOut));
        assert_eq!(state, AuthState::Unauthenticated);
    }

    #[test]
    fn test_repeated_unauthorized_is_idempotent() {
        let mut state = AuthState::Authenticated(make_user("Client"));
        let changes = (0..3).filter(|_| state.apply(AuthEvent::Unauthorized)).count();
        assert_eq!(changes, 1);
        assert_eq!(state, AuthState::Unauthenticated);
    }

    #[test]
    fn test_role_dispatch() {
        assert_eq!(Dashboard::for_user(&make_user("Admin")), Dashboard::Admin);
        assert_eq!(Dashboard::for_user(&make_user("ServiceProvider")), Dashboard::ServiceProvider);
        assert_eq!(Dashboard::for_user(&make_user("Client")), Dashboard::Client);
        assert_eq!(
            Dashboard::for_user(&make_user("Auditor")),
            Dashboard::Unsupported("Auditor".into())
        );
        assert_eq!(Dashboard::for_user(&make_user("")), Dashboard::Unsupported(String::new()));
    }
}
