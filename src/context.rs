//! Application Context
//!
//! Session state and config, owned by `App` and provided via the Leptos
//! Context API. This is the only route to the API gateway.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::{AuthEvent, AuthState};
use crate::models::SessionUser;
use crate::notify;
use crate::session::SessionStore;

/// App-wide session controller
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current auth state - read
    pub auth: ReadSignal<AuthState>,
    /// Current auth state - write
    set_auth: WriteSignal<AuthState>,
    config: StoredValue<Config>,
}

impl AppContext {
    /// Decide the initial state from local storage
    pub fn new(config: Config) -> Self {
        let initial = AuthState::from_store(&SessionStore::browser());
        log::info!("[APP] Starting {}", if initial.is_authenticated() { "authenticated" } else { "at login" });
        let (auth, set_auth) = signal(initial);
        Self {
            auth,
            set_auth,
            config: StoredValue::new(config),
        }
    }

    /// Gateway whose 401 hook ends this session
    pub fn api(&self) -> ApiClient {
        let ctx = *self;
        ApiClient::browser(self.config.get_value()).on_unauthorized(move || ctx.session_expired())
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.auth.with(|state| state.user().cloned())
    }

    fn dispatch(&self, event: AuthEvent) -> bool {
        let mut changed = false;
        self.set_auth.update(|state| changed = state.apply(event));
        changed
    }

    /// Session already persisted by `ApiClient::login`
    pub fn logged_in(&self, user: SessionUser) {
        self.dispatch(AuthEvent::LoggedIn(user));
    }

    pub fn logout(&self) {
        SessionStore::browser().clear_auth();
        self.dispatch(AuthEvent::LoggedOut);
    }

    /// 401 hook: store is already cleared; notify only on the first transition
    fn session_expired(&self) {
        if self.dispatch(AuthEvent::Unauthorized) {
            notify::alert("Sua sessão expirou. Faça login novamente.");
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
