//! Session State Container
//!
//! The client-side session: a single owned state value with an explicit
//! update/subscribe contract (a `tokio::sync::watch` channel), rehydrated
//! once at application start from the persisted token.
//!
//! # State Machine
//!
//! ```text
//! Uninitialized → Loading → Authenticated
//!                        ↘ Anonymous
//! ```
//!
//! [`Session::bootstrap`] drives the only transition that suspends: with a
//! persisted token it calls the identity endpoint, and on *any* failure —
//! network, 401, 404 — it clears the token and lands in `Anonymous`.
//! Failures are swallowed (logged at debug), never surfaced: a failed
//! revalidation is just "logged out".
//!
//! # Ordering
//!
//! The session is a single-writer value, but a slow bootstrap response can
//! arrive after an explicit login or logout. Each of those bumps a
//! generation counter; a bootstrap commits its result only if the counter
//! is unchanged since it started, so the later explicit transition always
//! wins and a stale response can neither resurrect a session nor clear a
//! newly saved token.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::client::api::ApiClient;
use crate::client::token_store::TokenStore;
use crate::shared::UserProfile;

/// Session lifecycle states
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Before bootstrap has been started
    Uninitialized,
    /// Bootstrap in flight
    Loading,
    /// Logged in
    Authenticated(UserProfile),
    /// Logged out (no token, or revalidation failed)
    Anonymous,
}

impl SessionState {
    /// True until bootstrap has produced a definitive answer
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }

    /// The current user, if authenticated
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

struct SessionInner {
    api: ApiClient,
    tokens: TokenStore,
    state: watch::Sender<SessionState>,
    /// Bumped by login/logout; guards against stale bootstrap commits
    generation: Mutex<u64>,
}

/// The session container. Cheap to clone; all clones share state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(api: ApiClient, tokens: TokenStore) -> Self {
        let (state, _) = watch::channel(SessionState::Uninitialized);
        Self {
            inner: Arc::new(SessionInner {
                api,
                tokens,
                state,
                generation: Mutex::new(0),
            }),
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// The current user, if authenticated
    pub fn user(&self) -> Option<UserProfile> {
        self.state().user().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Revalidate the persisted token against the identity endpoint.
    ///
    /// Called once at application start. Without a persisted token this
    /// makes no network call and lands directly in `Anonymous`.
    pub async fn bootstrap(&self) {
        let started_generation = *self.inner.generation.lock().unwrap();
        self.inner.state.send_replace(SessionState::Loading);

        let Some(token) = self.inner.tokens.load() else {
            self.commit(started_generation, SessionState::Anonymous, false);
            return;
        };

        match self.inner.api.me(&token).await {
            Ok(user) => {
                self.commit(started_generation, SessionState::Authenticated(user), false);
            }
            Err(e) => {
                tracing::debug!("Session bootstrap failed, clearing token: {}", e);
                self.commit(started_generation, SessionState::Anonymous, true);
            }
        }
    }

    /// Enter the authenticated state with a token and user obtained from
    /// register or login. Persists the token; no network call.
    pub fn login(&self, token: &str, user: UserProfile) {
        let mut generation = self.inner.generation.lock().unwrap();
        *generation += 1;
        if let Err(e) = self.inner.tokens.save(token) {
            tracing::warn!("Failed to persist token: {}", e);
        }
        self.inner.state.send_replace(SessionState::Authenticated(user));
    }

    /// Clear the persisted token and the user. No network call; tokens are
    /// stateless and cannot be revoked server-side.
    pub fn logout(&self) {
        let mut generation = self.inner.generation.lock().unwrap();
        *generation += 1;
        if let Err(e) = self.inner.tokens.clear() {
            tracing::warn!("Failed to clear token: {}", e);
        }
        self.inner.state.send_replace(SessionState::Anonymous);
    }

    /// Replace the cached user after a profile edit performed elsewhere.
    /// The token is untouched; a no-op unless currently authenticated.
    pub fn update_user(&self, user: UserProfile) {
        let _generation = self.inner.generation.lock().unwrap();
        let authenticated =
            matches!(&*self.inner.state.borrow(), SessionState::Authenticated(_));
        if authenticated {
            self.inner.state.send_replace(SessionState::Authenticated(user));
        }
    }

    /// Commit a bootstrap result unless login/logout moved the session on
    /// while the request was in flight.
    fn commit(&self, started_generation: u64, state: SessionState, clear_token: bool) {
        let generation = self.inner.generation.lock().unwrap();
        if *generation != started_generation {
            tracing::debug!("Discarding stale bootstrap result");
            return;
        }
        if clear_token {
            if let Err(e) = self.inner.tokens.clear() {
                tracing::warn!("Failed to clear token: {}", e);
            }
        }
        self.inner.state.send_replace(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use crate::shared::Role;
    use assert_matches::assert_matches;
    use chrono::Utc;

    fn test_session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let api = ApiClient::new(ClientConfig::with_server_url("http://127.0.0.1:9"));
        let tokens = TokenStore::with_path(dir.path().join("auth_token"));
        (dir, Session::new(api, tokens))
    }

    fn test_user() -> UserProfile {
        UserProfile {
            id: "user-1".to_string(),
            email: "a@b.com".to_string(),
            name: None,
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_uninitialized_and_loading() {
        let (_dir, session) = test_session();
        assert_matches!(session.state(), SessionState::Uninitialized);
        assert!(session.is_loading());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_is_anonymous_without_network() {
        // The API URL points at a closed port; reaching it would error the
        // test only if the token-less path ever issued a request and hung.
        let (_dir, session) = test_session();
        session.bootstrap().await;
        assert_matches!(session.state(), SessionState::Anonymous);
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_login_persists_token_and_authenticates() {
        let (dir, session) = test_session();
        session.login("tok-1", test_user());
        assert_matches!(session.state(), SessionState::Authenticated(_));
        assert_eq!(session.user().unwrap().email, "a@b.com");

        let store = TokenStore::with_path(dir.path().join("auth_token"));
        assert_eq!(store.load().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_logout_clears_token_and_user() {
        let (dir, session) = test_session();
        session.login("tok-1", test_user());
        session.logout();
        assert_matches!(session.state(), SessionState::Anonymous);

        let store = TokenStore::with_path(dir.path().join("auth_token"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_update_user_replaces_cached_user() {
        let (_dir, session) = test_session();
        session.login("tok-1", test_user());

        let mut edited = test_user();
        edited.name = Some("Edited".to_string());
        session.update_user(edited);
        assert_eq!(session.user().unwrap().name.as_deref(), Some("Edited"));
    }

    #[test]
    fn test_update_user_is_noop_when_anonymous() {
        let (_dir, session) = test_session();
        session.logout();
        session.update_user(test_user());
        assert_matches!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_subscribe_sees_transitions() {
        let (_dir, session) = test_session();
        let rx = session.subscribe();
        session.login("tok-1", test_user());
        assert_matches!(&*rx.borrow(), SessionState::Authenticated(_));
    }
}
