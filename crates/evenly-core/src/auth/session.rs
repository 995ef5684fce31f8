//! Session state manager.
//!
//! A single-owner value with controlled mutation entry points, passed
//! explicitly to whoever needs it (no ambient global). Two states:
//! Anonymous and Authenticated. The transition into Authenticated happens
//! only through `set_token(Some(..))`; the transitions out are `logout()`
//! and the coordinator reacting to a credential rejection from the API.
//!
//! There is no pending state: a profile fetch in flight does not block
//! route decisions, so a brief "authenticated but profile unknown" window
//! is expected and fine.

use evenly_types::UserProfile;

use super::TokenStore;
use anyhow::Result;

/// In-memory session state backed by a [`TokenStore`].
///
/// Invariant: `is_authenticated()` is true iff the token is present and
/// non-empty. `user` may lag behind the token (it is fetched asynchronously
/// after login/restore).
#[derive(Debug)]
pub struct Session {
    store: TokenStore,
    token: Option<String>,
    user: Option<UserProfile>,
    authenticated: bool,
}

impl Session {
    /// Restores the session from the persisted token store.
    ///
    /// Does not fetch the user profile; that happens asynchronously once
    /// the app is running.
    pub fn restore(store: TokenStore) -> Self {
        let token = store.read();
        let authenticated = token.is_some();
        Self {
            store,
            token,
            user: None,
            authenticated,
        }
    }

    /// Starts an anonymous session without touching the store (tests,
    /// `login` command on a clean machine).
    pub fn anonymous(store: TokenStore) -> Self {
        Self {
            store,
            token: None,
            user: None,
            authenticated: false,
        }
    }

    /// Sets or clears the token.
    ///
    /// A present, non-empty token is persisted and marks the session
    /// authenticated. `None` (or an empty string) clears the persisted
    /// token and the user; this is the single exit path for logout.
    ///
    /// # Errors
    /// Returns an error if the token store cannot be written.
    pub fn set_token(&mut self, token: Option<String>) -> Result<()> {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.store.write(&token)?;
                self.token = Some(token);
                self.authenticated = true;
            }
            None => {
                self.store.clear()?;
                self.token = None;
                self.user = None;
                self.authenticated = false;
            }
        }
        Ok(())
    }

    /// Replaces the user profile wholesale.
    ///
    /// The authenticated flag follows the profile: `set_user(None)` after a
    /// failed profile fetch de-authenticates even with a lingering token.
    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.authenticated = user.is_some();
        self.user = user;
    }

    /// Logs out: clears token, store and user. Idempotent.
    ///
    /// # Errors
    /// Returns an error if the token store cannot be cleared.
    pub fn logout(&mut self) -> Result<()> {
        self.set_token(None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::{TempDir, tempdir};

    use super::*;

    fn store_in(dir: &TempDir) -> TokenStore {
        TokenStore::at(dir.path().join("token.json"))
    }

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "user_id": "7f8a1f9c-42cb-4c4f-9f53-0b2c6a3a6f01",
            "email": "testuser1@example.com",
            "full_name": "Test User",
            "phone": null,
            "is_active": true,
            "created_at": "2026-01-15T09:30:00"
        }))
        .unwrap()
    }

    /// set_token(Some) authenticates and persists.
    #[test]
    fn test_set_token_authenticates_and_persists() {
        let dir = tempdir().unwrap();
        let mut session = Session::restore(store_in(&dir));
        assert!(!session.is_authenticated());

        session.set_token(Some("abc123".to_string())).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(store_in(&dir).read(), Some("abc123".to_string()));
    }

    /// set_token(None) clears token, user and store together.
    #[test]
    fn test_set_token_none_clears_everything() {
        let dir = tempdir().unwrap();
        let mut session = Session::restore(store_in(&dir));
        session.set_token(Some("abc123".to_string())).unwrap();
        session.set_user(Some(profile()));

        session.set_token(None).unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
        assert_eq!(store_in(&dir).read(), None);
    }

    /// An empty token string counts as no token.
    #[test]
    fn test_empty_token_is_anonymous() {
        let dir = tempdir().unwrap();
        let mut session = Session::restore(store_in(&dir));

        session.set_token(Some(String::new())).unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(store_in(&dir).read(), None);
    }

    /// logout() twice leaves state identical after the first call.
    #[test]
    fn test_logout_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut session = Session::restore(store_in(&dir));
        session.set_token(Some("abc123".to_string())).unwrap();

        session.logout().unwrap();
        assert!(!session.is_authenticated());

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(store_in(&dir).read(), None);
    }

    /// Restore picks up a persisted token across restarts.
    #[test]
    fn test_restore_from_persisted_token() {
        let dir = tempdir().unwrap();
        store_in(&dir).write("abc123").unwrap();

        let session = Session::restore(store_in(&dir));

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123"));
        assert!(session.user().is_none());
    }

    /// A failed profile fetch (set_user(None)) de-authenticates.
    #[test]
    fn test_set_user_none_deauthenticates() {
        let dir = tempdir().unwrap();
        let mut session = Session::restore(store_in(&dir));
        session.set_token(Some("abc123".to_string())).unwrap();

        session.set_user(None);

        assert!(!session.is_authenticated());
    }

    /// A successful profile fetch populates the user.
    #[test]
    fn test_set_user_populates_profile() {
        let dir = tempdir().unwrap();
        let mut session = Session::restore(store_in(&dir));
        session.set_token(Some("abc123".to_string())).unwrap();

        session.set_user(Some(profile()));

        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "testuser1@example.com");
    }
}
