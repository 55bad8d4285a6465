//! Auth Session Store
//!
//! Who is signed in, backed by localStorage. The store is provided via
//! context at the root, hydrated exactly once on mount, and written only
//! by the login, register and logout transitions below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::storage;

#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until the first read of localStorage has happened
    pub loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Rebuild the session from stored values. Both entries must be
    /// present and the profile must parse; anything else starts the
    /// session signed out without complaint.
    pub fn from_stored(token: Option<String>, user_json: Option<String>) -> Self {
        let user = user_json.and_then(|json| serde_json::from_str::<User>(&json).ok());
        match (token, user) {
            (Some(token), Some(user)) => Session {
                user: Some(user),
                token: Some(token),
                loading: false,
            },
            _ => Session {
                user: None,
                token: None,
                loading: false,
            },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Session Transitions
// ========================

/// Read storage once on startup
pub fn hydrate_session(store: &SessionStore) {
    let next = Session::from_stored(
        storage::get(storage::TOKEN_KEY),
        storage::get(storage::USER_KEY),
    );
    web_sys::console::log_1(
        &format!("[SESSION] Hydrated, authenticated={}", next.is_authenticated()).into(),
    );
    *store.user().write() = next.user;
    *store.token().write() = next.token;
    *store.loading().write() = false;
}

/// Persist the fresh credentials and update the store, in that order.
/// `loading` is untouched here, it only changes during hydration.
fn remember(store: &SessionStore, token: String, user: User) {
    storage::set(storage::TOKEN_KEY, &token);
    storage::set(
        storage::USER_KEY,
        &serde_json::to_string(&user).unwrap_or_default(),
    );
    *store.token().write() = Some(token);
    *store.user().write() = Some(user);
}

/// Sign in. On failure the previous session state is left untouched and
/// the error goes back to the caller for its own messaging.
pub async fn login(store: &SessionStore, email: String, password: String) -> api::Result<User> {
    let resp = api::login(&LoginRequest { email, password }).await?;
    let user = User::from(&resp);
    remember(store, resp.token, user.clone());
    web_sys::console::log_1(&format!("[SESSION] Signed in as {}", user.email).into());
    Ok(user)
}

/// Create an account and sign in with the returned credentials
pub async fn register(store: &SessionStore, req: RegisterRequest) -> api::Result<User> {
    let resp = api::register(&req).await?;
    let user = User::from(&resp);
    remember(store, resp.token, user.clone());
    web_sys::console::log_1(&format!("[SESSION] Registered {}", user.email).into());
    Ok(user)
}

/// Clear storage and memory unconditionally
pub fn logout(store: &SessionStore) {
    storage::remove(storage::TOKEN_KEY);
    storage::remove(storage::USER_KEY);
    *store.token().write() = None;
    *store.user().write() = None;
    web_sys::console::log_1(&"[SESSION] Signed out".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user() -> User {
        User {
            id: 7,
            email: "demo@taskmanager.com".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            full_name: "Demo User".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_loading_and_signed_out() {
        let session = Session::new();
        assert!(session.loading);
        assert!(!session.is_authenticated());
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_from_stored_round_trip() {
        let user = make_user();
        let json = serde_json::to_string(&user).unwrap();
        let session = Session::from_stored(Some("jwt-abc".to_string()), Some(json));
        assert!(session.is_authenticated());
        assert!(!session.loading);
        assert_eq!(session.token.as_deref(), Some("jwt-abc"));
        assert_eq!(session.user, Some(user));
    }

    #[test]
    fn test_from_stored_requires_both_entries() {
        let json = serde_json::to_string(&make_user()).unwrap();

        let session = Session::from_stored(None, Some(json));
        assert!(!session.is_authenticated());
        assert_eq!(session.user, None);

        let session = Session::from_stored(Some("jwt-abc".to_string()), None);
        assert!(!session.is_authenticated());
        assert_eq!(session.token, None);
    }

    #[test]
    fn test_from_stored_rejects_malformed_profile() {
        let session =
            Session::from_stored(Some("jwt-abc".to_string()), Some("{not json".to_string()));
        assert!(!session.is_authenticated());
        assert_eq!(session.user, None);
        assert!(!session.loading);
    }
}
