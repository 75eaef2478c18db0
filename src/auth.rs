use axum::Router;
use serde::{Deserialize, Serialize};
use tower_sessions::{
    Expiry, MemoryStore, Session, SessionManagerLayer, cookie::Key, session,
};

use crate::{
    config::{AppConfig, DEFAULT_SESSION_SECRET, Env},
    models::Credentials,
};

/// Session key under which the login state is stored.
pub const AUTH_SESSION_KEY: &str = "auth";

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "sid";

/// AuthSession
///
/// The login state kept in the server-side session. Both fields are stored as a
/// single record, so a session is either anonymous or logged in with a username;
/// the logged-in form can only be built from validated `Credentials`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    is_logged_in: bool,
    username: Option<String>,
}

impl AuthSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(credentials: &Credentials) -> Self {
        Self {
            is_logged_in: true,
            username: Some(credentials.username().to_string()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

/// Reads the login state, treating a missing record as anonymous.
pub async fn current(session: &Session) -> Result<AuthSession, session::Error> {
    Ok(session
        .get::<AuthSession>(AUTH_SESSION_KEY)
        .await?
        .unwrap_or_default())
}

/// Marks the session as logged in for `credentials.username()`.
pub async fn sign_in(session: &Session, credentials: &Credentials) -> Result<(), session::Error> {
    session
        .insert(AUTH_SESSION_KEY, AuthSession::authenticated(credentials))
        .await
}

/// Destroys the session: clears its data, deletes it from the store and expires the cookie.
pub async fn sign_out(session: &Session) -> Result<(), session::Error> {
    session.flush().await
}

/// with_sessions
///
/// Wraps `router` in the session manager: an in-process `MemoryStore` referenced by a
/// signed cookie. Sessions last until the browser is closed and are only written once
/// they hold data, so anonymous visitors never receive a cookie.
pub fn with_sessions(router: Router, config: &AppConfig) -> Router {
    let layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_path("/")
        .with_http_only(true)
        .with_secure(config.env == Env::Production)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(signing_key(&config.session_secret));

    router.layer(layer)
}

/// Derives the 64-byte cookie signing key by repeating the secret's bytes.
pub fn signing_key(secret: &str) -> Key {
    let seed = if secret.is_empty() {
        DEFAULT_SESSION_SECRET
    } else {
        secret
    };
    let material: Vec<u8> = seed.bytes().cycle().take(64).collect();
    Key::from(&material)
}
