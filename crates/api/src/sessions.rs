//! Server-side session store.
//!
//! Sessions are keyed by a random UUID carried in a signed HttpOnly cookie;
//! the store is the authority on what a session id means. Expired entries
//! are dropped lazily on access.

use axum_extra::extract::cookie::Key;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use sha2::{Digest, Sha512};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "aliada_session";

/// An authenticated browser session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Username established at login.
    pub username: String,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

/// In-memory session store keyed by session id.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    /// Creates a store whose sessions live for `ttl_minutes`.
    #[must_use]
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Creates a session for the given username and returns its id.
    #[must_use]
    pub fn create(&self, username: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.insert(
            id.clone(),
            Session {
                username: username.to_string(),
                expires_at: Utc::now() + self.ttl,
            },
        );
        id
    }

    /// Looks up a live session, dropping it if it has expired.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        let session = self.sessions.get(id)?.clone();
        if session.expires_at <= Utc::now() {
            self.sessions.remove(id);
            return None;
        }
        Some(session)
    }

    /// Destroys a session. Unknown ids are ignored.
    pub fn remove(&self, id: &str) {
        self.sessions.remove(id);
    }
}

/// Derives the cookie signing key from the configured session secret.
///
/// The secret can be any length; SHA-512 expands it to the 64 bytes the
/// cookie `Key` requires.
#[must_use]
pub fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}
