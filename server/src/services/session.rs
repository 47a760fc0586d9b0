//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! A session is an opaque random token handed to the browser as an HttpOnly
//! cookie and mapped server-side to a user id and expiry. Expired entries
//! are removed when looked up and by a periodic sweep.

use std::collections::HashMap;
use std::fmt::Write;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
    #[error("session expired")]
    Expired,
}

struct SessionRecord {
    user_id: i64,
    expires_at: Instant,
}

pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, sessions: RwLock::new(HashMap::new()) }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session for `user_id`, returning the token.
    pub async fn create(&self, user_id: i64) -> String {
        let token = generate_token();
        let record = SessionRecord { user_id, expires_at: Instant::now() + self.ttl };
        self.sessions.write().await.insert(token.clone(), record);
        token
    }

    /// Resolve a token to its user id.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown token, `Expired` for one past its TTL (the
    /// entry is dropped).
    pub async fn validate(&self, token: &str) -> Result<i64, SessionError> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            let record = sessions.get(token).ok_or(SessionError::NotFound)?;
            if record.expires_at > now {
                return Ok(record.user_id);
            }
        }
        self.sessions.write().await.remove(token);
        Err(SessionError::Expired)
    }

    /// Delete a session. Returns the user id it belonged to, if any.
    pub async fn revoke(&self, token: &str) -> Option<i64> {
        self.sessions.write().await.remove(token).map(|r| r.user_id)
    }

    /// Delete every session held by `user_id`. Returns how many were removed.
    pub async fn revoke_user(&self, user_id: i64) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| record.user_id != user_id);
        before - sessions.len()
    }

    /// Drop every expired session and return how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| record.expires_at > now);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
