//! Audit trail of authentication events.
//!
//! Entries are kept newest-last in a bounded `VecDeque`; once the cap is
//! reached the oldest entry is dropped.

use std::collections::VecDeque;

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;

pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityAction {
    Login,
    LoginFailed,
    Logout,
    Register,
    UserCreated,
    UserUpdated,
    UserDeleted,
}

impl SecurityAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::LoginFailed => "login_failed",
            Self::Logout => "logout",
            Self::Register => "register",
            Self::UserCreated => "user_created",
            Self::UserUpdated => "user_updated",
            Self::UserDeleted => "user_deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityLogEntry {
    pub id: i64,
    pub action: &'static str,
    pub user_id: Option<i64>,
    pub details: Option<String>,
    /// RFC 3339, UTC.
    pub timestamp: String,
    pub ip_address: Option<String>,
}

struct LogInner {
    next_id: i64,
    entries: VecDeque<SecurityLogEntry>,
}

pub struct SecurityLog {
    capacity: usize,
    inner: RwLock<LogInner>,
}

impl Default for SecurityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SecurityLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(LogInner { next_id: 0, entries: VecDeque::new() }),
        }
    }

    /// Append an event and return the stored entry.
    pub async fn record(
        &self,
        action: SecurityAction,
        user_id: Option<i64>,
        details: Option<String>,
        ip_address: Option<String>,
    ) -> SecurityLogEntry {
        let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default();
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let entry = SecurityLogEntry {
            id: inner.next_id,
            action: action.as_str(),
            user_id,
            details,
            timestamp,
            ip_address,
        };
        if inner.entries.len() >= self.capacity {
            inner.entries.pop_front();
        }
        inner.entries.push_back(entry.clone());
        tracing::info!(action = entry.action, user_id = ?entry.user_id, "security event");
        entry
    }

    /// The `limit` most recent entries, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<SecurityLogEntry> {
        self.inner.read().await.entries.iter().rev().take(limit).cloned().collect()
    }

    /// All retained entries, newest first.
    pub async fn list(&self) -> Vec<SecurityLogEntry> {
        self.inner.read().await.entries.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
#[path = "security_log_test.rs"]
mod tests;
