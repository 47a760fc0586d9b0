//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the account directory, the session store, the pet catalog and
//! the security log, each behind an `Arc` so cloning the state per request is cheap.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{AdminSeed, ServerConfig};
use crate::services::pets::PetCatalog;
use crate::services::security_log::SecurityLog;
use crate::services::session::SessionStore;
use crate::services::users::{NewUser, PublicUser, Role, UserDirectory, UserError};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub users: Arc<UserDirectory>,
    pub sessions: Arc<SessionStore>,
    pub pets: Arc<PetCatalog>,
    pub security_log: Arc<SecurityLog>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self {
            config: Arc::new(config),
            users: Arc::new(UserDirectory::new()),
            sessions: Arc::new(sessions),
            pets: Arc::new(PetCatalog::seeded()),
            security_log: Arc::new(SecurityLog::default()),
        }
    }

    /// Create the configured admin account.
    ///
    /// # Errors
    ///
    /// Propagates [`UserError`] from account creation.
    pub async fn seed_admin(&self, seed: &AdminSeed) -> Result<PublicUser, UserError> {
        let new_user = NewUser {
            username: seed.username.clone(),
            password: seed.password.clone(),
            email: format!("{}@localhost", seed.username),
            name: "Administrator".to_owned(),
        };
        self.users.create(new_user, Role::Admin).await
    }
}

/// Periodically drop expired sessions.
pub fn spawn_session_sweeper(state: AppState, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let removed = state.sessions.purge_expired().await;
            if removed > 0 {
                let remaining = state.sessions.len().await;
                tracing::debug!(removed, remaining, "expired sessions purged");
            }
        }
    })
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
