//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, the landing redirect resolver and user-aware
//! components to coordinate login redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! [`IdentityContext`] is created once by the root component, which kicks off
//! session resolution and mirrors every transition into an
//! `RwSignal<AuthState>` through [`IdentityContext::subscribe`]. Each
//! transition is applied under the lock and the resulting snapshot is handed
//! to every listener after the lock is released, so all observers see the
//! same state for a given change. Snapshots carry a version; a delivery that
//! is overtaken by a transition triggered from inside a listener is cut short.
//!
//! Resolution results are sequenced: [`IdentityContext::begin_resolution`]
//! hands out a ticket stamped with the current epoch, and any login, logout or
//! registration bumps the epoch. A ticket from an older epoch is discarded on
//! completion, so a session check that lands after a logout cannot resurrect
//! the principal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::api::{SessionError, SessionService};
use crate::net::types::{Credentials, Principal, Registration, Role};

/// Snapshot of session-resolution progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub principal: Option<Principal>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the stored session is being checked.
    #[must_use]
    pub fn loading() -> Self {
        Self { principal: None, loading: true }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { principal: None, loading: false }
    }

    #[must_use]
    pub fn signed_in(principal: Principal) -> Self {
        Self { principal: Some(principal), loading: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.principal.as_ref().map(|p| p.role)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}

/// Handle returned by [`IdentityContext::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Proof that a session check was started in a given epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionTicket {
    epoch: u64,
}

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

struct Inner {
    state: AuthState,
    epoch: u64,
    /// Bumped on every applied transition; a delivery stops once it is stale.
    version: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Process-wide source of truth for who is signed in.
#[derive(Clone)]
pub struct IdentityContext {
    inner: Arc<Mutex<Inner>>,
}

impl IdentityContext {
    /// Create a context in the loading state. Call [`Self::resolve_session`]
    /// (or the ticket pair) to finish initialization.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AuthState::loading(),
                epoch: 0,
                version: 0,
                next_subscription: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Current snapshot. Never blocks on network activity.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.lock().state.clone()
    }

    /// Register a listener invoked after every state transition.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sub, _)| *sub != id);
        inner.listeners.len() != before
    }

    /// Start a session check. The ticket must be passed back to
    /// [`Self::complete_resolution`].
    #[must_use]
    pub fn begin_resolution(&self) -> ResolutionTicket {
        ResolutionTicket { epoch: self.lock().epoch }
    }

    /// Apply the outcome of a session check.
    ///
    /// Failures fail closed (no principal). Returns `false` when the ticket is
    /// stale because a login, logout or registration happened in between; the
    /// result is then dropped.
    pub fn complete_resolution(
        &self,
        ticket: ResolutionTicket,
        result: Result<Option<Principal>, SessionError>,
    ) -> bool {
        let principal = match result {
            Ok(principal) => principal,
            Err(e) => {
                log::warn!("session resolution failed, treating as signed out: {e}");
                None
            }
        };

        let mut applied = false;
        self.transition(|inner| {
            if inner.epoch != ticket.epoch {
                log::debug!("discarding stale session resolution (epoch {} != {})", ticket.epoch, inner.epoch);
                return false;
            }
            applied = true;
            let next = AuthState { principal, loading: false };
            if inner.state == next {
                return false;
            }
            inner.state = next;
            true
        });
        applied
    }

    /// Resolve the stored session through `service`.
    pub async fn resolve_session<S>(&self, service: &S) -> bool
    where
        S: SessionService + ?Sized,
    {
        let ticket = self.begin_resolution();
        let result = service.resolve_session().await;
        self.complete_resolution(ticket, result)
    }

    /// Install `principal` as the signed-in actor.
    pub fn sign_in(&self, principal: Principal) {
        log::debug!("signed in as {} ({:?})", principal.username, principal.role);
        self.transition(|inner| {
            inner.epoch += 1;
            inner.state = AuthState::signed_in(principal);
            true
        });
    }

    /// Clear the principal. Idempotent: listeners only hear about real changes,
    /// but any in-flight resolution is invalidated either way.
    pub fn clear(&self) {
        self.transition(|inner| {
            inner.epoch += 1;
            let next = AuthState::signed_out();
            if inner.state == next {
                return false;
            }
            inner.state = next;
            true
        });
    }

    /// Authenticate through `service`. On failure the state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the service's [`SessionError`] (invalid credentials, network or
    /// server failure).
    pub async fn login<S>(&self, service: &S, credentials: &Credentials) -> Result<Principal, SessionError>
    where
        S: SessionService + ?Sized,
    {
        let principal = service.login(credentials).await?;
        self.sign_in(principal.clone());
        Ok(principal)
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns the service's [`SessionError`]; `UsernameTaken` when the name
    /// is in use.
    pub async fn register<S>(&self, service: &S, registration: &Registration) -> Result<Principal, SessionError>
    where
        S: SessionService + ?Sized,
    {
        let principal = service.register(registration).await?;
        self.sign_in(principal.clone());
        Ok(principal)
    }

    /// Sign out locally, then tell the server. A server failure is only logged.
    pub async fn logout<S>(&self, service: &S)
    where
        S: SessionService + ?Sized,
    {
        self.clear();
        if let Err(e) = service.logout().await {
            log::warn!("server logout failed: {e}");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate under the lock; if `apply` reports a change, notify listeners
    /// with the new snapshot once the lock is released.
    ///
    /// A listener may itself trigger a transition. The nested transition
    /// delivers its own snapshot to everyone, and the outer delivery stops
    /// as soon as its version is no longer current, so no listener ends on
    /// an older snapshot than the context holds.
    fn transition<F>(&self, apply: F)
    where
        F: FnOnce(&mut Inner) -> bool,
    {
        let (version, snapshot, listeners) = {
            let mut inner = self.lock();
            if !apply(&mut inner) {
                return;
            }
            inner.version += 1;
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.version, inner.state.clone(), listeners)
        };
        for listener in listeners {
            if self.lock().version != version {
                log::debug!("superseded auth snapshot (version {version}) not delivered further");
                return;
            }
            listener(&snapshot);
        }
    }
}

impl Default for IdentityContext {
    fn default() -> Self {
        Self::new()
    }
}
