//! Landing-page redirect resolver.
//!
//! A one-shot state machine: it waits in `Pending` while the session
//! resolves, then picks exactly one destination and stays there. Once a
//! redirect state is reached further auth changes produce no navigation,
//! so a standard user sent to `/` (the landing route itself) cannot bounce.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use super::table::{ADMIN_ROUTE, DEFAULT_ROUTE, LOGIN_ROUTE};
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolverState {
    #[default]
    Pending,
    RedirectingToAuth,
    RedirectingToAdmin,
    RedirectingToDefault,
}

impl ResolverState {
    /// Where this state navigates, if anywhere.
    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            Self::RedirectingToAuth => Some(LOGIN_ROUTE),
            Self::RedirectingToAdmin => Some(ADMIN_ROUTE),
            Self::RedirectingToDefault => Some(DEFAULT_ROUTE),
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Transition rule for a single auth snapshot.
#[must_use]
pub fn decide(auth: &AuthState) -> ResolverState {
    if auth.loading {
        return ResolverState::Pending;
    }
    match auth.role() {
        None => ResolverState::RedirectingToAuth,
        Some(Role::Admin) => ResolverState::RedirectingToAdmin,
        Some(Role::Standard) => ResolverState::RedirectingToDefault,
    }
}

/// Per-mount resolver instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectResolver {
    state: ResolverState,
}

impl RedirectResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// Feed an auth snapshot. Returns the navigation to perform, which is
    /// `Some` at most once over the resolver's lifetime.
    pub fn observe(&mut self, auth: &AuthState) -> Option<&'static str> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = decide(auth);
        self.state.target()
    }
}
