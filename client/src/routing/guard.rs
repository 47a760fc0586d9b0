//! Route guard: decides whether a protected view may render.
//!
//! The decision is a pure function of the required role and the current
//! [`AuthState`], so callers re-run it on every auth change and a stale
//! "allowed" result cannot outlive a later sign-out.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{ADMIN_ROUTE, DEFAULT_ROUTE, LOGIN_ROUTE, RequiredRole};
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Outcome of guarding one view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show a neutral placeholder only.
    Pending,
    /// Navigate elsewhere without rendering the view.
    Redirect(&'static str),
    Allow,
}

/// Evaluate access to a view that requires `required`.
///
/// Any guarded view needs a signed-in principal, including one asking for
/// [`RequiredRole::None`]. Non-admins are sent to the default route from admin
/// views; admins are kept inside the console when they reach a user view.
#[must_use]
pub fn evaluate(required: RequiredRole, state: &AuthState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    let Some(principal) = &state.principal else {
        return GuardDecision::Redirect(LOGIN_ROUTE);
    };
    match (required, principal.role) {
        (RequiredRole::Admin, Role::Standard) => GuardDecision::Redirect(DEFAULT_ROUTE),
        (RequiredRole::Standard, Role::Admin) => GuardDecision::Redirect(ADMIN_ROUTE),
        _ => GuardDecision::Allow,
    }
}
