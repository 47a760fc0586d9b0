//! Central dispatcher: path + auth state -> what to show.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use super::guard::{self, GuardDecision};
use super::table::{RequiredRole, RouteParams, RouteTable, View, normalize};
use crate::state::auth::AuthState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Session still resolving for a guarded route.
    Pending,
    /// Leave the current path without rendering its view.
    Redirect(&'static str),
    Render(View, RouteParams),
    NotFound,
}

/// Match `path` against `table` and apply the guard to protected routes.
#[must_use]
pub fn dispatch(table: &RouteTable, path: &str, auth: &AuthState) -> Outcome {
    let Some(found) = table.resolve(path) else {
        return Outcome::NotFound;
    };
    if found.descriptor.required == RequiredRole::None {
        return Outcome::Render(found.descriptor.view, found.params);
    }
    match guard::evaluate(found.descriptor.required, auth) {
        GuardDecision::Pending => Outcome::Pending,
        GuardDecision::Redirect(target) => Outcome::Redirect(target),
        GuardDecision::Allow => Outcome::Render(found.descriptor.view, found.params),
    }
}

/// Whether navigating from `current` to `target` would change location.
/// Navigation to the current path is suppressed.
#[must_use]
pub fn should_navigate(current: &str, target: &str) -> bool {
    normalize(current) != normalize(target)
}
