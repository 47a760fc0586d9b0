use super::*;
use crate::net::types::Principal;

const ALL_REQUIREMENTS: [RequiredRole; 3] = [RequiredRole::None, RequiredRole::Standard, RequiredRole::Admin];

fn with_role(role: Role) -> AuthState {
    AuthState::signed_in(Principal {
        id: 1,
        username: "pat".to_owned(),
        name: "Pat".to_owned(),
        email: "pat@example.com".to_owned(),
        role,
    })
}

#[test]
fn loading_is_pending_for_every_requirement() {
    let states = [AuthState::loading(), AuthState { principal: with_role(Role::Admin).principal, loading: true }];
    for state in &states {
        for required in ALL_REQUIREMENTS {
            assert_eq!(evaluate(required, state), GuardDecision::Pending, "{required:?}");
        }
    }
}

#[test]
fn signed_out_redirects_to_login_for_every_requirement() {
    for required in ALL_REQUIREMENTS {
        assert_eq!(
            evaluate(required, &AuthState::signed_out()),
            GuardDecision::Redirect(LOGIN_ROUTE),
            "{required:?}"
        );
    }
}

#[test]
fn standard_user_never_allowed_into_admin_view() {
    assert_eq!(
        evaluate(RequiredRole::Admin, &with_role(Role::Standard)),
        GuardDecision::Redirect(DEFAULT_ROUTE)
    );
}

#[test]
fn admin_allowed_into_admin_view() {
    assert_eq!(evaluate(RequiredRole::Admin, &with_role(Role::Admin)), GuardDecision::Allow);
}

#[test]
fn standard_user_allowed_into_user_view() {
    assert_eq!(evaluate(RequiredRole::Standard, &with_role(Role::Standard)), GuardDecision::Allow);
}

#[test]
fn admin_is_kept_inside_console() {
    assert_eq!(
        evaluate(RequiredRole::Standard, &with_role(Role::Admin)),
        GuardDecision::Redirect(ADMIN_ROUTE)
    );
}

#[test]
fn any_signed_in_role_passes_unrestricted_guard() {
    assert_eq!(evaluate(RequiredRole::None, &with_role(Role::Standard)), GuardDecision::Allow);
    assert_eq!(evaluate(RequiredRole::None, &with_role(Role::Admin)), GuardDecision::Allow);
}

#[test]
fn sign_out_after_allow_flips_to_redirect() {
    let mut state = with_role(Role::Standard);
    assert_eq!(evaluate(RequiredRole::Standard, &state), GuardDecision::Allow);
    state = AuthState::signed_out();
    assert_eq!(evaluate(RequiredRole::Standard, &state), GuardDecision::Redirect(LOGIN_ROUTE));
}
