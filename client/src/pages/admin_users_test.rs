use super::*;

fn principal(id: i64, role: Role) -> Principal {
    Principal {
        id,
        username: format!("user{id}"),
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role,
    }
}

#[test]
fn toggling_role_flips_between_the_two() {
    assert_eq!(toggled_role(Role::Standard), Role::Admin);
    assert_eq!(toggled_role(toggled_role(Role::Admin)), Role::Admin);
}

#[test]
fn role_labels() {
    assert_eq!(role_label(Role::Admin), "Admin");
    assert_eq!(role_label(Role::Standard), "Foster family");
}

#[test]
fn admin_cannot_delete_own_row() {
    let me = principal(1, Role::Admin);
    assert!(!can_delete(&me, Some(&me)));
    assert!(can_delete(&principal(2, Role::Standard), Some(&me)));
    assert!(can_delete(&me, None));
}

#[test]
fn new_account_carries_the_chosen_role() {
    let account = build_new_account(" casey ", "hunter22", "casey@example.com", "Casey", true).unwrap();
    assert_eq!(account.username, "casey");
    assert_eq!(account.role, Role::Admin);
    let account = build_new_account("dana", "hunter22", "dana@example.com", "Dana", false).unwrap();
    assert_eq!(account.role, Role::Standard);
}

#[test]
fn new_account_reuses_registration_checks() {
    assert_eq!(
        build_new_account("ab", "hunter22", "a@example.com", "A", false),
        Err("Username must be at least 3 characters.")
    );
    assert_eq!(
        build_new_account("abc", "hunter22", "nope", "A", false),
        Err("Enter a valid email address.")
    );
}
