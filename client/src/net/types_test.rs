use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_as_server_role_names() {
    assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_accepts_standard_alias() {
    let role: Role = serde_json::from_str("\"standard\"").unwrap();
    assert_eq!(role, Role::Standard);
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
}

#[test]
fn role_is_admin() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::Standard.is_admin());
}

// =============================================================
// Principal
// =============================================================

#[test]
fn principal_parses_server_payload() {
    let json = r#"{"id":7,"username":"alice","name":"Alice","email":"a@example.com","role":"admin"}"#;
    let principal: Principal = serde_json::from_str(json).unwrap();
    assert_eq!(principal.id, 7);
    assert_eq!(principal.username, "alice");
    assert_eq!(principal.role, Role::Admin);
}

#[test]
fn principal_email_defaults_when_missing() {
    let json = r#"{"id":1,"username":"bob","name":"Bob","role":"user"}"#;
    let principal: Principal = serde_json::from_str(json).unwrap();
    assert!(principal.email.is_empty());
    assert_eq!(principal.role, Role::Standard);
}

#[test]
fn security_log_entry_parses_nullable_fields() {
    let json = r#"{"id":3,"action":"login_failed","user_id":null,"details":"unknown user","timestamp":"2024-05-01T10:00:00Z","ip_address":null}"#;
    let entry: SecurityLogEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.action, "login_failed");
    assert!(entry.user_id.is_none());
    assert_eq!(entry.details.as_deref(), Some("unknown user"));
}

// =============================================================
// Pet catalog
// =============================================================

#[test]
fn pet_parses_type_field_and_optional_extras() {
    let json = r#"{"id":2,"name":"Whiskers","type":"cat","breed":"Siamese","age":2,"gender":"female","status":"available","description":"Chatty"}"#;
    let pet: Pet = serde_json::from_str(json).unwrap();
    assert_eq!(pet.kind, PetType::Cat);
    assert_eq!(pet.status, PetStatus::Available);
    assert!(pet.image_url.is_none());
    assert!(pet.traits.is_empty());
}

#[test]
fn pet_enums_parse_their_wire_names() {
    for kind in PetType::ALL {
        assert_eq!(PetType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(PetStatus::parse("fostered"), Some(PetStatus::Fostered));
    assert_eq!(PetStatus::parse(""), None);
}

#[test]
fn empty_filter_has_no_query() {
    assert!(PetFilter::default().query_pairs().is_empty());
    let blank = PetFilter { breed: "   ".to_owned(), ..PetFilter::default() };
    assert!(blank.query_pairs().is_empty());
}

#[test]
fn filter_query_uses_server_parameter_names() {
    let filter = PetFilter {
        kind: Some(PetType::Dog),
        status: Some(PetStatus::Adopted),
        breed: " Beagle ".to_owned(),
    };
    assert_eq!(
        filter.query_pairs(),
        [("type", "dog".to_owned()), ("status", "adopted".to_owned()), ("breed", "Beagle".to_owned())]
    );
}

// =============================================================
// Admin console
// =============================================================

#[test]
fn user_update_omits_unchanged_fields() {
    let update = UserUpdate { role: Some(Role::Admin), ..UserUpdate::default() };
    assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"role":"admin"}"#);
}

#[test]
fn new_account_sends_wire_role() {
    let account = NewAccount {
        username: "casey".to_owned(),
        password: "hunter22".to_owned(),
        email: "casey@example.com".to_owned(),
        name: "Casey".to_owned(),
        role: Role::Standard,
    };
    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(json["role"], "user");
}

#[test]
fn dashboard_stats_parse_with_recent_events() {
    let json = r#"{"active_users":3,"admins":1,"total_pets":6,"available_pets":4,"fostered_pets":1,"adopted_pets":1,
        "recent_security_events":[{"id":1,"action":"login","user_id":1,"details":null,"timestamp":"2024-05-01T10:00:00Z","ip_address":null}]}"#;
    let stats: DashboardStats = serde_json::from_str(json).unwrap();
    assert_eq!(stats.active_users, 3);
    assert_eq!(stats.recent_security_events.len(), 1);
}
