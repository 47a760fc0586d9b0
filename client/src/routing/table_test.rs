use super::*;

// =============================================================
// Lookup
// =============================================================

#[test]
fn resolves_every_static_route_to_its_view() {
    let table = routes();
    for descriptor in ROUTES.iter().filter(|d| !d.pattern.contains(':')) {
        let found = table.resolve(descriptor.pattern).expect(descriptor.pattern);
        assert_eq!(found.descriptor.view, descriptor.view, "{}", descriptor.pattern);
        assert!(found.params.is_empty());
    }
}

#[test]
fn root_resolves_to_landing() {
    let found = routes().resolve("/").unwrap();
    assert_eq!(found.descriptor.view, View::Landing);
    assert_eq!(found.descriptor.required, RequiredRole::None);
}

#[test]
fn pet_detail_captures_id() {
    let found = routes().resolve("/pet/42").unwrap();
    assert_eq!(found.descriptor.view, View::PetDetail);
    assert_eq!(found.params.get("id"), Some("42"));
    assert_eq!(found.params.get("missing"), None);
}

#[test]
fn trailing_slash_query_and_fragment_are_ignored() {
    assert_eq!(routes().resolve("/admin/users/").unwrap().descriptor.view, View::AdminUsers);
    assert_eq!(routes().resolve("/browse-pets?type=dog").unwrap().descriptor.view, View::BrowsePets);
    assert_eq!(routes().resolve("/reviews#latest").unwrap().descriptor.view, View::Reviews);
}

#[test]
fn unknown_paths_do_not_match() {
    assert!(routes().resolve("/nowhere").is_none());
    assert!(routes().resolve("/pet").is_none());
    assert!(routes().resolve("/pet/1/extra").is_none());
    assert!(routes().resolve("/admin/unknown").is_none());
}

#[test]
fn matching_is_case_sensitive() {
    assert!(routes().resolve("/Admin").is_none());
}

#[test]
fn first_matching_route_wins() {
    let table = RouteTable::new(&[
        RouteDescriptor::new("/pet/:id", View::PetDetail, RequiredRole::Standard),
        RouteDescriptor::new("/pet/new", View::BrowsePets, RequiredRole::Standard),
    ]);
    assert_eq!(table.resolve("/pet/new").unwrap().descriptor.view, View::PetDetail);
}

// =============================================================
// Table contents
// =============================================================

#[test]
fn admin_section_requires_admin() {
    for descriptor in routes().descriptors().filter(|d| d.pattern.starts_with(ADMIN_ROUTE)) {
        assert_eq!(descriptor.required, RequiredRole::Admin, "{}", descriptor.pattern);
        assert_eq!(descriptor.view.section(), Section::Admin);
    }
}

#[test]
fn only_auth_and_landing_are_public() {
    let public: Vec<&str> = routes()
        .descriptors()
        .filter(|d| d.required == RequiredRole::None)
        .map(|d| d.pattern)
        .collect();
    assert_eq!(public, vec![LOGIN_ROUTE, DEFAULT_ROUTE]);
}

#[test]
fn user_section_requires_standard_role() {
    let found = routes().resolve("/my-applications").unwrap();
    assert_eq!(found.descriptor.required, RequiredRole::Standard);
    assert_eq!(found.descriptor.view.section(), Section::User);
}

#[test]
fn table_has_seventeen_routes() {
    assert_eq!(routes().descriptors().count(), 17);
}

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_strips_noise() {
    assert_eq!(normalize("/admin/?tab=1"), "/admin");
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("//pet//3/"), "/pet/3");
}

#[test]
fn compiled_table_is_built_once_and_shared() {
    assert!(std::ptr::eq(routes(), routes()));
    assert_eq!(routes().descriptors().count(), ROUTES.len());
}
