use hr_portal::models::{RouteEntry, User};
use hr_portal::routes::{self, RouteTable};

#[test]
fn effective_role_prefers_primary_field() {
    let user = User {
        role: Some("hr".to_string()),
        user_type: Some("employee".to_string()),
        ..User::default()
    };
    assert_eq!(user.effective_role(), Some("hr"));
}

#[test]
fn effective_role_falls_back_to_legacy_alias() {
    let user = User {
        role: None,
        user_type: Some("employee".to_string()),
        ..User::default()
    };
    assert_eq!(user.effective_role(), Some("employee"));
}

#[test]
fn effective_role_is_absent_when_neither_field_is_set() {
    assert_eq!(User::default().effective_role(), None);
}

#[test]
fn user_deserializes_legacy_user_type_key() {
    // The legacy field lives under `userType` on the wire.
    let user: User = serde_json::from_str(
        r#"{
            "id": "8f7f4f86-9d2e-4ac1-9e2a-0f2c2b6a8a11",
            "email": "old@example.com",
            "userType": "hr"
        }"#,
    )
    .unwrap();

    assert_eq!(user.role, None);
    assert_eq!(user.user_type.as_deref(), Some("hr"));
    assert_eq!(user.effective_role(), Some("hr"));
}

#[test]
fn user_ignores_unknown_profile_fields() {
    // Persisted records carry profile fields this layer does not model.
    let user: User = serde_json::from_str(
        r#"{
            "id": "8f7f4f86-9d2e-4ac1-9e2a-0f2c2b6a8a11",
            "email": "new@example.com",
            "role": "employee",
            "displayName": "New Person",
            "avatarUrl": null
        }"#,
    )
    .unwrap();

    assert_eq!(user.effective_role(), Some("employee"));
}

#[test]
fn route_table_rejects_duplicate_paths() {
    let result = RouteTable::new(vec![
        RouteEntry::public("/", "Home"),
        RouteEntry::protected("/", "HrDashboard", "hr"),
    ]);

    let err = result.unwrap_err();
    assert!(err.contains("duplicate route path"));
    assert!(err.contains('/'));
}

#[test]
fn route_table_finds_entries_by_exact_path() {
    let table = RouteTable::new(vec![
        RouteEntry::public("/", "Home"),
        RouteEntry::protected("/employees", "EmployeeList", "hr"),
    ])
    .unwrap();

    assert_eq!(table.find("/employees").map(|e| e.view.as_str()), Some("EmployeeList"));
    assert!(table.find("/employees/").is_none());
    assert!(table.find("/missing").is_none());
}

#[test]
fn route_table_loads_from_json() {
    let table = RouteTable::from_json(
        r#"[
            {"path": "/", "view": "Home"},
            {"path": "/employees", "view": "EmployeeList", "required_role": "hr"}
        ]"#,
    )
    .unwrap();

    assert_eq!(table.entries().len(), 2);
    // A missing required_role deserializes as a public route.
    assert_eq!(table.find("/").unwrap().required_role, None);
    assert_eq!(
        table.find("/employees").unwrap().required_role.as_deref(),
        Some("hr")
    );
}

#[test]
fn route_table_from_json_rejects_garbage() {
    assert!(RouteTable::from_json("not json").is_err());
    assert!(RouteTable::from_json(r#"{"path": "/"}"#).is_err());
}

#[test]
fn default_table_is_valid_and_covers_redirect_targets() {
    let table = routes::default_table();

    // The configured redirect destinations must exist and be public, or
    // denied navigations would dead-end.
    for path in ["/", "/login", "/unauthorized"] {
        let entry = table.find(path).expect("redirect target route missing");
        assert!(entry.required_role.is_none(), "{path} must be public");
    }

    // And the portal's protected views carry their roles.
    assert_eq!(
        table.find("/employees").unwrap().required_role.as_deref(),
        Some("hr")
    );
    assert_eq!(
        table.find("/my-leaves").unwrap().required_role.as_deref(),
        Some("employee")
    );
}
