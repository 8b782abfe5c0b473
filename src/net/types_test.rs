use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_lowercase_wire_strings() {
    let role: Role = serde_json::from_str("\"citizen\"").expect("citizen");
    assert_eq!(role, Role::Citizen);
    let role: Role = serde_json::from_str("\"department\"").expect("department");
    assert_eq!(role, Role::Department);
    let role: Role = serde_json::from_str("\"admin\"").expect("admin");
    assert_eq!(role, Role::Admin);
}

#[test]
fn unknown_role_is_rejected() {
    let result = serde_json::from_str::<Role>("\"superuser\"");
    assert!(result.is_err());
}

#[test]
fn role_round_trips_through_display() {
    for role in [Role::Citizen, Role::Department, Role::Admin] {
        let parsed: Role =
            serde_json::from_str(&format!("\"{role}\"")).expect("display spelling");
        assert_eq!(parsed, role);
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_with_nested_department() {
    let value = serde_json::json!({
        "id": "4b9f6f9e-0f7a-4b7f-9a3e-1f2d3c4b5a69",
        "name": "Asha",
        "email": "asha@city.gov",
        "role": "department",
        "created_at": "2025-03-01T10:00:00Z",
        "department": {
            "id": "0d1e2f30-4a5b-6c7d-8e9f-a0b1c2d3e4f5",
            "name": "Water Supply",
            "description": "Pipes and pumps"
        },
        "profile_picture": "https://example.com/asha.png"
    });

    let user: User = serde_json::from_value(value).expect("full user");
    assert_eq!(user.role, Role::Department);
    let department = user.department.expect("department");
    assert_eq!(department.name, "Water Supply");
    assert_eq!(department.description.as_deref(), Some("Pipes and pumps"));
}

#[test]
fn user_optional_fields_default_to_absent() {
    let value = serde_json::json!({
        "id": "4b9f6f9e-0f7a-4b7f-9a3e-1f2d3c4b5a69",
        "name": "Ravi",
        "email": "ravi@example.com",
        "role": "citizen",
        "created_at": "2025-03-01T10:00:00Z"
    });

    let user: User = serde_json::from_value(value).expect("minimal user");
    assert!(user.department.is_none());
    assert!(user.profile_picture.is_none());
}

#[test]
fn user_with_unknown_role_is_rejected() {
    let value = serde_json::json!({
        "id": "4b9f6f9e-0f7a-4b7f-9a3e-1f2d3c4b5a69",
        "name": "Ravi",
        "email": "ravi@example.com",
        "role": "mayor",
        "created_at": "2025-03-01T10:00:00Z"
    });

    assert!(serde_json::from_value::<User>(value).is_err());
}
