use crate::{Identity, NewIdentity, Role};

use serde_json::json;

#[test]
fn given_row_with_password_column_when_deserialized_then_password_is_ignored() {
    let row = json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "email": "user@eport.cloud",
        "full_name": "Regular User",
        "password": "user123",
        "role": "user",
        "is_active": true,
        "created_at": "2024-01-15T10:00:00+00:00"
    });

    let identity: Identity = serde_json::from_value(row).unwrap();

    assert_eq!(identity.email, "user@eport.cloud");
    assert_eq!(identity.role, Role::User);
    let reserialized = serde_json::to_value(&identity).unwrap();
    assert!(reserialized.get("password").is_none());
}

#[test]
fn given_null_role_when_deserialized_then_defaults_to_user() {
    let row = json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "email": "someone@eport.cloud",
        "full_name": "Someone",
        "role": null,
        "is_active": true,
        "created_at": "2024-01-15T10:00:00+00:00"
    });

    let identity: Identity = serde_json::from_value(row).unwrap();

    assert_eq!(identity.role, Role::User);
}

#[test]
fn given_user_when_promoted_then_role_is_admin() {
    let identity = crate::tests::identity("admin@eport.cloud", Role::User);

    let promoted = identity.promoted();

    assert!(promoted.is_admin());
}

#[test]
fn given_signup_when_built_then_active_user_role() {
    let new = NewIdentity::signup("Jane".into(), "jane@x.io".into(), "secret1".into());

    assert_eq!(new.role, Role::User);
    assert!(new.is_active);
}
