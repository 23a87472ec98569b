use crate::{Role, SignupForm, UserForm};

fn signup(password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        full_name: "Jane Doe".into(),
        email: "jane@eport.cloud".into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

#[test]
fn given_matching_passwords_when_validated_then_ok() {
    assert!(signup("secret1", "secret1").validate().is_ok());
}

#[test]
fn given_mismatched_passwords_when_validated_then_confirm_field_error() {
    let err = signup("secret1", "secret2").validate().unwrap_err();

    assert_eq!(err.field(), Some("confirm_password"));
    assert_eq!(err.message(), "Passwords do not match");
}

#[test]
fn given_short_password_when_validated_then_password_field_error() {
    let err = signup("abc", "abc").validate().unwrap_err();

    assert_eq!(err.field(), Some("password"));
    assert_eq!(err.message(), "Password must be at least 6 characters");
}

#[test]
fn given_user_form_without_password_when_creating_then_rejected() {
    let form = UserForm {
        email: "new@eport.cloud".into(),
        full_name: "New".into(),
        ..UserForm::default()
    };

    let err = form.validate_create().unwrap_err();

    assert_eq!(err.field(), Some("password"));
}

#[test]
fn given_user_form_when_updating_then_password_not_required() {
    let form = UserForm {
        email: "new@eport.cloud".into(),
        full_name: "New".into(),
        role: Role::Admin,
        is_active: false,
        ..UserForm::default()
    };

    let changes = form.validate_update().unwrap();

    assert_eq!(changes.role, Some(Role::Admin));
    assert_eq!(changes.is_active, Some(false));
    let json = serde_json::to_value(&changes).unwrap();
    assert!(json.get("password").is_none());
}

#[test]
fn given_email_without_at_when_validated_then_rejected() {
    let form = UserForm {
        email: "nobody".into(),
        full_name: "Nobody".into(),
        password: "secret1".into(),
        ..UserForm::default()
    };

    assert_eq!(form.validate_create().unwrap_err().field(), Some("email"));
}
