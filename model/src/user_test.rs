use super::*;

#[test]
fn role_serializes_capitalized() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "Admin");
    assert_eq!(serde_json::to_value(Role::Guest).unwrap(), "Guest");
}

#[test]
fn unknown_role_reads_as_user() {
    let role: Role = serde_json::from_value(serde_json::json!("Superuser")).unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn role_from_str_is_case_insensitive() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!(" GUEST ".parse::<Role>(), Ok(Role::Guest));
    assert!("root".parse::<Role>().is_err());
}

#[test]
fn registration_defaults_role_to_user() {
    let reg: Registration = serde_json::from_value(serde_json::json!({
        "username": "dave",
        "password": "pw"
    }))
    .unwrap();
    assert_eq!(reg.role, Role::User);
}

#[test]
fn credentials_require_both_fields() {
    assert_eq!(
        Credentials::normalized("  erin ", "secret"),
        Some(Credentials { username: "erin".to_owned(), password: "secret".to_owned() })
    );
    assert_eq!(Credentials::normalized("   ", "secret"), None);
    assert_eq!(Credentials::normalized("erin", ""), None);
}

#[test]
fn access_token_defaults_token_type() {
    let token: AccessToken = serde_json::from_value(serde_json::json!({ "access_token": "abc" })).unwrap();
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn user_summary_tolerates_null_email() {
    let users: Vec<UserSummary> = serde_json::from_value(serde_json::json!([
        { "id": 1, "username": "a", "email": null },
        { "id": 2, "username": "b" }
    ]))
    .unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.email.is_none()));
}

#[test]
fn user_count_accepts_both_shapes() {
    let bare: UserCount = serde_json::from_value(serde_json::json!(4)).unwrap();
    let wrapped: UserCount = serde_json::from_value(serde_json::json!({ "count": 9 })).unwrap();
    assert_eq!(bare.count, 4);
    assert_eq!(wrapped.count, 9);
    assert_eq!(serde_json::to_value(wrapped).unwrap(), serde_json::json!({ "count": 9 }));
}

#[test]
fn credentials_form_body_is_url_encoded() {
    let credentials = Credentials::normalized("ann lee", "p&ss=1").unwrap();
    assert_eq!(credentials.form_body(), "username=ann%20lee&password=p%26ss%3D1");
}
