use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_credentials_serialize_expected_fields() {
    let creds = RegisterCredentials {
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p".to_owned(),
    };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"username": "alice", "email": "a@x.com", "password": "p"})
    );
}

#[test]
fn login_credentials_serialize_expected_fields() {
    let creds = LoginCredentials { email: "a@x.com".to_owned(), password: "p".to_owned() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({"email": "a@x.com", "password": "p"}));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = LoginCredentials { email: "a@x.com".to_owned(), password: "hunter2".to_owned() };
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@x.com"));
    assert!(!debug.contains("hunter2"));
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_reads_camel_case_admin_flag() {
    let result =
        AuthResult::parse(200, r#"{"success":true,"username":"alice","isAdmin":true}"#).unwrap();
    assert!(result.success);
    assert_eq!(result.username.as_deref(), Some("alice"));
    assert_eq!(result.is_admin, Some(true));
    assert_eq!(result.message, None);
}

#[test]
fn parse_rejects_non_json_body() {
    let err = AuthResult::parse(502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, AuthError::MalformedResponse { status: 502, .. }));
}

#[test]
fn parse_body_without_success_flag_reads_as_failure() {
    let result = AuthResult::parse(401, r#"{"message":"Invalid email or password."}"#).unwrap();
    assert!(!result.success);
    assert_eq!(
        result.into_login_outcome(401).unwrap(),
        LoginOutcome::Rejected { message: Some("Invalid email or password.".to_owned()) }
    );
}

#[test]
fn parse_rejects_json_that_is_not_an_object() {
    let err = AuthResult::parse(200, r#""ok""#).unwrap_err();
    assert!(matches!(err, AuthError::MalformedResponse { status: 200, .. }));
}

// =============================================================
// Register validation
// =============================================================

#[test]
fn register_success_requires_ok_status_and_flag() {
    let result = AuthResult::parse(201, r#"{"success":true}"#).unwrap();
    assert_eq!(result.into_register_outcome(201), RegisterOutcome::Registered);
}

#[test]
fn register_success_flag_with_error_status_is_rejected() {
    let result = AuthResult::parse(409, r#"{"success":true,"message":"taken"}"#).unwrap();
    assert_eq!(
        result.into_register_outcome(409),
        RegisterOutcome::Rejected { message: Some("taken".to_owned()) }
    );
}

#[test]
fn register_blank_message_is_dropped() {
    let result = AuthResult::parse(400, r#"{"success":false,"message":"  "}"#).unwrap();
    assert_eq!(result.into_register_outcome(400), RegisterOutcome::Rejected { message: None });
}

// =============================================================
// Login validation
// =============================================================

#[test]
fn login_success_builds_session_record() {
    let result =
        AuthResult::parse(200, r#"{"success":true,"username":"bob","isAdmin":false}"#).unwrap();
    assert_eq!(
        result.into_login_outcome(200).unwrap(),
        LoginOutcome::Authenticated(SessionRecord { username: "bob".to_owned(), is_admin: false })
    );
}

#[test]
fn login_missing_admin_flag_defaults_to_false() {
    let result = AuthResult::parse(200, r#"{"success":true,"username":"bob"}"#).unwrap();
    let LoginOutcome::Authenticated(record) = result.into_login_outcome(200).unwrap() else {
        panic!("expected authenticated outcome");
    };
    assert!(!record.is_admin);
}

#[test]
fn login_success_without_username_is_malformed() {
    let result = AuthResult::parse(200, r#"{"success":true}"#).unwrap();
    let err = result.into_login_outcome(200).unwrap_err();
    assert!(matches!(err, AuthError::MalformedResponse { status: 200, .. }));
}

#[test]
fn login_failure_keeps_server_message() {
    let result =
        AuthResult::parse(401, r#"{"success":false,"message":"Invalid email or password."}"#)
            .unwrap();
    assert_eq!(
        result.into_login_outcome(401).unwrap(),
        LoginOutcome::Rejected { message: Some("Invalid email or password.".to_owned()) }
    );
}

#[test]
fn login_failure_without_username_is_not_malformed() {
    let result = AuthResult::parse(200, r#"{"success":false}"#).unwrap();
    assert_eq!(result.into_login_outcome(200).unwrap(), LoginOutcome::Rejected { message: None });
}

#[test]
fn success_status_range() {
    assert!(is_success_status(200));
    assert!(is_success_status(299));
    assert!(!is_success_status(199));
    assert!(!is_success_status(300));
    assert!(!is_success_status(500));
}
