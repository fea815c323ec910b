use std::path::Path;

use chat_login::state::session::SessionRecord;

use super::*;

fn alice(is_admin: bool) -> SessionRecord {
    SessionRecord { username: "alice".to_owned(), is_admin }
}

// =============================================================================
// finish — submit outcome to exit result
// =============================================================================

#[test]
fn finish_success_outcomes_exit_ok() {
    let state = Path::new("state.json");
    assert!(finish(SubmitOutcome::Registered, state).is_ok());
    assert!(finish(SubmitOutcome::LoggedIn(alice(false)), state).is_ok());
}

#[test]
fn finish_failure_outcomes_map_to_cli_errors() {
    let state = Path::new("/tmp/chat-login/state.json");
    let cases = [
        (SubmitOutcome::Rejected("Invalid email or password.".to_owned()), "Invalid email or password."),
        (SubmitOutcome::NetworkError, "network error: could not reach the server"),
        (SubmitOutcome::MalformedResponse, "unexpected response from the server"),
        (SubmitOutcome::SessionNotSaved, "could not save session to /tmp/chat-login/state.json"),
        (SubmitOutcome::Ignored, "request already in flight"),
    ];
    for (outcome, expected) in cases {
        let label = format!("{outcome:?}");
        let err = finish(outcome, state).expect_err(&label);
        assert_eq!(err.to_string(), expected, "for {label}");
    }
}

#[test]
fn finish_rejection_keeps_server_message_variant() {
    let err = finish(SubmitOutcome::Rejected("Username taken.".to_owned()), Path::new("s.json")).unwrap_err();
    assert!(matches!(err, CliError::Rejected(message) if message == "Username taken."));
}

// =============================================================================
// status_line
// =============================================================================

#[test]
fn status_line_reports_role() {
    assert_eq!(status_line(&AuthStatus::Authenticated(alice(true))), "logged in as alice (admin)");
    assert_eq!(status_line(&AuthStatus::Authenticated(alice(false))), "logged in as alice (user)");
}

#[test]
fn status_line_anonymous() {
    assert_eq!(status_line(&AuthStatus::Anonymous), "not logged in");
}
