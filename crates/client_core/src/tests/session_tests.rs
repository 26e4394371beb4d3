use super::*;
use shared::{domain::Tone, error::ApiError, error::ErrorCode};

fn request(character: &str) -> GenerationRequest {
    GenerationRequest::new(character, "Y", Tone::new("sad"))
}

fn generated() -> GenerationOutcome {
    GenerationOutcome::Generated {
        character: "X".to_string(),
        headcanons: vec!["A".to_string()],
    }
}

#[test]
fn second_begin_is_rejected_while_in_flight() {
    let mut session = GenerationSession::new();
    assert!(session.try_begin(request("X")));
    assert!(!session.try_begin(request("Other")));
    assert_eq!(session.in_flight(), Some(&request("X")));
}

#[test]
fn success_records_last_request_and_clears_flag() {
    let mut session = GenerationSession::new();
    session.try_begin(request("X"));

    let settled = session.settle(&generated());

    assert_eq!(settled, Some(request("X")));
    assert!(!session.is_generating());
    assert_eq!(session.last_request(), Some(&request("X")));
}

#[test]
fn failure_clears_flag_and_keeps_previous_last_request() {
    let mut session = GenerationSession::new();
    session.try_begin(request("X"));
    session.settle(&generated());

    session.try_begin(request("Broken"));
    session.settle(&GenerationOutcome::Rejected(ApiError::new(
        ErrorCode::Validation,
        "bad input",
    )));
    assert!(!session.is_generating());
    assert_eq!(session.last_request(), Some(&request("X")));

    session.try_begin(request("Offline"));
    session.settle(&GenerationOutcome::TransportFailed("refused".to_string()));
    assert!(!session.is_generating());
    assert!(session.try_begin(request("Retry")));
}

#[test]
fn settle_without_begin_is_ignored() {
    let mut session = GenerationSession::new();
    assert_eq!(session.settle(&generated()), None);
    assert!(session.last_request().is_none());
}
