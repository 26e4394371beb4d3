use super::*;
use async_trait::async_trait;
use client_core::{GenerateError, GenerationReply};
use shared::{
    domain::Tone,
    error::{ApiError, ErrorCode},
    protocol::{GenerationRequest, GenerationResult},
};
use std::time::Duration;

struct CannedService {
    status: u16,
    result: Option<GenerationResult>,
}

#[async_trait]
impl GenerationService for CannedService {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationReply, GenerateError> {
        match &self.result {
            Some(result) => Ok(GenerationReply {
                status: self.status,
                result: result.clone(),
            }),
            None => Err(GenerateError::Api(ApiError::new(
                ErrorCode::from_status(self.status),
                "upstream unavailable",
            ))),
        }
    }
}

fn request() -> GenerationRequest {
    GenerationRequest::new("X", "Y", Tone::new("sad"))
}

#[tokio::test]
async fn generate_command_settles_with_success_outcome() {
    let service = CannedService {
        status: 200,
        result: Some(GenerationResult::succeeded("X", vec!["A".to_string()])),
    };

    let event = handle_command(&service, BackendCommand::Generate { request: request() }).await;

    assert_eq!(
        event,
        UiEvent::GenerationSettled {
            request: request(),
            outcome: GenerationOutcome::Generated {
                character: "X".to_string(),
                headcanons: vec!["A".to_string()],
            },
        }
    );
}

#[tokio::test]
async fn service_error_settles_as_transport_failure() {
    let service = CannedService {
        status: 502,
        result: None,
    };

    let event = handle_command(&service, BackendCommand::Generate { request: request() }).await;

    match event {
        UiEvent::GenerationSettled { outcome, .. } => {
            assert!(matches!(outcome, GenerationOutcome::TransportFailed(_)));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn launched_worker_answers_queued_commands() {
    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
    let (ui_tx, ui_rx) = crossbeam_channel::bounded(16);
    launch(
        CannedService {
            status: 400,
            result: Some(GenerationResult::failed("bad input")),
        },
        cmd_rx,
        ui_tx,
    );

    cmd_tx
        .send(BackendCommand::Generate { request: request() })
        .expect("queue");

    let settled = std::iter::from_fn(|| ui_rx.recv_timeout(Duration::from_secs(5)).ok())
        .find(|event| matches!(event, UiEvent::GenerationSettled { .. }))
        .expect("settled event");
    match settled {
        UiEvent::GenerationSettled { outcome, .. } => {
            assert_eq!(outcome.failure_message(), Some("bad input"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
