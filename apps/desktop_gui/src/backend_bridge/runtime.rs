//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{GenerationOutcome, GenerationService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

pub fn launch<S>(service: S, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>)
where
    S: GenerationService + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::backend_startup(
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                drain_without_runtime(&cmd_rx, &ui_tx, &err.to_string());
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                let event = handle_command(&service, cmd).await;
                deliver(&ui_tx, event);
            }
            tracing::info!("backend command queue closed; worker exiting");
        });
    });
}

pub async fn handle_command<S>(service: &S, cmd: BackendCommand) -> UiEvent
where
    S: GenerationService + ?Sized,
{
    match cmd {
        BackendCommand::Generate { request } => {
            tracing::info!(character = %request.character, "backend: generate");
            let reply = service.generate(&request).await;
            if let Err(err) = &reply {
                tracing::error!("backend: generate failed: {err}");
            }
            let outcome = GenerationOutcome::resolve(&request, reply);
            UiEvent::GenerationSettled { request, outcome }
        }
    }
}

/// Settles every queued command as a transport failure so the UI never
/// waits on a worker that could not start.
fn drain_without_runtime(cmd_rx: &Receiver<BackendCommand>, ui_tx: &Sender<UiEvent>, reason: &str) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Generate { request } => deliver(
                ui_tx,
                UiEvent::GenerationSettled {
                    request,
                    outcome: GenerationOutcome::TransportFailed(format!(
                        "backend runtime unavailable: {reason}"
                    )),
                },
            ),
        }
    }
}

fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::warn!("ui event queue disconnected; dropping backend event");
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
