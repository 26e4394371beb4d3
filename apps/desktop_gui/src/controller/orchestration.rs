//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use thiserror::Error;

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("UI command queue is full; please retry")]
    QueueFull,
    #[error("Backend command processor disconnected (possible startup/runtime failure)")]
    Disconnected,
}

pub trait CommandSink {
    fn dispatch(&self, cmd: BackendCommand) -> Result<(), DispatchError>;
}

impl CommandSink for Sender<BackendCommand> {
    fn dispatch(&self, cmd: BackendCommand) -> Result<(), DispatchError> {
        let cmd_name = cmd.name();
        tracing::debug!(command = cmd_name, "queueing ui->backend command");
        match self.try_send(cmd) {
            Ok(()) => {
                tracing::debug!(command = cmd_name, "queued ui->backend command");
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                tracing::warn!(command = cmd_name, "ui->backend command queue is full");
                Err(DispatchError::QueueFull)
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
                Err(DispatchError::Disconnected)
            }
        }
    }
}
