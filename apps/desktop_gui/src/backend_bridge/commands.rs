//! Backend commands queued from UI to backend worker.

use shared::protocol::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Generate { request: GenerationRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Generate { .. } => "generate",
        }
    }
}
