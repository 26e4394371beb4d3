//! UI/backend events and error modeling for the generator window.

use client_core::GenerationOutcome;
use shared::{error::ErrorCode, protocol::GenerationRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Info(String),
    GenerationSettled {
        request: GenerationRequest,
        outcome: GenerationOutcome,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    RateLimited,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Generate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    /// Raised when the backend worker cannot build its runtime.
    pub fn backend_startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Transport,
            context: UiErrorContext::BackendStartup,
            message: message.into(),
        }
    }

    pub fn from_outcome(outcome: &GenerationOutcome) -> Option<Self> {
        let category = match outcome {
            GenerationOutcome::Generated { .. } => return None,
            GenerationOutcome::Rejected(err) => match err.code {
                ErrorCode::Validation => UiErrorCategory::Validation,
                ErrorCode::RateLimited => UiErrorCategory::RateLimited,
                ErrorCode::Internal | ErrorCode::Unknown => UiErrorCategory::Unknown,
            },
            GenerationOutcome::TransportFailed(_) => UiErrorCategory::Transport,
        };
        Some(Self {
            category,
            context: UiErrorContext::Generate,
            message: outcome.failure_message().unwrap_or_default().to_string(),
        })
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Connection",
        UiErrorCategory::Validation => "Input",
        UiErrorCategory::RateLimited => "Rate limit",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ApiError;

    #[test]
    fn startup_failure_is_a_transport_error() {
        let err = UiError::backend_startup("backend worker startup failure: no runtime");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
    }

    #[test]
    fn rejected_outcome_keeps_its_status_category() {
        let outcome = GenerationOutcome::Rejected(ApiError::new(ErrorCode::RateLimited, "slow down"));
        let err = UiError::from_outcome(&outcome).expect("failure");
        assert_eq!(err.category(), UiErrorCategory::RateLimited);
        assert_eq!(err.message(), "slow down");
        assert_eq!(err_label(err.category()), "Rate limit");
    }
}
