//! Per-window generation state: the in-flight guard and the last request
//! that produced results.

use shared::protocol::GenerationRequest;

use crate::GenerationOutcome;

#[derive(Debug, Default)]
pub struct GenerationSession {
    in_flight: Option<GenerationRequest>,
    last_request: Option<GenerationRequest>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_request(&self) -> Option<&GenerationRequest> {
        self.last_request.as_ref()
    }

    pub fn in_flight(&self) -> Option<&GenerationRequest> {
        self.in_flight.as_ref()
    }

    /// Marks `request` as in flight. Returns `false` without touching state
    /// when another request has not settled yet.
    pub fn try_begin(&mut self, request: GenerationRequest) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some(request);
        true
    }

    /// Clears the in-flight guard. A successful outcome also makes the
    /// settled request the one `regenerate` replays.
    pub fn settle(&mut self, outcome: &GenerationOutcome) -> Option<GenerationRequest> {
        let request = self.in_flight.take()?;
        if outcome.is_success() {
            self.last_request = Some(request.clone());
        }
        Some(request)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
